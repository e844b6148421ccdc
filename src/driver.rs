//! Frame driver
//!
//! Owns the session, the staged input and the single repeating frame
//! callback. Each frame: measure the delta, apply staged intents, run fixed
//! simulation ticks while Running, render, then decide whether to ask for
//! another frame.

use crate::consts::*;
use crate::platform::{FrameScheduler, FrameView, InputQueue, Intent, Renderer};
use crate::sim::{self, GamePhase, GameState};

/// What the driver decided at the end of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Another frame has been requested
    Continue,
    /// Round over; no frames until a restart is staged
    Halt,
}

pub struct FrameDriver<S: FrameScheduler> {
    state: GameState,
    inputs: InputQueue,
    scheduler: S,
    autopilot: bool,
    /// Timestamp of the previous frame; `None` means the next delta is zero
    last_time: Option<f64>,
    accumulator: f32,
    frame_requested: bool,
}

impl<S: FrameScheduler> FrameDriver<S> {
    pub fn new(state: GameState, scheduler: S) -> Self {
        Self {
            state,
            inputs: InputQueue::default(),
            scheduler,
            autopilot: false,
            last_time: None,
            accumulator: 0.0,
            frame_requested: false,
        }
    }

    /// Register the first frame callback
    pub fn start(&mut self) {
        log::info!("Starting session (seed {})", self.state.seed);
        self.request_frame();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn set_autopilot(&mut self, on: bool) {
        if self.autopilot != on {
            log::info!("Autopilot: {}", on);
        }
        self.autopilot = on;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }

    /// Stage an intent for the next frame.
    ///
    /// After game over only a restart is accepted; it wakes the frame chain
    /// back up, and the restart itself still happens inside the next frame.
    pub fn stage(&mut self, intent: Intent) {
        if self.state.phase == GamePhase::GameOver {
            if intent != Intent::Restart {
                log::trace!("Dropping {:?} after game over", intent);
                return;
            }
            self.inputs.push(intent);
            self.request_frame();
            return;
        }
        self.inputs.push(intent);
    }

    fn request_frame(&mut self) {
        if !self.frame_requested {
            self.frame_requested = true;
            self.scheduler.request_frame();
        }
    }

    /// Run one frame at monotonic time `now_ms`
    pub fn frame<R: Renderer + ?Sized>(&mut self, now_ms: f64, renderer: &mut R) -> FrameRequest {
        self.frame_requested = false;

        let dt = match self.last_time.replace(now_ms) {
            Some(prev) => ((now_ms - prev) / 1000.0) as f32,
            None => 0.0,
        };
        let dt = dt.clamp(0.0, MAX_FRAME_DT);

        let input = self.inputs.take(self.autopilot);
        sim::apply_input(&mut self.state, &input);

        match self.state.phase {
            GamePhase::Running => self.simulate(dt),
            // Paused time never reaches the simulation
            GamePhase::Paused => self.accumulator = 0.0,
            GamePhase::GameOver => {}
        }

        renderer.render(&FrameView::new(&self.state));
        self.state.events.clear();

        if self.state.phase == GamePhase::GameOver {
            self.last_time = None;
            self.accumulator = 0.0;
            log::info!("Frame loop halted, waiting for restart");
            FrameRequest::Halt
        } else {
            self.request_frame();
            FrameRequest::Continue
        }
    }

    fn simulate(&mut self, dt: f32) {
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            sim::step(&mut self.state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            if self.state.phase != GamePhase::Running {
                break;
            }
        }

        // Drop backlog we couldn't get through
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
    }
}
