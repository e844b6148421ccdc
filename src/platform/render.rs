//! Renderer seam
//!
//! Renderers get a read-only [`FrameView`] once per frame. They can't reach
//! the simulation through it.

use crate::sim::{Animal, GameEvent, GamePhase, GameState, Route};

/// Everything a renderer may look at for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub animals: &'a [Animal],
    pub score: u32,
    pub missed: u32,
    pub phase: GamePhase,
    pub gate: Route,
    /// Events since the previous frame
    pub events: &'a [GameEvent],
    /// For turning poof elapsed time into fade/shrink progress
    pub poof_duration: f32,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            animals: &state.animals,
            score: state.score,
            missed: state.missed,
            phase: state.phase,
            gate: state.gate,
            events: &state.events,
            poof_duration: state.tuning.poof_duration,
        }
    }

    /// Poof progress (0..=1) for an animal
    pub fn poof_progress(&self, animal: &Animal) -> f32 {
        animal.removal.progress(self.poof_duration)
    }
}

/// Draws a frame. Implementations must not hold on to the view.
pub trait Renderer {
    fn render(&mut self, view: &FrameView<'_>);
}

/// Headless renderer: reports the frame through the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_hud: Option<(u32, u32, GamePhase)>,
    /// Frames rendered so far
    pub frames: u64,
}

impl Renderer for LogRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.frames += 1;

        for event in view.events {
            log::trace!("frame {}: {:?}", self.frames, event);
        }

        let hud = (view.score, view.missed, view.phase);
        if self.last_hud != Some(hud) {
            log::info!(
                "Score: {}  Missed: {}  ({:?}, {} on path, gate {:?})",
                view.score,
                view.missed,
                view.phase,
                view.animals.len(),
                view.gate
            );
            self.last_hud = Some(hud);
        }
    }
}
