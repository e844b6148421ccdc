//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation one step at a time. Input is
//! applied once per frame at the frame boundary; ticks only simulate.

use super::motion;
use super::session;
use super::state::{GamePhase, GameState, Route, SortPath};
use crate::consts::GATE_X;

/// A discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    TogglePause,
    Restart,
    SetGate(Route),
}

/// Staged input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    /// Intents in the order they arrived
    pub intents: Vec<Intent>,
    /// Demo mode - pick the gate automatically
    pub autopilot: bool,
}

impl TickInput {
    pub fn from_intents(intents: impl IntoIterator<Item = Intent>) -> Self {
        Self {
            intents: intents.into_iter().collect(),
            autopilot: false,
        }
    }
}

/// Apply a frame's staged input to the session.
///
/// Intents apply one at a time in arrival order, each against the phase left
/// by the one before it. The autopilot only steers when no gate was requested.
pub fn apply_input(state: &mut GameState, input: &TickInput) {
    let mut gate_requested = false;
    for &intent in &input.intents {
        match intent {
            Intent::TogglePause => {
                session::toggle_pause(state);
            }
            Intent::Restart => {
                session::restart(state);
            }
            Intent::SetGate(route) => {
                gate_requested = true;
                session::set_gate(state, route);
            }
        }
    }

    if input.autopilot && !gate_requested {
        if let Some(route) = autopilot_gate(state) {
            session::set_gate(state, route);
        }
    }
}

/// Gate position the autopilot wants: the correct route for whichever
/// unrouted animal will reach the gate first
pub fn autopilot_gate(state: &GameState) -> Option<Route> {
    state
        .animals
        .iter()
        .filter(|a| a.sort_path() == SortPath::Unassigned && a.speed > 0.0)
        .min_by(|a, b| {
            let eta_a = (GATE_X - a.pos.x) / a.speed;
            let eta_b = (GATE_X - b.pos.x) / b.speed;
            eta_a.partial_cmp(&eta_b).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|a| a.kind.correct_route())
}

/// Advance the running simulation by one fixed timestep
pub fn step(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    if state.spawner.tick(dt * 1000.0, state.tuning.spawn_interval_ms) {
        state.spawn_animal();
    }

    motion::advance_all(state, dt);

    session::check_win(state);
}

/// Apply input, then advance one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    apply_input(state, input);
    step(state, dt);
}
