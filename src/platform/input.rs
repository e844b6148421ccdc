//! Input intents
//!
//! Event handlers never touch the simulation. They translate raw events into
//! [`Intent`]s and stage them in an [`InputQueue`]; the frame driver hands the
//! queue over as one [`TickInput`] at the next frame boundary.

pub use crate::sim::Intent;
use crate::sim::{GamePhase, Route, TickInput};

impl Intent {
    /// Map a keyboard key (DOM `KeyboardEvent.key` names) to an intent.
    ///
    /// Space is the one context-sensitive key: it restarts a finished round
    /// and toggles pause otherwise. Unknown keys map to `None`.
    pub fn from_key(key: &str, phase: GamePhase) -> Option<Self> {
        match key {
            " " if phase == GamePhase::GameOver => Some(Intent::Restart),
            " " | "Escape" | "p" | "P" => Some(Intent::TogglePause),
            "r" | "R" => Some(Intent::Restart),
            "ArrowLeft" | "ArrowUp" => Some(Intent::SetGate(Route::Diverted)),
            "ArrowRight" => Some(Intent::SetGate(Route::Straight)),
            _ => None,
        }
    }

    /// A click/tap anywhere on the field
    pub fn from_click(phase: GamePhase) -> Self {
        match phase {
            GamePhase::GameOver => Intent::Restart,
            GamePhase::Running | GamePhase::Paused => Intent::TogglePause,
        }
    }

    /// Gate request from an external index; out-of-range values map to `None`
    pub fn set_gate_index(index: i64) -> Option<Self> {
        Route::from_index(index).map(Intent::SetGate)
    }
}

/// Intents staged between frames
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    staged: Vec<Intent>,
}

impl InputQueue {
    pub fn push(&mut self, intent: Intent) {
        self.staged.push(intent);
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Hand everything staged over as one frame input, arrival order intact
    pub fn take(&mut self, autopilot: bool) -> TickInput {
        TickInput {
            intents: std::mem::take(&mut self.staged),
            autopilot,
        }
    }
}
