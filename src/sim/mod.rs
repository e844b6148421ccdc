//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod motion;
pub mod pen;
pub mod routing;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use motion::{Advance, Outcome, advance, advance_all};
pub use pen::{Pen, out_of_bounds};
pub use routing::resolve;
pub use spawn::{SpawnScheduler, spawn_animal};
pub use state::{
    Animal, AnimalKind, GameEvent, GamePhase, GameState, MissCause, RemovalState, Route, SortPath,
};
pub use tick::{Intent, TickInput, apply_input, autopilot_gate, step, tick};
