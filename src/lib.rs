//! Sheep Sort - a farm-gate sorting arcade game
//!
//! Core modules:
//! - `sim`: Simulation (spawning, routing, movement, session state)
//! - `driver`: Per-frame orchestration of the simulation
//! - `platform`: Clock, input, renderer and frame scheduling seams
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use driver::{FrameDriver, FrameRequest};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, speeds are expressed per tick)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta fed into the accumulator (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 500.0;

    /// Main path (horizontal band animals walk along)
    pub const PATH_Y: f32 = 200.0;
    pub const PATH_WIDTH: f32 = 100.0;
    /// Spread of the spawn lane inside the path
    pub const SPAWN_LANE_JITTER: f32 = 20.0;

    /// Gate x-threshold, in the middle of the path
    pub const GATE_X: f32 = WORLD_WIDTH / 2.0;

    /// Straight pen (sheep), right edge below the path entry
    pub const STRAIGHT_PEN_WIDTH: f32 = 120.0;
    pub const STRAIGHT_PEN_Y: f32 = 100.0;
    pub const STRAIGHT_PEN_HEIGHT: f32 = 300.0;
    /// How far past the pen's left edge an animal must walk to count
    pub const STRAIGHT_PEN_ENTRY: f32 = 30.0;

    /// Diverted pen (lambs), top strip, right half of the world
    pub const DIVERTED_PEN_HEIGHT: f32 = 80.0;
    /// Inset from the sides and bottom of the diverted pen
    pub const DIVERTED_PEN_INSET: f32 = 20.0;

    /// Distance past the right edge before an animal counts as escaped
    pub const EXIT_MARGIN: f32 = 50.0;
}
