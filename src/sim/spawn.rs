//! Animal creation and the spawn timer

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{Animal, AnimalKind};
use crate::consts::*;
use crate::tuning::Tuning;

/// Create a new animal at the path entry.
///
/// Type is drawn with `tuning.adult_probability`, speed uniformly from the
/// type's range, and the lane gets a little jitter so animals don't stack.
pub fn spawn_animal<R: Rng>(rng: &mut R, tuning: &Tuning, id: u32) -> Animal {
    let kind = if rng.random_bool(f64::from(tuning.adult_probability)) {
        AnimalKind::Sheep
    } else {
        AnimalKind::Lamb
    };

    let range = match kind {
        AnimalKind::Sheep => tuning.adult_speed,
        AnimalKind::Lamb => tuning.juvenile_speed,
    };
    let speed = rng.random_range(range.min..range.max);

    let lane = PATH_Y + PATH_WIDTH / 2.0 - SPAWN_LANE_JITTER;
    let y = lane + rng.random::<f32>() * SPAWN_LANE_JITTER;

    Animal::new(id, kind, Vec2::new(0.0, y), speed)
}

/// Accumulates elapsed time and fires once per spawn interval
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpawnScheduler {
    /// Milliseconds since the last spawn
    pub accumulator_ms: f32,
}

impl SpawnScheduler {
    /// Advance the timer; returns true when an animal should spawn this tick
    pub fn tick(&mut self, dt_ms: f32, interval_ms: f32) -> bool {
        self.accumulator_ms += dt_ms;
        if self.accumulator_ms > interval_ms {
            self.accumulator_ms = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}
