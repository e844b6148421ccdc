//! Data-driven game balance
//!
//! Everything that shapes difficulty but not the farm layout lives here.
//! Loaded from JSON on native builds; the browser build uses the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("adult_probability must be within [0, 1], got {0}")]
    Probability(f32),
    #[error("{name} speed range must satisfy 0 < min < max, got [{min}, {max})")]
    SpeedRange { name: &'static str, min: f32, max: f32 },
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("{0} must be zero or more")]
    Negative(&'static str),
}

fn positive(value: f32, name: &'static str) -> Result<(), TuningError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::NonPositive(name))
    }
}

fn non_negative(value: f32, name: &'static str) -> Result<(), TuningError> {
    if value >= 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(TuningError::Negative(name))
    }
}

/// A half-open speed range `[min, max)` in world units per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedRange {
    pub min: f32,
    pub max: f32,
}

impl SpeedRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn validate(&self, name: &'static str) -> Result<(), TuningError> {
        if self.min > 0.0 && self.min < self.max && self.max.is_finite() {
            Ok(())
        } else {
            Err(TuningError::SpeedRange {
                name,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Chance that a spawned animal is a sheep rather than a lamb
    pub adult_probability: f32,
    /// Sheep walk roughly twice as fast as lambs
    pub adult_speed: SpeedRange,
    pub juvenile_speed: SpeedRange,
    /// Milliseconds between spawns
    pub spawn_interval_ms: f32,
    /// Seconds a mis-routed animal spends poofing before removal
    pub poof_duration: f32,
    /// Correct sorts needed to end the round
    pub win_score: u32,
    /// Extra speed multiplier on the straight route
    pub straight_boost: f32,
    /// Upward step per tick on the diverted route
    pub divert_rise: f32,
    /// Extra rightward step per tick on the diverted route
    pub divert_drift: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            adult_probability: 0.6,
            adult_speed: SpeedRange::new(4.0, 7.0),
            juvenile_speed: SpeedRange::new(2.0, 3.5),
            spawn_interval_ms: 1000.0,
            poof_duration: 0.4,
            win_score: 20,
            straight_boost: 2.0,
            divert_rise: 4.0,
            divert_drift: 1.0,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.as_ref().display());
        Ok(tuning)
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if !(0.0..=1.0).contains(&self.adult_probability) {
            return Err(TuningError::Probability(self.adult_probability));
        }
        self.adult_speed.validate("adult")?;
        self.juvenile_speed.validate("juvenile")?;
        positive(self.spawn_interval_ms, "spawn_interval_ms")?;
        positive(self.poof_duration, "poof_duration")?;
        // Diverted animals have to climb to reach their pen
        positive(self.divert_rise, "divert_rise")?;
        non_negative(self.straight_boost, "straight_boost")?;
        non_negative(self.divert_drift, "divert_drift")?;
        if self.win_score == 0 {
            return Err(TuningError::NonPositive("win_score"));
        }
        Ok(())
    }
}
