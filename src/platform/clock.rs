//! Monotonic time sources

/// Supplies monotonic timestamps in milliseconds.
///
/// The epoch is arbitrary; the frame driver only looks at differences.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// A clock that only moves when told to (headless runs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn starting_at(now: f64) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, ms: f64) {
        self.now += ms.max(0.0);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_monotonic() {
        let mut clock = ManualClock::starting_at(1000.0);
        clock.advance(16.5);
        assert_eq!(clock.now_ms(), 1016.5);
        clock.advance(-50.0);
        assert_eq!(clock.now_ms(), 1016.5);
    }
}
