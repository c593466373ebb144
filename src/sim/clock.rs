//! Simulation clock
//!
//! Monotonic time owned by the simulation. Every time-based decision
//! (spawn cooldown, cloud timer) compares against this, never wall time.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Convert a tuning interval in seconds to a whole-millisecond duration
pub fn duration_from_secs(secs: f32) -> Duration {
    Duration::from_millis((secs.max(0.0) * 1000.0).round() as u64)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Total simulated time
    pub elapsed: Duration,
    /// Number of ticks advanced
    pub ticks: u64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one tick of `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += Duration::from_secs_f32(dt.max(0.0));
        self.ticks += 1;
    }

    /// Current time
    #[inline]
    pub fn now(&self) -> Duration {
        self.elapsed
    }

    /// Time since `then`, saturating at zero
    #[inline]
    pub fn since(&self, then: Duration) -> Duration {
        self.elapsed.saturating_sub(then)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_advance_counts_ticks() {
        let mut clock = SimClock::new();
        for _ in 0..48 {
            clock.advance(SIM_DT);
        }
        assert_eq!(clock.ticks, 48);
        assert!(clock.now() >= Duration::from_millis(800));
        assert!(clock.now() < Duration::from_millis(801));
    }

    #[test]
    fn test_interval_rounds_to_millis() {
        assert_eq!(duration_from_secs(0.8), Duration::from_millis(800));
        assert_eq!(duration_from_secs(-1.0), Duration::ZERO);
    }

    #[test]
    fn test_negative_dt_does_not_rewind() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(-1.0);
        assert_eq!(clock.now(), Duration::from_secs_f32(0.5));
        assert_eq!(clock.since(Duration::from_secs(5)), Duration::ZERO);
    }
}
