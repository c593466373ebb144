//! Score and difficulty tracking

use serde::{Deserialize, Serialize};

use crate::frames;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    /// Accumulated score (never decreases while running)
    pub score: f64,
    /// Global scroll speed per frame (never decreases while running)
    pub speed: f32,
    /// Speed restored on reset
    pub base_speed: f32,
}

impl ScoreTracker {
    pub fn new(base_speed: f32) -> Self {
        Self {
            score: 0.0,
            speed: base_speed,
            base_speed,
        }
    }

    /// Whole points shown on the HUD
    #[inline]
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// Accrue score and ramp speed. Returns the milestone crossed this
    /// step, if any.
    pub fn advance(
        &mut self,
        dt: f32,
        score_rate: f64,
        speed_ramp: f32,
        milestone_interval: u32,
    ) -> Option<u32> {
        let f = frames(dt).max(0.0);
        let previous = self.display_score();
        self.score += score_rate.max(0.0) * f as f64;
        self.speed += speed_ramp.max(0.0) * f;
        crossed_milestone(previous, self.display_score(), milestone_interval)
    }

    pub fn reset(&mut self) {
        self.score = 0.0;
        self.speed = self.base_speed;
    }
}

/// Highest multiple of `interval` reached when going from `previous` to
/// `current`, if any was crossed. Only one is reported per call.
pub fn crossed_milestone(previous: u32, current: u32, interval: u32) -> Option<u32> {
    let interval = interval.max(1);
    let (before, after) = (previous / interval, current / interval);
    (after > before && after > 0).then(|| after * interval)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    #[test]
    fn test_ten_ticks_per_point() {
        let mut tracker = ScoreTracker::new(5.0);
        for _ in 0..10 {
            tracker.advance(SIM_DT, 0.1, 0.0025, 100);
        }
        assert!((tracker.score - 1.0).abs() < 1e-6);
        assert!((tracker.speed - 5.025).abs() < 1e-5);
    }

    #[test]
    fn test_crossing_detection() {
        assert_eq!(crossed_milestone(99, 100, 100), Some(100));
        assert_eq!(crossed_milestone(100, 100, 100), None);
        assert_eq!(crossed_milestone(100, 101, 100), None);
        assert_eq!(crossed_milestone(150, 199, 100), None);
        // A large jump that skips past 100 still reports (once)
        assert_eq!(crossed_milestone(95, 230, 100), Some(200));
        assert_eq!(crossed_milestone(0, 0, 100), None);
    }

    #[test]
    fn test_milestone_fires_once() {
        let mut tracker = ScoreTracker::new(5.0);
        tracker.score = 99.95;
        assert_eq!(tracker.advance(SIM_DT, 0.1, 0.0, 100), Some(100));
        assert_eq!(tracker.advance(SIM_DT, 0.1, 0.0, 100), None);
    }

    #[test]
    fn test_large_dt_does_not_skip() {
        let mut tracker = ScoreTracker::new(5.0);
        tracker.score = 90.0;
        // 200 frames in a single step
        assert_eq!(tracker.advance(200.0 / 60.0, 0.1, 0.0, 100), Some(100));
    }

    #[test]
    fn test_reset() {
        let mut tracker = ScoreTracker::new(5.0);
        tracker.advance(1.0, 0.1, 0.0025, 100);
        tracker.reset();
        assert_eq!(tracker.score, 0.0);
        assert_eq!(tracker.speed, 5.0);
    }
}
