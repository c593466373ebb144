//! Background scenery: drifting clouds and the scrolling ground strip.
//! Purely cosmetic; nothing here takes part in collisions.

use std::time::Duration;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::clock::duration_from_secs;
use super::rect::Rect;
use crate::consts::*;
use crate::frames;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenery {
    pub clouds: Vec<Rect>,
    /// Horizontal offset of the ground strip in (-FIELD_WIDTH, 0]
    pub ground_offset: f32,
    last_cloud: Duration,
    cloud_interval: Duration,
}

impl Scenery {
    pub fn new(cloud_interval_secs: f32) -> Self {
        Self {
            clouds: Vec::new(),
            ground_offset: 0.0,
            last_cloud: Duration::ZERO,
            cloud_interval: duration_from_secs(cloud_interval_secs),
        }
    }

    /// Drop all clouds and restart the cloud timer from `now`
    pub fn reset(&mut self, now: Duration) {
        self.clouds.clear();
        self.ground_offset = 0.0;
        self.last_cloud = now;
    }

    pub fn update<R: Rng>(
        &mut self,
        now: Duration,
        dt: f32,
        speed: f32,
        cloud_speed: f32,
        rng: &mut R,
    ) {
        let f = frames(dt);

        if now.saturating_sub(self.last_cloud) >= self.cloud_interval {
            let (lo, hi) = CLOUD_ALTITUDE_RANGE;
            let altitude = rng.random_range(lo..=hi);
            let (w, h) = CLOUD_SIZE;
            self.clouds.push(Rect::from_mid_bottom(
                Vec2::new(CLOUD_SPAWN_X, altitude),
                Vec2::new(w, h),
            ));
            self.last_cloud = now;
        }

        for cloud in &mut self.clouds {
            cloud.translate(Vec2::new(-cloud_speed * f, 0.0));
        }
        self.clouds.retain(|c| c.right() >= 0.0);

        self.ground_offset = if self.ground_offset <= -FIELD_WIDTH {
            0.0
        } else {
            self.ground_offset - speed * f
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_cloud_spawns_on_interval() {
        let mut scenery = Scenery::new(3.0);
        let mut rng = Pcg32::seed_from_u64(3);

        scenery.update(Duration::from_millis(2999), SIM_DT, 5.0, 1.0, &mut rng);
        assert!(scenery.clouds.is_empty());

        scenery.update(Duration::from_secs(3), SIM_DT, 5.0, 1.0, &mut rng);
        assert_eq!(scenery.clouds.len(), 1);
        let cloud = scenery.clouds[0];
        assert!((50.0..=300.0).contains(&cloud.bottom()));
        assert!(cloud.left() > FIELD_WIDTH - 2.0);
    }

    #[test]
    fn test_clouds_retire_offscreen() {
        let mut scenery = Scenery::new(1000.0);
        let mut rng = Pcg32::seed_from_u64(3);
        scenery.clouds.push(Rect::new(Vec2::new(-200.0, 0.0), Vec2::new(0.5, 80.0)));
        scenery.update(Duration::ZERO, SIM_DT, 5.0, 1.0, &mut rng);
        assert!(scenery.clouds.is_empty());
    }

    #[test]
    fn test_ground_wraps() {
        let mut scenery = Scenery::new(1000.0);
        let mut rng = Pcg32::seed_from_u64(3);
        scenery.ground_offset = -FIELD_WIDTH;
        scenery.update(Duration::ZERO, SIM_DT, 5.0, 1.0, &mut rng);
        assert_eq!(scenery.ground_offset, 0.0);
        scenery.update(Duration::ZERO, SIM_DT, 5.0, 1.0, &mut rng);
        assert_eq!(scenery.ground_offset, -5.0);
    }
}
