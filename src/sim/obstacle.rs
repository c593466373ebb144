//! Obstacles and the live obstacle set

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::frames;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Sits on the ground line; `variant` is cosmetic (1..=6)
    Ground { variant: u8 },
    /// Flies at one of the fixed altitude bands
    Flying { band: usize },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    pub rect: Rect,
    /// Scroll speed applied on the most recent advance
    pub speed: f32,
    /// Flap phase in [0, 2) for flying obstacles
    pub flap_phase: f32,
}

impl Obstacle {
    /// Ground obstacle flush with the right edge of the field
    pub fn ground(id: u32, variant: u8, speed: f32) -> Self {
        let (w, h) = GROUND_OBSTACLE_SIZE;
        Self {
            id,
            kind: ObstacleKind::Ground { variant },
            rect: Rect::from_mid_bottom(
                Vec2::new(GROUND_OBSTACLE_SPAWN_X, GROUND_Y),
                Vec2::new(w, h),
            ),
            speed,
            flap_phase: 0.0,
        }
    }

    /// Flying obstacle just past the right edge at altitude `band`
    pub fn flying(id: u32, band: usize, speed: f32) -> Self {
        let (w, h) = FLYING_OBSTACLE_SIZE;
        let altitude = FLYING_ALTITUDES[band.min(FLYING_ALTITUDES.len() - 1)];
        Self {
            id,
            kind: ObstacleKind::Flying { band },
            rect: Rect::from_mid_bottom(
                Vec2::new(FLYING_OBSTACLE_SPAWN_X, altitude),
                Vec2::new(w, h),
            ),
            speed,
            flap_phase: 0.0,
        }
    }

    /// Build an obstacle of `kind` at its spawn position
    pub fn spawn(id: u32, kind: ObstacleKind, speed: f32) -> Self {
        match kind {
            ObstacleKind::Ground { variant } => Self::ground(id, variant, speed),
            ObstacleKind::Flying { band } => Self::flying(id, band, speed),
        }
    }

    /// Current animation frame (always 0 for ground obstacles)
    pub fn anim_frame(&self) -> u8 {
        self.flap_phase as u8
    }

    #[inline]
    pub fn is_offscreen(&self) -> bool {
        self.rect.right() < 0.0
    }
}

/// All in-flight obstacles, exclusively owned here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSet {
    obstacles: Vec<Obstacle>,
}

impl ObstacleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    /// Scroll every obstacle left by `speed` per frame
    pub fn advance(&mut self, dt: f32, speed: f32) {
        let dx = speed * frames(dt);
        for obstacle in &mut self.obstacles {
            obstacle.speed = speed;
            obstacle.rect.translate(Vec2::new(-dx, 0.0));
            if let ObstacleKind::Flying { .. } = obstacle.kind {
                obstacle.flap_phase = (obstacle.flap_phase + FLAP_STEP) % 2.0;
            }
        }
    }

    /// Drop obstacles whose right edge has passed the left boundary.
    /// Returns how many were removed.
    pub fn retire_offscreen(&mut self) -> usize {
        let before = self.obstacles.len();
        self.obstacles.retain(|o| !o.is_offscreen());
        before - self.obstacles.len()
    }

    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Obstacle> {
        self.obstacles.iter().find(|o| o.id == id)
    }
}

impl<'a> IntoIterator for &'a ObstacleSet {
    type Item = &'a Obstacle;
    type IntoIter = std::slice::Iter<'a, Obstacle>;

    fn into_iter(self) -> Self::IntoIter {
        self.obstacles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_geometry() {
        let cactus = Obstacle::ground(1, 3, 5.0);
        assert_eq!(cactus.rect.bottom(), GROUND_Y);
        assert_eq!(cactus.rect.right(), FIELD_WIDTH + 30.0);

        let ptero = Obstacle::flying(2, 1, 5.0);
        assert_eq!(ptero.rect.bottom(), 350.0);
        assert!(ptero.rect.left() > FIELD_WIDTH);
    }

    #[test]
    fn test_advance_moves_by_speed() {
        let mut set = ObstacleSet::new();
        set.insert(Obstacle::ground(1, 1, 5.0));
        let x0 = set.get(1).unwrap().rect.left();

        set.advance(SIM_DT, 7.0);
        let obstacle = set.get(1).unwrap();
        assert!((obstacle.rect.left() - (x0 - 7.0)).abs() < 1e-4);
        assert_eq!(obstacle.speed, 7.0);
    }

    #[test]
    fn test_flap_phase_wraps() {
        let mut set = ObstacleSet::new();
        set.insert(Obstacle::flying(1, 0, 0.0));
        for _ in 0..25 {
            set.advance(SIM_DT, 0.0);
        }
        let ptero = set.get(1).unwrap();
        assert!(ptero.flap_phase < 2.0);
        assert!(ptero.anim_frame() <= 1);
    }

    #[test]
    fn test_retire_offscreen() {
        let mut set = ObstacleSet::new();
        let mut gone = Obstacle::ground(1, 1, 5.0);
        gone.rect.translate(Vec2::new(-(gone.rect.right() + 0.5), 0.0));
        let mut edge = Obstacle::ground(2, 1, 5.0);
        edge.rect.translate(Vec2::new(-edge.rect.right(), 0.0));
        set.insert(gone);
        set.insert(edge);

        assert_eq!(set.retire_offscreen(), 1);
        assert!(set.get(1).is_none());
        // Right edge exactly at 0 is still on the boundary
        assert!(set.get(2).is_some());
    }
}
