//! Axis-aligned rectangles in screen space (y grows downward)

use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build a rect from its mid-bottom anchor and size
    pub fn from_mid_bottom(mid_bottom: Vec2, size: Vec2) -> Self {
        let min = Vec2::new(mid_bottom.x - size.x / 2.0, mid_bottom.y - size.y);
        Self {
            min,
            max: min + size,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn mid_bottom(&self) -> Vec2 {
        Vec2::new((self.min.x + self.max.x) / 2.0, self.max.y)
    }

    /// Shrink by `margin` on every side. Never inverts: a margin larger than
    /// half the size collapses to the center.
    pub fn inset(&self, margin: f32) -> Self {
        let center = (self.min + self.max) / 2.0;
        let min = (self.min + Vec2::splat(margin)).min(center);
        let max = (self.max - Vec2::splat(margin)).max(center);
        Self { min, max }
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.min += delta;
        self.max += delta;
    }

    /// Strict overlap: shared edges without area do not count
    pub fn intersects(&self, other: &Rect) -> bool {
        let intersects_x = self.min.x < other.max.x && self.max.x > other.min.x;
        let intersects_y = self.min.y < other.max.y && self.max.y > other.min.y;
        intersects_x && intersects_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(x + w, y + h))
    }

    #[test]
    fn test_from_mid_bottom() {
        let r = Rect::from_mid_bottom(Vec2::new(100.0, 400.0), Vec2::new(50.0, 70.0));
        assert_eq!(r.left(), 75.0);
        assert_eq!(r.right(), 125.0);
        assert_eq!(r.top(), 330.0);
        assert_eq!(r.bottom(), 400.0);
        assert_eq!(r.mid_bottom(), Vec2::new(100.0, 400.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&rect(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&rect(0.0, 10.0, 10.0, 10.0)));
        assert!(a.intersects(&rect(9.5, 9.5, 10.0, 10.0)));
    }

    #[test]
    fn test_inset() {
        let r = rect(0.0, 0.0, 50.0, 70.0).inset(10.0);
        assert_eq!(r, rect(10.0, 10.0, 30.0, 50.0));

        let collapsed = rect(0.0, 0.0, 10.0, 10.0).inset(20.0);
        assert_eq!(collapsed.size(), Vec2::ZERO);
    }
}
