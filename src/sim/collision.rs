//! Collision detection between the player's footprint and obstacles
//!
//! Plain axis-aligned overlap. The player side is expected to already be
//! inset (see `PlayerBody::footprint`) so near misses are forgiving.

use super::obstacle::Obstacle;
use super::rect::Rect;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Obstacle that was hit
    pub obstacle_id: u32,
    /// Overlapping area between footprint and obstacle
    pub overlap: Rect,
}

/// First obstacle whose rectangle overlaps `footprint` with non-zero area
pub fn first_collision<'a, I>(footprint: &Rect, obstacles: I) -> Option<CollisionResult>
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles
        .into_iter()
        .find(|o| footprint.intersects(&o.rect))
        .map(|o| CollisionResult {
            obstacle_id: o.id,
            overlap: Rect::new(footprint.min.max(o.rect.min), footprint.max.min(o.rect.max)),
        })
}

/// Whether any obstacle overlaps `footprint`
pub fn any_collision<'a, I>(footprint: &Rect, obstacles: I) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    first_collision(footprint, obstacles).is_some()
}
