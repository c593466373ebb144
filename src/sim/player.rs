//! The player's body: vertical physics and posture

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::frames;
use crate::tuning::Tuning;

/// Number of frames in each posture's run cycle
pub const PLAYER_ANIM_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Posture {
    #[default]
    Standing,
    Ducking,
}

impl Posture {
    pub fn size(self) -> Vec2 {
        let (w, h) = match self {
            Posture::Standing => PLAYER_STANDING_SIZE,
            Posture::Ducking => PLAYER_DUCKING_SIZE,
        };
        Vec2::new(w, h)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerBody {
    /// Horizontal center (fixed for the whole run)
    pub x: f32,
    /// Feet position; never greater than `rest_y`
    pub bottom: f32,
    /// Rest line the feet land on
    pub rest_y: f32,
    /// Vertical velocity per frame (negative = up)
    pub velocity: f32,
    pub posture: Posture,
    /// Current run-cycle frame
    pub anim_frame: u8,
    /// Seconds since the last frame change
    pub anim_timer: f32,
}

impl Default for PlayerBody {
    fn default() -> Self {
        Self::at_rest(PLAYER_X, GROUND_Y)
    }
}

impl PlayerBody {
    /// Standing still on the rest line
    pub fn at_rest(x: f32, rest_y: f32) -> Self {
        Self {
            x,
            bottom: rest_y,
            rest_y,
            velocity: 0.0,
            posture: Posture::Standing,
            anim_frame: 0,
            anim_timer: 0.0,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.bottom >= self.rest_y
    }

    /// Visual rectangle for the current posture
    pub fn rect(&self) -> Rect {
        Rect::from_mid_bottom(Vec2::new(self.x, self.bottom), self.posture.size())
    }

    /// Collision rectangle, inset by `margin` on all sides
    pub fn footprint(&self, margin: f32) -> Rect {
        self.rect().inset(margin)
    }

    /// Start a jump if standing on the ground. Returns whether it happened.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.velocity = impulse;
        true
    }

    /// Switch posture, keeping the feet where they are
    pub fn set_ducking(&mut self, ducking: bool) {
        let posture = if ducking {
            Posture::Ducking
        } else {
            Posture::Standing
        };
        if posture != self.posture {
            self.posture = posture;
            self.anim_frame = 0;
        }
    }

    /// Apply gravity then velocity, landing on the rest line
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        let f = frames(dt);
        self.velocity += gravity * f;
        self.bottom += self.velocity * f;
        if self.bottom >= self.rest_y {
            self.bottom = self.rest_y;
            self.velocity = 0.0;
        }
    }

    /// Advance the run cycle
    pub fn animate(&mut self, dt: f32, interval: f32) {
        self.anim_timer += dt;
        if self.anim_timer > interval {
            self.anim_frame = (self.anim_frame + 1) % PLAYER_ANIM_FRAMES;
            self.anim_timer = 0.0;
        }
    }

    /// One physics + animation step using run tuning
    pub fn update(&mut self, dt: f32, tuning: &Tuning) {
        self.integrate(dt, tuning.gravity);
        self.animate(dt, tuning.player_anim_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = PlayerBody::default();
        assert!(player.jump(-30.0));
        player.integrate(SIM_DT, 2.0);
        assert!(!player.is_grounded());

        let before = player.velocity;
        assert!(!player.jump(-30.0));
        assert_eq!(player.velocity, before);
    }

    #[test]
    fn test_jump_lands_exactly() {
        let mut player = PlayerBody::default();
        player.jump(-30.0);

        let mut ticks = 0;
        loop {
            player.integrate(SIM_DT, 2.0);
            ticks += 1;
            assert!(player.bottom <= player.rest_y);
            if player.is_grounded() {
                break;
            }
            assert!(ticks < 100, "never landed");
        }

        assert_eq!(player.velocity, 0.0);
        assert!((player.bottom - GROUND_Y).abs() < 1e-4);
        assert_eq!(ticks, 29);
    }

    #[test]
    fn test_ducking_preserves_feet() {
        let mut player = PlayerBody::default();
        player.jump(-30.0);
        for _ in 0..5 {
            player.integrate(SIM_DT, 2.0);
        }
        let feet = player.rect().bottom();

        player.set_ducking(true);
        assert_eq!(player.posture, Posture::Ducking);
        assert_eq!(player.rect().bottom(), feet);
        assert_eq!(player.rect().size(), Vec2::new(70.0, 40.0));

        player.set_ducking(false);
        assert_eq!(player.rect().bottom(), feet);
        assert_eq!(player.rect().size(), Vec2::new(50.0, 70.0));
    }

    #[test]
    fn test_footprint_is_inset() {
        let player = PlayerBody::default();
        let footprint = player.footprint(10.0);
        assert_eq!(footprint.left(), 85.0);
        assert_eq!(footprint.right(), 115.0);
        assert_eq!(footprint.top(), 340.0);
        assert_eq!(footprint.bottom(), 390.0);
    }

    #[test]
    fn test_animation_cycles() {
        let mut player = PlayerBody::default();
        for _ in 0..7 {
            player.animate(SIM_DT, 0.1);
        }
        assert_eq!(player.anim_frame, 1);

        player.set_ducking(true);
        assert_eq!(player.anim_frame, 0);
    }
}
