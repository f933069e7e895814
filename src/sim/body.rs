//! Player body integration
//!
//! One body, vertical motion only. Units are pixels and ticks.

use super::geometry::Aabb;
use crate::tuning::Tuning;

/// Outcome of one integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyStep {
    Airborne,
    /// Bottom edge reached the floor line; body is clamped and stopped
    FloorContact,
}

/// The player's square
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBody {
    /// Left edge (fixed)
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Vertical velocity, positive = downward
    pub vel: f32,
    pub size: f32,
}

impl PlayerBody {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            x: tuning.player_x,
            y: tuning.player_start_y,
            vel: 0.0,
            size: tuning.player_size,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_xywh(self.x, self.y, self.size, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }

    /// Overwrite velocity with the flap impulse (not additive)
    pub fn flap(&mut self, flap_velocity: f32) {
        self.vel = flap_velocity;
    }

    /// Apply gravity then velocity. Clamps to `floor_y` on contact.
    pub fn integrate(&mut self, gravity: f32, floor_y: f32) -> BodyStep {
        self.vel += gravity;
        let next_y = self.y + self.vel;

        if next_y + self.size >= floor_y {
            self.y = floor_y - self.size;
            self.vel = 0.0;
            return BodyStep::FloorContact;
        }

        self.y = next_y;
        BodyStep::Airborne
    }
}
