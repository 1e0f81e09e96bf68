//! Jump physics for the pig
//!
//! Vertical axis points down: `y = 0` is the ground and negative values are
//! airborne. The ground clamp keeps `y <= 0` at all times.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Rendered height at which the shadow reaches its minimum scale
const SHADOW_SCALE_FALLOFF: f32 = 150.0;
/// Rendered height over which the shadow fades
const SHADOW_FADE_FALLOFF: f32 = 100.0;
const SHADOW_MIN_SCALE: f32 = 0.5;
const SHADOW_MIN_OPACITY: f32 = 0.1;
const SHADOW_BASE_OPACITY: f32 = 0.4;
/// Vertical stretch while airborne
const AIR_STRETCH: f32 = 1.1;
/// Horizontal squash while standing
const GROUND_SQUASH: f32 = 0.95;

/// One physics step. Position moves by the old velocity, then gravity is
/// applied; landing at or below the ground zeroes both.
#[inline]
pub fn step(position: f32, velocity: f32, gravity: f32) -> (f32, f32) {
    let new_position = position + velocity;
    let new_velocity = velocity + gravity;
    if new_position >= 0.0 {
        (0.0, 0.0)
    } else {
        (new_position, new_velocity)
    }
}

/// The jumping character
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Vertical position (0 = ground, negative = airborne)
    pub y: f32,
    /// Vertical velocity (negative = rising)
    pub velocity: f32,
}

impl Actor {
    pub fn reset(&mut self) {
        self.y = 0.0;
        self.velocity = 0.0;
    }

    /// Apply gravity for one tick
    pub fn step(&mut self, gravity: f32) {
        (self.y, self.velocity) = step(self.y, self.velocity, gravity);
    }

    /// Landed, or close enough to landing that a jump is allowed
    #[inline]
    pub fn is_grounded(&self, tolerance: f32) -> bool {
        self.y >= -tolerance
    }

    /// Launch with `force` if grounded. Returns false (velocity untouched)
    /// when still airborne.
    pub fn jump(&mut self, force: f32, tolerance: f32) -> bool {
        if !self.is_grounded(tolerance) {
            return false;
        }
        self.velocity = force;
        true
    }

    /// Height above ground as drawn on screen
    #[inline]
    pub fn rendered_height(&self) -> f32 {
        (-self.y).max(0.0)
    }

    pub fn pose(&self) -> Pose {
        Pose::from_height(self.rendered_height())
    }
}

/// Visual pose derived from rendered height
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pose {
    pub height: f32,
    /// Body scale (x = squash, y = stretch)
    pub body_scale: Vec2,
    pub shadow_scale: f32,
    pub shadow_opacity: f32,
}

impl Pose {
    pub fn from_height(height: f32) -> Self {
        let stretch = if height > 0.0 { AIR_STRETCH } else { 1.0 };
        let squash = if height == 0.0 { GROUND_SQUASH } else { 1.0 };

        Self {
            height,
            body_scale: Vec2::new(squash / stretch, stretch),
            shadow_scale: (1.0 - height / SHADOW_SCALE_FALLOFF).max(SHADOW_MIN_SCALE),
            shadow_opacity: (SHADOW_BASE_OPACITY - height / SHADOW_FADE_FALLOFF)
                .max(SHADOW_MIN_OPACITY),
        }
    }
}
