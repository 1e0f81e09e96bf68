//! Pig Rhythm - hop the pig over a spinning clock hand
//!
//! Core modules:
//! - `sim`: Deterministic simulation (clock, jump physics, collision, difficulty, session)
//! - `game`: Frame driver connecting the session to its collaborators
//! - `renderer`: Presentation sink (DOM on web, log-backed natively)
//! - `audio`: Sound cues (Web Audio on web, silent natively)
//! - `persistence`: Best score storage
//! - `platform`: Input mapping and frame scheduling
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod commentary;
pub mod error;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, PersistenceError};
pub use game::{Collaborators, Game};
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration applied to the pig every tick
    pub const GRAVITY: f32 = 0.65;
    /// Vertical velocity set by a jump (negative = up)
    pub const JUMP_FORCE: f32 = -12.5;

    /// Hand speed at the start of a round (degrees per tick)
    pub const BASE_ROTATION_SPEED: f32 = 2.2;
    /// Floor of the randomized hand speed
    pub const MIN_RANDOM_SPEED: f32 = 2.2;
    /// Ceiling of the randomized hand speed
    pub const MAX_SPEED_CAP: f32 = 9.0;
    /// Growth of the speed ceiling per point scored
    pub const SCORE_SPEED_FACTOR: f32 = 0.35;

    /// Angle the pig stands at; the hand scores when it passes here
    pub const COLLISION_ANGLE_CENTER: f32 = 180.0;
    /// Half-width of the danger zone around the center (degrees)
    pub const COLLISION_ANGLE_WINDOW: f32 = 16.0;
    /// Height the pig must reach to clear the hand
    pub const MIN_JUMP_HEIGHT: f32 = 48.0;
    /// Distance above ground still counted as grounded for jumping
    pub const GROUND_TOLERANCE: f32 = 5.0;

    /// Beat glow is lit while the hand is within this many degrees past 12 o'clock
    pub const BEAT_GLOW_ARC: f32 = 20.0;

    /// Degrees in a full clock revolution
    pub const FULL_TURN: f32 = 360.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(consts::FULL_TURN);
    // rem_euclid rounds up to exactly 360 for tiny negative inputs
    if wrapped >= consts::FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert!((normalize_degrees(361.7) - 1.7).abs() < 1e-3);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-4);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }
}
