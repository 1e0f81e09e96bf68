//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes from a [`Tuning`]
//! value. Defaults mirror [`crate::consts`]; overrides are JSON with any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::DangerZone;

/// Environment variable naming a JSON tuning file (native only)
pub const TUNING_PATH_ENV: &str = "PIG_RHYTHM_TUNING";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration per tick
    pub gravity: f32,
    /// Jump impulse (negative = up)
    pub jump_force: f32,
    /// Hand speed when a round starts (degrees per tick)
    pub base_speed: f32,
    /// Floor of the randomized hand speed
    pub min_speed: f32,
    /// Hard ceiling of the hand speed
    pub max_speed_cap: f32,
    /// Speed ceiling growth per point
    pub score_factor: f32,
    /// Center of the danger zone, also the scoring angle
    pub danger_center: f32,
    /// Half-width of the danger zone
    pub danger_half_width: f32,
    /// Minimum rendered height that clears the hand
    pub min_jump_height: f32,
    /// How far above ground a jump is still allowed
    pub ground_tolerance: f32,
    /// Arc past 12 o'clock during which the beat glow is lit
    pub beat_glow_arc: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_force: JUMP_FORCE,
            base_speed: BASE_ROTATION_SPEED,
            min_speed: MIN_RANDOM_SPEED,
            max_speed_cap: MAX_SPEED_CAP,
            score_factor: SCORE_SPEED_FACTOR,
            danger_center: COLLISION_ANGLE_CENTER,
            danger_half_width: COLLISION_ANGLE_WINDOW,
            min_jump_height: MIN_JUMP_HEIGHT,
            ground_tolerance: GROUND_TOLERANCE,
            beat_glow_arc: BEAT_GLOW_ARC,
        }
    }
}

impl Tuning {
    /// Danger zone described by this tuning
    pub fn danger_zone(&self) -> DangerZone {
        DangerZone::new(self.danger_center, self.danger_half_width)
    }

    /// Parse and validate a JSON override
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every field is in a range the simulation can honor
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, value: f32, reason: &'static str) -> ConfigError {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            }
        }

        if !(self.gravity > 0.0) {
            return Err(invalid("gravity", self.gravity, "must be positive"));
        }
        if !(self.jump_force < 0.0) {
            return Err(invalid("jump_force", self.jump_force, "must be negative"));
        }
        if !(self.min_speed > 0.0) {
            return Err(invalid("min_speed", self.min_speed, "must be positive"));
        }
        if !(self.max_speed_cap >= self.min_speed) {
            return Err(invalid(
                "max_speed_cap",
                self.max_speed_cap,
                "must be at least min_speed",
            ));
        }
        if !(self.base_speed >= self.min_speed && self.base_speed <= self.max_speed_cap) {
            return Err(invalid(
                "base_speed",
                self.base_speed,
                "must lie between min_speed and max_speed_cap",
            ));
        }
        if !(self.score_factor >= 0.0) {
            return Err(invalid("score_factor", self.score_factor, "must not be negative"));
        }
        if !(self.danger_half_width > 0.0 && self.danger_half_width < 90.0) {
            return Err(invalid(
                "danger_half_width",
                self.danger_half_width,
                "must lie in (0, 90)",
            ));
        }
        if !(self.danger_center - self.danger_half_width > 0.0
            && self.danger_center + self.danger_half_width < FULL_TURN)
        {
            return Err(invalid(
                "danger_center",
                self.danger_center,
                "zone must not wrap past 12 o'clock",
            ));
        }
        if !(self.min_jump_height >= 0.0) {
            return Err(invalid(
                "min_jump_height",
                self.min_jump_height,
                "must not be negative",
            ));
        }
        if !(self.ground_tolerance >= 0.0) {
            return Err(invalid(
                "ground_tolerance",
                self.ground_tolerance,
                "must not be negative",
            ));
        }
        Ok(())
    }

    /// Load tuning from the file named by `PIG_RHYTHM_TUNING`, falling back
    /// to defaults on any problem
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default() -> Self {
        let Ok(path) = std::env::var(TUNING_PATH_ENV) else {
            return Self::default();
        };

        match std::fs::read_to_string(&path)
            .map_err(ConfigError::from)
            .and_then(|json| Self::from_json(&json))
        {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_or_default() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "danger_half_width": 15.0 }"#).unwrap();
        assert_eq!(tuning.danger_half_width, 15.0);
        assert_eq!(tuning.gravity, GRAVITY);
        assert_eq!(tuning.danger_zone().start(), 165.0);
    }

    #[test]
    fn test_rejects_upward_gravity() {
        let err = Tuning::from_json(r#"{ "gravity": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "gravity", .. }));
    }

    #[test]
    fn test_rejects_wrapping_zone() {
        let tuning = Tuning {
            danger_center: 10.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Tuning::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
