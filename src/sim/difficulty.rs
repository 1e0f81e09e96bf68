//! Score-driven hand speed
//!
//! After every point the hand gets a fresh speed drawn uniformly between a
//! fixed floor and a ceiling that grows with the score.

use rand::Rng;

use crate::tuning::Tuning;

/// Upper bound of the speed draw at `score`
pub fn speed_ceiling(score: u32, tuning: &Tuning) -> f32 {
    (tuning.base_speed + score as f32 * tuning.score_factor).min(tuning.max_speed_cap)
}

/// Speed for a uniform `sample` in [0, 1)
pub fn speed_for_sample(score: u32, sample: f32, tuning: &Tuning) -> f32 {
    let ceiling = speed_ceiling(score, tuning);
    let speed = tuning.min_speed + sample * (ceiling - tuning.min_speed);
    speed.clamp(tuning.min_speed, tuning.max_speed_cap)
}

/// Draw the hand speed that follows reaching `score`
pub fn next_speed<R: Rng + ?Sized>(score: u32, rng: &mut R, tuning: &Tuning) -> f32 {
    speed_for_sample(score, rng.random::<f32>(), tuning)
}

/// Display classification of a hand speed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedLabel {
    Chill,
    Steady,
    Fast,
    Turbo,
}

impl SpeedLabel {
    pub fn classify(speed: f32) -> Self {
        if speed > 7.0 {
            SpeedLabel::Turbo
        } else if speed > 5.0 {
            SpeedLabel::Fast
        } else if speed < 3.0 {
            SpeedLabel::Chill
        } else {
            SpeedLabel::Steady
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedLabel::Chill => "CHILL",
            SpeedLabel::Steady => "STEADY",
            SpeedLabel::Fast => "FAST",
            SpeedLabel::Turbo => "TURBO!",
        }
    }
}
