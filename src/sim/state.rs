//! Session state and core simulation types
//!
//! A [`Session`] is the single owner of everything the simulation mutates.
//! It is created once and reset in place for every round.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::clock::Clock;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first activation
    Start,
    /// Active gameplay
    Playing,
    /// Round ended, simulation frozen
    GameOver,
}

/// Discrete things that happened during a command or tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A fresh round began
    Started,
    /// The pig left the ground
    Jumped,
    /// The hand passed the pig; carries the new score and the next hand speed
    Scored { score: u32, speed: f32 },
    /// The hand caught the pig
    GameOver { final_score: u32, new_high_score: bool },
}

/// Per-frame snapshot for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RenderState {
    pub hand_angle: f32,
    /// Pig's height above ground (positive = up)
    pub actor_rendered_y: f32,
    /// Body scale (x = squash, y = stretch)
    pub body_scale: Vec2,
    pub shadow_scale: f32,
    pub shadow_opacity: f32,
    /// Hand is just past 12 o'clock
    pub beat_glow_active: bool,
    pub phase: GamePhase,
}

/// Complete game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub phase: GamePhase,
    /// Points this round
    pub score: u32,
    /// Best score across all rounds (loaded at startup)
    pub high_score: u32,
    /// Rotating hand
    pub clock: Clock,
    /// The pig
    pub actor: Actor,
    /// Balance constants
    pub tuning: Tuning,
}

impl Session {
    pub fn new(tuning: Tuning, high_score: u32) -> Self {
        Self {
            phase: GamePhase::Start,
            score: 0,
            high_score,
            clock: Clock::new(tuning.base_speed),
            actor: Actor::default(),
            tuning,
        }
    }

    /// Reset the round and start playing
    pub fn start_game(&mut self) -> GameEvent {
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.clock.reset(self.tuning.base_speed);
        self.actor.reset();
        log::info!("Round started (best {})", self.high_score);
        GameEvent::Started
    }

    /// Freeze the round and record the high score
    pub fn end_game(&mut self) -> GameEvent {
        self.phase = GamePhase::GameOver;
        let new_high_score = self.score > self.high_score;
        if new_high_score {
            self.high_score = self.score;
        }
        log::info!(
            "Game over: score {} (best {}{})",
            self.score,
            self.high_score,
            if new_high_score { ", new record" } else { "" }
        );
        GameEvent::GameOver {
            final_score: self.score,
            new_high_score,
        }
    }

    /// Jump/tap/key input. Jumps while playing, otherwise starts a fresh
    /// round. Returns `None` when a jump is ignored because the pig is airborne.
    pub fn activate(&mut self) -> Option<GameEvent> {
        match self.phase {
            GamePhase::Playing => {
                let jumped = self
                    .actor
                    .jump(self.tuning.jump_force, self.tuning.ground_tolerance);
                jumped.then_some(GameEvent::Jumped)
            }
            GamePhase::Start | GamePhase::GameOver => Some(self.start_game()),
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.actor.is_grounded(self.tuning.ground_tolerance)
    }

    pub fn render_state(&self) -> RenderState {
        let pose = self.actor.pose();
        RenderState {
            hand_angle: self.clock.angle,
            actor_rendered_y: pose.height,
            body_scale: pose.body_scale,
            shadow_scale: pose.shadow_scale,
            shadow_opacity: pose.shadow_opacity,
            beat_glow_active: self.clock.angle < self.tuning.beat_glow_arc,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_waits_at_start() {
        let session = Session::new(Tuning::default(), 7);
        assert_eq!(session.phase, GamePhase::Start);
        assert_eq!(session.score, 0);
        assert_eq!(session.high_score, 7);
        assert_eq!(session.clock.angle, 0.0);
        assert_eq!(session.clock.speed, Tuning::default().base_speed);
    }

    #[test]
    fn test_activate_from_start_begins_round() {
        let mut session = Session::new(Tuning::default(), 0);
        assert_eq!(session.activate(), Some(GameEvent::Started));
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_activate_while_playing_jumps_once() {
        let mut session = Session::new(Tuning::default(), 0);
        session.start_game();
        assert_eq!(session.activate(), Some(GameEvent::Jumped));
        session.actor.step(session.tuning.gravity);
        // Airborne: ignored, velocity untouched
        let velocity = session.actor.velocity;
        assert_eq!(session.activate(), None);
        assert_eq!(session.actor.velocity, velocity);
    }

    #[test]
    fn test_start_game_is_idempotent() {
        let mut session = Session::new(Tuning::default(), 3);
        session.start_game();
        session.score = 4;
        session.clock.angle = 123.0;
        session.clock.speed = 6.0;
        session.actor.y = -30.0;
        session.actor.velocity = -2.0;

        session.start_game();
        let first = (
            session.phase,
            session.score,
            session.clock.clone(),
            session.actor.clone(),
        );
        session.start_game();
        let second = (
            session.phase,
            session.score,
            session.clock.clone(),
            session.actor.clone(),
        );

        assert_eq!(first, second);
        assert_eq!(session.score, 0);
        assert_eq!(session.clock.angle, 0.0);
        assert_eq!(session.actor.y, 0.0);
        assert_eq!(session.high_score, 3);
    }

    #[test]
    fn test_end_game_keeps_best() {
        let mut session = Session::new(Tuning::default(), 10);
        session.start_game();
        session.score = 4;
        assert_eq!(
            session.end_game(),
            GameEvent::GameOver {
                final_score: 4,
                new_high_score: false
            }
        );
        assert_eq!(session.high_score, 10);

        session.start_game();
        session.score = 12;
        assert_eq!(
            session.end_game(),
            GameEvent::GameOver {
                final_score: 12,
                new_high_score: true
            }
        );
        assert_eq!(session.high_score, 12);
    }

    #[test]
    fn test_render_state_beat_glow() {
        let mut session = Session::new(Tuning::default(), 0);
        session.start_game();
        assert!(session.render_state().beat_glow_active);
        session.clock.angle = 90.0;
        let state = session.render_state();
        assert!(!state.beat_glow_active);
        assert_eq!(state.hand_angle, 90.0);
        assert_eq!(state.actor_rendered_y, 0.0);
    }
}
