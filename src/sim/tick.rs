//! Fixed-step simulation tick
//!
//! One call advances the hand, steps the pig, then checks collision before
//! scoring. Collision wins: a tick that both crosses the scoring angle and
//! catches the pig ends the round without the point.

use rand::Rng;

use super::collision;
use super::difficulty;
use super::state::{GameEvent, GamePhase, Session};

/// Advance the session by one tick. Does nothing unless playing.
pub fn tick<R: Rng + ?Sized>(session: &mut Session, rng: &mut R) -> Option<GameEvent> {
    if session.phase != GamePhase::Playing {
        return None;
    }

    // 1. Hand rotation
    let sweep = session.clock.advance();

    // 2. Pig physics
    session.actor.step(session.tuning.gravity);

    // 3. Collision
    let zone = session.tuning.danger_zone();
    let hit = collision::check(
        sweep,
        &zone,
        session.actor.rendered_height(),
        session.tuning.min_jump_height,
    );
    if hit.hit {
        log::debug!(
            "Hand caught pig at {:.1}° (height {:.1}, swept through: {})",
            sweep.current,
            hit.height,
            hit.swept_through
        );
        return Some(session.end_game());
    }

    // 4. Scoring
    if sweep.crossed(session.tuning.danger_center) {
        session.score += 1;
        let speed = difficulty::next_speed(session.score, rng, &session.tuning);
        session.clock.speed = speed;
        log::debug!("Score {} - hand speed now {:.2}", session.score, speed);
        return Some(GameEvent::Scored {
            score: session.score,
            speed,
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::autopilot;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn playing() -> Session {
        let mut session = Session::new(Tuning::default(), 0);
        session.start_game();
        session
    }

    #[test]
    fn test_tick_idle_outside_playing() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut session = Session::new(Tuning::default(), 0);
        assert_eq!(tick(&mut session, &mut rng), None);
        assert_eq!(session.clock.angle, 0.0);
    }

    #[test]
    fn test_grounded_pig_is_caught() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut session = playing();
        let mut event = None;
        for _ in 0..200 {
            event = tick(&mut session, &mut rng);
            if event.is_some() {
                break;
            }
        }
        assert_eq!(
            event,
            Some(GameEvent::GameOver {
                final_score: 0,
                new_high_score: false
            })
        );
        assert_eq!(session.phase, GamePhase::GameOver);
        assert!(session.tuning.danger_zone().contains(session.clock.angle));

        // Frozen once over
        let angle = session.clock.angle;
        assert_eq!(tick(&mut session, &mut rng), None);
        assert_eq!(session.clock.angle, angle);
    }

    #[test]
    fn test_single_score_per_crossing() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut session = playing();
        session.clock.angle = 170.0;
        session.clock.speed = 20.0;
        session.actor.y = -100.0;

        let event = tick(&mut session, &mut rng);
        assert!((session.clock.angle - 190.0).abs() < 1e-4);
        assert!(matches!(event, Some(GameEvent::Scored { score: 1, .. })));
        assert_eq!(session.score, 1);

        // Keep the pig airborne through the rest of the zone
        session.actor.y = -100.0;
        session.actor.velocity = 0.0;
        for _ in 0..5 {
            assert_eq!(tick(&mut session, &mut rng), None);
        }
        assert_eq!(session.score, 1);
    }

    #[test]
    fn test_new_speed_after_score_stays_bounded() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut session = playing();
        session.clock.angle = 179.0;
        session.actor.y = -100.0;
        tick(&mut session, &mut rng);
        assert_eq!(session.score, 1);
        let tuning = &session.tuning;
        assert!(session.clock.speed >= tuning.min_speed);
        assert!(session.clock.speed <= tuning.max_speed_cap);
    }

    #[test]
    fn test_timed_jumps_score_each_revolution() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut session = playing();

        for _ in 0..5_000 {
            if session.score == 5 {
                break;
            }
            if autopilot::should_jump(&session) {
                session.activate();
            }
            tick(&mut session, &mut rng);
            assert_eq!(session.phase, GamePhase::Playing);
        }
        assert_eq!(session.score, 5);

        // Stop jumping: the next pass through the zone catches the pig
        let mut last = None;
        for _ in 0..5_000 {
            last = tick(&mut session, &mut rng);
            if session.phase == GamePhase::GameOver {
                break;
            }
        }
        assert_eq!(
            last,
            Some(GameEvent::GameOver {
                final_score: 5,
                new_high_score: true
            })
        );
        assert_eq!(session.high_score, 5);
    }
}
