//! Demo-mode player
//!
//! Times jumps so the pig reaches clearance height on exactly the tick the
//! hand enters the danger zone, which keeps it above the hand for the whole
//! pass at any speed the difficulty controller hands out early in a run.

use super::actor::Actor;
use super::state::{GamePhase, Session};
use crate::tuning::Tuning;

/// Upper bound on simulated flight when measuring takeoff lead
const MAX_FLIGHT_TICKS: u32 = 600;

/// Ticks from takeoff until the pig first clears `min_jump_height`.
/// `None` if a jump can never clear it with this tuning.
pub fn takeoff_lead_ticks(tuning: &Tuning) -> Option<u32> {
    let mut actor = Actor::default();
    actor.jump(tuning.jump_force, tuning.ground_tolerance);

    for n in 1..=MAX_FLIGHT_TICKS {
        actor.step(tuning.gravity);
        if actor.rendered_height() >= tuning.min_jump_height {
            return Some(n);
        }
        if actor.y >= 0.0 {
            return None;
        }
    }
    None
}

/// Whether to jump before the next tick
pub fn should_jump(session: &Session) -> bool {
    if session.phase != GamePhase::Playing || !session.is_grounded() {
        return false;
    }
    let Some(lead) = takeoff_lead_ticks(&session.tuning) else {
        return false;
    };

    let zone_start = session.tuning.danger_zone().start();
    let angle = session.clock.angle;
    angle < zone_start && angle + lead as f32 * session.clock.speed >= zone_start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lead() {
        assert_eq!(takeoff_lead_ticks(&Tuning::default()), Some(5));
    }

    #[test]
    fn test_unreachable_clearance() {
        let tuning = Tuning {
            min_jump_height: 10_000.0,
            ..Default::default()
        };
        assert_eq!(takeoff_lead_ticks(&tuning), None);
    }

    #[test]
    fn test_waits_until_hand_is_close() {
        let mut session = Session::new(Tuning::default(), 0);
        assert!(!should_jump(&session), "not playing yet");

        session.start_game();
        assert!(!should_jump(&session));

        // 5 ticks at 2.2 from 153.0 lands on 164.0
        session.clock.angle = 153.0;
        assert!(should_jump(&session));

        // Past the zone: nothing to clear
        session.clock.angle = 200.0;
        assert!(!should_jump(&session));
    }

    #[test]
    fn test_never_jumps_airborne() {
        let mut session = Session::new(Tuning::default(), 0);
        session.start_game();
        session.clock.angle = 155.0;
        session.actor.y = -30.0;
        assert!(!should_jump(&session));
    }
}
