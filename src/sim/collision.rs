//! Collision between the clock hand and the pig
//!
//! The hand only threatens the pig inside the danger zone. A tick ends the
//! round when the hand is in the zone, or jumped clean over it this tick,
//! while the pig is too low to clear it.

use super::clock::{DangerZone, Sweep};

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the round ends this tick
    pub hit: bool,
    /// Hand ended the tick inside the zone
    pub in_zone: bool,
    /// Hand passed over the whole zone in one tick
    pub swept_through: bool,
    /// Pig's rendered height at the time of the check
    pub height: f32,
}

impl CollisionResult {
    pub fn miss(height: f32) -> Self {
        Self {
            hit: false,
            in_zone: false,
            swept_through: false,
            height,
        }
    }
}

/// Check one tick's sweep against the pig
pub fn check(sweep: Sweep, zone: &DangerZone, height: f32, min_clearance: f32) -> CollisionResult {
    let in_zone = zone.contains(sweep.current);
    let swept_through = zone.swept_through(sweep);

    if !in_zone && !swept_through {
        return CollisionResult::miss(height);
    }

    CollisionResult {
        hit: height < min_clearance,
        in_zone,
        swept_through,
        height,
    }
}

/// True when this tick ends the round
#[inline]
pub fn should_end(sweep: Sweep, zone: &DangerZone, height: f32, min_clearance: f32) -> bool {
    check(sweep, zone, height, min_clearance).hit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MIN_JUMP_HEIGHT;

    fn zone() -> DangerZone {
        DangerZone::new(180.0, 16.0)
    }

    fn sweep(previous: f32, current: f32) -> Sweep {
        Sweep { previous, current }
    }

    #[test]
    fn test_grounded_in_zone_hits() {
        let result = check(sweep(162.0, 165.0), &zone(), 0.0, MIN_JUMP_HEIGHT);
        assert!(result.hit);
        assert!(result.in_zone);
        assert!(!result.swept_through);
    }

    #[test]
    fn test_high_enough_clears() {
        assert!(!should_end(sweep(178.0, 181.0), &zone(), 56.0, MIN_JUMP_HEIGHT));
        // Exactly at clearance is enough
        assert!(!should_end(sweep(178.0, 181.0), &zone(), MIN_JUMP_HEIGHT, MIN_JUMP_HEIGHT));
    }

    #[test]
    fn test_low_jump_hits() {
        assert!(should_end(sweep(178.0, 181.0), &zone(), 47.9, MIN_JUMP_HEIGHT));
    }

    #[test]
    fn test_sweep_over_zone_still_hits() {
        let result = check(sweep(160.0, 200.0), &zone(), 10.0, MIN_JUMP_HEIGHT);
        assert!(result.hit);
        assert!(!result.in_zone);
        assert!(result.swept_through);
    }

    #[test]
    fn test_outside_zone_misses_even_on_ground() {
        assert_eq!(
            check(sweep(10.0, 12.0), &zone(), 0.0, MIN_JUMP_HEIGHT),
            CollisionResult::miss(0.0)
        );
        assert!(!should_end(sweep(196.5, 199.0), &zone(), 0.0, MIN_JUMP_HEIGHT));
    }
}
