//! Clock hand rotation and the danger zone it sweeps through
//!
//! Angles are degrees clockwise from 12 o'clock, always in [0, 360).

use serde::{Deserialize, Serialize};

use crate::normalize_degrees;

/// Hand angle before and after one advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub previous: f32,
    pub current: f32,
}

impl Sweep {
    /// True if the hand moved from before `boundary` to at-or-past it.
    /// A sweep that wraps through 12 o'clock never crosses anything.
    #[inline]
    pub fn crossed(&self, boundary: f32) -> bool {
        self.previous < boundary && self.current >= boundary
    }
}

/// Advance `angle` by `speed` degrees, wrapping at a full turn
#[inline]
pub fn advance(angle: f32, speed: f32) -> Sweep {
    Sweep {
        previous: angle,
        current: normalize_degrees(angle + speed),
    }
}

/// The rotating hand
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clock {
    /// Current angle (degrees)
    pub angle: f32,
    /// Degrees advanced per tick
    pub speed: f32,
}

impl Clock {
    pub fn new(speed: f32) -> Self {
        Self { angle: 0.0, speed }
    }

    /// Back to 12 o'clock at the given speed
    pub fn reset(&mut self, speed: f32) {
        self.angle = 0.0;
        self.speed = speed;
    }

    /// Advance one tick at the current speed
    pub fn advance(&mut self) -> Sweep {
        let sweep = advance(self.angle, self.speed);
        self.angle = sweep.current;
        sweep
    }
}

/// Angular window around the pig where the hand can hit it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DangerZone {
    pub center: f32,
    pub half_width: f32,
}

impl DangerZone {
    pub fn new(center: f32, half_width: f32) -> Self {
        Self { center, half_width }
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.center - self.half_width
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.center + self.half_width
    }

    /// Inclusive membership test
    #[inline]
    pub fn contains(&self, angle: f32) -> bool {
        angle >= self.start() && angle <= self.end()
    }

    /// True if one advance jumped clean over the whole zone
    #[inline]
    pub fn swept_through(&self, sweep: Sweep) -> bool {
        sweep.previous < self.start() && sweep.current > self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_advance_wraps() {
        let sweep = advance(359.5, 2.2);
        assert_eq!(sweep.previous, 359.5);
        assert!((sweep.current - 1.7).abs() < 1e-3);
    }

    #[test]
    fn test_clock_advance_updates_angle() {
        let mut clock = Clock::new(2.2);
        let sweep = clock.advance();
        assert_eq!(sweep.previous, 0.0);
        assert!((clock.angle - 2.2).abs() < 1e-6);

        clock.reset(3.0);
        assert_eq!(clock.angle, 0.0);
        assert_eq!(clock.speed, 3.0);
    }

    #[test]
    fn test_zone_edges_are_inclusive() {
        let zone = DangerZone::new(180.0, 16.0);
        assert!(zone.contains(164.0));
        assert!(!zone.contains(163.99));
        assert!(zone.contains(196.0));
        assert!(!zone.contains(196.01));
        assert!(zone.contains(180.0));
    }

    #[test]
    fn test_swept_through_needs_both_edges() {
        let zone = DangerZone::new(180.0, 16.0);
        assert!(zone.swept_through(Sweep {
            previous: 160.0,
            current: 200.0
        }));
        // Reaching only the near edge is plain containment, not a pass-through
        assert!(!zone.swept_through(Sweep {
            previous: 160.0,
            current: 170.0
        }));
        // Wrapping past 12 o'clock is never a pass-through
        assert!(!zone.swept_through(Sweep {
            previous: 358.0,
            current: 2.0
        }));
    }

    #[test]
    fn test_crossing_ignores_wrap() {
        let wrap = advance(359.0, 5.0);
        assert!(!wrap.crossed(180.0));
        assert!(advance(178.0, 2.0).crossed(180.0));
        assert!(!advance(180.0, 2.0).crossed(180.0));
    }

    proptest! {
        #[test]
        fn prop_advance_stays_in_range(angle in 0.0f32..360.0, speed in 0.0f32..360.0) {
            let sweep = advance(angle, speed);
            prop_assert!(sweep.current >= 0.0 && sweep.current < 360.0);
        }
    }
}
