//! Game-over one-liners, picked by score tier

use rand::Rng;
use rand::seq::IndexedRandom;

/// Shown for a round that never scored
pub const ZERO_SCORE_LINE: &str = "Did you even try? Get hopping!";

const LOW_LINES: [&str; 5] = [
    "Ouch! Watch the clock, piggy!",
    "Rhythm is hard, huh?",
    "Bacon's on the menu today!",
    "Step it up, squealer!",
    "A bit flat on that one.",
];

const MID_LINES: [&str; 5] = [
    "Not bad, piggy!",
    "You've got some moves!",
    "Keeping it steady!",
    "Feeling the beat!",
    "Nice hops!",
];

const HIGH_LINES: [&str; 5] = [
    "Absolute LEGEND!",
    "Piggy's got the funk!",
    "Unstoppable rhythm!",
    "The DJ is impressed!",
    "Pure poetry in motion!",
];

/// Score bracket a commentary line is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Zero,
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn for_score(score: u32) -> Self {
        match score {
            0 => Tier::Zero,
            1..=4 => Tier::Low,
            5..=14 => Tier::Mid,
            _ => Tier::High,
        }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Tier::Zero => &[ZERO_SCORE_LINE],
            Tier::Low => &LOW_LINES,
            Tier::Mid => &MID_LINES,
            Tier::High => &HIGH_LINES,
        }
    }
}

/// Pick a line for a final score, uniformly within its tier
pub fn commentary_for<R: Rng + ?Sized>(score: u32, rng: &mut R) -> &'static str {
    Tier::for_score(score)
        .lines()
        .choose(rng)
        .copied()
        .unwrap_or(ZERO_SCORE_LINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_score(0), Tier::Zero);
        assert_eq!(Tier::for_score(1), Tier::Low);
        assert_eq!(Tier::for_score(4), Tier::Low);
        assert_eq!(Tier::for_score(5), Tier::Mid);
        assert_eq!(Tier::for_score(14), Tier::Mid);
        assert_eq!(Tier::for_score(15), Tier::High);
        assert_eq!(Tier::for_score(u32::MAX), Tier::High);
    }

    #[test]
    fn test_zero_is_fixed() {
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..10 {
            assert_eq!(commentary_for(0, &mut rng), ZERO_SCORE_LINE);
        }
    }

    #[test]
    fn test_lines_come_from_tier() {
        let mut rng = Pcg32::seed_from_u64(9);
        for score in [1, 3, 7, 14, 15, 40] {
            let line = commentary_for(score, &mut rng);
            assert!(Tier::for_score(score).lines().contains(&line));
        }
    }

    #[test]
    fn test_every_mid_line_reachable() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(commentary_for(8, &mut rng));
        }
        assert_eq!(seen.len(), MID_LINES.len());
    }
}
