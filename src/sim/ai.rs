//! Computer opponent
//!
//! A closed-form aim from the flat-ground range formula, deliberately
//! degraded: the estimate is scaled by a per-difficulty accuracy factor
//! and jittered harder the lower the difficulty, so an easy opponent
//! visibly misses.

use rand::Rng;

use crate::consts::{AI_JITTER, AI_MIN_POWER, AI_WIND_CORRECTION};
use crate::settings::Difficulty;

/// An angle/power pair ready for the fire entry point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AimEstimate {
    pub angle: f32,
    pub power: f32,
}

/// Estimate a shot from `origin_x` at `target_x`.
///
/// Power comes from the range formula at a 45 degree baseline plus a
/// linear wind correction, scaled by accuracy and clamped. Both outputs
/// are clamped back into the valid input ranges after jitter, so the
/// estimate can never be rejected and wedge the computer's turn.
pub fn estimate_shot(
    origin_x: f32,
    target_x: f32,
    wind: i32,
    gravity: f32,
    difficulty: Difficulty,
    max_power: f32,
    rng: &mut impl Rng,
) -> AimEstimate {
    let distance = (target_x - origin_x).abs();
    let mut angle: f32 = 45.0;
    let ideal = (distance * gravity / (2.0 * angle.to_radians()).sin()).sqrt();
    let mut power = ideal + wind as f32 * AI_WIND_CORRECTION;

    let accuracy = difficulty.ai_accuracy();
    power = (power * accuracy).clamp(AI_MIN_POWER, max_power);

    let spread = 1.0 - accuracy;
    angle += rng.random_range(-AI_JITTER..AI_JITTER) * spread;
    power += rng.random_range(-AI_JITTER..AI_JITTER) * spread;

    AimEstimate {
        angle: angle.clamp(0.0, 90.0),
        power: power.clamp(0.0, max_power),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_estimate_stays_in_valid_ranges() {
        let mut rng = Pcg32::seed_from_u64(3);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let max_power = difficulty.max_power();
            for _ in 0..200 {
                let aim = estimate_shot(
                    800.0,
                    120.0,
                    -70,
                    difficulty.gravity(),
                    difficulty,
                    max_power,
                    &mut rng,
                );
                assert!((0.0..=90.0).contains(&aim.angle));
                assert!((0.0..=max_power).contains(&aim.power));
            }
        }
    }

    #[test]
    fn test_hard_aims_tighter_than_easy() {
        // Jitter shrinks with accuracy, so hard stays closer to the baseline
        let spread_of = |difficulty: Difficulty| {
            let mut rng = Pcg32::seed_from_u64(11);
            (0..200)
                .map(|_| {
                    let aim = estimate_shot(800.0, 120.0, 0, 0.5, difficulty, 120.0, &mut rng);
                    (aim.angle - 45.0).abs()
                })
                .fold(0.0f32, f32::max)
        };
        assert!(spread_of(Difficulty::Hard) < spread_of(Difficulty::Easy));
    }

    #[test]
    fn test_estimate_is_deterministic_per_seed() {
        let mut a = Pcg32::seed_from_u64(21);
        let mut b = Pcg32::seed_from_u64(21);
        let one = estimate_shot(800.0, 150.0, 12, 0.5, Difficulty::Medium, 100.0, &mut a);
        let two = estimate_shot(800.0, 150.0, 12, 0.5, Difficulty::Medium, 100.0, &mut b);
        assert_eq!(one, two);
    }
}
