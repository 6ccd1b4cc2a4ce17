//! Uniform sampling from a half-open range minus one excluded value.
//!
//! The engine never draws guesses directly from an RNG; it goes through
//! [`RangeSampler`] so games can be driven by a scripted sequence in tests.

use std::collections::VecDeque;

use super::error::{GuessError, Result};
use super::rng::GameRng;

/// Source of guesses.
///
/// `sample(lower, upper, exclude)` returns `g` with `lower <= g < upper` and
/// `g != exclude`, each valid value equally likely. `exclude` may lie outside
/// the range, in which case every value in range is a candidate.
pub trait RangeSampler {
    /// Draw a guess.
    ///
    /// # Panics
    ///
    /// Panics if `lower >= upper`, or if the range holds exactly one value and
    /// that value is `exclude`. Both mean the caller broke the range invariant.
    fn sample(&mut self, lower: i32, upper: i32, exclude: i32) -> i32;

    /// Non-panicking variant of [`RangeSampler::sample`].
    fn try_sample(&mut self, lower: i32, upper: i32, exclude: i32) -> Result<i32> {
        if lower >= upper {
            return Err(GuessError::EmptyRange { lower, upper });
        }
        if lower + 1 == upper && lower == exclude {
            return Err(GuessError::DegenerateRange { lower, upper, exclude });
        }
        Ok(self.sample(lower, upper, exclude))
    }
}

fn check_preconditions(lower: i32, upper: i32, exclude: i32) {
    assert!(lower < upper, "Empty sample range [{}, {})", lower, upper);
    assert!(
        !(lower + 1 == upper && lower == exclude),
        "Sample range [{}, {}) holds only the excluded value",
        lower,
        upper
    );
}

impl RangeSampler for GameRng {
    fn sample(&mut self, lower: i32, upper: i32, exclude: i32) -> i32 {
        check_preconditions(lower, upper, exclude);

        if (lower..upper).contains(&exclude) {
            // Draw over one fewer value and step over the hole.
            let drawn = self.gen_range(lower..upper - 1);
            if drawn >= exclude {
                drawn + 1
            } else {
                drawn
            }
        } else {
            self.gen_range(lower..upper)
        }
    }
}

/// Deterministic sampler that always picks the middle of the range.
///
/// Turns the engine into a plain binary search: at most 7 rounds for
/// `[1, 100)`. When the middle is excluded it takes the value just below.
#[derive(Clone, Copy, Debug, Default)]
pub struct MidpointSampler;

impl RangeSampler for MidpointSampler {
    fn sample(&mut self, lower: i32, upper: i32, exclude: i32) -> i32 {
        check_preconditions(lower, upper, exclude);

        // With at least two values the middle is above `lower`, so
        // stepping down stays in range. Half the width always fits in i32.
        let middle = lower.wrapping_add((upper.abs_diff(lower) / 2) as i32);
        if middle != exclude {
            middle
        } else {
            middle - 1
        }
    }
}

/// Sampler that replays a fixed list of guesses.
///
/// Every scripted value is checked against the sampler contract, so a script
/// that would produce an illegal guess fails loudly instead of hiding a bug.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSampler {
    values: VecDeque<i32>,
}

impl ScriptedSampler {
    /// Create a sampler that returns `values` in order.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RangeSampler for ScriptedSampler {
    fn sample(&mut self, lower: i32, upper: i32, exclude: i32) -> i32 {
        check_preconditions(lower, upper, exclude);

        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("Script exhausted sampling [{}, {})", lower, upper));
        assert!(
            (lower..upper).contains(&value) && value != exclude,
            "Scripted value {} is not a valid sample of [{}, {}) excluding {}",
            value,
            lower,
            upper,
            exclude
        );
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_never_returns_excluded() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let g = rng.sample(1, 100, 42);
            assert!((1..100).contains(&g));
            assert_ne!(g, 42);
        }
    }

    #[test]
    fn test_sample_excluded_outside_range() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let g = rng.sample(10, 20, 70);
            assert!((10..20).contains(&g));
        }
    }

    #[test]
    fn test_sample_two_values_excluding_one() {
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            assert_eq!(rng.sample(5, 7, 5), 6);
            assert_eq!(rng.sample(5, 7, 6), 5);
        }
    }

    #[test]
    fn test_sample_single_value_not_excluded() {
        let mut rng = GameRng::new(9);
        assert_eq!(rng.sample(1, 2, 50), 1);
    }

    #[test]
    fn test_sample_covers_every_candidate() {
        let mut rng = GameRng::new(11);
        let mut seen = [0u32; 10];
        for _ in 0..5000 {
            seen[rng.sample(0, 10, 4) as usize] += 1;
        }

        assert_eq!(seen[4], 0);
        for (value, &count) in seen.iter().enumerate() {
            if value != 4 {
                // Expected ~555 each
                assert!(count > 400 && count < 720, "value {} drawn {} times", value, count);
            }
        }
    }

    #[test]
    #[should_panic(expected = "holds only the excluded value")]
    fn test_sample_degenerate_panics() {
        let mut rng = GameRng::new(1);
        rng.sample(8, 9, 8);
    }

    #[test]
    #[should_panic(expected = "Empty sample range")]
    fn test_sample_empty_panics() {
        let mut rng = GameRng::new(1);
        rng.sample(9, 9, 0);
    }

    #[test]
    fn test_try_sample_errors() {
        let mut rng = GameRng::new(1);
        assert!(matches!(
            rng.try_sample(8, 9, 8),
            Err(GuessError::DegenerateRange { lower: 8, upper: 9, exclude: 8 })
        ));
        assert!(matches!(
            rng.try_sample(9, 3, 0),
            Err(GuessError::EmptyRange { lower: 9, upper: 3 })
        ));
        assert_eq!(rng.try_sample(8, 9, 1).unwrap(), 8);
    }

    #[test]
    fn test_midpoint_sampler() {
        let mut sampler = MidpointSampler;
        assert_eq!(sampler.sample(1, 100, 0), 50);
        assert_eq!(sampler.sample(1, 100, 50), 49);
        assert_eq!(sampler.sample(5, 7, 6), 5);
        assert_eq!(sampler.sample(5, 6, 0), 5);
        assert_eq!(sampler.sample(5, 7, 5), 6);
    }

    #[test]
    fn test_samplers_at_extreme_bounds() {
        let mut rng = GameRng::new(5);
        for _ in 0..200 {
            let g = rng.sample(i32::MIN, i32::MAX, 0);
            assert!(g != 0 && g != i32::MAX);
        }
        assert_eq!(rng.sample(i32::MAX - 2, i32::MAX, i32::MAX - 2), i32::MAX - 1);
        assert_eq!(rng.sample(i32::MIN, i32::MIN + 2, i32::MIN + 1), i32::MIN);

        let mut midpoint = MidpointSampler;
        assert_eq!(midpoint.sample(i32::MIN, i32::MAX, 0), -1);
        assert_eq!(midpoint.sample(i32::MIN, i32::MAX, -1), -2);
        assert_eq!(midpoint.sample(i32::MAX - 1, i32::MAX, 0), i32::MAX - 1);

        assert!(matches!(
            rng.try_sample(i32::MAX - 1, i32::MAX, i32::MAX - 1),
            Err(GuessError::DegenerateRange { .. })
        ));
        assert!(rng.try_sample(i32::MIN, i32::MAX, 7).is_ok());
    }

    #[test]
    fn test_scripted_sampler_replays() {
        let mut sampler = ScriptedSampler::new([70, 30]);
        assert_eq!(sampler.remaining(), 2);
        assert_eq!(sampler.sample(1, 100, 42), 70);
        assert_eq!(sampler.sample(1, 70, 70), 30);
        assert_eq!(sampler.remaining(), 0);
    }

    #[test]
    #[should_panic(expected = "is not a valid sample")]
    fn test_scripted_sampler_rejects_excluded_value() {
        let mut sampler = ScriptedSampler::new([42]);
        sampler.sample(1, 100, 42);
    }

    #[test]
    #[should_panic(expected = "Script exhausted")]
    fn test_scripted_sampler_exhausted() {
        let mut sampler = ScriptedSampler::new(Vec::new());
        sampler.sample(1, 100, 42);
    }
}
