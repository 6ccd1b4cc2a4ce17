//! Property tests for sampling and convergence.

use guess_my_number::{
    Feedback, GameConfig, GameRng, GuessEngine, Outcome, RangeSampler, SecretNumber,
};
use proptest::prelude::*;

/// Random guesses have no tight worst case, so the binary-search-depth bound
/// is checked on the average. The expected value for `[1, 100)` is about 7.5.
const MAX_AVERAGE_ROUNDS: f64 = 10.0;

proptest! {
    #[test]
    fn sample_respects_bounds_and_exclusion(
        lower in -1000i32..1000,
        width in 2i32..500,
        offset in -5i32..505,
        seed in any::<u64>(),
    ) {
        let upper = lower + width;
        let exclude = lower + offset;
        let mut rng = GameRng::new(seed);

        for _ in 0..20 {
            let g = rng.sample(lower, upper, exclude);
            prop_assert!(lower <= g && g < upper);
            prop_assert_ne!(g, exclude);
        }
    }

    #[test]
    fn honest_play_always_wins(value in 1i32..100, seed in any::<u64>()) {
        let config = GameConfig::default();
        let secret = SecretNumber::new(value, &config).unwrap();
        let mut engine = GuessEngine::start(secret, &config, GameRng::new(seed));
        prop_assert_ne!(engine.current_guess(), value);

        let mut won = false;
        for _ in 0..99 {
            let Some(feedback) = Feedback::truthful(engine.current_guess(), value) else {
                break;
            };
            let before = engine.rounds();
            match engine.apply_feedback(feedback, secret) {
                Outcome::Continue => {
                    prop_assert_eq!(engine.rounds(), before + 1);
                    prop_assert!(engine.range().contains(value));
                }
                Outcome::Won { rounds } => {
                    prop_assert_eq!(rounds, engine.history().len());
                    won = true;
                    break;
                }
                Outcome::Invalid => prop_assert!(false, "honest feedback rejected"),
            }
        }
        prop_assert!(won);
    }

    #[test]
    fn lies_never_change_state(value in 1i32..100, seed in any::<u64>()) {
        let config = GameConfig::default();
        let secret = SecretNumber::new(value, &config).unwrap();
        let mut engine = GuessEngine::start(secret, &config, GameRng::new(seed));

        let guess = engine.current_guess();
        let lie = match Feedback::truthful(guess, value) {
            Some(Feedback::Lower) => Feedback::Greater,
            Some(Feedback::Greater) => Feedback::Lower,
            None => unreachable!("opening guess equals the secret"),
        };
        let range = engine.range();

        prop_assert_eq!(engine.apply_feedback(lie, secret), Outcome::Invalid);
        prop_assert_eq!(engine.current_guess(), guess);
        prop_assert_eq!(engine.range(), range);
        prop_assert_eq!(engine.rounds(), 1);
    }
}

#[test]
fn average_rounds_stay_near_binary_search_depth() {
    let config = GameConfig::default();
    let mut total = 0usize;
    let mut games = 0usize;

    for value in 1..100 {
        let secret = SecretNumber::new(value, &config).unwrap();
        for seed in 0..20u64 {
            let mut engine = GuessEngine::start(secret, &config, GameRng::new(seed * 1000 + value as u64));
            while let Some(feedback) = Feedback::truthful(engine.current_guess(), value) {
                engine.apply_feedback(feedback, secret);
            }
            total += engine.rounds();
            games += 1;
        }
    }

    let average = total as f64 / games as f64;
    assert!(average <= MAX_AVERAGE_ROUNDS, "average {} rounds", average);
}
