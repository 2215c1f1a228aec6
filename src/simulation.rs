use log::debug;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Normal;

use crate::constants::MIN_PROBABILITY;
use crate::error::InputError;
use crate::expectation::expectation;
use crate::round::RoundInput;
use crate::variance::variance_band;

/// Monte Carlo cross-check of the analytic tail probability.
///
/// Draws `n_rounds` scores from a normal distribution centered on the
/// expected score with the band-midpoint deviation, and returns the
/// fraction at least as extreme as the actual score on the same side
/// the analytic estimate uses: at or below the actual score for a
/// better-than-expected round, at or above it otherwise. The result
/// is floored at `MIN_PROBABILITY` like the analytic estimate.
///
/// # Arguments
/// * `input` - The round and course values
/// * `n_rounds` - Number of simulated rounds; zero yields the floor
/// * `seed` - Optional seed for reproducible runs
pub fn simulate_tail_probability(
    input: &RoundInput,
    n_rounds: usize,
    seed: Option<u64>,
) -> Result<f64, InputError> {
    input.validate()?;

    let expected = expectation(input);
    let sigma = variance_band(input.handicap_index).midpoint();

    // Mean is finite after validation and the band midpoint is always
    // positive, so the distribution is constructible.
    let normal = Normal::new(expected.expected_score, sigma).unwrap();

    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let at_least_as_extreme = |simulated: f64| {
        if expected.strokes_better > 0.0 {
            simulated <= input.score
        } else {
            simulated >= input.score
        }
    };

    let mut hits = 0usize;
    for _ in 0..n_rounds {
        if at_least_as_extreme(normal.sample(&mut rng)) {
            hits += 1;
        }
    }

    let probability = if n_rounds == 0 {
        0.0
    } else {
        hits as f64 / n_rounds as f64
    };

    debug!(
        "simulated {n_rounds} rounds: {hits} at least as extreme (p={:.6})",
        probability
    );

    Ok(probability.max(MIN_PROBABILITY))
}

/// Run several independent simulations; each draws its own sub-seed
/// from one root generator so a single seed reproduces the whole
/// batch.
pub fn simulate_batch(
    input: &RoundInput,
    n_rounds: usize,
    n_simulations: usize,
    seed: Option<u64>,
) -> Result<Vec<f64>, InputError> {
    let mut rng = match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut results = Vec::with_capacity(n_simulations);
    for _ in 0..n_simulations {
        let sub_seed = rng.gen::<u64>();
        results.push(simulate_tail_probability(input, n_rounds, Some(sub_seed))?);
    }

    Ok(results)
}
