use log::debug;
use rayon::prelude::*;

use crate::differential::score_differential;
use crate::error::InputError;
use crate::expectation::expectation;
use crate::flag::{classify, FlagVerdict};
use crate::probability::{probability_range, OddsRange, PercentageRange, ProbabilityRange};
use crate::round::RoundInput;
use crate::variance::{variance_band, VarianceBand};
use crate::zscore::{z_score_range, ZScoreRange};

/// Full evaluation of one reported round.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct RoundEvaluation {
    pub player: String,
    pub course_handicap: f64,
    pub expected_score: f64,
    pub strokes_better: f64,
    pub score_differential: f64,
    pub variance: VarianceBand,
    pub z_scores: ZScoreRange,
    pub probabilities: ProbabilityRange,
    pub odds: OddsRange,
    pub percentages: PercentageRange,
    pub verdict: FlagVerdict,
}

/// Evaluate one round end to end.
///
/// Validates the input, then runs the pipeline: differential and
/// expectation, variance band, z-scores, tail probabilities with
/// their odds/percentage renderings, and finally the flag verdict
/// (judged on the midpoint z-score).
///
/// # Arguments
/// * `player` - Golfer's name, carried through for reporting
/// * `input` - The round and course values
///
/// # Returns
/// The aggregate evaluation, or `InputError` if the round is rejected
/// before any calculation.
pub fn evaluate_round(player: &str, input: &RoundInput) -> Result<RoundEvaluation, InputError> {
    input.validate()?;

    let differential = score_differential(input.score, input.course_rating, input.course_slope);
    let expected = expectation(input);
    let band = variance_band(input.handicap_index);

    let z_scores = z_score_range(expected.strokes_better, band);
    let probabilities = probability_range(expected.strokes_better, band);
    let odds = OddsRange::from_probabilities(&probabilities);
    let percentages = PercentageRange::from_probabilities(&probabilities);

    let verdict = classify(differential, z_scores.mid, expected.strokes_better);

    debug!(
        "evaluated round for {player}: strokes_better={:.2}, mid_z={:.2}, flag={}",
        expected.strokes_better, z_scores.mid, verdict.level
    );

    Ok(RoundEvaluation {
        player: player.to_string(),
        course_handicap: expected.course_handicap,
        expected_score: expected.expected_score,
        strokes_better: expected.strokes_better,
        score_differential: differential,
        variance: band,
        z_scores,
        probabilities,
        odds,
        percentages,
        verdict,
    })
}

/// Evaluate a batch of rounds in parallel.
///
/// Rounds are independent, so the batch fans out across threads; each
/// entry succeeds or is rejected on its own.
pub fn evaluate_rounds(
    rounds: &[(String, RoundInput)],
) -> Vec<Result<RoundEvaluation, InputError>> {
    rounds
        .par_iter()
        .map(|(player, input)| evaluate_round(player, input))
        .collect()
}
