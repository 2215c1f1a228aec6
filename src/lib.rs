//! GolfGuard Core - sandbagging detection for handicap-based golf scoring.
//!
//! This library estimates how statistically improbable a reported
//! round is given the golfer's handicap index, and flags rounds that
//! look implausibly good. The core is a pure numeric pipeline with
//! optional Python bindings via PyO3 for the interactive front end.

pub mod constants;
pub mod differential;
pub mod error;
pub mod evaluate;
pub mod expectation;
pub mod flag;
pub mod probability;
pub mod round;
pub mod simulation;
pub mod variance;
pub mod zscore;

#[cfg(feature = "python")]
mod python;

pub use constants::{
    MIN_PROBABILITY, RED_FLAG_DIFFERENTIAL, RED_FLAG_Z, REVIEW_FLAG_DIFFERENTIAL, REVIEW_FLAG_Z,
    STANDARD_SLOPE,
};
pub use differential::score_differential;
pub use error::InputError;
pub use evaluate::{evaluate_round, evaluate_rounds, RoundEvaluation};
pub use expectation::{expectation, ExpectationResult};
pub use flag::{classify, FlagLevel, FlagVerdict};
pub use probability::{
    odds_against, percent_chance, probability_range, OddsRange, PercentageRange, ProbabilityRange,
};
pub use round::RoundInput;
pub use simulation::{simulate_batch, simulate_tail_probability};
pub use variance::{variance_band, VarianceBand};
pub use zscore::{midpoint_z_score, z_score_range, ZScoreRange};
