//! Python bindings for the GolfGuard core.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::constants::{
    MIN_PROBABILITY, RED_FLAG_DIFFERENTIAL, RED_FLAG_Z, REVIEW_FLAG_DIFFERENTIAL, REVIEW_FLAG_Z,
    STANDARD_SLOPE,
};
use crate::error::InputError;
use crate::evaluate::RoundEvaluation;
use crate::expectation::ExpectationResult;
use crate::flag::{FlagLevel, FlagVerdict};
use crate::probability::{OddsRange, PercentageRange, ProbabilityRange};
use crate::round::RoundInput;
use crate::variance::VarianceBand;
use crate::zscore::ZScoreRange;

impl From<InputError> for PyErr {
    fn from(err: InputError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[pymethods]
impl RoundInput {
    #[new]
    fn py_new(handicap_index: f64, course_rating: f64, course_slope: f64, score: f64) -> Self {
        RoundInput::new(handicap_index, course_rating, course_slope, score)
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundInput(handicap_index={}, course_rating={}, course_slope={}, score={})",
            self.handicap_index, self.course_rating, self.course_slope, self.score
        )
    }
}

#[pymethods]
impl VarianceBand {
    #[pyo3(name = "midpoint")]
    fn py_midpoint(&self) -> f64 {
        self.midpoint()
    }

    fn __repr__(&self) -> String {
        format!("VarianceBand({}, {})", self.low, self.high)
    }
}

#[pymethods]
impl ProbabilityRange {
    #[pyo3(name = "mid")]
    fn py_mid(&self) -> f64 {
        self.mid()
    }

    fn __repr__(&self) -> String {
        format!("ProbabilityRange(low={:.6}, high={:.6})", self.low, self.high)
    }
}

#[pymethods]
impl FlagVerdict {
    fn __str__(&self) -> String {
        format!("{}: {}", self.level, self.explanation)
    }

    fn __repr__(&self) -> String {
        format!("FlagVerdict({:?})", self.level)
    }
}

#[pymethods]
impl FlagLevel {
    fn __str__(&self) -> String {
        self.to_string()
    }
}

#[pymethods]
impl RoundEvaluation {
    fn __repr__(&self) -> String {
        format!(
            "RoundEvaluation({}, strokes_better={:.1}, mid_z={:.2}, flag={:?})",
            self.player, self.strokes_better, self.z_scores.mid, self.verdict.level
        )
    }
}

/// Evaluate one round end to end.
///
/// Python-friendly wrapper around the core evaluation pipeline.
#[pyfunction]
fn evaluate_round(
    player: &str,
    handicap_index: f64,
    course_rating: f64,
    course_slope: f64,
    score: f64,
) -> PyResult<RoundEvaluation> {
    let input = RoundInput::new(handicap_index, course_rating, course_slope, score);
    Ok(crate::evaluate::evaluate_round(player, &input)?)
}

/// Evaluate a batch of `(player, round)` pairs in parallel.
///
/// Raises `ValueError` on the first invalid round.
#[pyfunction]
fn evaluate_rounds(rounds: Vec<(String, RoundInput)>) -> PyResult<Vec<RoundEvaluation>> {
    crate::evaluate::evaluate_rounds(&rounds)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// USGA score differential for one round.
#[pyfunction]
fn score_differential(score: f64, course_rating: f64, course_slope: f64) -> f64 {
    crate::differential::score_differential(score, course_rating, course_slope)
}

/// Standard-deviation band for a handicap index.
#[pyfunction]
fn variance_band(handicap_index: f64) -> VarianceBand {
    crate::variance::variance_band(handicap_index)
}

/// Expectation values (course handicap, expected score, strokes better).
#[pyfunction]
fn expectation(
    handicap_index: f64,
    course_rating: f64,
    course_slope: f64,
    score: f64,
) -> PyResult<ExpectationResult> {
    let input = RoundInput::new(handicap_index, course_rating, course_slope, score);
    input.validate()?;
    Ok(crate::expectation::expectation(&input))
}

/// Tail-probability range for one round.
#[pyfunction]
fn probability_range(
    handicap_index: f64,
    course_rating: f64,
    course_slope: f64,
    score: f64,
) -> PyResult<ProbabilityRange> {
    let input = RoundInput::new(handicap_index, course_rating, course_slope, score);
    input.validate()?;
    let expected = crate::expectation::expectation(&input);
    let band = crate::variance::variance_band(handicap_index);
    Ok(crate::probability::probability_range(
        expected.strokes_better,
        band,
    ))
}

/// Seeded Monte Carlo cross-check of the analytic tail probability.
#[pyfunction]
#[pyo3(signature = (handicap_index, course_rating, course_slope, score, n_rounds = 100_000, seed = None))]
fn simulate_tail_probability(
    handicap_index: f64,
    course_rating: f64,
    course_slope: f64,
    score: f64,
    n_rounds: usize,
    seed: Option<u64>,
) -> PyResult<f64> {
    let input = RoundInput::new(handicap_index, course_rating, course_slope, score);
    Ok(crate::simulation::simulate_tail_probability(
        &input, n_rounds, seed,
    )?)
}

/// Python module definition
#[pymodule]
fn golfguard_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Classes
    m.add_class::<RoundInput>()?;
    m.add_class::<VarianceBand>()?;
    m.add_class::<ExpectationResult>()?;
    m.add_class::<ZScoreRange>()?;
    m.add_class::<ProbabilityRange>()?;
    m.add_class::<OddsRange>()?;
    m.add_class::<PercentageRange>()?;
    m.add_class::<FlagLevel>()?;
    m.add_class::<FlagVerdict>()?;
    m.add_class::<RoundEvaluation>()?;

    // Core functions
    m.add_function(wrap_pyfunction!(evaluate_round, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_rounds, m)?)?;
    m.add_function(wrap_pyfunction!(score_differential, m)?)?;
    m.add_function(wrap_pyfunction!(variance_band, m)?)?;
    m.add_function(wrap_pyfunction!(expectation, m)?)?;
    m.add_function(wrap_pyfunction!(probability_range, m)?)?;
    m.add_function(wrap_pyfunction!(simulate_tail_probability, m)?)?;

    // Constants
    m.add("STANDARD_SLOPE", STANDARD_SLOPE)?;
    m.add("RED_FLAG_Z", RED_FLAG_Z)?;
    m.add("REVIEW_FLAG_Z", REVIEW_FLAG_Z)?;
    m.add("RED_FLAG_DIFFERENTIAL", RED_FLAG_DIFFERENTIAL)?;
    m.add("REVIEW_FLAG_DIFFERENTIAL", REVIEW_FLAG_DIFFERENTIAL)?;
    m.add("MIN_PROBABILITY", MIN_PROBABILITY)?;

    Ok(())
}
