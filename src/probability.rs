use statrs::distribution::{ContinuousCDF, Normal};

use crate::constants::MIN_PROBABILITY;
use crate::variance::VarianceBand;

/// Tail probabilities for the two ends of the deviation band.
///
/// `low` and `high` are keyed by the z-score endpoint they derive from
/// (`low` from strokes / high deviation, `high` from strokes / low
/// deviation), not by magnitude: for a better-than-expected round the
/// `low` entry is numerically the larger probability. Callers pair
/// `low` with the best-case scenario and `high` with the worst case.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityRange {
    pub low: f64,
    pub high: f64,
}

impl ProbabilityRange {
    /// Midpoint probability, used for the representative odds.
    pub fn mid(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Odds against the round expressed as "1 in N" for each scenario.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OddsRange {
    pub best: u64,
    pub mid: u64,
    pub worst: u64,
}

/// Percentage chance of the round for each scenario.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PercentageRange {
    pub best: f64,
    pub mid: f64,
    pub worst: f64,
}

/// Estimate how likely a round this far from expectation is.
///
/// Both band endpoints are converted to z-scores, then to tail
/// probabilities under the standard normal: the survival function for
/// a better-than-expected round (chance of playing at least this
/// well), the CDF for a round at or below expectation (chance of
/// playing at least this poorly). Each probability is floored at
/// `MIN_PROBABILITY` so the odds conversion never divides by zero.
pub fn probability_range(strokes_better: f64, band: VarianceBand) -> ProbabilityRange {
    let low_z = strokes_better / band.high;
    let high_z = strokes_better / band.low;

    let normal = Normal::new(0.0, 1.0).unwrap();

    let (low, high) = if strokes_better > 0.0 {
        (normal.sf(low_z), normal.sf(high_z))
    } else {
        (normal.cdf(low_z), normal.cdf(high_z))
    };

    ProbabilityRange {
        low: low.max(MIN_PROBABILITY),
        high: high.max(MIN_PROBABILITY),
    }
}

/// Odds against as a "1 in N" count: `round(1 / probability)`.
pub fn odds_against(probability: f64) -> u64 {
    (1.0 / probability).round() as u64
}

/// Probability expressed as a percentage.
pub fn percent_chance(probability: f64) -> f64 {
    probability * 100.0
}

impl OddsRange {
    /// Best case pairs with the `low` z-score endpoint, worst case
    /// with the `high` one, matching the probability keying.
    pub fn from_probabilities(range: &ProbabilityRange) -> Self {
        OddsRange {
            best: odds_against(range.low),
            mid: odds_against(range.mid()),
            worst: odds_against(range.high),
        }
    }
}

impl PercentageRange {
    pub fn from_probabilities(range: &ProbabilityRange) -> Self {
        PercentageRange {
            best: percent_chance(range.low),
            mid: percent_chance(range.mid()),
            worst: percent_chance(range.high),
        }
    }
}
