use std::fmt;

use crate::constants::{
    RED_FLAG_DIFFERENTIAL, RED_FLAG_Z, REVIEW_FLAG_DIFFERENTIAL, REVIEW_FLAG_Z,
};

/// Flag tier for one round.
#[cfg_attr(feature = "python", pyo3::pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagLevel {
    None,
    Review,
    Red,
}

impl fmt::Display for FlagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FlagLevel::None => "⚪ NO FLAG",
            FlagLevel::Review => "🟡 REVIEW",
            FlagLevel::Red => "🔺 RED FLAG",
        };
        write!(f, "{label}")
    }
}

/// Flag tier plus the fixed explanation shown to reviewers.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Debug, PartialEq)]
pub struct FlagVerdict {
    pub level: FlagLevel,
    pub explanation: String,
}

const RED_EXPLANATION: &str = "Likely sandbagging - Either scratch-level performance \
                               or 2.5+ standard deviations better than expected";

const REVIEW_EXPLANATION: &str = "Possible anomaly - Could be a career-best round or \
                                  a fluke, especially in tournament play";

const NONE_EXPLANATION: &str = "Normal round relative to handicap";

/// Apply the tiered flagging policy to one round.
///
/// Only suspiciously good scores get flagged: a round at or below
/// expectation is never flagged, whatever its differential or
/// z-score. Tiers are checked in order and the first match wins.
pub fn classify(score_differential: f64, z_score: f64, strokes_better: f64) -> FlagVerdict {
    if strokes_better > 0.0 {
        if score_differential <= RED_FLAG_DIFFERENTIAL || z_score >= RED_FLAG_Z {
            return FlagVerdict {
                level: FlagLevel::Red,
                explanation: RED_EXPLANATION.to_string(),
            };
        }

        if score_differential <= REVIEW_FLAG_DIFFERENTIAL
            || (z_score >= REVIEW_FLAG_Z && z_score < RED_FLAG_Z)
        {
            return FlagVerdict {
                level: FlagLevel::Review,
                explanation: REVIEW_EXPLANATION.to_string(),
            };
        }
    }

    FlagVerdict {
        level: FlagLevel::None,
        explanation: NONE_EXPLANATION.to_string(),
    }
}
