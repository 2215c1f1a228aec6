use crate::constants::STANDARD_SLOPE;
use crate::round::RoundInput;

/// What a golfer's handicap predicts for one round.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExpectationResult {
    /// Handicap index scaled to this course's slope
    pub course_handicap: f64,

    /// Course rating plus course handicap
    pub expected_score: f64,

    /// Expected score minus actual score; positive means the golfer
    /// outperformed the prediction
    pub strokes_better: f64,
}

/// Derive course handicap, expected score, and signed
/// strokes-better-than-expected from one round.
pub fn expectation(input: &RoundInput) -> ExpectationResult {
    let course_handicap = input.handicap_index * (input.course_slope / STANDARD_SLOPE);
    let expected_score = input.course_rating + course_handicap;
    let strokes_better = expected_score - input.score;

    ExpectationResult {
        course_handicap,
        expected_score,
        strokes_better,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_slope_keeps_handicap_unscaled() {
        let result = expectation(&RoundInput::new(10.0, 72.0, 113.0, 82.0));
        assert!((result.course_handicap - 10.0).abs() < 1e-10);
        assert!((result.expected_score - 82.0).abs() < 1e-10);
        assert!((result.strokes_better - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_harder_course_raises_expected_score() {
        let result = expectation(&RoundInput::new(10.0, 72.0, 130.0, 82.0));
        assert!((result.course_handicap - 10.0 * 130.0 / 113.0).abs() < 1e-10);
        assert!(result.expected_score > 82.0);
    }

    #[test]
    fn test_strokes_better_sign() {
        let better = expectation(&RoundInput::new(10.0, 72.0, 113.0, 77.0));
        assert!((better.strokes_better - 5.0).abs() < 1e-10);

        let worse = expectation(&RoundInput::new(10.0, 72.0, 113.0, 87.0));
        assert!((worse.strokes_better - (-5.0)).abs() < 1e-10);
    }

    #[test]
    fn test_plus_handicap_expected_below_rating() {
        let result = expectation(&RoundInput::new(-2.0, 72.0, 113.0, 70.0));
        assert!((result.course_handicap - (-2.0)).abs() < 1e-10);
        assert!((result.expected_score - 70.0).abs() < 1e-10);
    }
}
