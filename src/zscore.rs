use crate::variance::VarianceBand;

/// Best-case, midpoint, and worst-case z-scores for one round.
///
/// "Best case" is the least suspicious reading (the deviation band
/// endpoint that shrinks the z-score magnitude for a good round),
/// "worst case" the most suspicious.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZScoreRange {
    pub best: f64,
    pub mid: f64,
    pub worst: f64,
}

/// Representative z-score: strokes better divided by the band midpoint.
/// This is the value the flag tiers are judged against.
pub fn midpoint_z_score(strokes_better: f64, band: VarianceBand) -> f64 {
    strokes_better / band.midpoint()
}

/// Compute the full z-score range for a round.
///
/// For a better-than-expected round the high deviation is the
/// forgiving assumption (best = strokes / high), the low deviation
/// the damning one. For a round at or below expectation the mapping
/// inverts, matching how the probability endpoints are keyed.
pub fn z_score_range(strokes_better: f64, band: VarianceBand) -> ZScoreRange {
    let (best, worst) = if strokes_better > 0.0 {
        (strokes_better / band.high, strokes_better / band.low)
    } else {
        (strokes_better / band.low, strokes_better / band.high)
    };

    ZScoreRange {
        best,
        mid: midpoint_z_score(strokes_better, band),
        worst,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variance::variance_band;

    #[test]
    fn test_zero_strokes_better_is_zero_everywhere() {
        let range = z_score_range(0.0, variance_band(10.0));
        assert!((range.best - 0.0).abs() < 1e-10);
        assert!((range.mid - 0.0).abs() < 1e-10);
        assert!((range.worst - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_midpoint_z_for_five_strokes() {
        // Band (2.5, 3.0) has midpoint 2.75.
        let z = midpoint_z_score(5.0, variance_band(10.0));
        assert!((z - 5.0 / 2.75).abs() < 1e-10);
    }

    #[test]
    fn test_good_round_best_uses_high_deviation() {
        let band = variance_band(10.0); // (2.5, 3.0)
        let range = z_score_range(5.0, band);
        assert!((range.best - 5.0 / 3.0).abs() < 1e-10);
        assert!((range.worst - 5.0 / 2.5).abs() < 1e-10);
        assert!(range.best < range.mid && range.mid < range.worst);
    }

    #[test]
    fn test_bad_round_mapping_inverts() {
        let band = variance_band(10.0);
        let range = z_score_range(-5.0, band);
        assert!((range.best - (-5.0 / 2.5)).abs() < 1e-10);
        assert!((range.worst - (-5.0 / 3.0)).abs() < 1e-10);
    }

    #[test]
    fn test_sign_follows_strokes_better() {
        let band = variance_band(18.0);
        let good = z_score_range(3.0, band);
        assert!(good.best > 0.0 && good.mid > 0.0 && good.worst > 0.0);

        let bad = z_score_range(-3.0, band);
        assert!(bad.best < 0.0 && bad.mid < 0.0 && bad.worst < 0.0);
    }
}
