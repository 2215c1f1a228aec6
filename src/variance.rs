/// Plausible range of a golfer's round-to-round scoring standard
/// deviation at a given skill level.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VarianceBand {
    pub low: f64,
    pub high: f64,
}

impl VarianceBand {
    /// Midpoint of the band, used as the representative deviation.
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Look up the empirical standard-deviation band for a handicap index.
///
/// Higher handicaps scatter more from round to round. Bucket upper
/// bounds are inclusive: an index of exactly 5.0 stays in the
/// (2.0, 2.5) band.
pub fn variance_band(handicap_index: f64) -> VarianceBand {
    let (low, high) = if handicap_index <= 0.0 {
        (1.8, 2.2)
    } else if handicap_index <= 5.0 {
        (2.0, 2.5)
    } else if handicap_index <= 10.0 {
        (2.5, 3.0)
    } else if handicap_index <= 15.0 {
        (3.0, 3.5)
    } else if handicap_index <= 20.0 {
        (3.5, 4.0)
    } else if handicap_index <= 25.0 {
        (4.0, 4.5)
    } else if handicap_index <= 30.0 {
        (4.5, 5.0)
    } else {
        (5.0, 5.5)
    };

    VarianceBand { low, high }
}
