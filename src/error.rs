use thiserror::Error;

/// Rejection raised before any calculation runs.
///
/// A round either evaluates fully or the caller gets one of these;
/// there is no partial result and nothing downstream ever sees a NaN
/// or infinite input.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("course slope must be positive, got {value}")]
    NonPositiveSlope { value: f64 },
}
