/// Standard slope rating of a course of average difficulty
pub const STANDARD_SLOPE: f64 = 113.0;

/// Z-score at or above which a better-than-expected round is red-flagged
pub const RED_FLAG_Z: f64 = 2.5;

/// Z-score at or above which a better-than-expected round is marked for review
pub const REVIEW_FLAG_Z: f64 = 1.5;

/// Score differential at or below which a round is red-flagged
/// (scratch-level performance)
pub const RED_FLAG_DIFFERENTIAL: f64 = -1.0;

/// Score differential at or below which a round is marked for review
pub const REVIEW_FLAG_DIFFERENTIAL: f64 = 0.0;

/// Floor applied to every tail probability so that odds (1 / p) stay finite
pub const MIN_PROBABILITY: f64 = 1e-10;
