//! Workout construction error types.

use thiserror::Error;

/// Errors that can occur while turning a reading into a workout record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkoutError {
    /// The activity code is not one of `RUN`, `WLK`, `SWM`.
    #[error("Unsupported activity: {0}")]
    UnsupportedActivity(String),

    /// The reading has the wrong number of fields for its activity.
    #[error("Arity mismatch for {code}: expected {expected} fields, got {actual}")]
    ArityMismatch {
        code: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A field is outside the domain the formulas are defined on.
    #[error("Invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Result type for workout operations.
pub type WorkoutResult<T> = Result<T, WorkoutError>;
