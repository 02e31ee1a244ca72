//! Metrics module: workout formulas and error types.

pub mod error;
pub mod formulas;

pub use error::{WorkoutError, WorkoutResult};
