//! Workout Stats - workout statistics calculator
//!
//! Computes distance, average speed and calories burned for running, walking
//! and swimming workouts from flat sensor readings, and renders a
//! human-readable summary line for each workout.

pub mod metrics;
pub mod report;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use metrics::error::{WorkoutError, WorkoutResult};
pub use report::summary::{render_summary, Locale};
pub use storage::config::AppConfig;
pub use workouts::dispatcher::read_package;
pub use workouts::types::{ActivityKind, Reading, WorkoutRecord};
