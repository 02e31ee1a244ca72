//! Workout module: activity kinds, dispatch and batch processing.

pub mod batch;
pub mod dispatcher;
pub mod types;

pub use batch::{
    default_packages, process_packages, render_outcome, EntryOutcome, OutputFormat, Package,
};
pub use dispatcher::{parse_params, read_package};
pub use types::{ActivityKind, Reading, WorkoutParams, WorkoutRecord};
