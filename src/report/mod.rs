//! Reporting module for workout summaries.

pub mod summary;

pub use summary::{render_summary, render_summary_localized, round3, InfoMessage, Locale};
