//! Sequential processing of workout packages.
//!
//! Each package is handled on its own; a failing entry is reported and the
//! remaining entries are still processed.

use crate::metrics::error::WorkoutResult;
use crate::report::summary::{render_summary_localized, InfoMessage, Locale};
use crate::workouts::dispatcher::read_package;
use crate::workouts::types::{Reading, WorkoutRecord};
use serde::{Deserialize, Serialize};

/// One `(code, reading)` pair to process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    /// Activity code (`RUN`, `WLK`, `SWM`)
    pub code: String,
    /// Raw reading fields
    pub data: Reading,
}

impl Package {
    pub fn new(code: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            data: Reading::new(data),
        }
    }
}

/// Built-in packages processed when no others are configured.
pub fn default_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Result of processing one package.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryOutcome {
    /// Code of the package this outcome belongs to
    pub code: String,
    /// Computed record, or the reason the entry was rejected
    pub result: WorkoutResult<WorkoutRecord>,
}

impl EntryOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Output format for processed entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Fixed-template summary line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// JSON shape of a successful entry.
#[derive(Serialize)]
struct JsonSummary<'a> {
    code: &'a str,
    #[serde(flatten)]
    message: InfoMessage,
}

/// Process every package in order.
pub fn process_packages(packages: &[Package]) -> Vec<EntryOutcome> {
    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            let result = read_package(&package.code, &package.data);
            if let Err(ref e) = result {
                tracing::warn!(index, code = %package.code, "Skipping workout entry: {}", e);
            }
            EntryOutcome {
                code: package.code.clone(),
                result,
            }
        })
        .collect()
}

/// Render the line printed for one outcome.
pub fn render_outcome(outcome: &EntryOutcome, format: OutputFormat, locale: Locale) -> String {
    match (&outcome.result, format) {
        (Ok(record), OutputFormat::Text) => render_summary_localized(record, locale),
        (Ok(record), OutputFormat::Json) => {
            let summary = JsonSummary {
                code: &outcome.code,
                message: InfoMessage::from_record(record),
            };
            serde_json::to_string(&summary).unwrap_or_else(|e| format!("Error: {}", e))
        }
        (Err(e), OutputFormat::Text) => format!("Error: {}", e),
        (Err(e), OutputFormat::Json) => serde_json::json!({
            "code": outcome.code,
            "error": e.to_string(),
        })
        .to_string(),
    }
}
