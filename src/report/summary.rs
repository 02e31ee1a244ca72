//! Human-readable summary lines for workout records.
//!
//! Every numeric field is rounded half away from zero to three decimal places
//! before it is printed, so the text does not depend on how the platform's
//! formatter breaks ties.

use crate::workouts::types::WorkoutRecord;
use serde::{Deserialize, Serialize};

/// Language of the summary template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Russian,
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Russian => write!(f, "Russian"),
        }
    }
}

/// Round half away from zero to three decimal places.
///
/// Values too large to scale are returned unchanged; negative zero becomes zero.
pub fn round3(value: f64) -> f64 {
    let scaled = value * 1000.0;
    if !scaled.is_finite() {
        return value;
    }

    let rounded = scaled.round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Display snapshot of a workout record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    /// Snapshot a record, rounding every metric for display.
    pub fn from_record(record: &WorkoutRecord) -> Self {
        Self {
            training_type: record.kind().label(),
            duration: round3(record.duration_hours()),
            distance: round3(record.distance_km()),
            speed: round3(record.mean_speed_kmh()),
            calories: round3(record.calories()),
        }
    }

    /// Render the message in the given language.
    pub fn render(&self, locale: Locale) -> String {
        match locale {
            Locale::English => format!(
                "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
                 Avg speed: {:.3} km/h; Calories: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            Locale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl std::fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(Locale::English))
    }
}

/// Render the English summary line for a record.
pub fn render_summary(record: &WorkoutRecord) -> String {
    render_summary_localized(record, Locale::English)
}

/// Render the summary line for a record in the given language.
pub fn render_summary_localized(record: &WorkoutRecord, locale: Locale) -> String {
    InfoMessage::from_record(record).render(locale)
}
