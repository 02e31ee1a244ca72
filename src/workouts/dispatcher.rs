//! Builds workout records from an activity code and a reading.

use crate::metrics::error::{WorkoutError, WorkoutResult};
use crate::workouts::types::{ActivityKind, Reading, WorkoutParams, WorkoutRecord};

/// Map a reading onto the parameter set of `kind`.
///
/// Fails with [`WorkoutError::ArityMismatch`] when the field count does not
/// match what the kind expects. Field domains are not checked here.
pub fn parse_params(kind: ActivityKind, reading: &Reading) -> WorkoutResult<WorkoutParams> {
    let expected = kind.expected_fields();
    if reading.len() != expected {
        return Err(WorkoutError::ArityMismatch {
            code: kind.code(),
            expected,
            actual: reading.len(),
        });
    }

    let params = match (kind, reading.fields()) {
        (ActivityKind::Running, &[action, duration_h, weight_kg]) => WorkoutParams::Running {
            action,
            duration_h,
            weight_kg,
        },
        (ActivityKind::Walking, &[action, duration_h, weight_kg, height_cm]) => {
            WorkoutParams::Walking {
                action,
                duration_h,
                weight_kg,
                height_cm,
            }
        }
        (ActivityKind::Swimming, &[action, duration_h, weight_kg, pool_length_m, pool_laps]) => {
            WorkoutParams::Swimming {
                action,
                duration_h,
                weight_kg,
                pool_length_m,
                pool_laps,
            }
        }
        _ => {
            return Err(WorkoutError::ArityMismatch {
                code: kind.code(),
                expected,
                actual: reading.len(),
            })
        }
    };

    Ok(params)
}

/// Construct the workout record for an activity `code` and its `reading`.
pub fn read_package(code: &str, reading: &Reading) -> WorkoutResult<WorkoutRecord> {
    let kind: ActivityKind = code.parse()?;
    let params = parse_params(kind, reading)?;
    let record = WorkoutRecord::from_params(&params)?;

    tracing::debug!(
        code,
        distance_km = record.distance_km(),
        mean_speed_kmh = record.mean_speed_kmh(),
        calories = record.calories(),
        "Built workout record"
    );

    Ok(record)
}
