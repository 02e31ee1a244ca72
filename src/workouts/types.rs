//! Workout kinds, parameters and computed records.

use crate::metrics::error::{WorkoutError, WorkoutResult};
use crate::metrics::formulas;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Kind of workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Running,
    Walking,
    Swimming,
}

impl ActivityKind {
    /// All supported kinds.
    pub const ALL: [ActivityKind; 3] = [
        ActivityKind::Running,
        ActivityKind::Walking,
        ActivityKind::Swimming,
    ];

    /// Short activity code used by packages.
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::Running => "RUN",
            ActivityKind::Walking => "WLK",
            ActivityKind::Swimming => "SWM",
        }
    }

    /// Label shown in summary lines.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Running => "Running",
            ActivityKind::Walking => "SportsWalking",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Number of reading fields this kind expects.
    pub fn expected_fields(&self) -> usize {
        match self {
            ActivityKind::Running => 3,
            ActivityKind::Walking => 4,
            ActivityKind::Swimming => 5,
        }
    }
}

impl FromStr for ActivityKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnsupportedActivity(code.to_string()))
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw numeric fields of one workout, in package order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reading(Vec<f64>);

impl Reading {
    pub fn new(fields: Vec<f64>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<f64>> for Reading {
    fn from(fields: Vec<f64>) -> Self {
        Self(fields)
    }
}

impl From<&[f64]> for Reading {
    fn from(fields: &[f64]) -> Self {
        Self(fields.to_vec())
    }
}

/// Validated parameters of a workout, one variant per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutParams {
    Running {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
    },
    Walking {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        height_cm: f64,
    },
    Swimming {
        action: f64,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: f64,
    },
}

impl WorkoutParams {
    /// Kind of this workout.
    pub fn kind(&self) -> ActivityKind {
        match self {
            WorkoutParams::Running { .. } => ActivityKind::Running,
            WorkoutParams::Walking { .. } => ActivityKind::Walking,
            WorkoutParams::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    /// Workout duration in hours.
    pub fn duration_h(&self) -> f64 {
        match *self {
            WorkoutParams::Running { duration_h, .. }
            | WorkoutParams::Walking { duration_h, .. }
            | WorkoutParams::Swimming { duration_h, .. } => duration_h,
        }
    }

    /// Check that every field lies in the domain the formulas are defined on.
    pub fn validate(&self) -> WorkoutResult<()> {
        let (action, duration_h, weight_kg) = match *self {
            WorkoutParams::Running {
                action,
                duration_h,
                weight_kg,
            }
            | WorkoutParams::Walking {
                action,
                duration_h,
                weight_kg,
                ..
            }
            | WorkoutParams::Swimming {
                action,
                duration_h,
                weight_kg,
                ..
            } => (action, duration_h, weight_kg),
        };

        ensure_finite("action", action)?;
        ensure_positive("duration_h", duration_h)?;
        ensure_finite("weight_kg", weight_kg)?;

        match *self {
            WorkoutParams::Running { .. } => {}
            WorkoutParams::Walking { height_cm, .. } => {
                ensure_positive("height_cm", height_cm)?;
            }
            WorkoutParams::Swimming {
                pool_length_m,
                pool_laps,
                ..
            } => {
                ensure_finite("pool_length_m", pool_length_m)?;
                ensure_finite("pool_laps", pool_laps)?;
            }
        }

        Ok(())
    }

    /// Distance in km.
    pub fn distance_km(&self) -> f64 {
        match *self {
            WorkoutParams::Running { action, .. } | WorkoutParams::Walking { action, .. } => {
                formulas::step_distance(action)
            }
            WorkoutParams::Swimming {
                pool_length_m,
                pool_laps,
                ..
            } => formulas::pool_distance(pool_length_m, pool_laps),
        }
    }

    /// Mean speed in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        formulas::mean_speed(self.distance_km(), self.duration_h())
    }

    /// Calories burned.
    pub fn calories(&self) -> f64 {
        let speed = self.mean_speed_kmh();
        match *self {
            WorkoutParams::Running {
                duration_h,
                weight_kg,
                ..
            } => formulas::running_calories(speed, weight_kg, duration_h),
            WorkoutParams::Walking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => formulas::walking_calories(speed, weight_kg, height_cm, duration_h),
            WorkoutParams::Swimming {
                duration_h,
                weight_kg,
                ..
            } => formulas::swimming_calories(speed, weight_kg, duration_h),
        }
    }
}

fn ensure_finite(name: &'static str, value: f64) -> WorkoutResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WorkoutError::InvalidParameter { name, value })
    }
}

fn ensure_positive(name: &'static str, value: f64) -> WorkoutResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(WorkoutError::InvalidParameter { name, value })
    }
}

/// Computed summary of one workout.
///
/// Fields are private so a record cannot change after construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRecord {
    kind: ActivityKind,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories: f64,
}

impl WorkoutRecord {
    /// Validate the parameters and compute all metrics once.
    ///
    /// Finite inputs can still overflow (a subnormal duration or height, a
    /// huge pool), so every computed metric must be finite as well.
    pub fn from_params(params: &WorkoutParams) -> WorkoutResult<Self> {
        params.validate()?;

        let distance_km = params.distance_km();
        ensure_finite("distance_km", distance_km)?;
        let mean_speed_kmh = params.mean_speed_kmh();
        ensure_finite("mean_speed_kmh", mean_speed_kmh)?;
        let calories = params.calories();
        ensure_finite("calories", calories)?;

        Ok(Self {
            kind: params.kind(),
            duration_hours: params.duration_h(),
            distance_km,
            mean_speed_kmh,
            calories,
        })
    }

    pub fn kind(&self) -> ActivityKind {
        self.kind
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    pub fn calories(&self) -> f64 {
        self.calories
    }
}
