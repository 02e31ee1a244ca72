//! Distance, speed and calorie formulas for each activity kind.
//!
//! All functions are pure and never round. Rounding happens only when a
//! record is rendered for display.

/// Distance covered by one running or walking step, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Distance covered by one swimming stroke, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;
/// Factor converting km/h to m/s (rounded the way the calorie tables expect).
pub const KMH_TO_MS: f64 = 0.278;
/// Centimeters in a meter.
pub const CM_IN_M: f64 = 100.0;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWIM_SPEED_SHIFT: f64 = 1.1;
const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Distance in km for `action_count` repetitions of a movement of `step_m` meters.
pub fn distance(action_count: f64, step_m: f64) -> f64 {
    action_count * step_m / M_IN_KM
}

/// Step-based distance in km for running and walking.
pub fn step_distance(action_count: f64) -> f64 {
    distance(action_count, STEP_LENGTH_M)
}

/// Stroke-based distance in km for swimming.
///
/// Only an auxiliary estimate: swimming records derive their distance from
/// the pool geometry instead, see [`pool_distance`].
pub fn stroke_distance(action_count: f64) -> f64 {
    distance(action_count, STROKE_LENGTH_M)
}

/// Distance in km swum in a pool of `pool_length_m` meters over `pool_laps` laps.
pub fn pool_distance(pool_length_m: f64, pool_laps: f64) -> f64 {
    pool_length_m * pool_laps / M_IN_KM
}

/// Mean speed in km/h.
///
/// Callers guarantee `duration_h > 0`.
pub fn mean_speed(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Calories burned while running.
pub fn running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (RUN_SPEED_MULTIPLIER * mean_speed_kmh + RUN_SPEED_SHIFT) * weight_kg / M_IN_KM
        * duration_h
        * MIN_IN_H
}

/// Calories burned during sports walking.
///
/// The speed term uses m/s and the athlete's height in meters.
pub fn walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: f64,
    duration_h: f64,
) -> f64 {
    let speed_ms = mean_speed_kmh * KMH_TO_MS;
    let height_m = height_cm / CM_IN_M;

    (WALK_WEIGHT_MULTIPLIER * weight_kg
        + (speed_ms.powi(2) / height_m) * WALK_SPEED_HEIGHT_MULTIPLIER * weight_kg)
        * duration_h
        * MIN_IN_H
}

/// Calories burned while swimming.
pub fn swimming_calories(mean_speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (mean_speed_kmh + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * weight_kg * duration_h
}
