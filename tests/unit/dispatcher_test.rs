//! Unit tests for activity dispatch and reading validation.

use workout_stats::{read_package, ActivityKind, Reading, WorkoutError};

fn reading(fields: &[f64]) -> Reading {
    Reading::from(fields)
}

#[test]
fn test_supported_codes() {
    assert_eq!(
        read_package("RUN", &reading(&[1.0, 1.0, 1.0])).unwrap().kind(),
        ActivityKind::Running
    );
    assert_eq!(
        read_package("WLK", &reading(&[1.0, 1.0, 1.0, 170.0]))
            .unwrap()
            .kind(),
        ActivityKind::Walking
    );
    assert_eq!(
        read_package("SWM", &reading(&[1.0, 1.0, 1.0, 25.0, 1.0]))
            .unwrap()
            .kind(),
        ActivityKind::Swimming
    );
}

#[test]
fn test_unsupported_codes_rejected() {
    for code in ["", "BIKE", "run", "SWIM", " RUN", "WLK "] {
        let err = read_package(code, &reading(&[1.0, 1.0, 1.0])).unwrap_err();
        assert_eq!(err, WorkoutError::UnsupportedActivity(code.to_string()));
    }
}

#[test]
fn test_running_with_four_fields_rejected() {
    let err = read_package("RUN", &reading(&[15000.0, 1.0, 75.0, 180.0])).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch {
            code: "RUN",
            expected: 3,
            actual: 4
        }
    );
}

#[test]
fn test_walking_with_three_fields_rejected() {
    let err = read_package("WLK", &reading(&[9000.0, 1.0, 75.0])).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch {
            code: "WLK",
            expected: 4,
            actual: 3
        }
    );
}

#[test]
fn test_swimming_with_four_fields_rejected() {
    let err = read_package("SWM", &reading(&[720.0, 1.0, 80.0, 25.0])).unwrap_err();
    assert_eq!(
        err,
        WorkoutError::ArityMismatch {
            code: "SWM",
            expected: 5,
            actual: 4
        }
    );
}

#[test]
fn test_non_positive_duration_rejected() {
    for duration in [0.0, -1.0, f64::INFINITY] {
        let err = read_package("RUN", &reading(&[15000.0, duration, 75.0])).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidParameter {
                name: "duration_h",
                ..
            }
        ));
    }
}

#[test]
fn test_overflowing_metrics_rejected() {
    let cases: [(&str, &[f64], &str); 4] = [
        ("RUN", &[15000.0, 1e-310, 75.0], "mean_speed_kmh"),
        ("RUN", &[15000.0, 1e-310, 0.0], "mean_speed_kmh"),
        ("SWM", &[720.0, 1.0, 80.0, 1e200, 1e200], "distance_km"),
        ("WLK", &[9000.0, 1.0, 75.0, 1e-320], "calories"),
    ];

    for (code, fields, metric) in cases {
        match read_package(code, &reading(fields)) {
            Err(WorkoutError::InvalidParameter { name, .. }) => assert_eq!(name, metric),
            other => panic!("{} {:?}: unexpected {:?}", code, fields, other),
        }
    }
}
