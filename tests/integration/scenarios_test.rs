//! End-to-end scenarios: package -> record -> summary line.

use workout_stats::workouts::batch::{
    default_packages, process_packages, render_outcome, OutputFormat, Package,
};
use workout_stats::{read_package, render_summary, Locale, Reading};

#[test]
fn test_swimming_scenario() {
    let record = read_package("SWM", &Reading::new(vec![720.0, 1.0, 80.0, 25.0, 40.0])).unwrap();

    assert_eq!(
        render_summary(&record),
        "Training type: Swimming; Duration: 1.000 h.; Distance: 1.000 km; \
         Avg speed: 1.000 km/h; Calories: 336.000."
    );
}

#[test]
fn test_running_scenario() {
    let record = read_package("RUN", &Reading::new(vec![15000.0, 1.0, 75.0])).unwrap();

    // (18 * 9.75 + 1.79) * 75 / 1000 * 60
    let expected_calories = (18.0 * 9.75 + 1.79) * 75.0 / 1000.0 * 60.0;
    assert!((record.calories() - expected_calories).abs() < 1e-9);

    assert_eq!(
        render_summary(&record),
        "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
         Avg speed: 9.750 km/h; Calories: 797.805."
    );
}

#[test]
fn test_walking_scenario() {
    let record = read_package("WLK", &Reading::new(vec![9000.0, 1.0, 75.0, 180.0])).unwrap();

    let speed_ms = 5.85 * 0.278;
    let expected_calories = (0.035 * 75.0 + (speed_ms * speed_ms / 1.8) * 0.029 * 75.0) * 60.0;
    assert!((record.calories() - expected_calories).abs() < 1e-9);

    assert_eq!(
        render_summary(&record),
        "Training type: SportsWalking; Duration: 1.000 h.; Distance: 5.850 km; \
         Avg speed: 5.850 km/h; Calories: 349.252."
    );
}

#[test]
fn test_rendering_twice_is_identical() {
    let record = read_package("WLK", &Reading::new(vec![9000.0, 1.0, 75.0, 180.0])).unwrap();
    let copy = record;

    assert_eq!(render_summary(&record), render_summary(&record));
    assert_eq!(render_summary(&record), render_summary(&copy));
}

#[test]
fn test_built_in_batch_output() {
    let lines: Vec<String> = process_packages(&default_packages())
        .iter()
        .map(|outcome| render_outcome(outcome, OutputFormat::Text, Locale::English))
        .collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Training type: Swimming;"));
    assert!(lines[1].starts_with("Training type: Running;"));
    assert!(lines[2].starts_with("Training type: SportsWalking;"));
}

#[test]
fn test_batch_reports_errors_and_continues() {
    let packages = vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0]),
        Package::new("HIKE", vec![1.0, 1.0, 1.0]),
        Package::new("RUN", vec![15000.0, 0.0, 75.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
    ];

    let lines: Vec<String> = process_packages(&packages)
        .iter()
        .map(|outcome| render_outcome(outcome, OutputFormat::Text, Locale::English))
        .collect();

    assert_eq!(
        lines,
        vec![
            "Error: Arity mismatch for SWM: expected 5 fields, got 4".to_string(),
            "Error: Unsupported activity: HIKE".to_string(),
            "Error: Invalid parameter duration_h: 0".to_string(),
            "Training type: Running; Duration: 1.000 h.; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories: 797.805."
                .to_string(),
        ]
    );
}
