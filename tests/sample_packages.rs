use workout_tracker::error::{AppError, ComputeError, DispatchError};
use workout_tracker::pipeline::batch::{run_batch, FailurePolicy};
use workout_tracker::pipeline::dispatch::read_package;
use workout_tracker::pipeline::format::{render, OutputFormat};
use workout_tracker::pipeline::training::Training;
use workout_tracker::types::activity::Package;

fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", [720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
        Package::new("WLK", [9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[test]
fn sample_batch_prints_expected_lines() {
    let report = run_batch(&sample_packages(), FailurePolicy::Skip).expect("report");
    let lines: Vec<String> = report
        .messages
        .iter()
        .map(|info| render(info, OutputFormat::Text).expect("render"))
        .collect();

    assert_eq!(
        lines,
        [
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000.",
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750.",
            "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; Потрачено ккал: 157.500.",
        ]
    );
}

#[test]
fn unknown_code_does_not_stop_the_batch() {
    let mut packages = sample_packages();
    packages.insert(1, Package::new("XYZ", [1.0, 2.0, 3.0]));

    let report = run_batch(&packages, FailurePolicy::Skip).expect("report");
    assert_eq!(report.messages.len(), 3);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert!(report.skipped[0].reason.contains("XYZ"));
}

#[test]
fn zero_duration_is_skipped_by_default() {
    let packages = vec![
        Package::new("WLK", [9000.0, 0.0, 75.0, 180.0]),
        Package::new("RUN", [15000.0, 1.0, 75.0]),
    ];

    let report = run_batch(&packages, FailurePolicy::Skip).expect("report");
    assert_eq!(report.messages.len(), 1);
    assert_eq!(report.messages[0].training_type, "Running");
    assert_eq!(report.skipped[0].code, "WLK");
}

#[test]
fn zero_duration_aborts_when_fail_fast() {
    let packages = vec![Package::new("SWM", [720.0, 0.0, 80.0, 25.0, 40.0])];

    let err = run_batch(&packages, FailurePolicy::Abort).err().expect("error");
    assert!(matches!(
        err,
        AppError::Compute(ComputeError::NonPositiveDuration(_))
    ));
}

#[test]
fn distance_follows_step_length() {
    for action in [1u32, 250, 720, 15000, 123456] {
        let steps = action as f64;
        let run = read_package("RUN", &[steps, 2.0, 70.0]).expect("run");
        let walk = read_package("WLK", &[steps, 2.0, 70.0, 170.0]).expect("walk");
        let swim = read_package("SWM", &[steps, 2.0, 70.0, 25.0, 20.0]).expect("swim");

        assert!((run.distance() - steps * 0.65 / 1000.0).abs() < 1e-9);
        assert!((walk.distance() - steps * 0.65 / 1000.0).abs() < 1e-9);
        assert!((swim.distance() - steps * 1.38 / 1000.0).abs() < 1e-9);
    }
}

#[test]
fn dispatch_errors_are_descriptive() {
    let err = read_package("RUN", &[1.0, 2.0]).err().expect("error");
    assert!(matches!(err, DispatchError::Arity { .. }));
    assert_eq!(err.to_string(), "Running expects 3 values, got 2");

    let err = read_package("BIKE", &[]).err().expect("error");
    assert_eq!(err.to_string(), "Unknown workout type: BIKE");
}

#[test]
fn json_output_carries_all_fields() {
    let report = run_batch(&sample_packages()[..1], FailurePolicy::Skip).expect("report");
    let json = render(&report.messages[0], OutputFormat::Json).expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");

    assert_eq!(value["training_type"], "Swimming");
    for field in ["duration", "distance", "speed", "calories"] {
        assert!(value[field].is_number(), "missing {field}");
    }
}

#[test]
fn walking_floor_term_uses_remainder_division() {
    let walk = read_package("WLK", &[20000.0, 1.0, 60.0, 0.1]).expect("walk");
    let info = walk.show_training_info().expect("info");

    // 13² / 0.1 floors to 1689, not to the rounded quotient 1690.
    assert!((info.calories - 176457.6).abs() < 1e-6, "got {}", info.calories);
}
