//! Runs the `storey-levels` binary and checks its output and exit codes.

use std::process::{Command, Output};

const THREE_STOREYS_PATH: &str = "data/ifc/three_storeys.ifc";

fn storey_levels(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_storey-levels"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run storey-levels")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_prints_one_height_per_line() {
    let output = storey_levels(&[THREE_STOREYS_PATH]);
    assert_eq!(output.status.code(), Some(0), "{}", String::from_utf8_lossy(&output.stderr));

    let heights: Vec<f64> = stdout_lines(&output)
        .iter()
        .map(|l| l.parse().expect("height"))
        .collect();
    assert_eq!(heights.len(), 3);
    for (h, e) in heights.iter().zip([0.9, 3.9, 6.9]) {
        assert!((h - e).abs() < 1e-9, "{:?}", heights);
    }
}

#[test]
fn test_camera_and_offset() {
    let output = storey_levels(&["--offset", "1.5", "--camera", THREE_STOREYS_PATH]);
    assert_eq!(output.status.code(), Some(0));
    let lines = stdout_lines(&output);
    assert_eq!(lines, vec!["1.5", "4.5", "7.5", "camera_z=18"]);
}

#[test]
fn test_json_report() {
    let output = storey_levels(&["--json", THREE_STOREYS_PATH]);
    assert_eq!(output.status.code(), Some(0));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(report["schema"], "IFC2X3");
    assert_eq!(report["levels"]["storeys"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["levels"]["camera_z"], 18.0);
}

#[test]
fn test_usage_errors_exit_2() {
    for args in [&[][..], &["--offset"][..], &["--bogus", THREE_STOREYS_PATH][..]] {
        let output = storey_levels(args);
        assert_eq!(output.status.code(), Some(2), "args {:?}", args);
        assert!(output.stdout.is_empty());
        assert!(!output.stderr.is_empty());
    }
}

#[test]
fn test_bad_file_exits_1() {
    let output = storey_levels(&["data/ifc/does_not_exist.ifc"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("does_not_exist.ifc"));

    let garbage = tempfile::Builder::new().suffix(".ifc").tempfile().expect("temp file");
    std::fs::write(garbage.path(), b"not a step file").expect("write");
    let output = storey_levels(&[garbage.path().to_str().expect("utf-8 path")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}
