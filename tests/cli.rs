// Runs the built binary end to end.

use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn laser_mask() -> Command {
    Command::new(env!("CARGO_BIN_EXE_laser-mask"))
}

#[test]
fn test_reports_changed_lines() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.nc");
    let output = dir.path().join("out.nc");
    fs::write(&input, "G1 X10 Y5 S45 \nG1 X11 S90\n").unwrap();

    let result = laser_mask().arg(&input).arg(&output).arg("50").output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains(&output.display().to_string()));
    assert!(stdout.contains("Marking moves changed to travel: 1"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "G0 X10 Y5 S0\nG1 X11 S90\n");
}

#[test]
fn test_wrong_argument_count_prints_usage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.nc");
    let output = dir.path().join("out.nc");
    fs::write(&input, "M5\n").unwrap();

    let result = laser_mask().arg(&input).arg(&output).output().unwrap();
    assert!(!result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Usage"));
    assert!(!output.exists());
}

#[test]
fn test_extra_argument_prints_usage() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.nc");
    let output = dir.path().join("out.nc");
    fs::write(&input, "M5\n").unwrap();

    let result = laser_mask().arg(&input).arg(&output).arg("50").arg("extra").output().unwrap();
    assert!(!result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Usage"));
    assert!(!output.exists());
}

#[test]
fn test_negative_threshold_changes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.nc");
    let output = dir.path().join("out.nc");
    fs::write(&input, "G1 X1 S5 \n").unwrap();

    let result = laser_mask().arg(&input).arg(&output).arg("-5").output().unwrap();
    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    assert!(stdout.contains("Marking moves changed to travel: 0"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "G1 X1 S5 \n");
}

#[test]
fn test_bad_threshold_is_fatal() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.nc");
    let output = dir.path().join("out.nc");
    fs::write(&input, "M5\n").unwrap();

    let result = laser_mask().arg(&input).arg(&output).arg("fifty").output().unwrap();
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_missing_input_is_fatal() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("out.nc");

    let result = laser_mask()
        .arg(dir.path().join("missing.nc"))
        .arg(&output)
        .arg("50")
        .output()
        .unwrap();
    assert!(!result.status.success());
    assert!(!output.exists());
}

#[test]
fn test_config_file_and_wide_flag() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.nc");
    let output = dir.path().join("out.nc");
    let config = dir.path().join("mask.toml");
    fs::write(&input, "G1 X1 P120\nG1 X2 P9\n").unwrap();
    fs::write(&config, "[mask]\nintensity_word = \"P\"\nthreshold = 1.0\n").unwrap();

    let result = laser_mask()
        .arg(&input)
        .arg(&output)
        .arg("200")
        .arg("--config")
        .arg(&config)
        .arg("--wide-intensity")
        .output()
        .unwrap();
    assert!(result.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "G0 X2 P0\n");
}
