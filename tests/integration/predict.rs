// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests of the "predict" command-line interface, with and without argument
//! files.

use indoc::formatdoc;
use tempfile::TempDir;

use crate::{get_cmd_output, make_file_in_dir, skycross, REFERENCE_FLIGHTS_JSON};

/// An argument file for the reference scenario with a wide-field camera.
fn reference_arg_file(dir: &std::path::Path) -> std::path::PathBuf {
    let flights = make_file_in_dir("flights.json", dir, REFERENCE_FLIGHTS_JSON);
    let contents = formatdoc! {r#"
        [optics]
        focal_length = 35.0
        sensor_size = 36.0

        [predict]
        ra = "1h16m0s"
        dec = 14.63
        observer = [0.0, 0.0, 0.0]
        exposure = 300.0
        time = "2025-03-13T12:34:22 UTC"
        flights = "{}"
    "#, flights.display()};
    make_file_in_dir("predict.toml", dir, &contents)
}

#[test]
fn test_predict_writes_json() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = reference_arg_file(tmp_dir.path());
    let output = tmp_dir.path().join("results.json");

    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            &arg_file.display().to_string(),
            "--output", &output.display().to_string(),
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "predict failed: {}", get_cmd_output(cmd).1);
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
    assert!(
        stdout.contains("1 of 1 aircraft crossed the field of view"),
        "{stdout}"
    );

    let results: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(&output).unwrap()).unwrap();
    let fov = results["fov_diameter_deg"].as_f64().unwrap();
    assert!((fov - 58.932801784884674).abs() < 1e-9);
    assert_eq!(results["samples"].as_array().unwrap().len(), 60);
    let track = &results["tracks"]["sim-0"];
    assert_eq!(track["flight_number"], "AC123");
    assert_eq!(track["entry"], "2025-03-13T12:34:22 UTC");
    assert_eq!(track["exit"], "2025-03-13T12:34:27 UTC");
    assert_eq!(results["snapshots"][0][0]["id"], "sim-0");
}

#[test]
fn test_cli_args_override_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = reference_arg_file(tmp_dir.path());
    let output = tmp_dir.path().join("results.json");

    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            &arg_file.display().to_string(),
            "--time-step", "60",
            "--close-open-intervals",
            "--output", &output.display().to_string(),
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "predict failed: {}", get_cmd_output(cmd).1);

    let results: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(&output).unwrap()).unwrap();
    assert_eq!(results["samples"].as_array().unwrap().len(), 5);
    assert_eq!(results["tracks"]["sim-0"]["exit"], "2025-03-13T12:35:22 UTC");
}

#[test]
fn test_predict_without_arg_file() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let flights = make_file_in_dir("flights.json", tmp_dir.path(), REFERENCE_FLIGHTS_JSON);

    // A narrow field of view pointed away from the aircraft.
    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            "--focal-length", "6000",
            "--sensor-size", "50",
            "--ra-hms", "1", "16", "0",
            "--dec", "-14.63",
            "--observer", "0", "0", "0",
            "--exposure", "60",
            "--time", "2025-03-13T12:34:22 UTC",
            "--flights", &flights.display().to_string(),
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "predict failed: {}", get_cmd_output(cmd).1);
    let (stdout, _) = get_cmd_output(cmd);
    assert!(
        stdout.contains("0 of 1 aircraft crossed the field of view"),
        "{stdout}"
    );
}

#[test]
fn test_dry_run_and_save_toml() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = reference_arg_file(tmp_dir.path());
    let output = tmp_dir.path().join("results.json");
    let saved = tmp_dir.path().join("saved.toml");

    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            &arg_file.display().to_string(),
            "--output", &output.display().to_string(),
            "--save-toml", &saved.display().to_string(),
            "--dry-run",
        ])
        .ok();
    assert!(cmd.is_ok(), "predict failed: {}", get_cmd_output(cmd).1);
    assert!(!output.exists());

    // The saved arguments can be used to do the same run again.
    let saved_contents = std::fs::read_to_string(&saved).unwrap();
    assert!(saved_contents.contains("[predict]"), "{saved_contents}");
    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            &saved.display().to_string(),
            "--no-progress-bars",
        ])
        .ok();
    assert!(cmd.is_ok(), "predict failed: {}", get_cmd_output(cmd).1);
    assert!(output.exists());
}

#[test]
fn test_live_flights_are_a_configuration_error() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let arg_file = reference_arg_file(tmp_dir.path());

    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            &arg_file.display().to_string(),
            "--flight-data-type", "live",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("no live flight source"), "{stderr}");
}

#[test]
fn test_missing_inputs_are_errors() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let flights = make_file_in_dir("flights.json", tmp_dir.path(), REFERENCE_FLIGHTS_JSON);

    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            "--focal-length", "35",
            "--sensor-size", "36",
            "--ra", "01:16:00",
            "--dec", "14.63",
            "--exposure", "300",
            "--flights", &flights.display().to_string(),
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No observer position"), "{stderr}");

    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "predict",
            "--focal-length", "35",
            "--sensor-size", "36",
            "--ra", "01:16:00",
            "--dec", "14.63",
            "--observer", "0", "0", "0",
            "--exposure", "300",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("no simulated flights"), "{stderr}");
}
