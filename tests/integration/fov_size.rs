// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use crate::{get_cmd_output, skycross};

#[test]
fn test_fov_size() {
    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "fov-size",
            "--focal-length", "6000",
            "--sensor-size", "50",
        ])
        .ok();
    assert!(cmd.is_ok(), "fov-size failed: {}", get_cmd_output(cmd).1);
    let (stdout, stderr) = get_cmd_output(cmd);
    assert!(stdout.contains("0.477465°"), "{stdout}");
    assert!(stderr.is_empty(), "stderr wasn't empty: {stderr}");
}

#[test]
fn test_fov_size_with_barlow() {
    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "fov-size",
            "-f", "6000",
            "-s", "50",
            "--barlow", "2",
        ])
        .ok();
    let (stdout, _) = get_cmd_output(cmd);
    assert!(stdout.contains("0.238732°"), "{stdout}");
}

#[test]
fn test_fov_size_rejects_bad_optics() {
    #[rustfmt::skip]
    let cmd = skycross()
        .args([
            "fov-size",
            "--focal-length", "0",
            "--sensor-size", "50",
        ])
        .ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("focal length"), "{stderr}");

    let cmd = skycross().args(["fov-size", "--sensor-size", "50"]).ok();
    assert!(cmd.is_err());
    let (_, stderr) = get_cmd_output(cmd);
    assert!(stderr.contains("No focal length"), "{stderr}");
}
