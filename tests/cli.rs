// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Yuhe Contributors

//! End-to-end tests for the yuhe CLI

use std::path::Path;
use std::process::{Command, Output};

fn yuhe(args: &[&str], config: Option<&Path>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_yuhe"));
    cmd.args(args)
        .env_remove("YUHE_CONFIG")
        .env_remove("YUHE_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    if let Some(path) = config {
        cmd.env("YUHE_CONFIG", path);
    }
    cmd.output().expect("Failed to run yuhe")
}

fn rotated_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("box.toml");
    std::fs::write(
        &path,
        "[box]\ntranslation = [0.0, 0.0, 0.0]\nrotation = [0.0, 0.0, 90.0]\nscale = [4.0, 1.0, 1.0]\n",
    )
    .unwrap();
    path
}

#[test]
fn test_check_uses_configured_box() {
    let dir = tempfile::tempdir().unwrap();
    let path = rotated_config(dir.path());

    let inside = yuhe(&["check", "0", "1.9", "0"], Some(&path));
    assert_eq!(inside.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&inside.stdout).contains("inside"));

    let outside = yuhe(&["check", "1.9", "0", "0"], Some(&path));
    assert!(String::from_utf8_lossy(&outside.stdout).contains("outside"));
}

#[test]
fn test_grid_json_report() {
    let output = yuhe(&["grid", "--min", "-1", "--max", "11", "--points", "4", "--json"], None);
    assert_eq!(output.status.code(), Some(0));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total"], 64);
    // Lattice -1, 3, 7, 11: the two middle values fall inside [0, 10].
    assert_eq!(report["inside"], 8);
}

#[test]
fn test_grid_rejects_oversized_point_count() {
    for points in ["3000000", "369"] {
        let output = yuhe(&["grid", "--points", points], None);
        assert_eq!(output.status.code(), Some(2), "points {}", points);
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains(points));
    }
}

#[test]
fn test_debug_log_reports_config_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = rotated_config(dir.path());

    let output = yuhe(&["--log-level", "debug", "inspect"], Some(&path));
    assert_eq!(output.status.code(), Some(0));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("loaded config"), "stderr: {}", err);
}

#[test]
fn test_invalid_log_level_fails() {
    let output = yuhe(&["--log-level", "loud", "inspect"], None);
    assert_ne!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stderr).contains("loud"));
}
