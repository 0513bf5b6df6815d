extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn rejects_an_unknown_fractal_name() {
    Command::cargo_bin("mandelzoom")
        .unwrap()
        .args(&["--output", "/dev/null", "--fractal-name", "julia"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown fractal name: julia"));
}

#[test]
fn rejects_degenerate_bounds() {
    Command::cargo_bin("mandelzoom")
        .unwrap()
        .args(&["--output", "/dev/null", "--x0", "1.0", "--x1", "-1.0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("degenerate plane bounds"));
}

#[test]
fn rejects_a_misaligned_width() {
    Command::cargo_bin("mandelzoom")
        .unwrap()
        .args(&[
            "--output",
            "/dev/null",
            "--width",
            "81",
            "--height",
            "40",
            "--max-iteration",
            "10",
        ])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not divisible by 4"));
}

#[test]
fn writes_a_binary_ppm_frame() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("frame.ppm");
    Command::cargo_bin("mandelzoom")
        .unwrap()
        .args(&[
            "--output",
            out.to_str().unwrap(),
            "--width",
            "80",
            "--height",
            "40",
            "--max-iteration",
            "50",
        ])
        .assert()
        .success();
    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P6"));
    // Header plus one RGB triple per pixel.
    assert!(bytes.len() > 80 * 40 * 3);
}

#[test]
fn zoom_clicks_apply_before_the_frame_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain.ppm");
    let zoomed = dir.path().join("zoomed.ppm");
    let common = [
        "--width",
        "80",
        "--height",
        "40",
        "--max-iteration",
        "60",
        "--fractal-name",
        "burning_ship",
    ];

    Command::cargo_bin("mandelzoom")
        .unwrap()
        .args(&["--output", plain.to_str().unwrap()])
        .args(&common)
        .assert()
        .success();
    Command::cargo_bin("mandelzoom")
        .unwrap()
        .args(&["--output", zoomed.to_str().unwrap()])
        .args(&common)
        .args(&["--zoom-in", "10,10", "--zoom-in", "20,20", "--zoom-out"])
        .assert()
        .success();

    // Same dimensions, different viewport, different frame.
    let plain = fs::read(&plain).unwrap();
    let zoomed = fs::read(&zoomed).unwrap();
    assert_eq!(plain.len(), zoomed.len());
    assert_ne!(plain, zoomed);
}
