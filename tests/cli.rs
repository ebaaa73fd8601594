//! End-to-end checks of the `gridseam` binary against real PNG files.

use assert_cmd::prelude::*;
use image::{GenericImageView, GrayImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

// A deterministic non-uniform image; carving it is never degenerate.
fn ramp_image() -> GrayImage {
    let data: Vec<u8> = (0..64u32 * 48).map(|i| ((i * 7) % 251) as u8).collect();
    GrayImage::from_raw(64, 48, data).unwrap()
}

fn write_input(dir: &Path) -> std::path::PathBuf {
    let input = dir.join("input.png");
    ramp_image().save(&input).unwrap();
    input
}

#[test]
fn carves_to_requested_width() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("carved.png");

    Command::cargo_bin("gridseam")
        .unwrap()
        .args(&[
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--width",
            "60",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("64 -> 60"));

    let carved = image::open(&output).unwrap();
    assert_eq!(carved.dimensions(), (60, 48));
}

#[test]
fn energy_map_keeps_input_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("energy.png");

    Command::cargo_bin("gridseam")
        .unwrap()
        .args(&[input.to_str().unwrap(), output.to_str().unwrap(), "--energy"])
        .assert()
        .success();

    let energy = image::open(&output).unwrap();
    assert_eq!(energy.dimensions(), (64, 48));
}

#[test]
fn missing_width_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("carved.png");

    Command::cargo_bin("gridseam")
        .unwrap()
        .args(&[input.to_str().unwrap(), output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--width"));
}

#[test]
fn upscaling_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let output = dir.path().join("carved.png");

    Command::cargo_bin("gridseam")
        .unwrap()
        .args(&[
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            "--width",
            "100",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("target width"));
}
