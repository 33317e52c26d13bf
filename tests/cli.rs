// End-to-end runs of the `seamcarve` binary.

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_input(dir: &TempDir, width: u32, height: u32) -> PathBuf {
    let path = dir.path().join("input.png");
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 20) as u8, (y * 25) as u8, ((x + y) * 9) as u8])
    })
    .save(&path)
    .unwrap();
    path
}

#[test]
fn carves_to_the_requested_size() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 12, 9);
    let output = dir.path().join("output.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "8", "--height", "7"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(image::GenericImageView::dimensions(&carved), (8, 7));
}

#[test]
fn missing_dimensions_keep_the_current_size() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 10, 6);
    let output = dir.path().join("narrower.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "7"])
        .assert()
        .success();

    let carved = image::open(&output).unwrap();
    assert_eq!(image::GenericImageView::dimensions(&carved), (7, 6));
}

#[test]
fn writes_the_energy_map() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 5, 5);
    let output = dir.path().join("energy.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .arg("--energy")
        .assert()
        .success();

    let energy = image::open(&output).unwrap().to_luma8();
    assert_eq!(energy.dimensions(), (5, 5));
    assert_eq!(energy.get_pixel(0, 0)[0], 255);
}

#[test]
fn refuses_to_upscale() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 4, 4);
    let output = dir.path().join("bigger.png");

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(&output)
        .args(&["--width", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot upscale"));
    assert!(!output.exists());
}

#[test]
fn rejects_a_malformed_dimension() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, 4, 4);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg(dir.path().join("out.png"))
        .args(&["--height", "tall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--height expects a pixel count"));
}

#[test]
fn reports_unreadable_input() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("missing.png"))
        .arg(dir.path().join("out.png"))
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("seamcarve:"));
}
