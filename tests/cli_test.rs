use image::{ColorType, GrayImage, Luma};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn png_normalize(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png-normalize"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn png-normalize")
}

fn write_gray(path: &Path) {
    GrayImage::from_pixel(4, 4, Luma([90])).save(path).unwrap();
}

#[test]
fn test_dry_run_with_qualifying_png_exits_one() {
    let temp_dir = TempDir::new().unwrap();
    write_gray(&temp_dir.path().join("g.png"));

    let output = png_normalize(temp_dir.path(), &["--dry-run", "g.png"]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        image::open(temp_dir.path().join("g.png")).unwrap().color(),
        ColorType::L8
    );
}

#[test]
fn test_dry_run_without_files_exits_zero() {
    let temp_dir = TempDir::new().unwrap();

    let output = png_normalize(temp_dir.path(), &["--dry-run"]);

    assert_eq!(output.status.code(), Some(0));
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn test_verbose_missing_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.png");

    let output = png_normalize(temp_dir.path(), &["--verbose", missing.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_lines(&output),
        vec![format!("skip (missing): {}", missing.display())]
    );
}

#[test]
fn test_verbose_lines_are_plain_text() {
    let temp_dir = TempDir::new().unwrap();
    let gray = temp_dir.path().join("g.png");
    let text = temp_dir.path().join("notes.txt");
    write_gray(&gray);
    std::fs::write(&text, b"hi").unwrap();

    let output = png_normalize(
        temp_dir.path(),
        &[
            "--verbose",
            "--dry-run",
            gray.to_str().unwrap(),
            text.to_str().unwrap(),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout_lines(&output),
        vec![
            format!("would normalize: {} (mode L -> RGBA)", gray.display()),
            format!("skip (not png): {}", text.display()),
        ]
    );
}

#[test]
fn test_verbose_without_files() {
    let temp_dir = TempDir::new().unwrap();

    let output = png_normalize(temp_dir.path(), &["--verbose"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_lines(&output), vec!["no files provided, nothing to do"]);
}

#[test]
fn test_quiet_run_prints_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let output = png_normalize(temp_dir.path(), &["nope.png", "other.txt"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_relative_paths_are_normalized_in_place() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("icons");
    std::fs::create_dir(&nested).unwrap();
    write_gray(&nested.join("app.png"));

    let output = png_normalize(temp_dir.path(), &["--verbose", "icons/app.png"]);

    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("normalized"));
    assert_eq!(
        image::open(nested.join("app.png")).unwrap().color(),
        ColorType::Rgba8
    );
}

#[test]
fn test_decode_error_aborts_remaining_files() {
    let temp_dir = TempDir::new().unwrap();
    let bad = temp_dir.path().join("bad.png");
    let good = temp_dir.path().join("good.png");
    std::fs::write(&bad, b"garbage").unwrap();
    write_gray(&good);

    let output = png_normalize(
        temp_dir.path(),
        &[bad.to_str().unwrap(), good.to_str().unwrap()],
    );

    assert!(!output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1, "stdout: {lines:?}");
    assert!(lines[0].starts_with(&format!("ERROR: {}: ", bad.display())));
    assert_eq!(image::open(&good).unwrap().color(), ColorType::L8);
}
