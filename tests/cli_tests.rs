//! Runs the compiled binary.

mod common;

use std::process::Command;

use common::{json_path, task_file, touch};
use tempfile::TempDir;

fn converter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_image-converter"));
    cmd.env("RUST_LOG", "info")
        .env_remove("IMAGE_CONVERTER_EXECUTABLE")
        .env_remove("IMAGE_CONVERTER_SUBCOMMAND");
    cmd
}

#[test]
fn missing_argument_fails() {
    let output = converter().output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Data argument file is missing"));
}

#[test]
fn unreadable_task_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = converter()
        .arg(dir.path().join("nope.json"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Failed to load data from"));
}

#[test]
fn dry_run_batch_reports_summary() {
    let dir = TempDir::new().unwrap();
    let logo = touch(&dir, "logo.jpeg");
    let path = task_file(
        &dir,
        &format!(
            r#"[
                {{ "inputImageFile": {}, "outputImageFileName": "out", "outputImageFormat": "png" }},
                {{ "inputImageFile": "missing.jpeg", "outputImageFileName": "gone" }}
            ]"#,
            json_path(&logo)
        ),
    );

    let output = converter().arg(&path).arg("--dry-run").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains("Dry run, not executing"));
    assert!(stdout.contains("1 images converted. 1 images failed"));
}

#[test]
fn single_task_mode_uses_configured_executable() {
    let dir = TempDir::new().unwrap();
    let logo = touch(&dir, "logo.jpg");

    let output = converter()
        .args(["--input", logo.as_str(), "--name", "thumb", "--size", "20", "--dry-run"])
        .args(["--executable", "gm"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{stdout}");
    assert!(stdout.contains(&format!("gm convert {logo} -resize 20% thumb.jpeg")));
}

#[test]
fn log_lines_carry_no_timestamp_or_level() {
    let dir = TempDir::new().unwrap();
    let logo = touch(&dir, "logo.jpeg");
    let path = task_file(
        &dir,
        &format!(
            r#"[{{ "inputImageFile": {}, "outputImageFileName": "out" }}]"#,
            json_path(&logo)
        ),
    );

    let output = converter().arg(&path).arg("--dry-run").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "{stdout}");
    assert!(
        stdout
            .lines()
            .any(|l| l == "Image conversion completed. 1 images converted. 0 images failed"),
        "{stdout}"
    );
    assert!(stdout.lines().any(|l| l.starts_with("Converting 1 images")), "{stdout}");
    assert!(!stdout.contains("tasks succeeded"), "{stdout}");
}
