//! End-to-end runs of the `walltheme` binary against scratch files.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CONFIG: &str = r#"
[config]
set_wallpaper = true
wallpaper_tool = "Swaybg"

[templates.kitty]
input_path = "templates/kitty.conf"
output_path = "colors.conf"
"#;

/// Lay out `example/wallpaper.jpg` and `example/config.ini` in a temp dir.
fn workspace() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let example = dir.path().join("example");
    fs::create_dir(&example).unwrap();
    fs::write(example.join("wallpaper.jpg"), b"").unwrap();
    fs::write(example.join("config.ini"), CONFIG).unwrap();
    fs::write(example.join("not_an_image.txt"), b"").unwrap();
    fs::write(example.join("invalid.extension"), b"").unwrap();
    dir
}

fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_walltheme"));
    cmd.current_dir(cwd).env_remove("RUST_LOG");
    cmd
}

#[test]
fn valid_invocation_reports_input_paths() {
    let dir = workspace();
    let output = cmd(dir.path())
        .args([
            "--wallpaper",
            "example/wallpaper.jpg",
            "--config",
            "example/config.ini",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["wallpaper"], "example/wallpaper.jpg");
    assert_eq!(summary["config"], "example/config.ini");
    assert_eq!(summary["lightmode"], false);
    assert_eq!(summary["mode"], "tonal-spot");
    assert_eq!(summary["palette"], "default");
    assert_eq!(summary["set_wallpaper"], true);
    assert_eq!(summary["wallpaper_tool"], "Swaybg");
    assert_eq!(summary["templates"], serde_json::json!(["kitty"]));
}

#[test]
fn lightmode_flag_is_carried_through() {
    let dir = workspace();
    let output = cmd(dir.path())
        .args([
            "-w",
            "example/wallpaper.jpg",
            "-c",
            "example/config.ini",
            "--lightmode",
            "--dry-run",
            "--output",
            "compact",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["lightmode"], true);
    assert_eq!(summary["dry_run"], true);
}

#[test]
fn existing_tilde_directory_is_used_as_written() {
    let dir = workspace();
    let literal_home = dir.path().join("~");
    fs::create_dir(&literal_home).unwrap();
    fs::write(literal_home.join("a.jpg"), b"").unwrap();

    let output = cmd(dir.path())
        .env("HOME", dir.path().join("elsewhere"))
        .args(["-w", "~/a.jpg", "-c", "example/config.ini", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["wallpaper"], "~/a.jpg");
}

#[test]
fn tilde_expands_when_literal_path_missing() {
    let dir = workspace();
    let home = dir.path().join("home");
    fs::create_dir(&home).unwrap();
    fs::write(home.join("b.png"), b"").unwrap();

    let output = cmd(dir.path())
        .env("HOME", &home)
        .args(["-w", "~/b.png", "-c", "example/config.ini", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let summary: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["wallpaper"], home.join("b.png").display().to_string());
}

#[test]
fn table_output() {
    let dir = workspace();
    cmd(dir.path())
        .args([
            "-w",
            "example/wallpaper.jpg",
            "-c",
            "example/config.ini",
            "--output",
            "table",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("wallpaper tool").and(predicate::str::contains("swaybg")));
}

#[test]
fn nonexistent_wallpaper_exits_3() {
    let dir = workspace();
    cmd(dir.path())
        .args([
            "-w",
            "nonexistent.jpg",
            "-c",
            "example/config.ini",
            "--output",
            "table",
        ])
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "Error: Wallpaper file not found: nonexistent.jpg",
        ));
}

#[test]
fn nonexistent_config_exits_3() {
    let dir = workspace();
    cmd(dir.path())
        .args(["-w", "example/wallpaper.jpg", "-c", "nonexistent.ini", "--json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"file_not_found\""));
}

#[test]
fn wallpaper_with_wrong_extension_exits_4() {
    let dir = workspace();
    cmd(dir.path())
        .args([
            "-w",
            "example/not_an_image.txt",
            "-c",
            "example/config.ini",
            "--output",
            "table",
        ])
        .assert()
        .code(4)
        .stderr(
            predicate::str::contains("unsupported extension")
                .and(predicate::str::contains("Accepted extensions: jpg")),
        );
}

#[test]
fn config_with_wrong_extension_exits_4() {
    let dir = workspace();
    cmd(dir.path())
        .args([
            "-w",
            "example/wallpaper.jpg",
            "-c",
            "example/invalid.extension",
            "--json",
        ])
        .assert()
        .code(4)
        .stderr(
            predicate::str::contains("\"invalid_file_extension\"")
                .and(predicate::str::contains("\"toml\"")),
        );
}

#[test]
fn malformed_config_exits_5() {
    let dir = workspace();
    fs::write(dir.path().join("broken.toml"), "[config\n").unwrap();
    cmd(dir.path())
        .args(["-w", "example/wallpaper.jpg", "-c", "broken.toml", "--json"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("\"config_error\""));
}

#[test]
fn missing_arguments_show_usage() {
    let dir = workspace();
    cmd(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
