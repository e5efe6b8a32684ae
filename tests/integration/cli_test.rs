//! End-to-end tests for the reeltidy binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{file_names, run_reeltidy, write_file};

fn reeltidy(state_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reeltidy").unwrap();
    cmd.env("NO_COLOR", "1")
        .env("XDG_STATE_HOME", state_home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_prints_cleaned_names() {
    let state = TempDir::new().unwrap();
    reeltidy(&state)
        .args(["check", "The.Matrix.1.1999.mkv", "Ready_Name_(2005).mp4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The.Matrix.1.1999.mkv -> The_Matrix_(1999).mkv",
        ))
        .stdout(predicate::str::contains("Ready_Name_(2005).mp4 (unchanged)"));
}

#[test]
fn check_episodes_with_season() {
    let state = TempDir::new().unwrap();
    reeltidy(&state)
        .args(["check", "--episodes", "--season", "2", "Show_Name_E07.mkv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Show_Name_S02E07.mkv"));
}

#[test]
fn unsalvageable_name_warns_on_stderr() {
    let state = TempDir::new().unwrap();
    reeltidy(&state)
        .args(["check", "1080p.mkv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("left unchanged"))
        .stderr(predicate::str::contains("Could not derive title"));
}

#[test]
fn clean_dry_run_then_real_run() {
    let state = TempDir::new().unwrap();
    let media = TempDir::new().unwrap();
    write_file(media.path(), "Heat.1995.1080p.BluRay.x264.mkv", "x");
    let folder = media.path().to_str().unwrap();

    reeltidy(&state)
        .args(["clean", folder, "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would rename 1 file(s)"));
    assert_eq!(file_names(media.path()), vec!["Heat.1995.1080p.BluRay.x264.mkv"]);

    reeltidy(&state)
        .args(["clean", folder])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed 1 file(s)"));
    assert_eq!(file_names(media.path()), vec!["Heat_(1995).mkv"]);
}

#[test]
fn clean_missing_folder_fails() {
    let state = TempDir::new().unwrap();
    let media = TempDir::new().unwrap();
    let (_, stderr, code) = run_reeltidy(
        &["clean", media.path().join("nope").to_str().unwrap()],
        state.path(),
    );
    assert_ne!(code, 0);
    assert!(stderr.contains("Failed to read directory"));
}

#[test]
fn move_remembers_folders_for_next_run() {
    let state = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("downloads");
    let dst = temp.path().join("movies");
    write_file(&src, "one/Heat_(1995).mkv", "a");
    write_file(&src, "two/Heat_(1995).mkv", "b");

    reeltidy(&state)
        .args([
            "move",
            src.to_str().unwrap(),
            dst.to_str().unwrap(),
            "--remember",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 2 file(s) (1 duplicate(s)"));
    assert_eq!(
        file_names(&dst),
        vec!["Heat_(1995).mkv", "[DUP] Heat_(1995).mkv"]
    );
    assert!(state.path().join("reeltidy").join("paths.json").exists());

    write_file(&src, "three/Alien_(1979).mp4", "c");
    reeltidy(&state).arg("move").assert().success();
    assert!(dst.join("Alien_(1979).mp4").exists());
}

#[test]
fn move_from_current_dir_leaves_destination_contents_alone() {
    let state = TempDir::new().unwrap();
    let root = TempDir::new().unwrap();
    write_file(root.path(), "Movies/Heat_(1995).mkv", "library");
    write_file(root.path(), "Alien_(1979).mp4", "new");

    reeltidy(&state)
        .current_dir(root.path())
        .args(["move", ".", "Movies"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 1 file(s) (0 duplicate(s)"));

    assert_eq!(
        file_names(&root.path().join("Movies")),
        vec!["Alien_(1979).mp4", "Heat_(1995).mkv"]
    );
    assert_eq!(
        std::fs::read_to_string(root.path().join("Movies/Heat_(1995).mkv")).unwrap(),
        "library"
    );
}

#[test]
fn failed_move_does_not_remember_folders() {
    let state = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let src = temp.path().join("downloads");
    let dst = temp.path().join("movies");
    write_file(&src, "Heat_(1995).mkv", "a");
    std::fs::create_dir_all(&dst).unwrap();
    let _held = reeltidy::files::lock::acquire(&dst).unwrap();

    reeltidy(&state)
        .args([
            "move",
            src.to_str().unwrap(),
            dst.to_str().unwrap(),
            "--remember",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("locked"));

    assert!(!state.path().join("reeltidy").join("paths.json").exists());
    assert!(src.join("Heat_(1995).mkv").exists());
}

#[test]
fn move_without_folders_or_memory_fails() {
    let state = TempDir::new().unwrap();
    reeltidy(&state)
        .arg("move")
        .assert()
        .failure()
        .stderr(predicate::str::contains("none remembered"));
}

#[test]
fn scan_outputs_json() {
    let state = TempDir::new().unwrap();
    let media = TempDir::new().unwrap();
    write_file(media.path(), "Blade_Runner_2049_(2017).mkv", "x");
    write_file(media.path(), "raw.name.mkv", "x");

    let output = reeltidy(&state)
        .args(["scan", media.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["title"], "Blade Runner 2049");
    assert_eq!(entries[0]["year"], 2017);
}

#[test]
fn config_flag_changes_duplicate_prefix() {
    let state = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let config = write_file(temp.path(), "config.toml", "[move]\nduplicate_prefix = \"DUP_\"\n");
    let dst = temp.path().join("movies");
    write_file(&dst, "Heat_(1995).mkv", "old");
    let src = temp.path().join("in");
    write_file(&src, "Heat_(1995).mkv", "new");

    reeltidy(&state)
        .args([
            "--config",
            config.to_str().unwrap(),
            "move",
            src.to_str().unwrap(),
            dst.to_str().unwrap(),
        ])
        .assert()
        .success();
    assert!(dst.join("DUP_Heat_(1995).mkv").exists());
}

#[test]
fn config_path_honors_override() {
    let state = TempDir::new().unwrap();
    reeltidy(&state)
        .args(["config", "path", "--config", "/tmp/reeltidy-test.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/reeltidy-test.toml"));
}

#[test]
fn config_show_prints_sections() {
    let state = TempDir::new().unwrap();
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("none.toml");
    reeltidy(&state)
        .args(["config", "show", "--config", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[tags]"))
        .stdout(predicate::str::contains("[move]"));
}

#[test]
fn completions_generate_for_bash() {
    let state = TempDir::new().unwrap();
    reeltidy(&state)
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reeltidy"));
}
