use std::fs;
use std::path::PathBuf;

use reeltidy::files::lock;
use reeltidy::files::{move_files_to_folder, FileOpError, MoveOptions};
use reeltidy::Interrupt;
use tempfile::TempDir;

#[test]
fn lock_path_is_hidden_file_in_directory() {
    let dir = TempDir::new().unwrap();
    assert_eq!(
        lock::lock_path_for(dir.path()),
        dir.path().join(".reeltidy.lock")
    );
}

#[test]
fn acquire_and_read_lock_round_trip() {
    let dir = TempDir::new().unwrap();
    let held = lock::acquire(dir.path()).unwrap();
    let info = lock::read_lock(dir.path()).unwrap();
    assert_eq!(info.pid, std::process::id());
    assert!(chrono::DateTime::parse_from_rfc3339(&info.started).is_ok());
    drop(held);
    assert!(lock::read_lock(dir.path()).is_none());
}

#[test]
fn read_lock_returns_none_when_no_lock_file() {
    let dir = TempDir::new().unwrap();
    assert!(lock::read_lock(dir.path()).is_none());
}

#[test]
fn read_lock_returns_none_for_stale_pid() {
    let dir = TempDir::new().unwrap();
    fs::write(
        lock::lock_path_for(dir.path()),
        r#"{"pid":999999999,"started":"2025-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    assert!(lock::read_lock(dir.path()).is_none());
}

#[test]
fn stale_lock_is_reclaimed() {
    let dir = TempDir::new().unwrap();
    fs::write(
        lock::lock_path_for(dir.path()),
        r#"{"pid":999999999,"started":"2025-01-01T00:00:00Z"}"#,
    )
    .unwrap();
    let held = lock::acquire(dir.path()).unwrap();
    assert_eq!(lock::read_lock(dir.path()).unwrap().pid, std::process::id());
    drop(held);
}

#[test]
fn second_acquire_while_held_is_refused() {
    let dir = TempDir::new().unwrap();
    let _held = lock::acquire(dir.path()).unwrap();
    match lock::acquire(dir.path()) {
        Err(FileOpError::Locked { pid, .. }) => assert_eq!(pid, std::process::id()),
        other => panic!("expected Locked, got {:?}", other),
    }
}

#[test]
fn move_into_locked_destination_fails_without_moving() {
    let temp = TempDir::new().unwrap();
    let dst = temp.path().join("movies");
    fs::create_dir_all(&dst).unwrap();
    let incoming: PathBuf = temp.path().join("Heat_(1995).mkv");
    fs::write(&incoming, "x").unwrap();

    let _held = lock::acquire(&dst).unwrap();
    let result = move_files_to_folder(
        &[incoming.clone()],
        &dst,
        &MoveOptions::default(),
        &Interrupt::default(),
    );

    assert!(matches!(result, Err(FileOpError::Locked { .. })));
    assert!(incoming.exists());
}
