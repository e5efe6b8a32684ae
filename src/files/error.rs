//! File operation errors.

use std::path::PathBuf;

/// Errors from renaming, moving, and locking files.
#[derive(Debug, thiserror::Error)]
pub enum FileOpError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to rename {from} -> {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to move {from} -> {to}: {source}")]
    Move {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },

    #[error("Target already exists, not overwriting: {path}")]
    TargetExists { path: PathBuf },

    #[error("Destination is locked by another reeltidy process (pid {pid}): {path}")]
    Locked { path: PathBuf, pid: u32 },

    #[error("Failed to write lock file {path}: {source}")]
    LockWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
