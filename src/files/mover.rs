//! Bulk move into a flat destination folder with `[DUP] ` collision handling.
//!
//! The first file to claim a name gets it; every later file with the same name
//! (already on disk or earlier in the batch) is moved as `<prefix><name>`. A
//! prefixed target that already exists is overwritten.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use humansize::{format_size, BINARY};
use tracing::{debug, info, warn};

use super::error::FileOpError;
use super::lock;
use crate::interrupt::Interrupt;

/// Options for [`move_files_to_folder`].
#[derive(Debug, Clone)]
pub struct MoveOptions {
    pub duplicate_prefix: String,
    pub dry_run: bool,
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self {
            duplicate_prefix: crate::config::default_duplicate_prefix(),
            dry_run: false,
        }
    }
}

/// How a file landed in the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Plain,
    Duplicate,
}

/// One completed (or, in dry-run, planned) move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub source: PathBuf,
    pub target: PathBuf,
    pub kind: MoveKind,
}

/// Summary of a bulk move.
#[derive(Debug, Default)]
pub struct MoveReport {
    pub moved: Vec<MoveOutcome>,
    pub skipped: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, FileOpError)>,
    pub bytes: u64,
    pub interrupted: bool,
}

impl MoveReport {
    pub fn plain_count(&self) -> usize {
        self.moved.iter().filter(|m| m.kind == MoveKind::Plain).count()
    }

    pub fn duplicate_count(&self) -> usize {
        self.moved
            .iter()
            .filter(|m| m.kind == MoveKind::Duplicate)
            .count()
    }

    /// Get human-readable size of everything moved
    pub fn size_human(&self) -> String {
        format_size(self.bytes, BINARY)
    }
}

/// Move `files` into `destination` (flat, non-recursive).
///
/// The destination is created if missing and locked for the duration of the
/// batch. Per-file failures are collected in the report; only setup failures
/// (creating or locking the destination) abort.
pub fn move_files_to_folder(
    files: &[PathBuf],
    destination: &Path,
    options: &MoveOptions,
    interrupt: &Interrupt,
) -> Result<MoveReport, FileOpError> {
    let _lock = if options.dry_run {
        None
    } else {
        fs::create_dir_all(destination).map_err(|source| FileOpError::CreateDir {
            path: destination.to_path_buf(),
            source,
        })?;
        Some(lock::acquire(destination)?)
    };

    let dest_dir = resolved_dir(destination);
    let mut report = MoveReport::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for file in files {
        if interrupt.is_set() {
            warn!("Interrupted - stopping before {}", file.display());
            report.interrupted = true;
            break;
        }

        let Some(name) = file.file_name() else {
            report.skipped.push(file.clone());
            continue;
        };

        let target = destination.join(name);
        if file.parent().map(resolved_dir).as_ref() == Some(&dest_dir) {
            debug!("Already in destination: {}", file.display());
            report.skipped.push(file.clone());
            continue;
        }

        let (target, kind) = if target.exists() || claimed.contains(&target) {
            let mut dup_name = std::ffi::OsString::from(&options.duplicate_prefix);
            dup_name.push(name);
            let dup_target = destination.join(dup_name);
            info!("Duplicate detected - moving to {}", dup_target.display());
            if dup_target.exists() || claimed.contains(&dup_target) {
                warn!("Overwriting existing duplicate {}", dup_target.display());
            }
            (dup_target, MoveKind::Duplicate)
        } else {
            (target, MoveKind::Plain)
        };

        let size = fs::metadata(file).map(|m| m.len()).unwrap_or(0);

        if !options.dry_run {
            if let Err(e) = move_file(file, &target) {
                warn!("{}", e);
                report.failures.push((file.clone(), e));
                continue;
            }
        }

        claimed.insert(target.clone());
        report.bytes += size;
        report.moved.push(MoveOutcome {
            source: file.clone(),
            target,
            kind,
        });
    }

    Ok(report)
}

/// Resolve a directory to a comparable form, so `./Movies` and
/// `/home/me/Movies` compare equal. Missing directories resolve lexically.
fn resolved_dir(dir: &Path) -> PathBuf {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };
    fs::canonicalize(dir)
        .or_else(|_| std::path::absolute(dir))
        .unwrap_or_else(|_| dir.to_path_buf())
}

/// Rename, falling back to copy + remove when crossing filesystems.
pub fn move_file(from: &Path, to: &Path) -> Result<(), FileOpError> {
    if fs::rename(from, to).is_ok() {
        return Ok(());
    }
    fs::copy(from, to).map_err(|source| FileOpError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })?;
    fs::remove_file(from).map_err(|source| FileOpError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
