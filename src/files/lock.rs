//! Destination directory lock.
//!
//! A bulk move checks "does the target exist" and then writes it. Two
//! processes moving into the same directory would race between those steps, so
//! the mover holds an exclusive `flock` on `.reeltidy.lock` for the whole
//! batch. The file records the holder's pid and start time for error messages.
//! The kernel drops the lock when its holder exits, so a file left behind by a
//! dead process is simply locked again.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::FileOpError;

/// Lock file name placed inside the locked directory.
pub const LOCK_FILE_NAME: &str = ".reeltidy.lock";

/// Metadata stored in a lock file to identify the owning process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockInfo {
    pub pid: u32,
    pub started: String,
}

/// Get the lock file path for a directory.
pub fn lock_path_for(dir: &Path) -> PathBuf {
    dir.join(LOCK_FILE_NAME)
}

/// Read lock info if the lock file exists and the owning PID is still alive.
///
/// Returns `None` if the lock file is missing, malformed, or the PID is dead.
pub fn read_lock(dir: &Path) -> Option<LockInfo> {
    let contents = fs::read_to_string(lock_path_for(dir)).ok()?;
    let info: LockInfo = serde_json::from_str(&contents).ok()?;
    if !is_pid_alive(info.pid) {
        return None;
    }
    Some(info)
}

/// Held lock on a directory; the lock file is removed on drop.
#[derive(Debug)]
pub struct DirLock {
    path: PathBuf,
    // Closing this releases the flock, so it must outlive the unlink in Drop.
    _file: File,
}

impl DirLock {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for DirLock {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// Take the lock on `dir`.
///
/// The directory must already exist. Fails with [`FileOpError::Locked`] while
/// another handle holds the lock, even if its file is still empty.
pub fn acquire(dir: &Path) -> Result<DirLock, FileOpError> {
    let path = lock_path_for(dir);
    let write_err = |source| FileOpError::LockWrite {
        path: path.clone(),
        source,
    };

    loop {
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&path)
            .map_err(write_err)?;

        if !try_lock_exclusive(&file).map_err(write_err)? {
            let pid = read_lock(dir).map(|i| i.pid).unwrap_or_default();
            return Err(FileOpError::Locked {
                path: dir.to_path_buf(),
                pid,
            });
        }

        // The previous holder may have unlinked the file between our open and
        // our flock. Locking an orphaned inode guards nothing, so start over.
        if !is_same_file(&file, &path) {
            tracing::debug!("Lock file {} was replaced, retrying", path.display());
            continue;
        }

        let info = LockInfo {
            pid: std::process::id(),
            started: chrono::Utc::now().to_rfc3339(),
        };
        let json =
            serde_json::to_string(&info).map_err(|e| write_err(std::io::Error::other(e)))?;
        file.set_len(0).map_err(write_err)?;
        file.write_all(json.as_bytes()).map_err(write_err)?;

        return Ok(DirLock { path, _file: file });
    }
}

/// Try a non-blocking exclusive `flock`. `Ok(false)` means someone else holds it.
#[cfg(unix)]
fn try_lock_exclusive(file: &File) -> std::io::Result<bool> {
    use std::os::unix::io::AsRawFd;

    // SAFETY: the descriptor is owned by `file` and stays open for the call.
    let ret = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if ret == 0 {
        return Ok(true);
    }
    let err = std::io::Error::last_os_error();
    if err.raw_os_error() == Some(libc::EWOULDBLOCK) {
        Ok(false)
    } else {
        Err(err)
    }
}

#[cfg(not(unix))]
fn try_lock_exclusive(_file: &File) -> std::io::Result<bool> {
    Ok(true)
}

/// Whether the open handle still refers to the file at `path`.
#[cfg(unix)]
fn is_same_file(file: &File, path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (file.metadata(), fs::metadata(path)) {
        (Ok(held), Ok(current)) => held.dev() == current.dev() && held.ino() == current.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(_file: &File, path: &Path) -> bool {
    path.exists()
}

/// Check whether a process with the given PID is still running.
///
/// Uses `kill(pid, 0)` which checks for process existence without sending a signal.
/// Returns `true` if the process exists (even if owned by another user, EPERM).
#[cfg(unix)]
pub(crate) fn is_pid_alive(pid: u32) -> bool {
    if pid == 0 || pid > i32::MAX as u32 {
        return false;
    }
    // SAFETY: kill with signal 0 only checks process existence, no signal is sent.
    let ret = unsafe { libc::kill(pid as libc::pid_t, 0) };
    if ret == 0 {
        return true;
    }
    // EPERM means the process exists but belongs to another user
    std::io::Error::last_os_error().raw_os_error() == Some(libc::EPERM)
}

#[cfg(not(unix))]
pub(crate) fn is_pid_alive(_pid: u32) -> bool {
    false
}
