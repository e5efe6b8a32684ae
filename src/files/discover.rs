//! Video file discovery.
//!
//! Recursive discovery walks with `walkdir`; the flat listing used for
//! in-place cleaning only reads one directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

/// Case-insensitive set of eligible extensions, stored without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoExtensions {
    exts: HashSet<String>,
}

impl Default for VideoExtensions {
    fn default() -> Self {
        Self::new([".mp4", ".mkv", ".avi"])
    }
}

impl VideoExtensions {
    /// Accepts entries with or without the leading dot (`".mkv"` or `"mkv"`).
    pub fn new<I, S>(exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let exts = exts
            .into_iter()
            .map(|e| e.as_ref().trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { exts }
    }

    /// True if the path's extension is in the set.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| self.exts.contains(&e.to_lowercase()))
    }
}

/// Return every video file under `root`, recursively, in walk order.
///
/// Unreadable entries are skipped with a debug log.
pub fn find_video_files(root: &Path, exts: &VideoExtensions) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| exts.matches(path))
        .collect()
}

/// Return the video files directly inside `folder`, sorted by file name.
pub fn list_video_files(folder: &Path, exts: &VideoExtensions) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)
        .with_context(|| format!("Failed to read directory: {}", folder.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && exts.matches(path))
        .collect();
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
