//! In-place renaming of a folder's video files.
//!
//! Decisions come from the pure normalizers; this module only applies them.
//! An existing target is never overwritten: the rename is skipped and
//! reported instead.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{info, warn};

use super::discover::{find_video_files, list_video_files, VideoExtensions};
use super::error::FileOpError;
use crate::interrupt::Interrupt;
use crate::normalize::{Action, EpisodeNormalizer, Normalizer, RenameDecision};

/// Result of applying a batch of rename decisions.
#[derive(Debug, Default)]
pub struct RenameReport {
    pub renamed: Vec<RenameDecision>,
    pub unchanged: Vec<RenameDecision>,
    pub unsalvageable: Vec<RenameDecision>,
    pub failures: Vec<(RenameDecision, FileOpError)>,
    pub interrupted: bool,
}

impl RenameReport {
    /// Total number of decisions seen before any interrupt.
    pub fn total(&self) -> usize {
        self.renamed.len() + self.unchanged.len() + self.unsalvageable.len() + self.failures.len()
    }
}

/// Normalize every eligible file directly inside `folder`.
pub fn clean_folder(
    folder: &Path,
    normalizer: &Normalizer,
    exts: &VideoExtensions,
    dry_run: bool,
    interrupt: &Interrupt,
) -> Result<RenameReport> {
    let files = list_video_files(folder, exts)?;
    let decisions = normalizer.normalize_batch(&files);
    Ok(apply_decisions(decisions, dry_run, interrupt))
}

/// Normalize every eligible file under `folder` as a series episode.
///
/// Recursive, so season folders are visited and used as season hints.
pub fn clean_episodes(
    folder: &Path,
    normalizer: &EpisodeNormalizer,
    exts: &VideoExtensions,
    dry_run: bool,
    interrupt: &Interrupt,
) -> Result<RenameReport> {
    if !folder.is_dir() {
        anyhow::bail!("Not a directory: {}", folder.display());
    }
    let mut files = find_video_files(folder, exts);
    files.sort();
    let decisions = normalizer.normalize_batch(&files);
    Ok(apply_decisions(decisions, dry_run, interrupt))
}

/// Apply decisions in order. In dry-run mode nothing is touched, but target
/// collisions are still detected against names claimed earlier in the batch.
pub fn apply_decisions(
    decisions: Vec<RenameDecision>,
    dry_run: bool,
    interrupt: &Interrupt,
) -> RenameReport {
    let mut report = RenameReport::default();
    let mut claimed: HashSet<PathBuf> = HashSet::new();

    for decision in decisions {
        if interrupt.is_set() {
            warn!("Interrupted - {} file(s) processed", report.total());
            report.interrupted = true;
            break;
        }

        match decision.action {
            Action::NoChange => report.unchanged.push(decision),
            Action::Unsalvageable => report.unsalvageable.push(decision),
            Action::Rename => {
                let target = &decision.new_path;
                if claimed.contains(target) || occupied_by_other(&decision.original_path, target) {
                    let err = FileOpError::TargetExists {
                        path: target.clone(),
                    };
                    warn!("{}", err);
                    report.failures.push((decision, err));
                    continue;
                }

                if !dry_run {
                    if let Err(source) = fs::rename(&decision.original_path, target) {
                        let err = FileOpError::Rename {
                            from: decision.original_path.clone(),
                            to: target.clone(),
                            source,
                        };
                        warn!("{}", err);
                        report.failures.push((decision, err));
                        continue;
                    }
                }

                info!("{} -> {}", decision.original_name(), decision.new_name());
                claimed.insert(target.clone());
                report.renamed.push(decision);
            }
        }
    }

    report
}

/// True when `target` exists and is not just `source` under a different case
/// (case-insensitive filesystems report the target as present).
fn occupied_by_other(source: &Path, target: &Path) -> bool {
    if !target.exists() {
        return false;
    }
    let same_ignoring_case = match (source.to_str(), target.to_str()) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        _ => false,
    };
    !same_ignoring_case
}
