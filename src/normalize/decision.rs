//! Per-file rename decisions.
//!
//! Each path is decided independently, so batches are spread over the rayon
//! pool; output order always matches input order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use super::episode::{season_from_folder, EpisodeNormalizer};
use super::movie::Normalizer;
use super::tokens::split_stem;
use super::{CleanOutcome, UnsalvageableReason};

/// What should happen to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Rename,
    NoChange,
    Unsalvageable,
}

/// The decision for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenameDecision {
    pub original_path: PathBuf,
    pub new_path: PathBuf,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<UnsalvageableReason>,
}

impl RenameDecision {
    fn from_outcome(path: &Path, outcome: CleanOutcome) -> Self {
        let action = if !outcome.salvageable {
            Action::Unsalvageable
        } else if outcome.changed {
            Action::Rename
        } else {
            Action::NoChange
        };
        let new_path = match action {
            Action::Rename => path.with_file_name(outcome.filename()),
            _ => path.to_path_buf(),
        };
        Self {
            original_path: path.to_path_buf(),
            new_path,
            action,
            reason: outcome.reason,
        }
    }

    fn malformed(path: &Path) -> Self {
        Self {
            original_path: path.to_path_buf(),
            new_path: path.to_path_buf(),
            action: Action::Unsalvageable,
            reason: Some(UnsalvageableReason::Malformed),
        }
    }

    pub fn is_rename(&self) -> bool {
        self.action == Action::Rename
    }

    /// Final path component of the original path, lossy.
    pub fn original_name(&self) -> String {
        file_name_lossy(&self.original_path)
    }

    /// Final path component of the new path, lossy.
    pub fn new_name(&self) -> String {
        file_name_lossy(&self.new_path)
    }
}

fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl Normalizer {
    /// Decide what to do with one path. Only the final component is normalized.
    pub fn decide(&self, path: &Path) -> RenameDecision {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return RenameDecision::malformed(path);
        };
        match split_stem(name) {
            Some((stem, ext)) => RenameDecision::from_outcome(path, self.clean_parts(stem, ext)),
            None => {
                tracing::warn!("Could not derive title from {:?} - leaving unchanged", name);
                RenameDecision::malformed(path)
            }
        }
    }

    /// Normalize many paths. Exactly one decision per input, in input order.
    pub fn normalize_batch<P>(&self, files: &[P]) -> Vec<RenameDecision>
    where
        P: AsRef<Path> + Sync,
    {
        files.par_iter().map(|f| self.decide(f.as_ref())).collect()
    }
}

impl EpisodeNormalizer {
    /// Decide one episode path, using the parent folder as a season hint.
    pub fn decide(&self, path: &Path) -> RenameDecision {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return RenameDecision::malformed(path);
        };
        let hint = path
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .and_then(season_from_folder);
        RenameDecision::from_outcome(path, self.build_episode_name(name, hint))
    }

    pub fn normalize_batch<P>(&self, files: &[P]) -> Vec<RenameDecision>
    where
        P: AsRef<Path> + Sync,
    {
        files.par_iter().map(|f| self.decide(f.as_ref())).collect()
    }
}
