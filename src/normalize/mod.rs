//! Filename normalization.
//!
//! - `tags` - the unwanted release-tag vocabulary
//! - `tokens` - stem/extension split and delimiter tokenization
//! - `movie` - `Title_(YEAR).ext` normalizer
//! - `episode` - `Show_S01E05.ext` normalizer
//! - `decision` - per-file rename decisions and batch processing
//!
//! Everything here works on in-memory strings; nothing touches the filesystem.

pub mod decision;
pub mod episode;
pub mod movie;
pub mod tags;
pub mod tokens;

pub use decision::{Action, RenameDecision};
pub use episode::{season_from_folder, EpisodeNormalizer};
pub use movie::{CleanedName, ExtraYearPolicy, Normalizer, NumberRules};
pub use tags::{is_unwanted, TagSet};

/// Why a filename could not be normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum UnsalvageableReason {
    #[error("empty filename or missing extension")]
    Malformed,

    #[error("could not derive title")]
    NoTitle,

    #[error("no season/episode marker found")]
    NoEpisode,
}

/// Result of normalizing one stem/extension pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanOutcome {
    /// Stem to use; equal to the input stem when nothing changed.
    pub new_stem: String,
    pub extension: String,
    pub changed: bool,
    pub salvageable: bool,
    pub reason: Option<UnsalvageableReason>,
}

impl CleanOutcome {
    pub(crate) fn cleaned(original_stem: &str, new_stem: String, extension: &str) -> Self {
        Self {
            changed: new_stem != original_stem,
            new_stem,
            extension: extension.to_string(),
            salvageable: true,
            reason: None,
        }
    }

    pub(crate) fn unchanged(stem: &str, extension: &str) -> Self {
        Self {
            new_stem: stem.to_string(),
            extension: extension.to_string(),
            changed: false,
            salvageable: true,
            reason: None,
        }
    }

    pub(crate) fn unsalvageable(stem: &str, extension: &str, reason: UnsalvageableReason) -> Self {
        Self {
            new_stem: stem.to_string(),
            extension: extension.to_string(),
            changed: false,
            salvageable: false,
            reason: Some(reason),
        }
    }

    /// Reassemble `stem.ext` (or just the stem when there is no extension).
    pub fn filename(&self) -> String {
        if self.extension.is_empty() {
            self.new_stem.clone()
        } else {
            format!("{}.{}", self.new_stem, self.extension)
        }
    }
}
