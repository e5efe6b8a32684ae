//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::normalize::movie::{default_counters, ExtraYearPolicy};
use crate::normalize::tags::default_tags;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tags: TagsConfig,
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default, rename = "move")]
    pub moves: MoveConfig,
}

/// Tag vocabulary and numeric token rules
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Release tags stripped from names (case-insensitive, exact match)
    #[serde(default = "default_tags")]
    pub unwanted: Vec<String>,
    /// Numbers treated as duplicate-counter artifacts and removed
    #[serde(default = "default_counters")]
    pub counter_numbers: Vec<String>,
    /// What to do with a second bare year token: "keep" or "drop"
    #[serde(default)]
    pub extra_years: ExtraYearPolicy,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            unwanted: default_tags(),
            counter_numbers: default_counters(),
            extra_years: ExtraYearPolicy::default(),
        }
    }
}

/// File discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Extensions eligible for renaming and moving
    #[serde(default = "default_video_extensions")]
    pub video_extensions: Vec<String>,
}

pub fn default_video_extensions() -> Vec<String> {
    vec![".mp4".to_string(), ".mkv".to_string(), ".avi".to_string()]
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            video_extensions: default_video_extensions(),
        }
    }
}

/// Bulk move configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveConfig {
    /// Prefix prepended to a file whose name is already taken at the destination
    #[serde(default = "default_duplicate_prefix")]
    pub duplicate_prefix: String,
}

pub fn default_duplicate_prefix() -> String {
    "[DUP] ".to_string()
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            duplicate_prefix: default_duplicate_prefix(),
        }
    }
}

impl Config {
    /// Check values that deserialize fine but make no sense.
    pub fn validate(&self) -> Result<(), String> {
        if self.scan.video_extensions.is_empty() {
            return Err("scan.video_extensions must not be empty".to_string());
        }
        if let Some(bad) = self
            .scan
            .video_extensions
            .iter()
            .find(|e| e.trim_start_matches('.').trim().is_empty())
        {
            return Err(format!("scan.video_extensions has an empty entry: {:?}", bad));
        }
        if let Some(bad) = self
            .tags
            .counter_numbers
            .iter()
            .find(|n| n.is_empty() || !n.bytes().all(|b| b.is_ascii_digit()))
        {
            return Err(format!(
                "tags.counter_numbers entries must be digits (got {:?})",
                bad
            ));
        }
        if self.moves.duplicate_prefix.trim().is_empty() {
            return Err("move.duplicate_prefix must not be empty".to_string());
        }
        if self.moves.duplicate_prefix.contains(['/', '\\']) {
            return Err("move.duplicate_prefix must not contain path separators".to_string());
        }
        Ok(())
    }
}
