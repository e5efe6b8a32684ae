//! Configuration management for reeltidy

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::files::discover::VideoExtensions;
use crate::normalize::{EpisodeNormalizer, Normalizer, NumberRules, TagSet};

impl Config {
    /// Get the config file path (~/.config/reeltidy/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Load from an explicit path when given, otherwise from the default location
    pub fn load_with(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => io::load_from(path),
            None => io::load(),
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Build the immutable tag set from `[tags].unwanted`
    pub fn tag_set(&self) -> TagSet {
        TagSet::new(&self.tags.unwanted)
    }

    /// Build the numeric token rules from `[tags]`
    pub fn number_rules(&self) -> NumberRules {
        NumberRules::new(self.tags.counter_numbers.iter().cloned(), self.tags.extra_years)
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.tag_set(), self.number_rules())
    }

    pub fn episode_normalizer(&self) -> EpisodeNormalizer {
        EpisodeNormalizer::new(self.tag_set(), self.number_rules())
    }

    pub fn video_extensions(&self) -> VideoExtensions {
        VideoExtensions::new(&self.scan.video_extensions)
    }
}
