//! Movie filename normalizer: `Some.Release.2019.1080p.x264.mkv` → `Some_Release_(2019).mkv`.
//!
//! The pipeline runs in a fixed order:
//! 1. Already-clean names (`..._(YYYY)` with no counter artifact) are returned as-is
//! 2. The first embedded `(YYYY)` is spliced out and becomes the year
//! 3. The rest of the stem is tokenized on `. - _ space`
//! 4. Tokens are classified: loose year, counter, rip tag, bracket junk, title word
//! 5. Survivors are joined with `_`, the year is appended, and counters are swept again
//!
//! Running the normalizer on its own output is always a no-op.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::tags::TagSet;
use super::tokens::{
    collapse_underscores, has_bracket, has_ready_suffix, is_numeric, is_year, split_stem,
    take_paren_year, tokenize,
};
use super::{CleanOutcome, UnsalvageableReason};

/// What to do with a bare year-shaped token once the year is already known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtraYearPolicy {
    /// Keep it as a title word (`Blade_Runner_2049_(2017)`).
    #[default]
    Keep,
    /// Drop it like a rip tag.
    Drop,
}

/// Numeric token rules.
///
/// Counter numbers are duplicate-handling artifacts (`Movie_1_(2001)`); every
/// other short number is treated as part of the title (`John_Wick_3`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberRules {
    pub counters: HashSet<String>,
    pub extra_years: ExtraYearPolicy,
}

impl Default for NumberRules {
    fn default() -> Self {
        Self {
            counters: default_counters().into_iter().collect(),
            extra_years: ExtraYearPolicy::default(),
        }
    }
}

impl NumberRules {
    pub fn new<I, S>(counters: I, extra_years: ExtraYearPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            counters: counters.into_iter().map(Into::into).collect(),
            extra_years,
        }
    }

    pub fn is_counter(&self, token: &str) -> bool {
        self.counters.contains(token)
    }

    /// True if the stem holds a counter at the start, the end, or between underscores.
    fn has_counter_artifact(&self, stem: &str) -> bool {
        stem.split('_').any(|segment| self.is_counter(segment))
    }
}

pub fn default_counters() -> Vec<String> {
    vec!["1".to_string()]
}

/// The parsed pieces of a cleaned movie name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedName {
    pub title_parts: Vec<String>,
    pub year: Option<String>,
    pub extension: String,
}

impl CleanedName {
    /// Serialize to a stem: `Title_Words_(YEAR)` with underscores collapsed and
    /// boundary underscores stripped.
    pub fn stem(&self) -> String {
        let title = self.title_parts.join("_");
        let joined = match &self.year {
            Some(year) => format!("{}_({})", title, year),
            None => title,
        };
        collapse_underscores(&joined).trim_matches('_').to_string()
    }
}

/// Movie-name normalizer holding the injected tag vocabulary and number rules.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    tags: TagSet,
    rules: NumberRules,
}

impl Normalizer {
    pub fn new(tags: TagSet, rules: NumberRules) -> Self {
        Self { tags, rules }
    }

    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    pub fn rules(&self) -> &NumberRules {
        &self.rules
    }

    /// Convert a filename to `Title_(YEAR).ext`, or return it unchanged.
    pub fn build_clean_name(&self, filename: &str) -> String {
        match split_stem(filename) {
            Some((stem, ext)) => self.clean_parts(stem, ext).filename(),
            None => {
                warn!("Could not derive title from {:?} - leaving unchanged", filename);
                filename.to_string()
            }
        }
    }

    /// Normalize an already-split stem and extension.
    pub fn clean_parts(&self, stem: &str, extension: &str) -> CleanOutcome {
        if stem.is_empty() || extension.is_empty() {
            warn!("Could not derive title from {:?} - leaving unchanged", stem);
            return CleanOutcome::unsalvageable(stem, extension, UnsalvageableReason::Malformed);
        }

        if has_ready_suffix(stem) && !self.rules.has_counter_artifact(stem) {
            return CleanOutcome::unchanged(stem, extension);
        }

        match self.parse(stem, extension) {
            Some(cleaned) => {
                let new_stem = self.sweep_counters(&cleaned.stem());
                if new_stem.is_empty() {
                    warn!("Could not derive title from {}.{} - leaving unchanged", stem, extension);
                    return CleanOutcome::unsalvageable(
                        stem,
                        extension,
                        UnsalvageableReason::NoTitle,
                    );
                }
                debug!("{}.{} -> {}.{}", stem, extension, new_stem, extension);
                CleanOutcome::cleaned(stem, new_stem, extension)
            }
            None => {
                warn!("Could not derive title from {}.{} - leaving unchanged", stem, extension);
                CleanOutcome::unsalvageable(stem, extension, UnsalvageableReason::NoTitle)
            }
        }
    }

    /// Extract title words and year. Returns `None` when no title word survives.
    pub fn parse(&self, stem: &str, extension: &str) -> Option<CleanedName> {
        let (mut year, rest) = match take_paren_year(stem) {
            Some((year, rest)) => (Some(year), rest),
            None => (None, stem.to_string()),
        };

        let mut title_parts = Vec::new();
        for token in tokenize(&rest) {
            if is_year(token) {
                if year.is_none() {
                    year = Some(token.to_string());
                    continue;
                }
                if self.rules.extra_years == ExtraYearPolicy::Drop {
                    continue;
                }
            }
            if self.rules.is_counter(token) || self.tags.is_unwanted(token) || has_bracket(token)
            {
                continue;
            }
            if is_numeric(token) {
                debug!("Keeping {} as a sequel or part number", token);
            }
            title_parts.push(token.to_string());
        }

        if title_parts.is_empty() {
            return None;
        }

        Some(CleanedName {
            title_parts,
            year,
            extension: extension.to_string(),
        })
    }

    /// Remove boundary-anchored counter tokens (`_1_`, leading `1_`, trailing `_1`).
    fn sweep_counters(&self, stem: &str) -> String {
        let kept: Vec<&str> = stem
            .split('_')
            .filter(|segment| !self.rules.is_counter(segment))
            .collect();
        collapse_underscores(&kept.join("_"))
            .trim_matches('_')
            .to_string()
    }
}
