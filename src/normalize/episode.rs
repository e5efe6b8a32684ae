//! Series episode normalizer: `Show.Name.S01E05.720p.WEB.mkv` → `Show_Name_S01E05.mkv`.
//!
//! Shares the tokenizer and tag classifier with the movie normalizer but looks
//! for a season/episode marker instead of a year. Everything after the marker
//! (episode titles, rip tags) is discarded.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::movie::NumberRules;
use super::tags::TagSet;
use super::tokens::{has_bracket, is_year, split_stem, tokenize};
use super::{CleanOutcome, UnsalvageableReason};

/// `S01E05`, `s1e5`, `S01E105`
static SEASON_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^S(\d{1,2})E(\d{1,3})$").expect("valid SxxEyy regex"));

/// `1x05`, `12x105`
static CROSS_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d{1,2})x(\d{2,3})$").expect("valid NxNN regex"));

/// `E07`, `Ep7` - only meaningful with a season hint.
static BARE_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^Ep?(\d{1,3})$").expect("valid Eyy regex"));

/// Already-normalized stem.
static READY_EPISODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_S\d{2}E\d{2,3}$").expect("valid ready regex"));

/// Season folder names: `Season 1`, `Season_02`, `S03`, `Series 2`, `Staffel 4`, `Saison 5`.
static SEASON_FOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:(?:season|series|staffel|saison)[\s._-]*|s)(\d{1,2})$")
        .expect("valid season folder regex")
});

/// Extract a season number from a folder name.
pub fn season_from_folder(name: &str) -> Option<u32> {
    SEASON_FOLDER
        .captures(name.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// A season/episode marker found in the token stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeMarker {
    /// Index of the marker token.
    pub index: usize,
    pub season: u32,
    pub episode: u32,
}

impl EpisodeMarker {
    /// Canonical `S01E05` form.
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.episode)
    }
}

/// Locate the episode marker, preferring `SxxEyy`, then `NxNN`, then a bare
/// `Eyy` combined with the season hint.
pub fn find_marker(tokens: &[&str], season_hint: Option<u32>) -> Option<EpisodeMarker> {
    let by_pattern = |re: &Regex| {
        tokens.iter().enumerate().find_map(|(index, token)| {
            let caps = re.captures(token)?;
            Some(EpisodeMarker {
                index,
                season: caps.get(1)?.as_str().parse().ok()?,
                episode: caps.get(2)?.as_str().parse().ok()?,
            })
        })
    };

    if let Some(marker) = by_pattern(&*SEASON_EPISODE) {
        return Some(marker);
    }
    if let Some(marker) = by_pattern(&*CROSS_EPISODE) {
        return Some(marker);
    }

    let season = season_hint?;
    tokens.iter().enumerate().find_map(|(index, token)| {
        let caps = BARE_EPISODE.captures(token)?;
        Some(EpisodeMarker {
            index,
            season,
            episode: caps.get(1)?.as_str().parse().ok()?,
        })
    })
}

/// Episode-name normalizer.
#[derive(Debug, Clone, Default)]
pub struct EpisodeNormalizer {
    tags: TagSet,
    rules: NumberRules,
}

impl EpisodeNormalizer {
    pub fn new(tags: TagSet, rules: NumberRules) -> Self {
        Self { tags, rules }
    }

    /// Normalize an episode filename. `season_hint` comes from the parent folder.
    pub fn build_episode_name(&self, filename: &str, season_hint: Option<u32>) -> CleanOutcome {
        let Some((stem, extension)) = split_stem(filename) else {
            warn!("Could not derive episode from {:?} - leaving unchanged", filename);
            return CleanOutcome::unsalvageable(filename, "", UnsalvageableReason::Malformed);
        };

        if READY_EPISODE.is_match(stem) {
            return CleanOutcome::unchanged(stem, extension);
        }

        let tokens = tokenize(stem);
        let Some(marker) = find_marker(&tokens, season_hint) else {
            warn!("No season/episode marker in {} - leaving unchanged", filename);
            return CleanOutcome::unsalvageable(stem, extension, UnsalvageableReason::NoEpisode);
        };

        let words: Vec<&str> = tokens[..marker.index]
            .iter()
            .copied()
            .filter(|t| !self.rules.is_counter(t) && !self.tags.is_unwanted(t) && !has_bracket(t))
            .collect();
        // Years are release noise unless they are the whole title (`1883`).
        let title: Vec<&str> = if words.iter().all(|t| is_year(t)) {
            words
        } else {
            words.into_iter().filter(|t| !is_year(t)).collect()
        };

        if title.is_empty() {
            warn!("Could not derive show title from {} - leaving unchanged", filename);
            return CleanOutcome::unsalvageable(stem, extension, UnsalvageableReason::NoTitle);
        }

        let new_stem = format!("{}_{}", title.join("_"), marker.code());
        debug!("{} -> {}.{}", filename, new_stem, extension);
        CleanOutcome::cleaned(stem, new_stem, extension)
    }
}
