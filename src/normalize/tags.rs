//! Scene-release tag vocabulary.
//!
//! A [`TagSet`] is the set of tokens that carry release metadata (resolution,
//! source, codec, audio, group) rather than title words. Membership is an exact,
//! case-insensitive comparison: `"AM"` inside `"AMERICAN"` is never a match.

use std::collections::HashSet;

/// Resolution / quality tags.
const RESOLUTION_TAGS: &[&str] = &["1080p", "720p", "2160p", "4k", "uhd"];

/// Source / codec tags.
const SOURCE_TAGS: &[&str] = &[
    "bluray", "webrip", "brrip", "hdrip", "dvdrip", "x264", "x265", "h264", "h265", "hevc",
];

/// Audio tags.
///
/// `ddp5_1` never matches a token on its own because `_` is a delimiter. Its
/// halves are caught by `ddp5` and the default `1` counter.
const AUDIO_TAGS: &[&str] = &["aac", "aac5", "ddp5", "ddp5_1", "dts", "atmos"];

/// Scene groups and release flags.
const GROUP_TAGS: &[&str] = &["yify", "yts", "repack", "proper", "bokutox"];

/// Other noise words.
const NOISE_TAGS: &[&str] = &["sample", "trailer"];

/// The built-in tag vocabulary, in category order.
pub fn default_tags() -> Vec<String> {
    [
        RESOLUTION_TAGS,
        SOURCE_TAGS,
        AUDIO_TAGS,
        GROUP_TAGS,
        NOISE_TAGS,
    ]
    .iter()
    .flat_map(|group| group.iter())
    .map(|tag| tag.to_string())
    .collect()
}

/// Immutable, lower-cased set of unwanted release tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet {
    tags: HashSet<String>,
}

impl Default for TagSet {
    fn default() -> Self {
        Self::new(default_tags())
    }
}

impl TagSet {
    /// Build a tag set from any list of tags. Entries are lower-cased and
    /// surrounding whitespace is ignored; blank entries are skipped.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { tags }
    }

    /// True if `token` is a known rip tag (1080p, BluRay, YTS, ...).
    pub fn is_unwanted(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        self.tags.contains(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Free-function form of [`TagSet::is_unwanted`].
pub fn is_unwanted(token: &str, tags: &TagSet) -> bool {
    tags.is_unwanted(token)
}
