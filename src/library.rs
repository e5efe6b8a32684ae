//! Listing of already-normalized movies.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::files::VideoExtensions;

static MOVIE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<title>.+?)_\((?P<year>\d{4})\)\.[^.]+$").expect("valid movie regex")
});

/// A clean `Title_(YYYY).ext` file found in the library folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieEntry {
    pub title: String,
    pub year: u16,
    pub file: PathBuf,
}

/// Parse one clean filename into its title and year.
pub fn parse_movie_name(name: &str) -> Option<(String, u16)> {
    let caps = MOVIE_RE.captures(name)?;
    let year = caps["year"].parse().ok()?;
    Some((caps["title"].replace('_', " "), year))
}

/// List clean movies directly inside `root`, sorted by title then year.
///
/// Files that do not follow the clean naming scheme are skipped.
pub fn list_movies(root: &Path, exts: &VideoExtensions) -> Result<Vec<MovieEntry>> {
    let root = fs::canonicalize(root)
        .with_context(|| format!("Failed to resolve library folder: {}", root.display()))?;
    let entries = fs::read_dir(&root)
        .with_context(|| format!("Failed to read directory: {}", root.display()))?;

    let mut movies: Vec<MovieEntry> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && exts.matches(path))
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let (title, year) = parse_movie_name(name)?;
            Some(MovieEntry {
                title,
                year,
                file: path,
            })
        })
        .collect();

    movies.sort_by(|a, b| a.title.cmp(&b.title).then(a.year.cmp(&b.year)));
    Ok(movies)
}
