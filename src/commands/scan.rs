//! Scan command handler

use anyhow::{Context, Result};
use std::path::Path;

use reeltidy::library::list_movies;

use super::load_config;

/// Print the clean movies in `folder` (default: current directory) as JSON.
#[cfg(not(tarpaulin_include))]
pub fn handle(folder: Option<&Path>, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let folder = folder.unwrap_or_else(|| Path::new("."));
    let movies = list_movies(folder, &config.video_extensions())?;
    let json = serde_json::to_string_pretty(&movies).context("Failed to serialize movie list")?;
    println!("{}", json);
    Ok(())
}
