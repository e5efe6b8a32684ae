//! Check command handler

use anyhow::Result;
use std::path::Path;

use reeltidy::theme::{current_theme, Theme};
use reeltidy::{CleanOutcome, Config};

use super::{format_kept, format_rename, load_config};

/// Print the cleaned form of each name. Never touches the filesystem.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    names: &[String],
    episodes: bool,
    season: Option<u32>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let theme = current_theme();
    for line in preview_lines(names, episodes, season, &config, &theme) {
        println!("{}", line);
    }
    Ok(())
}

/// Build one themed line per name.
pub fn preview_lines(
    names: &[String],
    episodes: bool,
    season: Option<u32>,
    config: &Config,
    theme: &Theme,
) -> Vec<String> {
    if episodes {
        let normalizer = config.episode_normalizer();
        names
            .iter()
            .map(|name| episode_line(name, &normalizer.build_episode_name(name, season), theme))
            .collect()
    } else {
        let normalizer = config.normalizer();
        normalizer
            .normalize_batch(names)
            .iter()
            .map(|decision| {
                if decision.is_rename() {
                    theme.primary_text(&format_rename(decision))
                } else if decision.reason.is_some() {
                    theme.warning_text(&format_kept(decision))
                } else {
                    theme.secondary_text(&format_kept(decision))
                }
            })
            .collect()
    }
}

fn episode_line(name: &str, outcome: &CleanOutcome, theme: &Theme) -> String {
    match outcome.reason {
        Some(reason) => theme.warning_text(&format!("{} (left unchanged: {})", name, reason)),
        None if outcome.changed => {
            theme.primary_text(&format!("{} -> {}", name, outcome.filename()))
        }
        None => theme.secondary_text(&format!("{} (unchanged)", name)),
    }
}
