//! Episodes command handler

use anyhow::{bail, Result};
use std::path::Path;

use reeltidy::files::clean_episodes;
use reeltidy::theme::current_theme;
use reeltidy::Interrupt;

use super::{load_config, print_rename_report};

/// Rename episode files under `folder`, recursively.
#[cfg(not(tarpaulin_include))]
pub fn handle(folder: &Path, dry_run: bool, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let theme = current_theme();
    let interrupt = Interrupt::install();

    let report = clean_episodes(
        folder,
        &config.episode_normalizer(),
        &config.video_extensions(),
        dry_run,
        &interrupt,
    )?;

    print_rename_report(&report, dry_run, &theme);

    if !report.failures.is_empty() {
        bail!("{} episode(s) could not be renamed", report.failures.len());
    }
    Ok(())
}
