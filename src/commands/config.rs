//! Config subcommands handler

use anyhow::{Context, Result};
use std::path::Path;

use reeltidy::theme::current_theme;
use reeltidy::Config;

use super::{config_file, load_config};

/// Show the active configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

/// Open the configuration file in the default editor.
///
/// Uses $EDITOR environment variable (defaults to 'vi'). A file with the
/// defaults is written first if none exists.
#[cfg(not(tarpaulin_include))]
pub fn handle_edit(config_path: Option<&Path>) -> Result<()> {
    let path = config_file(config_path)?;
    let theme = current_theme();

    if !path.exists() {
        Config::default().save_to(&path)?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    println!(
        "{}",
        theme.primary_text(&format!("Opening {} with {}", path.display(), editor))
    );

    std::process::Command::new(&editor)
        .arg(&path)
        .status()
        .map_err(|e| anyhow::anyhow!("Failed to open editor: {}", e))?;

    // Validate the edited file
    load_config(Some(&path)).context("Edited config is invalid")?;
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", config_file(config_path)?.display());
    Ok(())
}
