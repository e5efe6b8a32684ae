//! Remembered source and destination folders for `move`.
//!
//! Stored as a flat JSON object in the XDG state directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key for the last bulk-move source folder.
pub const LAST_SRC: &str = "last_src";
/// Key for the last bulk-move destination folder.
pub const LAST_DST: &str = "last_dst";

const STATE_FILE: &str = "paths.json";

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Could not determine home directory")]
    NoHome,

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Corrupt path cache {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// `$XDG_STATE_HOME/reeltidy`, or `~/.local/state/reeltidy`.
pub fn state_dir() -> Result<PathBuf, StateError> {
    if let Some(dir) = std::env::var_os("XDG_STATE_HOME").filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join("reeltidy"));
    }
    let home = dirs::home_dir().ok_or(StateError::NoHome)?;
    Ok(home.join(".local").join("state").join("reeltidy"))
}

/// Path of the cache file.
pub fn state_file() -> Result<PathBuf, StateError> {
    Ok(state_dir()?.join(STATE_FILE))
}

/// Look up one remembered path.
pub fn load_saved_path(key: &str) -> Result<Option<String>, StateError> {
    load_saved_path_from(&state_file()?, key)
}

/// Merge `paths` into the cache, keeping keys not mentioned.
pub fn save_paths(paths: &BTreeMap<String, String>) -> Result<(), StateError> {
    save_paths_to(&state_file()?, paths)
}

pub fn load_saved_path_from(file: &Path, key: &str) -> Result<Option<String>, StateError> {
    Ok(read_all(file)?.remove(key))
}

pub fn save_paths_to(file: &Path, paths: &BTreeMap<String, String>) -> Result<(), StateError> {
    let mut merged = read_all(file)?;
    merged.extend(paths.iter().map(|(k, v)| (k.clone(), v.clone())));

    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent).map_err(|source| StateError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let json = serde_json::to_string_pretty(&merged).map_err(|source| StateError::Parse {
        path: file.to_path_buf(),
        source,
    })?;
    fs::write(file, json).map_err(|source| StateError::Write {
        path: file.to_path_buf(),
        source,
    })
}

fn read_all(file: &Path) -> Result<BTreeMap<String, String>, StateError> {
    if !file.exists() {
        return Ok(BTreeMap::new());
    }
    let contents = fs::read_to_string(file).map_err(|source| StateError::Read {
        path: file.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| StateError::Parse {
        path: file.to_path_buf(),
        source,
    })
}
