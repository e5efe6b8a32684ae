//! Filesystem side of reeltidy: discovery, in-place renames, and bulk moves.
//!
//! Everything here consumes decisions from [`crate::normalize`]; no naming
//! logic lives in this module.

pub mod discover;
pub mod error;
pub mod lock;
pub mod mover;
pub mod rename;

pub use discover::{find_video_files, list_video_files, VideoExtensions};
pub use error::FileOpError;
pub use mover::{move_files_to_folder, MoveKind, MoveOptions, MoveOutcome, MoveReport};
pub use rename::{clean_episodes, clean_folder, RenameReport};
