//! reeltidy library
//!
//! Normalizes scene-release video filenames into `Title_(YEAR).ext` (movies)
//! or `Title_SxxEyy.ext` (episodes), and moves files into a flat library
//! folder without losing duplicates.

pub mod cli;
pub mod config;
pub mod files;
pub mod interrupt;
pub mod library;
pub mod normalize;
pub mod state;
pub mod theme;

pub use config::Config;
pub use files::{FileOpError, MoveReport, RenameReport, VideoExtensions};
pub use interrupt::Interrupt;
pub use library::MovieEntry;
pub use normalize::{
    is_unwanted, Action, CleanOutcome, EpisodeNormalizer, Normalizer, RenameDecision, TagSet,
    UnsalvageableReason,
};
