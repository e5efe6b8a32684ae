//! CLI definitions for reeltidy
//!
//! Kept in the library so the command tree can be inspected from tests and
//! used for completion generation.

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Build clap styles matching the CLI theme.
///
/// - Green: headers, usage, command names
/// - White: placeholders and valid values
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "reeltidy")]
#[command(about = "Normalize scene-release movie filenames into Title_(YEAR).ext")]
#[command(
    long_about = "reeltidy - clean up downloaded movie and episode filenames.

Release names like The.Matrix.1999.1080p.BluRay.x264-YIFY.mkv are reduced to
The_Matrix_(1999).mkv. Names that are already clean are left alone, and names
without any recognizable title are never touched.

QUICK START:
    reeltidy check The.Matrix.1999.1080p.mkv    Preview a single name
    reeltidy clean ~/Downloads --dry-run        Preview a whole folder
    reeltidy clean ~/Downloads                  Rename in place
    reeltidy move ~/Downloads ~/Movies          Collect videos into one folder

CONFIGURATION:
    reeltidy config show                        Print the active configuration
    reeltidy config edit                        Edit tags, extensions, prefix"
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this configuration file instead of the default location
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rename the video files in a folder in place
    #[command(long_about = "Normalize every video file directly inside FOLDER.

Only files with a configured video extension are considered (default:
.mp4 .mkv .avi). Subfolders are not visited. A file is skipped when its
cleaned name already exists, so nothing is ever overwritten.

EXAMPLES:
    reeltidy clean ~/Downloads --dry-run    Show what would be renamed
    reeltidy clean ~/Downloads              Rename in place")]
    Clean {
        /// Folder whose files should be renamed
        #[arg(help = "Folder containing the files to rename")]
        folder: PathBuf,
        /// Only print the planned renames
        #[arg(long, short = 'n', help = "Print planned renames without touching files")]
        dry_run: bool,
    },

    /// Move every video under SRC into DST, prefixing duplicates
    #[command(
        name = "move",
        long_about = "Move every video file found under SRC (recursively) into DST.

DST is flat: the first file with a given name keeps it, later files with the
same name are stored with the configured duplicate prefix (default \"[DUP] \").
An existing prefixed file is overwritten. DST is created if missing and is
locked while the move runs.

When SRC or DST is omitted, the folder remembered from a previous
--remember run is used.

EXAMPLES:
    reeltidy move ~/Downloads ~/Movies --remember
    reeltidy move                              Reuse the remembered folders
    reeltidy move ~/Downloads ~/Movies --dry-run"
    )]
    Move {
        /// Source folder, searched recursively
        #[arg(help = "Source folder (default: remembered source)")]
        src: Option<PathBuf>,
        /// Destination folder
        #[arg(help = "Destination folder (default: remembered destination)")]
        dst: Option<PathBuf>,
        /// Remember SRC and DST for the next run
        #[arg(long, help = "Remember the folders for the next run")]
        remember: bool,
        /// Only print the planned moves
        #[arg(long, short = 'n', help = "Print planned moves without touching files")]
        dry_run: bool,
    },

    /// Preview the cleaned form of one or more names
    #[command(long_about = "Print the cleaned form of each NAME without touching the filesystem.

EXAMPLES:
    reeltidy check The.Matrix.1.1999.mkv
    reeltidy check --episodes Show.Name.S01E05.720p.mkv
    reeltidy check --episodes --season 2 Show_Name_E07.mkv")]
    Check {
        /// Filenames to preview
        #[arg(required = true, help = "Filenames to preview")]
        names: Vec<String>,
        /// Treat names as series episodes
        #[arg(long, short, help = "Use the episode normalizer")]
        episodes: bool,
        /// Season to assume for bare episode markers like E07
        #[arg(long, requires = "episodes", help = "Season hint for bare E<N> markers")]
        season: Option<u32>,
    },

    /// Rename series episodes to Show_SxxEyy.ext
    #[command(long_about = "Normalize every episode file under FOLDER (recursively).

Markers S01E05, 1x05 and, inside a season folder, E05 are recognized. Season
folders are named like \"Season 2\", \"S02\", \"Series 2\", \"Staffel 2\" or
\"Saison 2\".

EXAMPLES:
    reeltidy episodes ~/TV/Show --dry-run
    reeltidy episodes ~/TV/Show")]
    Episodes {
        /// Folder containing episode files
        #[arg(help = "Folder containing episode files")]
        folder: PathBuf,
        /// Only print the planned renames
        #[arg(long, short = 'n', help = "Print planned renames without touching files")]
        dry_run: bool,
    },

    /// List clean Title_(YEAR) movies as JSON
    #[command(long_about = "List the clean Title_(YEAR).ext files in FOLDER as a JSON array.

Each entry has a title (underscores replaced by spaces), a year, and the
absolute file path. Files that are not clean are skipped.

EXAMPLES:
    reeltidy scan ~/Movies
    reeltidy scan ~/Movies | jq '.[].title'")]
    Scan {
        /// Library folder (default: current directory)
        #[arg(help = "Library folder (default: current directory)")]
        folder: Option<PathBuf>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions (internal use)
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    #[command(long_about = "Display the active configuration in TOML format.

Shows the unwanted tag list, counter numbers, second-year policy, video
extensions and duplicate prefix.

EXAMPLE:
    reeltidy config show")]
    Show,
    /// Open configuration file in your default editor
    #[command(long_about = "Open the configuration file in your default editor.

Uses the $EDITOR environment variable (defaults to 'vi').
Config file location: ~/.config/reeltidy/config.toml

EXAMPLE:
    reeltidy config edit
    EDITOR=nano reeltidy config edit")]
    Edit,
    /// Print the configuration file path
    Path,
}
