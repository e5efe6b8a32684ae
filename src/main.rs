//! reeltidy - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reeltidy::cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();

    match cli.command {
        Commands::Clean { folder, dry_run } => commands::clean::handle(&folder, dry_run, config),
        Commands::Move {
            src,
            dst,
            remember,
            dry_run,
        } => commands::move_files::handle(src, dst, remember, dry_run, config),
        Commands::Check {
            names,
            episodes,
            season,
        } => commands::check::handle(&names, episodes, season, config),
        Commands::Episodes { folder, dry_run } => {
            commands::episodes::handle(&folder, dry_run, config)
        }
        Commands::Scan { folder } => commands::scan::handle(folder.as_deref(), config),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(config),
            ConfigCommands::Edit => commands::config::handle_edit(config),
            ConfigCommands::Path => commands::config::handle_path(config),
        },
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "reeltidy=warn",
        1 => "reeltidy=info",
        _ => "reeltidy=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
