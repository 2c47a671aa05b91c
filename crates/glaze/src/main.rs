//! Glaze CLI - Collision-safe batch image tint-and-export pipeline.
//!
//! Glaze composites a solid color tint over a batch of images and writes
//! the results alongside the originals, renaming on collision so a source
//! file is never overwritten.
//!
//! # Usage
//!
//! ```bash
//! # Tint a single image with the configured defaults
//! glaze export photo.jpg
//!
//! # Tint a directory, red at half strength, multiply blend
//! glaze export ./photos/ --color "#ff0000" --opacity 128 --mode multiply
//!
//! # View configuration
//! glaze config show
//! ```
//!
//! Running bare `glaze` on a terminal starts the interactive mode.

use clap::{CommandFactory, Parser, Subcommand};

mod cli;
mod logging;

/// Glaze - Collision-safe batch image tint-and-export pipeline.
#[derive(Parser, Debug)]
#[command(name = "glaze")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tint images and export the results
    Export(cli::export::ExportArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match glaze_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `glaze config path`."
            );
            glaze_core::Config::default()
        }
    };
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Glaze v{}", glaze_core::VERSION);

    match cli.command {
        Some(Commands::Export(args)) => cli::export::execute(args).await,
        Some(Commands::Config(args)) => cli::config::execute(args).await,
        None => {
            // Bare `glaze` on a terminal enters interactive mode;
            // piped/scripted invocations get help instead.
            if console::user_attended() {
                cli::interactive::run(&config).await
            } else {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}
