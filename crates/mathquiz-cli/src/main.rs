//! mathquiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use mathquiz_core::level::Level;

mod commands;
mod game;

#[derive(Parser)]
#[command(name = "mathquiz", version, about = "Interactive arithmetic quiz")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz in the terminal
    Play {
        /// Level 1-5 (skips the level prompt)
        #[arg(long)]
        level: Option<Level>,

        /// Seed for reproducible equations
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show the number pool and operators for each level
    Levels {
        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Create a starter config file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mathquiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            level,
            seed,
            config,
        } => commands::play::execute(level, seed, config),
        Commands::Levels { format } => commands::levels::execute(format),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
