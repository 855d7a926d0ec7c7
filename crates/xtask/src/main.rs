//! Development tasks for the tactical AI
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Catalog, Decide, Score};

/// Development tasks for the tactical AI
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Inspect content and replay AI decisions", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List the moves of a catalog
    Catalog(Catalog),

    /// Score every move of a scenario under an intent
    Score(Score),

    /// Run the AI over a scenario and print its decisions
    Decide(Decide),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Catalog(cmd) => cmd.execute(),
        Command::Score(cmd) => cmd.execute(),
        Command::Decide(cmd) => cmd.execute(),
    }
}
