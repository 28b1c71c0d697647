//! DECO CLI - Block decoration engine.
//!
//! Provides commands for:
//! - `decorate`: Decorate an authored block fragment into final markup
//! - `resolve`: Classify a URL or handle into an embed provider
//! - `blocks`: List registered block decorators

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{BlocksArgs, DecorateArgs, ResolveArgs};
use output::Output;

/// DECO - Block decoration engine.
#[derive(Parser)]
#[command(name = "deco", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decorate an authored block fragment.
    Decorate(DecorateArgs),
    /// Resolve a URL or handle to an embed provider.
    Resolve(ResolveArgs),
    /// List registered block decorators.
    Blocks(BlocksArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let verbose = matches!(&cli.command, Commands::Decorate(args) if args.verbose);
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Decorate(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Blocks(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
