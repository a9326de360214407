//! # blueprint CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use blueprint_cli::catalog::{run_modules, run_schema, SchemaArgs};
use blueprint_cli::config::CliConfig;
use blueprint_cli::validate::{run_validate, ValidateArgs};
use blueprint_cli::EXIT_ERROR;

/// Blueprint planner toolchain.
///
/// Validates planner module documents against their schemas and describes
/// the schemas themselves.
#[derive(Parser, Debug)]
#[command(name = "blueprint", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate module documents against their schemas.
    Validate(ValidateArgs),

    /// List planner modules with built-in schemas.
    Modules,

    /// Print a module schema as JSON.
    Schema(SchemaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("blueprint CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = CliConfig::load(cli.config.as_deref()).and_then(|config| match &cli.command {
        Commands::Validate(args) => run_validate(args, &config),
        Commands::Modules => run_modules(),
        Commands::Schema(args) => run_schema(args),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
