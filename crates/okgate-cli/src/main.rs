//! # okgate CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use okgate_cli::authorize::{run_authorize, AuthorizeArgs};
use okgate_cli::config::Config;
use okgate_cli::evaluate::{run_evaluate, EvaluateArgs};
use okgate_cli::trigger::{run_trigger, TriggerArgs};
use okgate_cli::EXIT_ERROR;

/// okgate — decide whether a PR comment may run a privileged CI pipeline.
///
/// Reads comment text and OWNERS files that were already fetched, prints a
/// JSON verdict, and exits 0 (allow), 1 (deny), or 2 (error).
#[derive(Parser, Debug)]
#[command(name = "okgate", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a comment for a trigger command such as /ok-to-test.
    Trigger(TriggerArgs),

    /// Check whether a user is an approver or reviewer in an OWNERS file.
    Authorize(AuthorizeArgs),

    /// Combined gate: a trigger command from an owner is allowed.
    Evaluate(EvaluateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so stdout carries only the JSON verdict.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = Config::load_or_default(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Trigger(args) => run_trigger(&args, &config),
            Commands::Authorize(args) => run_authorize(&args),
            Commands::Evaluate(args) => run_evaluate(&args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
