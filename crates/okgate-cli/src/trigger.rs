//! # Trigger Subcommand
//!
//! `okgate trigger [--pattern <RE>] [COMMENT]`
//!
//! Checks a comment against `--pattern`, else the configured trigger
//! patterns, else the built-in `/ok-to-test` pattern. Invalid patterns never
//! match.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use okgate_acl::match_trigger_with;

use crate::config::Config;
use crate::input::read_text;

/// Arguments for the `okgate trigger` subcommand.
#[derive(Args, Debug)]
pub struct TriggerArgs {
    /// Match this pattern instead of the configured trigger patterns.
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// File holding the comment text. Reads stdin when absent or `-`.
    #[arg(value_name = "COMMENT")]
    pub comment: Option<PathBuf>,
}

/// Outcome of a trigger check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerReport {
    /// Whether any pattern matched.
    pub matched: bool,
    /// The first pattern that matched.
    pub pattern: Option<String>,
}

/// Try `patterns` in order and report the first one matching `text`.
pub fn find_trigger(patterns: &[&str], text: &str) -> TriggerReport {
    let hit = patterns
        .iter()
        .find(|pattern| match_trigger_with(pattern, text));
    TriggerReport {
        matched: hit.is_some(),
        pattern: hit.map(|p| p.to_string()),
    }
}

/// Patterns selected by `--pattern` or the config.
pub fn effective_patterns<'a>(args: &'a TriggerArgs, config: &'a Config) -> Vec<&'a str> {
    match &args.pattern {
        Some(pattern) => vec![pattern.as_str()],
        None => config.trigger_patterns(),
    }
}

/// Execute the trigger subcommand.
///
/// Returns exit code: 0 when a trigger matched, 1 otherwise.
pub fn run_trigger(args: &TriggerArgs, config: &Config) -> Result<u8> {
    let text = read_text(args.comment.as_deref())?;
    let report = find_trigger(&effective_patterns(args, config), &text);
    tracing::info!(matched = report.matched, pattern = ?report.pattern, "trigger check");
    println!("{}", serde_json::to_string(&report)?);
    Ok(crate::exit_code(report.matched))
}
