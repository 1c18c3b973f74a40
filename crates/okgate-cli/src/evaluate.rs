//! # Evaluate Subcommand
//!
//! `okgate evaluate --owners <PATH> --user <LOGIN> [COMMENT]`
//!
//! Composes the two engine checks into one gate decision: the pipeline may
//! run when the comment carries a trigger command AND its author is listed
//! in the OWNERS file. Both checks always run so the verdict shows each
//! result.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use okgate_acl::{is_authorized, Identity};

use crate::config::Config;
use crate::input::read_text;
use crate::trigger::find_trigger;

/// Arguments for the `okgate evaluate` subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the OWNERS YAML document.
    #[arg(long, value_name = "PATH")]
    pub owners: PathBuf,

    /// Login of the comment author.
    #[arg(long, value_name = "LOGIN")]
    pub user: String,

    /// File holding the comment text. Reads stdin when absent or `-`.
    #[arg(value_name = "COMMENT")]
    pub comment: Option<PathBuf>,
}

/// The combined gate decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub user: Identity,
    pub trigger_matched: bool,
    pub trigger_pattern: Option<String>,
    pub authorized: bool,
    pub allowed: bool,
}

/// Evaluate one comment from `user` against an OWNERS document.
pub fn evaluate(config: &Config, comment: &str, owners: &str, user: &Identity) -> Result<Verdict> {
    let trigger = find_trigger(&config.trigger_patterns(), comment);
    let authorized =
        is_authorized(owners, user.as_str()).context("failed to evaluate OWNERS document")?;
    Ok(Verdict {
        user: user.clone(),
        trigger_matched: trigger.matched,
        trigger_pattern: trigger.pattern,
        authorized,
        allowed: trigger.matched && authorized,
    })
}

/// Execute the evaluate subcommand.
///
/// Returns exit code: 0 when allowed, 1 when denied.
pub fn run_evaluate(args: &EvaluateArgs, config: &Config) -> Result<u8> {
    let owners = read_text(Some(&args.owners))?;
    let comment = read_text(args.comment.as_deref())?;
    let verdict = evaluate(config, &comment, &owners, &Identity::new(args.user.as_str()))
        .with_context(|| format!("OWNERS file {}", args.owners.display()))?;
    tracing::info!(
        user = %verdict.user,
        trigger_matched = verdict.trigger_matched,
        authorized = verdict.authorized,
        allowed = verdict.allowed,
        "gate decision"
    );
    println!("{}", serde_json::to_string(&verdict)?);
    Ok(crate::exit_code(verdict.allowed))
}
