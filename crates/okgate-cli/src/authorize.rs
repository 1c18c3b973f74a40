//! # Authorize Subcommand
//!
//! `okgate authorize --owners <PATH> --user <LOGIN>`
//!
//! Reports whether the user is an approver or reviewer. An OWNERS file that
//! does not parse is an operational error (exit 2), not a denial.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use okgate_acl::{is_authorized, Identity};

use crate::input::read_text;

/// Arguments for the `okgate authorize` subcommand.
#[derive(Args, Debug)]
pub struct AuthorizeArgs {
    /// Path to the OWNERS YAML document.
    #[arg(long, value_name = "PATH")]
    pub owners: PathBuf,

    /// Login of the actor to check.
    #[arg(long, value_name = "LOGIN")]
    pub user: String,
}

/// Outcome of an ownership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizeReport {
    pub user: Identity,
    pub authorized: bool,
}

/// Check `user` against an OWNERS document.
pub fn check_owner(document: &str, user: &Identity) -> Result<AuthorizeReport> {
    let authorized =
        is_authorized(document, user.as_str()).context("failed to evaluate OWNERS document")?;
    Ok(AuthorizeReport {
        user: user.clone(),
        authorized,
    })
}

/// Execute the authorize subcommand.
///
/// Returns exit code: 0 when authorized, 1 when denied.
pub fn run_authorize(args: &AuthorizeArgs) -> Result<u8> {
    let document = read_text(Some(&args.owners))?;
    let report = check_owner(&document, &Identity::new(args.user.as_str()))
        .with_context(|| format!("OWNERS file {}", args.owners.display()))?;
    tracing::info!(user = %report.user, authorized = report.authorized, "ownership check");
    println!("{}", serde_json::to_string(&report)?);
    Ok(crate::exit_code(report.authorized))
}
