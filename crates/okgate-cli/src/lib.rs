//! # okgate-cli — CLI Tool for okgate
//!
//! Provides the `okgate` command-line interface around the decision engine in
//! `okgate-acl`. It reads comment text and OWNERS documents that a CI job or
//! webhook handler has already fetched, and reports JSON verdicts.
//!
//! ## Subcommands
//!
//! - `okgate trigger` — does the comment contain a trigger command?
//! - `okgate authorize` — is the user an approver or reviewer?
//! - `okgate evaluate` — both, composed: a trigger from an owner is allowed.
//!
//! ```bash
//! okgate trigger comment.txt
//! okgate authorize --owners OWNERS --user octocat
//! gh api .../comments/123 --jq .body | okgate evaluate --owners OWNERS --user octocat
//! ```
//!
//! ## Exit Codes
//!
//! `0` matched / authorized / allowed, `1` no match / denied, `2` operational
//! error. An unparseable OWNERS file is an operational error, never a denial.

pub mod authorize;
pub mod config;
pub mod evaluate;
pub mod input;
pub mod trigger;

/// Exit code for a positive decision.
pub const EXIT_ALLOW: u8 = 0;

/// Exit code for a negative decision.
pub const EXIT_DENY: u8 = 1;

/// Exit code for an operational error.
pub const EXIT_ERROR: u8 = 2;

/// Map a decision to its exit code.
pub fn exit_code(decision: bool) -> u8 {
    if decision {
        EXIT_ALLOW
    } else {
        EXIT_DENY
    }
}
