//! # okgate-acl — Access-Control Decision Engine
//!
//! Decides whether an actor observed in a pull-request or issue comment may
//! trigger a CI pipeline that runs with elevated, cluster-level credentials.
//! This crate is the boundary between arbitrary external input (anyone who
//! can comment) and privileged execution.
//!
//! ## Checks
//!
//! - **Pattern primitive** (`pattern.rs`): compile a regular expression and
//!   report whether it matches anywhere in a text. Invalid patterns fail
//!   closed: they never match.
//!
//! - **Trigger matcher** (`trigger.rs`): the built-in `/ok-to-test` command,
//!   anchored to the start of a line with no leading whitespace, plus a
//!   variant taking a caller-supplied pattern.
//!
//! - **Ownership check** (`owners.rs`): parse an OWNERS YAML document and
//!   test exact membership in `approvers` or `reviewers`. Parse errors fail
//!   loud and are never reported as a denial.
//!
//! The engine does not compose the two checks. That policy belongs to the
//! caller (see `okgate-cli`).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `okgate-*` crates (this is the leaf of the DAG).
//! - No I/O, no global state, no caches. Every function is pure.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;
pub mod owners;
pub mod pattern;
pub mod trigger;

// Re-export primary types for ergonomic imports.
pub use error::AclError;
pub use identity::Identity;
pub use owners::{is_authorized, OwnersFile};
pub use pattern::{match_pattern, TriggerPattern, PATTERN_SIZE_LIMIT};
pub use trigger::{match_trigger, match_trigger_with, OK_TO_TEST_COMMENT_PATTERN};
