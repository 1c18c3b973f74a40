//! # Error Types
//!
//! The two failure modes of the decision engine, derived with `thiserror`.
//!
//! ## Design
//!
//! - Pattern errors fail closed. `match_pattern` turns them into "no match";
//!   only the strict `TriggerPattern::compile` hands them to the caller.
//! - Ownership document errors fail loud. They are always propagated and are
//!   never folded into a `false` authorization result.

use thiserror::Error;

/// Error produced by the access-control decision engine.
#[derive(Error, Debug)]
pub enum AclError {
    /// A trigger pattern could not be compiled.
    #[error("invalid trigger pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern source as supplied by the caller.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// The ownership document is not valid YAML, or is not a mapping.
    #[error("ownership document parse error: {0}")]
    DocumentParse(#[from] serde_yaml::Error),
}

impl AclError {
    /// Whether this error came from parsing an ownership document.
    pub fn is_document_parse(&self) -> bool {
        matches!(self, Self::DocumentParse(_))
    }
}
