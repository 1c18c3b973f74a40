//! # Pattern Primitive
//!
//! Compiles a regular expression and reports whether it matches anywhere in
//! a text. Both the built-in trigger and caller-configured triggers go
//! through here.
//!
//! ## Security Invariant
//!
//! Invalid patterns fail closed. A pattern that does not compile, or whose
//! compiled program exceeds [`PATTERN_SIZE_LIMIT`], matches nothing. Matching
//! uses the `regex` crate, which runs in time linear in the input, so an
//! adversarial comment cannot trigger catastrophic backtracking.

use regex::{Regex, RegexBuilder};

use crate::error::AclError;

/// Upper bound on the compiled size of a trigger pattern, in bytes.
pub const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// A compiled trigger pattern. The source text is recovered with
/// `Regex::as_str`.
#[derive(Debug, Clone)]
pub struct TriggerPattern {
    regex: Regex,
}

impl TriggerPattern {
    /// Compile `pattern`, surfacing compile failures.
    ///
    /// Use this to validate configured patterns up front. For fail-closed
    /// evaluation use [`match_pattern`] instead.
    pub fn compile(pattern: &str) -> Result<Self, AclError> {
        RegexBuilder::new(pattern)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map(|regex| Self { regex })
            .map_err(|e| AclError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })
    }

    /// Whether the pattern matches any substring of `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern source.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl std::fmt::Display for TriggerPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `pattern` matches anywhere in `text`.
///
/// Returns `false` when `pattern` does not compile.
pub fn match_pattern(pattern: &str, text: &str) -> bool {
    match TriggerPattern::compile(pattern) {
        Ok(compiled) => compiled.is_match(text),
        Err(e) => {
            tracing::warn!(%pattern, error = %e, "trigger pattern rejected; treating as no match");
            false
        }
    }
}
