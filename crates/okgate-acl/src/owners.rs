//! # Ownership Authorization Check
//!
//! Parses an OWNERS document and decides whether an identity is trusted.
//!
//! ```yaml
//! approvers:
//!   - alice
//! reviewers:
//!   - bob
//! ```
//!
//! Approvers and reviewers are equally trusted. Membership is exact string
//! equality: no trimming, no case-folding. Keys other than `approvers` and
//! `reviewers` (`labels`, `options`, `emeritus_approvers`, ...) are ignored.
//!
//! List entries are read as the scalar text written in the document, so
//! `- 1234`, `- true`, and `- "1234"` all list the login `1234` or `true`.
//! Entries that are sequences or mappings are parse errors.
//!
//! ## Security Invariant
//!
//! A document that fails to parse is an error, never a denial. Callers must
//! branch on the error before reading the boolean. A document that parses
//! but lists nobody denies everyone without error.

use serde::de::Error as _;
use serde::Deserialize;
use serde_yaml::Value;

use crate::error::AclError;

/// The trusted identities declared by an OWNERS document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OwnersFile {
    #[serde(default)]
    approvers: Option<Vec<String>>,
    #[serde(default)]
    reviewers: Option<Vec<String>>,
}

impl OwnersFile {
    /// Build an ownership list directly.
    pub fn new(approvers: Vec<String>, reviewers: Vec<String>) -> Self {
        Self {
            approvers: Some(approvers),
            reviewers: Some(reviewers),
        }
    }

    /// Parse a YAML OWNERS document.
    ///
    /// Missing or `null` lists are empty. A document with no content at all
    /// (blank, or a bare `---`) lists nobody. Anything that is not a YAML
    /// mapping, such as the scalar `bad`, is a [`AclError::DocumentParse`].
    pub fn parse(document: &str) -> Result<Self, AclError> {
        if document.trim().is_empty() {
            return Ok(Self::default());
        }
        // Classify the top level only. Entries are deserialized from the
        // source text because `Value` has already typed `1234` as a number.
        match serde_yaml::from_str::<Value>(document)? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(_) => Ok(serde_yaml::from_str(document)?),
            other => Err(serde_yaml::Error::custom(format!(
                "expected a mapping with approvers and reviewers, found {}",
                value_kind(&other)
            ))
            .into()),
        }
    }

    /// Identities listed under `approvers`.
    pub fn approvers(&self) -> &[String] {
        self.approvers.as_deref().unwrap_or(&[])
    }

    /// Identities listed under `reviewers`.
    pub fn reviewers(&self) -> &[String] {
        self.reviewers.as_deref().unwrap_or(&[])
    }

    /// Whether nobody is listed.
    pub fn is_empty(&self) -> bool {
        self.approvers().is_empty() && self.reviewers().is_empty()
    }

    /// Whether `identity` is an approver or a reviewer.
    pub fn contains(&self, identity: &str) -> bool {
        self.approvers()
            .iter()
            .chain(self.reviewers())
            .any(|entry| entry == identity)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Whether `identity` is listed as an approver or reviewer in `document`.
///
/// Returns `Err` when the document cannot be parsed; the identity plays no
/// part in that outcome.
pub fn is_authorized(document: &str, identity: &str) -> Result<bool, AclError> {
    let owners = OwnersFile::parse(document)?;
    let authorized = owners.contains(identity);
    tracing::debug!(
        %identity,
        authorized,
        approvers = owners.approvers().len(),
        reviewers = owners.reviewers().len(),
        "evaluated ownership"
    );
    Ok(authorized)
}
