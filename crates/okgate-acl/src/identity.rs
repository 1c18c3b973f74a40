//! # Identity Newtype
//!
//! An [`Identity`] names the actor requesting authorization: a platform
//! login such as a GitHub username. It is opaque. No trimming, case-folding,
//! or format validation is applied, so `Alice` and `alice` are different
//! identities.

use serde::{Deserialize, Serialize};

/// The login of an actor, compared by exact string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Identity(String);

impl Identity {
    /// Wrap a login. Any string is accepted.
    pub fn new(login: impl Into<String>) -> Self {
        Self(login.into())
    }

    /// Access the raw login.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identity and return the raw login.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identity {
    fn from(login: &str) -> Self {
        Self::new(login)
    }
}

impl From<String> for Identity {
    fn from(login: String) -> Self {
        Self(login)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
