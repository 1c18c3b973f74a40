//! # Configuration
//!
//! Optional YAML configuration passed with `--config`:
//!
//! ```yaml
//! trigger_patterns:
//!   - "(?m)^/ok-to-test(?:\\s|$)"
//!   - "(?m)^/retest(?:\\s|$)"
//! strict_patterns: true
//! ```
//!
//! Without `trigger_patterns` the built-in `/ok-to-test` pattern is used.
//! With `strict_patterns: true` every configured pattern must compile when
//! the config is loaded; otherwise invalid patterns are skipped at match
//! time and never match.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use okgate_acl::{TriggerPattern, OK_TO_TEST_COMMENT_PATTERN};

/// Loaded CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Trigger patterns to try in order. `None` means the built-in pattern.
    #[serde(default)]
    pub trigger_patterns: Option<Vec<String>>,

    /// Reject invalid trigger patterns at load time.
    #[serde(default)]
    pub strict_patterns: bool,
}

impl Config {
    /// Parse a YAML config document.
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content).context("invalid config YAML")?;
        if config.strict_patterns {
            for pattern in config.trigger_patterns() {
                TriggerPattern::compile(pattern)?;
            }
        }
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            patterns = config.trigger_patterns().len(),
            strict = config.strict_patterns,
            "loaded config"
        );
        Ok(config)
    }

    /// Load `path` if given, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// The effective trigger patterns.
    pub fn trigger_patterns(&self) -> Vec<&str> {
        match &self.trigger_patterns {
            Some(patterns) => patterns.iter().map(String::as_str).collect(),
            None => vec![OK_TO_TEST_COMMENT_PATTERN],
        }
    }
}
