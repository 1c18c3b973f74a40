//! Reading already-fetched text from files or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read `path`, or stdin when `path` is `None` or `-`.
pub fn read_text(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
