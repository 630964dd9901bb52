// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! TOML configuration for [`PathIgnore`](crate::PathIgnore).
//!
//! ```toml
//! timeout = "250ms"
//! concurrent = true
//! order = ["gitignore", "regex", "glob"]
//!
//! [regex]
//! patterns = ["^target/"]
//!
//! [glob]
//! patterns = ["**/*.tmp"]
//! raw = ["weird[name].txt"]
//!
//! [gitignore]
//! file = ".gitignore"
//! ```
//!
//! Unknown top-level keys are warned about and skipped; unknown keys inside a
//! dialect section are errors.

pub mod duration;

use std::path::Path;

use crate::error::{Error, Result};
use crate::path_ignore::PathIgnoreOptions;

pub use duration::parse_duration;

const KNOWN_KEYS: [&str; 6] = ["regex", "glob", "gitignore", "timeout", "concurrent", "order"];

/// Load options from a TOML file.
///
/// A relative gitignore `file` is resolved against the config file's directory.
pub fn load(path: &Path) -> Result<PathIgnoreOptions> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut options = parse(&content, path)?;

    if let Some(file) = options.gitignore.as_mut().and_then(|g| g.file.as_mut())
        && file.is_relative()
        && let Some(dir) = path.parent()
    {
        *file = dir.join(&*file);
    }
    Ok(options)
}

/// Parse options from TOML content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<PathIgnoreOptions> {
    let mut table: toml::Table = toml::from_str(content).map_err(|e| config_error(e, path))?;

    let unknown: Vec<String> = table
        .keys()
        .filter(|key| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();
    for key in unknown {
        warn_unknown_key(path, &key);
        table.remove(&key);
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e| config_error(e, path))
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unrecognized field `{}`, ignoring", path.display(), key);
}

fn config_error(err: impl std::fmt::Display, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
