// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::cancel::CancelReason;
use crate::matcher::Dialect;

/// pathignore error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A pattern failed to compile in its dialect's grammar.
    #[error("{dialect} pattern `{pattern}` failed to compile: {message}")]
    Compile {
        dialect: Dialect,
        pattern: String,
        message: String,
    },

    /// Missing patterns, missing dialects, or an invalid configuration file.
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Reading an external pattern source or config file failed.
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Evaluation was cancelled or ran past its deadline.
    #[error("cancelled: {0}")]
    Cancelled(CancelReason),
}

impl Error {
    pub(crate) fn compile(
        dialect: Dialect,
        pattern: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Error::Compile {
            dialect,
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            path: None,
        }
    }

    /// True when the error came from cancellation rather than a real failure.
    ///
    /// A cancelled evaluation says nothing about whether the path matches.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled(_))
    }

    /// The offending pattern text for compile errors.
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Error::Compile { pattern, .. } => Some(pattern),
            _ => None,
        }
    }
}

/// Result type using pathignore Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
