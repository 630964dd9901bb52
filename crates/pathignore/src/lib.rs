// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Decide whether a path string is ignored by regex, glob, or gitignore rules.
//!
//! Patterns are compiled once into immutable matchers that can be shared
//! freely across threads. [`PathIgnore`] combines the dialects in a fixed
//! precedence order under one deadline.
//!
//! ```
//! use pathignore::{GitIgnoreOptions, GlobOptions, PathIgnore};
//!
//! let ignore = PathIgnore::builder()
//!     .gitignore(GitIgnoreOptions::new(["target/", "*.log", "!keep.log"]))
//!     .glob(GlobOptions::new(["**/*.tmp"]))
//!     .build()?;
//!
//! assert!(ignore.should_ignore("target/debug/app")?);
//! assert!(!ignore.should_ignore("logs/keep.log")?);
//! assert!(ignore.should_ignore("cache/a.tmp")?);
//! # Ok::<(), pathignore::Error>(())
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod matcher;
pub mod matchers;
pub mod path_ignore;
pub mod pattern;

pub use cancel::{CancelReason, CancelToken};
pub use error::{Error, Result};
pub use matcher::{Dialect, MatchResult, Matcher, PathMatcher};
pub use matchers::{
    GitIgnoreMatcher, GitIgnoreOptions, GlobMatcher, GlobOptions, RegexMatcher, RegexOptions, Rule,
};
pub use path_ignore::{PathIgnore, PathIgnoreBuilder, PathIgnoreOptions};
pub use pattern::PatternSet;

#[cfg(test)]
pub mod test_utils;
