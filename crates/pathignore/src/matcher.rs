// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The shared matcher abstraction.
//!
//! The dialect set is closed: [`Matcher`] is an enum over the three
//! dialect matchers, and [`PathMatcher`] is the capability they share.

use std::fmt;

use serde::Deserialize;

use crate::cancel::CancelToken;
use crate::error::Result;
use crate::matchers::{GitIgnoreMatcher, GlobMatcher, RegexMatcher};

/// A supported pattern language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Only carried by [`MatchResult::no_match`].
    Unknown,
    GitIgnore,
    Glob,
    Regex,
}

impl Dialect {
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Unknown => "unknown",
            Dialect::GitIgnore => "gitignore",
            Dialect::Glob => "glob",
            Dialect::Regex => "regex",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single evaluation, with provenance on a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    matched: bool,
    source: String,
    dialect: Dialect,
}

impl MatchResult {
    /// The canonical "no match" value.
    pub fn no_match() -> Self {
        Self {
            matched: false,
            source: String::new(),
            dialect: Dialect::Unknown,
        }
    }

    /// A match always carries a non-empty source.
    pub(crate) fn matched(dialect: Dialect, source: impl Into<String>) -> Self {
        let source = source.into();
        debug_assert!(!source.is_empty(), "{dialect} match with empty source");
        Self {
            matched: true,
            source,
            dialect,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    /// What the dialect reports as the match source; empty when unmatched.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::no_match()
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.dialect, self.source)
    }
}

/// Capability shared by every dialect matcher.
///
/// Implementations are immutable after construction, so one value can serve
/// any number of concurrent callers.
pub trait PathMatcher: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Evaluate `path`, reporting provenance on a match.
    ///
    /// Returns `Err(Error::Cancelled)` when `cancel` stops the evaluation;
    /// "no match" is always `Ok` with [`MatchResult::no_match`].
    fn match_detailed(&self, path: &str, cancel: &CancelToken) -> Result<MatchResult>;

    fn is_match(&self, path: &str, cancel: &CancelToken) -> Result<bool> {
        self.match_detailed(path, cancel).map(|m| m.is_match())
    }
}

/// One configured dialect matcher.
#[derive(Debug, Clone)]
pub enum Matcher {
    Regex(RegexMatcher),
    Glob(GlobMatcher),
    GitIgnore(GitIgnoreMatcher),
}

impl PathMatcher for Matcher {
    fn dialect(&self) -> Dialect {
        match self {
            Matcher::Regex(m) => m.dialect(),
            Matcher::Glob(m) => m.dialect(),
            Matcher::GitIgnore(m) => m.dialect(),
        }
    }

    fn match_detailed(&self, path: &str, cancel: &CancelToken) -> Result<MatchResult> {
        match self {
            Matcher::Regex(m) => m.match_detailed(path, cancel),
            Matcher::Glob(m) => m.match_detailed(path, cancel),
            Matcher::GitIgnore(m) => m.match_detailed(path, cancel),
        }
    }
}

impl From<RegexMatcher> for Matcher {
    fn from(m: RegexMatcher) -> Self {
        Matcher::Regex(m)
    }
}

impl From<GlobMatcher> for Matcher {
    fn from(m: GlobMatcher) -> Self {
        Matcher::Glob(m)
    }
}

impl From<GitIgnoreMatcher> for Matcher {
    fn from(m: GitIgnoreMatcher) -> Self {
        Matcher::GitIgnore(m)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
