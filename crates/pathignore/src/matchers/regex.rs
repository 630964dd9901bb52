// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain regular-expression dialect.

use regex::Regex;
use serde::Deserialize;

use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::matcher::{Dialect, MatchResult, PathMatcher};
use crate::pattern::PatternSet;

/// Options for [`RegexMatcher`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegexOptions {
    /// Regular expressions, in priority order.
    pub patterns: Vec<String>,
    /// Treat every pattern as literal text.
    pub literal: bool,
    /// Evaluate all patterns in one pass through a [`PatternSet`].
    pub concurrent: bool,
}

impl RegexOptions {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn literal(mut self, literal: bool) -> Self {
        self.literal = literal;
        self
    }

    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }
}

/// Matches paths against a list of regular expressions.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    strategy: Strategy,
}

#[derive(Debug, Clone)]
enum Strategy {
    /// Tried in declaration order, stopping at the first match.
    Sequential(Vec<Regex>),
    /// All patterns in one automaton.
    Set(PatternSet),
}

impl RegexMatcher {
    /// Compile the configured patterns.
    ///
    /// Literal mode escapes each pattern and joins them into one alternation,
    /// compiled as a single expression regardless of `concurrent`.
    pub fn new(options: &RegexOptions) -> Result<Self> {
        if options.patterns.is_empty() {
            return Err(Error::config("at least one pattern required for regex matcher"));
        }

        let strategy = if options.literal {
            let joined = options
                .patterns
                .iter()
                .map(|p| regex::escape(p))
                .collect::<Vec<_>>()
                .join("|");
            let re = compile(&joined)?;
            Strategy::Sequential(vec![re])
        } else if options.concurrent {
            let set = PatternSet::new(options.patterns.iter().cloned())
                .map_err(|e| Error::compile(Dialect::Regex, e.pattern, e.source))?;
            Strategy::Set(set)
        } else {
            let regexes = options
                .patterns
                .iter()
                .map(String::as_str)
                .map(compile)
                .collect::<Result<Vec<_>>>()?;
            Strategy::Sequential(regexes)
        };

        tracing::debug!(
            patterns = options.patterns.len(),
            literal = options.literal,
            set = matches!(strategy, Strategy::Set(_)),
            "compiled regex matcher"
        );
        Ok(Self { strategy })
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::compile(Dialect::Regex, pattern, e))
}

impl PathMatcher for RegexMatcher {
    fn dialect(&self) -> Dialect {
        Dialect::Regex
    }

    /// The reported source is the path itself: this dialect reports that a
    /// match occurred, not which expression produced it. The empty path has
    /// nothing to report and never matches.
    fn match_detailed(&self, path: &str, cancel: &CancelToken) -> Result<MatchResult> {
        cancel.check()?;
        if path.is_empty() {
            return Ok(MatchResult::no_match());
        }
        let matched = match &self.strategy {
            Strategy::Set(set) => set.is_match(path),
            Strategy::Sequential(regexes) => {
                let mut matched = false;
                for re in regexes {
                    cancel.check()?;
                    if re.is_match(path) {
                        matched = true;
                        break;
                    }
                }
                matched
            }
        };

        if matched {
            tracing::trace!(path, "regex match");
            Ok(MatchResult::matched(Dialect::Regex, path))
        } else {
            Ok(MatchResult::no_match())
        }
    }
}

#[cfg(test)]
#[path = "regex_tests.rs"]
mod tests;
