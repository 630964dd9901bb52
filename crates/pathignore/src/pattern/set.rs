// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled regex sets with declaration-order priority.

use regex::{Regex, RegexSet};

/// A set of regular expressions evaluated in one pass.
///
/// Priority is declaration order: [`find`](Self::find) always reports the
/// lowest index that matches.
#[derive(Debug, Clone)]
pub struct PatternSet {
    sources: Vec<String>,
    set: RegexSet,
}

/// Error during set compilation.
#[derive(Debug, thiserror::Error)]
#[error("pattern #{index} `{pattern}`: {source}")]
pub struct PatternSetError {
    /// Position of the offending pattern in the input list.
    pub index: usize,
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

impl PatternSet {
    /// Compile every pattern into a single set.
    ///
    /// Fails atomically: if any pattern is malformed no set is built and the
    /// error names the first bad pattern.
    pub fn new<I, S>(patterns: I) -> Result<Self, PatternSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sources: Vec<String> = patterns.into_iter().map(Into::into).collect();
        match RegexSet::new(&sources) {
            Ok(set) => Ok(Self { sources, set }),
            Err(err) => Err(locate_error(&sources, err)),
        }
    }

    /// Index of the lowest-priority-number pattern matching `input`.
    pub fn find(&self, input: &str) -> Option<usize> {
        // SetMatches iterates in ascending index order.
        self.set.matches(input).iter().next()
    }

    pub fn is_match(&self, input: &str) -> bool {
        self.set.is_match(input)
    }

    /// The pattern text at `index`.
    pub fn source(&self, index: usize) -> Option<&str> {
        self.sources.get(index).map(String::as_str)
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// RegexSet errors don't say which pattern failed; recompile one by one.
///
/// When every pattern compiles alone (e.g. the combined set is over the size
/// limit), the error is attributed to the last pattern.
fn locate_error(sources: &[String], err: regex::Error) -> PatternSetError {
    for (index, pattern) in sources.iter().enumerate() {
        if let Err(source) = Regex::new(pattern) {
            return PatternSetError {
                index,
                pattern: pattern.clone(),
                source,
            };
        }
    }
    let index = sources.len().saturating_sub(1);
    PatternSetError {
        index,
        pattern: sources.get(index).cloned().unwrap_or_default(),
        source: err,
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
