// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `.gitignore` dialect.
//!
//! Each line is translated into an anchored regular expression (see
//! [`translate`]) and the resulting rules are split into a positive (ignore)
//! and a negative (un-ignore) group. A path is ignored when some positive
//! rule matches and no negative rule does.

mod translate;

use std::borrow::Cow;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::matcher::{Dialect, MatchResult, PathMatcher};
use crate::pattern::PatternSet;

pub use translate::{Translated, translate};

/// Options for [`GitIgnoreMatcher`].
///
/// At least one of `patterns` or `file` must be given.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitIgnoreOptions {
    /// Pattern lines, in file order.
    pub patterns: Vec<String>,
    /// A `.gitignore`-style file whose lines follow `patterns`.
    pub file: Option<PathBuf>,
    /// Evaluate each rule group through a [`PatternSet`].
    pub concurrent: bool,
}

impl GitIgnoreOptions {
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

    pub fn file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }
}

/// One compiled gitignore line.
#[derive(Debug, Clone)]
pub struct Rule {
    source: String,
    regex: Regex,
    negated: bool,
}

impl Rule {
    /// Translate and compile a single line. Blank lines and comments yield
    /// `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let Some(Translated { expr, negated }) = translate(line) else {
            return Ok(None);
        };
        let regex = Regex::new(&expr).map_err(|e| Error::compile(Dialect::GitIgnore, line, e))?;
        Ok(Some(Self {
            source: line.to_string(),
            regex,
            negated,
        }))
    }

    /// The line as written.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The translated expression.
    pub fn as_regex(&self) -> &Regex {
        &self.regex
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

#[derive(Debug, Clone)]
enum RuleGroup {
    /// Scanned in declaration order.
    Sequential(Vec<Rule>),
    /// One set per group; `sources[i]` is the line behind set pattern `i`.
    Set {
        sources: Vec<String>,
        set: PatternSet,
    },
}

impl RuleGroup {
    fn build(rules: Vec<Rule>, concurrent: bool) -> Result<Self> {
        if !concurrent {
            return Ok(RuleGroup::Sequential(rules));
        }
        let exprs = rules.iter().map(|r| r.regex.as_str().to_string());
        let set = PatternSet::new(exprs).map_err(|e| {
            let line = rules.get(e.index).map_or(e.pattern.as_str(), Rule::source);
            Error::compile(Dialect::GitIgnore, line, e.source)
        })?;
        let sources = rules.into_iter().map(|r| r.source).collect();
        Ok(RuleGroup::Set { sources, set })
    }

    fn len(&self) -> usize {
        match self {
            RuleGroup::Sequential(rules) => rules.len(),
            RuleGroup::Set { sources, .. } => sources.len(),
        }
    }

    /// Source line of the first rule matching `path`.
    fn find(&self, path: &str, cancel: &CancelToken) -> Result<Option<&str>> {
        match self {
            RuleGroup::Sequential(rules) => {
                for rule in rules {
                    cancel.check()?;
                    if rule.is_match(path) {
                        return Ok(Some(rule.source()));
                    }
                }
                Ok(None)
            }
            RuleGroup::Set { sources, set } => {
                cancel.check()?;
                Ok(set
                    .find(path)
                    .and_then(|idx| sources.get(idx))
                    .map(String::as_str))
            }
        }
    }
}

/// Matches paths against `.gitignore` rules.
#[derive(Debug, Clone)]
pub struct GitIgnoreMatcher {
    positive: RuleGroup,
    negative: RuleGroup,
}

impl GitIgnoreMatcher {
    pub fn new(options: &GitIgnoreOptions) -> Result<Self> {
        if options.patterns.is_empty() && options.file.is_none() {
            return Err(Error::config(
                "at least one gitignore source required: file or lines",
            ));
        }

        let mut lines = options.patterns.clone();
        if let Some(file) = &options.file {
            lines.extend(read_lines(file)?);
        }

        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for line in &lines {
            match Rule::parse(line)? {
                Some(rule) if rule.negated => negative.push(rule),
                Some(rule) => positive.push(rule),
                None => {}
            }
        }

        tracing::debug!(
            lines = lines.len(),
            positive = positive.len(),
            negative = negative.len(),
            concurrent = options.concurrent,
            "compiled gitignore matcher"
        );

        Ok(Self {
            positive: RuleGroup::build(positive, options.concurrent)?,
            negative: RuleGroup::build(negative, options.concurrent)?,
        })
    }

    /// Number of (positive, negative) rules.
    pub fn rule_counts(&self) -> (usize, usize) {
        (self.positive.len(), self.negative.len())
    }
}

impl PathMatcher for GitIgnoreMatcher {
    fn dialect(&self) -> Dialect {
        Dialect::GitIgnore
    }

    /// The reported source is the positive rule line that ignored the path.
    ///
    /// Every negative rule is consulted once a positive rule matches; any of
    /// them un-ignores the path.
    fn match_detailed(&self, path: &str, cancel: &CancelToken) -> Result<MatchResult> {
        cancel.check()?;
        let path = normalize(path);

        let Some(source) = self.positive.find(&path, cancel)? else {
            return Ok(MatchResult::no_match());
        };
        if let Some(negation) = self.negative.find(&path, cancel)? {
            tracing::trace!(path = %path, rule = source, negation, "gitignore un-ignore");
            return Ok(MatchResult::no_match());
        }

        tracing::trace!(path = %path, rule = source, "gitignore match");
        Ok(MatchResult::matched(Dialect::GitIgnore, source))
    }
}

fn normalize(path: &str) -> Cow<'_, str> {
    if MAIN_SEPARATOR == '/' {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(path.replace(MAIN_SEPARATOR, "/"))
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(content.split('\n').map(String::from).collect())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
