// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The top-level combinator.
//!
//! [`PathIgnore`] holds an ordered list of dialect matchers. The order is
//! the precedence: the first matcher reporting a match decides the result,
//! and the rest are never consulted.

use std::time::Duration;

use serde::Deserialize;

use crate::cancel::CancelToken;
use crate::config::duration;
use crate::error::{Error, Result};
use crate::matcher::{Dialect, MatchResult, Matcher, PathMatcher};
use crate::matchers::{
    GitIgnoreMatcher, GitIgnoreOptions, GlobMatcher, GlobOptions, RegexMatcher, RegexOptions,
};

/// Deadline applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Precedence used when no explicit order is given.
pub const DEFAULT_ORDER: [Dialect; 3] = [Dialect::Regex, Dialect::Glob, Dialect::GitIgnore];

/// Options for [`PathIgnore::new`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathIgnoreOptions {
    pub regex: Option<RegexOptions>,
    pub glob: Option<GlobOptions>,
    pub gitignore: Option<GitIgnoreOptions>,
    /// Shared deadline for one evaluation; `None` means [`DEFAULT_TIMEOUT`].
    #[serde(deserialize_with = "duration::deserialize_option")]
    pub timeout: Option<Duration>,
    /// Switch every configured dialect to its concurrent strategy.
    pub concurrent: bool,
    /// Dialect precedence; `None` means [`DEFAULT_ORDER`].
    pub order: Option<Vec<Dialect>>,
}

/// Decides whether paths are ignored across several dialects.
#[derive(Debug, Clone)]
pub struct PathIgnore {
    matchers: Vec<Matcher>,
    timeout: Duration,
}

impl PathIgnore {
    /// Compile every configured dialect, in `options.order` precedence.
    ///
    /// The glob dialect is compiled strictly: any invalid glob fails
    /// construction.
    pub fn new(options: PathIgnoreOptions) -> Result<Self> {
        let PathIgnoreOptions {
            mut regex,
            mut glob,
            mut gitignore,
            timeout,
            concurrent,
            order,
        } = options;

        let order = match order {
            Some(order) => validate_order(order)?,
            None => DEFAULT_ORDER.to_vec(),
        };

        let mut builder = PathIgnoreBuilder::default();
        builder.timeout = timeout;
        for dialect in order {
            builder = match dialect {
                Dialect::Regex => match regex.take() {
                    Some(o) => builder.regex(RegexOptions {
                        concurrent: o.concurrent || concurrent,
                        ..o
                    }),
                    None => builder,
                },
                Dialect::Glob => match glob.take() {
                    Some(o) => builder.glob(GlobOptions {
                        concurrent: o.concurrent || concurrent,
                        ..o
                    }),
                    None => builder,
                },
                Dialect::GitIgnore => match gitignore.take() {
                    Some(o) => builder.gitignore(GitIgnoreOptions {
                        concurrent: o.concurrent || concurrent,
                        ..o
                    }),
                    None => builder,
                },
                Dialect::Unknown => builder,
            };
        }

        let unordered: Vec<&str> = [
            regex.map(|_| "regex"),
            glob.map(|_| "glob"),
            gitignore.map(|_| "gitignore"),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !unordered.is_empty() {
            return Err(Error::config(format!(
                "configured dialects missing from order: {}",
                unordered.join(", ")
            )));
        }

        builder.build()
    }

    pub fn builder() -> PathIgnoreBuilder {
        PathIgnoreBuilder::default()
    }

    /// Wrap already-compiled matchers; their order is the precedence.
    pub fn from_matchers(matchers: Vec<Matcher>, timeout: Option<Duration>) -> Result<Self> {
        if matchers.is_empty() {
            return Err(Error::config("at least one matcher required"));
        }
        let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
        tracing::debug!(
            dialects = ?matchers.iter().map(PathMatcher::dialect).collect::<Vec<_>>(),
            ?timeout,
            "compiled path ignore"
        );
        Ok(Self { matchers, timeout })
    }

    /// Configured matchers in precedence order.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Whether `path` is ignored, under a fresh scope.
    pub fn should_ignore(&self, path: &str) -> Result<bool> {
        self.is_match(path, &CancelToken::new())
    }

    /// Like [`should_ignore`](Self::should_ignore), with provenance.
    pub fn should_ignore_detailed(&self, path: &str) -> Result<MatchResult> {
        self.match_detailed(path, &CancelToken::new())
    }

    pub fn is_match(&self, path: &str, cancel: &CancelToken) -> Result<bool> {
        self.match_detailed(path, cancel).map(|m| m.is_match())
    }

    /// Evaluate every matcher in precedence order under one deadline.
    ///
    /// The first positive result wins and cancels the shared scope.
    /// Cancellation aborts the whole evaluation; it never falls through to
    /// the next matcher.
    pub fn match_detailed(&self, path: &str, cancel: &CancelToken) -> Result<MatchResult> {
        let scope = cancel.child_with_timeout(self.timeout);
        for matcher in &self.matchers {
            let result = matcher.match_detailed(path, &scope)?;
            if result.is_match() {
                scope.cancel();
                tracing::trace!(path, matched = %result, "path ignored");
                return Ok(result);
            }
        }
        Ok(MatchResult::no_match())
    }
}

fn validate_order(order: Vec<Dialect>) -> Result<Vec<Dialect>> {
    let mut seen = Vec::with_capacity(order.len());
    for dialect in order {
        if dialect == Dialect::Unknown {
            return Err(Error::config("order: unknown dialect"));
        }
        if seen.contains(&dialect) {
            return Err(Error::config(format!("order: duplicate dialect {dialect}")));
        }
        seen.push(dialect);
    }
    Ok(seen)
}

enum Pending {
    Regex(RegexOptions),
    Glob(GlobOptions),
    GitIgnore(GitIgnoreOptions),
    Compiled(Matcher),
}

/// Builds a [`PathIgnore`] whose precedence is the order of the calls.
#[derive(Default)]
pub struct PathIgnoreBuilder {
    pending: Vec<Pending>,
    timeout: Option<Duration>,
}

impl PathIgnoreBuilder {
    pub fn regex(mut self, options: RegexOptions) -> Self {
        self.pending.push(Pending::Regex(options));
        self
    }

    /// Add a glob dialect, compiled strictly.
    pub fn glob(mut self, options: GlobOptions) -> Self {
        self.pending.push(Pending::Glob(options));
        self
    }

    pub fn gitignore(mut self, options: GitIgnoreOptions) -> Self {
        self.pending.push(Pending::GitIgnore(options));
        self
    }

    /// Add an already-compiled matcher, e.g. a leniently built glob matcher.
    pub fn matcher(mut self, matcher: impl Into<Matcher>) -> Self {
        self.pending.push(Pending::Compiled(matcher.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Compile pending dialects in order. Fails on the first error.
    pub fn build(self) -> Result<PathIgnore> {
        let matchers = self
            .pending
            .into_iter()
            .map(|pending| {
                Ok(match pending {
                    Pending::Regex(o) => RegexMatcher::new(&o)?.into(),
                    Pending::Glob(o) => GlobMatcher::new(&o)?.into(),
                    Pending::GitIgnore(o) => GitIgnoreMatcher::new(&o)?.into(),
                    Pending::Compiled(m) => m,
                })
            })
            .collect::<Result<Vec<Matcher>>>()?;
        PathIgnore::from_matchers(matchers, self.timeout)
    }
}

#[cfg(test)]
#[path = "path_ignore_tests.rs"]
mod tests;
