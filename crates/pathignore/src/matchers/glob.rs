// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style glob dialect.
//!
//! Glob grammar is delegated to `globset`. Evaluation is either sequential
//! (first declared glob wins) or a concurrent race where one task per glob
//! runs on the rayon pool and the first match cancels the rest.
//!
//! The race makes no ordering promise: when several globs match, any one of
//! them may be reported.

use std::path::Path;

use crossbeam_channel::bounded;
use globset::{Candidate, GlobBuilder};
use serde::Deserialize;

use crate::cancel::CancelToken;
use crate::error::{Error, Result};
use crate::matcher::{Dialect, MatchResult, PathMatcher};

/// Options for [`GlobMatcher`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobOptions {
    /// Patterns in glob syntax.
    pub patterns: Vec<String>,
    /// Literal paths, quoted into glob syntax before compiling.
    pub raw: Vec<String>,
    /// Race one task per glob instead of scanning in order.
    pub concurrent: bool,
}

impl GlobOptions {
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

    pub fn raw<I, S>(mut self, raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.raw = raw.into_iter().map(Into::into).collect();
        self
    }

    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }
}

#[derive(Debug, Clone)]
struct CompiledGlob {
    /// Text as the caller supplied it (unquoted for raw patterns).
    source: String,
    matcher: globset::GlobMatcher,
}

/// Matches paths against compiled globs.
#[derive(Debug, Clone)]
pub struct GlobMatcher {
    globs: Vec<CompiledGlob>,
    concurrent: bool,
    /// Race tasks currently running.
    #[cfg(test)]
    in_flight: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl GlobMatcher {
    /// Compile every pattern, failing on the first one that is invalid or
    /// empty.
    pub fn new(options: &GlobOptions) -> Result<Self> {
        let globs = sources(options)
            .map(|(source, glob)| compile(source, &glob))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::finish(globs, options.concurrent))
    }

    /// Compile what can be compiled and collect the rest as errors.
    ///
    /// The returned matcher covers only the patterns that compiled.
    pub fn lenient(options: &GlobOptions) -> (Self, Vec<Error>) {
        let mut globs = Vec::new();
        let mut errors = Vec::new();
        for (source, glob) in sources(options) {
            match compile(source, &glob) {
                Ok(compiled) => globs.push(compiled),
                Err(err) => {
                    tracing::warn!("skipping invalid glob pattern '{}': {}", source, err);
                    errors.push(err);
                }
            }
        }
        (Self::finish(globs, options.concurrent), errors)
    }

    fn finish(globs: Vec<CompiledGlob>, concurrent: bool) -> Self {
        tracing::debug!(globs = globs.len(), concurrent, "compiled glob matcher");
        Self {
            globs,
            concurrent,
            #[cfg(test)]
            in_flight: Default::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.globs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    fn scan(&self, candidate: &Candidate<'_>, cancel: &CancelToken) -> Result<Option<usize>> {
        for (idx, glob) in self.globs.iter().enumerate() {
            cancel.check()?;
            if glob.matcher.is_match_candidate(candidate) {
                return Ok(Some(idx));
            }
        }
        Ok(None)
    }

    /// One task per glob; the first to match claims the single result slot
    /// and cancels the race. `rayon::scope` joins every task before
    /// returning, so nothing outlives the call.
    fn race(&self, candidate: &Candidate<'_>, cancel: &CancelToken) -> Result<Option<usize>> {
        let race = cancel.child();
        let (tx, rx) = bounded::<usize>(1);

        rayon::scope(|s| {
            for (idx, glob) in self.globs.iter().enumerate() {
                let tx = tx.clone();
                let race = &race;
                #[cfg(test)]
                let in_flight = &self.in_flight;
                s.spawn(move |_| {
                    #[cfg(test)]
                    let _task = InFlight::enter(in_flight);
                    if race.is_cancelled() {
                        return;
                    }
                    // A full slot means another task already won.
                    if glob.matcher.is_match_candidate(candidate) && tx.try_send(idx).is_ok() {
                        race.cancel();
                    }
                });
            }
        });
        drop(tx);

        match rx.try_recv() {
            Ok(idx) => Ok(Some(idx)),
            Err(_) => cancel.check().map(|()| None),
        }
    }
}

impl PathMatcher for GlobMatcher {
    fn dialect(&self) -> Dialect {
        Dialect::Glob
    }

    fn match_detailed(&self, path: &str, cancel: &CancelToken) -> Result<MatchResult> {
        cancel.check()?;
        let candidate = Candidate::new(Path::new(path));
        let found = if self.concurrent && self.globs.len() > 1 {
            self.race(&candidate, cancel)?
        } else {
            self.scan(&candidate, cancel)?
        };

        match found.and_then(|idx| self.globs.get(idx)) {
            Some(glob) => {
                tracing::trace!(path, glob = %glob.source, "glob match");
                Ok(MatchResult::matched(Dialect::Glob, glob.source.clone()))
            }
            None => Ok(MatchResult::no_match()),
        }
    }
}

#[cfg(test)]
struct InFlight<'a>(&'a std::sync::atomic::AtomicUsize);

#[cfg(test)]
impl<'a> InFlight<'a> {
    fn enter(count: &'a std::sync::atomic::AtomicUsize) -> Self {
        count.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Self(count)
    }
}

#[cfg(test)]
impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, std::sync::atomic::Ordering::SeqCst);
    }
}

/// Quote glob metacharacters so `raw` matches only itself.
pub fn quote_meta(raw: &str) -> String {
    let mut quoted = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '{' | '}' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}

/// Glob patterns first, then quoted raw patterns: `(source, glob text)`.
fn sources(options: &GlobOptions) -> impl Iterator<Item = (&str, String)> {
    let patterns = options.patterns.iter().map(|p| (p.as_str(), p.clone()));
    let raw = options.raw.iter().map(|p| (p.as_str(), quote_meta(p)));
    patterns.chain(raw)
}

fn compile(source: &str, glob: &str) -> Result<CompiledGlob> {
    if source.is_empty() {
        return Err(Error::compile(Dialect::Glob, source, "empty pattern"));
    }
    let matcher = GlobBuilder::new(glob)
        .backslash_escape(true)
        .build()
        .map_err(|e| Error::compile(Dialect::Glob, source, e.kind()))?
        .compile_matcher();
    Ok(CompiledGlob {
        source: source.to_string(),
        matcher,
    })
}

#[cfg(test)]
#[path = "glob_tests.rs"]
mod tests;
