//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use pathignore::*;

/// Evaluate `path` under a fresh scope.
pub fn detailed(matcher: &impl PathMatcher, path: &str) -> MatchResult {
    matcher.match_detailed(path, &CancelToken::new()).unwrap()
}

/// Compile a gitignore matcher from lines.
pub fn gitignore(lines: &[&str], concurrent: bool) -> GitIgnoreMatcher {
    GitIgnoreMatcher::new(&GitIgnoreOptions::new(lines.iter().copied()).concurrent(concurrent))
        .unwrap()
}

/// Both strategies of a gitignore matcher.
pub fn gitignore_both(lines: &[&str]) -> [GitIgnoreMatcher; 2] {
    [gitignore(lines, false), gitignore(lines, true)]
}
