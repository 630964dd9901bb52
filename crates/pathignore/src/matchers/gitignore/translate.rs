// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of one gitignore line into an anchored regular expression.
//!
//! Output shape:
//!
//! ```text
//! ^(?:|.*/)<body>(?:|/.*)$     no slash inside the line: any depth
//! ^(?:|/)<body>(?:|/.*)$       slash inside the line: anchored at the root
//! <body>/(?:|.*)$              trailing slash: directory and its contents
//! ```
//!
//! Inside the body:
//! - `/**/` becomes `(?:/|/.+/)` (zero or more intermediate directories)
//! - a leading `**/` becomes `(?:|.*/)` (any ancestor, or none)
//! - a trailing `/**` becomes `/.*` (everything below)
//! - `*` becomes `[^/]*` and `?` becomes `[^/]`
//! - `[!...]` becomes `[^...]`
//! - `\x` matches `x` literally

use std::sync::LazyLock;

use regex::Regex;

/// A `dir/…*.ext` fragment that is not already rooted.
#[allow(clippy::expect_used)]
static DIR_FILE_GLOB: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^/+]/.*\*\.").expect("valid regex"));

/// One translated line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub expr: String,
    pub negated: bool,
}

/// Translate a gitignore line. Blank lines and comments yield `None`.
pub fn translate(line: &str) -> Option<Translated> {
    let line = line.trim_end_matches('\r').trim_matches(' ');
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let dir_only = line.ends_with('/');
    let anchored = line.strip_suffix('/').unwrap_or(line).contains('/');

    let (negated, rest) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };
    if rest.is_empty() {
        return None;
    }

    let mut pattern = rest.to_string();
    if !pattern.starts_with('/') && DIR_FILE_GLOB.is_match(&pattern) {
        pattern.insert(0, '/');
    }
    if pattern.starts_with("/**/") {
        pattern.remove(0);
    }

    let body = translate_body(&pattern);
    let tail = if dir_only { "(?:|.*)$" } else { "(?:|/.*)$" };
    let expr = if anchored {
        let body = body.strip_prefix('/').unwrap_or(&body);
        format!("^(?:|/){body}{tail}")
    } else {
        format!("^(?:|.*/){body}{tail}")
    };

    Some(Translated { expr, negated })
}

fn translate_body(pattern: &str) -> String {
    let chars: Vec<char> = pattern.chars().collect();
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let rest = &chars[i..];
        match chars[i] {
            '\\' => match chars.get(i + 1) {
                Some(&c) => {
                    out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                    i += 2;
                }
                None => {
                    out.push_str(r"\\");
                    i += 1;
                }
            },
            '/' if rest.starts_with(&['/', '*', '*', '/']) => {
                out.push_str("(?:/|/.+/)");
                i += 4;
            }
            '/' if rest == ['/', '*', '*'] => {
                out.push_str("/.*");
                i += 3;
            }
            '*' if i == 0 && rest.starts_with(&['*', '*', '/']) => {
                out.push_str("(?:|.*/)");
                i += 3;
            }
            '*' => {
                out.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                out.push_str("[^/]");
                i += 1;
            }
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    push_class(&mut out, &chars[i + 1..end]);
                    i = end + 1;
                }
                None => {
                    out.push_str(r"\[");
                    i += 1;
                }
            },
            c => {
                push_literal(&mut out, c);
                i += 1;
            }
        }
    }
    out
}

/// Index of the `]` closing the class opened at `start`.
///
/// A `]` right after `[`, `[!` or `[^` is part of the class.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if matches!(chars.get(j), Some('!' | '^')) {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() {
        match chars[j] {
            '\\' => j += 2,
            ']' => return Some(j),
            _ => j += 1,
        }
    }
    None
}

fn push_class(out: &mut String, inner: &[char]) {
    out.push('[');
    let mut j = 0;
    if matches!(inner.first(), Some('!' | '^')) {
        out.push('^');
        j = 1;
    }
    while j < inner.len() {
        match inner[j] {
            '\\' => {
                if let Some(&c) = inner.get(j + 1) {
                    out.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                }
                j += 2;
                continue;
            }
            // Nested classes and set operators mean something else to regex.
            c @ ('[' | ']' | '&' | '~') => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
        j += 1;
    }
    out.push(']');
}

fn push_literal(out: &mut String, c: char) {
    if matches!(c, '.' | '+' | '(' | ')' | '|' | '{' | '}' | '^' | '$' | ']') {
        out.push('\\');
    }
    out.push(c);
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
