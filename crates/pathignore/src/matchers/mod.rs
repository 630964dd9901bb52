// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dialect matchers: regex, glob, and gitignore.

pub mod gitignore;
pub mod glob;
pub mod regex;

pub use self::gitignore::{GitIgnoreMatcher, GitIgnoreOptions, Rule};
pub use self::glob::{GlobMatcher, GlobOptions, quote_meta};
pub use self::regex::{RegexMatcher, RegexOptions};
