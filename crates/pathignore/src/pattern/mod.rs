// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-pattern evaluation.
//!
//! Matching N compiled expressions one after another costs N scans of the
//! same path. A [`PatternSet`] compiles them into one automaton and answers
//! "which pattern matched first" in a single pass.

pub mod set;

pub use set::{PatternSet, PatternSetError};
