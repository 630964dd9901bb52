// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use proptest::prelude::*;

#[test]
fn lowest_index_wins_when_several_match() {
    let set = PatternSet::new(["a.*", "ab.*"]).unwrap();
    assert_eq!(set.find("abc"), Some(0));
    assert_eq!(set.source(0), Some("a.*"));
}

#[test]
fn later_pattern_reported_when_earlier_misses() {
    let set = PatternSet::new(["^x", "^ab", "c$"]).unwrap();
    assert_eq!(set.find("abc"), Some(1));
}

#[test]
fn no_match_returns_none() {
    let set = PatternSet::new(["^foo$", "^bar$"]).unwrap();
    assert_eq!(set.find("baz"), None);
    assert!(!set.is_match("baz"));
}

#[test]
fn empty_set_never_matches() {
    let set = PatternSet::new(Vec::<String>::new()).unwrap();
    assert!(set.is_empty());
    assert_eq!(set.find("anything"), None);
}

#[test]
fn compile_error_identifies_bad_pattern() {
    let err = PatternSet::new(["^ok$", "(unclosed", "[also"]).unwrap_err();
    assert_eq!(err.index, 1);
    assert_eq!(err.pattern, "(unclosed");
    assert!(err.to_string().contains("(unclosed"));
}

#[test]
fn keeps_sources_in_declaration_order() {
    let set = PatternSet::new(["b", "a", "c"]).unwrap();
    assert_eq!(set.sources(), &["b", "a", "c"]);
    assert_eq!(set.len(), 3);
}

proptest! {
    /// The set agrees with scanning each pattern in order.
    #[test]
    fn agrees_with_sequential_scan(
        literals in proptest::collection::vec("[a-c]{1,3}", 1..8),
        input in "[a-c]{0,6}",
    ) {
        let patterns: Vec<String> = literals.iter().map(|l| regex::escape(l)).collect();
        let set = PatternSet::new(patterns.clone()).unwrap();
        let expected = patterns
            .iter()
            .position(|p| Regex::new(p).unwrap().is_match(&input));
        prop_assert_eq!(set.find(&input), expected);
    }
}
