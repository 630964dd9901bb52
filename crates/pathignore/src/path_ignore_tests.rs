// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;
use crate::cancel::CancelReason;
use crate::test_utils::temp_file;
use yare::parameterized;

fn all_dialects(order: Option<Vec<Dialect>>) -> PathIgnoreOptions {
    PathIgnoreOptions {
        regex: Some(RegexOptions::new(["^x$"])),
        glob: Some(GlobOptions::new(["x"])),
        gitignore: Some(GitIgnoreOptions::new(["x"])),
        order,
        ..PathIgnoreOptions::default()
    }
}

#[test]
fn empty_options_is_config_error() {
    let err = PathIgnore::new(PathIgnoreOptions::default()).err().unwrap();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn empty_builder_is_config_error() {
    assert!(matches!(
        PathIgnore::builder().build().err().unwrap(),
        Error::Config { .. }
    ));
}

#[test]
fn default_order_is_regex_glob_gitignore() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    let dialects: Vec<Dialect> = ignore.matchers().iter().map(PathMatcher::dialect).collect();
    assert_eq!(dialects, DEFAULT_ORDER.to_vec());
    assert_eq!(ignore.should_ignore_detailed("x").unwrap().dialect(), Dialect::Regex);
}

#[parameterized(
    gitignore_first = { vec![Dialect::GitIgnore, Dialect::Regex, Dialect::Glob], Dialect::GitIgnore },
    glob_first = { vec![Dialect::Glob, Dialect::GitIgnore, Dialect::Regex], Dialect::Glob },
    regex_first = { vec![Dialect::Regex, Dialect::Glob, Dialect::GitIgnore], Dialect::Regex },
)]
fn first_declared_dialect_wins(order: Vec<Dialect>, expected: Dialect) {
    let ignore = PathIgnore::new(all_dialects(Some(order))).unwrap();
    let result = ignore.should_ignore_detailed("x").unwrap();
    assert!(result.is_match());
    assert_eq!(result.dialect(), expected);
}

#[test]
fn builder_call_order_is_precedence() {
    let ignore = PathIgnore::builder()
        .glob(GlobOptions::new(["*.txt"]))
        .regex(RegexOptions::new([r"\.txt$"]))
        .build()
        .unwrap();
    let result = ignore.should_ignore_detailed("a.txt").unwrap();
    assert_eq!(result.dialect(), Dialect::Glob);
    assert_eq!(result.source(), "*.txt");
}

#[test]
fn later_dialect_matches_when_earlier_do_not() {
    let ignore = PathIgnore::builder()
        .regex(RegexOptions::new(["^never$"]))
        .gitignore(GitIgnoreOptions::new(["*.log"]))
        .build()
        .unwrap();
    let result = ignore.should_ignore_detailed("a/b.log").unwrap();
    assert_eq!(result.dialect(), Dialect::GitIgnore);
    assert_eq!(result.source(), "*.log");
}

#[test]
fn no_match_is_canonical_not_error() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    assert_eq!(
        ignore.should_ignore_detailed("y").unwrap(),
        MatchResult::no_match()
    );
    assert!(!ignore.should_ignore("y").unwrap());
}

#[test]
fn bool_and_detailed_agree() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    for path in ["x", "y", "x/y"] {
        assert_eq!(
            ignore.should_ignore(path).unwrap(),
            ignore.should_ignore_detailed(path).unwrap().is_match()
        );
    }
}

#[test]
fn expired_timeout_is_cancellation() {
    let mut options = all_dialects(None);
    options.timeout = Some(Duration::ZERO);
    let ignore = PathIgnore::new(options).unwrap();
    let err = ignore.should_ignore("x").unwrap_err();
    assert!(matches!(err, Error::Cancelled(CancelReason::DeadlineExceeded)));
}

#[test]
fn caller_cancellation_aborts_evaluation() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    let cancel = CancelToken::new();
    cancel.cancel();
    let err = ignore.is_match("y", &cancel).unwrap_err();
    assert!(matches!(err, Error::Cancelled(CancelReason::Requested)));
}

#[test]
fn match_does_not_cancel_caller_scope() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    let cancel = CancelToken::new();
    assert!(ignore.is_match("x", &cancel).unwrap());
    assert!(!cancel.is_cancelled());
    assert!(!ignore.is_match("y", &cancel).unwrap());
}

#[test]
fn default_timeout_is_one_hour() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    assert_eq!(ignore.timeout(), DEFAULT_TIMEOUT);
}

#[test]
fn concurrent_flag_reaches_every_dialect() {
    let options = PathIgnoreOptions {
        regex: Some(RegexOptions::new(["^a", "^b"])),
        glob: Some(GlobOptions::new(["c/**", "d/**"])),
        gitignore: Some(GitIgnoreOptions::new(["e/", "!e/keep"])),
        concurrent: true,
        ..PathIgnoreOptions::default()
    };
    let ignore = PathIgnore::new(options).unwrap();
    for (path, expected) in [("b", true), ("d/1", true), ("e/x", true), ("e/keep", false)] {
        assert_eq!(ignore.should_ignore(path).unwrap(), expected, "{path}");
    }
}

#[test]
fn compile_error_aborts_construction() {
    let options = PathIgnoreOptions {
        regex: Some(RegexOptions::new(["^ok$"])),
        glob: Some(GlobOptions::new(["["])),
        ..PathIgnoreOptions::default()
    };
    let err = PathIgnore::new(options).err().unwrap();
    assert!(matches!(err, Error::Compile { dialect: Dialect::Glob, .. }));
}

#[test]
fn lenient_glob_can_be_added_precompiled() {
    let (glob, errors) = GlobMatcher::lenient(&GlobOptions::new(["[", "*.bak"]));
    assert_eq!(errors.len(), 1);
    let ignore = PathIgnore::builder().matcher(glob).build().unwrap();
    assert!(ignore.should_ignore("old.bak").unwrap());
}

#[test]
fn gitignore_file_source() {
    let file = temp_file("dist/\n");
    let ignore = PathIgnore::builder()
        .gitignore(GitIgnoreOptions::default().file(file.path()))
        .build()
        .unwrap();
    assert!(ignore.should_ignore("web/dist/app.js").unwrap());
}

#[parameterized(
    duplicate = { vec![Dialect::Regex, Dialect::Regex] },
    unknown = { vec![Dialect::Unknown] },
)]
fn invalid_order_is_config_error(order: Vec<Dialect>) {
    let err = PathIgnore::new(all_dialects(Some(order))).err().unwrap();
    assert!(matches!(err, Error::Config { .. }));
}

#[test]
fn configured_dialect_missing_from_order_is_error() {
    let err = PathIgnore::new(all_dialects(Some(vec![Dialect::Glob])))
        .err()
        .unwrap();
    assert!(err.to_string().contains("regex, gitignore"));
}

#[test]
fn order_may_name_unconfigured_dialects() {
    let options = PathIgnoreOptions {
        glob: Some(GlobOptions::new(["x"])),
        order: Some(vec![Dialect::GitIgnore, Dialect::Glob]),
        ..PathIgnoreOptions::default()
    };
    let ignore = PathIgnore::new(options).unwrap();
    assert_eq!(ignore.matchers().len(), 1);
}

#[test]
fn shared_across_threads() {
    let ignore = PathIgnore::new(all_dialects(None)).unwrap();
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..100 {
                    assert!(ignore.should_ignore("x").unwrap());
                    assert!(!ignore.should_ignore("z").unwrap());
                }
            });
        }
    });
}
