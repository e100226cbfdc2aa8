// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grading answers.

use leetkit::catalog::{self, Compare, Example, Topic};
use leetkit::judge::{self, matches, run_example, Verdict};
use serde_json::json;

#[test]
fn test_float_answers_within_tolerance() {
    assert!(matches(Compare::Float, &json!([2.0, 2.5]), &json!([2.000001, 2.499999])));
    assert!(!matches(Compare::Float, &json!(1.0), &json!(1.001)));
    assert!(!matches(Compare::Float, &json!([1.0]), &json!([1.0, 2.0])));
}

#[test]
fn test_nested_order_is_ignored_for_grouping_answers() {
    let expected = json!([["bat"], ["nat", "tan"], ["ate", "eat", "tea"]]);
    let actual = json!([["eat", "tea", "ate"], ["bat"], ["tan", "nat"]]);
    assert!(matches(Compare::Nested, &expected, &actual));
    assert!(!matches(Compare::Exact, &expected, &actual));
}

#[test]
fn test_wrong_answer_reports_both_sides() {
    let problem = catalog::find("climbing-stairs").unwrap();
    let example = Example {
        input: "[3]",
        output: "4",
    };
    match run_example(problem, &example) {
        Verdict::WrongAnswer { expected, actual } => {
            assert_eq!(expected, json!(4));
            assert_eq!(actual, json!(3));
        }
        other => panic!("expected wrong answer, got {other:?}"),
    }
}

#[test]
fn test_malformed_expected_output_is_an_error() {
    let problem = catalog::find("climbing-stairs").unwrap();
    let example = Example {
        input: "[3]",
        output: "three",
    };
    assert!(matches!(run_example(problem, &example), Verdict::Error(_)));
}

#[test]
fn test_check_topic() {
    let problems: Vec<_> = catalog::by_topic(Topic::Design).collect();
    let reports = judge::check(&problems);
    assert_eq!(reports.len(), problems.len());
    for report in &reports {
        assert!(report.is_success(), "{:?}", report);
        assert_eq!(report.passed(), report.problem.examples.len());
        assert_eq!(report.failed(), 0);
    }
}

#[test]
fn test_check_with_sees_every_report() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let problems: Vec<_> = catalog::by_topic(Topic::Stack).collect();
    let seen = AtomicUsize::new(0);
    let reports = judge::check_with(&problems, |_| {
        seen.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(seen.load(Ordering::Relaxed), problems.len());
    assert_eq!(reports.len(), problems.len());
}
