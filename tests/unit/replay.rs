// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design and concurrency problems driven through the catalogue.

use crate::common::{assert_solves, json, solve};
use leetkit::SolveError;

// ============================================================================
// OPERATION LOGS
// ============================================================================

#[test]
fn test_lru_cache_session() {
    assert_solves(
        "lru-cache",
        r#"[["LRUCache","put","put","get","put","get","put","get","get","get"],
            [[2],[1,1],[2,2],[1],[3,3],[2],[4,4],[1],[3],[4]]]"#,
        "[null,null,null,1,null,-1,null,-1,3,4]",
    );
}

#[test]
fn test_range_sum_session() {
    assert_solves(
        "range-sum-query-mutable",
        r#"[["NumArray","sumRange","update","sumRange"],[[[1,3,5]],[0,2],[1,2],[0,2]]]"#,
        "[null,9,null,8]",
    );
}

#[test]
fn test_range_module_session() {
    assert_solves(
        "range-module",
        r#"[["RangeModule","addRange","removeRange","queryRange","queryRange","queryRange"],
            [[],[10,20],[14,16],[10,14],[13,15],[16,17]]]"#,
        "[null,null,null,true,false,true]",
    );
}

#[test]
fn test_constructor_resets_state() {
    assert_solves(
        "lru-cache",
        r#"[["LRUCache","put","LRUCache","get"],[[1],[1,1],[1],[1]]]"#,
        "[null,null,null,-1]",
    );
}

#[test]
fn test_unknown_operation() {
    let err = solve("lru-cache", r#"[["LRUCache","evict"],[[1],[]]]"#).unwrap_err();
    assert!(matches!(err, SolveError::UnknownOperation(ref op) if op == "evict"), "{err}");
}

#[test]
fn test_call_before_constructor() {
    let err = solve("lru-cache", r#"[["get"],[[1]]]"#).unwrap_err();
    assert!(matches!(err, SolveError::NotConstructed(ref op) if op == "get"), "{err}");
}

// ============================================================================
// THREADS
// ============================================================================

#[test]
fn test_print_in_order_any_start_order() {
    for order in ["[1,2,3]", "[2,3,1]", "[3,1,2]", "[2,1,3]"] {
        let input = format!("[{}]", order);
        assert_eq!(solve("print-in-order", &input).unwrap(), json(r#""firstsecondthird""#));
    }
    assert!(solve("print-in-order", "[[1,1,2]]").is_err());
}

#[test]
fn test_zero_even_odd_interleaves() {
    assert_solves("print-zero-even-odd", "[3]", r#""010203""#);
    assert_solves("print-zero-even-odd", "[1]", r#""01""#);
}

#[test]
fn test_threaded_fizz_buzz_is_ordered() {
    let out = solve("fizz-buzz-multithreaded", "[30]").unwrap();
    let words: Vec<String> = serde_json::from_value(out).unwrap();
    assert_eq!(words.len(), 30);
    assert_eq!(words[14], "fizzbuzz");
    assert_eq!(words[29], "fizzbuzz");
    assert_eq!(words[9], "buzz");
    assert_eq!(words[6], "7");
}
