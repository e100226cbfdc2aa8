// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code)]

use serde_json::Value;

// Re-export canonical test utilities from leetkit::testing
#[allow(unused_imports)]
pub use leetkit::testing::{board, solve, strings};

/// Parses a JSON literal, panicking on malformed fixtures.
pub fn json(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| panic!("bad fixture `{}`: {}", text, e))
}

/// Asserts that catalogue problem `key` answers `expected` for `input`.
pub fn assert_solves(key: &str, input: &str, expected: &str) {
    let actual = solve(key, input).unwrap_or_else(|e| panic!("{} failed on {}: {}", key, input, e));
    assert_eq!(actual, json(expected), "{} on {}", key, input);
}

/// Asserts that catalogue problem `key` rejects `input`.
pub fn assert_rejects(key: &str, input: &str) {
    assert!(solve(key, input).is_err(), "{} accepted {}", key, input);
}
