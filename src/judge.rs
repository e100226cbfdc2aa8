// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Replays catalogue examples and grades the answers.
//!
//! ```text
//!   Problem ──► for each Example ──► solve(input) ──► matches(compare) ──► Verdict
//!                                        │
//!                                   catch_unwind
//! ```
//!
//! A panicking exercise is graded [`Verdict::Error`] rather than taking the
//! judge down. Under the `parallel` feature problems are graded on the rayon
//! pool; examples within a problem always run in order.

use crate::catalog::{Compare, Example, Problem, FLOAT_TOLERANCE};
use serde_json::Value;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    Accepted,
    WrongAnswer { expected: Value, actual: Value },
    Error(String),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

#[derive(Debug, Clone)]
pub struct Outcome {
    /// Index into the problem's examples.
    pub example: usize,
    pub verdict: Verdict,
    pub elapsed: Duration,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub problem: &'static Problem,
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.verdict.is_accepted()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}

/// Whether `actual` is an acceptable answer for `expected` under `compare`.
pub fn matches(compare: Compare, expected: &Value, actual: &Value) -> bool {
    match compare {
        Compare::Exact => expected == actual,
        Compare::Float => close(expected, actual),
        Compare::AnyOrder => same_multiset(expected, actual),
        Compare::Nested => same_multiset(&sort_inner(expected), &sort_inner(actual)),
    }
}

fn close(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(e), Value::Number(a)) => match (e.as_f64(), a.as_f64()) {
            (Some(e), Some(a)) => (e - a).abs() <= FLOAT_TOLERANCE,
            _ => false,
        },
        (Value::Array(e), Value::Array(a)) => e.len() == a.len() && e.iter().zip(a).all(|(e, a)| close(e, a)),
        _ => expected == actual,
    }
}

fn sorted_keys(items: &[Value]) -> Vec<String> {
    let mut keys: Vec<String> = items.iter().map(Value::to_string).collect();
    keys.sort();
    keys
}

fn same_multiset(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Array(e), Value::Array(a)) => sorted_keys(e) == sorted_keys(a),
        _ => expected == actual,
    }
}

fn sort_inner(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| match item {
                    Value::Array(inner) => {
                        let mut inner = inner.clone();
                        inner.sort_by_key(Value::to_string);
                        Value::Array(inner)
                    }
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

/// Runs one example and grades it.
pub fn run_example(problem: &Problem, example: &Example) -> Verdict {
    let expected: Value = match serde_json::from_str(example.output) {
        Ok(v) => v,
        Err(e) => return Verdict::Error(format!("expected output is not JSON: {e}")),
    };
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| problem.solve(example.input)));
    match outcome {
        Ok(Ok(actual)) if matches(problem.compare, &expected, &actual) => Verdict::Accepted,
        Ok(Ok(actual)) => Verdict::WrongAnswer { expected, actual },
        Ok(Err(e)) => Verdict::Error(e.to_string()),
        Err(payload) => Verdict::Error(format!("panicked: {}", panic_message(payload.as_ref()))),
    }
}

/// Runs every example of one problem.
pub fn run_problem(problem: &'static Problem) -> Report {
    let outcomes = problem
        .examples
        .iter()
        .enumerate()
        .map(|(i, example)| {
            let start = Instant::now();
            let verdict = run_example(problem, example);
            let elapsed = start.elapsed();
            match &verdict {
                Verdict::Accepted => debug!(id = problem.id, example = i, ?elapsed, "accepted"),
                other => warn!(id = problem.id, example = i, verdict = ?other, "rejected"),
            }
            Outcome {
                example: i,
                verdict,
                elapsed,
            }
        })
        .collect();
    Report { problem, outcomes }
}

/// Grades `problems`, calling `on_report` as each one finishes. Reports come
/// back in input order.
pub fn check_with<F>(problems: &[&'static Problem], on_report: F) -> Vec<Report>
where
    F: Fn(&Report) + Sync,
{
    let grade = |problem: &&'static Problem| {
        let report = run_problem(*problem);
        on_report(&report);
        report
    };

    #[cfg(feature = "parallel")]
    let reports: Vec<Report> = problems.par_iter().map(grade).collect();
    #[cfg(not(feature = "parallel"))]
    let reports: Vec<Report> = problems.iter().map(grade).collect();

    let failed = reports.iter().filter(|r| !r.is_success()).count();
    info!(problems = reports.len(), failed, "check finished");
    reports
}

pub fn check(problems: &[&'static Problem]) -> Vec<Report> {
    check_with(problems, |_| {})
}
