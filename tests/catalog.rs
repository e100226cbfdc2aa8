// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalogue-wide checks: every registered example passes, and the metadata
//! is consistent enough for `find` to be unambiguous.

use leetkit::catalog::{self, Topic};
use leetkit::judge::{self, Verdict};
use std::collections::HashSet;

#[test]
fn every_registered_example_is_accepted() {
    let problems: Vec<_> = catalog::all().collect();
    let reports = judge::check(&problems);
    assert_eq!(reports.len(), problems.len());

    let failures: Vec<String> = reports
        .iter()
        .flat_map(|report| {
            report.outcomes.iter().filter_map(move |outcome| match &outcome.verdict {
                Verdict::Accepted => None,
                other => Some(format!(
                    "{} ({}) example {}: {:?}",
                    report.problem.id, report.problem.slug, outcome.example, other
                )),
            })
        })
        .collect();

    assert!(failures.is_empty(), "{} failing examples:\n{}", failures.len(), failures.join("\n"));
}

#[test]
fn ids_and_slugs_are_unique() {
    let mut ids = HashSet::new();
    let mut slugs = HashSet::new();
    for problem in catalog::all() {
        assert!(ids.insert(problem.id), "duplicate id {}", problem.id);
        assert!(slugs.insert(problem.slug), "duplicate slug {}", problem.slug);
    }
}

#[test]
fn slugs_are_kebab_case() {
    for problem in catalog::all() {
        assert!(
            problem
                .slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "slug {:?}",
            problem.slug
        );
        assert!(!problem.slug.starts_with('-') && !problem.slug.ends_with('-'));
        assert!(!problem.title.is_empty());
    }
}

#[test]
fn every_problem_has_examples_with_json_outputs() {
    for problem in catalog::all() {
        assert!(!problem.examples.is_empty(), "{} has no examples", problem.slug);
        for example in problem.examples {
            assert!(
                serde_json::from_str::<serde_json::Value>(example.output).is_ok(),
                "{}: output {:?} is not JSON",
                problem.slug,
                example.output
            );
        }
    }
}

#[test]
fn find_by_number_and_slug_agree() {
    for problem in catalog::all() {
        let by_id = catalog::find(&problem.id.to_string()).map(|p| p.slug);
        let by_slug = catalog::find(problem.slug).map(|p| p.id);
        assert_eq!(by_id, Some(problem.slug));
        assert_eq!(by_slug, Some(problem.id));
    }
}

#[test]
fn topics_partition_the_catalogue() {
    let total: usize = Topic::ALL.iter().map(|&t| catalog::by_topic(t).count()).sum();
    assert_eq!(total, catalog::all().count());
    assert!(catalog::by_topic(Topic::Design).any(|p| p.slug == "lru-cache"));
    assert!(catalog::by_topic(Topic::Concurrency).any(|p| p.id == 1114));
}
