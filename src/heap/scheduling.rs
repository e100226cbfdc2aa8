// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arranging items so equal ones stay apart.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};

/// 621. Task Scheduler
///
/// The busiest task fixes a frame of `(max - 1) * (n + 1)` slots plus one
/// slot per task tied for busiest; other tasks only stretch it when they
/// overflow the idle slots.
pub fn least_interval(tasks: Vec<char>, n: i32) -> i32 {
    let mut counts = [0i32; 26];
    for task in &tasks {
        if task.is_ascii_uppercase() {
            counts[(*task as u8 - b'A') as usize] += 1;
        }
    }
    let busiest = counts.iter().copied().max().unwrap_or(0);
    if busiest == 0 {
        return 0;
    }
    let tied = counts.iter().filter(|&&c| c == busiest).count() as i32;
    let frame = (busiest - 1).max(0) * (n.max(0) + 1) + tied;
    frame.max(tasks.len() as i32)
}

/// 767. Reorganize String
///
/// Always emits the most plentiful character that differs from the last one
/// written (alphabetically first on ties). Empty when no arrangement exists.
pub fn reorganize_string(s: String) -> String {
    let mut counts = BTreeMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0usize) += 1;
    }
    let mut heap: BinaryHeap<(usize, Reverse<char>)> = counts
        .into_iter()
        .map(|(c, n)| (n, Reverse(c)))
        .collect();
    let mut out = String::with_capacity(s.len());
    let mut held: Option<(usize, Reverse<char>)> = None;
    while let Some((count, Reverse(c))) = heap.pop() {
        out.push(c);
        if let Some(entry) = held.take() {
            heap.push(entry);
        }
        if count > 1 {
            held = Some((count - 1, Reverse(c)));
        }
    }
    if held.is_some() {
        String::new()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intervals() {
        assert_eq!(least_interval(vec!['A', 'A', 'A', 'B', 'B', 'B'], 2), 8);
        assert_eq!(least_interval(vec!['A', 'C', 'A', 'B', 'D', 'B'], 1), 6);
        assert_eq!(least_interval(vec!['A', 'A', 'A', 'B', 'B', 'B'], 3), 10);
        assert_eq!(least_interval(vec!['A', 'A', 'A', 'B', 'B', 'B'], 0), 6);
    }

    #[test]
    fn reorganizes() {
        assert_eq!(reorganize_string("aab".into()), "aba");
        assert_eq!(reorganize_string("aaab".into()), "");
        assert_eq!(reorganize_string(String::new()), "");
        let out = reorganize_string("vvvlo".into());
        assert_eq!(out.len(), 5);
        assert!(out.as_bytes().windows(2).all(|w| w[0] != w[1]));
    }
}
