// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping items that are transitively linked.

use super::{edge, UnionFind};
use std::collections::{BTreeMap, HashMap};

/// 721. Accounts Merge
///
/// Accounts sharing any email belong to the same person. Each merged account
/// is `[name, emails...]` with emails sorted; accounts are sorted too.
pub fn accounts_merge(accounts: Vec<Vec<String>>) -> Vec<Vec<String>> {
    let mut uf = UnionFind::new(accounts.len());
    let mut owner: HashMap<&str, usize> = HashMap::new();
    for (i, account) in accounts.iter().enumerate() {
        for email in account.iter().skip(1) {
            match owner.get(email.as_str()) {
                Some(&first) => {
                    uf.union(first, i);
                }
                None => {
                    owner.insert(email, i);
                }
            }
        }
    }
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for (email, i) in owner {
        groups.entry(uf.find(i)).or_default().push(email);
    }
    let mut merged: Vec<Vec<String>> = groups
        .into_iter()
        .map(|(root, mut emails)| {
            emails.sort_unstable();
            let name = accounts[root].first().cloned().unwrap_or_default();
            std::iter::once(name)
                .chain(emails.into_iter().map(str::to_string))
                .collect()
        })
        .collect();
    merged.sort();
    merged
}

/// 990. Satisfiability of Equality Equations
///
/// Equations look like `a==b` or `a!=b` over lowercase variables.
pub fn equations_possible(equations: Vec<String>) -> bool {
    let parse = |eq: &str| -> Option<(usize, bool, usize)> {
        let bytes = eq.as_bytes();
        let &[a, op, b'=', b] = bytes else { return None };
        if !a.is_ascii_lowercase() || !b.is_ascii_lowercase() {
            return None;
        }
        Some(((a - b'a') as usize, op == b'=', (b - b'a') as usize))
    };
    let parsed: Vec<_> = equations.iter().filter_map(|eq| parse(eq)).collect();
    let mut uf = UnionFind::new(26);
    for &(a, equal, b) in &parsed {
        if equal {
            uf.union(a, b);
        }
    }
    parsed
        .iter()
        .all(|&(a, equal, b)| equal || !uf.connected(a, b))
}

/// 1202. Smallest String With Swaps
///
/// Positions linked by swap pairs form groups whose characters can be
/// permuted freely; each group gets its characters in sorted order.
pub fn smallest_string_with_swaps(s: String, pairs: Vec<Vec<i32>>) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut uf = UnionFind::new(n);
    for row in &pairs {
        if let Some((a, b)) = edge(row, n) {
            uf.union(a, b);
        }
    }
    let mut groups: HashMap<usize, Vec<usize>> = HashMap::new();
    for i in 0..n {
        groups.entry(uf.find(i)).or_default().push(i);
    }
    for positions in groups.values() {
        let mut letters: Vec<char> = positions.iter().map(|&i| chars[i]).collect();
        letters.sort_unstable();
        for (&i, c) in positions.iter().zip(letters) {
            chars[i] = c;
        }
    }
    chars.into_iter().collect()
}
