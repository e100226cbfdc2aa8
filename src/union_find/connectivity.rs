// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Counting components and finding redundant edges.

use super::{edge, UnionFind};
use std::collections::HashMap;

/// 547. Number of Provinces
pub fn find_circle_num(is_connected: Vec<Vec<i32>>) -> i32 {
    let n = is_connected.len();
    let mut uf = UnionFind::new(n);
    for (i, row) in is_connected.iter().enumerate() {
        for (j, &linked) in row.iter().enumerate().skip(i + 1) {
            if linked == 1 && j < n {
                uf.union(i, j);
            }
        }
    }
    uf.count() as i32
}

/// 684. Redundant Connection
///
/// The last edge in input order whose removal leaves a tree; empty when the
/// graph has no cycle.
pub fn find_redundant_connection(edges: Vec<Vec<i32>>) -> Vec<i32> {
    // Nodes are labelled 1..=n with n == edges.len().
    let mut uf = UnionFind::new(edges.len() + 1);
    for row in &edges {
        if let Some((a, b)) = edge(row, edges.len() + 1) {
            if !uf.union(a, b) {
                return row.clone();
            }
        }
    }
    Vec::new()
}

/// 1319. Number of Operations to Make Network Connected
///
/// -1 when there are fewer than `n - 1` cables.
pub fn make_connected(n: i32, connections: Vec<Vec<i32>>) -> i32 {
    let n = n.max(0) as usize;
    if connections.len() + 1 < n {
        return -1;
    }
    let mut uf = UnionFind::new(n);
    for row in &connections {
        if let Some((a, b)) = edge(row, n) {
            uf.union(a, b);
        }
    }
    uf.count().saturating_sub(1) as i32
}

/// 323. Number of Connected Components in an Undirected Graph
pub fn count_components(n: i32, edges: Vec<Vec<i32>>) -> i32 {
    let n = n.max(0) as usize;
    let mut uf = UnionFind::new(n);
    for row in &edges {
        if let Some((a, b)) = edge(row, n) {
            uf.union(a, b);
        }
    }
    uf.count() as i32
}

/// 261. Graph Valid Tree
pub fn valid_tree(n: i32, edges: Vec<Vec<i32>>) -> bool {
    let n = n.max(0) as usize;
    if n == 0 || edges.len() != n - 1 {
        return false;
    }
    let mut uf = UnionFind::new(n);
    edges
        .iter()
        .all(|row| edge(row, n).is_some_and(|(a, b)| uf.union(a, b)))
}

/// 947. Most Stones Removed with Same Row or Column
///
/// Every stone but one per row/column component can go. Rows and columns
/// are joined as nodes; each stone unions its row with its column.
pub fn remove_stones(stones: Vec<Vec<i32>>) -> i32 {
    let mut ids: HashMap<(bool, i32), usize> = HashMap::new();
    let mut pairs = Vec::with_capacity(stones.len());
    for stone in &stones {
        let &[row, col] = stone.as_slice() else { continue };
        let mut id = |key| {
            let next = ids.len();
            *ids.entry(key).or_insert(next)
        };
        pairs.push((id((false, row)), id((true, col))));
    }
    let mut uf = UnionFind::new(ids.len());
    for &(r, c) in &pairs {
        uf.union(r, c);
    }
    (pairs.len() - uf.count()) as i32
}
