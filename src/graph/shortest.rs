// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted shortest paths and minimum spanning trees.
//!
//! | Exercise              | Algorithm                         |
//! |-----------------------|-----------------------------------|
//! | network delay         | Dijkstra                          |
//! | cheapest flights      | Bellman-Ford, `k + 1` relaxations |
//! | max probability       | Dijkstra on products              |
//! | city threshold        | Floyd-Warshall                    |
//! | string conversion     | Floyd-Warshall over 26 letters    |
//! | effort / swim         | Dijkstra on the path maximum      |
//! | connect points        | Prim, dense O(n²)                 |

use super::{dims, neighbors4};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Converts a 1- or 0-indexed node id to an index below `n`.
fn node(id: i32, base: i32, n: usize) -> Option<usize> {
    usize::try_from(id - base).ok().filter(|&v| v < n)
}

/// 743. Network Delay Time
///
/// Nodes are numbered `1..=n`. -1 when some node never hears the signal.
pub fn network_delay_time(times: Vec<Vec<i32>>, n: i32, k: i32) -> i32 {
    let n = n.max(0) as usize;
    let mut adjacency = vec![Vec::new(); n];
    for edge in &times {
        let &[u, v, w] = edge.as_slice() else { continue };
        if let (Some(u), Some(v)) = (node(u, 1, n), node(v, 1, n)) {
            adjacency[u].push((v, i64::from(w)));
        }
    }
    let Some(source) = node(k, 1, n) else {
        return -1;
    };
    let mut dist = vec![i64::MAX; n];
    dist[source] = 0;
    let mut heap = BinaryHeap::from([Reverse((0i64, source))]);
    while let Some(Reverse((d, u))) = heap.pop() {
        if d > dist[u] {
            continue;
        }
        for &(v, w) in &adjacency[u] {
            let candidate = d + w;
            if candidate < dist[v] {
                dist[v] = candidate;
                heap.push(Reverse((candidate, v)));
            }
        }
    }
    match dist.into_iter().max() {
        Some(i64::MAX) | None => -1,
        Some(longest) => longest as i32,
    }
}

/// 787. Cheapest Flights Within K Stops
///
/// Round `i` of Bellman-Ford relaxes from the previous round's costs only,
/// so after `k + 1` rounds every cost uses at most `k` intermediate stops.
pub fn find_cheapest_price(n: i32, flights: Vec<Vec<i32>>, src: i32, dst: i32, k: i32) -> i32 {
    let n = n.max(0) as usize;
    let (Some(src), Some(dst)) = (node(src, 0, n), node(dst, 0, n)) else {
        return -1;
    };
    let mut cost = vec![i64::MAX; n];
    cost[src] = 0;
    for _ in 0..=k.max(0) {
        let previous = cost.clone();
        for flight in &flights {
            let &[u, v, price] = flight.as_slice() else { continue };
            let (Some(u), Some(v)) = (node(u, 0, n), node(v, 0, n)) else {
                continue;
            };
            if previous[u] != i64::MAX {
                cost[v] = cost[v].min(previous[u] + i64::from(price));
            }
        }
    }
    if cost[dst] == i64::MAX {
        -1
    } else {
        cost[dst] as i32
    }
}

/// Heap key for probabilities; NaN never appears.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Probability(f64);

impl Eq for Probability {}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Probability {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 1514. Path with Maximum Probability
///
/// 0.0 when `end_node` is unreachable.
pub fn max_probability(n: i32, edges: Vec<Vec<i32>>, succ_prob: Vec<f64>, start_node: i32, end_node: i32) -> f64 {
    let n = n.max(0) as usize;
    let mut adjacency = vec![Vec::new(); n];
    for (edge, &p) in edges.iter().zip(&succ_prob) {
        let &[a, b] = edge.as_slice() else { continue };
        if let (Some(a), Some(b)) = (node(a, 0, n), node(b, 0, n)) {
            adjacency[a].push((b, p));
            adjacency[b].push((a, p));
        }
    }
    let (Some(start), Some(end)) = (node(start_node, 0, n), node(end_node, 0, n)) else {
        return 0.0;
    };
    let mut best = vec![0.0f64; n];
    best[start] = 1.0;
    let mut heap = BinaryHeap::from([(Probability(1.0), start)]);
    while let Some((Probability(p), u)) = heap.pop() {
        if u == end {
            return p;
        }
        if p < best[u] {
            continue;
        }
        for &(v, edge_p) in &adjacency[u] {
            let candidate = p * edge_p;
            if candidate > best[v] {
                best[v] = candidate;
                heap.push((Probability(candidate), v));
            }
        }
    }
    0.0
}

/// All-pairs shortest distances; `None` marks unreachable pairs.
fn floyd_warshall(mut dist: Vec<Vec<Option<i64>>>) -> Vec<Vec<Option<i64>>> {
    let n = dist.len();
    for via in 0..n {
        for i in 0..n {
            let Some(to_via) = dist[i][via] else { continue };
            for j in 0..n {
                if let Some(from_via) = dist[via][j] {
                    let through = to_via + from_via;
                    if dist[i][j].map_or(true, |d| through < d) {
                        dist[i][j] = Some(through);
                    }
                }
            }
        }
    }
    dist
}

/// 1334. Find the City With the Smallest Number of Neighbors at a Threshold Distance
///
/// Ties go to the largest city number.
pub fn find_the_city(n: i32, edges: Vec<Vec<i32>>, distance_threshold: i32) -> i32 {
    let n = n.max(0) as usize;
    let mut dist = vec![vec![None; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for edge in &edges {
        let &[a, b, w] = edge.as_slice() else { continue };
        if let (Some(a), Some(b)) = (node(a, 0, n), node(b, 0, n)) {
            let w = i64::from(w);
            for (x, y) in [(a, b), (b, a)] {
                if dist[x][y].map_or(true, |d| w < d) {
                    dist[x][y] = Some(w);
                }
            }
        }
    }
    let dist = floyd_warshall(dist);
    let threshold = i64::from(distance_threshold);
    (0..n)
        .map(|city| {
            let reachable = dist[city]
                .iter()
                .enumerate()
                .filter(|&(other, d)| other != city && d.is_some_and(|d| d <= threshold))
                .count();
            (reachable, Reverse(city))
        })
        .min()
        .map_or(-1, |(_, Reverse(city))| city as i32)
}

/// 2976. Minimum Cost to Convert String I
///
/// Rule `i` rewrites letter `original[i]` to `changed[i]` at `cost[i]`;
/// rules chain, so the cheapest rewrite of each letter pair is a shortest
/// path over the 26-letter graph. -1 when some position cannot be
/// converted.
pub fn minimum_cost(source: String, target: String, original: Vec<char>, changed: Vec<char>, cost: Vec<i32>) -> i64 {
    const LETTERS: usize = 26;
    let letter = |c: char| c.is_ascii_lowercase().then(|| (c as u8 - b'a') as usize);

    let mut dist = vec![vec![None; LETTERS]; LETTERS];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for ((&from, &to), &c) in original.iter().zip(&changed).zip(&cost) {
        if let (Some(from), Some(to)) = (letter(from), letter(to)) {
            let c = i64::from(c);
            if dist[from][to].map_or(true, |d| c < d) {
                dist[from][to] = Some(c);
            }
        }
    }
    let dist = floyd_warshall(dist);

    if source.chars().count() != target.chars().count() {
        return -1;
    }
    let mut total = 0i64;
    for (s, t) in source.chars().zip(target.chars()) {
        if s == t {
            continue;
        }
        match (letter(s), letter(t)) {
            (Some(s), Some(t)) => match dist[s][t] {
                Some(d) => total += d,
                None => return -1,
            },
            _ => return -1,
        }
    }
    total
}

/// Dijkstra where a path costs its worst step: the smallest achievable
/// maximum of `step(from, to)` over paths between opposite corners.
fn minimax_path(rows: usize, cols: usize, start: i32, step: impl Fn((usize, usize), (usize, usize)) -> i32) -> i32 {
    if rows == 0 || cols == 0 {
        return 0;
    }
    let mut best = vec![vec![i32::MAX; cols]; rows];
    best[0][0] = start;
    let mut heap = BinaryHeap::from([Reverse((start, 0usize, 0usize))]);
    while let Some(Reverse((cost, r, c))) = heap.pop() {
        if (r, c) == (rows - 1, cols - 1) {
            return cost;
        }
        if cost > best[r][c] {
            continue;
        }
        for (nr, nc) in neighbors4(r, c, rows, cols) {
            let candidate = cost.max(step((r, c), (nr, nc)));
            if candidate < best[nr][nc] {
                best[nr][nc] = candidate;
                heap.push(Reverse((candidate, nr, nc)));
            }
        }
    }
    best[rows - 1][cols - 1]
}

/// 1631. Path With Minimum Effort
pub fn minimum_effort_path(heights: Vec<Vec<i32>>) -> i32 {
    let (rows, cols) = dims(&heights);
    minimax_path(rows, cols, 0, |(r, c), (nr, nc)| (heights[r][c] - heights[nr][nc]).abs())
}

/// 778. Swim in Rising Water
pub fn swim_in_water(grid: Vec<Vec<i32>>) -> i32 {
    let (rows, cols) = dims(&grid);
    let start = grid.first().and_then(|row| row.first()).copied().unwrap_or(0);
    minimax_path(rows, cols, start, |_, (nr, nc)| grid[nr][nc])
}

/// 1584. Min Cost to Connect All Points
///
/// Manhattan-distance minimum spanning tree, dense Prim.
pub fn min_cost_connect_points(points: Vec<Vec<i32>>) -> i32 {
    let n = points.len();
    let distance = |a: usize, b: usize| -> i64 {
        points[a]
            .iter()
            .zip(&points[b])
            .map(|(&x, &y)| (i64::from(x) - i64::from(y)).abs())
            .sum()
    };
    let mut in_tree = vec![false; n];
    let mut nearest = vec![i64::MAX; n];
    let mut total = 0i64;
    if n > 0 {
        nearest[0] = 0;
    }
    for _ in 0..n {
        let Some(u) = (0..n).filter(|&v| !in_tree[v]).min_by_key(|&v| nearest[v]) else {
            break;
        };
        in_tree[u] = true;
        total += nearest[u];
        for v in 0..n {
            if !in_tree[v] {
                nearest[v] = nearest[v].min(distance(u, v));
            }
        }
    }
    total as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_delay() {
        let times = vec![vec![2, 1, 1], vec![2, 3, 1], vec![3, 4, 1]];
        assert_eq!(network_delay_time(times, 4, 2), 2);
        assert_eq!(network_delay_time(vec![vec![1, 2, 1]], 2, 1), 1);
        assert_eq!(network_delay_time(vec![vec![1, 2, 1]], 2, 2), -1);
    }

    #[test]
    fn cheapest_flights() {
        let flights = vec![
            vec![0, 1, 100],
            vec![1, 2, 100],
            vec![2, 0, 100],
            vec![1, 3, 600],
            vec![2, 3, 200],
        ];
        assert_eq!(find_cheapest_price(4, flights, 0, 3, 1), 700);
        let flights = vec![vec![0, 1, 100], vec![1, 2, 100], vec![0, 2, 500]];
        assert_eq!(find_cheapest_price(3, flights.clone(), 0, 2, 1), 200);
        assert_eq!(find_cheapest_price(3, flights, 0, 2, 0), 500);
        assert_eq!(find_cheapest_price(2, vec![], 0, 1, 3), -1);
    }

    #[test]
    fn probabilities() {
        let edges = vec![vec![0, 1], vec![1, 2], vec![0, 2]];
        assert!((max_probability(3, edges.clone(), vec![0.5, 0.5, 0.2], 0, 2) - 0.25).abs() < 1e-9);
        assert!((max_probability(3, edges, vec![0.5, 0.5, 0.3], 0, 2) - 0.3).abs() < 1e-9);
        assert_eq!(max_probability(3, vec![vec![0, 1]], vec![0.5], 0, 2), 0.0);
    }

    #[test]
    fn threshold_city() {
        let edges = vec![vec![0, 1, 3], vec![1, 2, 1], vec![1, 3, 4], vec![2, 3, 1]];
        assert_eq!(find_the_city(4, edges, 4), 3);
        let edges = vec![
            vec![0, 1, 2],
            vec![0, 4, 8],
            vec![1, 2, 3],
            vec![1, 4, 2],
            vec![2, 3, 1],
            vec![3, 4, 1],
        ];
        assert_eq!(find_the_city(5, edges, 2), 0);
    }

    #[test]
    fn string_conversion() {
        let cost = minimum_cost(
            "abcd".into(),
            "acbe".into(),
            vec!['a', 'b', 'c', 'c', 'e', 'd'],
            vec!['b', 'c', 'b', 'e', 'b', 'e'],
            vec![2, 5, 5, 1, 2, 20],
        );
        assert_eq!(cost, 28);
        let cost = minimum_cost("aaaa".into(), "bbbb".into(), vec!['a', 'c'], vec!['c', 'b'], vec![1, 2]);
        assert_eq!(cost, 12);
        let cost = minimum_cost("abcd".into(), "abce".into(), vec!['a'], vec!['e'], vec![10000]);
        assert_eq!(cost, -1);
    }

    #[test]
    fn minimax_grids() {
        assert_eq!(minimum_effort_path(vec![vec![1, 2, 2], vec![3, 8, 2], vec![5, 3, 5]]), 2);
        assert_eq!(minimum_effort_path(vec![vec![1, 2, 3], vec![3, 8, 4], vec![5, 3, 5]]), 1);
        assert_eq!(minimum_effort_path(vec![vec![7]]), 0);
        assert_eq!(swim_in_water(vec![vec![0, 2], vec![1, 3]]), 3);
        let grid = vec![
            vec![0, 1, 2, 3, 4],
            vec![24, 23, 22, 21, 5],
            vec![12, 13, 14, 15, 16],
            vec![11, 17, 18, 19, 20],
            vec![10, 9, 8, 7, 6],
        ];
        assert_eq!(swim_in_water(grid), 16);
    }

    #[test]
    fn spanning_tree() {
        let points = vec![vec![0, 0], vec![2, 2], vec![3, 10], vec![5, 2], vec![7, 0]];
        assert_eq!(min_cost_connect_points(points), 20);
        assert_eq!(min_cost_connect_points(vec![vec![3, 12], vec![-2, 5], vec![-4, 1]]), 18);
        assert_eq!(min_cost_connect_points(vec![vec![0, 0]]), 0);
    }
}
