// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tables laid over a grid, filled row by row.

/// 62. Unique Paths
pub fn unique_paths(m: i32, n: i32) -> i32 {
    let (m, n) = (m.max(0) as usize, n.max(0) as usize);
    if m == 0 || n == 0 {
        return 0;
    }
    let mut row = vec![1i64; n];
    for _ in 1..m {
        for c in 1..n {
            row[c] += row[c - 1];
        }
    }
    row[n - 1] as i32
}

/// 63. Unique Paths II
pub fn unique_paths_with_obstacles(obstacle_grid: Vec<Vec<i32>>) -> i32 {
    let cols = obstacle_grid.first().map_or(0, Vec::len);
    let mut row = vec![0i64; cols];
    if cols > 0 {
        row[0] = 1;
    }
    for cells in &obstacle_grid {
        for c in 0..cols {
            if cells.get(c).copied().unwrap_or(1) == 1 {
                row[c] = 0;
            } else if c > 0 {
                row[c] += row[c - 1];
            }
        }
    }
    row.last().map_or(0, |&ways| ways as i32)
}

/// 64. Minimum Path Sum
pub fn min_path_sum(grid: Vec<Vec<i32>>) -> i32 {
    let cols = grid.first().map_or(0, Vec::len);
    let mut row = vec![i32::MAX; cols];
    if cols > 0 {
        row[0] = 0;
    }
    for cells in &grid {
        for c in 0..cols {
            let from_left = if c > 0 { row[c - 1] } else { i32::MAX };
            row[c] = row[c].min(from_left).saturating_add(cells[c]);
        }
    }
    row.last().copied().unwrap_or(0)
}

/// 120. Triangle
///
/// Bottom-up: each row keeps the best path from that cell to the base.
pub fn minimum_total(triangle: Vec<Vec<i32>>) -> i32 {
    let Some(base) = triangle.last() else {
        return 0;
    };
    let mut best = base.clone();
    for row in triangle.iter().rev().skip(1) {
        for (i, &value) in row.iter().enumerate() {
            best[i] = value + best[i].min(best[i + 1]);
        }
    }
    best[0]
}

/// 329. Longest Increasing Path in a Matrix
///
/// Memoised DFS: each cell's answer depends only on strictly larger
/// neighbours, so the recursion is acyclic.
pub fn longest_increasing_path(matrix: Vec<Vec<i32>>) -> i32 {
    fn climb(matrix: &[Vec<i32>], memo: &mut [Vec<u32>], r: usize, c: usize) -> u32 {
        if memo[r][c] != 0 {
            return memo[r][c];
        }
        let (rows, cols) = (matrix.len(), matrix[0].len());
        let mut best = 1;
        for (nr, nc) in crate::graph::neighbors4(r, c, rows, cols) {
            if matrix[nr][nc] > matrix[r][c] {
                best = best.max(1 + climb(matrix, memo, nr, nc));
            }
        }
        memo[r][c] = best;
        best
    }
    let cols = matrix.first().map_or(0, Vec::len);
    let mut memo = vec![vec![0; cols]; matrix.len()];
    let mut longest = 0;
    for r in 0..matrix.len() {
        for c in 0..cols {
            longest = longest.max(climb(&matrix, &mut memo, r, c));
        }
    }
    longest as i32
}

/// 221. Maximal Square
///
/// `side[r][c] = 1 + min(up, left, up-left)` for every `'1'` cell.
pub fn maximal_square(matrix: Vec<Vec<char>>) -> i32 {
    let cols = matrix.first().map_or(0, Vec::len);
    let mut side = vec![0i32; cols + 1];
    let mut largest = 0;
    for row in &matrix {
        let mut up_left = 0;
        for c in 1..=cols {
            let up = side[c];
            side[c] = if row.get(c - 1) == Some(&'1') {
                1 + up.min(side[c - 1]).min(up_left)
            } else {
                0
            };
            largest = largest.max(side[c]);
            up_left = up;
        }
    }
    largest * largest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_counts() {
        assert_eq!(unique_paths(3, 7), 28);
        assert_eq!(unique_paths(3, 2), 3);
        assert_eq!(unique_paths(1, 1), 1);
        assert_eq!(unique_paths_with_obstacles(vec![vec![0, 0, 0], vec![0, 1, 0], vec![0, 0, 0]]), 2);
        assert_eq!(unique_paths_with_obstacles(vec![vec![0, 1], vec![0, 0]]), 1);
        assert_eq!(unique_paths_with_obstacles(vec![vec![1]]), 0);
    }

    #[test]
    fn path_sums() {
        assert_eq!(min_path_sum(vec![vec![1, 3, 1], vec![1, 5, 1], vec![4, 2, 1]]), 7);
        assert_eq!(min_path_sum(vec![vec![1, 2, 3], vec![4, 5, 6]]), 12);
        assert_eq!(minimum_total(vec![vec![2], vec![3, 4], vec![6, 5, 7], vec![4, 1, 8, 3]]), 11);
        assert_eq!(minimum_total(vec![vec![-10]]), -10);
    }

    #[test]
    fn increasing_paths() {
        assert_eq!(longest_increasing_path(vec![vec![9, 9, 4], vec![6, 6, 8], vec![2, 1, 1]]), 4);
        assert_eq!(longest_increasing_path(vec![vec![3, 4, 5], vec![3, 2, 6], vec![2, 2, 1]]), 4);
        assert_eq!(longest_increasing_path(vec![vec![1]]), 1);
    }

    #[test]
    fn squares() {
        let grid = |rows: &[&str]| rows.iter().map(|r| r.chars().collect()).collect::<Vec<Vec<char>>>();
        assert_eq!(maximal_square(grid(&["10100", "10111", "11111", "10010"])), 4);
        assert_eq!(maximal_square(grid(&["01", "10"])), 1);
        assert_eq!(maximal_square(grid(&["0"])), 0);
    }
}
