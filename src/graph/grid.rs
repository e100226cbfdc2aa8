// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Flood fills and multi-source BFS over rectangular grids.

use super::{dims, neighbors4, neighbors8};
use std::collections::VecDeque;

/// Iterative flood fill from `start` over cells accepted by `open`, marking
/// each visited cell closed through `close`. Returns the region size.
fn flood<T>(
    grid: &mut [Vec<T>],
    start: (usize, usize),
    open: impl Fn(&T) -> bool,
    close: impl Fn(&mut T),
) -> usize {
    let (rows, cols) = dims(grid);
    if !open(&grid[start.0][start.1]) {
        return 0;
    }
    close(&mut grid[start.0][start.1]);
    let mut stack = vec![start];
    let mut size = 0;
    while let Some((r, c)) = stack.pop() {
        size += 1;
        for (nr, nc) in neighbors4(r, c, rows, cols) {
            if open(&grid[nr][nc]) {
                close(&mut grid[nr][nc]);
                stack.push((nr, nc));
            }
        }
    }
    size
}

/// 200. Number of Islands
pub fn num_islands(mut grid: Vec<Vec<char>>) -> i32 {
    let (rows, cols) = dims(&grid);
    let mut islands = 0;
    for r in 0..rows {
        for c in 0..cols {
            if flood(&mut grid, (r, c), |&cell| cell == '1', |cell| *cell = '0') > 0 {
                islands += 1;
            }
        }
    }
    islands
}

/// 695. Max Area of Island
pub fn max_area_of_island(mut grid: Vec<Vec<i32>>) -> i32 {
    let (rows, cols) = dims(&grid);
    let mut best = 0;
    for r in 0..rows {
        for c in 0..cols {
            best = best.max(flood(&mut grid, (r, c), |&cell| cell == 1, |cell| *cell = 0));
        }
    }
    best as i32
}

/// 994. Rotting Oranges
///
/// Minutes until no fresh orange remains, or -1 if some never rot.
pub fn oranges_rotting(mut grid: Vec<Vec<i32>>) -> i32 {
    let (rows, cols) = dims(&grid);
    let mut queue = VecDeque::new();
    let mut fresh = 0;
    for (r, row) in grid.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            match cell {
                1 => fresh += 1,
                2 => queue.push_back((r, c)),
                _ => {}
            }
        }
    }
    let mut minutes = 0;
    while fresh > 0 && !queue.is_empty() {
        for _ in 0..queue.len() {
            let Some((r, c)) = queue.pop_front() else { break };
            for (nr, nc) in neighbors4(r, c, rows, cols) {
                if grid[nr][nc] == 1 {
                    grid[nr][nc] = 2;
                    fresh -= 1;
                    queue.push_back((nr, nc));
                }
            }
        }
        minutes += 1;
    }
    if fresh == 0 {
        minutes
    } else {
        -1
    }
}

/// 417. Pacific Atlantic Water Flow
///
/// Cells draining to both oceans, in row-major order.
pub fn pacific_atlantic(heights: Vec<Vec<i32>>) -> Vec<Vec<i32>> {
    let (rows, cols) = dims(&heights);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    // Climb uphill from each ocean's shore.
    let reach = |shore: Vec<(usize, usize)>| {
        let mut seen = vec![vec![false; cols]; rows];
        let mut stack = Vec::new();
        for (r, c) in shore {
            if !seen[r][c] {
                seen[r][c] = true;
                stack.push((r, c));
            }
        }
        while let Some((r, c)) = stack.pop() {
            for (nr, nc) in neighbors4(r, c, rows, cols) {
                if !seen[nr][nc] && heights[nr][nc] >= heights[r][c] {
                    seen[nr][nc] = true;
                    stack.push((nr, nc));
                }
            }
        }
        seen
    };
    let pacific = reach((0..rows).map(|r| (r, 0)).chain((0..cols).map(|c| (0, c))).collect());
    let atlantic = reach(
        (0..rows)
            .map(|r| (r, cols - 1))
            .chain((0..cols).map(|c| (rows - 1, c)))
            .collect(),
    );
    let mut cells = Vec::new();
    for r in 0..rows {
        for c in 0..cols {
            if pacific[r][c] && atlantic[r][c] {
                cells.push(vec![r as i32, c as i32]);
            }
        }
    }
    cells
}

/// 130. Surrounded Regions
///
/// Captures every `O` region that does not touch the border.
#[allow(clippy::ptr_arg)]
pub fn solve_regions(board: &mut Vec<Vec<char>>) {
    let (rows, cols) = dims(board);
    if rows == 0 || cols == 0 {
        return;
    }
    // Mark border-connected regions as safe first.
    for r in 0..rows {
        for c in 0..cols {
            if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                flood(board, (r, c), |&cell| cell == 'O', |cell| *cell = '#');
            }
        }
    }
    for cell in board.iter_mut().flatten() {
        *cell = match *cell {
            '#' => 'O',
            'O' => 'X',
            other => other,
        };
    }
}

/// 1091. Shortest Path in Binary Matrix
///
/// Length in cells of the shortest 8-connected clear path between opposite
/// corners, or -1.
pub fn shortest_path_binary_matrix(mut grid: Vec<Vec<i32>>) -> i32 {
    let (rows, cols) = dims(&grid);
    if rows == 0 || cols == 0 || grid[0][0] != 0 || grid[rows - 1][cols - 1] != 0 {
        return -1;
    }
    let mut queue = VecDeque::from([(0, 0, 1)]);
    grid[0][0] = 1;
    while let Some((r, c, length)) = queue.pop_front() {
        if (r, c) == (rows - 1, cols - 1) {
            return length;
        }
        for (nr, nc) in neighbors8(r, c, rows, cols) {
            if grid[nr][nc] == 0 {
                grid[nr][nc] = 1;
                queue.push_back((nr, nc, length + 1));
            }
        }
    }
    -1
}

/// 542. 01 Matrix
///
/// Distance from every cell to its nearest 0, by BFS seeded from all zeros.
pub fn update_matrix(mat: Vec<Vec<i32>>) -> Vec<Vec<i32>> {
    let (rows, cols) = dims(&mat);
    let mut dist = vec![vec![-1; cols]; rows];
    let mut queue = VecDeque::new();
    for (r, row) in mat.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell == 0 {
                dist[r][c] = 0;
                queue.push_back((r, c));
            }
        }
    }
    while let Some((r, c)) = queue.pop_front() {
        for (nr, nc) in neighbors4(r, c, rows, cols) {
            if dist[nr][nc] == -1 {
                dist[nr][nc] = dist[r][c] + 1;
                queue.push_back((nr, nc));
            }
        }
    }
    dist
}
