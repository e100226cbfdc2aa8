// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Graph search: flood fills on grids, orderings on dependency graphs and
//! weighted shortest paths.
//!
//! Grids are row-major `Vec<Vec<_>>` and may be ragged only where noted;
//! edge lists arrive as `[from, to, weight]` rows.

mod grid;
mod ordering;
mod shortest;

pub use grid::*;
pub use ordering::*;
pub use shortest::*;

/// Orthogonal neighbours of `(r, c)` inside a `rows x cols` grid.
pub(crate) fn neighbors4(r: usize, c: usize, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    const STEPS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
    STEPS.into_iter().filter_map(move |(dr, dc)| {
        let nr = r.checked_add_signed(dr)?;
        let nc = c.checked_add_signed(dc)?;
        (nr < rows && nc < cols).then_some((nr, nc))
    })
}

/// Orthogonal and diagonal neighbours of `(r, c)`.
pub(crate) fn neighbors8(r: usize, c: usize, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
    (-1isize..=1)
        .flat_map(|dr| (-1isize..=1).map(move |dc| (dr, dc)))
        .filter(|&step| step != (0, 0))
        .filter_map(move |(dr, dc)| {
            let nr = r.checked_add_signed(dr)?;
            let nc = c.checked_add_signed(dc)?;
            (nr < rows && nc < cols).then_some((nr, nc))
        })
}

/// Grid dimensions, taking the first row's width.
pub(crate) fn dims<T>(grid: &[Vec<T>]) -> (usize, usize) {
    (grid.len(), grid.first().map_or(0, Vec::len))
}
