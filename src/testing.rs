// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests, benches and
//! fuzz targets.
//!
//! This module is always compiled but hidden from documentation. Besides
//! small input builders it holds slow, obviously-correct models that the
//! property tests and fuzzers compare the real exercises against.

#![doc(hidden)]

use crate::catalog;
use crate::error::{Result, SolveError};
use serde_json::Value;

/// Owned strings from literals.
pub fn strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// A character board from one string per row.
pub fn board(rows: &[&str]) -> Vec<Vec<char>> {
    rows.iter().map(|row| row.chars().collect()).collect()
}

/// Runs catalogue problem `key` (number or slug) on a JSON input.
pub fn solve(key: &str, input: &str) -> Result<Value> {
    let problem = catalog::find(key).ok_or_else(|| SolveError::UnknownProblem(key.to_string()))?;
    problem.solve(input)
}

/// Reference LRU cache: a vector ordered from least to most recently used.
#[derive(Debug, Clone)]
pub struct LruModel {
    capacity: usize,
    entries: Vec<(i32, i32)>,
}

impl LruModel {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    pub fn get(&mut self, key: i32) -> i32 {
        match self.entries.iter().position(|&(k, _)| k == key) {
            Some(i) => {
                let entry = self.entries.remove(i);
                self.entries.push(entry);
                entry.1
            }
            None => -1,
        }
    }

    pub fn put(&mut self, key: i32, value: i32) {
        if self.capacity == 0 {
            return;
        }
        if let Some(i) = self.entries.iter().position(|&(k, _)| k == key) {
            self.entries.remove(i);
        } else if self.entries.len() == self.capacity {
            self.entries.remove(0);
        }
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reference half-open range tracker over `0..size`, one flag per point.
#[derive(Debug, Clone)]
pub struct RangeModel {
    covered: Vec<bool>,
}

impl RangeModel {
    pub fn new(size: usize) -> Self {
        Self {
            covered: vec![false; size],
        }
    }

    fn span(&self, left: i32, right: i32) -> std::ops::Range<usize> {
        let clamp = |x: i32| (x.max(0) as usize).min(self.covered.len());
        clamp(left)..clamp(right).max(clamp(left))
    }

    pub fn add(&mut self, left: i32, right: i32) {
        let span = self.span(left, right);
        self.covered[span].fill(true);
    }

    pub fn remove(&mut self, left: i32, right: i32) {
        let span = self.span(left, right);
        self.covered[span].fill(false);
    }

    /// Whether every point of a non-empty `[left, right)` is covered.
    pub fn query(&self, left: i32, right: i32) -> bool {
        let span = self.span(left, right);
        !span.is_empty() && self.covered[span].iter().all(|&c| c)
    }
}

/// Falling squares on a unit-cell skyline: `(left, side)` squares, all
/// inside `0..width`. Returns the tallest stack after each drop.
pub fn falling_squares_cells(width: usize, squares: &[(i32, i32)]) -> Vec<i32> {
    let mut heights = vec![0i32; width];
    let mut tallest = 0;
    squares
        .iter()
        .map(|&(left, side)| {
            let cells = left as usize..(left + side) as usize;
            let top = heights[cells.clone()].iter().copied().max().unwrap_or(0) + side;
            heights[cells].fill(top);
            tallest = tallest.max(top);
            tallest
        })
        .collect()
}

/// Reference booking counter over `0..size`, one count per point.
#[derive(Debug, Clone)]
pub struct CalendarModel {
    booked: Vec<i32>,
}

impl CalendarModel {
    pub fn new(size: usize) -> Self {
        Self { booked: vec![0; size] }
    }

    /// Books `[start, end)` and returns the highest count anywhere.
    pub fn book(&mut self, start: i32, end: i32) -> i32 {
        for count in &mut self.booked[start as usize..end as usize] {
            *count += 1;
        }
        self.booked.iter().copied().max().unwrap_or(0)
    }
}

/// Area covered by `[x1, y1, x2, y2]` rectangles, counting unit cells of a
/// `size` by `size` grid.
pub fn rectangle_area_cells(size: usize, rectangles: &[[i32; 4]]) -> i64 {
    let mut grid = vec![vec![false; size]; size];
    for &[x1, y1, x2, y2] in rectangles {
        if x1 >= x2 || y1 >= y2 {
            continue;
        }
        for row in &mut grid[x1 as usize..x2 as usize] {
            for cell in &mut row[y1 as usize..y2 as usize] {
                *cell = true;
            }
        }
    }
    grid.iter().flatten().filter(|&&c| c).count() as i64
}

/// Longest strictly increasing subsequence by the quadratic table.
pub fn lis_quadratic(nums: &[i32]) -> usize {
    let mut ending = vec![1usize; nums.len()];
    for i in 0..nums.len() {
        for j in 0..i {
            if nums[j] < nums[i] {
                ending[i] = ending[i].max(ending[j] + 1);
            }
        }
    }
    ending.into_iter().max().unwrap_or(0)
}

/// Best sum over all non-empty contiguous slices, checked exhaustively.
pub fn max_subarray_brute(nums: &[i32]) -> Option<i64> {
    (0..nums.len())
        .flat_map(|i| (i + 1..=nums.len()).map(move |j| nums[i..j].iter().map(|&x| i64::from(x)).sum::<i64>()))
        .max()
}

/// For each `i`, how many later elements are smaller than `nums[i]`.
pub fn smaller_after_brute(nums: &[i32]) -> Vec<i32> {
    (0..nums.len())
        .map(|i| nums[i + 1..].iter().filter(|&&x| x < nums[i]).count() as i32)
        .collect()
}
