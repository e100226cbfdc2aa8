// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Segment trees and range queries.
//!
//! [`SegmentTree`] is the static, array-backed tree: point updates and
//! range folds under any associative merge. The interval exercises need
//! variations of it:
//!
//! | Exercise        | Tree                                               |
//! |-----------------|----------------------------------------------------|
//! | `NumArray`      | `SegmentTree` with `+`                             |
//! | falling squares | lazy range-assign / range-max, compressed coords   |
//! | `RangeModule`   | dynamic coverage tree, children created on demand  |
//! | `MyCalendarThree` | dynamic lazy range-add / max                     |
//! | rectangle area  | coverage-count sweep over compressed y             |
//! | count smaller   | Fenwick tree over value ranks                      |
//!
//! All ranges are half-open, `[left, right)`.

mod coverage;
mod falling;
mod fenwick;
mod num_array;

pub use coverage::{rectangle_area, MyCalendarThree, RangeModule};
pub use falling::falling_squares;
pub use fenwick::{count_smaller, Fenwick};
pub use num_array::NumArray;

use std::ops::Range;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RangeError {
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("range {start}..{end} invalid for length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Array-backed segment tree over `len` leaves.
///
/// Node `1` covers `0..len`; node `i` splits its range at the midpoint into
/// nodes `2i` and `2i + 1`.
pub struct SegmentTree<T, F>
where
    T: Copy + Default,
    F: Fn(T, T) -> T,
{
    len: usize,
    nodes: Vec<T>,
    merge: F,
}

impl<T, F> SegmentTree<T, F>
where
    T: Copy + Default,
    F: Fn(T, T) -> T,
{
    pub fn from_slice(values: &[T], merge: F) -> Self {
        let len = values.len();
        let mut tree = SegmentTree {
            len,
            nodes: vec![T::default(); 4 * len.max(1)],
            merge,
        };
        if len > 0 {
            tree.build(values, 1, 0..len);
        }
        tree
    }

    fn build(&mut self, values: &[T], node: usize, span: Range<usize>) {
        if span.len() == 1 {
            self.nodes[node] = values[span.start];
            return;
        }
        let mid = span.start + span.len() / 2;
        self.build(values, 2 * node, span.start..mid);
        self.build(values, 2 * node + 1, mid..span.end);
        self.nodes[node] = (self.merge)(self.nodes[2 * node], self.nodes[2 * node + 1]);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Fold of `range` under the merge, or `None` for an empty range.
    pub fn query(&self, range: Range<usize>) -> Result<Option<T>, RangeError> {
        if range.start > range.end || range.end > self.len {
            return Err(RangeError::InvalidRange {
                start: range.start,
                end: range.end,
                len: self.len,
            });
        }
        if range.is_empty() {
            return Ok(None);
        }
        Ok(self.fold(1, 0..self.len, &range))
    }

    fn fold(&self, node: usize, span: Range<usize>, target: &Range<usize>) -> Option<T> {
        if span.start >= target.end || span.end <= target.start {
            return None;
        }
        if target.start <= span.start && span.end <= target.end {
            return Some(self.nodes[node]);
        }
        let mid = span.start + span.len() / 2;
        let left = self.fold(2 * node, span.start..mid, target);
        let right = self.fold(2 * node + 1, mid..span.end, target);
        match (left, right) {
            (Some(l), Some(r)) => Some((self.merge)(l, r)),
            (one, None) | (None, one) => one,
        }
    }

    /// Replaces the leaf at `index`.
    pub fn update(&mut self, index: usize, value: T) -> Result<(), RangeError> {
        if index >= self.len {
            return Err(RangeError::IndexOutOfBounds { index, len: self.len });
        }
        self.assign(1, 0..self.len, index, value);
        Ok(())
    }

    fn assign(&mut self, node: usize, span: Range<usize>, index: usize, value: T) {
        if span.len() == 1 {
            self.nodes[node] = value;
            return;
        }
        let mid = span.start + span.len() / 2;
        if index < mid {
            self.assign(2 * node, span.start..mid, index, value);
        } else {
            self.assign(2 * node + 1, mid..span.end, index, value);
        }
        self.nodes[node] = (self.merge)(self.nodes[2 * node], self.nodes[2 * node + 1]);
    }
}
