// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Closed intervals given as `[start, end]` pairs.
//!
//! Rows that are not pairs are ignored.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn pairs(intervals: &[Vec<i32>]) -> Vec<(i32, i32)> {
    intervals
        .iter()
        .filter_map(|row| match row.as_slice() {
            &[start, end] => Some((start, end)),
            _ => None,
        })
        .collect()
}

fn rows(pairs: impl IntoIterator<Item = (i32, i32)>) -> Vec<Vec<i32>> {
    pairs.into_iter().map(|(s, e)| vec![s, e]).collect()
}

/// 57. Insert Interval
///
/// `intervals` is sorted and disjoint; so is the result.
pub fn insert(intervals: Vec<Vec<i32>>, new_interval: Vec<i32>) -> Vec<Vec<i32>> {
    let &[mut start, mut end] = new_interval.as_slice() else {
        return intervals;
    };
    let mut out = Vec::with_capacity(intervals.len() + 1);
    let mut placed = false;
    for (s, e) in pairs(&intervals) {
        if e < start {
            out.push((s, e));
        } else if end < s {
            if !placed {
                out.push((start, end));
                placed = true;
            }
            out.push((s, e));
        } else {
            start = start.min(s);
            end = end.max(e);
        }
    }
    if !placed {
        out.push((start, end));
    }
    rows(out)
}

/// 56. Merge Intervals
pub fn merge(intervals: Vec<Vec<i32>>) -> Vec<Vec<i32>> {
    let mut sorted = pairs(&intervals);
    sorted.sort_unstable();
    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(sorted.len());
    for (s, e) in sorted {
        match merged.last_mut() {
            Some(last) if s <= last.1 => last.1 = last.1.max(e),
            _ => merged.push((s, e)),
        }
    }
    rows(merged)
}

/// 435. Non-overlapping Intervals
///
/// Keeps intervals by earliest end; touching endpoints do not overlap.
pub fn erase_overlap_intervals(intervals: Vec<Vec<i32>>) -> i32 {
    let mut sorted = pairs(&intervals);
    sorted.sort_unstable_by_key(|&(_, e)| e);
    let mut removed = 0;
    let mut boundary = i32::MIN;
    for (s, e) in sorted {
        if s >= boundary {
            boundary = e;
        } else {
            removed += 1;
        }
    }
    removed
}

/// 252. Meeting Rooms
pub fn can_attend_meetings(intervals: Vec<Vec<i32>>) -> bool {
    let mut sorted = pairs(&intervals);
    sorted.sort_unstable();
    sorted.windows(2).all(|w| w[0].1 <= w[1].0)
}

/// 253. Meeting Rooms II
///
/// A min-heap of end times holds the rooms in use.
pub fn min_meeting_rooms(intervals: Vec<Vec<i32>>) -> i32 {
    let mut sorted = pairs(&intervals);
    sorted.sort_unstable();
    let mut ends: BinaryHeap<Reverse<i32>> = BinaryHeap::new();
    for (s, e) in sorted {
        if ends.peek().is_some_and(|&Reverse(end)| end <= s) {
            ends.pop();
        }
        ends.push(Reverse(e));
    }
    ends.len() as i32
}

/// 1851. Minimum Interval to Include Each Query
///
/// Sweeps queries in ascending order; a heap of `(size, end)` holds the
/// intervals that have started, and stale ones are dropped lazily.
pub fn min_interval(intervals: Vec<Vec<i32>>, queries: Vec<i32>) -> Vec<i32> {
    let mut sorted = pairs(&intervals);
    sorted.sort_unstable();
    let mut order: Vec<usize> = (0..queries.len()).collect();
    order.sort_unstable_by_key(|&i| queries[i]);

    let mut answers = vec![-1; queries.len()];
    let mut open: BinaryHeap<Reverse<(i32, i32)>> = BinaryHeap::new();
    let mut next = 0;
    for i in order {
        let q = queries[i];
        while next < sorted.len() && sorted[next].0 <= q {
            let (s, e) = sorted[next];
            open.push(Reverse((e - s + 1, e)));
            next += 1;
        }
        while open.peek().is_some_and(|&Reverse((_, end))| end < q) {
            open.pop();
        }
        if let Some(&Reverse((size, _))) = open.peek() {
            answers[i] = size;
        }
    }
    answers
}

/// 986. Interval List Intersections
pub fn interval_intersection(first_list: Vec<Vec<i32>>, second_list: Vec<Vec<i32>>) -> Vec<Vec<i32>> {
    let (a, b) = (pairs(&first_list), pairs(&second_list));
    let (mut i, mut j) = (0, 0);
    let mut out = Vec::new();
    while i < a.len() && j < b.len() {
        let start = a[i].0.max(b[j].0);
        let end = a[i].1.min(b[j].1);
        if start <= end {
            out.push((start, end));
        }
        if a[i].1 < b[j].1 {
            i += 1;
        } else {
            j += 1;
        }
    }
    rows(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(items: &[[i32; 2]]) -> Vec<Vec<i32>> {
        items.iter().map(|p| p.to_vec()).collect()
    }

    #[test]
    fn insertion() {
        assert_eq!(insert(iv(&[[1, 3], [6, 9]]), vec![2, 5]), iv(&[[1, 5], [6, 9]]));
        assert_eq!(
            insert(iv(&[[1, 2], [3, 5], [6, 7], [8, 10], [12, 16]]), vec![4, 8]),
            iv(&[[1, 2], [3, 10], [12, 16]])
        );
        assert_eq!(insert(Vec::new(), vec![5, 7]), iv(&[[5, 7]]));
        assert_eq!(insert(iv(&[[1, 5]]), vec![6, 8]), iv(&[[1, 5], [6, 8]]));
    }

    #[test]
    fn merging() {
        assert_eq!(merge(iv(&[[1, 3], [2, 6], [8, 10], [15, 18]])), iv(&[[1, 6], [8, 10], [15, 18]]));
        assert_eq!(merge(iv(&[[1, 4], [4, 5]])), iv(&[[1, 5]]));
        assert_eq!(merge(iv(&[[4, 7], [1, 4]])), iv(&[[1, 7]]));
    }

    #[test]
    fn overlaps() {
        assert_eq!(erase_overlap_intervals(iv(&[[1, 2], [2, 3], [3, 4], [1, 3]])), 1);
        assert_eq!(erase_overlap_intervals(iv(&[[1, 2], [1, 2], [1, 2]])), 2);
        assert_eq!(erase_overlap_intervals(iv(&[[1, 2], [2, 3]])), 0);
    }

    #[test]
    fn meeting_rooms() {
        assert!(!can_attend_meetings(iv(&[[0, 30], [5, 10], [15, 20]])));
        assert!(can_attend_meetings(iv(&[[7, 10], [2, 4]])));
        assert_eq!(min_meeting_rooms(iv(&[[0, 30], [5, 10], [15, 20]])), 2);
        assert_eq!(min_meeting_rooms(iv(&[[7, 10], [2, 4]])), 1);
        assert_eq!(min_meeting_rooms(Vec::new()), 0);
    }

    #[test]
    fn query_cover() {
        assert_eq!(
            min_interval(iv(&[[1, 4], [2, 4], [3, 6], [4, 4]]), vec![2, 3, 4, 5]),
            vec![3, 3, 1, 4]
        );
        assert_eq!(
            min_interval(iv(&[[2, 3], [2, 5], [1, 8], [20, 25]]), vec![2, 19, 5, 22]),
            vec![2, -1, 4, 6]
        );
    }

    #[test]
    fn intersections() {
        let a = iv(&[[0, 2], [5, 10], [13, 23], [24, 25]]);
        let b = iv(&[[1, 5], [8, 12], [15, 24], [25, 26]]);
        assert_eq!(
            interval_intersection(a, b),
            iv(&[[1, 2], [5, 5], [8, 10], [15, 23], [24, 24], [25, 25]])
        );
        assert!(interval_intersection(iv(&[[1, 3], [5, 9]]), Vec::new()).is_empty());
    }
}
