// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Coverage over huge coordinate ranges.
//!
//! [`RangeModule`] and [`MyCalendarThree`] grow their trees lazily: a node
//! only gets children once an update splits it, so memory tracks the number
//! of operations rather than the coordinate range.

use std::ops::Range;

/// Coordinates handled by the dynamic trees.
const DOMAIN: Range<i64> = 0..1_000_000_001;

/// Child indices of a dynamic node; root is node 0, so 0 never names a child.
#[derive(Debug, Clone, Copy, Default)]
struct Children {
    left: usize,
    right: usize,
}

impl Children {
    fn exist(self) -> bool {
        self.left != 0
    }
}

fn midpoint(span: &Range<i64>) -> i64 {
    span.start + (span.end - span.start) / 2
}

#[derive(Debug, Clone, Copy, Default)]
struct CoverNode {
    covered: bool,
    children: Children,
}

/// 715. Range Module
///
/// A node without children is uniformly covered or uncovered. Assigning a
/// whole node drops its subtree, whose slots go on a free list for later
/// splits, so the arena never exceeds the largest live tree.
#[derive(Debug, Clone)]
pub struct RangeModule {
    nodes: Vec<CoverNode>,
    free: Vec<usize>,
}

impl Default for RangeModule {
    fn default() -> Self {
        RangeModule {
            nodes: vec![CoverNode::default()],
            free: Vec::new(),
        }
    }
}

impl RangeModule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `[left, right)` as tracked.
    pub fn add_range(&mut self, left: i32, right: i32) {
        self.assign(0, DOMAIN, &(i64::from(left)..i64::from(right)), true);
    }

    /// Whether every point of `[left, right)` is tracked.
    pub fn query_range(&self, left: i32, right: i32) -> bool {
        self.covers(0, DOMAIN, &(i64::from(left)..i64::from(right)))
    }

    /// Stops tracking `[left, right)`.
    pub fn remove_range(&mut self, left: i32, right: i32) {
        self.assign(0, DOMAIN, &(i64::from(left)..i64::from(right)), false);
    }

    fn alloc(&mut self, covered: bool) -> usize {
        let leaf = CoverNode { covered, ..CoverNode::default() };
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = leaf;
                slot
            }
            None => {
                self.nodes.push(leaf);
                self.nodes.len() - 1
            }
        }
    }

    /// Returns every descendant of `node` to the free list.
    fn release(&mut self, node: usize) {
        let children = std::mem::take(&mut self.nodes[node].children);
        if children.exist() {
            self.release(children.left);
            self.release(children.right);
            self.free.extend([children.left, children.right]);
        }
    }

    fn split(&mut self, node: usize) -> Children {
        if !self.nodes[node].children.exist() {
            let covered = self.nodes[node].covered;
            let left = self.alloc(covered);
            let right = self.alloc(covered);
            self.nodes[node].children = Children { left, right };
        }
        self.nodes[node].children
    }

    fn assign(&mut self, node: usize, span: Range<i64>, target: &Range<i64>, covered: bool) {
        if span.start >= target.end || span.end <= target.start {
            return;
        }
        if target.start <= span.start && span.end <= target.end {
            self.release(node);
            self.nodes[node].covered = covered;
            return;
        }
        let children = self.split(node);
        let mid = midpoint(&span);
        self.assign(children.left, span.start..mid, target, covered);
        self.assign(children.right, mid..span.end, target, covered);
        self.nodes[node].covered =
            self.nodes[children.left].covered && self.nodes[children.right].covered;
    }

    fn covers(&self, node: usize, span: Range<i64>, target: &Range<i64>) -> bool {
        if span.start >= target.end || span.end <= target.start {
            return true;
        }
        let here = self.nodes[node];
        if here.covered || !here.children.exist() {
            return here.covered;
        }
        let mid = midpoint(&span);
        self.covers(here.children.left, span.start..mid, target)
            && self.covers(here.children.right, mid..span.end, target)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct CountNode {
    max: i32,
    pending: i32,
    children: Children,
}

/// 732. My Calendar III
///
/// Range-add of 1 per booking; the root's maximum is the largest number of
/// simultaneous bookings.
#[derive(Debug, Clone)]
pub struct MyCalendarThree {
    nodes: Vec<CountNode>,
}

impl Default for MyCalendarThree {
    fn default() -> Self {
        MyCalendarThree {
            nodes: vec![CountNode::default()],
        }
    }
}

impl MyCalendarThree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books `[start_time, end_time)` and returns the maximum overlap so far.
    pub fn book(&mut self, start_time: i32, end_time: i32) -> i32 {
        self.add(0, DOMAIN, &(i64::from(start_time)..i64::from(end_time)));
        self.nodes[0].max
    }

    fn push_down(&mut self, node: usize) -> Children {
        if !self.nodes[node].children.exist() {
            let left = self.nodes.len();
            self.nodes.push(CountNode::default());
            self.nodes.push(CountNode::default());
            self.nodes[node].children = Children { left, right: left + 1 };
        }
        let children = self.nodes[node].children;
        let pending = std::mem::take(&mut self.nodes[node].pending);
        for child in [children.left, children.right] {
            self.nodes[child].max += pending;
            self.nodes[child].pending += pending;
        }
        children
    }

    fn add(&mut self, node: usize, span: Range<i64>, target: &Range<i64>) {
        if span.start >= target.end || span.end <= target.start {
            return;
        }
        if target.start <= span.start && span.end <= target.end {
            self.nodes[node].max += 1;
            self.nodes[node].pending += 1;
            return;
        }
        let children = self.push_down(node);
        let mid = midpoint(&span);
        self.add(children.left, span.start..mid, target);
        self.add(children.right, mid..span.end, target);
        self.nodes[node].max = self.nodes[children.left].max.max(self.nodes[children.right].max);
    }
}

/// 850. Rectangle Area II
///
/// Total area covered by `[x1, y1, x2, y2]` rectangles, modulo 1e9+7.
/// Sweeps x; a tree over compressed y tracks how many rectangles cover each
/// band and the covered length.
pub fn rectangle_area(rectangles: Vec<Vec<i32>>) -> i32 {
    const MOD: i64 = 1_000_000_007;

    struct Sweep {
        ys: Vec<i64>,
        count: Vec<i32>,
        covered: Vec<i64>,
    }

    impl Sweep {
        fn update(&mut self, node: usize, span: Range<usize>, target: &Range<usize>, delta: i32) {
            if span.start >= target.end || span.end <= target.start {
                return;
            }
            if target.start <= span.start && span.end <= target.end {
                self.count[node] += delta;
            } else {
                let mid = span.start + span.len() / 2;
                self.update(2 * node, span.start..mid, target, delta);
                self.update(2 * node + 1, mid..span.end, target, delta);
            }
            self.covered[node] = if self.count[node] > 0 {
                self.ys[span.end] - self.ys[span.start]
            } else if span.len() == 1 {
                0
            } else {
                self.covered[2 * node] + self.covered[2 * node + 1]
            };
        }
    }

    // (x, delta, y1, y2)
    let mut events = Vec::with_capacity(rectangles.len() * 2);
    let mut ys = Vec::with_capacity(rectangles.len() * 2);
    for rect in &rectangles {
        let &[x1, y1, x2, y2] = rect.as_slice() else { continue };
        if x1 >= x2 || y1 >= y2 {
            continue;
        }
        let (x1, y1, x2, y2) = (i64::from(x1), i64::from(y1), i64::from(x2), i64::from(y2));
        events.push((x1, 1, y1, y2));
        events.push((x2, -1, y1, y2));
        ys.extend([y1, y2]);
    }
    if events.is_empty() {
        return 0;
    }
    ys.sort_unstable();
    ys.dedup();
    events.sort_unstable();

    let bands = ys.len() - 1;
    let mut sweep = Sweep {
        ys,
        count: vec![0; 4 * bands],
        covered: vec![0; 4 * bands],
    };
    let mut area = 0i64;
    let mut last_x = events[0].0;
    for (x, delta, y1, y2) in events {
        area = (area + sweep.covered[1] * (x - last_x)) % MOD;
        last_x = x;
        let band = |y: i64| sweep.ys.partition_point(|&v| v < y);
        let target = band(y1)..band(y2);
        sweep.update(1, 0..bands, &target, delta);
    }
    area as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_module() {
        let mut ranges = RangeModule::new();
        ranges.add_range(10, 20);
        ranges.remove_range(14, 16);
        assert!(ranges.query_range(10, 14));
        assert!(!ranges.query_range(13, 15));
        assert!(ranges.query_range(16, 17));
    }

    #[test]
    fn range_module_merges_and_splits() {
        let mut ranges = RangeModule::new();
        assert!(!ranges.query_range(1, 2));
        ranges.add_range(1, 5);
        ranges.add_range(5, 9);
        assert!(ranges.query_range(1, 9));
        ranges.remove_range(3, 4);
        assert!(!ranges.query_range(1, 9));
        assert!(ranges.query_range(4, 9));
        ranges.add_range(2, 8);
        assert!(ranges.query_range(1, 9));
        ranges.add_range(1, 1_000_000_000);
        assert!(ranges.query_range(999_999_998, 1_000_000_000));
    }

    #[test]
    fn range_module_reuses_released_nodes() {
        let mut ranges = RangeModule::new();
        ranges.add_range(10, 20);
        ranges.remove_range(0, 1_000_000_000);
        let arena = ranges.nodes.len();
        for i in 0..200 {
            ranges.add_range(10 + i, 20 + 3 * i);
            assert!(ranges.query_range(10 + i, 20 + 3 * i));
            ranges.remove_range(0, 1_000_000_000);
            assert!(!ranges.query_range(10 + i, 11 + i));
        }
        assert!(ranges.nodes.len() <= arena + 2 * 64, "arena grew to {}", ranges.nodes.len());
    }

    #[test]
    fn calendar_three() {
        let mut calendar = MyCalendarThree::new();
        let booked: Vec<i32> = [(10, 20), (50, 60), (10, 40), (5, 15), (5, 10), (25, 55)]
            .into_iter()
            .map(|(s, e)| calendar.book(s, e))
            .collect();
        assert_eq!(booked, vec![1, 1, 2, 3, 3, 3]);
    }

    #[test]
    fn rectangle_union_area() {
        let rects = vec![vec![0, 0, 2, 2], vec![1, 0, 2, 3], vec![1, 0, 3, 1]];
        assert_eq!(rectangle_area(rects), 6);
        assert_eq!(rectangle_area(vec![vec![0, 0, 1_000_000_000, 1_000_000_000]]), 49);
        assert_eq!(rectangle_area(Vec::new()), 0);
    }
}
