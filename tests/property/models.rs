// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Design exercises driven by random operation sequences, checked step by
//! step against reference models.

use leetkit::design::LruCache;
use leetkit::heap::MedianFinder;
use leetkit::segment_tree::{falling_squares, rectangle_area, Fenwick, MyCalendarThree, NumArray, RangeModule};
use leetkit::testing::{falling_squares_cells, rectangle_area_cells, CalendarModel, LruModel, RangeModel};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum CacheOp {
    Get(i32),
    Put(i32, i32),
}

fn cache_op() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (0i32..8).prop_map(CacheOp::Get),
        (0i32..8, 0i32..100).prop_map(|(k, v)| CacheOp::Put(k, v)),
    ]
}

#[derive(Debug, Clone, Copy)]
enum RangeOp {
    Add(i32, i32),
    Remove(i32, i32),
    Query(i32, i32),
}

const RANGE_SIZE: i32 = 64;

fn span() -> impl Strategy<Value = (i32, i32)> {
    (0..RANGE_SIZE, 1..=16i32).prop_map(|(l, len)| (l, (l + len).min(RANGE_SIZE)))
}

fn range_op() -> impl Strategy<Value = RangeOp> {
    prop_oneof![
        span().prop_map(|(l, r)| RangeOp::Add(l, r)),
        span().prop_map(|(l, r)| RangeOp::Remove(l, r)),
        span().prop_map(|(l, r)| RangeOp::Query(l, r)),
    ]
}

proptest! {
    /// The slab-backed LRU evicts exactly what the vector model evicts.
    #[test]
    fn prop_lru_matches_model(capacity in 0i32..5, ops in prop::collection::vec(cache_op(), 0..60)) {
        let mut cache = LruCache::new(capacity);
        let mut model = LruModel::new(capacity as usize);
        for op in ops {
            match op {
                CacheOp::Get(k) => prop_assert_eq!(cache.get(k), model.get(k), "get({})", k),
                CacheOp::Put(k, v) => {
                    cache.put(k, v);
                    model.put(k, v);
                }
            }
            prop_assert_eq!(cache.len(), model.len());
        }
    }

    /// The lazily split coverage tree answers like one flag per point.
    #[test]
    fn prop_range_module_matches_model(ops in prop::collection::vec(range_op(), 0..40)) {
        let mut module = RangeModule::new();
        let mut model = RangeModel::new(RANGE_SIZE as usize);
        for op in ops {
            match op {
                RangeOp::Add(l, r) => {
                    module.add_range(l, r);
                    model.add(l, r);
                }
                RangeOp::Remove(l, r) => {
                    module.remove_range(l, r);
                    model.remove(l, r);
                }
                RangeOp::Query(l, r) => {
                    prop_assert_eq!(module.query_range(l, r), model.query(l, r), "query({}, {})", l, r);
                }
            }
        }
    }

    /// The compressed max-assign tree agrees with a per-cell skyline after
    /// every drop.
    #[test]
    fn prop_falling_squares_match_skyline(squares in prop::collection::vec(span(), 1..25)) {
        let positions: Vec<Vec<i32>> = squares.iter().map(|&(l, r)| vec![l, r - l]).collect();
        let cells: Vec<(i32, i32)> = squares.iter().map(|&(l, r)| (l, r - l)).collect();
        prop_assert_eq!(
            falling_squares(positions),
            falling_squares_cells(RANGE_SIZE as usize, &cells)
        );
    }

    /// Every booking's answer equals the highest per-point count so far.
    #[test]
    fn prop_calendar_three_matches_counts(bookings in prop::collection::vec(span(), 1..30)) {
        let mut calendar = MyCalendarThree::new();
        let mut model = CalendarModel::new(RANGE_SIZE as usize);
        for (start, end) in bookings {
            prop_assert_eq!(calendar.book(start, end), model.book(start, end), "book({}, {})", start, end);
        }
    }

    /// The sweep's union area equals counting covered grid cells.
    #[test]
    fn prop_rectangle_area_matches_grid(rects in prop::collection::vec((span(), span()), 0..12)) {
        let corners: Vec<[i32; 4]> = rects.iter().map(|&((x1, x2), (y1, y2))| [x1, y1, x2, y2]).collect();
        let input: Vec<Vec<i32>> = corners.iter().map(|c| c.to_vec()).collect();
        prop_assert_eq!(
            i64::from(rectangle_area(input)),
            rectangle_area_cells(RANGE_SIZE as usize, &corners)
        );
    }

    /// Segment-tree range sums match summing the slice after every update.
    #[test]
    fn prop_num_array_matches_slice(
        mut nums in prop::collection::vec(-100i32..100, 1..30),
        updates in prop::collection::vec((any::<prop::sample::Index>(), -100i32..100), 0..20),
    ) {
        let mut array = NumArray::new(nums.clone());
        for (at, val) in updates {
            let i = at.index(nums.len());
            nums[i] = val;
            array.update(i as i32, val);
            for left in 0..nums.len() {
                for right in left..nums.len() {
                    let expected: i32 = nums[left..=right].iter().sum();
                    prop_assert_eq!(array.sum_range(left as i32, right as i32), expected);
                }
            }
        }
    }

    /// Fenwick prefixes match running sums.
    #[test]
    fn prop_fenwick_prefix_sums(adds in prop::collection::vec((0usize..20, -50i64..50), 0..40)) {
        let mut tree = Fenwick::new(20);
        let mut plain = [0i64; 20];
        for (i, delta) in adds {
            tree.add(i, delta);
            plain[i] += delta;
        }
        for end in 0..=20 {
            prop_assert_eq!(tree.prefix(end), plain[..end].iter().sum::<i64>());
        }
    }

    /// The two-heap median matches sorting the stream so far.
    #[test]
    fn prop_median_matches_sorting(stream in prop::collection::vec(-1000i32..1000, 1..50)) {
        let mut finder = MedianFinder::new();
        let mut seen = Vec::new();
        for x in stream {
            finder.add_num(x);
            seen.push(x);
            seen.sort_unstable();
            let n = seen.len();
            let expected = if n % 2 == 1 {
                f64::from(seen[n / 2])
            } else {
                (f64::from(seen[n / 2 - 1]) + f64::from(seen[n / 2])) / 2.0
            };
            prop_assert!((finder.find_median() - expected).abs() < 1e-9);
        }
    }
}
