// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Range module against one flag per point.

#![no_main]

use arbitrary::Arbitrary;
use leetkit::segment_tree::RangeModule;
use leetkit::testing::RangeModel;
use libfuzzer_sys::fuzz_target;

const SIZE: u8 = 128;

#[derive(Arbitrary, Debug)]
enum Op {
    Add(u8, u8),
    Remove(u8, u8),
    Query(u8, u8),
}

/// A non-empty half-open span inside `0..SIZE`.
fn span(a: u8, b: u8) -> (i32, i32) {
    let (a, b) = (a % SIZE, b % SIZE);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (i32::from(lo), i32::from(hi) + 1)
}

fuzz_target!(|ops: Vec<Op>| {
    let mut module = RangeModule::new();
    let mut model = RangeModel::new(usize::from(SIZE) + 1);

    for op in ops {
        match op {
            Op::Add(a, b) => {
                let (l, r) = span(a, b);
                module.add_range(l, r);
                model.add(l, r);
            }
            Op::Remove(a, b) => {
                let (l, r) = span(a, b);
                module.remove_range(l, r);
                model.remove(l, r);
            }
            Op::Query(a, b) => {
                let (l, r) = span(a, b);
                assert_eq!(module.query_range(l, r), model.query(l, r), "query({l}, {r})");
            }
        }
    }
});
