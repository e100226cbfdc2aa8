// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LRU cache against the vector model over arbitrary operation sequences.
//!
//! Keys are folded into a small space so hits, updates and evictions all
//! happen often.

#![no_main]

use arbitrary::Arbitrary;
use leetkit::design::LruCache;
use leetkit::testing::LruModel;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Get(u8),
    Put(u8, i32),
}

#[derive(Arbitrary, Debug)]
struct Session {
    capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|session: Session| {
    let capacity = i32::from(session.capacity % 16);
    let mut cache = LruCache::new(capacity);
    let mut model = LruModel::new(capacity as usize);

    for op in session.ops {
        match op {
            Op::Get(key) => {
                let key = i32::from(key % 32);
                assert_eq!(cache.get(key), model.get(key), "get({key})");
            }
            Op::Put(key, value) => {
                let key = i32::from(key % 32);
                cache.put(key, value);
                model.put(key, value);
            }
        }
        assert_eq!(cache.len(), model.len());
    }
});
