// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Data-structure design exercises.
//!
//! Each type mirrors the class LeetCode asks for: a constructor, then
//! methods whose answers the judge collects into an operation log.
//!
//! | Type                                   | Backing store                          |
//! |----------------------------------------|----------------------------------------|
//! | [`LruCache`], [`LfuCache`]             | index-linked lists in a shared arena   |
//! | [`MyHashSet`], [`MyHashMap`]           | separate chaining over prime buckets   |
//! | [`MyCircularQueue`], [`MyCircularDeque`] | fixed ring buffer                    |
//! | [`UndergroundSystem`], [`HitCounter`]  | hash maps and a time-ordered deque     |

mod cache;
mod hashing;
mod links;
mod ring;
mod tracking;

pub use cache::{LfuCache, LruCache};
pub use hashing::{MyHashMap, MyHashSet};
pub use ring::{MyCircularDeque, MyCircularQueue};
pub use tracking::{HitCounter, UndergroundSystem};
