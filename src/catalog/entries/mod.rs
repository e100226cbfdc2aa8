// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalogue entries, one table per topic.

mod array;
mod backtracking;
mod binary_search;
mod concurrency;
mod design;
mod dp;
mod graph;
mod greedy;
mod heap;
mod intervals;
mod linked_list;
mod math;
mod segment_tree;
mod sliding_window;
mod stack;
mod string;
mod tree;
mod trie;
mod two_pointers;
mod union_find;

use super::Problem;

pub(super) const TOPICS: &[&[Problem]] = &[
    array::PROBLEMS,
    two_pointers::PROBLEMS,
    sliding_window::PROBLEMS,
    stack::PROBLEMS,
    binary_search::PROBLEMS,
    linked_list::PROBLEMS,
    tree::PROBLEMS,
    trie::PROBLEMS,
    heap::PROBLEMS,
    backtracking::PROBLEMS,
    graph::PROBLEMS,
    union_find::PROBLEMS,
    segment_tree::PROBLEMS,
    dp::PROBLEMS,
    greedy::PROBLEMS,
    intervals::PROBLEMS,
    math::PROBLEMS,
    string::PROBLEMS,
    design::PROBLEMS,
    concurrency::PROBLEMS,
];
