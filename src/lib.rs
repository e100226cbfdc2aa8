// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Classic algorithm exercises with a local judge.
//!
//! Every exercise is a plain function (or, for design problems, a type) with
//! the signature its problem statement asks for, tagged `/// NNN. Title` with
//! the LeetCode number. The [`catalog`] registers each one with the examples
//! from its statement, and the [`judge`] replays them.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────┐     ┌──────────────┐
//! │ structures   │────▶│ topic modules    │────▶│  catalog     │
//! │ (ListNode,   │     │ (array, tree,    │     │ (Problem,    │
//! │  TreeNode)   │     │  graph, dp, ...) │     │  Args)       │
//! └──────────────┘     └──────────────────┘     └──────┬───────┘
//!                                                      │
//!                                   ┌──────────────────▼───────┐
//!                                   │ judge (Verdict, Report)  │
//!                                   │ cli (list/show/run/check)│
//!                                   └──────────────────────────┘
//! ```
//!
//! # Topics
//!
//! | Module           | Flavour                                          |
//! |------------------|--------------------------------------------------|
//! | `array`          | hashing, prefix sums, in-place rewrites, matrices |
//! | `two_pointers`   | converging and chasing indices                   |
//! | `sliding_window` | variable windows over strings and arrays         |
//! | `stack`          | monotonic stacks, parsers, stack emulation       |
//! | `binary_search`  | bounds, rotated arrays, search on the answer     |
//! | `linked_list`    | reversal, merging, cycles, removal               |
//! | `tree`           | traversal, properties, paths, BSTs, codecs       |
//! | `trie`           | prefix trees                                     |
//! | `heap`           | selection, scheduling, streaming medians         |
//! | `backtracking`   | subsets, permutations, boards                    |
//! | `graph`          | grids, topological order, shortest paths         |
//! | `union_find`     | disjoint sets                                    |
//! | `segment_tree`   | range queries, Fenwick trees, sweeps             |
//! | `dp`             | linear, knapsack, grid, sequence, string DP      |
//! | `greedy`         | single-pass greedy choices                       |
//! | `intervals`      | merging and scheduling ranges                    |
//! | `math`           | arithmetic, number theory, bits                  |
//! | `string`         | predicates, parsing, formatting                  |
//! | `design`         | caches, hash containers, ring buffers            |
//! | `concurrency`    | thread ordering with a mutex and condvar         |
//!
//! # Usage
//!
//! ```
//! use leetkit::{list, tree};
//! use leetkit::structures::list_to_vec;
//!
//! let reversed = leetkit::linked_list::reverse_list(list![1, 2, 3]);
//! assert_eq!(list_to_vec(&reversed), vec![3, 2, 1]);
//! assert_eq!(leetkit::tree::max_depth(tree![3, 9, 20, null, null, 15, 7]), 3);
//! ```

pub mod structures;

pub mod array;
pub mod backtracking;
pub mod binary_search;
pub mod concurrency;
pub mod design;
pub mod dp;
pub mod graph;
pub mod greedy;
pub mod heap;
pub mod intervals;
pub mod linked_list;
pub mod math;
pub mod segment_tree;
pub mod sliding_window;
pub mod stack;
pub mod string;
pub mod tree;
pub mod trie;
pub mod two_pointers;
pub mod union_find;

pub mod catalog;
mod error;
pub mod judge;
pub mod logging;

#[doc(hidden)]
pub mod testing;

pub use error::{Result, SolveError};
