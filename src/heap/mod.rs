// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Priority queue exercises built on `std::collections::BinaryHeap`.
//!
//! `BinaryHeap` is a max-heap; min-heaps wrap entries in `Reverse`.

mod scheduling;
mod selection;
mod streams;

pub use scheduling::*;
pub use selection::*;
pub use streams::{KthLargest, MedianFinder, Twitter};
