// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over sorted data, rotated data and answer spaces.
//!
//! Searches use half-open ranges `[lo, hi)` unless noted otherwise.

mod answer;
mod bounds;
mod rotated;
mod time_map;

pub use answer::*;
pub use bounds::*;
pub use rotated::*;
pub use time_map::TimeMap;
