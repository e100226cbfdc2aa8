// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Array exercises: hashing, prefix sums, in-place rearrangement and matrices.

mod hashing;
mod in_place;
mod matrix;
mod prefix;

pub use hashing::*;
pub use in_place::*;
pub use matrix::*;
pub use prefix::*;
