// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dynamic programming.
//!
//! Tables are rolled down to one or two rows wherever a cell only reads the
//! previous row. Recurrences are given in each function's doc comment.

mod grid;
mod knapsack;
mod linear;
mod sequences;
mod strings;

pub use grid::*;
pub use knapsack::*;
pub use linear::*;
pub use sequences::*;
pub use strings::*;
