// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Arithmetic, number theory and bit manipulation.

mod bits;
mod numbers;
mod roman;

pub use bits::*;
pub use numbers::*;
pub use roman::*;
