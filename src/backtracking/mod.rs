// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive search with pruning.
//!
//! Every search here follows the same shape: extend a partial candidate,
//! recurse, then undo the extension before trying the next choice.

mod boards;
mod combinatorics;
mod strings;

pub use boards::*;
pub use combinatorics::*;
pub use strings::*;
