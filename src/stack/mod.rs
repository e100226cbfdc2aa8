// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stack exercises: bracket parsing, monotonic stacks and container emulation.

mod emulation;
mod monotonic;
mod parsing;

pub use emulation::{MinStack, MyQueue, MyStack};
pub use monotonic::*;
pub use parsing::*;
