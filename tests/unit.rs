// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Unit tests for individual components.

mod common;

#[path = "unit/structures.rs"]
mod structures;

#[path = "unit/arguments.rs"]
mod arguments;

#[path = "unit/replay.rs"]
mod replay;

#[path = "unit/judge.rs"]
mod judge;
