// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String exercises.
//!
//! | Module     | Covers                                            |
//! |------------|---------------------------------------------------|
//! | `checks`   | predicates: anagrams, palindromes, bijections     |
//! | `parse`    | atoi, KMP substring search, the list codec        |
//! | `format`   | splitting, rewriting and laying out text          |

mod checks;
mod format;
mod parse;

pub use checks::*;
pub use format::*;
pub use parse::*;
