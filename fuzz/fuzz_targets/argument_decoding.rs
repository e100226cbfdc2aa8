// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Argument decoding under adversarial input.
//!
//! `leetkit run` feeds whatever the user typed to the decoder. Garbage should
//! come back as an error, never a panic.

#![no_main]

use leetkit::catalog::Args;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(args) = Args::parse(text) else {
        return;
    };

    for index in 0..args.len() {
        let _ = args.list(index);
        let _ = args.lists(index);
        let _ = args.tree(index);
        let _ = args.get::<Vec<Vec<char>>>(index);
        let _ = args.get::<Vec<String>>(index);
    }
    let _ = args.operations();

    // Missing arguments are an error, not an index panic.
    assert!(args.value(args.len()).is_err());
});
