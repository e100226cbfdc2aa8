// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tree codec on arbitrary text.
//!
//! Any string decodes to some tree (unparsable tokens are gaps). Once a
//! string has been through one decode/encode pass it must be a fixed point.

#![no_main]

use leetkit::tree::Codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|text: String| {
    let codec = Codec::new();
    let once = codec.serialize(codec.deserialize(text));
    let twice = codec.serialize(codec.deserialize(once.clone()));
    assert_eq!(once, twice);
});
