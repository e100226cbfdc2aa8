// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! atoi never panics, and reads back any number it is handed.

#![no_main]

use arbitrary::Arbitrary;
use leetkit::string::my_atoi;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    spaces: u8,
    number: i64,
    tail: String,
}

fuzz_target!(|input: Input| {
    let _ = my_atoi(input.tail.clone());

    // A tail starting with a digit would extend the number.
    if input.tail.starts_with(|c: char| c.is_ascii_digit()) {
        return;
    }
    let text = format!("{}{}{}", " ".repeat(usize::from(input.spaces % 8)), input.number, input.tail);
    let expected = input.number.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
    assert_eq!(my_atoi(text), expected);
});
