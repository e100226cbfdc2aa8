// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parsing and searching.
//!
//! [`encode`] and [`decode`] form a length-prefixed codec: every string is
//! written as `<byte length>#<bytes>`, so any content (including `#` and
//! digits) survives the round trip.
//!
//! ```text
//!   ["lint", "", "a#b"]  ──encode──►  "4#lint0#3#a#b"
//! ```

/// 8. String to Integer (atoi)
///
/// Skips leading spaces, reads an optional sign and then digits until the
/// first non-digit. Out-of-range values clamp to the `i32` bounds.
pub fn my_atoi(s: String) -> i32 {
    let mut bytes = s.bytes().skip_while(|&b| b == b' ').peekable();
    let negative = match bytes.peek() {
        Some(b'-') => {
            bytes.next();
            true
        }
        Some(b'+') => {
            bytes.next();
            false
        }
        _ => false,
    };
    let mut value: i64 = 0;
    for b in bytes.take_while(u8::is_ascii_digit) {
        value = value * 10 + i64::from(b - b'0');
        if value > i64::from(i32::MAX) + 1 {
            break;
        }
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Knuth-Morris-Pratt failure table: `fail[i]` is the length of the longest
/// proper prefix of `pattern[..=i]` that is also its suffix.
fn failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut fail = vec![0; pattern.len()];
    let mut k = 0;
    for i in 1..pattern.len() {
        while k > 0 && pattern[i] != pattern[k] {
            k = fail[k - 1];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        fail[i] = k;
    }
    fail
}

/// 28. Find the Index of the First Occurrence in a String
///
/// KMP search in O(n + m). Returns the byte index of the first match, 0 for
/// an empty needle and -1 when the needle is absent.
pub fn str_str(haystack: String, needle: String) -> i32 {
    let (text, pattern) = (haystack.as_bytes(), needle.as_bytes());
    if pattern.is_empty() {
        return 0;
    }
    let fail = failure_table(pattern);
    let mut k = 0;
    for (i, &b) in text.iter().enumerate() {
        while k > 0 && b != pattern[k] {
            k = fail[k - 1];
        }
        if b == pattern[k] {
            k += 1;
        }
        if k == pattern.len() {
            return (i + 1 - k) as i32;
        }
    }
    -1
}

/// 271. Encode and Decode Strings
pub fn encode(strs: Vec<String>) -> String {
    strs.iter().fold(String::new(), |mut out, s| {
        out.push_str(&s.len().to_string());
        out.push('#');
        out.push_str(s);
        out
    })
}

/// Inverse of [`encode`]. Stops at the first malformed frame, returning the
/// strings decoded so far.
pub fn decode(s: String) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s.as_str();
    while let Some((len, tail)) = rest.split_once('#') {
        let Ok(len) = len.parse::<usize>() else { break };
        let Some(item) = tail.get(..len) else { break };
        out.push(item.to_string());
        rest = &tail[len..];
    }
    out
}
