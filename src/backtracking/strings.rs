// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searches that assemble strings.

/// 131. Palindrome Partitioning
pub fn partition(s: String) -> Vec<Vec<String>> {
    fn is_palindrome(bytes: &[u8]) -> bool {
        bytes.iter().eq(bytes.iter().rev())
    }
    fn cut(s: &str, start: usize, parts: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
        if start == s.len() {
            out.push(parts.clone());
            return;
        }
        for end in start + 1..=s.len() {
            let Some(piece) = s.get(start..end) else {
                continue;
            };
            if is_palindrome(piece.as_bytes()) {
                parts.push(piece.to_string());
                cut(s, end, parts, out);
                parts.pop();
            }
        }
    }
    let mut out = Vec::new();
    cut(&s, 0, &mut Vec::new(), &mut out);
    out
}

/// 17. Letter Combinations of a Phone Number
pub fn letter_combinations(digits: String) -> Vec<String> {
    const KEYPAD: [&str; 10] = ["", "", "abc", "def", "ghi", "jkl", "mno", "pqrs", "tuv", "wxyz"];
    if digits.is_empty() {
        return Vec::new();
    }
    digits.chars().fold(vec![String::new()], |prefixes, d| {
        let letters = d.to_digit(10).map_or("", |d| KEYPAD[d as usize]);
        prefixes
            .iter()
            .flat_map(|prefix| letters.chars().map(move |c| format!("{prefix}{c}")))
            .collect()
    })
}

/// 22. Generate Parentheses
pub fn generate_parenthesis(n: i32) -> Vec<String> {
    fn grow(open: i32, close: i32, n: i32, current: &mut String, out: &mut Vec<String>) {
        if close == n {
            out.push(current.clone());
            return;
        }
        if open < n {
            current.push('(');
            grow(open + 1, close, n, current, out);
            current.pop();
        }
        if close < open {
            current.push(')');
            grow(open, close + 1, n, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    grow(0, 0, n.max(0), &mut String::new(), &mut out);
    out
}

/// 93. Restore IP Addresses
pub fn restore_ip_addresses(s: String) -> Vec<String> {
    fn valid_octet(part: &str) -> bool {
        match part.len() {
            1 => true,
            2 | 3 => !part.starts_with('0') && part.parse::<u16>().is_ok_and(|v| v <= 255),
            _ => false,
        }
    }
    fn place<'a>(s: &'a str, parts: &mut Vec<&'a str>, out: &mut Vec<String>) {
        if parts.len() == 4 {
            if s.is_empty() {
                out.push(parts.join("."));
            }
            return;
        }
        let remaining = 4 - parts.len();
        if s.len() < remaining || s.len() > remaining * 3 {
            return;
        }
        for len in 1..=3.min(s.len()) {
            let (octet, rest) = s.split_at(len);
            if valid_octet(octet) {
                parts.push(octet);
                place(rest, parts, out);
                parts.pop();
            }
        }
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Vec::new();
    }
    let mut out = Vec::new();
    place(&s, &mut Vec::with_capacity(4), &mut out);
    out
}
