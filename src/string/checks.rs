// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Yes/no questions about strings.

use std::collections::HashMap;

/// 242. Valid Anagram
pub fn is_anagram(s: String, t: String) -> bool {
    if s.len() != t.len() {
        return false;
    }
    let mut counts: HashMap<char, i32> = HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_default() += 1;
    }
    for c in t.chars() {
        let slot = counts.entry(c).or_default();
        *slot -= 1;
        if *slot < 0 {
            return false;
        }
    }
    true
}

/// 125. Valid Palindrome
///
/// Only ASCII alphanumerics count, compared case-insensitively.
pub fn is_palindrome(s: String) -> bool {
    let cleaned: Vec<u8> = s
        .bytes()
        .filter(u8::is_ascii_alphanumeric)
        .map(|b| b.to_ascii_lowercase())
        .collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

fn is_palindrome_range(s: &[u8], mut lo: usize, mut hi: usize) -> bool {
    while lo < hi {
        if s[lo] != s[hi] {
            return false;
        }
        lo += 1;
        hi -= 1;
    }
    true
}

/// 680. Valid Palindrome II
///
/// At most one character may be deleted.
pub fn valid_palindrome_ii(s: String) -> bool {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return true;
    }
    let (mut lo, mut hi) = (0, bytes.len() - 1);
    while lo < hi {
        if bytes[lo] != bytes[hi] {
            return is_palindrome_range(bytes, lo + 1, hi) || is_palindrome_range(bytes, lo, hi - 1);
        }
        lo += 1;
        hi -= 1;
    }
    true
}

/// Both directions of the mapping must be functions.
fn is_bijection<A, B>(pairs: impl Iterator<Item = (A, B)>) -> bool
where
    A: Eq + std::hash::Hash + Copy,
    B: Eq + std::hash::Hash + Copy,
{
    let mut forward: HashMap<A, B> = HashMap::new();
    let mut backward: HashMap<B, A> = HashMap::new();
    for (a, b) in pairs {
        if *forward.entry(a).or_insert(b) != b || *backward.entry(b).or_insert(a) != a {
            return false;
        }
    }
    true
}

/// 205. Isomorphic Strings
pub fn is_isomorphic(s: String, t: String) -> bool {
    s.chars().count() == t.chars().count() && is_bijection(s.chars().zip(t.chars()))
}

/// 290. Word Pattern
pub fn word_pattern(pattern: String, s: String) -> bool {
    let words: Vec<&str> = s.split_whitespace().collect();
    pattern.chars().count() == words.len() && is_bijection(pattern.chars().zip(words.iter().copied()))
}

/// 459. Repeated Substring Pattern
///
/// `s` is a repetition iff it occurs inside `(s + s)` with the first and
/// last characters removed.
pub fn repeated_substring_pattern(s: String) -> bool {
    let (Some(first), Some(last)) = (s.chars().next(), s.chars().last()) else {
        return false;
    };
    if s.chars().nth(1).is_none() {
        return false;
    }
    let doubled = format!("{s}{s}");
    doubled[first.len_utf8()..doubled.len() - last.len_utf8()].contains(s.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anagrams() {
        assert!(is_anagram("anagram".into(), "nagaram".into()));
        assert!(!is_anagram("rat".into(), "car".into()));
        assert!(!is_anagram("ab".into(), "a".into()));
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome("A man, a plan, a canal: Panama".into()));
        assert!(!is_palindrome("race a car".into()));
        assert!(is_palindrome(" ".into()));
        assert!(valid_palindrome_ii("aba".into()));
        assert!(valid_palindrome_ii("abca".into()));
        assert!(!valid_palindrome_ii("abc".into()));
        assert!(valid_palindrome_ii("".into()));
    }

    #[test]
    fn bijections() {
        assert!(is_isomorphic("egg".into(), "add".into()));
        assert!(!is_isomorphic("foo".into(), "bar".into()));
        assert!(is_isomorphic("paper".into(), "title".into()));
        assert!(!is_isomorphic("badc".into(), "baba".into()));
        assert!(word_pattern("abba".into(), "dog cat cat dog".into()));
        assert!(!word_pattern("abba".into(), "dog cat cat fish".into()));
        assert!(!word_pattern("aaaa".into(), "dog cat cat dog".into()));
        assert!(!word_pattern("abba".into(), "dog dog dog dog".into()));
        assert!(!word_pattern("aaa".into(), "aa aa aa aa".into()));
    }

    #[test]
    fn repetition() {
        assert!(repeated_substring_pattern("abab".into()));
        assert!(!repeated_substring_pattern("aba".into()));
        assert!(repeated_substring_pattern("abcabcabcabc".into()));
        assert!(!repeated_substring_pattern("a".into()));
    }
}
