// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Variable and fixed windows over sequences.
//!
//! Every exercise here keeps a window `[left, right]` whose invariant is
//! restored after each extension of `right`. Byte strings are assumed
//! ASCII, as the problem constraints promise.

use std::collections::VecDeque;

/// 3. Longest Substring Without Repeating Characters
pub fn length_of_longest_substring(s: String) -> i32 {
    let mut last_seen = [usize::MAX; 128];
    let mut left = 0;
    let mut best = 0;
    for (right, b) in s.bytes().enumerate() {
        let slot = &mut last_seen[(b & 0x7f) as usize];
        if *slot != usize::MAX && *slot >= left {
            left = *slot + 1;
        }
        *slot = right;
        best = best.max(right + 1 - left);
    }
    best as i32
}

/// 424. Longest Repeating Character Replacement
///
/// The window only needs to grow when a new maximum frequency appears, so
/// the stale `max_freq` never shrinks the answer.
pub fn character_replacement(s: String, k: i32) -> i32 {
    let bytes = s.as_bytes();
    let mut counts = [0i32; 26];
    let mut left = 0;
    let mut max_freq = 0;
    let mut best = 0;
    for right in 0..bytes.len() {
        let c = (bytes[right] - b'A') as usize;
        counts[c] += 1;
        max_freq = max_freq.max(counts[c]);
        while (right - left + 1) as i32 - max_freq > k {
            counts[(bytes[left] - b'A') as usize] -= 1;
            left += 1;
        }
        best = best.max(right - left + 1);
    }
    best as i32
}

/// 567. Permutation in String
pub fn check_inclusion(s1: String, s2: String) -> bool {
    let (pattern, text) = (s1.as_bytes(), s2.as_bytes());
    if pattern.len() > text.len() {
        return false;
    }
    let mut need = [0i32; 26];
    let mut have = [0i32; 26];
    for &b in pattern {
        need[(b - b'a') as usize] += 1;
    }
    for (i, &b) in text.iter().enumerate() {
        have[(b - b'a') as usize] += 1;
        if i >= pattern.len() {
            have[(text[i - pattern.len()] - b'a') as usize] -= 1;
        }
        if have == need {
            return true;
        }
    }
    false
}

/// 76. Minimum Window Substring
///
/// Shortest substring of `s` containing every character of `t` (with
/// multiplicity); empty when none exists.
pub fn min_window(s: String, t: String) -> String {
    let (text, pattern) = (s.as_bytes(), t.as_bytes());
    if pattern.is_empty() || pattern.len() > text.len() {
        return String::new();
    }
    let mut need = [0i32; 128];
    for &b in pattern {
        need[b as usize] += 1;
    }
    let mut missing = pattern.len();
    let mut left = 0;
    let mut best: Option<(usize, usize)> = None;

    for (right, &b) in text.iter().enumerate() {
        if need[b as usize] > 0 {
            missing -= 1;
        }
        need[b as usize] -= 1;

        while missing == 0 {
            if best.map_or(true, |(lo, hi)| right + 1 - left < hi - lo) {
                best = Some((left, right + 1));
            }
            let out = text[left] as usize;
            need[out] += 1;
            if need[out] > 0 {
                missing += 1;
            }
            left += 1;
        }
    }

    best.map_or_else(String::new, |(lo, hi)| s[lo..hi].to_string())
}

/// 239. Sliding Window Maximum
///
/// Monotonic deque of indices with decreasing values.
pub fn max_sliding_window(nums: Vec<i32>, k: i32) -> Vec<i32> {
    let k = k as usize;
    let mut window: VecDeque<usize> = VecDeque::new();
    let mut maxima = Vec::with_capacity(nums.len().saturating_sub(k) + 1);
    for i in 0..nums.len() {
        if window.front().is_some_and(|&front| front + k <= i) {
            window.pop_front();
        }
        while window.back().is_some_and(|&back| nums[back] <= nums[i]) {
            window.pop_back();
        }
        window.push_back(i);
        if i + 1 >= k {
            if let Some(&front) = window.front() {
                maxima.push(nums[front]);
            }
        }
    }
    maxima
}

/// 209. Minimum Size Subarray Sum
///
/// Positive inputs only; 0 when no window reaches `target`.
pub fn min_sub_array_len(target: i32, nums: Vec<i32>) -> i32 {
    let mut left = 0;
    let mut sum = 0;
    let mut best = usize::MAX;
    for right in 0..nums.len() {
        sum += nums[right];
        while sum >= target {
            best = best.min(right + 1 - left);
            sum -= nums[left];
            left += 1;
        }
    }
    if best == usize::MAX {
        0
    } else {
        best as i32
    }
}

/// 438. Find All Anagrams in a String
pub fn find_anagrams(s: String, p: String) -> Vec<i32> {
    let (text, pattern) = (s.as_bytes(), p.as_bytes());
    let mut starts = Vec::new();
    if pattern.len() > text.len() {
        return starts;
    }
    let mut need = [0i32; 26];
    let mut have = [0i32; 26];
    for &b in pattern {
        need[(b - b'a') as usize] += 1;
    }
    for (i, &b) in text.iter().enumerate() {
        have[(b - b'a') as usize] += 1;
        if i >= pattern.len() {
            have[(text[i - pattern.len()] - b'a') as usize] -= 1;
        }
        if i + 1 >= pattern.len() && have == need {
            starts.push((i + 1 - pattern.len()) as i32);
        }
    }
    starts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_substring() {
        assert_eq!(length_of_longest_substring("abcabcbb".into()), 3);
        assert_eq!(length_of_longest_substring("bbbbb".into()), 1);
        assert_eq!(length_of_longest_substring("pwwkew".into()), 3);
        assert_eq!(length_of_longest_substring("".into()), 0);
        assert_eq!(length_of_longest_substring("abba".into()), 2);
        assert_eq!(length_of_longest_substring(" ".into()), 1);
    }

    #[test]
    fn replacement() {
        assert_eq!(character_replacement("ABAB".into(), 2), 4);
        assert_eq!(character_replacement("AABABBA".into(), 1), 4);
    }

    #[test]
    fn inclusion() {
        assert!(check_inclusion("ab".into(), "eidbaooo".into()));
        assert!(!check_inclusion("ab".into(), "eidboaoo".into()));
        assert!(!check_inclusion("abc".into(), "ab".into()));
    }

    #[test]
    fn minimum_window() {
        assert_eq!(min_window("ADOBECODEBANC".into(), "ABC".into()), "BANC");
        assert_eq!(min_window("a".into(), "a".into()), "a");
        assert_eq!(min_window("a".into(), "aa".into()), "");
        assert_eq!(min_window("aa".into(), "aa".into()), "aa");
    }

    #[test]
    fn window_maximum() {
        assert_eq!(
            max_sliding_window(vec![1, 3, -1, -3, 5, 3, 6, 7], 3),
            vec![3, 3, 5, 5, 6, 7]
        );
        assert_eq!(max_sliding_window(vec![1], 1), vec![1]);
        assert_eq!(max_sliding_window(vec![9, 8, 7], 3), vec![9]);
    }

    #[test]
    fn shortest_subarray() {
        assert_eq!(min_sub_array_len(7, vec![2, 3, 1, 2, 4, 3]), 2);
        assert_eq!(min_sub_array_len(4, vec![1, 4, 4]), 1);
        assert_eq!(min_sub_array_len(11, vec![1, 1, 1, 1, 1, 1, 1, 1]), 0);
    }

    #[test]
    fn anagram_starts() {
        assert_eq!(find_anagrams("cbaebabacd".into(), "abc".into()), vec![0, 6]);
        assert_eq!(find_anagrams("abab".into(), "ab".into()), vec![0, 1, 2]);
        assert!(find_anagrams("a".into(), "ab".into()).is_empty());
    }
}
