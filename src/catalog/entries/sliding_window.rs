// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::sliding_window::*;

const T: Topic = Topic::SlidingWindow;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 3, "longest-substring-without-repeating-characters",
        "Longest Substring Without Repeating Characters", Medium, Exact,
        |a| answer(length_of_longest_substring(a.get(0)?)),
        r#"["abcabcbb"]"# => "3",
        r#"["bbbbb"]"# => "1",
        r#"["pwwkew"]"# => "3",
        r#"[""]"# => "0"),
    problem!(T; 424, "longest-repeating-character-replacement", "Longest Repeating Character Replacement", Medium, Exact,
        |a| answer(character_replacement(a.get(0)?, a.get(1)?)),
        r#"["ABAB",2]"# => "4",
        r#"["AABABBA",1]"# => "4"),
    problem!(T; 567, "permutation-in-string", "Permutation in String", Medium, Exact,
        |a| answer(check_inclusion(a.get(0)?, a.get(1)?)),
        r#"["ab","eidbaooo"]"# => "true",
        r#"["ab","eidboaoo"]"# => "false"),
    problem!(T; 76, "minimum-window-substring", "Minimum Window Substring", Hard, Exact,
        |a| answer(min_window(a.get(0)?, a.get(1)?)),
        r#"["ADOBECODEBANC","ABC"]"# => r#""BANC""#,
        r#"["a","a"]"# => r#""a""#,
        r#"["a","aa"]"# => r#""""#),
    problem!(T; 239, "sliding-window-maximum", "Sliding Window Maximum", Hard, Exact,
        |a| answer(max_sliding_window(a.get(0)?, a.get(1)?)),
        "[[1,3,-1,-3,5,3,6,7],3]" => "[3,3,5,5,6,7]",
        "[[1],1]" => "[1]"),
    problem!(T; 209, "minimum-size-subarray-sum", "Minimum Size Subarray Sum", Medium, Exact,
        |a| answer(min_sub_array_len(a.get(0)?, a.get(1)?)),
        "[7,[2,3,1,2,4,3]]" => "2",
        "[4,[1,4,4]]" => "1",
        "[11,[1,1,1,1,1,1,1,1]]" => "0"),
    problem!(T; 438, "find-all-anagrams-in-a-string", "Find All Anagrams in a String", Medium, Exact,
        |a| answer(find_anagrams(a.get(0)?, a.get(1)?)),
        r#"["cbaebabacd","abc"]"# => "[0,6]",
        r#"["abab","ab"]"# => "[0,1,2]"),
];
