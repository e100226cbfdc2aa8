// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::dp::*;

const T: Topic = Topic::Dp;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 62, "unique-paths", "Unique Paths", Medium, Exact,
        |a| answer(unique_paths(a.get(0)?, a.get(1)?)),
        "[3,7]" => "28",
        "[3,2]" => "3"),
    problem!(T; 63, "unique-paths-ii", "Unique Paths II", Medium, Exact,
        |a| answer(unique_paths_with_obstacles(a.get(0)?)),
        "[[[0,0,0],[0,1,0],[0,0,0]]]" => "2",
        "[[[0,1],[0,0]]]" => "1"),
    problem!(T; 64, "minimum-path-sum", "Minimum Path Sum", Medium, Exact,
        |a| answer(min_path_sum(a.get(0)?)),
        "[[[1,3,1],[1,5,1],[4,2,1]]]" => "7",
        "[[[1,2,3],[4,5,6]]]" => "12"),
    problem!(T; 120, "triangle", "Triangle", Medium, Exact,
        |a| answer(minimum_total(a.get(0)?)),
        "[[[2],[3,4],[6,5,7],[4,1,8,3]]]" => "11",
        "[[[-10]]]" => "-10"),
    problem!(T; 329, "longest-increasing-path-in-a-matrix", "Longest Increasing Path in a Matrix", Hard, Exact,
        |a| answer(longest_increasing_path(a.get(0)?)),
        "[[[9,9,4],[6,6,8],[2,1,1]]]" => "4",
        "[[[3,4,5],[3,2,6],[2,2,1]]]" => "4",
        "[[[1]]]" => "1"),
    problem!(T; 221, "maximal-square", "Maximal Square", Medium, Exact,
        |a| answer(maximal_square(a.get(0)?)),
        r#"[[["1","0","1","0","0"],["1","0","1","1","1"],["1","1","1","1","1"],["1","0","0","1","0"]]]"# => "4",
        r#"[[["0","1"],["1","0"]]]"# => "1",
        r#"[[["0"]]]"# => "0"),
    problem!(T; 322, "coin-change", "Coin Change", Medium, Exact,
        |a| answer(coin_change(a.get(0)?, a.get(1)?)),
        "[[1,2,5],11]" => "3",
        "[[2],3]" => "-1",
        "[[1],0]" => "0"),
    problem!(T; 518, "coin-change-ii", "Coin Change II", Medium, Exact,
        |a| answer(change(a.get(0)?, a.get(1)?)),
        "[5,[1,2,5]]" => "4",
        "[3,[2]]" => "0",
        "[10,[10]]" => "1"),
    problem!(T; 416, "partition-equal-subset-sum", "Partition Equal Subset Sum", Medium, Exact,
        |a| answer(can_partition(a.get(0)?)),
        "[[1,5,11,5]]" => "true",
        "[[1,2,3,5]]" => "false"),
    problem!(T; 494, "target-sum", "Target Sum", Medium, Exact,
        |a| answer(find_target_sum_ways(a.get(0)?, a.get(1)?)),
        "[[1,1,1,1,1],3]" => "5",
        "[[1],1]" => "1"),
    problem!(T; 279, "perfect-squares", "Perfect Squares", Medium, Exact,
        |a| answer(num_squares(a.get(0)?)),
        "[12]" => "3",
        "[13]" => "2"),
    problem!(T; 139, "word-break", "Word Break", Medium, Exact,
        |a| answer(word_break(a.get(0)?, a.get(1)?)),
        r#"["leetcode",["leet","code"]]"# => "true",
        r#"["applepenapple",["apple","pen"]]"# => "true",
        r#"["catsandog",["cats","dog","sand","and","cat"]]"# => "false"),
    problem!(T; 509, "fibonacci-number", "Fibonacci Number", Easy, Exact,
        |a| answer(fib(a.get(0)?)),
        "[2]" => "1",
        "[3]" => "2",
        "[4]" => "3"),
    problem!(T; 70, "climbing-stairs", "Climbing Stairs", Easy, Exact,
        |a| answer(climb_stairs(a.get(0)?)),
        "[2]" => "2",
        "[3]" => "3"),
    problem!(T; 746, "min-cost-climbing-stairs", "Min Cost Climbing Stairs", Easy, Exact,
        |a| answer(min_cost_climbing_stairs(a.get(0)?)),
        "[[10,15,20]]" => "15",
        "[[1,100,1,1,1,100,1,1,100,1]]" => "6"),
    problem!(T; 198, "house-robber", "House Robber", Medium, Exact,
        |a| answer(rob(a.get(0)?)),
        "[[1,2,3,1]]" => "4",
        "[[2,7,9,3,1]]" => "12"),
    problem!(T; 213, "house-robber-ii", "House Robber II", Medium, Exact,
        |a| answer(rob_circular(a.get(0)?)),
        "[[2,3,2]]" => "3",
        "[[1,2,3,1]]" => "4",
        "[[1,2,3]]" => "3"),
    problem!(T; 152, "maximum-product-subarray", "Maximum Product Subarray", Medium, Exact,
        |a| answer(max_product(a.get(0)?)),
        "[[2,3,-2,4]]" => "6",
        "[[-2,0,-1]]" => "0"),
    problem!(T; 309, "best-time-to-buy-and-sell-stock-with-cooldown", "Best Time to Buy and Sell Stock with Cooldown", Medium, Exact,
        |a| answer(max_profit_with_cooldown(a.get(0)?)),
        "[[1,2,3,0,2]]" => "3",
        "[[1]]" => "0"),
    problem!(T; 300, "longest-increasing-subsequence", "Longest Increasing Subsequence", Medium, Exact,
        |a| answer(length_of_lis(a.get(0)?)),
        "[[10,9,2,5,3,7,101,18]]" => "4",
        "[[0,1,0,3,2,3]]" => "4",
        "[[7,7,7,7,7,7,7]]" => "1"),
    problem!(T; 312, "burst-balloons", "Burst Balloons", Hard, Exact,
        |a| answer(max_coins(a.get(0)?)),
        "[[3,1,5,8]]" => "167",
        "[[1,5]]" => "10"),
    problem!(T; 5, "longest-palindromic-substring", "Longest Palindromic Substring", Medium, Exact,
        |a| answer(longest_palindrome(a.get(0)?)),
        r#"["babad"]"# => r#""bab""#,
        r#"["cbbd"]"# => r#""bb""#),
    problem!(T; 647, "palindromic-substrings", "Palindromic Substrings", Medium, Exact,
        |a| answer(count_substrings(a.get(0)?)),
        r#"["abc"]"# => "3",
        r#"["aaa"]"# => "6"),
    problem!(T; 91, "decode-ways", "Decode Ways", Medium, Exact,
        |a| answer(num_decodings(a.get(0)?)),
        r#"["12"]"# => "2",
        r#"["226"]"# => "3",
        r#"["06"]"# => "0"),
    problem!(T; 1143, "longest-common-subsequence", "Longest Common Subsequence", Medium, Exact,
        |a| answer(longest_common_subsequence(a.get(0)?, a.get(1)?)),
        r#"["abcde","ace"]"# => "3",
        r#"["abc","abc"]"# => "3",
        r#"["abc","def"]"# => "0"),
    problem!(T; 72, "edit-distance", "Edit Distance", Medium, Exact,
        |a| answer(min_distance(a.get(0)?, a.get(1)?)),
        r#"["horse","ros"]"# => "3",
        r#"["intention","execution"]"# => "5"),
    problem!(T; 97, "interleaving-string", "Interleaving String", Medium, Exact,
        |a| answer(is_interleave(a.get(0)?, a.get(1)?, a.get(2)?)),
        r#"["aabcc","dbbca","aadbbcbcac"]"# => "true",
        r#"["aabcc","dbbca","aadbbbaccc"]"# => "false",
        r#"["","",""]"# => "true"),
    problem!(T; 115, "distinct-subsequences", "Distinct Subsequences", Hard, Exact,
        |a| answer(num_distinct(a.get(0)?, a.get(1)?)),
        r#"["rabbbit","rabbit"]"# => "3",
        r#"["babgbag","bag"]"# => "5"),
    problem!(T; 10, "regular-expression-matching", "Regular Expression Matching", Hard, Exact,
        |a| answer(is_match_regex(a.get(0)?, a.get(1)?)),
        r#"["aa","a"]"# => "false",
        r#"["aa","a*"]"# => "true",
        r#"["ab",".*"]"# => "true"),
    problem!(T; 44, "wildcard-matching", "Wildcard Matching", Hard, Exact,
        |a| answer(is_match_wildcard(a.get(0)?, a.get(1)?)),
        r#"["aa","a"]"# => "false",
        r#"["aa","*"]"# => "true",
        r#"["cb","?a"]"# => "false",
        r#"["adceb","*a*b"]"# => "true"),
];
