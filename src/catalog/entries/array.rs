// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::array::*;
use crate::catalog::{answer, problem, Problem, Topic};

const T: Topic = Topic::Array;

pub(super) const SUDOKU: &str = r#"[[
    ["5","3",".",".","7",".",".",".","."],
    ["6",".",".","1","9","5",".",".","."],
    [".","9","8",".",".",".",".","6","."],
    ["8",".",".",".","6",".",".",".","3"],
    ["4",".",".","8",".","3",".",".","1"],
    ["7",".",".",".","2",".",".",".","6"],
    [".","6",".",".",".",".","2","8","."],
    [".",".",".","4","1","9",".",".","5"],
    [".",".",".",".","8",".",".","7","9"]]]"#;

const SUDOKU_CLASH: &str = r#"[[
    ["8","3",".",".","7",".",".",".","."],
    ["6",".",".","1","9","5",".",".","."],
    [".","9","8",".",".",".",".","6","."],
    ["8",".",".",".","6",".",".",".","3"],
    ["4",".",".","8",".","3",".",".","1"],
    ["7",".",".",".","2",".",".",".","6"],
    [".","6",".",".",".",".","2","8","."],
    [".",".",".","4","1","9",".",".","5"],
    [".",".",".",".","8",".",".","7","9"]]]"#;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 1, "two-sum", "Two Sum", Easy, Exact,
        |a| answer(two_sum(a.get(0)?, a.get(1)?)),
        "[[2,7,11,15],9]" => "[0,1]",
        "[[3,2,4],6]" => "[1,2]",
        "[[3,3],6]" => "[0,1]"),
    problem!(T; 217, "contains-duplicate", "Contains Duplicate", Easy, Exact,
        |a| answer(contains_duplicate(a.get(0)?)),
        "[[1,2,3,1]]" => "true",
        "[[1,2,3,4]]" => "false",
        "[[1,1,1,3,3,4,3,2,4,2]]" => "true"),
    problem!(T; 49, "group-anagrams", "Group Anagrams", Medium, Nested,
        |a| answer(group_anagrams(a.get(0)?)),
        r#"[["eat","tea","tan","ate","nat","bat"]]"# => r#"[["bat"],["nat","tan"],["ate","eat","tea"]]"#,
        r#"[[""]]"# => r#"[[""]]"#,
        r#"[["a"]]"# => r#"[["a"]]"#),
    problem!(T; 128, "longest-consecutive-sequence", "Longest Consecutive Sequence", Medium, Exact,
        |a| answer(longest_consecutive(a.get(0)?)),
        "[[100,4,200,1,3,2]]" => "4",
        "[[0,3,7,2,5,8,4,6,0,1]]" => "9",
        "[[]]" => "0"),
    problem!(T; 238, "product-of-array-except-self", "Product of Array Except Self", Medium, Exact,
        |a| answer(product_except_self(a.get(0)?)),
        "[[1,2,3,4]]" => "[24,12,8,6]",
        "[[-1,1,0,-3,3]]" => "[0,0,9,0,0]"),
    problem!(T; 36, "valid-sudoku", "Valid Sudoku", Medium, Exact,
        |a| answer(is_valid_sudoku(a.get(0)?)),
        SUDOKU => "true",
        SUDOKU_CLASH => "false"),
    problem!(T; 560, "subarray-sum-equals-k", "Subarray Sum Equals K", Medium, Exact,
        |a| answer(subarray_sum(a.get(0)?, a.get(1)?)),
        "[[1,1,1],2]" => "2",
        "[[1,2,3],3]" => "2"),
    problem!(T; 53, "maximum-subarray", "Maximum Subarray", Medium, Exact,
        |a| answer(max_sub_array(a.get(0)?)),
        "[[-2,1,-3,4,-1,2,1,-5,4]]" => "6",
        "[[1]]" => "1",
        "[[5,4,-1,7,8]]" => "23"),
    problem!(T; 121, "best-time-to-buy-and-sell-stock", "Best Time to Buy and Sell Stock", Easy, Exact,
        |a| answer(max_profit(a.get(0)?)),
        "[[7,1,5,3,6,4]]" => "5",
        "[[7,6,4,3,1]]" => "0"),
    problem!(T; 122, "best-time-to-buy-and-sell-stock-ii", "Best Time to Buy and Sell Stock II", Medium, Exact,
        |a| answer(max_profit_ii(a.get(0)?)),
        "[[7,1,5,3,6,4]]" => "7",
        "[[1,2,3,4,5]]" => "4",
        "[[7,6,4,3,1]]" => "0"),
    problem!(T; 724, "find-pivot-index", "Find Pivot Index", Easy, Exact,
        |a| answer(pivot_index(a.get(0)?)),
        "[[1,7,3,6,5,6]]" => "3",
        "[[1,2,3]]" => "-1",
        "[[2,1,-1]]" => "0"),
    problem!(T; 26, "remove-duplicates-from-sorted-array", "Remove Duplicates from Sorted Array", Easy, Exact,
        |a| {
            let mut nums: Vec<i32> = a.get(0)?;
            let k = remove_duplicates(&mut nums);
            nums.truncate(k as usize);
            answer(nums)
        },
        "[[1,1,2]]" => "[1,2]",
        "[[0,0,1,1,1,2,2,3,3,4]]" => "[0,1,2,3,4]"),
    problem!(T; 27, "remove-element", "Remove Element", Easy, AnyOrder,
        |a| {
            let mut nums: Vec<i32> = a.get(0)?;
            let k = remove_element(&mut nums, a.get(1)?);
            nums.truncate(k as usize);
            answer(nums)
        },
        "[[3,2,2,3],3]" => "[2,2]",
        "[[0,1,2,2,3,0,4,2],2]" => "[0,1,4,0,3]"),
    problem!(T; 283, "move-zeroes", "Move Zeroes", Easy, Exact,
        |a| {
            let mut nums: Vec<i32> = a.get(0)?;
            move_zeroes(&mut nums);
            answer(nums)
        },
        "[[0,1,0,3,12]]" => "[1,3,12,0,0]",
        "[[0]]" => "[0]"),
    problem!(T; 75, "sort-colors", "Sort Colors", Medium, Exact,
        |a| {
            let mut nums: Vec<i32> = a.get(0)?;
            sort_colors(&mut nums);
            answer(nums)
        },
        "[[2,0,2,1,1,0]]" => "[0,0,1,1,2,2]",
        "[[2,0,1]]" => "[0,1,2]"),
    problem!(T; 189, "rotate-array", "Rotate Array", Medium, Exact,
        |a| {
            let mut nums: Vec<i32> = a.get(0)?;
            rotate(&mut nums, a.get(1)?);
            answer(nums)
        },
        "[[1,2,3,4,5,6,7],3]" => "[5,6,7,1,2,3,4]",
        "[[-1,-100,3,99],2]" => "[3,99,-1,-100]"),
    problem!(T; 48, "rotate-image", "Rotate Image", Medium, Exact,
        |a| {
            let mut matrix: Vec<Vec<i32>> = a.get(0)?;
            rotate_matrix(&mut matrix);
            answer(matrix)
        },
        "[[[1,2,3],[4,5,6],[7,8,9]]]" => "[[7,4,1],[8,5,2],[9,6,3]]",
        "[[[5,1,9,11],[2,4,8,10],[13,3,6,7],[15,14,12,16]]]" => "[[15,13,2,5],[14,3,4,1],[12,6,8,9],[16,7,10,11]]"),
    problem!(T; 54, "spiral-matrix", "Spiral Matrix", Medium, Exact,
        |a| answer(spiral_order(a.get(0)?)),
        "[[[1,2,3],[4,5,6],[7,8,9]]]" => "[1,2,3,6,9,8,7,4,5]",
        "[[[1,2,3,4],[5,6,7,8],[9,10,11,12]]]" => "[1,2,3,4,8,12,11,10,9,5,6,7]"),
    problem!(T; 73, "set-matrix-zeroes", "Set Matrix Zeroes", Medium, Exact,
        |a| {
            let mut matrix: Vec<Vec<i32>> = a.get(0)?;
            set_zeroes(&mut matrix);
            answer(matrix)
        },
        "[[[1,1,1],[1,0,1],[1,1,1]]]" => "[[1,0,1],[0,0,0],[1,0,1]]",
        "[[[0,1,2,0],[3,4,5,2],[1,3,1,5]]]" => "[[0,0,0,0],[0,4,5,0],[0,3,1,0]]"),
    problem!(T; 41, "first-missing-positive", "First Missing Positive", Hard, Exact,
        |a| answer(first_missing_positive(a.get(0)?)),
        "[[1,2,0]]" => "3",
        "[[3,4,-1,1]]" => "2",
        "[[7,8,9,11,12]]" => "1"),
    problem!(T; 169, "majority-element", "Majority Element", Easy, Exact,
        |a| answer(majority_element(a.get(0)?)),
        "[[3,2,3]]" => "3",
        "[[2,2,1,1,1,2,2]]" => "2"),
    problem!(T; 31, "next-permutation", "Next Permutation", Medium, Exact,
        |a| {
            let mut nums: Vec<i32> = a.get(0)?;
            next_permutation(&mut nums);
            answer(nums)
        },
        "[[1,2,3]]" => "[1,3,2]",
        "[[3,2,1]]" => "[1,2,3]",
        "[[1,1,5]]" => "[1,5,1]"),
];
