// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::array::SUDOKU;
use crate::backtracking::*;
use crate::catalog::{answer, problem, Problem, Topic};

const T: Topic = Topic::Backtracking;

const SUDOKU_SOLVED: &str = r#"[
    ["5","3","4","6","7","8","9","1","2"],
    ["6","7","2","1","9","5","3","4","8"],
    ["1","9","8","3","4","2","5","6","7"],
    ["8","5","9","7","6","1","4","2","3"],
    ["4","2","6","8","5","3","7","9","1"],
    ["7","1","3","9","2","4","8","5","6"],
    ["9","6","1","5","3","7","2","8","4"],
    ["2","8","7","4","1","9","6","3","5"],
    ["3","4","5","2","8","6","1","7","9"]]"#;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 79, "word-search", "Word Search", Medium, Exact,
        |a| answer(exist(a.get(0)?, a.get(1)?)),
        r#"[[["A","B","C","E"],["S","F","C","S"],["A","D","E","E"]],"ABCCED"]"# => "true",
        r#"[[["A","B","C","E"],["S","F","C","S"],["A","D","E","E"]],"SEE"]"# => "true",
        r#"[[["A","B","C","E"],["S","F","C","S"],["A","D","E","E"]],"ABCB"]"# => "false"),
    problem!(T; 51, "n-queens", "N-Queens", Hard, AnyOrder,
        |a| answer(solve_n_queens(a.get(0)?)),
        "[4]" => r#"[[".Q..","...Q","Q...","..Q."],["..Q.","Q...","...Q",".Q.."]]"#,
        "[1]" => r#"[["Q"]]"#),
    problem!(T; 52, "n-queens-ii", "N-Queens II", Hard, Exact,
        |a| answer(total_n_queens(a.get(0)?)),
        "[4]" => "2",
        "[1]" => "1",
        "[8]" => "92"),
    problem!(T; 37, "sudoku-solver", "Sudoku Solver", Hard, Exact,
        |a| {
            let mut board = a.get(0)?;
            solve_sudoku(&mut board);
            answer(board)
        },
        SUDOKU => SUDOKU_SOLVED),
    problem!(T; 78, "subsets", "Subsets", Medium, Nested,
        |a| answer(subsets(a.get(0)?)),
        "[[1,2,3]]" => "[[],[1],[2],[1,2],[3],[1,3],[2,3],[1,2,3]]",
        "[[0]]" => "[[],[0]]"),
    problem!(T; 90, "subsets-ii", "Subsets II", Medium, Nested,
        |a| answer(subsets_with_dup(a.get(0)?)),
        "[[1,2,2]]" => "[[],[1],[1,2],[1,2,2],[2],[2,2]]",
        "[[0]]" => "[[],[0]]"),
    problem!(T; 39, "combination-sum", "Combination Sum", Medium, Nested,
        |a| answer(combination_sum(a.get(0)?, a.get(1)?)),
        "[[2,3,6,7],7]" => "[[2,2,3],[7]]",
        "[[2,3,5],8]" => "[[2,2,2,2],[2,3,3],[3,5]]",
        "[[2],1]" => "[]"),
    problem!(T; 40, "combination-sum-ii", "Combination Sum II", Medium, Nested,
        |a| answer(combination_sum2(a.get(0)?, a.get(1)?)),
        "[[10,1,2,7,6,1,5],8]" => "[[1,1,6],[1,2,5],[1,7],[2,6]]",
        "[[2,5,2,1,2],5]" => "[[1,2,2],[5]]"),
    problem!(T; 46, "permutations", "Permutations", Medium, AnyOrder,
        |a| answer(permute(a.get(0)?)),
        "[[1,2,3]]" => "[[1,2,3],[1,3,2],[2,1,3],[2,3,1],[3,1,2],[3,2,1]]",
        "[[0,1]]" => "[[0,1],[1,0]]",
        "[[1]]" => "[[1]]"),
    problem!(T; 47, "permutations-ii", "Permutations II", Medium, AnyOrder,
        |a| answer(permute_unique(a.get(0)?)),
        "[[1,1,2]]" => "[[1,1,2],[1,2,1],[2,1,1]]",
        "[[1,2,3]]" => "[[1,2,3],[1,3,2],[2,1,3],[2,3,1],[3,1,2],[3,2,1]]"),
    problem!(T; 77, "combinations", "Combinations", Medium, Nested,
        |a| answer(combine(a.get(0)?, a.get(1)?)),
        "[4,2]" => "[[1,2],[1,3],[1,4],[2,3],[2,4],[3,4]]",
        "[1,1]" => "[[1]]"),
    problem!(T; 131, "palindrome-partitioning", "Palindrome Partitioning", Medium, AnyOrder,
        |a| answer(partition(a.get(0)?)),
        r#"["aab"]"# => r#"[["a","a","b"],["aa","b"]]"#,
        r#"["a"]"# => r#"[["a"]]"#),
    problem!(T; 17, "letter-combinations-of-a-phone-number", "Letter Combinations of a Phone Number", Medium, AnyOrder,
        |a| answer(letter_combinations(a.get(0)?)),
        r#"["23"]"# => r#"["ad","ae","af","bd","be","bf","cd","ce","cf"]"#,
        r#"[""]"# => "[]",
        r#"["2"]"# => r#"["a","b","c"]"#),
    problem!(T; 22, "generate-parentheses", "Generate Parentheses", Medium, AnyOrder,
        |a| answer(generate_parenthesis(a.get(0)?)),
        "[3]" => r#"["((()))","(()())","(())()","()(())","()()()"]"#,
        "[1]" => r#"["()"]"#),
    problem!(T; 93, "restore-ip-addresses", "Restore IP Addresses", Medium, AnyOrder,
        |a| answer(restore_ip_addresses(a.get(0)?)),
        r#"["25525511135"]"# => r#"["255.255.11.135","255.255.111.35"]"#,
        r#"["0000"]"# => r#"["0.0.0.0"]"#,
        r#"["101023"]"# => r#"["1.0.10.23","1.0.102.3","10.1.0.23","10.10.2.3","101.0.2.3"]"#),
];
