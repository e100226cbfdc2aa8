// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::greedy::*;

const T: Topic = Topic::Greedy;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 55, "jump-game", "Jump Game", Medium, Exact,
        |a| answer(can_jump(a.get(0)?)),
        "[[2,3,1,1,4]]" => "true",
        "[[3,2,1,0,4]]" => "false"),
    problem!(T; 45, "jump-game-ii", "Jump Game II", Medium, Exact,
        |a| answer(jump(a.get(0)?)),
        "[[2,3,1,1,4]]" => "2",
        "[[2,3,0,1,4]]" => "2"),
    problem!(T; 134, "gas-station", "Gas Station", Medium, Exact,
        |a| answer(can_complete_circuit(a.get(0)?, a.get(1)?)),
        "[[1,2,3,4,5],[3,4,5,1,2]]" => "3",
        "[[2,3,4],[3,4,3]]" => "-1"),
    problem!(T; 846, "hand-of-straights", "Hand of Straights", Medium, Exact,
        |a| answer(is_n_straight_hand(a.get(0)?, a.get(1)?)),
        "[[1,2,3,6,2,3,4,7,8],3]" => "true",
        "[[1,2,3,4,5],4]" => "false"),
    problem!(T; 1899, "merge-triplets-to-form-target-triplet", "Merge Triplets to Form Target Triplet", Medium, Exact,
        |a| answer(merge_triplets(a.get(0)?, a.get(1)?)),
        "[[[2,5,3],[1,8,4],[1,7,5]],[2,7,5]]" => "true",
        "[[[3,4,5],[4,5,6]],[3,2,5]]" => "false",
        "[[[2,5,3],[2,3,4],[1,2,5],[5,2,3]],[5,5,5]]" => "true"),
    problem!(T; 763, "partition-labels", "Partition Labels", Medium, Exact,
        |a| answer(partition_labels(a.get(0)?)),
        r#"["ababcbacadefegdehijhklij"]"# => "[9,7,8]",
        r#"["eccbbbbdec"]"# => "[10]"),
    problem!(T; 678, "valid-parenthesis-string", "Valid Parenthesis String", Medium, Exact,
        |a| answer(check_valid_string(a.get(0)?)),
        r#"["()"]"# => "true",
        r#"["(*)"]"# => "true",
        r#"["(*))"]"# => "true",
        r#"["(()"]"# => "false"),
    problem!(T; 135, "candy", "Candy", Hard, Exact,
        |a| answer(candy(a.get(0)?)),
        "[[1,0,2]]" => "5",
        "[[1,2,2]]" => "4"),
];
