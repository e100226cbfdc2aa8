// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::union_find::*;

const T: Topic = Topic::UnionFind;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 547, "number-of-provinces", "Number of Provinces", Medium, Exact,
        |a| answer(find_circle_num(a.get(0)?)),
        "[[[1,1,0],[1,1,0],[0,0,1]]]" => "2",
        "[[[1,0,0],[0,1,0],[0,0,1]]]" => "3"),
    problem!(T; 684, "redundant-connection", "Redundant Connection", Medium, Exact,
        |a| answer(find_redundant_connection(a.get(0)?)),
        "[[[1,2],[1,3],[2,3]]]" => "[2,3]",
        "[[[1,2],[2,3],[3,4],[1,4],[1,5]]]" => "[1,4]"),
    problem!(T; 1319, "number-of-operations-to-make-network-connected", "Number of Operations to Make Network Connected", Medium, Exact,
        |a| answer(make_connected(a.get(0)?, a.get(1)?)),
        "[4,[[0,1],[0,2],[1,2]]]" => "1",
        "[6,[[0,1],[0,2],[0,3],[1,2],[1,3]]]" => "2",
        "[6,[[0,1],[0,2],[0,3],[1,2]]]" => "-1"),
    problem!(T; 323, "number-of-connected-components-in-an-undirected-graph", "Number of Connected Components in an Undirected Graph", Medium, Exact,
        |a| answer(count_components(a.get(0)?, a.get(1)?)),
        "[5,[[0,1],[1,2],[3,4]]]" => "2",
        "[5,[[0,1],[1,2],[2,3],[3,4]]]" => "1"),
    problem!(T; 261, "graph-valid-tree", "Graph Valid Tree", Medium, Exact,
        |a| answer(valid_tree(a.get(0)?, a.get(1)?)),
        "[5,[[0,1],[0,2],[0,3],[1,4]]]" => "true",
        "[5,[[0,1],[1,2],[2,3],[1,3],[1,4]]]" => "false"),
    problem!(T; 947, "most-stones-removed-with-same-row-or-column", "Most Stones Removed with Same Row or Column", Medium, Exact,
        |a| answer(remove_stones(a.get(0)?)),
        "[[[0,0],[0,1],[1,0],[1,2],[2,1],[2,2]]]" => "5",
        "[[[0,0],[0,2],[1,1],[2,0],[2,2]]]" => "3",
        "[[[0,0]]]" => "0"),
    problem!(T; 721, "accounts-merge", "Accounts Merge", Medium, AnyOrder,
        |a| answer(accounts_merge(a.get(0)?)),
        r#"[[["John","johnsmith@mail.com","john_newyork@mail.com"],["John","johnsmith@mail.com","john00@mail.com"],["Mary","mary@mail.com"],["John","johnnybravo@mail.com"]]]"#
            => r#"[["John","john00@mail.com","john_newyork@mail.com","johnsmith@mail.com"],["Mary","mary@mail.com"],["John","johnnybravo@mail.com"]]"#),
    problem!(T; 990, "satisfiability-of-equality-equations", "Satisfiability of Equality Equations", Medium, Exact,
        |a| answer(equations_possible(a.get(0)?)),
        r#"[["a==b","b!=a"]]"# => "false",
        r#"[["b==a","a==b"]]"# => "true"),
    problem!(T; 1202, "smallest-string-with-swaps", "Smallest String With Swaps", Medium, Exact,
        |a| answer(smallest_string_with_swaps(a.get(0)?, a.get(1)?)),
        r#"["dcab",[[0,3],[1,2]]]"# => r#""bacd""#,
        r#"["dcab",[[0,3],[1,2],[0,2]]]"# => r#""abcd""#,
        r#"["cba",[[0,1],[1,2]]]"# => r#""abc""#),
];
