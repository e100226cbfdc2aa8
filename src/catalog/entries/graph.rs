// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::graph::*;

const T: Topic = Topic::Graph;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 200, "number-of-islands", "Number of Islands", Medium, Exact,
        |a| answer(num_islands(a.get(0)?)),
        r#"[[["1","1","1","1","0"],["1","1","0","1","0"],["1","1","0","0","0"],["0","0","0","0","0"]]]"# => "1",
        r#"[[["1","1","0","0","0"],["1","1","0","0","0"],["0","0","1","0","0"],["0","0","0","1","1"]]]"# => "3"),
    problem!(T; 695, "max-area-of-island", "Max Area of Island", Medium, Exact,
        |a| answer(max_area_of_island(a.get(0)?)),
        "[[[1,1,0],[1,0,0],[0,0,1]]]" => "3",
        "[[[0,0,0,0,0,0,0,0]]]" => "0"),
    problem!(T; 994, "rotting-oranges", "Rotting Oranges", Medium, Exact,
        |a| answer(oranges_rotting(a.get(0)?)),
        "[[[2,1,1],[1,1,0],[0,1,1]]]" => "4",
        "[[[2,1,1],[0,1,1],[1,0,1]]]" => "-1",
        "[[[0,2]]]" => "0"),
    problem!(T; 417, "pacific-atlantic-water-flow", "Pacific Atlantic Water Flow", Medium, AnyOrder,
        |a| answer(pacific_atlantic(a.get(0)?)),
        "[[[1,2,2,3,5],[3,2,3,4,4],[2,4,5,3,1],[6,7,1,4,5],[5,1,1,2,4]]]"
            => "[[0,4],[1,3],[1,4],[2,2],[3,0],[3,1],[4,0]]",
        "[[[1]]]" => "[[0,0]]"),
    problem!(T; 130, "surrounded-regions", "Surrounded Regions", Medium, Exact,
        |a| {
            let mut board = a.get(0)?;
            solve_regions(&mut board);
            answer(board)
        },
        r#"[[["X","X","X","X"],["X","O","O","X"],["X","X","O","X"],["X","O","X","X"]]]"#
            => r#"[["X","X","X","X"],["X","X","X","X"],["X","X","X","X"],["X","O","X","X"]]"#,
        r#"[[["X"]]]"# => r#"[["X"]]"#),
    problem!(T; 1091, "shortest-path-in-binary-matrix", "Shortest Path in Binary Matrix", Medium, Exact,
        |a| answer(shortest_path_binary_matrix(a.get(0)?)),
        "[[[0,1],[1,0]]]" => "2",
        "[[[0,0,0],[1,1,0],[1,1,0]]]" => "4",
        "[[[1,0,0],[1,1,0],[1,1,0]]]" => "-1"),
    problem!(T; 542, "01-matrix", "01 Matrix", Medium, Exact,
        |a| answer(update_matrix(a.get(0)?)),
        "[[[0,0,0],[0,1,0],[0,0,0]]]" => "[[0,0,0],[0,1,0],[0,0,0]]",
        "[[[0,0,0],[0,1,0],[1,1,1]]]" => "[[0,0,0],[0,1,0],[1,2,1]]"),
    problem!(T; 207, "course-schedule", "Course Schedule", Medium, Exact,
        |a| answer(can_finish(a.get(0)?, a.get(1)?)),
        "[2,[[1,0]]]" => "true",
        "[2,[[1,0],[0,1]]]" => "false"),
    problem!(T; 210, "course-schedule-ii", "Course Schedule II", Medium, Exact,
        |a| answer(find_order(a.get(0)?, a.get(1)?)),
        "[2,[[1,0]]]" => "[0,1]",
        "[4,[[1,0],[2,0],[3,1],[3,2]]]" => "[0,1,2,3]",
        "[1,[]]" => "[0]",
        "[2,[[0,1],[1,0]]]" => "[]"),
    problem!(T; 332, "reconstruct-itinerary", "Reconstruct Itinerary", Hard, Exact,
        |a| answer(find_itinerary(a.get(0)?)),
        r#"[[["MUC","LHR"],["JFK","MUC"],["SFO","SJC"],["LHR","SFO"]]]"# => r#"["JFK","MUC","LHR","SFO","SJC"]"#,
        r#"[[["JFK","SFO"],["JFK","ATL"],["SFO","ATL"],["ATL","JFK"],["ATL","SFO"]]]"#
            => r#"["JFK","ATL","JFK","SFO","ATL","SFO"]"#),
    problem!(T; 399, "evaluate-division", "Evaluate Division", Medium, Float,
        |a| answer(calc_equation(a.get(0)?, a.get(1)?, a.get(2)?)),
        r#"[[["a","b"],["b","c"]],[2.0,3.0],[["a","c"],["b","a"],["a","e"],["a","a"],["x","x"]]]"#
            => "[6.0,0.5,-1.0,1.0,-1.0]",
        r#"[[["a","b"]],[0.5],[["a","b"],["b","a"],["a","c"],["x","y"]]]"# => "[0.5,2.0,-1.0,-1.0]"),
    problem!(T; 127, "word-ladder", "Word Ladder", Hard, Exact,
        |a| answer(ladder_length(a.get(0)?, a.get(1)?, a.get(2)?)),
        r#"["hit","cog",["hot","dot","dog","lot","log","cog"]]"# => "5",
        r#"["hit","cog",["hot","dot","dog","lot","log"]]"# => "0"),
    problem!(T; 433, "minimum-genetic-mutation", "Minimum Genetic Mutation", Medium, Exact,
        |a| answer(min_mutation(a.get(0)?, a.get(1)?, a.get(2)?)),
        r#"["AACCGGTT","AACCGGTA",["AACCGGTA"]]"# => "1",
        r#"["AACCGGTT","AAACGGTA",["AACCGGTA","AACCGCTA","AAACGGTA"]]"# => "2"),
    problem!(T; 743, "network-delay-time", "Network Delay Time", Medium, Exact,
        |a| answer(network_delay_time(a.get(0)?, a.get(1)?, a.get(2)?)),
        "[[[2,1,1],[2,3,1],[3,4,1]],4,2]" => "2",
        "[[[1,2,1]],2,1]" => "1",
        "[[[1,2,1]],2,2]" => "-1"),
    problem!(T; 787, "cheapest-flights-within-k-stops", "Cheapest Flights Within K Stops", Medium, Exact,
        |a| answer(find_cheapest_price(a.get(0)?, a.get(1)?, a.get(2)?, a.get(3)?, a.get(4)?)),
        "[4,[[0,1,100],[1,2,100],[2,0,100],[1,3,600],[2,3,200]],0,3,1]" => "700",
        "[3,[[0,1,100],[1,2,100],[0,2,500]],0,2,1]" => "200",
        "[3,[[0,1,100],[1,2,100],[0,2,500]],0,2,0]" => "500"),
    problem!(T; 1514, "path-with-maximum-probability", "Path with Maximum Probability", Medium, Float,
        |a| answer(max_probability(a.get(0)?, a.get(1)?, a.get(2)?, a.get(3)?, a.get(4)?)),
        "[3,[[0,1],[1,2],[0,2]],[0.5,0.5,0.2],0,2]" => "0.25",
        "[3,[[0,1],[1,2],[0,2]],[0.5,0.5,0.3],0,2]" => "0.3",
        "[3,[[0,1]],[0.5],0,2]" => "0.0"),
    problem!(T; 1334, "find-the-city-with-the-smallest-number-of-neighbors-at-a-threshold-distance",
        "Find the City With the Smallest Number of Neighbors at a Threshold Distance", Medium, Exact,
        |a| answer(find_the_city(a.get(0)?, a.get(1)?, a.get(2)?)),
        "[4,[[0,1,3],[1,2,1],[1,3,4],[2,3,1]],4]" => "3",
        "[5,[[0,1,2],[0,4,8],[1,2,3],[1,4,2],[2,3,1],[3,4,1]],2]" => "0"),
    problem!(T; 2976, "minimum-cost-to-convert-string-i", "Minimum Cost to Convert String I", Medium, Exact,
        |a| answer(minimum_cost(a.get(0)?, a.get(1)?, a.get(2)?, a.get(3)?, a.get(4)?)),
        r#"["abcd","acbe",["a","b","c","c","e","d"],["b","c","b","e","b","e"],[2,5,5,1,2,20]]"# => "28",
        r#"["aaaa","bbbb",["a","c"],["c","b"],[1,2]]"# => "12",
        r#"["abcd","abce",["a"],["e"],[10000]]"# => "-1"),
    problem!(T; 1631, "path-with-minimum-effort", "Path With Minimum Effort", Medium, Exact,
        |a| answer(minimum_effort_path(a.get(0)?)),
        "[[[1,2,2],[3,8,2],[5,3,5]]]" => "2",
        "[[[1,2,3],[3,8,4],[5,3,5]]]" => "1",
        "[[[1,2,1,1,1],[1,2,1,2,1],[1,2,1,2,1],[1,2,1,2,1],[1,1,1,2,1]]]" => "0"),
    problem!(T; 778, "swim-in-rising-water", "Swim in Rising Water", Hard, Exact,
        |a| answer(swim_in_water(a.get(0)?)),
        "[[[0,2],[1,3]]]" => "3",
        "[[[0,1,2,3,4],[24,23,22,21,5],[12,13,14,15,16],[11,17,18,19,20],[10,9,8,7,6]]]" => "16"),
    problem!(T; 1584, "min-cost-to-connect-all-points", "Min Cost to Connect All Points", Medium, Exact,
        |a| answer(min_cost_connect_points(a.get(0)?)),
        "[[[0,0],[2,2],[3,10],[5,2],[7,0]]]" => "20",
        "[[[3,12],[-2,5],[-4,1]]]" => "18"),
];
