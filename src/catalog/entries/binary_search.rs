// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::binary_search::*;
use crate::catalog::{answer, problem, replay, unit, unknown, Problem, Topic};

const T: Topic = Topic::BinarySearch;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 704, "binary-search", "Binary Search", Easy, Exact,
        |a| answer(search(a.get(0)?, a.get(1)?)),
        "[[-1,0,3,5,9,12],9]" => "4",
        "[[-1,0,3,5,9,12],2]" => "-1"),
    problem!(T; 35, "search-insert-position", "Search Insert Position", Easy, Exact,
        |a| answer(search_insert(a.get(0)?, a.get(1)?)),
        "[[1,3,5,6],5]" => "2",
        "[[1,3,5,6],2]" => "1",
        "[[1,3,5,6],7]" => "4"),
    problem!(T; 74, "search-a-2d-matrix", "Search a 2D Matrix", Medium, Exact,
        |a| answer(search_matrix(a.get(0)?, a.get(1)?)),
        "[[[1,3,5,7],[10,11,16,20],[23,30,34,60]],3]" => "true",
        "[[[1,3,5,7],[10,11,16,20],[23,30,34,60]],13]" => "false"),
    problem!(T; 875, "koko-eating-bananas", "Koko Eating Bananas", Medium, Exact,
        |a| answer(min_eating_speed(a.get(0)?, a.get(1)?)),
        "[[3,6,7,11],8]" => "4",
        "[[30,11,23,4,20],5]" => "30",
        "[[30,11,23,4,20],6]" => "23"),
    problem!(T; 153, "find-minimum-in-rotated-sorted-array", "Find Minimum in Rotated Sorted Array", Medium, Exact,
        |a| answer(find_min(a.get(0)?)),
        "[[3,4,5,1,2]]" => "1",
        "[[4,5,6,7,0,1,2]]" => "0",
        "[[11,13,15,17]]" => "11"),
    problem!(T; 33, "search-in-rotated-sorted-array", "Search in Rotated Sorted Array", Medium, Exact,
        |a| answer(search_rotated(a.get(0)?, a.get(1)?)),
        "[[4,5,6,7,0,1,2],0]" => "4",
        "[[4,5,6,7,0,1,2],3]" => "-1",
        "[[1],0]" => "-1"),
    problem!(T; 981, "time-based-key-value-store", "Time Based Key-Value Store", Medium, Exact,
        |a| replay(a, "TimeMap", |_| Ok(TimeMap::new()), |m, op, c| match op {
            "set" => {
                m.set(c.get(0)?, c.get(1)?, c.get(2)?);
                unit()
            }
            "get" => answer(m.get(c.get(0)?, c.get(1)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["TimeMap","set","get","get","set","get","get"],[[],["foo","bar",1],["foo",1],["foo",3],["foo","bar2",4],["foo",4],["foo",5]]]"#
            => r#"[null,null,"bar","bar",null,"bar2","bar2"]"#),
    problem!(T; 4, "median-of-two-sorted-arrays", "Median of Two Sorted Arrays", Hard, Float,
        |a| answer(find_median_sorted_arrays(a.get(0)?, a.get(1)?)),
        "[[1,3],[2]]" => "2.0",
        "[[1,2],[3,4]]" => "2.5"),
    problem!(T; 34, "find-first-and-last-position-of-element-in-sorted-array",
        "Find First and Last Position of Element in Sorted Array", Medium, Exact,
        |a| answer(search_range(a.get(0)?, a.get(1)?)),
        "[[5,7,7,8,8,10],8]" => "[3,4]",
        "[[5,7,7,8,8,10],6]" => "[-1,-1]",
        "[[],0]" => "[-1,-1]"),
    problem!(T; 69, "sqrtx", "Sqrt(x)", Easy, Exact,
        |a| answer(my_sqrt(a.get(0)?)),
        "[4]" => "2",
        "[8]" => "2",
        "[2147395599]" => "46339"),
    problem!(T; 162, "find-peak-element", "Find Peak Element", Medium, Exact,
        |a| answer(find_peak_element(a.get(0)?)),
        "[[1,2,3,1]]" => "2",
        "[[1,2,1,3,5,6,4]]" => "5"),
];
