// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::intervals::*;

const T: Topic = Topic::Intervals;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 57, "insert-interval", "Insert Interval", Medium, Exact,
        |a| answer(insert(a.get(0)?, a.get(1)?)),
        "[[[1,3],[6,9]],[2,5]]" => "[[1,5],[6,9]]",
        "[[[1,2],[3,5],[6,7],[8,10],[12,16]],[4,8]]" => "[[1,2],[3,10],[12,16]]",
        "[[],[5,7]]" => "[[5,7]]"),
    problem!(T; 56, "merge-intervals", "Merge Intervals", Medium, Exact,
        |a| answer(merge(a.get(0)?)),
        "[[[1,3],[2,6],[8,10],[15,18]]]" => "[[1,6],[8,10],[15,18]]",
        "[[[1,4],[4,5]]]" => "[[1,5]]"),
    problem!(T; 435, "non-overlapping-intervals", "Non-overlapping Intervals", Medium, Exact,
        |a| answer(erase_overlap_intervals(a.get(0)?)),
        "[[[1,2],[2,3],[3,4],[1,3]]]" => "1",
        "[[[1,2],[1,2],[1,2]]]" => "2",
        "[[[1,2],[2,3]]]" => "0"),
    problem!(T; 252, "meeting-rooms", "Meeting Rooms", Easy, Exact,
        |a| answer(can_attend_meetings(a.get(0)?)),
        "[[[0,30],[5,10],[15,20]]]" => "false",
        "[[[7,10],[2,4]]]" => "true"),
    problem!(T; 253, "meeting-rooms-ii", "Meeting Rooms II", Medium, Exact,
        |a| answer(min_meeting_rooms(a.get(0)?)),
        "[[[0,30],[5,10],[15,20]]]" => "2",
        "[[[7,10],[2,4]]]" => "1"),
    problem!(T; 1851, "minimum-interval-to-include-each-query", "Minimum Interval to Include Each Query", Hard, Exact,
        |a| answer(min_interval(a.get(0)?, a.get(1)?)),
        "[[[1,4],[2,4],[3,6],[4,4]],[2,3,4,5]]" => "[3,3,1,4]",
        "[[[2,3],[2,5],[1,8],[20,25]],[2,19,5,22]]" => "[2,-1,4,6]"),
    problem!(T; 986, "interval-list-intersections", "Interval List Intersections", Medium, Exact,
        |a| answer(interval_intersection(a.get(0)?, a.get(1)?)),
        "[[[0,2],[5,10],[13,23],[24,25]],[[1,5],[8,12],[15,24],[25,26]]]"
            => "[[1,2],[5,5],[8,10],[15,23],[24,24],[25,25]]",
        "[[[1,3],[5,9]],[]]" => "[]"),
];
