// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, replay, unit, unknown, Problem, Topic};
use crate::segment_tree::*;

const T: Topic = Topic::SegmentTree;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 307, "range-sum-query-mutable", "Range Sum Query - Mutable", Medium, Exact,
        |a| replay(a, "NumArray", |c| Ok(NumArray::new(c.get(0)?)), |s, op, c| match op {
            "update" => {
                s.update(c.get(0)?, c.get(1)?);
                unit()
            }
            "sumRange" => answer(s.sum_range(c.get(0)?, c.get(1)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["NumArray","sumRange","update","sumRange"],[[[1,3,5]],[0,2],[1,2],[0,2]]]"# => "[null,9,null,8]"),
    problem!(T; 715, "range-module", "Range Module", Hard, Exact,
        |a| replay(a, "RangeModule", |_| Ok(RangeModule::new()), |m, op, c| match op {
            "addRange" => {
                m.add_range(c.get(0)?, c.get(1)?);
                unit()
            }
            "removeRange" => {
                m.remove_range(c.get(0)?, c.get(1)?);
                unit()
            }
            "queryRange" => answer(m.query_range(c.get(0)?, c.get(1)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["RangeModule","addRange","removeRange","queryRange","queryRange","queryRange"],[[],[10,20],[14,16],[10,14],[13,15],[16,17]]]"#
            => "[null,null,null,true,false,true]"),
    problem!(T; 732, "my-calendar-iii", "My Calendar III", Hard, Exact,
        |a| replay(a, "MyCalendarThree", |_| Ok(MyCalendarThree::new()), |cal, op, c| match op {
            "book" => answer(cal.book(c.get(0)?, c.get(1)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["MyCalendarThree","book","book","book","book","book","book"],[[],[10,20],[50,60],[10,40],[5,15],[5,10],[25,55]]]"#
            => "[null,1,1,2,3,3,3]"),
    problem!(T; 850, "rectangle-area-ii", "Rectangle Area II", Hard, Exact,
        |a| answer(rectangle_area(a.get(0)?)),
        "[[[0,0,2,2],[1,0,2,3],[1,0,3,1]]]" => "6",
        "[[[0,0,1000000000,1000000000]]]" => "49"),
    problem!(T; 699, "falling-squares", "Falling Squares", Hard, Exact,
        |a| answer(falling_squares(a.get(0)?)),
        "[[[1,2],[2,3],[6,1]]]" => "[2,5,5]",
        "[[[100,100],[200,100]]]" => "[100,100]"),
    problem!(T; 315, "count-of-smaller-numbers-after-self", "Count of Smaller Numbers After Self", Hard, Exact,
        |a| answer(count_smaller(a.get(0)?)),
        "[[5,2,6,1]]" => "[2,1,1,0]",
        "[[-1]]" => "[0]",
        "[[-1,-1]]" => "[0,0]"),
];
