// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, replay, unit, unknown, Problem, Topic};
use crate::heap::*;

const T: Topic = Topic::Heap;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 1046, "last-stone-weight", "Last Stone Weight", Easy, Exact,
        |a| answer(last_stone_weight(a.get(0)?)),
        "[[2,7,4,1,8,1]]" => "1",
        "[[1]]" => "1",
        "[[2,2]]" => "0"),
    problem!(T; 973, "k-closest-points-to-origin", "K Closest Points to Origin", Medium, AnyOrder,
        |a| answer(k_closest(a.get(0)?, a.get(1)?)),
        "[[[1,3],[-2,2]],1]" => "[[-2,2]]",
        "[[[3,3],[5,-1],[-2,4]],2]" => "[[3,3],[-2,4]]"),
    problem!(T; 215, "kth-largest-element-in-an-array", "Kth Largest Element in an Array", Medium, Exact,
        |a| answer(find_kth_largest(a.get(0)?, a.get(1)?)),
        "[[3,2,1,5,6,4],2]" => "5",
        "[[3,2,3,1,2,4,5,5,6],4]" => "4"),
    problem!(T; 347, "top-k-frequent-elements", "Top K Frequent Elements", Medium, AnyOrder,
        |a| answer(top_k_frequent(a.get(0)?, a.get(1)?)),
        "[[1,1,1,2,2,3],2]" => "[1,2]",
        "[[1],1]" => "[1]"),
    problem!(T; 378, "kth-smallest-element-in-a-sorted-matrix", "Kth Smallest Element in a Sorted Matrix", Medium, Exact,
        |a| answer(kth_smallest_matrix(a.get(0)?, a.get(1)?)),
        "[[[1,5,9],[10,11,13],[12,13,15]],8]" => "13",
        "[[[-5]],1]" => "-5"),
    problem!(T; 621, "task-scheduler", "Task Scheduler", Medium, Exact,
        |a| answer(least_interval(a.get(0)?, a.get(1)?)),
        r#"[["A","A","A","B","B","B"],2]"# => "8",
        r#"[["A","C","A","B","D","B"],1]"# => "6",
        r#"[["A","A","A","B","B","B"],0]"# => "6"),
    problem!(T; 767, "reorganize-string", "Reorganize String", Medium, Exact,
        |a| answer(reorganize_string(a.get(0)?)),
        r#"["aab"]"# => r#""aba""#,
        r#"["aaab"]"# => r#""""#),
    problem!(T; 703, "kth-largest-element-in-a-stream", "Kth Largest Element in a Stream", Easy, Exact,
        |a| replay(a, "KthLargest", |c| Ok(KthLargest::new(c.get(0)?, c.get(1)?)), |s, op, c| match op {
            "add" => answer(s.add(c.get(0)?)),
            _ => Err(unknown(op)),
        }),
        "[[\"KthLargest\",\"add\",\"add\",\"add\",\"add\",\"add\"],[[3,[4,5,8,2]],[3],[5],[10],[9],[4]]]"
            => "[null,4,5,5,8,8]"),
    problem!(T; 295, "find-median-from-data-stream", "Find Median from Data Stream", Hard, Float,
        |a| replay(a, "MedianFinder", |_| Ok(MedianFinder::new()), |m, op, c| match op {
            "addNum" => {
                m.add_num(c.get(0)?);
                unit()
            }
            "findMedian" => answer(m.find_median()),
            _ => Err(unknown(op)),
        }),
        r#"[["MedianFinder","addNum","addNum","findMedian","addNum","findMedian"],[[],[1],[2],[],[3],[]]]"#
            => "[null,null,null,1.5,null,2.0]"),
    problem!(T; 355, "design-twitter", "Design Twitter", Medium, Exact,
        |a| replay(a, "Twitter", |_| Ok(Twitter::new()), |t, op, c| match op {
            "postTweet" => {
                t.post_tweet(c.get(0)?, c.get(1)?);
                unit()
            }
            "getNewsFeed" => answer(t.get_news_feed(c.get(0)?)),
            "follow" => {
                t.follow(c.get(0)?, c.get(1)?);
                unit()
            }
            "unfollow" => {
                t.unfollow(c.get(0)?, c.get(1)?);
                unit()
            }
            _ => Err(unknown(op)),
        }),
        r#"[["Twitter","postTweet","getNewsFeed","follow","postTweet","getNewsFeed","unfollow","getNewsFeed"],[[],[1,5],[1],[1,2],[2,6],[1],[1,2],[1]]]"#
            => "[null,null,[5],null,null,[6,5],null,[5]]"),
];
