// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, replay, unit, unknown, Problem, Topic};
use crate::stack::*;

const T: Topic = Topic::Stack;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 20, "valid-parentheses", "Valid Parentheses", Easy, Exact,
        |a| answer(is_valid(a.get(0)?)),
        r#"["()"]"# => "true",
        r#"["()[]{}"]"# => "true",
        r#"["(]"]"# => "false",
        r#"["([])"]"# => "true"),
    problem!(T; 155, "min-stack", "Min Stack", Medium, Exact,
        |a| replay(a, "MinStack", |_| Ok(MinStack::new()), |s, op, c| match op {
            "push" => {
                s.push(c.get(0)?);
                unit()
            }
            "pop" => {
                s.pop();
                unit()
            }
            "top" => answer(s.top()),
            "getMin" => answer(s.get_min()),
            _ => Err(unknown(op)),
        }),
        r#"[["MinStack","push","push","push","getMin","pop","top","getMin"],[[],[-2],[0],[-3],[],[],[],[]]]"#
            => "[null,null,null,null,-3,null,0,-2]"),
    problem!(T; 150, "evaluate-reverse-polish-notation", "Evaluate Reverse Polish Notation", Medium, Exact,
        |a| answer(eval_rpn(a.get(0)?)),
        r#"[["2","1","+","3","*"]]"# => "9",
        r#"[["4","13","5","/","+"]]"# => "6",
        r#"[["10","6","9","3","+","-11","*","/","*","17","+","5","+"]]"# => "22"),
    problem!(T; 739, "daily-temperatures", "Daily Temperatures", Medium, Exact,
        |a| answer(daily_temperatures(a.get(0)?)),
        "[[73,74,75,71,69,72,76,73]]" => "[1,1,4,2,1,1,0,0]",
        "[[30,40,50,60]]" => "[1,1,1,0]",
        "[[30,60,90]]" => "[1,1,0]"),
    problem!(T; 853, "car-fleet", "Car Fleet", Medium, Exact,
        |a| answer(car_fleet(a.get(0)?, a.get(1)?, a.get(2)?)),
        "[12,[10,8,0,5,3],[2,4,1,1,3]]" => "3",
        "[10,[3],[3]]" => "1",
        "[100,[0,2,4],[4,2,1]]" => "1"),
    problem!(T; 84, "largest-rectangle-in-histogram", "Largest Rectangle in Histogram", Hard, Exact,
        |a| answer(largest_rectangle_area(a.get(0)?)),
        "[[2,1,5,6,2,3]]" => "10",
        "[[2,4]]" => "4"),
    problem!(T; 85, "maximal-rectangle", "Maximal Rectangle", Hard, Exact,
        |a| answer(maximal_rectangle(a.get(0)?)),
        r#"[[["1","0","1","0","0"],["1","0","1","1","1"],["1","1","1","1","1"],["1","0","0","1","0"]]]"# => "6",
        r#"[[["0"]]]"# => "0",
        r#"[[["1"]]]"# => "1"),
    problem!(T; 232, "implement-queue-using-stacks", "Implement Queue using Stacks", Easy, Exact,
        |a| replay(a, "MyQueue", |_| Ok(MyQueue::new()), |q, op, c| match op {
            "push" => {
                q.push(c.get(0)?);
                unit()
            }
            "pop" => answer(q.pop()),
            "peek" => answer(q.peek()),
            "empty" => answer(q.empty()),
            _ => Err(unknown(op)),
        }),
        r#"[["MyQueue","push","push","peek","pop","empty"],[[],[1],[2],[],[],[]]]"#
            => "[null,null,null,1,1,false]"),
    problem!(T; 225, "implement-stack-using-queues", "Implement Stack using Queues", Easy, Exact,
        |a| replay(a, "MyStack", |_| Ok(MyStack::new()), |s, op, c| match op {
            "push" => {
                s.push(c.get(0)?);
                unit()
            }
            "pop" => answer(s.pop()),
            "top" => answer(s.top()),
            "empty" => answer(s.empty()),
            _ => Err(unknown(op)),
        }),
        r#"[["MyStack","push","push","top","pop","empty"],[[],[1],[2],[],[],[]]]"#
            => "[null,null,null,2,2,false]"),
    problem!(T; 394, "decode-string", "Decode String", Medium, Exact,
        |a| answer(decode_string(a.get(0)?)),
        r#"["3[a]2[bc]"]"# => r#""aaabcbc""#,
        r#"["3[a2[c]]"]"# => r#""accaccacc""#,
        r#"["2[abc]3[cd]ef"]"# => r#""abcabccdcdcdef""#),
    problem!(T; 71, "simplify-path", "Simplify Path", Medium, Exact,
        |a| answer(simplify_path(a.get(0)?)),
        r#"["/home/"]"# => r#""/home""#,
        r#"["/home//foo/"]"# => r#""/home/foo""#,
        r#"["/home/user/Documents/../Pictures"]"# => r#""/home/user/Pictures""#,
        r#"["/../"]"# => r#""/""#,
        r#"["/.../a/../b/c/../d/./"]"# => r#""/.../b/d""#),
];
