// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thread exercises run on real threads; the answer is what the callbacks
//! printed.

use crate::catalog::{answer, problem, Args, Problem, Topic};
use crate::concurrency::transcript::Transcript;
use crate::concurrency::*;
use crate::error::{Result, SolveError};
use serde_json::Value;
use std::thread;

const T: Topic = Topic::Concurrency;

/// Starts one thread per stage of `order` (1, 2 or 3), in that order.
fn print_in_order(args: &Args) -> Result<Value> {
    let order: Vec<i32> = args.get(0)?;
    let mut stages = order.clone();
    stages.sort_unstable();
    if stages != [1, 2, 3] {
        return Err(SolveError::invalid("order must be a permutation of [1,2,3]"));
    }
    let foo = Foo::new();
    let out = Transcript::default();
    thread::scope(|s| {
        for which in order {
            let (foo, out) = (&foo, &out);
            s.spawn(move || match which {
                1 => foo.first(|| out.write("first")),
                2 => foo.second(|| out.write("second")),
                _ => foo.third(|| out.write("third")),
            });
        }
    });
    answer(out.into_string())
}

fn foo_bar(args: &Args) -> Result<Value> {
    let fb = FooBar::new(args.get(0)?);
    let out = Transcript::default();
    thread::scope(|s| {
        s.spawn(|| fb.bar(|| out.write("bar")));
        s.spawn(|| fb.foo(|| out.write("foo")));
    });
    answer(out.into_string())
}

fn zero_even_odd(args: &Args) -> Result<Value> {
    let zeo = ZeroEvenOdd::new(args.get(0)?);
    let out = Transcript::default();
    let print = |x: i32| out.write(&x.to_string());
    thread::scope(|s| {
        s.spawn(|| zeo.zero(print));
        s.spawn(|| zeo.even(print));
        s.spawn(|| zeo.odd(print));
    });
    answer(out.into_string())
}

fn fizz_buzz(args: &Args) -> Result<Value> {
    let fb = FizzBuzz::new(args.get(0)?);
    let out = Transcript::default();
    thread::scope(|s| {
        s.spawn(|| fb.fizz(|| out.write("fizz")));
        s.spawn(|| fb.buzz(|| out.write("buzz")));
        s.spawn(|| fb.fizzbuzz(|| out.write("fizzbuzz")));
        s.spawn(|| fb.number(|i| out.write(&i.to_string())));
    });
    answer(out.into_parts())
}

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 1114, "print-in-order", "Print in Order", Easy, Exact,
        print_in_order,
        "[[1,2,3]]" => r#""firstsecondthird""#,
        "[[1,3,2]]" => r#""firstsecondthird""#,
        "[[3,2,1]]" => r#""firstsecondthird""#),
    problem!(T; 1115, "print-foobar-alternately", "Print FooBar Alternately", Medium, Exact,
        foo_bar,
        "[1]" => r#""foobar""#,
        "[2]" => r#""foobarfoobar""#),
    problem!(T; 1116, "print-zero-even-odd", "Print Zero Even Odd", Medium, Exact,
        zero_even_odd,
        "[2]" => r#""0102""#,
        "[5]" => r#""0102030405""#),
    problem!(T; 1195, "fizz-buzz-multithreaded", "Fizz Buzz Multithreaded", Medium, Exact,
        fizz_buzz,
        "[15]" => r#"["1","2","fizz","4","buzz","fizz","7","8","fizz","buzz","11","fizz","13","14","fizzbuzz"]"#,
        "[5]" => r#"["1","2","fizz","4","buzz"]"#),
];
