// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Threads taking strict turns.

use super::Baton;

/// 1115. Print FooBar Alternately
#[derive(Debug)]
pub struct FooBar {
    n: usize,
    baton: Baton,
}

impl FooBar {
    pub fn new(n: i32) -> Self {
        Self {
            n: n.max(0) as usize,
            baton: Baton::new(),
        }
    }

    pub fn foo(&self, print_foo: impl Fn()) {
        while self.baton.take(2 * self.n, |t| t % 2 == 0, |_| print_foo()) {}
    }

    pub fn bar(&self, print_bar: impl Fn()) {
        while self.baton.take(2 * self.n, |t| t % 2 == 1, |_| print_bar()) {}
    }
}

/// 1116. Print Zero Even Odd
///
/// Prints `0 1 0 2 0 3 ... 0 n`: even turns belong to `zero`, odd turn `t`
/// prints `(t + 1) / 2` from whichever of `odd` or `even` matches its parity.
#[derive(Debug)]
pub struct ZeroEvenOdd {
    n: usize,
    baton: Baton,
}

impl ZeroEvenOdd {
    pub fn new(n: i32) -> Self {
        Self {
            n: n.max(0) as usize,
            baton: Baton::new(),
        }
    }

    fn value(turn: usize) -> usize {
        (turn + 1) / 2
    }

    pub fn zero(&self, print_number: impl Fn(i32)) {
        while self.baton.take(2 * self.n, |t| t % 2 == 0, |_| print_number(0)) {}
    }

    pub fn even(&self, print_number: impl Fn(i32)) {
        let mine = |t: usize| t % 2 == 1 && Self::value(t) % 2 == 0;
        while self.baton.take(2 * self.n, mine, |t| print_number(Self::value(t) as i32)) {}
    }

    pub fn odd(&self, print_number: impl Fn(i32)) {
        let mine = |t: usize| t % 2 == 1 && Self::value(t) % 2 == 1;
        while self.baton.take(2 * self.n, mine, |t| print_number(Self::value(t) as i32)) {}
    }
}
