// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::Baton;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Fizz,
    Buzz,
    FizzBuzz,
    Number,
}

impl Kind {
    fn of(i: usize) -> Self {
        match (i % 3, i % 5) {
            (0, 0) => Kind::FizzBuzz,
            (0, _) => Kind::Fizz,
            (_, 0) => Kind::Buzz,
            _ => Kind::Number,
        }
    }
}

/// 1195. Fizz Buzz Multithreaded
///
/// Four threads share the counter `1..=n`; each prints only the values of
/// its own kind.
#[derive(Debug)]
pub struct FizzBuzz {
    n: usize,
    baton: Baton,
}

impl FizzBuzz {
    pub fn new(n: i32) -> Self {
        Self {
            n: n.max(0) as usize,
            baton: Baton::new(),
        }
    }

    fn serve(&self, kind: Kind, act: impl Fn(usize)) {
        while self.baton.take(self.n, |t| Kind::of(t + 1) == kind, |t| act(t + 1)) {}
    }

    pub fn fizz(&self, print_fizz: impl Fn()) {
        self.serve(Kind::Fizz, |_| print_fizz());
    }

    pub fn buzz(&self, print_buzz: impl Fn()) {
        self.serve(Kind::Buzz, |_| print_buzz());
    }

    pub fn fizzbuzz(&self, print_fizzbuzz: impl Fn()) {
        self.serve(Kind::FizzBuzz, |_| print_fizzbuzz());
    }

    pub fn number(&self, print_number: impl Fn(i32)) {
        self.serve(Kind::Number, |i| print_number(i as i32));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::transcript::Transcript;

    #[test]
    fn fifteen() {
        let fb = FizzBuzz::new(15);
        let out = Transcript::default();
        let word = |w: &str| out.write(&format!("{w},"));
        std::thread::scope(|s| {
            s.spawn(|| fb.number(|i| word(&i.to_string())));
            s.spawn(|| fb.fizzbuzz(|| word("fizzbuzz")));
            s.spawn(|| fb.buzz(|| word("buzz")));
            s.spawn(|| fb.fizz(|| word("fizz")));
        });
        assert_eq!(
            out.into_string(),
            "1,2,fizz,4,buzz,fizz,7,8,fizz,buzz,11,fizz,13,14,fizzbuzz,"
        );
    }
}
