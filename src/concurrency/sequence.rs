// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::Baton;

/// 1114. Print in Order
///
/// `first`, `second` and `third` may be called from three threads in any
/// order; their callbacks still run in that order.
#[derive(Debug, Default)]
pub struct Foo {
    baton: Baton,
}

impl Foo {
    const STAGES: usize = 3;

    pub fn new() -> Self {
        Self { baton: Baton::new() }
    }

    pub fn first(&self, print_first: impl FnOnce()) {
        self.baton.take(Self::STAGES, |t| t == 0, |_| print_first());
    }

    pub fn second(&self, print_second: impl FnOnce()) {
        self.baton.take(Self::STAGES, |t| t == 1, |_| print_second());
    }

    pub fn third(&self, print_third: impl FnOnce()) {
        self.baton.take(Self::STAGES, |t| t == 2, |_| print_third());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concurrency::transcript::Transcript;

    #[test]
    fn any_start_order() {
        for order in [[1, 2, 3], [1, 3, 2], [3, 2, 1], [2, 3, 1]] {
            let foo = Foo::new();
            let out = Transcript::default();
            std::thread::scope(|s| {
                for which in order {
                    let (foo, out) = (&foo, &out);
                    s.spawn(move || match which {
                        1 => foo.first(|| out.write("first")),
                        2 => foo.second(|| out.write("second")),
                        _ => foo.third(|| out.write("third")),
                    });
                }
            });
            assert_eq!(out.into_string(), "firstsecondthird");
        }
    }
}
