// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Thread-ordering exercises.
//!
//! Every exercise value is shared by several threads, each calling one of
//! its methods with an output callback. A [`Baton`] serialises them: a turn
//! counter behind a `parking_lot` mutex, and a condition variable that wakes
//! waiters whenever the counter moves.
//!
//! ```text
//!   turn:    0      1      2      3     ...  end
//!   owner:  foo    bar    foo    bar
//! ```
//!
//! Callbacks run while the baton is held, so output order equals turn order.

mod alternate;
mod classify;
mod sequence;

pub use alternate::{FooBar, ZeroEvenOdd};
pub use classify::FizzBuzz;
pub use sequence::Foo;

use parking_lot::{Condvar, Mutex, MutexGuard};

#[derive(Debug, Default)]
pub(crate) struct Baton {
    turn: Mutex<usize>,
    moved: Condvar,
}

impl Baton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks until the current turn satisfies `mine` or reaches `end`.
    /// In the first case runs `act` with the turn, advances the counter and
    /// returns `true`; in the second returns `false`.
    ///
    /// The counter advances even if `act` panics.
    pub fn take(&self, end: usize, mine: impl Fn(usize) -> bool, act: impl FnOnce(usize)) -> bool {
        let mut turn = self.turn.lock();
        self.moved.wait_while(&mut turn, |t| *t < end && !mine(*t));
        if *turn >= end {
            return false;
        }
        let current = *turn;
        let _pass = Pass { turn, moved: &self.moved };
        act(current);
        true
    }
}

/// Advances the turn and wakes the waiters when dropped, lock still held.
struct Pass<'a> {
    turn: MutexGuard<'a, usize>,
    moved: &'a Condvar,
}

impl Drop for Pass<'_> {
    fn drop(&mut self) {
        *self.turn += 1;
        self.moved.notify_all();
    }
}

pub(crate) mod transcript {
    //! Collects callback output from several threads.

    use parking_lot::Mutex;

    /// Pieces of output in the order the callbacks wrote them.
    #[derive(Debug, Default)]
    pub struct Transcript(Mutex<Vec<String>>);

    impl Transcript {
        pub fn write(&self, text: &str) {
            self.0.lock().push(text.to_string());
        }

        pub fn into_parts(self) -> Vec<String> {
            self.0.into_inner()
        }

        pub fn into_string(self) -> String {
            self.into_parts().concat()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baton_orders_turns() {
        let baton = Baton::new();
        let log = Mutex::new(Vec::new());
        std::thread::scope(|s| {
            for parity in [1, 0] {
                let (baton, log) = (&baton, &log);
                s.spawn(move || while baton.take(6, |t| t % 2 == parity, |t| log.lock().push(t)) {});
            }
        });
        assert_eq!(log.into_inner(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn baton_passes_on_after_a_panicking_callback() {
        let baton = Baton::new();
        let log = Mutex::new(Vec::new());
        std::thread::scope(|s| {
            let failing = s.spawn(|| baton.take(3, |t| t == 0, |_| panic!("callback failed")));
            let (baton, log) = (&baton, &log);
            s.spawn(move || while baton.take(3, |t| t > 0, |t| log.lock().push(t)) {});
            assert!(failing.join().is_err());
        });
        assert_eq!(log.into_inner(), vec![1, 2]);
    }
}
