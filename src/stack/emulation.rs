// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Containers built out of other containers.

use std::collections::VecDeque;

/// 155. Min Stack
///
/// Each entry remembers the minimum of the stack beneath and including it.
#[derive(Debug, Default)]
pub struct MinStack {
    entries: Vec<(i32, i32)>,
}

impl MinStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, val: i32) {
        let min = self.entries.last().map_or(val, |&(_, m)| m.min(val));
        self.entries.push((val, min));
    }

    pub fn pop(&mut self) {
        self.entries.pop();
    }

    /// Top value; 0 on an empty stack.
    pub fn top(&self) -> i32 {
        self.entries.last().map_or(0, |&(v, _)| v)
    }

    /// Minimum value; 0 on an empty stack.
    pub fn get_min(&self) -> i32 {
        self.entries.last().map_or(0, |&(_, m)| m)
    }
}

/// 232. Implement Queue using Stacks
///
/// Amortized O(1): `outbox` is refilled from `inbox` only when empty.
#[derive(Debug, Default)]
pub struct MyQueue {
    inbox: Vec<i32>,
    outbox: Vec<i32>,
}

impl MyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: i32) {
        self.inbox.push(x);
    }

    pub fn pop(&mut self) -> i32 {
        self.shift();
        self.outbox.pop().unwrap_or(-1)
    }

    pub fn peek(&mut self) -> i32 {
        self.shift();
        self.outbox.last().copied().unwrap_or(-1)
    }

    pub fn empty(&self) -> bool {
        self.inbox.is_empty() && self.outbox.is_empty()
    }

    fn shift(&mut self) {
        if self.outbox.is_empty() {
            while let Some(x) = self.inbox.pop() {
                self.outbox.push(x);
            }
        }
    }
}

/// 225. Implement Stack using Queues
///
/// One queue, rotated after each push so the newest element is in front.
#[derive(Debug, Default)]
pub struct MyStack {
    queue: VecDeque<i32>,
}

impl MyStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, x: i32) {
        self.queue.push_back(x);
        for _ in 1..self.queue.len() {
            if let Some(front) = self.queue.pop_front() {
                self.queue.push_back(front);
            }
        }
    }

    pub fn pop(&mut self) -> i32 {
        self.queue.pop_front().unwrap_or(-1)
    }

    pub fn top(&self) -> i32 {
        self.queue.front().copied().unwrap_or(-1)
    }

    pub fn empty(&self) -> bool {
        self.queue.is_empty()
    }
}
