// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Heaps maintained over a stream of updates.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// 703. Kth Largest Element in a Stream
///
/// A min-heap of the `k` largest values seen; its top is the answer.
#[derive(Debug, Clone)]
pub struct KthLargest {
    k: usize,
    heap: BinaryHeap<Reverse<i32>>,
}

impl KthLargest {
    pub fn new(k: i32, nums: Vec<i32>) -> Self {
        let mut this = KthLargest {
            k: k.max(1) as usize,
            heap: BinaryHeap::new(),
        };
        for num in nums {
            this.push(num);
        }
        this
    }

    fn push(&mut self, val: i32) {
        self.heap.push(Reverse(val));
        if self.heap.len() > self.k {
            self.heap.pop();
        }
    }

    /// Adds `val` and returns the current kth largest, or -1 while fewer
    /// than `k` values have been seen.
    pub fn add(&mut self, val: i32) -> i32 {
        self.push(val);
        if self.heap.len() < self.k {
            return -1;
        }
        self.heap.peek().map_or(-1, |Reverse(v)| *v)
    }
}

/// 295. Find Median from Data Stream
///
/// `low` is a max-heap of the smaller half, `high` a min-heap of the larger
/// half; `low` holds the extra element when the count is odd.
#[derive(Debug, Default, Clone)]
pub struct MedianFinder {
    low: BinaryHeap<i32>,
    high: BinaryHeap<Reverse<i32>>,
}

impl MedianFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_num(&mut self, num: i32) {
        self.low.push(num);
        if let Some(top) = self.low.pop() {
            self.high.push(Reverse(top));
        }
        if self.high.len() > self.low.len() {
            if let Some(Reverse(top)) = self.high.pop() {
                self.low.push(top);
            }
        }
    }

    /// 0.0 before any number arrives.
    pub fn find_median(&self) -> f64 {
        match (self.low.peek(), self.high.peek()) {
            (Some(&lo), Some(&Reverse(hi))) if self.low.len() == self.high.len() => {
                (f64::from(lo) + f64::from(hi)) / 2.0
            }
            (Some(&lo), _) => f64::from(lo),
            _ => 0.0,
        }
    }
}

/// 355. Design Twitter
#[derive(Debug, Default, Clone)]
pub struct Twitter {
    clock: u64,
    tweets: HashMap<i32, Vec<(u64, i32)>>,
    follows: HashMap<i32, HashSet<i32>>,
}

impl Twitter {
    const FEED_SIZE: usize = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn post_tweet(&mut self, user_id: i32, tweet_id: i32) {
        self.clock += 1;
        self.tweets
            .entry(user_id)
            .or_default()
            .push((self.clock, tweet_id));
    }

    /// Ten most recent tweet ids from the user and everyone they follow,
    /// newest first.
    pub fn get_news_feed(&self, user_id: i32) -> Vec<i32> {
        let authors = std::iter::once(user_id).chain(
            self.follows
                .get(&user_id)
                .into_iter()
                .flatten()
                .copied()
                .filter(move |&followee| followee != user_id),
        );
        // Each author's timeline is sorted by time; merge from the newest end.
        let mut heap = BinaryHeap::new();
        for author in authors {
            if let Some(timeline) = self.tweets.get(&author) {
                if let Some(&(time, tweet)) = timeline.last() {
                    heap.push((time, tweet, author, timeline.len() - 1));
                }
            }
        }
        let mut feed = Vec::with_capacity(Self::FEED_SIZE);
        while let Some((_, tweet, author, at)) = heap.pop() {
            feed.push(tweet);
            if feed.len() == Self::FEED_SIZE {
                break;
            }
            if at > 0 {
                let (time, tweet) = self.tweets[&author][at - 1];
                heap.push((time, tweet, author, at - 1));
            }
        }
        feed
    }

    pub fn follow(&mut self, follower_id: i32, followee_id: i32) {
        self.follows.entry(follower_id).or_default().insert(followee_id);
    }

    pub fn unfollow(&mut self, follower_id: i32, followee_id: i32) {
        if let Some(followees) = self.follows.get_mut(&follower_id) {
            followees.remove(&followee_id);
        }
    }
}
