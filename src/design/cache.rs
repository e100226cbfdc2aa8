// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bounded caches with O(1) `get` and `put`.

use super::links::{Ends, Slab};
use std::collections::HashMap;
use tracing::trace;

/// 146. LRU Cache
///
/// Recency order is a single linked list in a slab, most recent at the head;
/// the map points each key at its slot.
#[derive(Debug, Clone)]
pub struct LruCache {
    capacity: usize,
    map: HashMap<i32, usize>,
    slab: Slab,
    order: Ends,
}

impl LruCache {
    pub fn new(capacity: i32) -> Self {
        let capacity = capacity.max(0) as usize;
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slab: Slab::default(),
            order: Ends::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Value for `key`, or -1. A hit makes `key` the most recent entry.
    pub fn get(&mut self, key: i32) -> i32 {
        let Some(&slot) = self.map.get(&key) else {
            return -1;
        };
        self.slab.unlink(&mut self.order, slot);
        self.slab.push_front(&mut self.order, slot);
        self.slab.get(slot).value
    }

    /// Inserts or updates `key`, evicting the least recent entry when full.
    pub fn put(&mut self, key: i32, value: i32) {
        if let Some(&slot) = self.map.get(&key) {
            self.slab.get_mut(slot).value = value;
            self.slab.unlink(&mut self.order, slot);
            self.slab.push_front(&mut self.order, slot);
            return;
        }
        if self.capacity == 0 {
            return;
        }
        if self.map.len() == self.capacity {
            if let Some(victim) = self.order.back() {
                self.slab.unlink(&mut self.order, victim);
                let evicted = self.slab.get(victim).key;
                trace!(key = evicted, "lru evict");
                self.map.remove(&evicted);
                self.slab.release(victim);
            }
        }
        let slot = self.slab.alloc(key, value);
        self.slab.push_front(&mut self.order, slot);
        self.map.insert(key, slot);
    }
}

/// 460. LFU Cache
///
/// One recency list per use count, all in one slab. Eviction takes the
/// least recent entry of the lowest count.
#[derive(Debug, Clone)]
pub struct LfuCache {
    capacity: usize,
    map: HashMap<i32, usize>,
    slab: Slab,
    buckets: HashMap<u32, Ends>,
    min_freq: u32,
}

impl LfuCache {
    pub fn new(capacity: i32) -> Self {
        let capacity = capacity.max(0) as usize;
        Self {
            capacity,
            map: HashMap::with_capacity(capacity),
            slab: Slab::default(),
            buckets: HashMap::new(),
            min_freq: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Moves `slot` from its count's list to the next count's list.
    fn touch(&mut self, slot: usize) {
        let freq = self.slab.get(slot).freq;
        if let Some(bucket) = self.buckets.get_mut(&freq) {
            self.slab.unlink(bucket, slot);
            if bucket.is_empty() {
                self.buckets.remove(&freq);
                if self.min_freq == freq {
                    self.min_freq = freq + 1;
                }
            }
        }
        self.slab.get_mut(slot).freq = freq + 1;
        let bucket = self.buckets.entry(freq + 1).or_default();
        self.slab.push_front(bucket, slot);
    }

    fn evict(&mut self) {
        let Some(bucket) = self.buckets.get_mut(&self.min_freq) else {
            return;
        };
        let Some(victim) = bucket.back() else { return };
        self.slab.unlink(bucket, victim);
        if bucket.is_empty() {
            self.buckets.remove(&self.min_freq);
        }
        let key = self.slab.get(victim).key;
        trace!(key, freq = self.min_freq, "lfu evict");
        self.map.remove(&key);
        self.slab.release(victim);
    }

    pub fn get(&mut self, key: i32) -> i32 {
        let Some(&slot) = self.map.get(&key) else {
            return -1;
        };
        self.touch(slot);
        self.slab.get(slot).value
    }

    pub fn put(&mut self, key: i32, value: i32) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&slot) = self.map.get(&key) {
            self.slab.get_mut(slot).value = value;
            self.touch(slot);
            return;
        }
        if self.map.len() == self.capacity {
            self.evict();
        }
        let slot = self.slab.alloc(key, value);
        self.slab.push_front(self.buckets.entry(1).or_default(), slot);
        self.map.insert(key, slot);
        self.min_freq = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lru_sequence() {
        let mut cache = LruCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(1), 1);
        cache.put(3, 3);
        assert_eq!(cache.get(2), -1);
        cache.put(4, 4);
        assert_eq!(cache.get(1), -1);
        assert_eq!(cache.get(3), 3);
        assert_eq!(cache.get(4), 4);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn lru_update_refreshes() {
        let mut cache = LruCache::new(2);
        cache.put(2, 1);
        cache.put(1, 1);
        cache.put(2, 3);
        cache.put(4, 1);
        assert_eq!(cache.get(1), -1);
        assert_eq!(cache.get(2), 3);
        let mut empty = LruCache::new(0);
        empty.put(1, 1);
        assert_eq!(empty.get(1), -1);
        assert!(empty.is_empty());
    }

    #[test]
    fn lfu_sequence() {
        let mut cache = LfuCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        assert_eq!(cache.get(1), 1);
        cache.put(3, 3);
        assert_eq!(cache.get(2), -1);
        assert_eq!(cache.get(3), 3);
        cache.put(4, 4);
        assert_eq!(cache.get(1), -1);
        assert_eq!(cache.get(3), 3);
        assert_eq!(cache.get(4), 4);
    }

    #[test]
    fn lfu_ties_go_to_least_recent() {
        let mut cache = LfuCache::new(2);
        cache.put(1, 1);
        cache.put(2, 2);
        cache.put(3, 3);
        assert_eq!(cache.get(1), -1);
        assert_eq!(cache.get(2), 2);
        assert_eq!(cache.get(3), 3);
        let mut zero = LfuCache::new(0);
        zero.put(0, 0);
        assert_eq!(zero.get(0), -1);
    }
}
