// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hash containers built without `std::collections::HashMap`.

const BUCKETS: usize = 769;

fn bucket_of(key: i32) -> usize {
    key.rem_euclid(BUCKETS as i32) as usize
}

/// 705. Design HashSet
#[derive(Debug, Clone)]
pub struct MyHashSet {
    buckets: Vec<Vec<i32>>,
}

impl MyHashSet {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKETS],
        }
    }

    pub fn add(&mut self, key: i32) {
        let bucket = &mut self.buckets[bucket_of(key)];
        if !bucket.contains(&key) {
            bucket.push(key);
        }
    }

    pub fn remove(&mut self, key: i32) {
        self.buckets[bucket_of(key)].retain(|&k| k != key);
    }

    pub fn contains(&self, key: i32) -> bool {
        self.buckets[bucket_of(key)].contains(&key)
    }
}

/// 706. Design HashMap
#[derive(Debug, Clone)]
pub struct MyHashMap {
    buckets: Vec<Vec<(i32, i32)>>,
}

impl MyHashMap {
    pub fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); BUCKETS],
        }
    }

    pub fn put(&mut self, key: i32, value: i32) {
        let bucket = &mut self.buckets[bucket_of(key)];
        match bucket.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => bucket.push((key, value)),
        }
    }

    /// Value for `key`, or -1.
    pub fn get(&self, key: i32) -> i32 {
        self.buckets[bucket_of(key)]
            .iter()
            .find(|(k, _)| *k == key)
            .map_or(-1, |&(_, v)| v)
    }

    pub fn remove(&mut self, key: i32) {
        self.buckets[bucket_of(key)].retain(|&(k, _)| k != key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set() {
        let mut set = MyHashSet::new();
        set.add(1);
        set.add(2);
        assert!(set.contains(1));
        assert!(!set.contains(3));
        set.add(2);
        assert!(set.contains(2));
        set.remove(2);
        assert!(!set.contains(2));
        set.add(769 + 1);
        assert!(set.contains(1) && set.contains(770));
        set.add(-5);
        assert!(set.contains(-5));
    }

    #[test]
    fn map() {
        let mut map = MyHashMap::new();
        map.put(1, 1);
        map.put(2, 2);
        assert_eq!(map.get(1), 1);
        assert_eq!(map.get(3), -1);
        map.put(2, 1);
        assert_eq!(map.get(2), 1);
        map.remove(2);
        assert_eq!(map.get(2), -1);
    }
}
