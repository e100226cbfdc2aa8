// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Timestamped values per key.

use std::collections::HashMap;

/// 981. Time Based Key-Value Store
///
/// Versioned key-value store.
///
/// `set` calls arrive with strictly increasing timestamps, so each key's
/// history stays sorted and `get` is a binary search.
#[derive(Debug, Default)]
pub struct TimeMap {
    history: HashMap<String, Vec<(i32, String)>>,
}

impl TimeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: String, value: String, timestamp: i32) {
        self.history.entry(key).or_default().push((timestamp, value));
    }

    /// Value with the largest timestamp `<= timestamp`, or `""`.
    pub fn get(&self, key: String, timestamp: i32) -> String {
        let Some(versions) = self.history.get(&key) else {
            return String::new();
        };
        let past = versions.partition_point(|(ts, _)| *ts <= timestamp);
        if past == 0 {
            String::new()
        } else {
            versions[past - 1].1.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_latest_version_at_or_before() {
        let mut map = TimeMap::new();
        map.set("foo".into(), "bar".into(), 1);
        assert_eq!(map.get("foo".into(), 1), "bar");
        assert_eq!(map.get("foo".into(), 3), "bar");
        map.set("foo".into(), "bar2".into(), 4);
        assert_eq!(map.get("foo".into(), 4), "bar2");
        assert_eq!(map.get("foo".into(), 5), "bar2");
        assert_eq!(map.get("foo".into(), 0), "");
        assert_eq!(map.get("missing".into(), 10), "");
    }
}
