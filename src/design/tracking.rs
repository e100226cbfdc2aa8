// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Event trackers keyed by id or by time.

use std::collections::{HashMap, VecDeque};

/// 1396. Design Underground System
#[derive(Debug, Default, Clone)]
pub struct UndergroundSystem {
    open: HashMap<i32, (String, i32)>,
    /// (total minutes, trips) per (from, to) route.
    routes: HashMap<(String, String), (i64, i64)>,
}

impl UndergroundSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_in(&mut self, id: i32, station_name: String, t: i32) {
        self.open.insert(id, (station_name, t));
    }

    /// A check-out without a matching check-in is ignored.
    pub fn check_out(&mut self, id: i32, station_name: String, t: i32) {
        let Some((from, start)) = self.open.remove(&id) else {
            return;
        };
        let route = self.routes.entry((from, station_name)).or_default();
        route.0 += i64::from(t - start);
        route.1 += 1;
    }

    /// Mean trip time, or 0.0 for a route never completed.
    pub fn get_average_time(&self, start_station: String, end_station: String) -> f64 {
        match self.routes.get(&(start_station, end_station)) {
            Some(&(total, trips)) if trips > 0 => total as f64 / trips as f64,
            _ => 0.0,
        }
    }
}

/// 362. Design Hit Counter
///
/// Hits in the trailing 300 seconds. Timestamps arrive in non-decreasing
/// order; hits sharing a second are stored as one counted entry.
#[derive(Debug, Default, Clone)]
pub struct HitCounter {
    hits: VecDeque<(i32, i32)>,
    total: i32,
}

impl HitCounter {
    const WINDOW: i32 = 300;

    pub fn new() -> Self {
        Self::default()
    }

    fn expire(&mut self, timestamp: i32) {
        while let Some(&(t, count)) = self.hits.front() {
            if timestamp - t < Self::WINDOW {
                break;
            }
            self.total -= count;
            self.hits.pop_front();
        }
    }

    pub fn hit(&mut self, timestamp: i32) {
        self.expire(timestamp);
        match self.hits.back_mut() {
            Some((t, count)) if *t == timestamp => *count += 1,
            _ => self.hits.push_back((timestamp, 1)),
        }
        self.total += 1;
    }

    pub fn get_hits(&mut self, timestamp: i32) -> i32 {
        self.expire(timestamp);
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underground_averages() {
        let mut system = UndergroundSystem::new();
        system.check_in(45, "Leyton".into(), 3);
        system.check_in(32, "Paradise".into(), 8);
        system.check_in(27, "Leyton".into(), 10);
        system.check_out(45, "Waterloo".into(), 15);
        system.check_out(27, "Waterloo".into(), 20);
        system.check_out(32, "Cambridge".into(), 22);
        assert_eq!(system.get_average_time("Paradise".into(), "Cambridge".into()), 14.0);
        assert_eq!(system.get_average_time("Leyton".into(), "Waterloo".into()), 11.0);
        system.check_in(10, "Leyton".into(), 24);
        system.check_out(10, "Waterloo".into(), 38);
        assert_eq!(system.get_average_time("Leyton".into(), "Waterloo".into()), 12.0);
        assert_eq!(system.get_average_time("Nowhere".into(), "Waterloo".into()), 0.0);
    }

    #[test]
    fn trailing_window() {
        let mut counter = HitCounter::new();
        counter.hit(1);
        counter.hit(2);
        counter.hit(3);
        assert_eq!(counter.get_hits(4), 3);
        counter.hit(300);
        assert_eq!(counter.get_hits(300), 4);
        assert_eq!(counter.get_hits(301), 3);
        counter.hit(301);
        counter.hit(301);
        assert_eq!(counter.get_hits(302), 4);
        assert_eq!(counter.get_hits(1000), 0);
    }
}
