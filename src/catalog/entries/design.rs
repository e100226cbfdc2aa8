// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, replay, unit, unknown, Problem, Topic};
use crate::design::*;

const T: Topic = Topic::Design;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 146, "lru-cache", "LRU Cache", Medium, Exact,
        |a| replay(a, "LRUCache", |c| Ok(LruCache::new(c.get(0)?)), |cache, op, c| match op {
            "get" => answer(cache.get(c.get(0)?)),
            "put" => {
                cache.put(c.get(0)?, c.get(1)?);
                unit()
            }
            _ => Err(unknown(op)),
        }),
        r#"[["LRUCache","put","put","get","put","get","put","get","get","get"],[[2],[1,1],[2,2],[1],[3,3],[2],[4,4],[1],[3],[4]]]"#
            => "[null,null,null,1,null,-1,null,-1,3,4]",
        r#"[["LRUCache","put","get","put","get","get"],[[1],[2,1],[2],[3,2],[2],[3]]]"#
            => "[null,null,1,null,-1,2]"),
    problem!(T; 460, "lfu-cache", "LFU Cache", Hard, Exact,
        |a| replay(a, "LFUCache", |c| Ok(LfuCache::new(c.get(0)?)), |cache, op, c| match op {
            "get" => answer(cache.get(c.get(0)?)),
            "put" => {
                cache.put(c.get(0)?, c.get(1)?);
                unit()
            }
            _ => Err(unknown(op)),
        }),
        r#"[["LFUCache","put","put","get","put","get","get","put","get","get","get"],[[2],[1,1],[2,2],[1],[3,3],[2],[3],[4,4],[1],[3],[4]]]"#
            => "[null,null,null,1,null,-1,3,null,-1,3,4]"),
    problem!(T; 705, "design-hashset", "Design HashSet", Easy, Exact,
        |a| replay(a, "MyHashSet", |_| Ok(MyHashSet::new()), |set, op, c| match op {
            "add" => {
                set.add(c.get(0)?);
                unit()
            }
            "remove" => {
                set.remove(c.get(0)?);
                unit()
            }
            "contains" => answer(set.contains(c.get(0)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["MyHashSet","add","add","contains","contains","add","contains","remove","contains"],[[],[1],[2],[1],[3],[2],[2],[2],[2]]]"#
            => "[null,null,null,true,false,null,true,null,false]"),
    problem!(T; 706, "design-hashmap", "Design HashMap", Easy, Exact,
        |a| replay(a, "MyHashMap", |_| Ok(MyHashMap::new()), |map, op, c| match op {
            "put" => {
                map.put(c.get(0)?, c.get(1)?);
                unit()
            }
            "get" => answer(map.get(c.get(0)?)),
            "remove" => {
                map.remove(c.get(0)?);
                unit()
            }
            _ => Err(unknown(op)),
        }),
        r#"[["MyHashMap","put","put","get","get","put","get","remove","get"],[[],[1,1],[2,2],[1],[3],[2,1],[2],[2],[2]]]"#
            => "[null,null,null,1,-1,null,1,null,-1]"),
    problem!(T; 622, "design-circular-queue", "Design Circular Queue", Medium, Exact,
        |a| replay(a, "MyCircularQueue", |c| Ok(MyCircularQueue::new(c.get(0)?)), |q, op, c| match op {
            "enQueue" => answer(q.en_queue(c.get(0)?)),
            "deQueue" => answer(q.de_queue()),
            "Front" => answer(q.front()),
            "Rear" => answer(q.rear()),
            "isEmpty" => answer(q.is_empty()),
            "isFull" => answer(q.is_full()),
            _ => Err(unknown(op)),
        }),
        r#"[["MyCircularQueue","enQueue","enQueue","enQueue","enQueue","Rear","isFull","deQueue","enQueue","Rear"],[[3],[1],[2],[3],[4],[],[],[],[4],[]]]"#
            => "[null,true,true,true,false,3,true,true,true,4]"),
    problem!(T; 641, "design-circular-deque", "Design Circular Deque", Medium, Exact,
        |a| replay(a, "MyCircularDeque", |c| Ok(MyCircularDeque::new(c.get(0)?)), |d, op, c| match op {
            "insertFront" => answer(d.insert_front(c.get(0)?)),
            "insertLast" => answer(d.insert_last(c.get(0)?)),
            "deleteFront" => answer(d.delete_front()),
            "deleteLast" => answer(d.delete_last()),
            "getFront" => answer(d.get_front()),
            "getRear" => answer(d.get_rear()),
            "isEmpty" => answer(d.is_empty()),
            "isFull" => answer(d.is_full()),
            _ => Err(unknown(op)),
        }),
        r#"[["MyCircularDeque","insertLast","insertLast","insertFront","insertFront","getRear","isFull","deleteLast","insertFront","getFront"],[[3],[1],[2],[3],[4],[],[],[],[4],[]]]"#
            => "[null,true,true,true,false,2,true,true,true,4]"),
    problem!(T; 1396, "design-underground-system", "Design Underground System", Medium, Float,
        |a| replay(a, "UndergroundSystem", |_| Ok(UndergroundSystem::new()), |sys, op, c| match op {
            "checkIn" => {
                sys.check_in(c.get(0)?, c.get(1)?, c.get(2)?);
                unit()
            }
            "checkOut" => {
                sys.check_out(c.get(0)?, c.get(1)?, c.get(2)?);
                unit()
            }
            "getAverageTime" => answer(sys.get_average_time(c.get(0)?, c.get(1)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["UndergroundSystem","checkIn","checkIn","checkIn","checkOut","checkOut","checkOut","getAverageTime","getAverageTime","checkIn","getAverageTime","checkOut","getAverageTime"],[[],[45,"Leyton",3],[32,"Paradise",8],[27,"Leyton",10],[45,"Waterloo",15],[27,"Waterloo",20],[32,"Cambridge",22],["Paradise","Cambridge"],["Leyton","Waterloo"],[10,"Leyton",24],["Leyton","Waterloo"],[10,"Waterloo",38],["Leyton","Waterloo"]]]"#
            => "[null,null,null,null,null,null,null,14.0,11.0,null,11.0,null,12.0]"),
    problem!(T; 362, "design-hit-counter", "Design Hit Counter", Medium, Exact,
        |a| replay(a, "HitCounter", |_| Ok(HitCounter::new()), |hits, op, c| match op {
            "hit" => {
                hits.hit(c.get(0)?);
                unit()
            }
            "getHits" => answer(hits.get_hits(c.get(0)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["HitCounter","hit","hit","hit","getHits","hit","getHits","getHits"],[[],[1],[2],[3],[4],[300],[300],[301]]]"#
            => "[null,null,null,null,3,null,4,3]"),
];
