// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dependency orderings, Eulerian paths and unweighted BFS over implicit
//! graphs.

use std::collections::{HashMap, HashSet, VecDeque};

/// Kahn's algorithm. Returns the topological order of `0..n`, which is
/// shorter than `n` when the graph has a cycle. Each edge `[a, b]` means
/// `b` must come before `a`; out-of-range edges are ignored.
fn topological_order(n: i32, edges: &[Vec<i32>]) -> Vec<i32> {
    let n = n.max(0) as usize;
    let mut indegree = vec![0usize; n];
    let mut unlocks = vec![Vec::new(); n];
    for edge in edges {
        let &[after, before] = edge.as_slice() else { continue };
        let (Ok(after), Ok(before)) = (usize::try_from(after), usize::try_from(before)) else {
            continue;
        };
        if after < n && before < n {
            unlocks[before].push(after);
            indegree[after] += 1;
        }
    }
    let mut ready: VecDeque<usize> = (0..n).filter(|&v| indegree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);
    while let Some(v) = ready.pop_front() {
        order.push(v as i32);
        for &next in &unlocks[v] {
            indegree[next] -= 1;
            if indegree[next] == 0 {
                ready.push_back(next);
            }
        }
    }
    order
}

/// 207. Course Schedule
pub fn can_finish(num_courses: i32, prerequisites: Vec<Vec<i32>>) -> bool {
    topological_order(num_courses, &prerequisites).len() == num_courses.max(0) as usize
}

/// 210. Course Schedule II
///
/// Ready courses are taken lowest number first. Empty when cyclic.
pub fn find_order(num_courses: i32, prerequisites: Vec<Vec<i32>>) -> Vec<i32> {
    let order = topological_order(num_courses, &prerequisites);
    if order.len() == num_courses.max(0) as usize {
        order
    } else {
        Vec::new()
    }
}

/// 332. Reconstruct Itinerary
///
/// Hierholzer's algorithm from `JFK`, always taking the lexically smallest
/// remaining ticket; dead ends are emitted last.
pub fn find_itinerary(tickets: Vec<Vec<String>>) -> Vec<String> {
    let mut outgoing: HashMap<String, Vec<String>> = HashMap::new();
    for ticket in tickets {
        let Ok([from, to]) = <[String; 2]>::try_from(ticket) else {
            continue;
        };
        outgoing.entry(from).or_default().push(to);
    }
    // Sorted descending so `pop` yields the smallest destination.
    for destinations in outgoing.values_mut() {
        destinations.sort_unstable_by(|a, b| b.cmp(a));
    }
    let mut route = Vec::new();
    let mut stack = vec!["JFK".to_string()];
    while let Some(airport) = stack.last() {
        match outgoing.get_mut(airport).and_then(Vec::pop) {
            Some(next) => stack.push(next),
            None => route.extend(stack.pop()),
        }
    }
    route.reverse();
    route
}

/// 399. Evaluate Division
///
/// Each equation `a / b = v` adds edges `a -> b` (weight `v`) and `b -> a`
/// (weight `1 / v`); a query multiplies weights along any path. -1.0 for
/// unknown variables or disconnected pairs.
pub fn calc_equation(equations: Vec<Vec<String>>, values: Vec<f64>, queries: Vec<Vec<String>>) -> Vec<f64> {
    let mut edges: HashMap<&str, Vec<(&str, f64)>> = HashMap::new();
    for (equation, &value) in equations.iter().zip(&values) {
        let [a, b] = equation.as_slice() else { continue };
        let (a, b) = (a.as_str(), b.as_str());
        edges.entry(a).or_default().push((b, value));
        if value != 0.0 {
            edges.entry(b).or_default().push((a, 1.0 / value));
        }
    }
    let evaluate = |from: &str, to: &str| -> f64 {
        if !edges.contains_key(from) || !edges.contains_key(to) {
            return -1.0;
        }
        let mut seen = HashSet::from([from]);
        let mut queue = VecDeque::from([(from, 1.0)]);
        while let Some((node, product)) = queue.pop_front() {
            if node == to {
                return product;
            }
            for &(next, weight) in edges.get(node).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back((next, product * weight));
                }
            }
        }
        -1.0
    };
    queries
        .iter()
        .map(|query| match query.as_slice() {
            [a, b] => evaluate(a.as_str(), b.as_str()),
            _ => -1.0,
        })
        .collect()
}

/// Fewest single-letter edits turning `start` into `end`, each intermediate
/// word drawn from `words` and each letter from `alphabet`.
fn edit_ladder(start: &str, end: &str, words: &[String], alphabet: &[u8]) -> Option<usize> {
    let mut unvisited: HashSet<&[u8]> = words.iter().map(|w| w.as_bytes()).collect();
    if !unvisited.contains(end.as_bytes()) {
        return None;
    }
    if start == end {
        return Some(0);
    }
    unvisited.remove(start.as_bytes());
    let mut frontier = vec![start.as_bytes().to_vec()];
    let mut steps = 0;
    while !frontier.is_empty() {
        steps += 1;
        let mut next_frontier = Vec::new();
        for word in &frontier {
            let mut candidate = word.clone();
            for i in 0..candidate.len() {
                let original = candidate[i];
                for &letter in alphabet {
                    if letter == original {
                        continue;
                    }
                    candidate[i] = letter;
                    if unvisited.remove(candidate.as_slice()) {
                        if candidate == end.as_bytes() {
                            return Some(steps);
                        }
                        next_frontier.push(candidate.clone());
                    }
                }
                candidate[i] = original;
            }
        }
        frontier = next_frontier;
    }
    None
}

/// 127. Word Ladder
///
/// Number of words in the shortest transformation sequence, counting both
/// ends; 0 when `end_word` is unreachable.
pub fn ladder_length(begin_word: String, end_word: String, word_list: Vec<String>) -> i32 {
    const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    edit_ladder(&begin_word, &end_word, &word_list, LOWERCASE).map_or(0, |steps| steps as i32 + 1)
}

/// 433. Minimum Genetic Mutation
pub fn min_mutation(start_gene: String, end_gene: String, bank: Vec<String>) -> i32 {
    edit_ladder(&start_gene, &end_gene, &bank, b"ACGT").map_or(-1, |steps| steps as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(items: &[[&str; 2]]) -> Vec<Vec<String>> {
        items.iter().map(|p| strings(p)).collect()
    }

    #[test]
    fn course_schedules() {
        assert!(can_finish(2, vec![vec![1, 0]]));
        assert!(!can_finish(2, vec![vec![1, 0], vec![0, 1]]));
        assert_eq!(find_order(2, vec![vec![1, 0]]), vec![0, 1]);
        assert_eq!(
            find_order(4, vec![vec![1, 0], vec![2, 0], vec![3, 1], vec![3, 2]]),
            vec![0, 1, 2, 3]
        );
        assert_eq!(find_order(1, vec![]), vec![0]);
        assert!(find_order(2, vec![vec![0, 1], vec![1, 0]]).is_empty());
    }

    #[test]
    fn itineraries() {
        let tickets = pairs(&[["MUC", "LHR"], ["JFK", "MUC"], ["SFO", "SJC"], ["LHR", "SFO"]]);
        assert_eq!(find_itinerary(tickets), strings(&["JFK", "MUC", "LHR", "SFO", "SJC"]));
        let tickets = pairs(&[["JFK", "SFO"], ["JFK", "ATL"], ["SFO", "ATL"], ["ATL", "JFK"], ["ATL", "SFO"]]);
        assert_eq!(
            find_itinerary(tickets),
            strings(&["JFK", "ATL", "JFK", "SFO", "ATL", "SFO"])
        );
        let tickets = pairs(&[["JFK", "KUL"], ["JFK", "NRT"], ["NRT", "JFK"]]);
        assert_eq!(find_itinerary(tickets), strings(&["JFK", "NRT", "JFK", "KUL"]));
    }

    #[test]
    fn division() {
        let answers = calc_equation(
            pairs(&[["a", "b"], ["b", "c"]]),
            vec![2.0, 3.0],
            pairs(&[["a", "c"], ["b", "a"], ["a", "e"], ["a", "a"], ["x", "x"]]),
        );
        let expected = [6.0, 0.5, -1.0, 1.0, -1.0];
        for (got, want) in answers.iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
    }

    #[test]
    fn ladders() {
        let words = strings(&["hot", "dot", "dog", "lot", "log", "cog"]);
        assert_eq!(ladder_length("hit".into(), "cog".into(), words), 5);
        let words = strings(&["hot", "dot", "dog", "lot", "log"]);
        assert_eq!(ladder_length("hit".into(), "cog".into(), words), 0);
    }

    #[test]
    fn mutations() {
        assert_eq!(
            min_mutation("AACCGGTT".into(), "AACCGGTA".into(), strings(&["AACCGGTA"])),
            1
        );
        assert_eq!(
            min_mutation(
                "AACCGGTT".into(),
                "AAACGGTA".into(),
                strings(&["AACCGGTA", "AACCGCTA", "AAACGGTA"])
            ),
            2
        );
        assert_eq!(min_mutation("AAAAACCC".into(), "AACCCCCC".into(), strings(&["AAAACCCC", "AAACCCCC", "AACCCCCC"])), 3);
        assert_eq!(min_mutation("AACCGGTT".into(), "AACCGGTA".into(), vec![]), -1);
    }
}
