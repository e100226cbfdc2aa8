// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Root-to-leaf and downward path sums.

use super::Tree;
use std::collections::HashMap;

/// 112. Path Sum
pub fn has_path_sum(root: Tree, target_sum: i32) -> bool {
    fn walk(node: &Tree, remaining: i64) -> bool {
        let Some(n) = node else { return false };
        let n = n.borrow();
        let remaining = remaining - i64::from(n.val);
        if n.left.is_none() && n.right.is_none() {
            return remaining == 0;
        }
        walk(&n.left, remaining) || walk(&n.right, remaining)
    }
    walk(&root, i64::from(target_sum))
}

/// 113. Path Sum II
pub fn path_sum(root: Tree, target_sum: i32) -> Vec<Vec<i32>> {
    fn walk(node: &Tree, remaining: i64, path: &mut Vec<i32>, found: &mut Vec<Vec<i32>>) {
        let Some(n) = node else { return };
        let n = n.borrow();
        let remaining = remaining - i64::from(n.val);
        path.push(n.val);
        if n.left.is_none() && n.right.is_none() {
            if remaining == 0 {
                found.push(path.clone());
            }
        } else {
            walk(&n.left, remaining, path, found);
            walk(&n.right, remaining, path, found);
        }
        path.pop();
    }
    let mut found = Vec::new();
    walk(&root, i64::from(target_sum), &mut Vec::new(), &mut found);
    found
}

/// 437. Path Sum III
///
/// Counts downward paths (any start, any end) with the target sum using
/// prefix sums along the current root path.
pub fn path_sum_iii(root: Tree, target_sum: i32) -> i32 {
    fn walk(node: &Tree, running: i64, target: i64, seen: &mut HashMap<i64, i32>) -> i32 {
        let Some(n) = node else { return 0 };
        let n = n.borrow();
        let running = running + i64::from(n.val);
        let mut count = seen.get(&(running - target)).copied().unwrap_or(0);
        *seen.entry(running).or_default() += 1;
        count += walk(&n.left, running, target, seen);
        count += walk(&n.right, running, target, seen);
        if let Some(c) = seen.get_mut(&running) {
            *c -= 1;
        }
        count
    }
    let mut seen = HashMap::from([(0, 1)]);
    walk(&root, 0, i64::from(target_sum), &mut seen)
}

/// 124. Binary Tree Maximum Path Sum
pub fn max_path_sum(root: Tree) -> i32 {
    /// Best downward gain from `node`, never negative.
    fn gain(node: &Tree, best: &mut i32) -> i32 {
        let Some(n) = node else { return 0 };
        let n = n.borrow();
        let left = gain(&n.left, best).max(0);
        let right = gain(&n.right, best).max(0);
        *best = (*best).max(n.val + left + right);
        n.val + left.max(right)
    }
    let mut best = i32::MIN;
    gain(&root, &mut best);
    if root.is_none() {
        0
    } else {
        best
    }
}

/// 257. Binary Tree Paths
pub fn binary_tree_paths(root: Tree) -> Vec<String> {
    fn walk(node: &Tree, prefix: &str, paths: &mut Vec<String>) {
        let Some(n) = node else { return };
        let n = n.borrow();
        let here = if prefix.is_empty() {
            n.val.to_string()
        } else {
            format!("{prefix}->{}", n.val)
        };
        if n.left.is_none() && n.right.is_none() {
            paths.push(here);
            return;
        }
        walk(&n.left, &here, paths);
        walk(&n.right, &here, paths);
    }
    let mut paths = Vec::new();
    walk(&root, "", &mut paths);
    paths
}

/// 129. Sum Root to Leaf Numbers
pub fn sum_numbers(root: Tree) -> i32 {
    fn walk(node: &Tree, number: i32) -> i32 {
        let Some(n) = node else { return 0 };
        let n = n.borrow();
        let number = number * 10 + n.val;
        if n.left.is_none() && n.right.is_none() {
            return number;
        }
        walk(&n.left, number) + walk(&n.right, number)
    }
    walk(&root, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    fn sample() -> Tree {
        tree![5, 4, 8, 11, null, 13, 4, 7, 2, null, null, 5, 1]
    }

    #[test]
    fn root_to_leaf_sums() {
        assert!(has_path_sum(sample(), 22));
        assert!(!has_path_sum(tree![1, 2, 3], 5));
        assert!(!has_path_sum(None, 0));
        assert_eq!(path_sum(sample(), 22), vec![vec![5, 4, 11, 2], vec![5, 8, 4, 5]]);
    }

    #[test]
    fn downward_sums() {
        assert_eq!(path_sum_iii(tree![10, 5, (-3), 3, 2, null, 11, 3, (-2), null, 1], 8), 3);
        assert_eq!(path_sum_iii(sample(), 22), 3);
        assert_eq!(path_sum_iii(None, 0), 0);
    }

    #[test]
    fn maximum_path() {
        assert_eq!(max_path_sum(tree![1, 2, 3]), 6);
        assert_eq!(max_path_sum(tree![(-10), 9, 20, null, null, 15, 7]), 42);
        assert_eq!(max_path_sum(tree![(-3)]), -3);
    }

    #[test]
    fn rendered_paths() {
        assert_eq!(binary_tree_paths(tree![1, 2, 3, null, 5]), vec!["1->2->5", "1->3"]);
        assert_eq!(binary_tree_paths(tree![1]), vec!["1"]);
    }

    #[test]
    fn digit_numbers() {
        assert_eq!(sum_numbers(tree![1, 2, 3]), 25);
        assert_eq!(sum_numbers(tree![4, 9, 0, 5, 1]), 1026);
    }
}
