// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Depth-first and breadth-first traversals.

use super::Tree;
use std::collections::VecDeque;

/// 94. Binary Tree Inorder Traversal
///
/// Iterative, with an explicit stack of pending ancestors.
pub fn inorder_traversal(root: Tree) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = root;
    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            current = node.borrow().left.clone();
            stack.push(node);
        }
        if let Some(node) = stack.pop() {
            let node = node.borrow();
            values.push(node.val);
            current = node.right.clone();
        }
    }
    values
}

/// 144. Binary Tree Preorder Traversal
pub fn preorder_traversal(root: Tree) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack: Vec<Tree> = vec![root];
    while let Some(slot) = stack.pop() {
        if let Some(node) = slot {
            let node = node.borrow();
            values.push(node.val);
            stack.push(node.right.clone());
            stack.push(node.left.clone());
        }
    }
    values
}

/// 145. Binary Tree Postorder Traversal
///
/// Reverse of a root-right-left preorder.
pub fn postorder_traversal(root: Tree) -> Vec<i32> {
    let mut values = Vec::new();
    let mut stack: Vec<Tree> = vec![root];
    while let Some(slot) = stack.pop() {
        if let Some(node) = slot {
            let node = node.borrow();
            values.push(node.val);
            stack.push(node.left.clone());
            stack.push(node.right.clone());
        }
    }
    values.reverse();
    values
}

/// Values grouped by depth, top level first.
fn levels(root: Tree) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<_> = root.into_iter().collect();
    while !queue.is_empty() {
        let mut level = Vec::with_capacity(queue.len());
        for _ in 0..queue.len() {
            let Some(node) = queue.pop_front() else { break };
            let node = node.borrow();
            level.push(node.val);
            queue.extend(node.left.clone());
            queue.extend(node.right.clone());
        }
        levels.push(level);
    }
    levels
}

/// 102. Binary Tree Level Order Traversal
pub fn level_order(root: Tree) -> Vec<Vec<i32>> {
    levels(root)
}

/// 107. Binary Tree Level Order Traversal II
pub fn level_order_bottom(root: Tree) -> Vec<Vec<i32>> {
    let mut levels = levels(root);
    levels.reverse();
    levels
}

/// 103. Binary Tree Zigzag Level Order Traversal
pub fn zigzag_level_order(root: Tree) -> Vec<Vec<i32>> {
    let mut levels = levels(root);
    for level in levels.iter_mut().skip(1).step_by(2) {
        level.reverse();
    }
    levels
}

/// 199. Binary Tree Right Side View
pub fn right_side_view(root: Tree) -> Vec<i32> {
    levels(root)
        .into_iter()
        .filter_map(|level| level.last().copied())
        .collect()
}

/// 637. Average of Levels in Binary Tree
pub fn average_of_levels(root: Tree) -> Vec<f64> {
    levels(root)
        .into_iter()
        .map(|level| level.iter().map(|&v| v as f64).sum::<f64>() / level.len() as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    #[test]
    fn depth_first_orders() {
        assert_eq!(inorder_traversal(tree![1, null, 2, 3]), vec![1, 3, 2]);
        assert_eq!(preorder_traversal(tree![1, null, 2, 3]), vec![1, 2, 3]);
        assert_eq!(postorder_traversal(tree![1, null, 2, 3]), vec![3, 2, 1]);
        let big = || tree![1, 2, 3, 4, 5, null, 8, null, null, 6, 7, 9];
        assert_eq!(inorder_traversal(big()), vec![4, 2, 6, 5, 7, 1, 3, 9, 8]);
        assert_eq!(preorder_traversal(big()), vec![1, 2, 4, 5, 6, 7, 3, 8, 9]);
        assert_eq!(postorder_traversal(big()), vec![4, 6, 7, 5, 2, 9, 8, 3, 1]);
        assert!(inorder_traversal(None).is_empty());
    }

    #[test]
    fn breadth_first_orders() {
        let t = || tree![3, 9, 20, null, null, 15, 7];
        assert_eq!(level_order(t()), vec![vec![3], vec![9, 20], vec![15, 7]]);
        assert_eq!(level_order_bottom(t()), vec![vec![15, 7], vec![9, 20], vec![3]]);
        assert_eq!(zigzag_level_order(t()), vec![vec![3], vec![20, 9], vec![15, 7]]);
        assert!(level_order(None).is_empty());
    }

    #[test]
    fn right_view() {
        assert_eq!(right_side_view(tree![1, 2, 3, null, 5, null, 4]), vec![1, 3, 4]);
        assert_eq!(right_side_view(tree![1, 2, 3, 4, null, null, null, 5]), vec![1, 3, 4, 5]);
        assert!(right_side_view(None).is_empty());
    }

    #[test]
    fn averages() {
        assert_eq!(average_of_levels(tree![3, 9, 20, null, null, 15, 7]), vec![3.0, 14.5, 11.0]);
    }
}
