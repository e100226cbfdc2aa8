// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search trees and ancestor queries.
//!
//! The ancestor exercises identify nodes by value; values are unique in
//! every tree these functions are given.

use super::{leaf, Tree};
use crate::structures::TreeNode;
use std::cell::RefCell;
use std::rc::Rc;

/// 98. Validate Binary Search Tree
pub fn is_valid_bst(root: Tree) -> bool {
    fn within(node: &Tree, low: Option<i32>, high: Option<i32>) -> bool {
        let Some(n) = node else { return true };
        let n = n.borrow();
        if low.is_some_and(|l| n.val <= l) || high.is_some_and(|h| n.val >= h) {
            return false;
        }
        within(&n.left, low, Some(n.val)) && within(&n.right, Some(n.val), high)
    }
    within(&root, None, None)
}

/// 230. Kth Smallest Element in a BST
///
/// Returns -1 when the tree holds fewer than `k` values.
pub fn kth_smallest(root: Tree, k: i32) -> i32 {
    let mut iter = BstIterator::new(root);
    for _ in 1..k {
        if !iter.has_next() {
            return -1;
        }
        iter.next();
    }
    if iter.has_next() {
        iter.next()
    } else {
        -1
    }
}

/// 235. Lowest Common Ancestor of a Binary Search Tree
pub fn lowest_common_ancestor_bst(root: Tree, p: i32, q: i32) -> Tree {
    let (low, high) = (p.min(q), p.max(q));
    let mut current = root;
    while let Some(node) = current {
        let val = node.borrow().val;
        current = if high < val {
            node.borrow().left.clone()
        } else if low > val {
            node.borrow().right.clone()
        } else {
            return Some(node);
        };
    }
    None
}

/// 236. Lowest Common Ancestor of a Binary Tree
pub fn lowest_common_ancestor(root: Tree, p: i32, q: i32) -> Tree {
    let node = root?;
    let (val, left, right) = {
        let n = node.borrow();
        (n.val, n.left.clone(), n.right.clone())
    };
    if val == p || val == q {
        return Some(node);
    }
    match (lowest_common_ancestor(left, p, q), lowest_common_ancestor(right, p, q)) {
        (Some(_), Some(_)) => Some(node),
        (found, None) | (None, found) => found,
    }
}

/// 700. Search in a Binary Search Tree
pub fn search_bst(root: Tree, val: i32) -> Tree {
    let mut current = root;
    while let Some(node) = current {
        let here = node.borrow().val;
        current = match val.cmp(&here) {
            std::cmp::Ordering::Equal => return Some(node),
            std::cmp::Ordering::Less => node.borrow().left.clone(),
            std::cmp::Ordering::Greater => node.borrow().right.clone(),
        };
    }
    None
}

/// 701. Insert into a Binary Search Tree
///
/// The new value becomes a leaf.
pub fn insert_into_bst(root: Tree, val: i32) -> Tree {
    let Some(root) = root else {
        return Some(leaf(val));
    };
    let mut current = Rc::clone(&root);
    loop {
        let next = {
            let mut n = current.borrow_mut();
            let slot = if val < n.val { &mut n.left } else { &mut n.right };
            match slot {
                Some(child) => Rc::clone(child),
                None => {
                    *slot = Some(leaf(val));
                    break;
                }
            }
        };
        current = next;
    }
    Some(root)
}

/// 450. Delete Node in a BST
///
/// A node with two children takes its in-order successor's value.
pub fn delete_node(root: Tree, key: i32) -> Tree {
    let node = root?;
    let val = node.borrow().val;
    if key < val {
        let left = node.borrow_mut().left.take();
        let left = delete_node(left, key);
        node.borrow_mut().left = left;
        return Some(node);
    }
    if key > val {
        let right = node.borrow_mut().right.take();
        let right = delete_node(right, key);
        node.borrow_mut().right = right;
        return Some(node);
    }
    let (left, right) = {
        let mut n = node.borrow_mut();
        (n.left.take(), n.right.take())
    };
    match (left, right) {
        (None, child) | (child, None) => child,
        (left, Some(right)) => {
            let successor = leftmost(&right);
            let right = delete_node(Some(right), successor);
            let mut n = node.borrow_mut();
            n.val = successor;
            n.left = left;
            n.right = right;
            drop(n);
            Some(node)
        }
    }
}

fn leftmost(node: &Rc<RefCell<TreeNode>>) -> i32 {
    let mut current = Rc::clone(node);
    loop {
        let left = current.borrow().left.clone();
        match left {
            Some(next) => current = next,
            None => return current.borrow().val,
        }
    }
}

/// 108. Convert Sorted Array to Binary Search Tree
///
/// The upper middle element becomes each subtree's root.
pub fn sorted_array_to_bst(nums: Vec<i32>) -> Tree {
    fn build(values: &[i32]) -> Tree {
        if values.is_empty() {
            return None;
        }
        let mid = values.len() / 2;
        let node = leaf(values[mid]);
        {
            let mut n = node.borrow_mut();
            n.left = build(&values[..mid]);
            n.right = build(&values[mid + 1..]);
        }
        Some(node)
    }
    build(&nums)
}

/// 173. Binary Search Tree Iterator
///
/// In-order iteration holding only the pending left spine, O(h) memory.
#[derive(Debug, Default)]
pub struct BstIterator {
    stack: Vec<Rc<RefCell<TreeNode>>>,
}

impl BstIterator {
    pub fn new(root: Tree) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Tree) {
        while let Some(n) = node {
            node = n.borrow().left.clone();
            self.stack.push(n);
        }
    }

    /// Next value in order, or -1 once exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i32 {
        let Some(node) = self.stack.pop() else {
            return -1;
        };
        let (val, right) = {
            let n = node.borrow();
            (n.val, n.right.clone())
        };
        self.push_left(right);
        val
    }

    pub fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }
}
