// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural properties computed by post-order recursion.

use super::Tree;

/// 104. Maximum Depth of Binary Tree
pub fn max_depth(root: Tree) -> i32 {
    fn depth(node: &Tree) -> i32 {
        match node {
            None => 0,
            Some(n) => {
                let n = n.borrow();
                1 + depth(&n.left).max(depth(&n.right))
            }
        }
    }
    depth(&root)
}

/// 111. Minimum Depth of Binary Tree
///
/// Depth of the shallowest leaf; a missing child is not a leaf.
pub fn min_depth(root: Tree) -> i32 {
    fn depth(node: &Tree) -> i32 {
        let Some(n) = node else { return 0 };
        let n = n.borrow();
        match (&n.left, &n.right) {
            (None, None) => 1,
            (Some(_), None) => 1 + depth(&n.left),
            (None, Some(_)) => 1 + depth(&n.right),
            (left, right) => 1 + depth(left).min(depth(right)),
        }
    }
    depth(&root)
}

pub(crate) fn same(a: &Tree, b: &Tree) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            let (x, y) = (x.borrow(), y.borrow());
            x.val == y.val && same(&x.left, &y.left) && same(&x.right, &y.right)
        }
        _ => false,
    }
}

/// 100. Same Tree
pub fn is_same_tree(p: Tree, q: Tree) -> bool {
    same(&p, &q)
}

/// 101. Symmetric Tree
pub fn is_symmetric(root: Tree) -> bool {
    fn mirror(a: &Tree, b: &Tree) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(x), Some(y)) => {
                let (x, y) = (x.borrow(), y.borrow());
                x.val == y.val && mirror(&x.left, &y.right) && mirror(&x.right, &y.left)
            }
            _ => false,
        }
    }
    match &root {
        None => true,
        Some(n) => {
            let n = n.borrow();
            mirror(&n.left, &n.right)
        }
    }
}

/// 110. Balanced Binary Tree
pub fn is_balanced(root: Tree) -> bool {
    /// Height, or `None` once any subtree is unbalanced.
    fn height(node: &Tree) -> Option<i32> {
        let Some(n) = node else { return Some(0) };
        let n = n.borrow();
        let left = height(&n.left)?;
        let right = height(&n.right)?;
        ((left - right).abs() <= 1).then_some(1 + left.max(right))
    }
    height(&root).is_some()
}

/// 543. Diameter of Binary Tree
///
/// Longest path in edges, not necessarily through the root.
pub fn diameter_of_binary_tree(root: Tree) -> i32 {
    fn height(node: &Tree, best: &mut i32) -> i32 {
        let Some(n) = node else { return 0 };
        let n = n.borrow();
        let left = height(&n.left, best);
        let right = height(&n.right, best);
        *best = (*best).max(left + right);
        1 + left.max(right)
    }
    let mut best = 0;
    height(&root, &mut best);
    best
}

/// 572. Subtree of Another Tree
pub fn is_subtree(root: Tree, sub_root: Tree) -> bool {
    fn contains(node: &Tree, sub: &Tree) -> bool {
        if same(node, sub) {
            return true;
        }
        match node {
            None => false,
            Some(n) => {
                let n = n.borrow();
                contains(&n.left, sub) || contains(&n.right, sub)
            }
        }
    }
    contains(&root, &sub_root)
}

/// 226. Invert Binary Tree
pub fn invert_tree(root: Tree) -> Tree {
    if let Some(node) = &root {
        let mut n = node.borrow_mut();
        let left = n.left.take();
        let right = n.right.take();
        n.left = invert_tree(right);
        n.right = invert_tree(left);
    }
    root
}

/// 222. Count Complete Tree Nodes
///
/// O(log² n): a subtree whose leftmost and rightmost depths agree is perfect.
pub fn count_nodes(root: Tree) -> i32 {
    fn edge_depth(node: &Tree, go_left: bool) -> u32 {
        let mut depth = 0;
        let mut current = node.clone();
        while let Some(n) = current {
            depth += 1;
            let n = n.borrow();
            current = if go_left { n.left.clone() } else { n.right.clone() };
        }
        depth
    }
    fn count(node: &Tree) -> i32 {
        let Some(n) = node else { return 0 };
        let (left, right) = (edge_depth(node, true), edge_depth(node, false));
        if left == right {
            return (1 << left) - 1;
        }
        let n = n.borrow();
        1 + count(&n.left) + count(&n.right)
    }
    count(&root)
}

/// 1448. Count Good Nodes in Binary Tree
///
/// A node is good when no ancestor on its root path has a larger value.
pub fn good_nodes(root: Tree) -> i32 {
    fn walk(node: &Tree, max_above: i32) -> i32 {
        let Some(n) = node else { return 0 };
        let n = n.borrow();
        let good = i32::from(n.val >= max_above);
        let max_here = max_above.max(n.val);
        good + walk(&n.left, max_here) + walk(&n.right, max_here)
    }
    walk(&root, i32::MIN)
}
