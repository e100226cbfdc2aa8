// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Building, encoding and reshaping trees.

use super::{leaf, Tree};
use crate::structures::{to_tree, tree_to_vec};
use std::collections::HashMap;

/// Position of each value in an inorder listing.
fn positions(inorder: &[i32]) -> HashMap<i32, usize> {
    inorder.iter().enumerate().map(|(i, &v)| (v, i)).collect()
}

/// 105. Construct Binary Tree from Preorder and Inorder Traversal
///
/// Values are unique. Inconsistent traversals yield `None`.
pub fn build_tree_pre_in(preorder: Vec<i32>, inorder: Vec<i32>) -> Tree {
    fn build(pre: &mut std::slice::Iter<'_, i32>, lo: usize, hi: usize, at: &HashMap<i32, usize>) -> Tree {
        if lo >= hi {
            return None;
        }
        let &val = pre.next()?;
        let mid = *at.get(&val)?;
        if !(lo..hi).contains(&mid) {
            return None;
        }
        let node = leaf(val);
        let left = build(pre, lo, mid, at);
        let right = build(pre, mid + 1, hi, at);
        {
            let mut n = node.borrow_mut();
            n.left = left;
            n.right = right;
        }
        Some(node)
    }
    if preorder.len() != inorder.len() {
        return None;
    }
    build(&mut preorder.iter(), 0, inorder.len(), &positions(&inorder))
}

/// 106. Construct Binary Tree from Inorder and Postorder Traversal
pub fn build_tree_in_post(inorder: Vec<i32>, postorder: Vec<i32>) -> Tree {
    // Postorder read backwards is root, right, left.
    fn build(post: &mut std::iter::Rev<std::slice::Iter<'_, i32>>, lo: usize, hi: usize, at: &HashMap<i32, usize>) -> Tree {
        if lo >= hi {
            return None;
        }
        let &val = post.next()?;
        let mid = *at.get(&val)?;
        if !(lo..hi).contains(&mid) {
            return None;
        }
        let node = leaf(val);
        let right = build(post, mid + 1, hi, at);
        let left = build(post, lo, mid, at);
        {
            let mut n = node.borrow_mut();
            n.left = left;
            n.right = right;
        }
        Some(node)
    }
    if postorder.len() != inorder.len() {
        return None;
    }
    build(&mut postorder.iter().rev(), 0, inorder.len(), &positions(&inorder))
}

/// 297. Serialize and Deserialize Binary Tree
///
/// Trees travel as their level-order listing: `1,2,3,#,#,4,5`, with `#`
/// marking an absent child and trailing absences dropped. The empty tree is
/// the empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct Codec;

impl Codec {
    pub fn new() -> Self {
        Codec
    }

    pub fn serialize(&self, root: Tree) -> String {
        tree_to_vec(&root)
            .into_iter()
            .map(|slot| slot.map_or_else(|| "#".to_string(), |v| v.to_string()))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Tokens that are not integers decode as absent nodes.
    pub fn deserialize(&self, data: String) -> Tree {
        let slots: Vec<Option<i32>> = data
            .split(',')
            .map(|token| token.trim().parse().ok())
            .collect();
        to_tree(&slots)
    }
}

/// 114. Flatten Binary Tree to Linked List
///
/// Relinks the tree in place into a right-leaning chain in preorder.
pub fn flatten(root: &mut Tree) {
    let mut order = Vec::new();
    let mut stack: Vec<Tree> = vec![root.clone()];
    while let Some(slot) = stack.pop() {
        let Some(node) = slot else { continue };
        {
            let n = node.borrow();
            stack.push(n.right.clone());
            stack.push(n.left.clone());
        }
        order.push(node);
    }
    let mut next: Tree = None;
    for node in order.into_iter().rev() {
        {
            let mut n = node.borrow_mut();
            n.left = None;
            n.right = next;
        }
        next = Some(node);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    #[test]
    fn from_traversals() {
        let expected = tree_to_vec(&tree![3, 9, 20, null, null, 15, 7]);
        let built = build_tree_pre_in(vec![3, 9, 20, 15, 7], vec![9, 3, 15, 20, 7]);
        assert_eq!(tree_to_vec(&built), expected);
        let built = build_tree_in_post(vec![9, 3, 15, 20, 7], vec![9, 15, 7, 20, 3]);
        assert_eq!(tree_to_vec(&built), expected);
        assert_eq!(build_tree_pre_in(vec![-1], vec![-1]).map(|n| n.borrow().val), Some(-1));
        assert_eq!(build_tree_pre_in(Vec::new(), Vec::new()), None);
    }

    #[test]
    fn inconsistent_traversals() {
        assert_eq!(build_tree_pre_in(vec![1, 2], vec![1]), None);
        assert_eq!(build_tree_in_post(vec![1], vec![2]), None);
    }

    #[test]
    fn codec() {
        let codec = Codec::new();
        let text = codec.serialize(tree![1, 2, 3, null, null, 4, 5]);
        assert_eq!(text, "1,2,3,#,#,4,5");
        let back = codec.deserialize(text);
        assert_eq!(tree_to_vec(&back), tree_to_vec(&tree![1, 2, 3, null, null, 4, 5]));
        assert_eq!(codec.serialize(None), "");
        assert_eq!(codec.deserialize(String::new()), None);
    }

    #[test]
    fn flattening() {
        let mut t = tree![1, 2, 5, 3, 4, null, 6];
        flatten(&mut t);
        assert_eq!(
            tree_to_vec(&t),
            tree_to_vec(&tree![1, null, 2, null, 3, null, 4, null, 5, null, 6])
        );
        let mut empty = None;
        flatten(&mut empty);
        assert_eq!(empty, None);
    }
}
