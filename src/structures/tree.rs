// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary tree node and level-order builders.
//!
//! The level-order encoding skips children of absent nodes:
//!
//! ```text
//! [1, null, 2, 3]      1
//!                       \
//!                        2
//!                       /
//!                      3
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A node of a binary tree.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Rc<RefCell<TreeNode>>>,
    pub right: Option<Rc<RefCell<TreeNode>>>,
}

impl TreeNode {
    #[inline]
    pub fn new(val: i32) -> Self {
        TreeNode {
            val,
            left: None,
            right: None,
        }
    }
}

fn node(val: i32) -> Rc<RefCell<TreeNode>> {
    Rc::new(RefCell::new(TreeNode::new(val)))
}

/// Build a tree from its level-order encoding.
///
/// A leading `None` (or an empty slice) yields an empty tree. Values past the
/// last slot that can hold a child are ignored.
pub fn to_tree(values: &[Option<i32>]) -> Option<Rc<RefCell<TreeNode>>> {
    let root = node((*values.first()?)?);
    let mut queue = VecDeque::from([Rc::clone(&root)]);
    let mut slots = values[1..].iter();

    while let Some(parent) = queue.pop_front() {
        let Some(left) = slots.next() else { break };
        if let Some(val) = *left {
            let child = node(val);
            queue.push_back(Rc::clone(&child));
            parent.borrow_mut().left = Some(child);
        }
        let Some(right) = slots.next() else { break };
        if let Some(val) = *right {
            let child = node(val);
            queue.push_back(Rc::clone(&child));
            parent.borrow_mut().right = Some(child);
        }
    }

    Some(root)
}

/// Encode a tree in level order, trimming trailing `None`s.
pub fn tree_to_vec(root: &Option<Rc<RefCell<TreeNode>>>) -> Vec<Option<i32>> {
    let mut values = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(root.clone());

    while let Some(slot) = queue.pop_front() {
        match slot {
            Some(current) => {
                let current = current.borrow();
                values.push(Some(current.val));
                queue.push_back(current.left.clone());
                queue.push_back(current.right.clone());
            }
            None => values.push(None),
        }
    }

    while values.last() == Some(&None) {
        values.pop();
    }
    values
}
