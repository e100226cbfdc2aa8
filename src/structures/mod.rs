// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Node types shared by the list and tree exercises.
//!
//! These mirror the shapes the judge hands to every solution: singly linked
//! lists as `Option<Box<ListNode>>` and binary trees as
//! `Option<Rc<RefCell<TreeNode>>>`. Builders convert to and from the flat
//! encodings used in problem statements, so tests can write `list![1, 2, 3]`
//! or `tree![3, 9, 20, null, null, 15, 7]`.

mod list;
mod tree;

pub use list::{list_to_vec, to_list, ListNode};
pub use tree::{to_tree, tree_to_vec, TreeNode};

/// Build a linked list from values: `list![1, 2, 3]`.
#[macro_export]
macro_rules! list {
    () => {
        None
    };
    ($($value:expr),+ $(,)?) => {
        $crate::structures::to_list(&[$($value),+])
    };
}

/// Build a tree from level-order values, `null` marking an absent node:
/// `tree![1, null, 2, 3]`. Negative values go in parentheses: `tree![(-1), 2]`.
#[macro_export]
macro_rules! tree {
    (@slot null) => {
        None
    };
    (@slot $value:expr) => {
        Some($value)
    };
    () => {
        None
    };
    ($($value:tt),+ $(,)?) => {
        $crate::structures::to_tree(&[$($crate::tree!(@slot $value)),+])
    };
}
