// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary tree exercises.
//!
//! Trees arrive as `Option<Rc<RefCell<TreeNode>>>`. Read-only walks borrow
//! through `RefCell::borrow`; exercises that restructure a tree take it by
//! value and relink children with `borrow_mut`.

mod bst;
mod construct;
mod paths;
mod properties;
mod traversal;

pub use bst::*;
pub use construct::*;
pub use paths::*;
pub use properties::*;
pub use traversal::*;

use crate::structures::TreeNode;
use std::cell::RefCell;
use std::rc::Rc;

/// A possibly empty tree.
pub type Tree = Option<Rc<RefCell<TreeNode>>>;

/// Wrap a value in a fresh leaf.
pub(crate) fn leaf(val: i32) -> Rc<RefCell<TreeNode>> {
    Rc::new(RefCell::new(TreeNode::new(val)))
}
