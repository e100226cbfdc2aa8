// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Singly linked list exercises over `Option<Box<ListNode>>`.
//!
//! Lists are consumed by value and rebuilt by relinking boxes; no node is
//! ever shared, so there is no `Rc` and no `unsafe`. The usual two-pointer
//! tricks that need two live cursors into one list are replaced by a length
//! count followed by a single walk.

mod cycle;
mod merge;
mod remove;
mod reverse;

pub use cycle::*;
pub use merge::*;
pub use remove::*;
pub use reverse::*;

use crate::structures::ListNode;

/// Number of nodes in the list.
pub(crate) fn length(head: &Option<Box<ListNode>>) -> usize {
    let mut len = 0;
    let mut cursor = head.as_deref();
    while let Some(node) = cursor {
        len += 1;
        cursor = node.next.as_deref();
    }
    len
}

/// Detach the first `n` nodes, returning `(front, rest)`.
pub(crate) fn split_at(
    mut head: Option<Box<ListNode>>,
    n: usize,
) -> (Option<Box<ListNode>>, Option<Box<ListNode>>) {
    if n == 0 {
        return (None, head);
    }
    let mut cursor = head.as_mut();
    for _ in 1..n {
        match cursor {
            Some(node) => cursor = node.next.as_mut(),
            None => break,
        }
    }
    let rest = cursor.and_then(|node| node.next.take());
    (head, rest)
}
