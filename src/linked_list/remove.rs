// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Removing and locating nodes.

use super::{length, split_at};
use crate::structures::ListNode;

/// 19. Remove Nth Node From End of List
pub fn remove_nth_from_end(head: Option<Box<ListNode>>, n: i32) -> Option<Box<ListNode>> {
    let len = length(&head);
    let n = n.max(0) as usize;
    if n == 0 || n > len {
        return head;
    }
    let (mut front, back) = split_at(head, len - n);
    let after = back.and_then(|mut node| node.next.take());

    let mut cursor = &mut front;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    *cursor = after;
    front
}

/// 83. Remove Duplicates from Sorted List
pub fn delete_duplicates(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut head = head;
    let mut cursor = head.as_mut();
    while let Some(node) = cursor {
        while node.next.as_ref().is_some_and(|next| next.val == node.val) {
            node.next = node.next.take().and_then(|next| next.next);
        }
        cursor = node.next.as_mut();
    }
    head
}

/// 82. Remove Duplicates from Sorted List II
///
/// Drops every value that appears more than once.
pub fn delete_all_duplicates(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut kept: Vec<Box<ListNode>> = Vec::new();
    let mut rest = head;
    while let Some(mut node) = rest {
        rest = node.next.take();
        let mut duplicated = false;
        while rest.as_ref().is_some_and(|next| next.val == node.val) {
            duplicated = true;
            rest = rest.and_then(|mut next| next.next.take());
        }
        if !duplicated {
            kept.push(node);
        }
    }
    kept.into_iter().rev().fold(None, |next, mut node| {
        node.next = next;
        Some(node)
    })
}

/// 876. Middle of the Linked List
///
/// The second middle node when the length is even.
pub fn middle_node(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let len = length(&head);
    split_at(head, len / 2).1
}

/// 234. Palindrome Linked List
pub fn is_palindrome_list(head: Option<Box<ListNode>>) -> bool {
    let len = length(&head);
    let (front, back) = split_at(head, len / 2);
    // Skip the middle node of an odd-length list.
    let back = if len % 2 == 1 {
        back.and_then(|mut node| node.next.take())
    } else {
        back
    };
    let mut a = super::reverse_list(front);
    let mut b = back;
    while let (Some(x), Some(y)) = (a, b) {
        if x.val != y.val {
            return false;
        }
        a = x.next;
        b = y.next;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use crate::structures::list_to_vec;

    #[test]
    fn removes_from_end() {
        assert_eq!(list_to_vec(&remove_nth_from_end(list![1, 2, 3, 4, 5], 2)), vec![1, 2, 3, 5]);
        assert_eq!(remove_nth_from_end(list![1], 1), None);
        assert_eq!(list_to_vec(&remove_nth_from_end(list![1, 2], 1)), vec![1]);
        assert_eq!(list_to_vec(&remove_nth_from_end(list![1, 2], 2)), vec![2]);
    }

    #[test]
    fn collapses_duplicates() {
        assert_eq!(list_to_vec(&delete_duplicates(list![1, 1, 2])), vec![1, 2]);
        assert_eq!(list_to_vec(&delete_duplicates(list![1, 1, 2, 3, 3])), vec![1, 2, 3]);
    }

    #[test]
    fn drops_duplicated_values() {
        assert_eq!(
            list_to_vec(&delete_all_duplicates(list![1, 2, 3, 3, 4, 4, 5])),
            vec![1, 2, 5]
        );
        assert_eq!(list_to_vec(&delete_all_duplicates(list![1, 1, 1, 2, 3])), vec![2, 3]);
        assert_eq!(delete_all_duplicates(list![1, 1]), None);
    }

    #[test]
    fn middle() {
        assert_eq!(list_to_vec(&middle_node(list![1, 2, 3, 4, 5])), vec![3, 4, 5]);
        assert_eq!(list_to_vec(&middle_node(list![1, 2, 3, 4, 5, 6])), vec![4, 5, 6]);
    }

    #[test]
    fn palindromes() {
        assert!(is_palindrome_list(list![1, 2, 2, 1]));
        assert!(!is_palindrome_list(list![1, 2]));
        assert!(is_palindrome_list(list![1, 2, 1]));
        assert!(is_palindrome_list(None));
    }
}
