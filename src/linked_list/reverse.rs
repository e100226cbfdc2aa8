// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reversal and reordering by relinking.

use super::{length, split_at};
use crate::structures::ListNode;

/// 206. Reverse Linked List
pub fn reverse_list(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut reversed = None;
    let mut rest = head;
    while let Some(mut node) = rest {
        rest = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

/// Append `tail` after the last node of `head`.
fn concat(mut head: Option<Box<ListNode>>, tail: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut cursor = &mut head;
    while let Some(node) = cursor {
        cursor = &mut node.next;
    }
    *cursor = tail;
    head
}

/// 92. Reverse Linked List II
///
/// Reverse positions `left..=right` (1-indexed).
pub fn reverse_between(head: Option<Box<ListNode>>, left: i32, right: i32) -> Option<Box<ListNode>> {
    let (left, right) = (left.max(1) as usize, right.max(1) as usize);
    if left >= right {
        return head;
    }
    let (front, rest) = split_at(head, left - 1);
    let (middle, back) = split_at(rest, right - left + 1);
    concat(front, concat(reverse_list(middle), back))
}

/// 25. Reverse Nodes in k-Group
///
/// A trailing group shorter than `k` keeps its order.
pub fn reverse_k_group(head: Option<Box<ListNode>>, k: i32) -> Option<Box<ListNode>> {
    let k = k.max(1) as usize;
    let mut groups = Vec::new();
    let mut rest = head;
    let mut remaining = length(&rest);
    while remaining >= k {
        let (group, next) = split_at(rest, k);
        groups.push(reverse_list(group));
        rest = next;
        remaining -= k;
    }
    groups.into_iter().rev().fold(rest, |tail, group| concat(group, tail))
}

/// 24. Swap Nodes in Pairs
pub fn swap_pairs(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    reverse_k_group(head, 2)
}

/// 61. Rotate List
///
/// Rotate right by `k` places.
pub fn rotate_right(head: Option<Box<ListNode>>, k: i32) -> Option<Box<ListNode>> {
    let len = length(&head);
    if len == 0 {
        return head;
    }
    let shift = k as usize % len;
    if shift == 0 {
        return head;
    }
    let (front, back) = split_at(head, len - shift);
    concat(back, front)
}

/// 143. Reorder List
///
/// `L0 → Ln → L1 → Ln-1 → ...`: split at the middle, reverse the back half,
/// then weave the halves together.
pub fn reorder_list(head: &mut Option<Box<ListNode>>) {
    let len = length(head);
    if len < 3 {
        return;
    }
    let (front, back) = split_at(head.take(), (len + 1) / 2);
    *head = weave(front, reverse_list(back));
}

/// Alternate nodes from `first` and `second`, starting with `first`.
fn weave(first: Option<Box<ListNode>>, second: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    match first {
        None => second,
        Some(mut node) => {
            let rest = node.next.take();
            node.next = weave(second, rest);
            Some(node)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use crate::structures::list_to_vec;

    #[test]
    fn reverses_whole_list() {
        assert_eq!(list_to_vec(&reverse_list(list![1, 2, 3, 4, 5])), vec![5, 4, 3, 2, 1]);
        assert_eq!(reverse_list(None), None);
    }

    #[test]
    fn reverses_sublist() {
        let out = reverse_between(list![1, 2, 3, 4, 5], 2, 4);
        assert_eq!(list_to_vec(&out), vec![1, 4, 3, 2, 5]);
        assert_eq!(list_to_vec(&reverse_between(list![5], 1, 1)), vec![5]);
        assert_eq!(list_to_vec(&reverse_between(list![3, 5], 1, 2)), vec![5, 3]);
    }

    #[test]
    fn k_groups() {
        assert_eq!(list_to_vec(&reverse_k_group(list![1, 2, 3, 4, 5], 2)), vec![2, 1, 4, 3, 5]);
        assert_eq!(list_to_vec(&reverse_k_group(list![1, 2, 3, 4, 5], 3)), vec![3, 2, 1, 4, 5]);
        assert_eq!(list_to_vec(&reverse_k_group(list![1, 2], 1)), vec![1, 2]);
    }

    #[test]
    fn pairs() {
        assert_eq!(list_to_vec(&swap_pairs(list![1, 2, 3, 4])), vec![2, 1, 4, 3]);
        assert_eq!(list_to_vec(&swap_pairs(list![1, 2, 3])), vec![2, 1, 3]);
        assert_eq!(swap_pairs(None), None);
    }

    #[test]
    fn rotations() {
        assert_eq!(list_to_vec(&rotate_right(list![1, 2, 3, 4, 5], 2)), vec![4, 5, 1, 2, 3]);
        assert_eq!(list_to_vec(&rotate_right(list![0, 1, 2], 4)), vec![2, 0, 1]);
        assert_eq!(rotate_right(None, 3), None);
    }

    #[test]
    fn reorders_alternating_ends() {
        let mut head = list![1, 2, 3, 4];
        reorder_list(&mut head);
        assert_eq!(list_to_vec(&head), vec![1, 4, 2, 3]);
        let mut head = list![1, 2, 3, 4, 5];
        reorder_list(&mut head);
        assert_eq!(list_to_vec(&head), vec![1, 5, 2, 4, 3]);
    }
}
