// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Merging, sorting and arithmetic on lists.

use super::{length, split_at};
use crate::structures::ListNode;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Collects detached nodes in order, then links them in one pass.
#[derive(Default)]
struct ListBuilder {
    nodes: Vec<Box<ListNode>>,
}

impl ListBuilder {
    fn push(&mut self, mut node: Box<ListNode>) {
        node.next = None;
        self.nodes.push(node);
    }

    /// Link everything pushed so far, followed by `rest`.
    fn finish(self, rest: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
        self.nodes.into_iter().rev().fold(rest, |next, mut node| {
            node.next = next;
            Some(node)
        })
    }
}

/// 21. Merge Two Sorted Lists
pub fn merge_two_lists(
    list1: Option<Box<ListNode>>,
    list2: Option<Box<ListNode>>,
) -> Option<Box<ListNode>> {
    let mut out = ListBuilder::default();
    let (mut a, mut b) = (list1, list2);
    loop {
        match (a, b) {
            (Some(mut x), Some(mut y)) => {
                if x.val <= y.val {
                    a = x.next.take();
                    b = Some(y);
                    out.push(x);
                } else {
                    b = y.next.take();
                    a = Some(x);
                    out.push(y);
                }
            }
            (rest, None) | (None, rest) => return out.finish(rest),
        }
    }
}

/// 23. Merge k Sorted Lists
///
/// Min-heap keyed on the current head of each list.
pub fn merge_k_lists(lists: Vec<Option<Box<ListNode>>>) -> Option<Box<ListNode>> {
    let mut heads: Vec<Option<Box<ListNode>>> = lists;
    let mut heap: BinaryHeap<Reverse<(i32, usize)>> = heads
        .iter()
        .enumerate()
        .filter_map(|(i, head)| head.as_ref().map(|node| Reverse((node.val, i))))
        .collect();

    let mut out = ListBuilder::default();
    while let Some(Reverse((_, i))) = heap.pop() {
        if let Some(mut node) = heads[i].take() {
            heads[i] = node.next.take();
            if let Some(next) = heads[i].as_ref() {
                heap.push(Reverse((next.val, i)));
            }
            out.push(node);
        }
    }
    out.finish(None)
}

/// 148. Sort List
///
/// Top-down merge sort, O(n log n).
pub fn sort_list(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let len = length(&head);
    if len < 2 {
        return head;
    }
    let (front, back) = split_at(head, len / 2);
    merge_two_lists(sort_list(front), sort_list(back))
}

/// 2. Add Two Numbers
///
/// Digits are stored least significant first.
pub fn add_two_numbers(l1: Option<Box<ListNode>>, l2: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut out = ListBuilder::default();
    let (mut a, mut b) = (l1.as_deref(), l2.as_deref());
    let mut carry = 0;
    while a.is_some() || b.is_some() || carry > 0 {
        let mut sum = carry;
        if let Some(node) = a {
            sum += node.val;
            a = node.next.as_deref();
        }
        if let Some(node) = b {
            sum += node.val;
            b = node.next.as_deref();
        }
        carry = sum / 10;
        out.push(Box::new(ListNode::new(sum % 10)));
    }
    out.finish(None)
}

/// 86. Partition List
///
/// Nodes below `x` first, both halves keeping their relative order.
pub fn partition(head: Option<Box<ListNode>>, x: i32) -> Option<Box<ListNode>> {
    let mut below = ListBuilder::default();
    let mut rest = ListBuilder::default();
    let mut cursor = head;
    while let Some(mut node) = cursor {
        cursor = node.next.take();
        if node.val < x {
            below.push(node);
        } else {
            rest.push(node);
        }
    }
    below.finish(rest.finish(None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use crate::structures::{list_to_vec, to_list};

    #[test]
    fn merges_two() {
        let merged = merge_two_lists(list![1, 2, 4], list![1, 3, 4]);
        assert_eq!(list_to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
        assert_eq!(merge_two_lists(None, None), None);
        assert_eq!(list_to_vec(&merge_two_lists(None, list![0])), vec![0]);
    }

    #[test]
    fn merges_k() {
        let merged = merge_k_lists(vec![list![1, 4, 5], list![1, 3, 4], list![2, 6]]);
        assert_eq!(list_to_vec(&merged), vec![1, 1, 2, 3, 4, 4, 5, 6]);
        assert_eq!(merge_k_lists(vec![]), None);
        assert_eq!(merge_k_lists(vec![None]), None);
    }

    #[test]
    fn sorts() {
        assert_eq!(list_to_vec(&sort_list(list![4, 2, 1, 3])), vec![1, 2, 3, 4]);
        assert_eq!(list_to_vec(&sort_list(list![-1, 5, 3, 4, 0])), vec![-1, 0, 3, 4, 5]);
        assert_eq!(sort_list(None), None);
    }

    #[test]
    fn adds_digits() {
        let sum = add_two_numbers(list![2, 4, 3], list![5, 6, 4]);
        assert_eq!(list_to_vec(&sum), vec![7, 0, 8]);
        let sum = add_two_numbers(to_list(&[9; 7]), to_list(&[9; 4]));
        assert_eq!(list_to_vec(&sum), vec![8, 9, 9, 9, 0, 0, 0, 1]);
        assert_eq!(list_to_vec(&add_two_numbers(list![0], list![0])), vec![0]);
    }

    #[test]
    fn partitions_stably() {
        assert_eq!(list_to_vec(&partition(list![1, 4, 3, 2, 5, 2], 3)), vec![1, 2, 2, 4, 3, 5]);
        assert_eq!(list_to_vec(&partition(list![2, 1], 2)), vec![1, 2]);
    }
}
