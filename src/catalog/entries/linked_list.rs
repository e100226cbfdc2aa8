// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, list_answer, problem, Problem, Topic};
use crate::linked_list::*;

const T: Topic = Topic::LinkedList;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 206, "reverse-linked-list", "Reverse Linked List", Easy, Exact,
        |a| list_answer(&reverse_list(a.list(0)?)),
        "[[1,2,3,4,5]]" => "[5,4,3,2,1]",
        "[[1,2]]" => "[2,1]",
        "[[]]" => "[]"),
    problem!(T; 21, "merge-two-sorted-lists", "Merge Two Sorted Lists", Easy, Exact,
        |a| list_answer(&merge_two_lists(a.list(0)?, a.list(1)?)),
        "[[1,2,4],[1,3,4]]" => "[1,1,2,3,4,4]",
        "[[],[]]" => "[]",
        "[[],[0]]" => "[0]"),
    problem!(T; 143, "reorder-list", "Reorder List", Medium, Exact,
        |a| {
            let mut head = a.list(0)?;
            reorder_list(&mut head);
            list_answer(&head)
        },
        "[[1,2,3,4]]" => "[1,4,2,3]",
        "[[1,2,3,4,5]]" => "[1,5,2,4,3]"),
    problem!(T; 19, "remove-nth-node-from-end-of-list", "Remove Nth Node From End of List", Medium, Exact,
        |a| list_answer(&remove_nth_from_end(a.list(0)?, a.get(1)?)),
        "[[1,2,3,4,5],2]" => "[1,2,3,5]",
        "[[1],1]" => "[]",
        "[[1,2],1]" => "[1]"),
    problem!(T; 2, "add-two-numbers", "Add Two Numbers", Medium, Exact,
        |a| list_answer(&add_two_numbers(a.list(0)?, a.list(1)?)),
        "[[2,4,3],[5,6,4]]" => "[7,0,8]",
        "[[0],[0]]" => "[0]",
        "[[9,9,9,9,9,9,9],[9,9,9,9]]" => "[8,9,9,9,0,0,0,1]"),
    problem!(T; 23, "merge-k-sorted-lists", "Merge k Sorted Lists", Hard, Exact,
        |a| list_answer(&merge_k_lists(a.lists(0)?)),
        "[[[1,4,5],[1,3,4],[2,6]]]" => "[1,1,2,3,4,4,5,6]",
        "[[]]" => "[]",
        "[[[]]]" => "[]"),
    problem!(T; 25, "reverse-nodes-in-k-group", "Reverse Nodes in k-Group", Hard, Exact,
        |a| list_answer(&reverse_k_group(a.list(0)?, a.get(1)?)),
        "[[1,2,3,4,5],2]" => "[2,1,4,3,5]",
        "[[1,2,3,4,5],3]" => "[3,2,1,4,5]"),
    problem!(T; 876, "middle-of-the-linked-list", "Middle of the Linked List", Easy, Exact,
        |a| list_answer(&middle_node(a.list(0)?)),
        "[[1,2,3,4,5]]" => "[3,4,5]",
        "[[1,2,3,4,5,6]]" => "[4,5,6]"),
    problem!(T; 234, "palindrome-linked-list", "Palindrome Linked List", Easy, Exact,
        |a| answer(is_palindrome_list(a.list(0)?)),
        "[[1,2,2,1]]" => "true",
        "[[1,2]]" => "false"),
    problem!(T; 83, "remove-duplicates-from-sorted-list", "Remove Duplicates from Sorted List", Easy, Exact,
        |a| list_answer(&delete_duplicates(a.list(0)?)),
        "[[1,1,2]]" => "[1,2]",
        "[[1,1,2,3,3]]" => "[1,2,3]"),
    problem!(T; 82, "remove-duplicates-from-sorted-list-ii", "Remove Duplicates from Sorted List II", Medium, Exact,
        |a| list_answer(&delete_all_duplicates(a.list(0)?)),
        "[[1,2,3,3,4,4,5]]" => "[1,2,5]",
        "[[1,1,1,2,3]]" => "[2,3]"),
    problem!(T; 24, "swap-nodes-in-pairs", "Swap Nodes in Pairs", Medium, Exact,
        |a| list_answer(&swap_pairs(a.list(0)?)),
        "[[1,2,3,4]]" => "[2,1,4,3]",
        "[[]]" => "[]",
        "[[1]]" => "[1]",
        "[[1,2,3]]" => "[2,1,3]"),
    problem!(T; 61, "rotate-list", "Rotate List", Medium, Exact,
        |a| list_answer(&rotate_right(a.list(0)?, a.get(1)?)),
        "[[1,2,3,4,5],2]" => "[4,5,1,2,3]",
        "[[0,1,2],4]" => "[2,0,1]"),
    problem!(T; 86, "partition-list", "Partition List", Medium, Exact,
        |a| list_answer(&partition(a.list(0)?, a.get(1)?)),
        "[[1,4,3,2,5,2],3]" => "[1,2,2,4,3,5]",
        "[[2,1],2]" => "[1,2]"),
    problem!(T; 92, "reverse-linked-list-ii", "Reverse Linked List II", Medium, Exact,
        |a| list_answer(&reverse_between(a.list(0)?, a.get(1)?, a.get(2)?)),
        "[[1,2,3,4,5],2,4]" => "[1,4,3,2,5]",
        "[[5],1,1]" => "[5]"),
    problem!(T; 148, "sort-list", "Sort List", Medium, Exact,
        |a| list_answer(&sort_list(a.list(0)?)),
        "[[4,2,1,3]]" => "[1,2,3,4]",
        "[[-1,5,3,4,0]]" => "[-1,0,3,4,5]",
        "[[]]" => "[]"),
    problem!(T; 287, "find-the-duplicate-number", "Find the Duplicate Number", Medium, Exact,
        |a| answer(find_duplicate(a.get(0)?)),
        "[[1,3,4,2,2]]" => "2",
        "[[3,1,3,4,2]]" => "3",
        "[[3,3,3,3,3]]" => "3"),
];
