// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, replay, tree_answer, unknown, Problem, Topic};
use crate::tree::*;

const T: Topic = Topic::Tree;

/// Ancestor answers name the node by value.
fn value_of(node: &Tree) -> Option<i32> {
    node.as_ref().map(|n| n.borrow().val)
}

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 94, "binary-tree-inorder-traversal", "Binary Tree Inorder Traversal", Easy, Exact,
        |a| answer(inorder_traversal(a.tree(0)?)),
        "[[1,null,2,3]]" => "[1,3,2]",
        "[[]]" => "[]",
        "[[1]]" => "[1]"),
    problem!(T; 144, "binary-tree-preorder-traversal", "Binary Tree Preorder Traversal", Easy, Exact,
        |a| answer(preorder_traversal(a.tree(0)?)),
        "[[1,null,2,3]]" => "[1,2,3]",
        "[[]]" => "[]"),
    problem!(T; 145, "binary-tree-postorder-traversal", "Binary Tree Postorder Traversal", Easy, Exact,
        |a| answer(postorder_traversal(a.tree(0)?)),
        "[[1,null,2,3]]" => "[3,2,1]",
        "[[]]" => "[]"),
    problem!(T; 102, "binary-tree-level-order-traversal", "Binary Tree Level Order Traversal", Medium, Exact,
        |a| answer(level_order(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "[[3],[9,20],[15,7]]",
        "[[1]]" => "[[1]]",
        "[[]]" => "[]"),
    problem!(T; 107, "binary-tree-level-order-traversal-ii", "Binary Tree Level Order Traversal II", Medium, Exact,
        |a| answer(level_order_bottom(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "[[15,7],[9,20],[3]]"),
    problem!(T; 103, "binary-tree-zigzag-level-order-traversal", "Binary Tree Zigzag Level Order Traversal", Medium, Exact,
        |a| answer(zigzag_level_order(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "[[3],[20,9],[15,7]]",
        "[[]]" => "[]"),
    problem!(T; 199, "binary-tree-right-side-view", "Binary Tree Right Side View", Medium, Exact,
        |a| answer(right_side_view(a.tree(0)?)),
        "[[1,2,3,null,5,null,4]]" => "[1,3,4]",
        "[[1,null,3]]" => "[1,3]",
        "[[]]" => "[]"),
    problem!(T; 637, "average-of-levels-in-binary-tree", "Average of Levels in Binary Tree", Easy, Float,
        |a| answer(average_of_levels(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "[3.0,14.5,11.0]",
        "[[3,9,20,15,7]]" => "[3.0,14.5,11.0]"),
    problem!(T; 104, "maximum-depth-of-binary-tree", "Maximum Depth of Binary Tree", Easy, Exact,
        |a| answer(max_depth(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "3",
        "[[1,null,2]]" => "2"),
    problem!(T; 111, "minimum-depth-of-binary-tree", "Minimum Depth of Binary Tree", Easy, Exact,
        |a| answer(min_depth(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "2",
        "[[2,null,3,null,4,null,5,null,6]]" => "5"),
    problem!(T; 100, "same-tree", "Same Tree", Easy, Exact,
        |a| answer(is_same_tree(a.tree(0)?, a.tree(1)?)),
        "[[1,2,3],[1,2,3]]" => "true",
        "[[1,2],[1,null,2]]" => "false",
        "[[1,2,1],[1,1,2]]" => "false"),
    problem!(T; 101, "symmetric-tree", "Symmetric Tree", Easy, Exact,
        |a| answer(is_symmetric(a.tree(0)?)),
        "[[1,2,2,3,4,4,3]]" => "true",
        "[[1,2,2,null,3,null,3]]" => "false"),
    problem!(T; 110, "balanced-binary-tree", "Balanced Binary Tree", Easy, Exact,
        |a| answer(is_balanced(a.tree(0)?)),
        "[[3,9,20,null,null,15,7]]" => "true",
        "[[1,2,2,3,3,null,null,4,4]]" => "false",
        "[[]]" => "true"),
    problem!(T; 543, "diameter-of-binary-tree", "Diameter of Binary Tree", Easy, Exact,
        |a| answer(diameter_of_binary_tree(a.tree(0)?)),
        "[[1,2,3,4,5]]" => "3",
        "[[1,2]]" => "1"),
    problem!(T; 572, "subtree-of-another-tree", "Subtree of Another Tree", Easy, Exact,
        |a| answer(is_subtree(a.tree(0)?, a.tree(1)?)),
        "[[3,4,5,1,2],[4,1,2]]" => "true",
        "[[3,4,5,1,2,null,null,null,null,0],[4,1,2]]" => "false"),
    problem!(T; 226, "invert-binary-tree", "Invert Binary Tree", Easy, Exact,
        |a| tree_answer(&invert_tree(a.tree(0)?)),
        "[[4,2,7,1,3,6,9]]" => "[4,7,2,9,6,3,1]",
        "[[2,1,3]]" => "[2,3,1]",
        "[[]]" => "[]"),
    problem!(T; 222, "count-complete-tree-nodes", "Count Complete Tree Nodes", Easy, Exact,
        |a| answer(count_nodes(a.tree(0)?)),
        "[[1,2,3,4,5,6]]" => "6",
        "[[]]" => "0",
        "[[1]]" => "1"),
    problem!(T; 1448, "count-good-nodes-in-binary-tree", "Count Good Nodes in Binary Tree", Medium, Exact,
        |a| answer(good_nodes(a.tree(0)?)),
        "[[3,1,4,3,null,1,5]]" => "4",
        "[[3,3,null,4,2]]" => "3",
        "[[1]]" => "1"),
    problem!(T; 98, "validate-binary-search-tree", "Validate Binary Search Tree", Medium, Exact,
        |a| answer(is_valid_bst(a.tree(0)?)),
        "[[2,1,3]]" => "true",
        "[[5,1,4,null,null,3,6]]" => "false"),
    problem!(T; 230, "kth-smallest-element-in-a-bst", "Kth Smallest Element in a BST", Medium, Exact,
        |a| answer(kth_smallest(a.tree(0)?, a.get(1)?)),
        "[[3,1,4,null,2],1]" => "1",
        "[[5,3,6,2,4,null,null,1],3]" => "3"),
    problem!(T; 235, "lowest-common-ancestor-of-a-binary-search-tree", "Lowest Common Ancestor of a Binary Search Tree", Medium, Exact,
        |a| answer(value_of(&lowest_common_ancestor_bst(a.tree(0)?, a.get(1)?, a.get(2)?))),
        "[[6,2,8,0,4,7,9,null,null,3,5],2,8]" => "6",
        "[[6,2,8,0,4,7,9,null,null,3,5],2,4]" => "2",
        "[[2,1],2,1]" => "2"),
    problem!(T; 236, "lowest-common-ancestor-of-a-binary-tree", "Lowest Common Ancestor of a Binary Tree", Medium, Exact,
        |a| answer(value_of(&lowest_common_ancestor(a.tree(0)?, a.get(1)?, a.get(2)?))),
        "[[3,5,1,6,2,0,8,null,null,7,4],5,1]" => "3",
        "[[3,5,1,6,2,0,8,null,null,7,4],5,4]" => "5",
        "[[1,2],1,2]" => "1"),
    problem!(T; 700, "search-in-a-binary-search-tree", "Search in a Binary Search Tree", Easy, Exact,
        |a| tree_answer(&search_bst(a.tree(0)?, a.get(1)?)),
        "[[4,2,7,1,3],2]" => "[2,1,3]",
        "[[4,2,7,1,3],5]" => "[]"),
    problem!(T; 701, "insert-into-a-binary-search-tree", "Insert into a Binary Search Tree", Medium, Exact,
        |a| tree_answer(&insert_into_bst(a.tree(0)?, a.get(1)?)),
        "[[4,2,7,1,3],5]" => "[4,2,7,1,3,5]",
        "[[],5]" => "[5]"),
    problem!(T; 450, "delete-node-in-a-bst", "Delete Node in a BST", Medium, Exact,
        |a| tree_answer(&delete_node(a.tree(0)?, a.get(1)?)),
        "[[5,3,6,2,4,null,7],3]" => "[5,4,6,2,null,null,7]",
        "[[5,3,6,2,4,null,7],0]" => "[5,3,6,2,4,null,7]",
        "[[],0]" => "[]"),
    problem!(T; 108, "convert-sorted-array-to-binary-search-tree", "Convert Sorted Array to Binary Search Tree", Easy, Exact,
        |a| tree_answer(&sorted_array_to_bst(a.get(0)?)),
        "[[-10,-3,0,5,9]]" => "[0,-3,9,-10,null,5]",
        "[[1,3]]" => "[3,1]"),
    problem!(T; 173, "binary-search-tree-iterator", "Binary Search Tree Iterator", Medium, Exact,
        |a| replay(a, "BSTIterator", |c| Ok(BstIterator::new(c.tree(0)?)), |it, op, _| match op {
            "next" => answer(it.next()),
            "hasNext" => answer(it.has_next()),
            _ => Err(unknown(op)),
        }),
        r#"[["BSTIterator","next","next","hasNext","next","hasNext","next","hasNext","next","hasNext"],[[[7,3,15,null,null,9,20]],[],[],[],[],[],[],[],[],[]]]"#
            => "[null,3,7,true,9,true,15,true,20,false]"),
    problem!(T; 105, "construct-binary-tree-from-preorder-and-inorder-traversal", "Construct Binary Tree from Preorder and Inorder Traversal", Medium, Exact,
        |a| tree_answer(&build_tree_pre_in(a.get(0)?, a.get(1)?)),
        "[[3,9,20,15,7],[9,3,15,20,7]]" => "[3,9,20,null,null,15,7]",
        "[[-1],[-1]]" => "[-1]"),
    problem!(T; 106, "construct-binary-tree-from-inorder-and-postorder-traversal", "Construct Binary Tree from Inorder and Postorder Traversal", Medium, Exact,
        |a| tree_answer(&build_tree_in_post(a.get(0)?, a.get(1)?)),
        "[[9,3,15,20,7],[9,15,7,20,3]]" => "[3,9,20,null,null,15,7]",
        "[[-1],[-1]]" => "[-1]"),
    problem!(T; 297, "serialize-and-deserialize-binary-tree", "Serialize and Deserialize Binary Tree", Hard, Exact,
        |a| {
            let codec = Codec::new();
            let text = codec.serialize(a.tree(0)?);
            tree_answer(&codec.deserialize(text))
        },
        "[[1,2,3,null,null,4,5]]" => "[1,2,3,null,null,4,5]",
        "[[]]" => "[]"),
    problem!(T; 114, "flatten-binary-tree-to-linked-list", "Flatten Binary Tree to Linked List", Medium, Exact,
        |a| {
            let mut root = a.tree(0)?;
            flatten(&mut root);
            tree_answer(&root)
        },
        "[[1,2,5,3,4,null,6]]" => "[1,null,2,null,3,null,4,null,5,null,6]",
        "[[]]" => "[]",
        "[[0]]" => "[0]"),
    problem!(T; 112, "path-sum", "Path Sum", Easy, Exact,
        |a| answer(has_path_sum(a.tree(0)?, a.get(1)?)),
        "[[5,4,8,11,null,13,4,7,2,null,null,null,1],22]" => "true",
        "[[1,2,3],5]" => "false",
        "[[],0]" => "false"),
    problem!(T; 113, "path-sum-ii", "Path Sum II", Medium, AnyOrder,
        |a| answer(path_sum(a.tree(0)?, a.get(1)?)),
        "[[5,4,8,11,null,13,4,7,2,null,null,5,1],22]" => "[[5,4,11,2],[5,8,4,5]]",
        "[[1,2,3],5]" => "[]"),
    problem!(T; 437, "path-sum-iii", "Path Sum III", Medium, Exact,
        |a| answer(path_sum_iii(a.tree(0)?, a.get(1)?)),
        "[[10,5,-3,3,2,null,11,3,-2,null,1],8]" => "3",
        "[[5,4,8,11,null,13,4,7,2,null,null,5,1],22]" => "3"),
    problem!(T; 124, "binary-tree-maximum-path-sum", "Binary Tree Maximum Path Sum", Hard, Exact,
        |a| answer(max_path_sum(a.tree(0)?)),
        "[[1,2,3]]" => "6",
        "[[-10,9,20,null,null,15,7]]" => "42"),
    problem!(T; 257, "binary-tree-paths", "Binary Tree Paths", Easy, AnyOrder,
        |a| answer(binary_tree_paths(a.tree(0)?)),
        "[[1,2,3,null,5]]" => r#"["1->2->5","1->3"]"#,
        "[[1]]" => r#"["1"]"#),
    problem!(T; 129, "sum-root-to-leaf-numbers", "Sum Root to Leaf Numbers", Medium, Exact,
        |a| answer(sum_numbers(a.tree(0)?)),
        "[[1,2,3]]" => "25",
        "[[4,9,0,5,1]]" => "1026"),
];
