// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! List and tree builders, as the exercises and the judge see them.

use leetkit::structures::{list_to_vec, to_list, to_tree, tree_to_vec};
use leetkit::tree::{inorder_traversal, Codec};
use leetkit::{list, tree};

// ============================================================================
// LISTS
// ============================================================================

#[test]
fn test_list_macro_builds_in_order() {
    let head = list![1, 2, 3];
    assert_eq!(list_to_vec(&head), vec![1, 2, 3]);
    assert_eq!(head.as_ref().map(|n| n.val), Some(1));
}

#[test]
fn test_empty_list() {
    let head: Option<Box<leetkit::structures::ListNode>> = list![];
    assert!(head.is_none());
    assert!(to_list(&[]).is_none());
    assert!(list_to_vec(&None).is_empty());
}

// ============================================================================
// TREES
// ============================================================================

#[test]
fn test_tree_level_order_with_gaps() {
    let root = tree![1, null, 2, 3];
    assert_eq!(tree_to_vec(&root), vec![Some(1), None, Some(2), Some(3)]);
    assert_eq!(inorder_traversal(root), vec![1, 3, 2]);
}

#[test]
fn test_tree_negative_values() {
    let root = tree![(-1), 2, (-3)];
    assert_eq!(tree_to_vec(&root), vec![Some(-1), Some(2), Some(-3)]);
}

#[test]
fn test_tree_listing_drops_trailing_gaps() {
    let root = to_tree(&[Some(1), Some(2), None, None, None]);
    assert_eq!(tree_to_vec(&root), vec![Some(1), Some(2)]);
}

#[test]
fn test_empty_tree() {
    assert!(to_tree(&[]).is_none());
    assert!(to_tree(&[None]).is_none());
    assert!(tree_to_vec(&None).is_empty());
}

#[test]
fn test_codec_text_format() {
    let codec = Codec::new();
    let text = codec.serialize(tree![1, 2, 3, null, null, 4, 5]);
    assert_eq!(text, "1,2,3,#,#,4,5");
    assert_eq!(tree_to_vec(&codec.deserialize(text)), tree_to_vec(&tree![1, 2, 3, null, null, 4, 5]));
    assert_eq!(codec.serialize(None), "");
    assert!(codec.deserialize(String::new()).is_none());
}
