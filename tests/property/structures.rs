// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Properties of the tree builders and the tree codec.

use leetkit::structures::{list_to_vec, to_list, tree_to_vec};
use leetkit::tree::{inorder_traversal, insert_into_bst, is_valid_bst, Codec, Tree};
use proptest::prelude::*;

fn bst(values: &[i32]) -> Tree {
    values.iter().fold(None, |root, &v| insert_into_bst(root, v))
}

fn distinct_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::hash_set(-500i32..500, 0..40).prop_map(|set| set.into_iter().collect())
}

proptest! {
    /// Lists keep their values and order.
    #[test]
    fn prop_list_preserves_values(values in prop::collection::vec(any::<i32>(), 0..50)) {
        prop_assert_eq!(list_to_vec(&to_list(&values)), values);
    }

    /// BST insertion keeps the search property and an in-order listing
    /// that is sorted.
    #[test]
    fn prop_bst_insertion_sorted(values in distinct_values()) {
        let root = bst(&values);
        prop_assert!(is_valid_bst(root.clone()));

        let mut sorted = values.clone();
        sorted.sort_unstable();
        prop_assert_eq!(inorder_traversal(root), sorted);
    }

    /// Decoding an encoded tree gives back the same shape.
    #[test]
    fn prop_codec_preserves_shape(values in distinct_values()) {
        let codec = Codec::new();
        let root = bst(&values);
        let listing = tree_to_vec(&root);
        let text = codec.serialize(root);
        let decoded = codec.deserialize(text.clone());
        prop_assert_eq!(tree_to_vec(&decoded), listing);
        prop_assert_eq!(codec.serialize(decoded), text);
    }
}
