// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Decoding positional JSON arguments at the judge boundary.

use crate::common::{assert_rejects, assert_solves, solve};
use leetkit::catalog::Args;
use leetkit::SolveError;

#[test]
fn test_positional_scalars_and_arrays() {
    assert_solves("two-sum", "[[2,7,11,15],9]", "[0,1]");
    assert_solves("62", "[3,7]", "28");
    assert_solves("valid-parentheses", r#"["()[]{}"]"#, "true");
}

#[test]
fn test_lists_and_trees_decode_from_arrays() {
    assert_solves("add-two-numbers", "[[2,4,3],[5,6,4]]", "[7,0,8]");
    assert_solves("reverse-linked-list", "[[]]", "[]");
    assert_solves("merge-two-sorted-lists", "[[1,2,4],[1,3,4]]", "[1,1,2,3,4,4]");
    assert_solves("binary-tree-level-order-traversal", "[[3,9,20,null,null,15,7]]", "[[3],[9,20],[15,7]]");
    assert_solves("94", "[[]]", "[]");
}

#[test]
fn test_character_grids() {
    assert_solves(
        "number-of-islands",
        r#"[[["1","0","1"],["0","0","0"],["1","0","1"]]]"#,
        "4",
    );
}

#[test]
fn test_missing_argument() {
    let err = solve("two-sum", "[[1,2]]").unwrap_err();
    assert!(matches!(err, SolveError::MissingArgument { index: 1 }), "{err}");
}

#[test]
fn test_malformed_argument() {
    let err = solve("two-sum", r#"["abc", 3]"#).unwrap_err();
    assert!(matches!(err, SolveError::BadArgument { index: 0, .. }), "{err}");
    assert_rejects("two-sum", "not json");
    assert_rejects("two-sum", r#"{"nums": [1, 2]}"#);
}

#[test]
fn test_args_accessors() {
    let args = Args::parse("[1, [2, 3], []]").unwrap();
    assert_eq!(args.len(), 3);
    assert!(!args.is_empty());
    assert_eq!(args.get::<i32>(0).unwrap(), 1);
    assert_eq!(args.get::<Vec<i32>>(1).unwrap(), vec![2, 3]);
    assert!(args.tree(2).unwrap().is_none());
    assert!(Args::parse("[]").unwrap().is_empty());
}

#[test]
fn test_string_arguments_keep_codec_delimiters() {
    assert_solves(
        "encode-and-decode-strings",
        r##"[["we","say",":","yes","#4#"]]"##,
        r##"["we","say",":","yes","#4#"]"##,
    );
    assert_solves("271", r###"[["4#","","##"]]"###, r###"["4#","","##"]"###);
}
