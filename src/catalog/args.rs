// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional JSON arguments.
//!
//! An input is a JSON array with one element per parameter, in signature
//! order. Lists are arrays of integers and trees are level-order arrays with
//! `null` for absent children:
//!
//! ```text
//!   "[[1,2,4], [1,3,4]]"            two lists
//!   "[[3,9,20,null,null,15,7]]"     one tree
//!   "[[\"X\",\"O\"],[\"O\",\"X\"]]"  a character board
//! ```
//!
//! Design problems take LeetCode's operation format, a list of names and a
//! parallel list of argument arrays; see [`Args::operations`].

use crate::error::{Result, SolveError};
use crate::structures::{to_list, to_tree, ListNode};
use crate::tree::Tree;
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Parses the JSON text of an input. The top level must be an array.
    pub fn parse(text: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Array(values) => Ok(Self { values }),
            other => Err(SolveError::invalid(format!(
                "arguments must be a JSON array, got {}",
                kind(&other)
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, index: usize) -> Result<&Value> {
        self.values
            .get(index)
            .ok_or(SolveError::MissingArgument { index })
    }

    /// Decodes argument `index` as `T`.
    pub fn get<T: DeserializeOwned>(&self, index: usize) -> Result<T> {
        let value = self.value(index)?.clone();
        serde_json::from_value(value).map_err(|source| SolveError::BadArgument { index, source })
    }

    pub fn list(&self, index: usize) -> Result<Option<Box<ListNode>>> {
        let values: Vec<i32> = self.get(index)?;
        Ok(to_list(&values))
    }

    pub fn lists(&self, index: usize) -> Result<Vec<Option<Box<ListNode>>>> {
        let values: Vec<Vec<i32>> = self.get(index)?;
        Ok(values.iter().map(|v| to_list(v)).collect())
    }

    pub fn tree(&self, index: usize) -> Result<Tree> {
        let slots: Vec<Option<i32>> = self.get(index)?;
        Ok(to_tree(&slots))
    }

    /// Splits a design input `[names, arguments]` into `(name, args)` pairs.
    pub fn operations(&self) -> Result<Vec<(String, Args)>> {
        let names: Vec<String> = self.get(0)?;
        let calls: Vec<Vec<Value>> = self.get(1)?;
        if names.len() != calls.len() {
            return Err(SolveError::invalid(format!(
                "{} operations but {} argument lists",
                names.len(),
                calls.len()
            )));
        }
        Ok(names.into_iter().zip(calls.into_iter().map(Args::new)).collect())
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structures::{list_to_vec, tree_to_vec};

    #[test]
    fn scalars_and_vectors() {
        let args = Args::parse(r#"[[2,7,11,15], 9, "abc", 2.5, true]"#).unwrap();
        assert_eq!(args.len(), 5);
        assert_eq!(args.get::<Vec<i32>>(0).unwrap(), vec![2, 7, 11, 15]);
        assert_eq!(args.get::<i32>(1).unwrap(), 9);
        assert_eq!(args.get::<String>(2).unwrap(), "abc");
        assert_eq!(args.get::<f64>(3).unwrap(), 2.5);
        assert!(args.get::<bool>(4).unwrap());
    }

    #[test]
    fn boards_decode_from_one_char_strings() {
        let args = Args::parse(r#"[[["X","O"],["O","X"]]]"#).unwrap();
        let board: Vec<Vec<char>> = args.get(0).unwrap();
        assert_eq!(board, vec![vec!['X', 'O'], vec!['O', 'X']]);
    }

    #[test]
    fn lists_and_trees() {
        let args = Args::parse("[[1,2,3], [3,9,20,null,null,15,7], [[1,4],[2]]]").unwrap();
        assert_eq!(list_to_vec(&args.list(0).unwrap()), vec![1, 2, 3]);
        let tree = args.tree(1).unwrap();
        assert_eq!(
            tree_to_vec(&tree),
            vec![Some(3), Some(9), Some(20), None, None, Some(15), Some(7)]
        );
        let lists = args.lists(2).unwrap();
        assert_eq!(lists.len(), 2);
        assert_eq!(list_to_vec(&lists[0]), vec![1, 4]);
    }

    #[test]
    fn errors_name_the_argument() {
        let args = Args::parse("[[1,2], \"x\"]").unwrap();
        assert!(matches!(args.get::<i32>(1), Err(SolveError::BadArgument { index: 1, .. })));
        assert!(matches!(args.get::<i32>(5), Err(SolveError::MissingArgument { index: 5 })));
        assert!(matches!(Args::parse("{}"), Err(SolveError::InvalidInput { .. })));
        assert!(matches!(Args::parse("[1,"), Err(SolveError::Serialization(_))));
    }

    #[test]
    fn operation_format() {
        let args = Args::parse(r#"[["LRUCache","put","get"],[[2],[1,1],[1]]]"#).unwrap();
        let ops = args.operations().unwrap();
        assert_eq!(ops.len(), 3);
        assert_eq!(ops[0].0, "LRUCache");
        assert_eq!(ops[1].1.get::<i32>(1).unwrap(), 1);
        let mismatched = Args::parse(r#"[["A","b"],[[]]]"#).unwrap();
        assert!(mismatched.operations().is_err());
    }
}
