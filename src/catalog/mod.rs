// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The problem catalogue.
//!
//! Each [`Problem`] binds an exercise to its metadata, a `run` adapter that
//! decodes positional JSON arguments and encodes the answer, and the examples
//! from its problem statement.
//!
//! ```text
//!   "[[2,7,11,15], 9]" ──Args::parse──► Args ──run──► two_sum(..) ──► [0,1]
//!                                                                      │
//!                      "[0,1]" ──────────────────────── Compare::Exact ┘
//! ```
//!
//! Entries live in `entries/`, one file per topic.

mod args;
mod entries;
mod session;

pub use args::Args;
pub(crate) use session::{replay, unit, unknown};

use crate::structures::{list_to_vec, tree_to_vec, ListNode, TreeNode};
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Topic a problem is filed under, one per library module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Topic {
    Array,
    TwoPointers,
    SlidingWindow,
    Stack,
    BinarySearch,
    LinkedList,
    Tree,
    Trie,
    Heap,
    Backtracking,
    Graph,
    UnionFind,
    SegmentTree,
    Dp,
    Greedy,
    Intervals,
    Math,
    String,
    Design,
    Concurrency,
}

impl Topic {
    pub const ALL: [Topic; 20] = [
        Topic::Array,
        Topic::TwoPointers,
        Topic::SlidingWindow,
        Topic::Stack,
        Topic::BinarySearch,
        Topic::LinkedList,
        Topic::Tree,
        Topic::Trie,
        Topic::Heap,
        Topic::Backtracking,
        Topic::Graph,
        Topic::UnionFind,
        Topic::SegmentTree,
        Topic::Dp,
        Topic::Greedy,
        Topic::Intervals,
        Topic::Math,
        Topic::String,
        Topic::Design,
        Topic::Concurrency,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Topic::Array => "array",
            Topic::TwoPointers => "two-pointers",
            Topic::SlidingWindow => "sliding-window",
            Topic::Stack => "stack",
            Topic::BinarySearch => "binary-search",
            Topic::LinkedList => "linked-list",
            Topic::Tree => "tree",
            Topic::Trie => "trie",
            Topic::Heap => "heap",
            Topic::Backtracking => "backtracking",
            Topic::Graph => "graph",
            Topic::UnionFind => "union-find",
            Topic::SegmentTree => "segment-tree",
            Topic::Dp => "dp",
            Topic::Greedy => "greedy",
            Topic::Intervals => "intervals",
            Topic::Math => "math",
            Topic::String => "string",
            Topic::Design => "design",
            Topic::Concurrency => "concurrency",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    /// Accepts `two-pointers`, `two_pointers` and any casing.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Topic::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| format!("unknown topic `{s}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty `{s}`")),
        }
    }
}

/// How an answer is matched against the expected output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compare {
    /// Structural JSON equality.
    Exact,
    /// Order of the outer array is ignored.
    AnyOrder,
    /// Order is ignored in the outer array and in each inner array.
    Nested,
    /// Numbers match within an absolute tolerance of [`FLOAT_TOLERANCE`].
    Float,
}

pub const FLOAT_TOLERANCE: f64 = 1e-5;

/// One input/output pair from a problem statement, both as JSON text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub input: &'static str,
    pub output: &'static str,
}

pub type Runner = fn(&Args) -> Result<Value>;

#[derive(Clone, Copy)]
pub struct Problem {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub topic: Topic,
    pub difficulty: Difficulty,
    pub compare: Compare,
    pub run: Runner,
    pub examples: &'static [Example],
}

impl Problem {
    /// Decodes `input` and runs the exercise on it.
    pub fn solve(&self, input: &str) -> Result<Value> {
        let args = Args::parse(input)?;
        (self.run)(&args)
    }
}

impl fmt::Debug for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("id", &self.id)
            .field("slug", &self.slug)
            .field("topic", &self.topic)
            .field("difficulty", &self.difficulty)
            .field("compare", &self.compare)
            .field("examples", &self.examples.len())
            .finish()
    }
}

/// Every registered problem, grouped by topic.
pub fn all() -> impl Iterator<Item = &'static Problem> {
    entries::TOPICS.iter().flat_map(|problems| problems.iter())
}

/// Looks a problem up by number (`"146"`) or slug (`"lru-cache"`).
pub fn find(key: &str) -> Option<&'static Problem> {
    let key = key.trim();
    match key.parse::<u32>() {
        Ok(id) => all().find(|p| p.id == id),
        Err(_) => {
            let slug = key.to_ascii_lowercase();
            all().find(|p| p.slug == slug)
        }
    }
}

pub fn by_topic(topic: Topic) -> impl Iterator<Item = &'static Problem> {
    all().filter(move |p| p.topic == topic)
}

/// Encodes an exercise answer.
pub(crate) fn answer<T: Serialize>(value: T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

pub(crate) fn list_answer(head: &Option<Box<ListNode>>) -> Result<Value> {
    answer(list_to_vec(head))
}

pub(crate) fn tree_answer(root: &Option<Rc<RefCell<TreeNode>>>) -> Result<Value> {
    answer(tree_to_vec(root))
}

/// Builds a [`Problem`] literal:
///
/// ```text
/// problem!(Topic::Array; 1, "two-sum", "Two Sum", Easy, Exact,
///     |a| answer(two_sum(a.get(0)?, a.get(1)?)),
///     "[[2,7,11,15],9]" => "[0,1]");
/// ```
macro_rules! problem {
    ($topic:expr; $id:literal, $slug:literal, $title:literal, $difficulty:ident, $compare:ident,
     |$args:ident| $body:expr,
     $($input:expr => $output:expr),+ $(,)?) => {
        $crate::catalog::Problem {
            id: $id,
            slug: $slug,
            title: $title,
            topic: $topic,
            difficulty: $crate::catalog::Difficulty::$difficulty,
            compare: $crate::catalog::Compare::$compare,
            run: |$args| $body,
            examples: &[$($crate::catalog::Example { input: $input, output: $output }),+],
        }
    };
    ($topic:expr; $id:literal, $slug:literal, $title:literal, $difficulty:ident, $compare:ident,
     $run:path,
     $($input:expr => $output:expr),+ $(,)?) => {
        $crate::catalog::Problem {
            id: $id,
            slug: $slug,
            title: $title,
            topic: $topic,
            difficulty: $crate::catalog::Difficulty::$difficulty,
            compare: $crate::catalog::Compare::$compare,
            run: $run,
            examples: &[$($crate::catalog::Example { input: $input, output: $output }),+],
        }
    };
}
pub(crate) use problem;
