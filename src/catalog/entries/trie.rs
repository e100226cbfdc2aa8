// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, replay, unit, unknown, Problem, Topic};
use crate::trie::*;

const T: Topic = Topic::Trie;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 208, "implement-trie-prefix-tree", "Implement Trie (Prefix Tree)", Medium, Exact,
        |a| replay(a, "Trie", |_| Ok(Trie::new()), |t, op, c| match op {
            "insert" => {
                t.insert(c.get(0)?);
                unit()
            }
            "search" => answer(t.search(c.get(0)?)),
            "startsWith" => answer(t.starts_with(c.get(0)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["Trie","insert","search","search","startsWith","insert","search"],[[],["apple"],["apple"],["app"],["app"],["app"],["app"]]]"#
            => "[null,null,true,false,true,null,true]"),
    problem!(T; 211, "design-add-and-search-words-data-structure", "Design Add and Search Words Data Structure", Medium, Exact,
        |a| replay(a, "WordDictionary", |_| Ok(WordDictionary::new()), |d, op, c| match op {
            "addWord" => {
                d.add_word(c.get(0)?);
                unit()
            }
            "search" => answer(d.search(c.get(0)?)),
            _ => Err(unknown(op)),
        }),
        r#"[["WordDictionary","addWord","addWord","addWord","search","search","search","search"],[[],["bad"],["dad"],["mad"],["pad"],["bad"],[".ad"],["b.."]]]"#
            => "[null,null,null,null,false,true,true,true]"),
    problem!(T; 212, "word-search-ii", "Word Search II", Hard, AnyOrder,
        |a| answer(find_words(a.get(0)?, a.get(1)?)),
        r#"[[["o","a","a","n"],["e","t","a","e"],["i","h","k","r"],["i","f","l","v"]],["oath","pea","eat","rain"]]"#
            => r#"["eat","oath"]"#,
        r#"[[["a","b"],["c","d"]],["abcb"]]"# => "[]"),
    problem!(T; 648, "replace-words", "Replace Words", Medium, Exact,
        |a| answer(replace_words(a.get(0)?, a.get(1)?)),
        r#"[["cat","bat","rat"],"the cattle was rattled by the battery"]"# => r#""the cat was rat by the bat""#,
        r#"[["a","b","c"],"aadsfasf absbs bbab cadsfafs"]"# => r#""a a b c""#),
];
