// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Prefix trees.
//!
//! Nodes live in a flat arena and refer to children by index:
//!
//! ```text
//!   arena[0] (root) ──a──► arena[1] ──n──► arena[2]* ──d──► arena[3]*
//!                   └─o──► arena[4] ──r──► arena[5]*       (* = word end)
//! ```
//!
//! The same arena backs the plain [`Trie`], the wildcard [`WordDictionary`]
//! and the board search in [`find_words`].

use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
struct Node {
    children: HashMap<char, usize>,
    /// Index of the word ending here, if any.
    word: Option<usize>,
}

#[derive(Debug, Clone)]
struct Arena {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Arena {
    fn default() -> Self {
        Arena {
            nodes: vec![Node::default()],
            words: 0,
        }
    }
}

impl Arena {
    const ROOT: usize = 0;

    fn insert(&mut self, word: &str) -> usize {
        let mut at = Self::ROOT;
        for c in word.chars() {
            at = match self.nodes[at].children.get(&c) {
                Some(&next) => next,
                None => {
                    self.nodes.push(Node::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[at].children.insert(c, next);
                    next
                }
            };
        }
        if self.nodes[at].word.is_none() {
            self.nodes[at].word = Some(self.words);
            self.words += 1;
        }
        at
    }

    fn walk(&self, prefix: &str) -> Option<usize> {
        prefix
            .chars()
            .try_fold(Self::ROOT, |at, c| self.nodes[at].children.get(&c).copied())
    }

    fn child(&self, at: usize, c: char) -> Option<usize> {
        self.nodes[at].children.get(&c).copied()
    }
}

/// 208. Implement Trie (Prefix Tree)
#[derive(Debug, Default, Clone)]
pub struct Trie {
    arena: Arena,
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, word: String) {
        self.arena.insert(&word);
    }

    pub fn search(&self, word: String) -> bool {
        self.arena
            .walk(&word)
            .is_some_and(|at| self.arena.nodes[at].word.is_some())
    }

    pub fn starts_with(&self, prefix: String) -> bool {
        self.arena.walk(&prefix).is_some()
    }
}

/// 211. Design Add and Search Words Data Structure
///
/// `.` in a query matches any single character.
#[derive(Debug, Default, Clone)]
pub struct WordDictionary {
    arena: Arena,
}

impl WordDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_word(&mut self, word: String) {
        self.arena.insert(&word);
    }

    pub fn search(&self, word: String) -> bool {
        let pattern: Vec<char> = word.chars().collect();
        self.matches(Arena::ROOT, &pattern)
    }

    fn matches(&self, at: usize, pattern: &[char]) -> bool {
        let Some((&c, rest)) = pattern.split_first() else {
            return self.arena.nodes[at].word.is_some();
        };
        if c == '.' {
            self.arena.nodes[at]
                .children
                .values()
                .any(|&next| self.matches(next, rest))
        } else {
            self.arena.child(at, c).is_some_and(|next| self.matches(next, rest))
        }
    }
}

/// 212. Word Search II
///
/// Every word traceable through horizontally or vertically adjacent cells,
/// each cell used at most once per word. Results are sorted.
pub fn find_words(board: Vec<Vec<char>>, words: Vec<String>) -> Vec<String> {
    fn dfs(
        board: &mut [Vec<char>],
        r: usize,
        c: usize,
        at: usize,
        arena: &Arena,
        found: &mut Vec<bool>,
    ) {
        let ch = board[r][c];
        let Some(next) = arena.child(at, ch) else {
            return;
        };
        if let Some(word) = arena.nodes[next].word {
            found[word] = true;
        }
        board[r][c] = '\0';
        let (rows, cols) = (board.len(), board[r].len());
        if r > 0 && c < board[r - 1].len() {
            dfs(board, r - 1, c, next, arena, found);
        }
        if r + 1 < rows && c < board[r + 1].len() {
            dfs(board, r + 1, c, next, arena, found);
        }
        if c > 0 {
            dfs(board, r, c - 1, next, arena, found);
        }
        if c + 1 < cols {
            dfs(board, r, c + 1, next, arena, found);
        }
        board[r][c] = ch;
    }

    let mut arena = Arena::default();
    let mut by_index = Vec::new();
    for word in &words {
        let at = arena.insert(word);
        if arena.nodes[at].word == Some(by_index.len()) {
            by_index.push(word.clone());
        }
    }
    let mut found = vec![false; by_index.len()];
    let mut board = board;
    for r in 0..board.len() {
        for c in 0..board[r].len() {
            dfs(&mut board, r, c, Arena::ROOT, &arena, &mut found);
        }
    }
    let mut result: Vec<String> = by_index
        .into_iter()
        .zip(found)
        .filter_map(|(word, hit)| hit.then_some(word))
        .collect();
    result.sort();
    result
}

/// 648. Replace Words
///
/// Each word of the sentence is replaced by its shortest dictionary root.
pub fn replace_words(dictionary: Vec<String>, sentence: String) -> String {
    let mut arena = Arena::default();
    for root in &dictionary {
        arena.insert(root);
    }
    let shortest_root = |word: &str| -> Option<usize> {
        let mut at = Arena::ROOT;
        for (i, c) in word.char_indices() {
            at = arena.child(at, c)?;
            if arena.nodes[at].word.is_some() {
                return Some(i + c.len_utf8());
            }
        }
        None
    };
    sentence
        .split(' ')
        .map(|word| match shortest_root(word) {
            Some(end) => &word[..end],
            None => word,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn trie_operations() {
        let mut trie = Trie::new();
        trie.insert("apple".into());
        assert!(trie.search("apple".into()));
        assert!(!trie.search("app".into()));
        assert!(trie.starts_with("app".into()));
        trie.insert("app".into());
        assert!(trie.search("app".into()));
        assert!(trie.starts_with(String::new()));
    }

    #[test]
    fn wildcard_dictionary() {
        let mut dict = WordDictionary::new();
        for w in ["bad", "dad", "mad"] {
            dict.add_word(w.into());
        }
        assert!(!dict.search("pad".into()));
        assert!(dict.search("bad".into()));
        assert!(dict.search(".ad".into()));
        assert!(dict.search("b..".into()));
        assert!(!dict.search("b...".into()));
    }

    #[test]
    fn board_search() {
        let board = vec![
            vec!['o', 'a', 'a', 'n'],
            vec!['e', 't', 'a', 'e'],
            vec!['i', 'h', 'k', 'r'],
            vec!['i', 'f', 'l', 'v'],
        ];
        let words = strings(&["oath", "pea", "eat", "rain"]);
        assert_eq!(find_words(board, words), vec!["eat", "oath"]);
        let board = vec![vec!['a', 'b'], vec!['c', 'd']];
        assert!(find_words(board, strings(&["abcb"])).is_empty());
        let board = vec![vec!['a', 'a']];
        assert_eq!(find_words(board, strings(&["aa", "aa"])), vec!["aa"]);
    }

    #[test]
    fn root_replacement() {
        assert_eq!(
            replace_words(strings(&["cat", "bat", "rat"]), "the cattle was rattled by the battery".into()),
            "the cat was rat by the bat"
        );
        assert_eq!(
            replace_words(strings(&["a", "b", "c"]), "aadsfasf absbs bbab cadsfafs".into()),
            "a a b c"
        );
    }
}
