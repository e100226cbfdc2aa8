// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Splitting, rewriting and laying out text.

/// 14. Longest Common Prefix
pub fn longest_common_prefix(strs: Vec<String>) -> String {
    let Some((first, rest)) = strs.split_first() else {
        return String::new();
    };
    let mut end = first.len();
    for s in rest {
        end = first
            .char_indices()
            .zip(s.chars())
            .take_while(|((_, a), b)| a == b)
            .map(|((i, a), _)| i + a.len_utf8())
            .last()
            .unwrap_or(0)
            .min(end);
    }
    first[..end].to_string()
}

/// 151. Reverse Words in a String
pub fn reverse_words(s: String) -> String {
    s.split_whitespace().rev().collect::<Vec<_>>().join(" ")
}

/// 6. Zigzag Conversion
pub fn convert_zigzag(s: String, num_rows: i32) -> String {
    let rows = num_rows.max(1) as usize;
    if rows == 1 {
        return s;
    }
    let mut lines = vec![String::new(); rows];
    let (mut row, mut down) = (0usize, true);
    for c in s.chars() {
        lines[row].push(c);
        if row == 0 {
            down = true;
        } else if row == rows - 1 {
            down = false;
        }
        row = if down { row + 1 } else { row - 1 };
    }
    lines.concat()
}

/// 58. Length of Last Word
pub fn length_of_last_word(s: String) -> i32 {
    s.split_whitespace().last().map_or(0, |w| w.chars().count() as i32)
}

/// 387. First Unique Character in a String
///
/// Index in characters, or -1 when every character repeats.
pub fn first_uniq_char(s: String) -> i32 {
    let mut counts = std::collections::HashMap::new();
    for c in s.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    s.chars()
        .position(|c| counts.get(&c) == Some(&1))
        .map_or(-1, |i| i as i32)
}

/// 1071. Greatest Common Divisor of Strings
///
/// A common divisor exists iff `a + b == b + a`; it is then the prefix of
/// length `gcd(|a|, |b|)`.
pub fn gcd_of_strings(str1: String, str2: String) -> String {
    fn gcd(a: usize, b: usize) -> usize {
        if b == 0 {
            a
        } else {
            gcd(b, a % b)
        }
    }
    if format!("{str1}{str2}") != format!("{str2}{str1}") {
        return String::new();
    }
    let len = gcd(str1.len(), str2.len());
    str1[..len].to_string()
}

/// 443. String Compression
///
/// Rewrites `chars` in place as runs (`a`, `a`, `b` becomes `a`, `2`, `b`)
/// and returns the new length. The vector is truncated to that length.
#[allow(clippy::ptr_arg)]
pub fn compress(chars: &mut Vec<char>) -> i32 {
    let (mut read, mut write) = (0, 0);
    while read < chars.len() {
        let c = chars[read];
        let start = read;
        while read < chars.len() && chars[read] == c {
            read += 1;
        }
        chars[write] = c;
        write += 1;
        let run = read - start;
        if run > 1 {
            for d in run.to_string().chars() {
                chars[write] = d;
                write += 1;
            }
        }
    }
    chars.truncate(write);
    write as i32
}

/// 38. Count and Say
pub fn count_and_say(n: i32) -> String {
    let mut term = String::from("1");
    for _ in 1..n {
        let mut next = String::new();
        let bytes = term.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            let start = i;
            while i < bytes.len() && bytes[i] == bytes[start] {
                i += 1;
            }
            next.push_str(&(i - start).to_string());
            next.push(char::from(bytes[start]));
        }
        term = next;
    }
    term
}

/// 68. Text Justification
///
/// Greedy line filling. Inner lines spread extra spaces left-first; the last
/// line and single-word lines are left-justified and padded.
pub fn full_justify(words: Vec<String>, max_width: i32) -> Vec<String> {
    let width = max_width.max(0) as usize;
    let mut lines = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let mut end = start + 1;
        let mut used = words[start].len();
        while end < words.len() && used + 1 + words[end].len() <= width {
            used += 1 + words[end].len();
            end += 1;
        }
        let line = &words[start..end];
        let gaps = line.len() - 1;
        let mut text = String::with_capacity(width);
        if end == words.len() || gaps == 0 {
            text.push_str(&line.join(" "));
        } else {
            let letters: usize = line.iter().map(String::len).sum();
            let spaces = width - letters;
            let (each, extra) = (spaces / gaps, spaces % gaps);
            for (i, word) in line.iter().enumerate() {
                text.push_str(word);
                if i < gaps {
                    text.push_str(&" ".repeat(each + usize::from(i < extra)));
                }
            }
        }
        while text.len() < width {
            text.push(' ');
        }
        lines.push(text);
        start = end;
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn prefixes() {
        assert_eq!(longest_common_prefix(strings(&["flower", "flow", "flight"])), "fl");
        assert_eq!(longest_common_prefix(strings(&["dog", "racecar", "car"])), "");
        assert_eq!(longest_common_prefix(strings(&["ab", "abc"])), "ab");
        assert_eq!(longest_common_prefix(strings(&["solo"])), "solo");
        assert_eq!(longest_common_prefix(Vec::new()), "");
    }

    #[test]
    fn words() {
        assert_eq!(reverse_words("the sky is blue".into()), "blue is sky the");
        assert_eq!(reverse_words("  hello world  ".into()), "world hello");
        assert_eq!(length_of_last_word("Hello World".into()), 5);
        assert_eq!(length_of_last_word("   fly me   to   the moon  ".into()), 4);
        assert_eq!(first_uniq_char("leetcode".into()), 0);
        assert_eq!(first_uniq_char("loveleetcode".into()), 2);
        assert_eq!(first_uniq_char("aabb".into()), -1);
    }

    #[test]
    fn zigzag() {
        assert_eq!(convert_zigzag("PAYPALISHIRING".into(), 3), "PAHNAPLSIIGYIR");
        assert_eq!(convert_zigzag("PAYPALISHIRING".into(), 4), "PINALSIGYAHRPI");
        assert_eq!(convert_zigzag("A".into(), 1), "A");
        assert_eq!(convert_zigzag("AB".into(), 5), "AB");
    }

    #[test]
    fn string_gcd() {
        assert_eq!(gcd_of_strings("ABCABC".into(), "ABC".into()), "ABC");
        assert_eq!(gcd_of_strings("ABABAB".into(), "ABAB".into()), "AB");
        assert_eq!(gcd_of_strings("LEET".into(), "CODE".into()), "");
    }

    #[test]
    fn run_length() {
        let mut chars: Vec<char> = "aabbccc".chars().collect();
        assert_eq!(compress(&mut chars), 6);
        assert_eq!(chars, vec!['a', '2', 'b', '2', 'c', '3']);
        let mut chars = vec!['a'];
        assert_eq!(compress(&mut chars), 1);
        let mut chars: Vec<char> = std::iter::once('a').chain(std::iter::repeat('b').take(12)).collect();
        assert_eq!(compress(&mut chars), 4);
        assert_eq!(chars, vec!['a', 'b', '1', '2']);
        assert_eq!(count_and_say(1), "1");
        assert_eq!(count_and_say(4), "1211");
        assert_eq!(count_and_say(5), "111221");
    }

    #[test]
    fn justification() {
        let words = strings(&["This", "is", "an", "example", "of", "text", "justification."]);
        assert_eq!(
            full_justify(words, 16),
            vec!["This    is    an", "example  of text", "justification.  "]
        );
        let words = strings(&["What", "must", "be", "acknowledgment", "shall", "be"]);
        assert_eq!(
            full_justify(words, 16),
            vec!["What   must   be", "acknowledgment  ", "shall be        "]
        );
    }
}
