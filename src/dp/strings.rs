// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tables over one or two strings.
//!
//! Strings are compared by `char`; two-string tables index `a[..i]`
//! against `b[..j]`.

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Half-open bounds of the widest palindrome centred between `lo` and `hi`.
fn expand(s: &[char], mut lo: usize, mut hi: usize) -> (usize, usize) {
    // lo..hi is a palindrome on entry (empty or a single char).
    while lo > 0 && hi < s.len() && s[lo - 1] == s[hi] {
        lo -= 1;
        hi += 1;
    }
    (lo, hi)
}

/// 5. Longest Palindromic Substring
///
/// Expands around all `2n - 1` centres; the leftmost longest wins.
pub fn longest_palindrome(s: String) -> String {
    let s = chars(&s);
    let mut best = (0, 0);
    for centre in 0..s.len() {
        for (lo, hi) in [expand(&s, centre, centre + 1), expand(&s, centre, centre)] {
            if hi - lo > best.1 - best.0 {
                best = (lo, hi);
            }
        }
    }
    s[best.0..best.1].iter().collect()
}

/// 647. Palindromic Substrings
pub fn count_substrings(s: String) -> i32 {
    let s = chars(&s);
    let mut count = 0;
    for centre in 0..s.len() {
        // Each expansion step found one more palindrome.
        let (lo, _) = expand(&s, centre, centre + 1);
        count += centre + 1 - lo;
        let (lo, _) = expand(&s, centre, centre);
        count += centre - lo;
    }
    count as i32
}

/// 91. Decode Ways
///
/// Counts decodings of a digit string with `A = 1 .. Z = 26`.
pub fn num_decodings(s: String) -> i32 {
    let digits = s.as_bytes();
    // (ways to decode the prefix ending one back, two back)
    let (mut one_back, mut two_back) = (1i32, 0i32);
    for i in 0..digits.len() {
        let mut here = 0;
        if digits[i] != b'0' && digits[i].is_ascii_digit() {
            here += one_back;
        }
        if i > 0 {
            let pair = (digits[i - 1], digits[i]);
            if matches!(pair, (b'1', b'0'..=b'9') | (b'2', b'0'..=b'6')) {
                here += two_back;
            }
        }
        (two_back, one_back) = (one_back, here);
    }
    if digits.is_empty() {
        0
    } else {
        one_back
    }
}

/// 1143. Longest Common Subsequence
pub fn longest_common_subsequence(text1: String, text2: String) -> i32 {
    let (a, b) = (chars(&text1), chars(&text2));
    let mut prev = vec![0i32; b.len() + 1];
    for &x in &a {
        let mut row = vec![0i32; b.len() + 1];
        for (j, &y) in b.iter().enumerate() {
            row[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(row[j])
            };
        }
        prev = row;
    }
    prev[b.len()]
}

/// 72. Edit Distance
///
/// Levenshtein distance with unit-cost insert, delete and replace.
pub fn min_distance(word1: String, word2: String) -> i32 {
    let (a, b) = (chars(&word1), chars(&word2));
    let mut prev: Vec<i32> = (0..=b.len() as i32).collect();
    for (i, &x) in a.iter().enumerate() {
        let mut row = vec![i as i32 + 1; b.len() + 1];
        for (j, &y) in b.iter().enumerate() {
            row[j + 1] = if x == y {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(row[j])
            };
        }
        prev = row;
    }
    prev[b.len()]
}

/// 97. Interleaving String
pub fn is_interleave(s1: String, s2: String, s3: String) -> bool {
    let (a, b, c) = (chars(&s1), chars(&s2), chars(&s3));
    if a.len() + b.len() != c.len() {
        return false;
    }
    // fits[j]: a[..i] and b[..j] interleave into c[..i + j].
    let mut fits = vec![false; b.len() + 1];
    for i in 0..=a.len() {
        for j in 0..=b.len() {
            fits[j] = if i == 0 && j == 0 {
                true
            } else {
                let from_a = i > 0 && fits[j] && a[i - 1] == c[i + j - 1];
                let from_b = j > 0 && fits[j - 1] && b[j - 1] == c[i + j - 1];
                from_a || from_b
            };
        }
    }
    fits[b.len()]
}

/// 115. Distinct Subsequences
///
/// Number of ways `t` appears as a subsequence of `s`.
pub fn num_distinct(s: String, t: String) -> i32 {
    let (s, t) = (chars(&s), chars(&t));
    let mut ways = vec![0u64; t.len() + 1];
    ways[0] = 1;
    for &x in &s {
        for j in (0..t.len()).rev() {
            if t[j] == x {
                ways[j + 1] = ways[j + 1].wrapping_add(ways[j]);
            }
        }
    }
    ways[t.len()] as i32
}

/// 10. Regular Expression Matching
///
/// `.` matches any char, `x*` zero or more of `x`; the whole string must
/// match.
pub fn is_match_regex(s: String, p: String) -> bool {
    let (s, p) = (chars(&s), chars(&p));
    // fits[i][j]: s[i..] matches p[j..].
    let mut fits = vec![vec![false; p.len() + 1]; s.len() + 1];
    fits[s.len()][p.len()] = true;
    for i in (0..=s.len()).rev() {
        for j in (0..p.len()).rev() {
            let head = i < s.len() && (p[j] == s[i] || p[j] == '.');
            fits[i][j] = if p.get(j + 1) == Some(&'*') {
                fits[i][j + 2] || (head && fits[i + 1][j])
            } else {
                head && fits[i + 1][j + 1]
            };
        }
    }
    fits[0][0]
}

/// 44. Wildcard Matching
///
/// `?` matches one char, `*` any run (including empty).
pub fn is_match_wildcard(s: String, p: String) -> bool {
    let (s, p) = (chars(&s), chars(&p));
    // fits[j]: s[..i] matches p[..j].
    let mut fits = vec![false; p.len() + 1];
    fits[0] = true;
    for j in 0..p.len() {
        fits[j + 1] = fits[j] && p[j] == '*';
    }
    for &c in &s {
        let mut row = vec![false; p.len() + 1];
        for (j, &pc) in p.iter().enumerate() {
            row[j + 1] = match pc {
                '*' => row[j] || fits[j + 1],
                '?' => fits[j],
                literal => fits[j] && literal == c,
            };
        }
        fits = row;
    }
    fits[p.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palindromes() {
        assert_eq!(longest_palindrome("babad".into()), "bab");
        assert_eq!(longest_palindrome("cbbd".into()), "bb");
        assert_eq!(longest_palindrome("a".into()), "a");
        assert_eq!(longest_palindrome(String::new()), "");
        assert_eq!(count_substrings("abc".into()), 3);
        assert_eq!(count_substrings("aaa".into()), 6);
    }

    #[test]
    fn decodings() {
        assert_eq!(num_decodings("12".into()), 2);
        assert_eq!(num_decodings("226".into()), 3);
        assert_eq!(num_decodings("06".into()), 0);
        assert_eq!(num_decodings("10".into()), 1);
        assert_eq!(num_decodings("2101".into()), 1);
    }

    #[test]
    fn two_string_tables() {
        assert_eq!(longest_common_subsequence("abcde".into(), "ace".into()), 3);
        assert_eq!(longest_common_subsequence("abc".into(), "def".into()), 0);
        assert_eq!(min_distance("horse".into(), "ros".into()), 3);
        assert_eq!(min_distance("intention".into(), "execution".into()), 5);
        assert_eq!(min_distance(String::new(), "abc".into()), 3);
        assert_eq!(num_distinct("rabbbit".into(), "rabbit".into()), 3);
        assert_eq!(num_distinct("babgbag".into(), "bag".into()), 5);
    }

    #[test]
    fn interleaving() {
        assert!(is_interleave("aabcc".into(), "dbbca".into(), "aadbbcbcac".into()));
        assert!(!is_interleave("aabcc".into(), "dbbca".into(), "aadbbbaccc".into()));
        assert!(is_interleave(String::new(), String::new(), String::new()));
    }

    #[test]
    fn regex() {
        assert!(!is_match_regex("aa".into(), "a".into()));
        assert!(is_match_regex("aa".into(), "a*".into()));
        assert!(is_match_regex("ab".into(), ".*".into()));
        assert!(is_match_regex("aab".into(), "c*a*b".into()));
        assert!(!is_match_regex("mississippi".into(), "mis*is*p*.".into()));
    }

    #[test]
    fn wildcard() {
        assert!(!is_match_wildcard("aa".into(), "a".into()));
        assert!(is_match_wildcard("aa".into(), "*".into()));
        assert!(!is_match_wildcard("cb".into(), "?a".into()));
        assert!(is_match_wildcard("adceb".into(), "*a*b".into()));
        assert!(!is_match_wildcard("acdcb".into(), "a*c?b".into()));
    }
}
