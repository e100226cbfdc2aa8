// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::string::*;

const T: Topic = Topic::String;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 242, "valid-anagram", "Valid Anagram", Easy, Exact,
        |a| answer(is_anagram(a.get(0)?, a.get(1)?)),
        r#"["anagram","nagaram"]"# => "true",
        r#"["rat","car"]"# => "false"),
    problem!(T; 125, "valid-palindrome", "Valid Palindrome", Easy, Exact,
        |a| answer(is_palindrome(a.get(0)?)),
        r#"["A man, a plan, a canal: Panama"]"# => "true",
        r#"["race a car"]"# => "false",
        r#"[" "]"# => "true"),
    problem!(T; 680, "valid-palindrome-ii", "Valid Palindrome II", Easy, Exact,
        |a| answer(valid_palindrome_ii(a.get(0)?)),
        r#"["aba"]"# => "true",
        r#"["abca"]"# => "true",
        r#"["abc"]"# => "false"),
    problem!(T; 205, "isomorphic-strings", "Isomorphic Strings", Easy, Exact,
        |a| answer(is_isomorphic(a.get(0)?, a.get(1)?)),
        r#"["egg","add"]"# => "true",
        r#"["foo","bar"]"# => "false",
        r#"["paper","title"]"# => "true"),
    problem!(T; 290, "word-pattern", "Word Pattern", Easy, Exact,
        |a| answer(word_pattern(a.get(0)?, a.get(1)?)),
        r#"["abba","dog cat cat dog"]"# => "true",
        r#"["abba","dog cat cat fish"]"# => "false",
        r#"["aaaa","dog cat cat dog"]"# => "false"),
    problem!(T; 459, "repeated-substring-pattern", "Repeated Substring Pattern", Easy, Exact,
        |a| answer(repeated_substring_pattern(a.get(0)?)),
        r#"["abab"]"# => "true",
        r#"["aba"]"# => "false",
        r#"["abcabcabcabc"]"# => "true"),
    problem!(T; 14, "longest-common-prefix", "Longest Common Prefix", Easy, Exact,
        |a| answer(longest_common_prefix(a.get(0)?)),
        r#"[["flower","flow","flight"]]"# => r#""fl""#,
        r#"[["dog","racecar","car"]]"# => r#""""#),
    problem!(T; 151, "reverse-words-in-a-string", "Reverse Words in a String", Medium, Exact,
        |a| answer(reverse_words(a.get(0)?)),
        r#"["the sky is blue"]"# => r#""blue is sky the""#,
        r#"["  hello world  "]"# => r#""world hello""#,
        r#"["a good   example"]"# => r#""example good a""#),
    problem!(T; 6, "zigzag-conversion", "Zigzag Conversion", Medium, Exact,
        |a| answer(convert_zigzag(a.get(0)?, a.get(1)?)),
        r#"["PAYPALISHIRING",3]"# => r#""PAHNAPLSIIGYIR""#,
        r#"["PAYPALISHIRING",4]"# => r#""PINALSIGYAHRPI""#,
        r#"["A",1]"# => r#""A""#),
    problem!(T; 58, "length-of-last-word", "Length of Last Word", Easy, Exact,
        |a| answer(length_of_last_word(a.get(0)?)),
        r#"["Hello World"]"# => "5",
        r#"["   fly me   to   the moon  "]"# => "4"),
    problem!(T; 387, "first-unique-character-in-a-string", "First Unique Character in a String", Easy, Exact,
        |a| answer(first_uniq_char(a.get(0)?)),
        r#"["leetcode"]"# => "0",
        r#"["loveleetcode"]"# => "2",
        r#"["aabb"]"# => "-1"),
    problem!(T; 1071, "greatest-common-divisor-of-strings", "Greatest Common Divisor of Strings", Easy, Exact,
        |a| answer(gcd_of_strings(a.get(0)?, a.get(1)?)),
        r#"["ABCABC","ABC"]"# => r#""ABC""#,
        r#"["ABABAB","ABAB"]"# => r#""AB""#,
        r#"["LEET","CODE"]"# => r#""""#),
    problem!(T; 443, "string-compression", "String Compression", Medium, Exact,
        |a| {
            let mut chars = a.get(0)?;
            compress(&mut chars);
            answer(chars)
        },
        r#"[["a","a","b","b","c","c","c"]]"# => r#"["a","2","b","2","c","3"]"#,
        r#"[["a"]]"# => r#"["a"]"#,
        r#"[["a","b","b","b","b","b","b","b","b","b","b","b","b"]]"# => r#"["a","b","1","2"]"#),
    problem!(T; 38, "count-and-say", "Count and Say", Medium, Exact,
        |a| answer(count_and_say(a.get(0)?)),
        "[1]" => r#""1""#,
        "[4]" => r#""1211""#),
    problem!(T; 68, "text-justification", "Text Justification", Hard, Exact,
        |a| answer(full_justify(a.get(0)?, a.get(1)?)),
        r#"[["This","is","an","example","of","text","justification."],16]"#
            => r#"["This    is    an","example  of text","justification.  "]"#,
        r#"[["What","must","be","acknowledgment","shall","be"],16]"#
            => r#"["What   must   be","acknowledgment  ","shall be        "]"#),
    problem!(T; 8, "string-to-integer-atoi", "String to Integer (atoi)", Medium, Exact,
        |a| answer(my_atoi(a.get(0)?)),
        r#"["42"]"# => "42",
        r#"["   -042"]"# => "-42",
        r#"["1337c0d3"]"# => "1337",
        r#"["0-1"]"# => "0",
        r#"["words and 987"]"# => "0"),
    problem!(T; 28, "find-the-index-of-the-first-occurrence-in-a-string", "Find the Index of the First Occurrence in a String", Easy, Exact,
        |a| answer(str_str(a.get(0)?, a.get(1)?)),
        r#"["sadbutsad","sad"]"# => "0",
        r#"["leetcode","leeto"]"# => "-1"),
    problem!(T; 271, "encode-and-decode-strings", "Encode and Decode Strings", Medium, Exact,
        |a| answer(decode(encode(a.get(0)?))),
        r#"[["lint","code","love","you"]]"# => r#"["lint","code","love","you"]"#,
        r##"[["we","say",":","yes","#4#"]]"## => r##"["we","say",":","yes","#4#"]"##,
        r#"[[""]]"# => r#"[""]"#),
];
