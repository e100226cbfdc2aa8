// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stack-driven parsing of brackets, postfix expressions and paths.

/// 20. Valid Parentheses
pub fn is_valid(s: String) -> bool {
    let mut open = Vec::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '(' => open.push(')'),
            '[' => open.push(']'),
            '{' => open.push('}'),
            _ => {
                if open.pop() != Some(c) {
                    return false;
                }
            }
        }
    }
    open.is_empty()
}

/// 150. Evaluate Reverse Polish Notation
///
/// Division truncates toward zero. Tokens are assumed well-formed.
pub fn eval_rpn(tokens: Vec<String>) -> i32 {
    let mut stack: Vec<i32> = Vec::new();
    for token in &tokens {
        let op = match token.as_str() {
            "+" | "-" | "*" | "/" => token.as_str(),
            number => {
                stack.push(number.parse().unwrap_or(0));
                continue;
            }
        };
        let rhs = stack.pop().unwrap_or(0);
        let lhs = stack.pop().unwrap_or(0);
        stack.push(match op {
            "+" => lhs + rhs,
            "-" => lhs - rhs,
            "*" => lhs * rhs,
            _ => lhs.checked_div(rhs).unwrap_or(0),
        });
    }
    stack.pop().unwrap_or(0)
}

/// 394. Decode String
///
/// `k[encoded]` expands to `encoded` repeated `k` times, nesting allowed.
pub fn decode_string(s: String) -> String {
    let mut frames: Vec<(String, usize)> = Vec::new();
    let mut current = String::new();
    let mut repeat = 0usize;

    for c in s.chars() {
        match c {
            '0'..='9' => repeat = repeat * 10 + c.to_digit(10).unwrap_or(0) as usize,
            '[' => {
                frames.push((std::mem::take(&mut current), repeat));
                repeat = 0;
            }
            ']' => {
                if let Some((mut outer, times)) = frames.pop() {
                    outer.push_str(&current.repeat(times));
                    current = outer;
                }
            }
            _ => current.push(c),
        }
    }
    current
}

/// 71. Simplify Path
pub fn simplify_path(path: String) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            name => parts.push(name),
        }
    }
    format!("/{}", parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn brackets() {
        assert!(is_valid("()".into()));
        assert!(is_valid("()[]{}".into()));
        assert!(!is_valid("(]".into()));
        assert!(is_valid("([])".into()));
        assert!(!is_valid("(".into()));
        assert!(!is_valid("]".into()));
    }

    #[test]
    fn postfix() {
        assert_eq!(eval_rpn(tokens(&["2", "1", "+", "3", "*"])), 9);
        assert_eq!(eval_rpn(tokens(&["4", "13", "5", "/", "+"])), 6);
        assert_eq!(
            eval_rpn(tokens(&[
                "10", "6", "9", "3", "+", "-11", "*", "/", "*", "17", "+", "5", "+"
            ])),
            22
        );
    }

    #[test]
    fn nested_decoding() {
        assert_eq!(decode_string("3[a]2[bc]".into()), "aaabcbc");
        assert_eq!(decode_string("3[a2[c]]".into()), "accaccacc");
        assert_eq!(decode_string("2[abc]3[cd]ef".into()), "abcabccdcdcdef");
        assert_eq!(decode_string("10[x]".into()), "xxxxxxxxxx");
    }

    #[test]
    fn canonical_paths() {
        assert_eq!(simplify_path("/home/".into()), "/home");
        assert_eq!(simplify_path("/home//foo/".into()), "/home/foo");
        assert_eq!(simplify_path("/../".into()), "/");
        assert_eq!(simplify_path("/a/./b/../../c/".into()), "/c");
        assert_eq!(simplify_path("/.../a/../b/c/../d/./".into()), "/.../b/d");
    }
}
