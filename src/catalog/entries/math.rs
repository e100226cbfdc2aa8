// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::catalog::{answer, problem, Problem, Topic};
use crate::math::*;

const T: Topic = Topic::Math;

pub(super) const PROBLEMS: &[Problem] = &[
    problem!(T; 136, "single-number", "Single Number", Easy, Exact,
        |a| answer(single_number(a.get(0)?)),
        "[[2,2,1]]" => "1",
        "[[4,1,2,1,2]]" => "4"),
    problem!(T; 191, "number-of-1-bits", "Number of 1 Bits", Easy, Exact,
        |a| answer(hamming_weight(a.get(0)?)),
        "[11]" => "3",
        "[128]" => "1",
        "[2147483645]" => "30"),
    problem!(T; 338, "counting-bits", "Counting Bits", Easy, Exact,
        |a| answer(count_bits(a.get(0)?)),
        "[2]" => "[0,1,1]",
        "[5]" => "[0,1,1,2,1,2]"),
    problem!(T; 190, "reverse-bits", "Reverse Bits", Easy, Exact,
        |a| answer(reverse_bits(a.get(0)?)),
        "[43261596]" => "964176192",
        "[4294967293]" => "3221225471"),
    problem!(T; 268, "missing-number", "Missing Number", Easy, Exact,
        |a| answer(missing_number(a.get(0)?)),
        "[[3,0,1]]" => "2",
        "[[0,1]]" => "2",
        "[[9,6,4,2,3,5,7,0,1]]" => "8"),
    problem!(T; 371, "sum-of-two-integers", "Sum of Two Integers", Medium, Exact,
        |a| answer(get_sum(a.get(0)?, a.get(1)?)),
        "[1,2]" => "3",
        "[2,3]" => "5",
        "[-1,1]" => "0"),
    problem!(T; 202, "happy-number", "Happy Number", Easy, Exact,
        |a| answer(is_happy(a.get(0)?)),
        "[19]" => "true",
        "[2]" => "false"),
    problem!(T; 66, "plus-one", "Plus One", Easy, Exact,
        |a| answer(plus_one(a.get(0)?)),
        "[[1,2,3]]" => "[1,2,4]",
        "[[4,3,2,1]]" => "[4,3,2,2]",
        "[[9]]" => "[1,0]"),
    problem!(T; 50, "powx-n", "Pow(x, n)", Medium, Float,
        |a| answer(my_pow(a.get(0)?, a.get(1)?)),
        "[2.0,10]" => "1024.0",
        "[2.1,3]" => "9.261",
        "[2.0,-2]" => "0.25"),
    problem!(T; 43, "multiply-strings", "Multiply Strings", Medium, Exact,
        |a| answer(multiply(a.get(0)?, a.get(1)?)),
        r#"["2","3"]"# => r#""6""#,
        r#"["123","456"]"# => r#""56088""#,
        r#"["0","52"]"# => r#""0""#),
    problem!(T; 7, "reverse-integer", "Reverse Integer", Medium, Exact,
        |a| answer(reverse(a.get(0)?)),
        "[123]" => "321",
        "[-123]" => "-321",
        "[120]" => "21",
        "[1534236469]" => "0"),
    problem!(T; 9, "palindrome-number", "Palindrome Number", Easy, Exact,
        |a| answer(is_palindrome_number(a.get(0)?)),
        "[121]" => "true",
        "[-121]" => "false",
        "[10]" => "false"),
    problem!(T; 204, "count-primes", "Count Primes", Medium, Exact,
        |a| answer(count_primes(a.get(0)?)),
        "[10]" => "4",
        "[0]" => "0",
        "[1]" => "0"),
    problem!(T; 172, "factorial-trailing-zeroes", "Factorial Trailing Zeroes", Medium, Exact,
        |a| answer(trailing_zeroes(a.get(0)?)),
        "[3]" => "0",
        "[5]" => "1",
        "[0]" => "0"),
    problem!(T; 231, "power-of-two", "Power of Two", Easy, Exact,
        |a| answer(is_power_of_two(a.get(0)?)),
        "[1]" => "true",
        "[16]" => "true",
        "[3]" => "false"),
    problem!(T; 29, "divide-two-integers", "Divide Two Integers", Medium, Exact,
        |a| answer(divide(a.get(0)?, a.get(1)?)),
        "[10,3]" => "3",
        "[7,-3]" => "-2",
        "[-2147483648,-1]" => "2147483647"),
    problem!(T; 13, "roman-to-integer", "Roman to Integer", Easy, Exact,
        |a| answer(roman_to_int(a.get(0)?)),
        r#"["III"]"# => "3",
        r#"["LVIII"]"# => "58",
        r#"["MCMXCIV"]"# => "1994"),
    problem!(T; 12, "integer-to-roman", "Integer to Roman", Medium, Exact,
        |a| answer(int_to_roman(a.get(0)?)),
        "[3749]" => r#""MMMDCCXLIX""#,
        "[58]" => r#""LVIII""#,
        "[1994]" => r#""MCMXCIV""#),
];
