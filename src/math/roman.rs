// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Roman numerals.

const NUMERALS: [(i32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

fn symbol_value(c: char) -> i32 {
    match c {
        'I' => 1,
        'V' => 5,
        'X' => 10,
        'L' => 50,
        'C' => 100,
        'D' => 500,
        'M' => 1000,
        _ => 0,
    }
}

/// 13. Roman to Integer
///
/// A symbol smaller than its right neighbour is subtracted.
pub fn roman_to_int(s: String) -> i32 {
    let values: Vec<i32> = s.chars().map(symbol_value).collect();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| match values.get(i + 1) {
            Some(&next) if next > v => -v,
            _ => v,
        })
        .sum()
}

/// 12. Integer to Roman
///
/// Greedy over the subtractive table, largest value first.
pub fn int_to_roman(num: i32) -> String {
    let mut remaining = num.max(0);
    let mut out = String::new();
    for (value, symbol) in NUMERALS {
        while remaining >= value {
            out.push_str(symbol);
            remaining -= value;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses() {
        assert_eq!(roman_to_int("III".into()), 3);
        assert_eq!(roman_to_int("LVIII".into()), 58);
        assert_eq!(roman_to_int("MCMXCIV".into()), 1994);
    }

    #[test]
    fn renders() {
        assert_eq!(int_to_roman(3749), "MMMDCCXLIX");
        assert_eq!(int_to_roman(58), "LVIII");
        assert_eq!(int_to_roman(1994), "MCMXCIV");
    }
}
