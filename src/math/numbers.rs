// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Digit manipulation and integer arithmetic.
//!
//! Everything that can overflow `i32` either widens to `i64` internally or
//! answers with the problem's sentinel (`0` for [`reverse`], a clamp for
//! [`divide`]).

fn digit_square_sum(mut n: i32) -> i32 {
    let mut sum = 0;
    while n > 0 {
        let d = n % 10;
        sum += d * d;
        n /= 10;
    }
    sum
}

/// 202. Happy Number
///
/// Floyd cycle detection over the digit-square-sum sequence.
pub fn is_happy(n: i32) -> bool {
    let (mut slow, mut fast) = (n, digit_square_sum(n));
    while fast != 1 && slow != fast {
        slow = digit_square_sum(slow);
        fast = digit_square_sum(digit_square_sum(fast));
    }
    fast == 1
}

/// 66. Plus One
pub fn plus_one(digits: Vec<i32>) -> Vec<i32> {
    let mut digits = digits;
    for d in digits.iter_mut().rev() {
        if *d < 9 {
            *d += 1;
            return digits;
        }
        *d = 0;
    }
    digits.insert(0, 1);
    digits
}

/// 50. Pow(x, n)
///
/// Binary exponentiation; the exponent widens so `i32::MIN` negates safely.
pub fn my_pow(x: f64, n: i32) -> f64 {
    let mut exp = i64::from(n);
    let mut base = if exp < 0 { 1.0 / x } else { x };
    exp = exp.abs();
    let mut result = 1.0;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
        }
        base *= base;
        exp >>= 1;
    }
    result
}

/// 43. Multiply Strings
///
/// Schoolbook multiplication into a digit buffer of length `m + n`.
pub fn multiply(num1: String, num2: String) -> String {
    let a: Vec<u32> = num1.bytes().map(|b| u32::from(b - b'0')).collect();
    let b: Vec<u32> = num2.bytes().map(|b| u32::from(b - b'0')).collect();
    let mut product = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate().rev() {
        for (j, &y) in b.iter().enumerate().rev() {
            let total = product[i + j + 1] + x * y;
            product[i + j + 1] = total % 10;
            product[i + j] += total / 10;
        }
    }
    let digits: String = product
        .iter()
        .skip_while(|&&d| d == 0)
        .filter_map(|&d| char::from_digit(d, 10))
        .collect();
    if digits.is_empty() {
        "0".to_string()
    } else {
        digits
    }
}

/// 7. Reverse Integer
///
/// Returns 0 when the reversed value leaves the `i32` range.
pub fn reverse(x: i32) -> i32 {
    let mut x = x;
    let mut reversed: i32 = 0;
    while x != 0 {
        let Some(next) = reversed.checked_mul(10).and_then(|r| r.checked_add(x % 10)) else {
            return 0;
        };
        reversed = next;
        x /= 10;
    }
    reversed
}

/// 9. Palindrome Number
///
/// Reverses only the lower half of the digits.
pub fn is_palindrome_number(x: i32) -> bool {
    if x < 0 || (x % 10 == 0 && x != 0) {
        return false;
    }
    let (mut x, mut half) = (x, 0);
    while x > half {
        half = half * 10 + x % 10;
        x /= 10;
    }
    x == half || x == half / 10
}

/// 204. Count Primes
///
/// Primes strictly below `n`, by the sieve of Eratosthenes.
pub fn count_primes(n: i32) -> i32 {
    let n = n.max(0) as usize;
    if n < 3 {
        return 0;
    }
    let mut composite = vec![false; n];
    let mut i = 2;
    while i * i < n {
        if !composite[i] {
            for multiple in (i * i..n).step_by(i) {
                composite[multiple] = true;
            }
        }
        i += 1;
    }
    composite[2..].iter().filter(|&&c| !c).count() as i32
}

/// 172. Factorial Trailing Zeroes
pub fn trailing_zeroes(n: i32) -> i32 {
    let (mut n, mut zeroes) = (n, 0);
    while n >= 5 {
        n /= 5;
        zeroes += n;
    }
    zeroes
}

/// 231. Power of Two
pub fn is_power_of_two(n: i32) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// 29. Divide Two Integers
///
/// Shift-and-subtract long division. The one overflowing quotient,
/// `i32::MIN / -1`, clamps to `i32::MAX`. A zero divisor answers 0.
pub fn divide(dividend: i32, divisor: i32) -> i32 {
    if divisor == 0 {
        return 0;
    }
    let negative = (dividend < 0) != (divisor < 0);
    let mut remaining = i64::from(dividend).abs();
    let d = i64::from(divisor).abs();
    let mut quotient: i64 = 0;
    while remaining >= d {
        let mut shift = 0;
        while remaining >= d << (shift + 1) {
            shift += 1;
        }
        remaining -= d << shift;
        quotient += 1 << shift;
    }
    let quotient = if negative { -quotient } else { quotient };
    quotient.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn is_happy_naive(mut n: i32) -> bool {
        let mut seen = HashSet::new();
        while n != 1 && seen.insert(n) {
            n = digit_square_sum(n);
        }
        n == 1
    }

    #[test]
    fn happy() {
        assert!(is_happy(19));
        assert!(!is_happy(2));
        assert!(is_happy(1));
        for n in 1..500 {
            assert_eq!(is_happy(n), is_happy_naive(n), "n = {n}");
        }
    }

    #[test]
    fn increments() {
        assert_eq!(plus_one(vec![1, 2, 3]), vec![1, 2, 4]);
        assert_eq!(plus_one(vec![9]), vec![1, 0]);
        assert_eq!(plus_one(vec![9, 9]), vec![1, 0, 0]);
    }

    #[test]
    fn powers() {
        assert!((my_pow(2.0, 10) - 1024.0).abs() < 1e-9);
        assert!((my_pow(2.1, 3) - 9.261).abs() < 1e-9);
        assert!((my_pow(2.0, -2) - 0.25).abs() < 1e-12);
        assert_eq!(my_pow(1.0, i32::MIN), 1.0);
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(16));
        assert!(!is_power_of_two(3));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(i32::MIN));
    }

    #[test]
    fn string_products() {
        assert_eq!(multiply("2".into(), "3".into()), "6");
        assert_eq!(multiply("123".into(), "456".into()), "56088");
        assert_eq!(multiply("0".into(), "52".into()), "0");
    }

    #[test]
    fn digit_reversal() {
        assert_eq!(reverse(123), 321);
        assert_eq!(reverse(-123), -321);
        assert_eq!(reverse(120), 21);
        assert_eq!(reverse(1_534_236_469), 0);
        assert_eq!(reverse(i32::MIN), 0);
        assert!(is_palindrome_number(121));
        assert!(!is_palindrome_number(-121));
        assert!(!is_palindrome_number(10));
        assert!(is_palindrome_number(0));
    }

    #[test]
    fn counting() {
        assert_eq!(count_primes(10), 4);
        assert_eq!(count_primes(0), 0);
        assert_eq!(count_primes(2), 0);
        assert_eq!(count_primes(3), 1);
        assert_eq!(trailing_zeroes(3), 0);
        assert_eq!(trailing_zeroes(5), 1);
        assert_eq!(trailing_zeroes(100), 24);
    }

    #[test]
    fn division() {
        assert_eq!(divide(10, 3), 3);
        assert_eq!(divide(7, -3), -2);
        assert_eq!(divide(i32::MIN, -1), i32::MAX);
        assert_eq!(divide(i32::MIN, 1), i32::MIN);
        assert_eq!(divide(i32::MAX, 2), i32::MAX / 2);
    }
}
