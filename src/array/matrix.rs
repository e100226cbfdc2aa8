// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Row-major matrix exercises.

/// 48. Rotate Image
///
/// Clockwise, in place: transpose then mirror each row.
pub fn rotate_matrix(matrix: &mut Vec<Vec<i32>>) {
    let n = matrix.len();
    for i in 0..n {
        for j in i + 1..n {
            let upper = matrix[i][j];
            matrix[i][j] = matrix[j][i];
            matrix[j][i] = upper;
        }
    }
    for row in matrix.iter_mut() {
        row.reverse();
    }
}

/// 54. Spiral Matrix
pub fn spiral_order(matrix: Vec<Vec<i32>>) -> Vec<i32> {
    if matrix.is_empty() || matrix[0].is_empty() {
        return Vec::new();
    }
    let (mut top, mut bottom) = (0i32, matrix.len() as i32 - 1);
    let (mut left, mut right) = (0i32, matrix[0].len() as i32 - 1);
    let mut order = Vec::with_capacity(matrix.len() * matrix[0].len());
    let at = |r: i32, c: i32| matrix[r as usize][c as usize];

    while top <= bottom && left <= right {
        for c in left..=right {
            order.push(at(top, c));
        }
        for r in top + 1..=bottom {
            order.push(at(r, right));
        }
        if top < bottom && left < right {
            for c in (left..right).rev() {
                order.push(at(bottom, c));
            }
            for r in (top + 1..bottom).rev() {
                order.push(at(r, left));
            }
        }
        top += 1;
        bottom -= 1;
        left += 1;
        right -= 1;
    }
    order
}

/// 73. Set Matrix Zeroes
///
/// Uses the first row and column as markers.
pub fn set_zeroes(matrix: &mut Vec<Vec<i32>>) {
    let rows = matrix.len();
    if rows == 0 {
        return;
    }
    let cols = matrix[0].len();
    let first_row_zero = matrix[0].iter().any(|&v| v == 0);
    let first_col_zero = matrix.iter().any(|row| row[0] == 0);

    for r in 1..rows {
        for c in 1..cols {
            if matrix[r][c] == 0 {
                matrix[r][0] = 0;
                matrix[0][c] = 0;
            }
        }
    }
    for r in 1..rows {
        for c in 1..cols {
            if matrix[r][0] == 0 || matrix[0][c] == 0 {
                matrix[r][c] = 0;
            }
        }
    }
    if first_row_zero {
        matrix[0].iter_mut().for_each(|v| *v = 0);
    }
    if first_col_zero {
        matrix.iter_mut().for_each(|row| row[0] = 0);
    }
}

/// 36. Valid Sudoku
///
/// Only filled cells are checked; the board need not be solvable.
pub fn is_valid_sudoku(board: Vec<Vec<char>>) -> bool {
    let mut rows = [0u16; 9];
    let mut cols = [0u16; 9];
    let mut boxes = [0u16; 9];

    for (r, row) in board.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            let Some(digit) = cell.to_digit(10) else {
                continue;
            };
            let bit = 1u16 << digit;
            let b = (r / 3) * 3 + c / 3;
            if rows[r] & bit != 0 || cols[c] & bit != 0 || boxes[b] & bit != 0 {
                return false;
            }
            rows[r] |= bit;
            cols[c] |= bit;
            boxes[b] |= bit;
        }
    }
    true
}
