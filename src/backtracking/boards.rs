// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searches over grids: word paths, queens and sudoku.

/// 79. Word Search
pub fn exist(board: Vec<Vec<char>>, word: String) -> bool {
    fn trace(board: &mut [Vec<char>], r: usize, c: usize, word: &[char]) -> bool {
        let Some((&first, rest)) = word.split_first() else {
            return true;
        };
        if board[r][c] != first {
            return false;
        }
        if rest.is_empty() {
            return true;
        }
        board[r][c] = '#';
        let rows = board.len();
        let cols = board[r].len();
        let found = (r > 0 && c < board[r - 1].len() && trace(board, r - 1, c, rest))
            || (r + 1 < rows && c < board[r + 1].len() && trace(board, r + 1, c, rest))
            || (c > 0 && trace(board, r, c - 1, rest))
            || (c + 1 < cols && trace(board, r, c + 1, rest));
        board[r][c] = first;
        found
    }
    let word: Vec<char> = word.chars().collect();
    if word.is_empty() {
        return true;
    }
    let mut board = board;
    for r in 0..board.len() {
        for c in 0..board[r].len() {
            if trace(&mut board, r, c, &word) {
                return true;
            }
        }
    }
    false
}

/// Column placements of every solution, one queen per row.
///
/// Occupied columns and both diagonals are tracked as bitmasks.
fn queens(n: usize) -> Vec<Vec<usize>> {
    fn place(row: usize, n: usize, cols: u32, diag: u32, anti: u32, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if row == n {
            out.push(current.clone());
            return;
        }
        for col in 0..n {
            let (c, d, a) = (1 << col, 1 << (row + col), 1 << (row + n - 1 - col));
            if cols & c != 0 || diag & d != 0 || anti & a != 0 {
                continue;
            }
            current.push(col);
            place(row + 1, n, cols | c, diag | d, anti | a, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    // Diagonal masks need 2n - 1 bits.
    if n == 0 || 2 * n - 1 > 32 {
        return out;
    }
    place(0, n, 0, 0, 0, &mut Vec::with_capacity(n), &mut out);
    out
}

/// 51. N-Queens
pub fn solve_n_queens(n: i32) -> Vec<Vec<String>> {
    let n = n.max(0) as usize;
    queens(n)
        .into_iter()
        .map(|solution| {
            solution
                .into_iter()
                .map(|col| (0..n).map(|c| if c == col { 'Q' } else { '.' }).collect())
                .collect()
        })
        .collect()
}

/// 52. N-Queens II
pub fn total_n_queens(n: i32) -> i32 {
    queens(n.max(0) as usize).len() as i32
}

/// 37. Sudoku Solver
///
/// Fills `.` cells in place. A board with no solution is left unchanged.
#[allow(clippy::ptr_arg)]
pub fn solve_sudoku(board: &mut Vec<Vec<char>>) {
    struct Masks {
        rows: [u16; 9],
        cols: [u16; 9],
        boxes: [u16; 9],
    }

    fn solve(board: &mut [Vec<char>], empty: &[(usize, usize)], masks: &mut Masks) -> bool {
        let Some((&(r, c), rest)) = empty.split_first() else {
            return true;
        };
        let b = (r / 3) * 3 + c / 3;
        let used = masks.rows[r] | masks.cols[c] | masks.boxes[b];
        for digit in 0..9u8 {
            let bit = 1u16 << digit;
            if used & bit != 0 {
                continue;
            }
            masks.rows[r] |= bit;
            masks.cols[c] |= bit;
            masks.boxes[b] |= bit;
            board[r][c] = char::from(b'1' + digit);
            if solve(board, rest, masks) {
                return true;
            }
            masks.rows[r] &= !bit;
            masks.cols[c] &= !bit;
            masks.boxes[b] &= !bit;
            board[r][c] = '.';
        }
        false
    }

    if board.len() != 9 || board.iter().any(|row| row.len() != 9) {
        return;
    }
    let mut masks = Masks {
        rows: [0; 9],
        cols: [0; 9],
        boxes: [0; 9],
    };
    let mut empty = Vec::new();
    for (r, row) in board.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            match cell.to_digit(10) {
                Some(d @ 1..=9) => {
                    let bit = 1u16 << (d - 1);
                    masks.rows[r] |= bit;
                    masks.cols[c] |= bit;
                    masks.boxes[(r / 3) * 3 + c / 3] |= bit;
                }
                _ => empty.push((r, c)),
            }
        }
    }
    solve(board, &empty, &mut masks);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: &[&str]) -> Vec<Vec<char>> {
        rows.iter().map(|r| r.chars().collect()).collect()
    }

    #[test]
    fn word_search() {
        let board = || grid(&["ABCE", "SFCS", "ADEE"]);
        assert!(exist(board(), "ABCCED".into()));
        assert!(exist(board(), "SEE".into()));
        assert!(!exist(board(), "ABCB".into()));
        assert!(exist(grid(&["a"]), "a".into()));
    }

    #[test]
    fn queens_boards() {
        assert_eq!(
            solve_n_queens(4),
            vec![
                vec![".Q..", "...Q", "Q...", "..Q."],
                vec!["..Q.", "Q...", "...Q", ".Q.."],
            ]
        );
        assert_eq!(solve_n_queens(1), vec![vec!["Q"]]);
        assert!(solve_n_queens(3).is_empty());
    }

    #[test]
    fn queens_counts() {
        assert_eq!(total_n_queens(1), 1);
        assert_eq!(total_n_queens(4), 2);
        assert_eq!(total_n_queens(8), 92);
        assert_eq!(total_n_queens(0), 0);
    }

    #[test]
    fn sudoku() {
        let mut board = grid(&[
            "53..7....",
            "6..195...",
            ".98....6.",
            "8...6...3",
            "4..8.3..1",
            "7...2...6",
            ".6....28.",
            "...419..5",
            "....8..79",
        ]);
        solve_sudoku(&mut board);
        let solved = grid(&[
            "534678912",
            "672195348",
            "198342567",
            "859761423",
            "426853791",
            "713924856",
            "961537284",
            "287419635",
            "345286179",
        ]);
        assert_eq!(board, solved);
    }
}
