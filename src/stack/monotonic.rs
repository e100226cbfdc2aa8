// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Monotonic stacks: each element is pushed and popped at most once.

/// 739. Daily Temperatures
pub fn daily_temperatures(temperatures: Vec<i32>) -> Vec<i32> {
    let mut answer = vec![0; temperatures.len()];
    let mut pending: Vec<usize> = Vec::new();
    for (day, &temp) in temperatures.iter().enumerate() {
        while let Some(&prev) = pending.last() {
            if temperatures[prev] >= temp {
                break;
            }
            answer[prev] = (day - prev) as i32;
            pending.pop();
        }
        pending.push(day);
    }
    answer
}

/// 853. Car Fleet
///
/// Walking from the car closest to the target, a car starts a new fleet
/// only if it arrives strictly later than the fleet ahead of it.
pub fn car_fleet(target: i32, position: Vec<i32>, speed: Vec<i32>) -> i32 {
    let mut cars: Vec<(i32, i32)> = position.into_iter().zip(speed).collect();
    cars.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let mut fleets = 0;
    let mut slowest_ahead = 0.0f64;
    for (pos, spd) in cars {
        let arrival = (target - pos) as f64 / spd as f64;
        if arrival > slowest_ahead {
            fleets += 1;
            slowest_ahead = arrival;
        }
    }
    fleets
}

/// 84. Largest Rectangle in Histogram
pub fn largest_rectangle_area(heights: Vec<i32>) -> i32 {
    let mut stack: Vec<usize> = Vec::new();
    let mut best = 0;
    for i in 0..=heights.len() {
        let current = heights.get(i).copied().unwrap_or(0);
        while let Some(&top) = stack.last() {
            if heights[top] < current {
                break;
            }
            stack.pop();
            let left = stack.last().map_or(0, |&l| l + 1);
            best = best.max(heights[top] * (i - left) as i32);
        }
        stack.push(i);
    }
    best
}

/// 85. Maximal Rectangle
///
/// Each row turns into a histogram of consecutive '1's above it.
pub fn maximal_rectangle(matrix: Vec<Vec<char>>) -> i32 {
    let Some(first) = matrix.first() else {
        return 0;
    };
    let mut heights = vec![0; first.len()];
    let mut best = 0;
    for row in &matrix {
        for (h, &cell) in heights.iter_mut().zip(row) {
            *h = if cell == '1' { *h + 1 } else { 0 };
        }
        best = best.max(largest_rectangle_area(heights.clone()));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmer_days() {
        assert_eq!(
            daily_temperatures(vec![73, 74, 75, 71, 69, 72, 76, 73]),
            vec![1, 1, 4, 2, 1, 1, 0, 0]
        );
        assert_eq!(daily_temperatures(vec![30, 40, 50, 60]), vec![1, 1, 1, 0]);
        assert_eq!(daily_temperatures(vec![30, 60, 90]), vec![1, 1, 0]);
    }

    #[test]
    fn fleets() {
        assert_eq!(car_fleet(12, vec![10, 8, 0, 5, 3], vec![2, 4, 1, 1, 3]), 3);
        assert_eq!(car_fleet(10, vec![3], vec![3]), 1);
        assert_eq!(car_fleet(100, vec![0, 2, 4], vec![4, 2, 1]), 1);
    }

    #[test]
    fn histogram() {
        assert_eq!(largest_rectangle_area(vec![2, 1, 5, 6, 2, 3]), 10);
        assert_eq!(largest_rectangle_area(vec![2, 4]), 4);
        assert_eq!(largest_rectangle_area(vec![2, 2, 2]), 6);
        assert_eq!(largest_rectangle_area(vec![]), 0);
    }

    #[test]
    fn binary_matrix_rectangle() {
        let matrix: Vec<Vec<char>> = ["10100", "10111", "11111", "10010"]
            .iter()
            .map(|r| r.chars().collect())
            .collect();
        assert_eq!(maximal_rectangle(matrix), 6);
        assert_eq!(maximal_rectangle(vec![vec!['0']]), 0);
        assert_eq!(maximal_rectangle(vec![vec!['1']]), 1);
    }
}
