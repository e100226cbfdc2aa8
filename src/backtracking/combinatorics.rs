// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subsets, combinations and permutations.
//!
//! Outputs are listed in the order the search discovers them: candidates are
//! sorted first where duplicates must be skipped.

/// 78. Subsets
pub fn subsets(nums: Vec<i32>) -> Vec<Vec<i32>> {
    fn grow(nums: &[i32], start: usize, current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        out.push(current.clone());
        for i in start..nums.len() {
            current.push(nums[i]);
            grow(nums, i + 1, current, out);
            current.pop();
        }
    }
    let mut out = Vec::new();
    grow(&nums, 0, &mut Vec::new(), &mut out);
    out
}

/// 90. Subsets II
pub fn subsets_with_dup(mut nums: Vec<i32>) -> Vec<Vec<i32>> {
    fn grow(nums: &[i32], start: usize, current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        out.push(current.clone());
        for i in start..nums.len() {
            if i > start && nums[i] == nums[i - 1] {
                continue;
            }
            current.push(nums[i]);
            grow(nums, i + 1, current, out);
            current.pop();
        }
    }
    nums.sort_unstable();
    let mut out = Vec::new();
    grow(&nums, 0, &mut Vec::new(), &mut out);
    out
}

/// 39. Combination Sum
///
/// Candidates are distinct and positive; each may be reused.
pub fn combination_sum(mut candidates: Vec<i32>, target: i32) -> Vec<Vec<i32>> {
    fn grow(candidates: &[i32], start: usize, remaining: i32, current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        for i in start..candidates.len() {
            let c = candidates[i];
            if c > remaining {
                break;
            }
            current.push(c);
            grow(candidates, i, remaining - c, current, out);
            current.pop();
        }
    }
    candidates.retain(|&c| c > 0);
    candidates.sort_unstable();
    candidates.dedup();
    let mut out = Vec::new();
    grow(&candidates, 0, target, &mut Vec::new(), &mut out);
    out
}

/// 40. Combination Sum II
///
/// Each candidate is used at most once; no duplicate combinations.
pub fn combination_sum2(mut candidates: Vec<i32>, target: i32) -> Vec<Vec<i32>> {
    fn grow(candidates: &[i32], start: usize, remaining: i32, current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if remaining == 0 {
            out.push(current.clone());
            return;
        }
        for i in start..candidates.len() {
            let c = candidates[i];
            if c > remaining {
                break;
            }
            if i > start && c == candidates[i - 1] {
                continue;
            }
            current.push(c);
            grow(candidates, i + 1, remaining - c, current, out);
            current.pop();
        }
    }
    candidates.retain(|&c| c > 0);
    candidates.sort_unstable();
    let mut out = Vec::new();
    grow(&candidates, 0, target, &mut Vec::new(), &mut out);
    out
}

/// 46. Permutations
///
/// Position `k` takes each remaining value in turn by swapping.
pub fn permute(mut nums: Vec<i32>) -> Vec<Vec<i32>> {
    fn place(nums: &mut Vec<i32>, k: usize, out: &mut Vec<Vec<i32>>) {
        if k == nums.len() {
            out.push(nums.clone());
            return;
        }
        for i in k..nums.len() {
            nums.swap(k, i);
            place(nums, k + 1, out);
            nums.swap(k, i);
        }
    }
    let mut out = Vec::new();
    place(&mut nums, 0, &mut out);
    out
}

/// 47. Permutations II
pub fn permute_unique(mut nums: Vec<i32>) -> Vec<Vec<i32>> {
    fn place(nums: &[i32], used: &mut [bool], current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if current.len() == nums.len() {
            out.push(current.clone());
            return;
        }
        for i in 0..nums.len() {
            // Equal values are placed in index order only.
            if used[i] || (i > 0 && nums[i] == nums[i - 1] && !used[i - 1]) {
                continue;
            }
            used[i] = true;
            current.push(nums[i]);
            place(nums, used, current, out);
            current.pop();
            used[i] = false;
        }
    }
    nums.sort_unstable();
    let mut out = Vec::new();
    let mut used = vec![false; nums.len()];
    place(&nums, &mut used, &mut Vec::new(), &mut out);
    out
}

/// 77. Combinations
pub fn combine(n: i32, k: i32) -> Vec<Vec<i32>> {
    fn grow(start: i32, n: i32, k: usize, current: &mut Vec<i32>, out: &mut Vec<Vec<i32>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        let needed = (k - current.len()) as i32;
        for v in start..=n - needed + 1 {
            current.push(v);
            grow(v + 1, n, k, current, out);
            current.pop();
        }
    }
    if k < 0 || k > n {
        return Vec::new();
    }
    let mut out = Vec::new();
    grow(1, n, k as usize, &mut Vec::with_capacity(k as usize), &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_sets() {
        assert_eq!(
            subsets(vec![1, 2, 3]),
            vec![vec![], vec![1], vec![1, 2], vec![1, 2, 3], vec![1, 3], vec![2], vec![2, 3], vec![3]]
        );
        assert_eq!(subsets(vec![]), vec![Vec::<i32>::new()]);
        assert_eq!(
            subsets_with_dup(vec![1, 2, 2]),
            vec![vec![], vec![1], vec![1, 2], vec![1, 2, 2], vec![2], vec![2, 2]]
        );
    }

    #[test]
    fn combination_sums() {
        assert_eq!(combination_sum(vec![2, 3, 6, 7], 7), vec![vec![2, 2, 3], vec![7]]);
        assert_eq!(
            combination_sum(vec![2, 3, 5], 8),
            vec![vec![2, 2, 2, 2], vec![2, 3, 3], vec![3, 5]]
        );
        assert!(combination_sum(vec![2], 1).is_empty());
        assert_eq!(
            combination_sum2(vec![10, 1, 2, 7, 6, 1, 5], 8),
            vec![vec![1, 1, 6], vec![1, 2, 5], vec![1, 7], vec![2, 6]]
        );
        assert_eq!(combination_sum2(vec![2, 5, 2, 1, 2], 5), vec![vec![1, 2, 2], vec![5]]);
    }

    #[test]
    fn permutations() {
        let all = permute(vec![1, 2, 3]);
        assert_eq!(all.len(), 6);
        let distinct: std::collections::BTreeSet<_> = all.into_iter().collect();
        assert_eq!(distinct.len(), 6);
        assert!(distinct.contains(&vec![3, 1, 2]));
        assert_eq!(permute(vec![1]), vec![vec![1]]);
        assert_eq!(
            permute_unique(vec![1, 1, 2]),
            vec![vec![1, 1, 2], vec![1, 2, 1], vec![2, 1, 1]]
        );
    }

    #[test]
    fn combinations() {
        assert_eq!(
            combine(4, 2),
            vec![vec![1, 2], vec![1, 3], vec![1, 4], vec![2, 3], vec![2, 4], vec![3, 4]]
        );
        assert_eq!(combine(1, 1), vec![vec![1]]);
        assert!(combine(2, 3).is_empty());
        assert_eq!(combine(3, 0), vec![Vec::<i32>::new()]);
    }
}
