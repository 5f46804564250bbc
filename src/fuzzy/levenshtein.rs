// Copyright 2025-present Lector Contributors
// SPDX-License-Identifier: Apache-2.0

//! Levenshtein edit distance, full and bounded.
//!
//! Two entry points. `levenshtein_distance` is the classic single-row
//! Wagner-Fischer DP and returns the exact distance; the tier logic and
//! tests lean on its metric properties (symmetry, identity, triangle
//! inequality). `levenshtein_within` answers the cheaper question "are
//! these within `max` edits?" with two early-exit paths:
//!
//! 1. `|len(a) - len(b)|` is a lower bound on edit distance - if the
//!    lengths differ by more than `max`, skip the O(nm) DP entirely.
//! 2. Row minima are non-decreasing, so once the minimum of a DP row
//!    exceeds `max` the final cell can never come back under it.
//!
//! Both operate on `chars()`, not bytes, so multi-byte characters count
//! as single edits.

/// Exact edit distance between two strings.
///
/// Minimum number of single-character insertions, deletions, or
/// substitutions transforming `a` into `b`. Classic DP over a conceptual
/// (|a|+1) × (|b|+1) table, kept as a single rolling row.
///
/// `levenshtein_distance(a, a) == 0` and the function is symmetric in its
/// arguments; an empty string is at distance `len(other)`.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }
    if b.is_empty() {
        return a.chars().count();
    }

    // dp[j] holds the distance between the current prefix of `a` and the
    // first j chars of `b`; row 0 is the insertion cost of b's prefixes.
    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Are these strings within `max` edits of each other?
///
/// Equivalent to `levenshtein_distance(a, b) <= max`, but abandons the DP
/// as soon as the answer is known to be no. The length check alone rejects
/// most non-matches before allocating anything.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = usize::from(ac != bc);
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // If the minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}
