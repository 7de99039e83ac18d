// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small slice helpers shared by the builders.

/// Length of the common prefix of two rank sequences.
pub fn common_prefix_len(a: &[u32], b: &[u32]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the common suffix of two rank sequences.
pub fn common_suffix_len(a: &[u32], b: &[u32]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Invert a permutation: `inverted[array[i]] = i`.
pub fn invert(array: &[usize]) -> Vec<usize> {
    let mut inverted = vec![0; array.len()];
    for (i, &value) in array.iter().enumerate() {
        inverted[value] = i;
    }
    inverted
}

/// Reorder `array` by `order`: `result[i] = array[order[i]]`.
pub fn permute(array: &[usize], order: &[usize]) -> Vec<usize> {
    order.iter().map(|&j| array[j]).collect()
}

/// Offset one step to the left, wrapping at `n`.
#[inline]
pub fn wrap_prev(offset: usize, n: usize) -> usize {
    if offset == 0 {
        n - 1
    } else {
        offset - 1
    }
}

/// Offset one step to the right, wrapping at `n`.
#[inline]
pub fn wrap_next(offset: usize, n: usize) -> usize {
    if offset + 1 == n {
        0
    } else {
        offset + 1
    }
}

/// Is `array` a permutation of `0..array.len()`?
pub fn is_permutation(array: &[usize]) -> bool {
    let mut seen = vec![false; array.len()];
    array.iter().all(|&value| {
        value < seen.len() && !std::mem::replace(&mut seen[value], true)
    })
}
