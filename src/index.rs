// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array and inverse suffix array construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **SUFFIX_ARRAY_PERMUTATION**: `sa` is a permutation of `0..n`
//! 2. **SUFFIX_ARRAY_SORTED**: `suffix_at(sa[i-1]) < suffix_at(sa[i])` under rank order
//! 3. **ISA_INVERSE**: `isa[sa[i]] == i` for every row
//!
//! # Construction
//!
//! Every suffix is materialized as a rank slice and the whole set is sorted by
//! full comparison, O(n² log n). Each comparison is exactly the definition.
//!
//! Because the final terminator is the unique lowest symbol, no two suffixes
//! compare equal, and sorting suffixes gives the same order as sorting
//! rotations. Ties are never broken by offset.

use serde::Serialize;
use tracing::debug;

use crate::alphabet::Text;
use crate::utils::invert;
use crate::verify::contracts::{check_isa_inverse, check_suffix_array_sorted};

/// SA and ISA for one text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixIndex {
    sa: Vec<usize>,
    isa: Vec<usize>,
}

impl SuffixIndex {
    /// `sa[i]` = start offset of the i-th smallest suffix.
    #[inline]
    pub fn sa(&self) -> &[usize] {
        &self.sa
    }

    /// `isa[p]` = row of the suffix starting at offset p.
    #[inline]
    pub fn isa(&self) -> &[usize] {
        &self.isa
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sa.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sa.is_empty()
    }
}

/// The suffix of `ranks` starting at `offset`.
///
/// This is the fundamental operation that defines suffix array ordering.
#[inline]
pub fn suffix_at(ranks: &[u32], offset: usize) -> &[u32] {
    ranks.get(offset..).unwrap_or(&[])
}

/// Check that consecutive suffixes are in strictly increasing rank order.
pub fn is_suffix_array_sorted(ranks: &[u32], sa: &[usize]) -> bool {
    sa.windows(2)
        .all(|pair| suffix_at(ranks, pair[0]) < suffix_at(ranks, pair[1]))
}

/// Build SA and ISA for a validated text.
pub fn build_suffix_index(text: &Text) -> SuffixIndex {
    let ranks = text.ranks();

    let mut suffixes: Vec<(&[u32], usize)> = (0..ranks.len())
        .map(|offset| (suffix_at(ranks, offset), offset))
        .collect();

    // INVARIANT: SUFFIX_ARRAY_SORTED
    // Compare the suffix slices only. Lexicographic slice order already ranks a
    // proper prefix first, and the unique terminator means that never happens
    // between two distinct suffixes anyway.
    suffixes.sort_by(|a, b| a.0.cmp(b.0));

    let sa: Vec<usize> = suffixes.into_iter().map(|(_, offset)| offset).collect();
    let isa = invert(&sa);

    check_suffix_array_sorted(ranks, &sa);
    check_isa_inverse(&sa, &isa);

    debug!(n = sa.len(), "built suffix array");

    SuffixIndex { sa, isa }
}
