// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the array builders.
//!
//! Debug-mode assertions that every builder calls on its own output. They are
//! no-ops in release builds and panic with a `Contract violation:` message in
//! debug builds and tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Property                                   |
//! |-------------------------------|--------------------------------------------|
//! | `check_suffix_array_sorted`   | adjacent suffixes strictly increase        |
//! | `check_isa_inverse`           | `isa[sa[i]] == i`                          |
//! | `check_lf_fl_inverse`         | `fl[lf[i]] == i` and `lf[fl[i]] == i`      |
//! | `check_permuted_consistent`   | `plcp[sa[i]] == lcp[i]`                    |
//! | `check_run_well_formed`       | constant ±1 step, no placeholder inside    |
//! | `check_mum_well_formed`       | one row per document, positive length      |
//!
//! # Usage
//!
//! ```ignore
//! use crate::verify::contracts::*;
//!
//! // In debug builds, this panics if the invariant is violated
//! check_isa_inverse(&sa, &isa);
//! ```

use crate::index::suffix_at;
use crate::runs::is_well_formed;
use crate::types::{CompressibleRun, DerivedArray, Mum};

// ============================================================================
// SUFFIX ARRAY CONTRACTS
// ============================================================================

/// Check that consecutive suffixes are strictly increasing under rank order.
///
/// # Panics (debug builds only)
/// Panics if any adjacent pair is out of order or equal.
#[inline]
pub fn check_suffix_array_sorted(ranks: &[u32], sa: &[usize]) {
    for i in 1..sa.len() {
        debug_assert!(
            suffix_at(ranks, sa[i - 1]) < suffix_at(ranks, sa[i]),
            "Contract violation: SuffixArray.Sorted - sa[{}] = {} does not sort before sa[{}] = {}",
            i - 1,
            sa[i - 1],
            i,
            sa[i]
        );
    }
}

/// Check that `isa` inverts `sa`.
///
/// # Panics (debug builds only)
/// Panics if the lengths differ or `isa[sa[i]] != i` for some row.
#[inline]
pub fn check_isa_inverse(sa: &[usize], isa: &[usize]) {
    debug_assert_eq!(
        sa.len(),
        isa.len(),
        "Contract violation: IsaInverse - sa.len() {} != isa.len() {}",
        sa.len(),
        isa.len()
    );

    for (row, &offset) in sa.iter().enumerate() {
        debug_assert!(
            isa.get(offset) == Some(&row),
            "Contract violation: IsaInverse - isa[sa[{}]] = {:?}, expected {}",
            row,
            isa.get(offset),
            row
        );
    }
}

// ============================================================================
// DERIVED ARRAY CONTRACTS
// ============================================================================

/// Check that LF and FL are mutual inverses.
///
/// # Panics (debug builds only)
/// Panics on the first row where either composition is not the identity.
#[inline]
pub fn check_lf_fl_inverse(lf: &[usize], fl: &[usize]) {
    for row in 0..lf.len() {
        debug_assert!(
            fl.get(lf[row]) == Some(&row),
            "Contract violation: LfFlInverse - fl[lf[{}]] = {:?}",
            row,
            fl.get(lf[row])
        );
        debug_assert!(
            lf.get(fl[row]) == Some(&row),
            "Contract violation: LfFlInverse - lf[fl[{}]] = {:?}",
            row,
            lf.get(fl[row])
        );
    }
}

/// Check that a text-space array is the lex-space array moved through SA.
///
/// Applies to the (LCP, PLCP) and (LCS, PLCS) pairs.
///
/// # Panics (debug builds only)
/// Panics if `permuted[sa[i]] != lex[i]` for some row.
#[inline]
pub fn check_permuted_consistent(lex: &[usize], permuted: &[usize], sa: &[usize]) {
    for (row, &offset) in sa.iter().enumerate() {
        debug_assert!(
            permuted.get(offset) == lex.get(row),
            "Contract violation: PermutedConsistent - permuted[sa[{}]] = {:?}, lex[{}] = {:?}",
            row,
            permuted.get(offset),
            row,
            lex.get(row)
        );
    }
}

// ============================================================================
// RUN AND MUM CONTRACTS
// ============================================================================

/// Check that every run found in `array` is well formed.
///
/// # Panics (debug builds only)
/// Panics on the first run that is too short, bends, covers the placeholder,
/// or could still grow to the right.
#[inline]
pub fn check_run_well_formed(runs: &[CompressibleRun], array: &DerivedArray) {
    for run in runs {
        debug_assert!(
            is_well_formed(run, array),
            "Contract violation: CompressibleRun.WellFormed - {} run {}..={} ({:?})",
            array.kind(),
            run.start,
            run.end,
            run.direction
        );
    }
}

/// Check the shape of a reported MUM.
///
/// # Panics (debug builds only)
/// Panics if the window or offset list does not have one entry per document,
/// or the match is empty.
#[inline]
pub fn check_mum_well_formed(mum: &Mum, num_docs: usize) {
    debug_assert!(
        mum.length > 0,
        "Contract violation: Mum.WellFormed - zero-length match at rows {:?}",
        mum.rows
    );
    debug_assert_eq!(
        mum.rows.len(),
        num_docs,
        "Contract violation: Mum.WellFormed - window {:?} spans {} rows for {} documents",
        mum.rows,
        mum.rows.len(),
        num_docs
    );
    debug_assert_eq!(
        mum.offsets.len(),
        num_docs,
        "Contract violation: Mum.WellFormed - {} offsets for {} documents",
        mum.offsets.len(),
        num_docs
    );
}
