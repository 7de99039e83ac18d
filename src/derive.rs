// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that follows from SA and ISA by direct definition.
//!
//! ```text
//! BWT[i]   = T[SA[i] - 1]            (mod n)       lex space
//! LF[i]    = ISA[SA[i] - 1]          (mod n)       lex space
//! FL       = LF⁻¹                                  lex space
//! LCP[i]   = lcp(suffix SA[i-1], suffix SA[i])     lex space, LCP[0] = 0
//! LCS[i]   = lcs(rotation SA[i-1], rotation SA[i]) lex space, LCS[0] = 0
//! φ[SA[i]] = SA[i - 1]               (mod n)       text space
//! φ⁻¹      = φ⁻¹                                   text space
//! PLCP[j]  = LCP[ISA[j]]                           text space
//! PLCS[j]  = LCS[ISA[j]]                           text space
//! ```
//!
//! LCP compares suffixes symbol by symbol. LCS compares whole rotations from
//! the right.
//!
//! # Placeholder convention
//!
//! Row 0 has no predecessor, so `LCP[0]` and `LCS[0]` are set to 0 and flagged
//! as placeholders. In PLCP/PLCS that zero lands at text offset `SA[0] = n-1`,
//! which is flagged the same way. Run detection skips flagged slots.

use std::ops::Range;

use serde::Serialize;
use tracing::debug;

use crate::alphabet::{symbol_rank, Text};
use crate::index::{suffix_at, SuffixIndex};
use crate::types::{ArrayKind, DerivedArray};
use crate::utils::{common_prefix_len, common_suffix_len, invert, permute, wrap_next, wrap_prev};
use crate::verify::contracts::{check_lf_fl_inverse, check_permuted_consistent};

/// The BWT plus every integer array derived from SA and ISA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoreArrays {
    bwt: Vec<char>,
    sa: DerivedArray,
    isa: DerivedArray,
    lf: DerivedArray,
    fl: DerivedArray,
    phi: DerivedArray,
    phi_inverse: DerivedArray,
    lcp: DerivedArray,
    lcs: DerivedArray,
    plcp: DerivedArray,
    plcs: DerivedArray,
}

impl CoreArrays {
    /// Last column of the Burrows-Wheeler matrix.
    #[inline]
    pub fn bwt(&self) -> &[char] {
        &self.bwt
    }

    /// Look up one array by its tag.
    pub fn array(&self, kind: ArrayKind) -> &DerivedArray {
        match kind {
            ArrayKind::Sa => &self.sa,
            ArrayKind::Isa => &self.isa,
            ArrayKind::Lf => &self.lf,
            ArrayKind::Fl => &self.fl,
            ArrayKind::Phi => &self.phi,
            ArrayKind::PhiInverse => &self.phi_inverse,
            ArrayKind::Lcp => &self.lcp,
            ArrayKind::Lcs => &self.lcs,
            ArrayKind::Plcp => &self.plcp,
            ArrayKind::Plcs => &self.plcs,
        }
    }
}

/// A maximal stretch of equal BWT symbols.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BwtRun {
    pub symbol: char,
    pub rows: Range<usize>,
}

/// Derive BWT, LF, FL, φ, φ⁻¹, LCP, LCS, PLCP and PLCS.
pub fn derive_core_arrays(text: &Text, index: &SuffixIndex) -> CoreArrays {
    let n = text.len();
    let ranks = text.ranks();
    let sa = index.sa();
    let isa = index.isa();

    let bwt: Vec<char> = sa
        .iter()
        .map(|&offset| text.symbol(wrap_prev(offset, n)))
        .collect();

    let lf: Vec<usize> = sa.iter().map(|&offset| isa[wrap_prev(offset, n)]).collect();
    let fl = invert(&lf);
    check_lf_fl_inverse(&lf, &fl);

    let mut phi = vec![0; n];
    let mut phi_inverse = vec![0; n];
    for row in 0..n {
        phi[sa[row]] = sa[wrap_prev(row, n)];
        phi_inverse[sa[row]] = sa[wrap_next(row, n)];
    }

    let lcp = lcp_array(ranks, sa);
    let lcs = lcs_array(ranks, sa);
    let plcp = permute(&lcp, isa);
    let plcs = permute(&lcs, isa);
    check_permuted_consistent(&lcp, &plcp, sa);
    check_permuted_consistent(&lcs, &plcs, sa);

    debug!(n, "derived core arrays");

    // SA[0] is always n-1: the suffix holding only the final terminator.
    let text_placeholder = sa[0];

    CoreArrays {
        bwt,
        sa: DerivedArray::new(ArrayKind::Sa, sa.to_vec()),
        isa: DerivedArray::new(ArrayKind::Isa, isa.to_vec()),
        lf: DerivedArray::new(ArrayKind::Lf, lf),
        fl: DerivedArray::new(ArrayKind::Fl, fl),
        phi: DerivedArray::new(ArrayKind::Phi, phi),
        phi_inverse: DerivedArray::new(ArrayKind::PhiInverse, phi_inverse),
        lcp: DerivedArray::new(ArrayKind::Lcp, lcp).with_placeholder(0),
        lcs: DerivedArray::new(ArrayKind::Lcs, lcs).with_placeholder(0),
        plcp: DerivedArray::new(ArrayKind::Plcp, plcp).with_placeholder(text_placeholder),
        plcs: DerivedArray::new(ArrayKind::Plcs, plcs).with_placeholder(text_placeholder),
    }
}

/// Quadratic LCP: compare each adjacent pair of suffixes from the left.
pub fn lcp_array(ranks: &[u32], sa: &[usize]) -> Vec<usize> {
    let mut lcp = vec![0; sa.len()];
    for row in 1..sa.len() {
        lcp[row] = common_prefix_len(suffix_at(ranks, sa[row - 1]), suffix_at(ranks, sa[row]));
    }
    lcp
}

/// LCS over the Burrows-Wheeler matrix: compare adjacent rotations from the right.
pub fn lcs_array(ranks: &[u32], sa: &[usize]) -> Vec<usize> {
    let rows: Vec<Vec<u32>> = sa.iter().map(|&offset| rotation(ranks, offset)).collect();
    let mut lcs = vec![0; rows.len()];
    for row in 1..rows.len() {
        lcs[row] = common_suffix_len(&rows[row - 1], &rows[row]);
    }
    lcs
}

/// Rotation of `items` starting at `offset`.
pub fn rotation<T: Clone>(items: &[T], offset: usize) -> Vec<T> {
    items[offset..]
        .iter()
        .chain(&items[..offset])
        .cloned()
        .collect()
}

/// Rebuild the text from its BWT by walking LF.
///
/// The walk starts at the row whose BWT symbol is the final terminator (the
/// row of the suffix starting at offset 0) and emits the text right to left.
pub fn invert_bwt(bwt: &[char], lf: &[usize]) -> String {
    let Some(start) = (0..bwt.len()).min_by_key(|&row| symbol_rank(bwt[row])) else {
        return String::new();
    };

    let mut reversed = Vec::with_capacity(bwt.len());
    let mut row = start;
    for _ in 0..bwt.len() {
        reversed.push(bwt[row]);
        row = lf[row];
    }
    reversed.into_iter().rev().collect()
}

/// Group the BWT into maximal runs of equal symbols.
pub fn bwt_runs(bwt: &[char]) -> Vec<BwtRun> {
    let mut runs: Vec<BwtRun> = Vec::new();
    for (row, &symbol) in bwt.iter().enumerate() {
        match runs.last_mut() {
            Some(run) if run.symbol == symbol => run.rows.end = row + 1,
            _ => runs.push(BwtRun {
                symbol,
                rows: row..row + 1,
            }),
        }
    }
    runs
}
