// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Full invariant audit of a finished [`Analysis`].
//!
//! The contracts in [`super::contracts`] run inside the builders and vanish
//! in release builds. This module re-derives every cross-array relation from
//! scratch and reports the first one that fails, in any build.
//!
//! # Checks
//!
//! | Check                  | What's Guaranteed                                  |
//! |------------------------|----------------------------------------------------|
//! | `sa_permutation`       | SA, ISA, LF, FL, φ, φ⁻¹ are permutations of `0..n` |
//! | `sa_sorted`            | adjacent suffixes strictly increase                |
//! | `isa_inverse`          | `isa[sa[i]] == i`                                  |
//! | `bwt_definition`       | `bwt[i] == T[sa[i] - 1]`                           |
//! | `lf_fl_inverse`        | `fl[lf[i]] == i`                                   |
//! | `lf_single_cycle`      | LF visits every row before returning to row 0      |
//! | `phi_definition`       | `φ[sa[i]] == sa[i - 1]`, `φ⁻¹ = φ` inverted        |
//! | `lcp_definition`       | LCP/LCS recomputed, PLCP/PLCS moved through SA     |
//! | `runs_maximal`         | every run well formed, no run can grow             |
//! | `thresholds`           | `Match` iff BWT agrees, `Unreachable` iff absent   |
//! | `mums`                 | one row per document, shared prefix, maximality    |
//! | `bwt_inversion`        | walking LF rebuilds T                              |
//!
//! # Example
//!
//! ```
//! use bwt_suite::{analyze, AnalyzeOptions};
//! use bwt_suite::verify::verify_analysis;
//!
//! let analysis = analyze("abaaba$", AnalyzeOptions::default()).unwrap();
//! let report = verify_analysis(&analysis).unwrap();
//! assert!(report.checks.contains(&"bwt_inversion"));
//! ```

use thiserror::Error;

use crate::alphabet::is_terminator;
use crate::derive::{lcp_array, lcs_array};
use crate::index::is_suffix_array_sorted;
use crate::runs::{is_well_formed, runs_are_maximal};
use crate::suite::Analysis;
use crate::types::{ArrayKind, Mum, Threshold};
use crate::utils::{is_permutation, wrap_next, wrap_prev};

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// Array should be a permutation of `0..n` and is not.
    #[error("{array} is not a permutation of 0..{n}")]
    NotAPermutation { array: ArrayKind, n: usize },

    /// Suffix array is not strictly sorted.
    #[error("suffix array not sorted")]
    UnsortedSuffixArray,

    /// Two arrays that should be mutual inverses disagree.
    #[error("{array} and its inverse disagree at {index}")]
    InverseMismatch { array: ArrayKind, index: usize },

    /// A stored value differs from its defining relation.
    #[error("{array}[{index}] = {found}, definition gives {expected}")]
    DefinitionMismatch {
        array: ArrayKind,
        index: usize,
        found: usize,
        expected: usize,
    },

    /// BWT symbol differs from `T[SA[i] - 1]`.
    #[error("BWT[{row}] = {found:?}, definition gives {expected:?}")]
    BwtMismatch {
        row: usize,
        found: char,
        expected: char,
    },

    /// LF splits into more than one cycle.
    #[error("LF returns to row 0 after {steps} of {n} steps")]
    LfNotSingleCycle { steps: usize, n: usize },

    /// A compressible run is malformed or could be grown.
    #[error("{array} run {start}..={end} is malformed or not maximal")]
    BadRun {
        array: ArrayKind,
        start: usize,
        end: usize,
    },

    /// A threshold cell contradicts the BWT.
    #[error("threshold for {symbol:?} at row {row} contradicts the BWT")]
    BadThreshold { symbol: char, row: usize },

    /// A reported MUM breaks one of the MUM conditions.
    #[error("MUM at rows {start}..{end}: {reason}")]
    BadMum {
        start: usize,
        end: usize,
        reason: &'static str,
    },

    /// Walking LF did not rebuild the input.
    #[error("BWT inversion produced {found:?}")]
    InversionMismatch { found: String },
}

/// Checks that passed, in the order they ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub checks: Vec<&'static str>,
}

impl VerificationReport {
    fn pass(&mut self, check: &'static str) {
        self.checks.push(check);
    }

    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.checks.len()
    }
}

/// An analysis that has passed every check in [`verify_analysis`].
#[derive(Debug, Clone)]
pub struct VerifiedAnalysis {
    inner: Analysis,
    report: VerificationReport,
}

impl VerifiedAnalysis {
    /// Audit `analysis`, keeping it only if every invariant holds.
    pub fn new(analysis: Analysis) -> Result<Self, InvariantError> {
        let report = verify_analysis(&analysis)?;
        Ok(Self {
            inner: analysis,
            report,
        })
    }

    #[inline]
    pub fn analysis(&self) -> &Analysis {
        &self.inner
    }

    #[inline]
    pub fn report(&self) -> &VerificationReport {
        &self.report
    }

    pub fn into_inner(self) -> Analysis {
        self.inner
    }
}

/// Re-derive and check every invariant of `analysis`.
pub fn verify_analysis(analysis: &Analysis) -> Result<VerificationReport, InvariantError> {
    let mut report = VerificationReport::default();
    let n = analysis.len();
    let text = analysis.text();
    let sa = analysis.sa();
    let isa = analysis.isa();

    for kind in [
        ArrayKind::Sa,
        ArrayKind::Isa,
        ArrayKind::Lf,
        ArrayKind::Fl,
        ArrayKind::Phi,
        ArrayKind::PhiInverse,
    ] {
        let values = analysis.array(kind).values();
        if values.len() != n || !is_permutation(values) {
            return Err(InvariantError::NotAPermutation { array: kind, n });
        }
    }
    report.pass("sa_permutation");

    if !is_suffix_array_sorted(text.ranks(), sa) {
        return Err(InvariantError::UnsortedSuffixArray);
    }
    report.pass("sa_sorted");

    if let Some(row) = (0..n).find(|&row| isa[sa[row]] != row) {
        return Err(InvariantError::InverseMismatch {
            array: ArrayKind::Isa,
            index: row,
        });
    }
    report.pass("isa_inverse");

    let bwt = analysis.bwt();
    for row in 0..n {
        let expected = text.symbol(wrap_prev(sa[row], n));
        if bwt.get(row) != Some(&expected) {
            return Err(InvariantError::BwtMismatch {
                row,
                found: bwt.get(row).copied().unwrap_or('\0'),
                expected,
            });
        }
    }
    report.pass("bwt_definition");

    let lf = analysis.lf();
    let fl = analysis.fl();
    for row in 0..n {
        let expected = isa[wrap_prev(sa[row], n)];
        if lf[row] != expected {
            return Err(InvariantError::DefinitionMismatch {
                array: ArrayKind::Lf,
                index: row,
                found: lf[row],
                expected,
            });
        }
        if fl[lf[row]] != row {
            return Err(InvariantError::InverseMismatch {
                array: ArrayKind::Fl,
                index: row,
            });
        }
    }
    report.pass("lf_fl_inverse");

    let mut row = lf[0];
    let mut steps = 1;
    while row != 0 && steps < n {
        row = lf[row];
        steps += 1;
    }
    if row != 0 || steps != n {
        return Err(InvariantError::LfNotSingleCycle { steps, n });
    }
    report.pass("lf_single_cycle");

    let phi = analysis.phi();
    let phi_inverse = analysis.phi_inverse();
    for row in 0..n {
        let expected = sa[wrap_prev(row, n)];
        if phi[sa[row]] != expected {
            return Err(InvariantError::DefinitionMismatch {
                array: ArrayKind::Phi,
                index: sa[row],
                found: phi[sa[row]],
                expected,
            });
        }
        let expected = sa[wrap_next(row, n)];
        if phi_inverse[sa[row]] != expected {
            return Err(InvariantError::DefinitionMismatch {
                array: ArrayKind::PhiInverse,
                index: sa[row],
                found: phi_inverse[sa[row]],
                expected,
            });
        }
    }
    report.pass("phi_definition");

    check_lcp_family(analysis, ArrayKind::Lcp, ArrayKind::Plcp, &lcp_array(text.ranks(), sa))?;
    check_lcp_family(analysis, ArrayKind::Lcs, ArrayKind::Plcs, &lcs_array(text.ranks(), sa))?;
    report.pass("lcp_definition");

    for (&kind, runs) in analysis.all_runs() {
        let array = analysis.array(kind);
        if let Some(run) = runs.iter().find(|run| !is_well_formed(run, array)) {
            return Err(InvariantError::BadRun {
                array: kind,
                start: run.start,
                end: run.end,
            });
        }
        if !runs_are_maximal(runs, array) {
            let (start, end) = runs.first().map_or((0, 0), |run| (run.start, run.end));
            return Err(InvariantError::BadRun {
                array: kind,
                start,
                end,
            });
        }
    }
    report.pass("runs_maximal");

    if let Some(table) = analysis.thresholds() {
        for column in table.columns() {
            let present = bwt.contains(&column.symbol);
            for (row, cell) in column.cells.iter().enumerate() {
                let consistent = match cell {
                    Threshold::Match => bwt[row] == column.symbol,
                    Threshold::Jump { .. } => present && bwt[row] != column.symbol,
                    Threshold::Unreachable => !present,
                };
                if !consistent {
                    return Err(InvariantError::BadThreshold {
                        symbol: column.symbol,
                        row,
                    });
                }
            }
        }
        report.pass("thresholds");
    }

    if let Some(mums) = analysis.mums() {
        for mum in mums {
            check_mum(analysis, mum)?;
        }
        report.pass("mums");
    }

    let restored = analysis.reconstruct_text();
    if restored != text.to_string() {
        return Err(InvariantError::InversionMismatch { found: restored });
    }
    report.pass("bwt_inversion");

    Ok(report)
}

fn check_lcp_family(
    analysis: &Analysis,
    lex_kind: ArrayKind,
    text_kind: ArrayKind,
    expected: &[usize],
) -> Result<(), InvariantError> {
    let lex = analysis.array(lex_kind).values();
    if let Some(row) = (0..expected.len()).find(|&row| lex.get(row) != Some(&expected[row])) {
        return Err(InvariantError::DefinitionMismatch {
            array: lex_kind,
            index: row,
            found: lex.get(row).copied().unwrap_or(0),
            expected: expected[row],
        });
    }

    let permuted = analysis.array(text_kind).values();
    let isa = analysis.isa();
    if let Some(offset) = (0..isa.len()).find(|&p| permuted.get(p) != Some(&lex[isa[p]])) {
        return Err(InvariantError::DefinitionMismatch {
            array: text_kind,
            index: offset,
            found: permuted.get(offset).copied().unwrap_or(0),
            expected: lex[isa[offset]],
        });
    }
    Ok(())
}

fn check_mum(analysis: &Analysis, mum: &Mum) -> Result<(), InvariantError> {
    let bad = |reason| InvariantError::BadMum {
        start: mum.rows.start,
        end: mum.rows.end,
        reason,
    };

    let text = analysis.text();
    let k = text.num_docs();
    let lcp = analysis.lcp();
    let da = analysis.document_array();

    if mum.length == 0 {
        return Err(bad("empty match"));
    }
    if mum.rows.len() != k || mum.offsets.len() != k || mum.rows.end > analysis.len() {
        return Err(bad("window does not hold one row per document"));
    }

    let mut seen = vec![false; k];
    for row in mum.rows.clone() {
        match da[row] {
            Some(doc) if !seen[doc] => seen[doc] = true,
            _ => return Err(bad("document missing or repeated")),
        }
    }

    for (doc, &offset) in mum.offsets.iter().enumerate() {
        if offset >= analysis.len() || text.document_of(offset) != Some(doc) {
            return Err(bad("offset outside its document"));
        }
    }

    let ranks = text.ranks();
    let first = mum.offsets[0];
    let shared = |offset: usize| {
        offset + mum.length <= ranks.len()
            && ranks[offset..offset + mum.length] == ranks[first..first + mum.length]
    };
    if first + mum.length > ranks.len() || !mum.offsets.iter().all(|&offset| shared(offset)) {
        return Err(bad("offsets do not share the match"));
    }
    if is_terminator(text.symbol(first)) {
        return Err(bad("match starts with a terminator"));
    }

    let right_closed = mum.rows.end == analysis.len() || lcp[mum.rows.end] < mum.length;
    if lcp[mum.rows.start] >= mum.length || !right_closed {
        return Err(bad("match occurs outside the window"));
    }

    let bwt = analysis.bwt();
    let window = &bwt[mum.rows.clone()];
    if window.iter().all(|&c| c == window[0]) {
        return Err(bad("match extends to the left"));
    }

    Ok(())
}
