// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The output model: one validated input and everything derived from it.
//!
//! [`analyze`] runs the whole pipeline and hands back an [`Analysis`]. Nothing
//! is computed lazily and nothing is mutable afterwards, so two analyses of
//! the same request compare equal and serialize to the same bytes.
//!
//! ```text
//! analyze(input, options)
//!   │
//!   ├─ Text::parse ──────────── ValidationError? stop here
//!   ├─ build_suffix_index ───── SA, ISA
//!   ├─ derive_core_arrays ───── BWT, LF, FL, φ, φ⁻¹, LCP, LCS, PLCP, PLCS
//!   ├─ compressible_runs ────── one run set per eligible kind
//!   ├─ threshold_table ──────── if options.show_thresholds
//!   └─ find_mums ────────────── if options.show_mums
//! ```

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::alphabet::Text;
use crate::derive::{bwt_runs, derive_core_arrays, invert_bwt, rotation, BwtRun, CoreArrays};
use crate::error::Result;
use crate::index::{build_suffix_index, SuffixIndex};
use crate::mums::{document_array, find_mums, mum_symbols};
use crate::runs::compressible_runs;
use crate::thresholds::{threshold_table, ThresholdTable};
use crate::types::{AnalyzeOptions, ArrayKind, CompressibleRun, DerivedArray, Mum};
use crate::verify::contracts::check_run_well_formed;

/// Everything the suite derives for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    text: Text,
    options: AnalyzeOptions,
    index: SuffixIndex,
    core: CoreArrays,
    runs: BTreeMap<ArrayKind, Vec<CompressibleRun>>,
    document_array: Vec<Option<usize>>,
    thresholds: Option<ThresholdTable>,
    mums: Option<Vec<Mum>>,
}

/// Validate `input` and derive every array and annotation `options` asks for.
///
/// # Errors
///
/// Returns a [`crate::ValidationError`] if the input is too short, does not end
/// in a terminator, or its document structure does not fit `options`. No
/// partial result is produced.
///
/// # Example
///
/// ```
/// use bwt_suite::{analyze, AnalyzeOptions};
///
/// let analysis = analyze("abaaba$", AnalyzeOptions::default()).unwrap();
/// assert_eq!(analysis.sa(), &[6, 5, 2, 3, 0, 4, 1]);
/// assert_eq!(analysis.bwt_string(), "abba$aa");
/// ```
pub fn analyze(input: &str, options: AnalyzeOptions) -> Result<Analysis> {
    let span = debug_span!("analyze", len = input.chars().count());
    let _guard = span.enter();

    let text = Text::parse(input, &options)?;
    let index = build_suffix_index(&text);
    let core = derive_core_arrays(&text, &index);

    let runs: BTreeMap<ArrayKind, Vec<CompressibleRun>> = ArrayKind::COMPRESSIBLE
        .iter()
        .map(|&kind| {
            let array = core.array(kind);
            let found = compressible_runs(array);
            check_run_well_formed(&found, array);
            (kind, found)
        })
        .collect();

    let document_array = document_array(&text, index.sa());

    let thresholds = options
        .show_thresholds
        .then(|| threshold_table(&text.alphabet(), core.bwt(), core.array(ArrayKind::Lcp).values()));

    let mums = options
        .show_mums
        .then(|| find_mums(&text, &index, &core));

    debug!(
        n = text.len(),
        documents = text.num_docs(),
        runs = runs.values().map(Vec::len).sum::<usize>(),
        "analysis complete"
    );

    Ok(Analysis {
        text,
        options,
        index,
        core,
        runs,
        document_array,
        thresholds,
        mums,
    })
}

impl Analysis {
    // ------------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------------

    #[inline]
    pub fn text(&self) -> &Text {
        &self.text
    }

    #[inline]
    pub fn options(&self) -> AnalyzeOptions {
        self.options
    }

    /// Number of symbols, terminators included.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Distinct symbols, lowest rank first.
    pub fn alphabet(&self) -> Vec<char> {
        self.text.alphabet()
    }

    // ------------------------------------------------------------------------
    // Arrays
    // ------------------------------------------------------------------------

    #[inline]
    pub fn sa(&self) -> &[usize] {
        self.index.sa()
    }

    #[inline]
    pub fn isa(&self) -> &[usize] {
        self.index.isa()
    }

    #[inline]
    pub fn bwt(&self) -> &[char] {
        self.core.bwt()
    }

    pub fn bwt_string(&self) -> String {
        self.core.bwt().iter().collect()
    }

    /// Any integer array by tag, with its placeholder slot.
    #[inline]
    pub fn array(&self, kind: ArrayKind) -> &DerivedArray {
        self.core.array(kind)
    }

    pub fn lf(&self) -> &[usize] {
        self.array(ArrayKind::Lf).values()
    }

    pub fn fl(&self) -> &[usize] {
        self.array(ArrayKind::Fl).values()
    }

    pub fn phi(&self) -> &[usize] {
        self.array(ArrayKind::Phi).values()
    }

    pub fn phi_inverse(&self) -> &[usize] {
        self.array(ArrayKind::PhiInverse).values()
    }

    pub fn lcp(&self) -> &[usize] {
        self.array(ArrayKind::Lcp).values()
    }

    pub fn lcs(&self) -> &[usize] {
        self.array(ArrayKind::Lcs).values()
    }

    pub fn plcp(&self) -> &[usize] {
        self.array(ArrayKind::Plcp).values()
    }

    pub fn plcs(&self) -> &[usize] {
        self.array(ArrayKind::Plcs).values()
    }

    /// `da[i]` = document holding the suffix at row `i`.
    #[inline]
    pub fn document_array(&self) -> &[Option<usize>] {
        &self.document_array
    }

    // ------------------------------------------------------------------------
    // Burrows-Wheeler matrix
    // ------------------------------------------------------------------------

    /// Row `row` of the sorted rotation matrix.
    pub fn bwm_row(&self, row: usize) -> Option<String> {
        let offset = *self.sa().get(row)?;
        Some(rotation(self.text.symbols(), offset).into_iter().collect())
    }

    /// Every row of the sorted rotation matrix.
    pub fn bwm(&self) -> Vec<String> {
        self.sa()
            .iter()
            .map(|&offset| rotation(self.text.symbols(), offset).into_iter().collect())
            .collect()
    }

    /// First column of the matrix: the text's symbols in sorted order.
    pub fn f_column(&self) -> Vec<char> {
        self.sa().iter().map(|&offset| self.text.symbol(offset)).collect()
    }

    /// Maximal stretches of equal BWT symbols.
    pub fn bwt_runs(&self) -> Vec<BwtRun> {
        bwt_runs(self.core.bwt())
    }

    /// The text rebuilt from BWT and LF alone.
    pub fn reconstruct_text(&self) -> String {
        invert_bwt(self.core.bwt(), self.lf())
    }

    // ------------------------------------------------------------------------
    // Annotations
    // ------------------------------------------------------------------------

    /// Compressible runs of `kind`. Empty for kinds that are not eligible.
    pub fn runs(&self, kind: ArrayKind) -> &[CompressibleRun] {
        self.runs.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every run set, keyed by array kind.
    #[inline]
    pub fn all_runs(&self) -> &BTreeMap<ArrayKind, Vec<CompressibleRun>> {
        &self.runs
    }

    /// Present iff `show_thresholds` was set.
    #[inline]
    pub fn thresholds(&self) -> Option<&ThresholdTable> {
        self.thresholds.as_ref()
    }

    /// Present iff `show_mums` was set.
    #[inline]
    pub fn mums(&self) -> Option<&[Mum]> {
        self.mums.as_deref()
    }

    /// The symbols a MUM covers.
    pub fn mum_text(&self, mum: &Mum) -> String {
        mum_symbols(&self.text, mum)
    }

    /// Serialize the whole analysis as pretty-printed JSON.
    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
