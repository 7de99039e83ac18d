// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Maximal unique matches across `$`-separated documents.
//!
//! With k documents, a MUM shows up in the suffix array as a window of exactly
//! k consecutive rows:
//!
//! ```text
//!          LCP  DA  BWT
//! start-1   ·    ·   ·     LCP[start] < length       (left-maximal in SA)
//! start     ·    2   c    ─┐
//!   ...     ≥L   0   n     │ k rows, one per document, length L = min LCP inside
//! start+k-1 ≥L   1   h    ─┘
//! start+k   <L   ·   ·     LCP[start+k] < length     (nobody else shares it)
//! ```
//!
//! A window qualifies when:
//!
//! 1. `length = min(LCP[start+1..start+k]) > 0`
//! 2. `LCP[start] < length` and `LCP[start+k] < length` (or the window ends the array)
//! 3. every document appears exactly once in the window
//! 4. the BWT symbols in the window are not all equal (left-maximal)
//! 5. the shared prefix does not begin with a terminator
//!
//! Condition 2 makes the match unique per document, condition 4 stops it from
//! being extendable one symbol to the left. Condition 5 drops the trivial
//! `$` window that every multi-document string has.

use tracing::{debug, trace};

use crate::alphabet::{is_terminator, Text};
use crate::derive::CoreArrays;
use crate::index::SuffixIndex;
use crate::types::{ArrayKind, Mum};
use crate::verify::contracts::check_mum_well_formed;

/// Document array: `da[i]` = document holding the suffix at row `i`.
///
/// The row of the closing `#` belongs to no document.
pub fn document_array(text: &Text, sa: &[usize]) -> Vec<Option<usize>> {
    sa.iter().map(|&offset| text.document_of(offset)).collect()
}

/// Every MUM in `text`, in SA row order.
///
/// Returns nothing for fewer than two documents; callers that asked for MUMs
/// explicitly are stopped earlier by validation.
pub fn find_mums(text: &Text, index: &SuffixIndex, core: &CoreArrays) -> Vec<Mum> {
    let k = text.num_docs();
    let n = text.len();
    if k < 2 || n < k {
        return Vec::new();
    }

    let sa = index.sa();
    let lcp = core.array(ArrayKind::Lcp).values();
    let bwt = core.bwt();

    let mut mums = Vec::new();

    for start in 0..=n - k {
        let end = start + k;

        let length = lcp[start + 1..end].iter().copied().min().unwrap_or(0);
        if length == 0 || lcp[start] >= length {
            continue;
        }
        if end < n && lcp[end] >= length {
            continue;
        }

        let Some(offsets) = offsets_by_document(text, &sa[start..end]) else {
            trace!(start, length, "window skipped: documents repeat");
            continue;
        };

        let window_bwt = &bwt[start..end];
        if window_bwt.iter().all(|&c| c == window_bwt[0]) {
            trace!(start, length, "window skipped: extends to the left");
            continue;
        }

        if is_terminator(text.symbol(sa[start])) {
            trace!(start, length, "window skipped: starts with a terminator");
            continue;
        }

        let mum = Mum {
            rows: start..end,
            offsets,
            length,
        };
        check_mum_well_formed(&mum, k);
        trace!(start, length, "found MUM");
        mums.push(mum);
    }

    debug!(documents = k, mums = mums.len(), "scanned for MUMs");

    mums
}

/// The symbols a MUM covers, read from its first occurrence.
pub fn mum_symbols(text: &Text, mum: &Mum) -> String {
    mum.offsets
        .first()
        .and_then(|&offset| text.symbols().get(offset..offset + mum.length))
        .map(|symbols| symbols.iter().collect())
        .unwrap_or_default()
}

/// Map each suffix of the window to its document. `None` if any document is
/// missing or repeated.
fn offsets_by_document(text: &Text, window: &[usize]) -> Option<Vec<usize>> {
    let mut offsets: Vec<Option<usize>> = vec![None; text.num_docs()];
    for &offset in window {
        let doc = text.document_of(offset)?;
        if offsets[doc].replace(offset).is_some() {
            return None;
        }
    }
    offsets.into_iter().collect()
}
