// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for MUM detection.
//!
//! Builds well-formed document sets over a tiny alphabet so that shared
//! substrings are common, then checks every reported MUM against its
//! definition.

#![no_main]

use arbitrary::Arbitrary;
use bwt_suite::{analyze, AnalyzeOptions};
use libfuzzer_sys::fuzz_target;

/// Each document is a list of symbol picks from `ACGT`.
#[derive(Debug, Arbitrary)]
struct DocumentSet {
    documents: Vec<Vec<u8>>,
}

fuzz_target!(|set: DocumentSet| {
    let documents: Vec<String> = set
        .documents
        .iter()
        .take(6)
        .filter(|doc| !doc.is_empty())
        .map(|doc| {
            doc.iter()
                .take(12)
                .map(|&pick| ['A', 'C', 'G', 'T'][(pick % 4) as usize])
                .collect()
        })
        .collect();
    if documents.len() < 2 {
        return;
    }

    let mut input: String = documents.iter().map(|doc| format!("{doc}$")).collect();
    input.push('#');

    let analysis = match analyze(&input, AnalyzeOptions::default().with_mums(true)) {
        Ok(analysis) => analysis,
        Err(err) => panic!("{input:?} is a well-formed document set: {err}"),
    };

    let symbols: Vec<char> = input.chars().collect();
    for mum in analysis.mums().unwrap_or_default() {
        // INVARIANT: one occurrence per document, all spelling the same thing
        assert_eq!(mum.offsets.len(), documents.len());
        let first = &symbols[mum.offsets[0]..mum.offsets[0] + mum.length];
        for &offset in &mum.offsets {
            assert_eq!(&symbols[offset..offset + mum.length], first);
        }

        // INVARIANT: length is the minimum LCP inside the window
        let interior = &analysis.lcp()[mum.rows.start + 1..mum.rows.end];
        assert_eq!(interior.iter().min().copied(), Some(mum.length));
    }
});
