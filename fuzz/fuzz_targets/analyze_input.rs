// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for raw input handling.
//!
//! Arbitrary bytes go straight into `analyze` with every option set. The only
//! acceptable outcomes are a `ValidationError` or an analysis that passes the
//! full invariant audit. Stray terminators, control characters and multi-byte
//! symbols all have to be handled before a single array is built.

#![no_main]

use bwt_suite::{analyze, verify_analysis, AnalyzeOptions};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);

    // Construction is quadratic on purpose; keep inputs diagram-sized.
    let input: String = input.chars().take(64).collect();

    let options = AnalyzeOptions::default()
        .with_thresholds(true)
        .with_mums(input.matches('$').count() >= 2);

    let Ok(analysis) = analyze(&input, options) else {
        return;
    };

    // INVARIANT: every accepted input yields a fully consistent model
    if let Err(err) = verify_analysis(&analysis) {
        panic!("{input:?} produced an inconsistent analysis: {err}");
    }

    // INVARIANT: the model round-trips back to the input
    assert_eq!(analysis.reconstruct_text(), input);
});
