// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the run scanner.
//!
//! The scanner works on any tagged array, not just the ones the suite builds.
//! Arbitrary values and an arbitrary placeholder slot must never produce a
//! run that bends, overlaps another run, or swallows the placeholder.

#![no_main]

use arbitrary::Arbitrary;
use bwt_suite::runs::{is_well_formed, runs_are_maximal};
use bwt_suite::{compressible_runs, ArrayKind, DerivedArray};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RunInput {
    values: Vec<u8>,
    placeholder: Option<u8>,
}

fuzz_target!(|input: RunInput| {
    let values: Vec<usize> = input.values.iter().map(|&v| usize::from(v % 8)).collect();
    let mut array = DerivedArray::new(ArrayKind::Phi, values);
    if let Some(slot) = input.placeholder.map(usize::from) {
        if slot < array.len() {
            array = array.with_placeholder(slot);
        }
    }

    let runs = compressible_runs(&array);

    // INVARIANT: every run is well formed and none can be grown
    for run in &runs {
        assert!(is_well_formed(run, &array), "{run:?} in {:?}", array.values());
    }
    assert!(runs_are_maximal(&runs, &array));
});
