// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference vectors shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. Every vector
//! here was checked by hand against the defining relations.

#![doc(hidden)]

use crate::suite::{analyze, Analysis};
use crate::types::{AnalyzeOptions, ArrayKind};

/// Expected arrays for one single-document input.
#[derive(Debug, Clone, Copy)]
pub struct Fixture {
    pub input: &'static str,
    pub sa: &'static [usize],
    pub isa: &'static [usize],
    pub bwt: &'static str,
    pub lf: &'static [usize],
    pub fl: &'static [usize],
    pub phi: &'static [usize],
    pub phi_inverse: &'static [usize],
    pub lcp: &'static [usize],
    pub lcs: &'static [usize],
    pub plcp: &'static [usize],
    pub plcs: &'static [usize],
}

impl Fixture {
    /// Expected values for one array kind.
    pub fn expected(&self, kind: ArrayKind) -> &'static [usize] {
        match kind {
            ArrayKind::Sa => self.sa,
            ArrayKind::Isa => self.isa,
            ArrayKind::Lf => self.lf,
            ArrayKind::Fl => self.fl,
            ArrayKind::Phi => self.phi,
            ArrayKind::PhiInverse => self.phi_inverse,
            ArrayKind::Lcp => self.lcp,
            ArrayKind::Lcs => self.lcs,
            ArrayKind::Plcp => self.plcp,
            ArrayKind::Plcs => self.plcs,
        }
    }
}

pub const ABAABA: Fixture = Fixture {
    input: "abaaba$",
    sa: &[6, 5, 2, 3, 0, 4, 1],
    isa: &[4, 6, 2, 3, 5, 1, 0],
    bwt: "abba$aa",
    lf: &[1, 5, 6, 2, 0, 3, 4],
    fl: &[4, 0, 3, 5, 6, 1, 2],
    phi: &[3, 4, 5, 2, 0, 6, 1],
    phi_inverse: &[4, 6, 3, 0, 1, 2, 5],
    lcp: &[0, 0, 1, 1, 3, 0, 2],
    lcs: &[0, 0, 2, 0, 0, 0, 1],
    plcp: &[3, 2, 1, 1, 0, 0, 0],
    plcs: &[0, 1, 2, 0, 0, 0, 0],
};

pub const GATTACA: Fixture = Fixture {
    input: "GATTACA$",
    sa: &[7, 6, 4, 1, 5, 0, 3, 2],
    isa: &[5, 3, 7, 6, 2, 4, 1, 0],
    bwt: "ACTGA$TA",
    lf: &[1, 4, 6, 5, 2, 0, 7, 3],
    fl: &[5, 0, 4, 7, 1, 3, 2, 6],
    phi: &[5, 4, 3, 0, 6, 1, 7, 2],
    phi_inverse: &[3, 5, 7, 2, 1, 0, 4, 6],
    lcp: &[0, 0, 1, 1, 0, 0, 0, 1],
    lcs: &[0, 0, 0, 0, 0, 0, 0, 0],
    plcp: &[0, 1, 1, 0, 1, 0, 0, 0],
    plcs: &[0, 0, 0, 0, 0, 0, 0, 0],
};

pub const MINIMAL: Fixture = Fixture {
    input: "a$",
    sa: &[1, 0],
    isa: &[1, 0],
    bwt: "a$",
    lf: &[1, 0],
    fl: &[1, 0],
    phi: &[1, 0],
    phi_inverse: &[1, 0],
    lcp: &[0, 0],
    lcs: &[0, 0],
    plcp: &[0, 0],
    plcs: &[0, 0],
};

/// Every single-document fixture.
pub const FIXTURES: [Fixture; 3] = [ABAABA, GATTACA, MINIMAL];

/// Expected MUM for a multi-document input: symbols, SA rows, per-document offsets.
pub type ExpectedMum = (&'static str, std::ops::Range<usize>, &'static [usize]);

/// Multi-document inputs with their complete MUM lists.
pub fn multi_document_fixtures() -> Vec<(&'static str, Vec<ExpectedMum>)> {
    vec![
        (
            "how$now$brown$cow$#",
            vec![("ow", 10..14, &[1usize, 5, 10, 15])],
        ),
        (
            "gattacat$gattacgt$attcgt$#",
            vec![
                ("att", 7..10, &[1usize, 10, 18]),
                ("c", 10..13, &[5usize, 14, 21]),
                ("t$", 17..20, &[7usize, 16, 23]),
            ],
        ),
        ("ab$ab$#", vec![("ab$", 3..5, &[0usize, 3])]),
        ("ab$cd$#", vec![]),
    ]
}

/// Every option enabled that `input` supports.
pub fn full_options(input: &str) -> AnalyzeOptions {
    let documents = input.chars().filter(|&c| c == '$').count();
    AnalyzeOptions::default()
        .with_thresholds(true)
        .with_guidelines(true)
        .with_mums(documents >= 2)
}

/// Analyze a fixture input that is known to be valid.
pub fn analyze_fixture(input: &str) -> Analysis {
    match analyze(input, full_options(input)) {
        Ok(analysis) => analysis,
        Err(err) => panic!("fixture {input:?} rejected: {err}"),
    }
}
