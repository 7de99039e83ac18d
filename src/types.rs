// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by every stage of the pipeline.
//!
//! # Type map
//!
//! | Rust Type          | Meaning                                              |
//! |--------------------|------------------------------------------------------|
//! | `AnalyzeOptions`   | Per-request flags, passed by value into `analyze`    |
//! | `ArrayKind`        | Tag naming one derived integer array                 |
//! | `DerivedArray`     | `{kind, values, placeholder}`: one tagged array      |
//! | `CompressibleRun`  | Maximal ±1 stretch inside a `DerivedArray`           |
//! | `Threshold`        | One cell of a per-symbol threshold column            |
//! | `ThresholdColumn`  | All n cells for one alphabet symbol                  |
//! | `Mum`              | Maximal unique match across documents                |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **DerivedArray**: `values.len() == n`; `placeholder`, when set, is `< n`
//!   and marks a slot whose value is a convention (LCP[0]), not a measurement.
//! - **CompressibleRun**: `start < end`, every step from `start` to `end`
//!   equals `direction.step()`, and `placeholder ∉ [start, end]`.
//! - **Mum**: `offsets.len()` = number of documents, `length > 0`,
//!   `rows.len()` = number of documents.

use std::ops::Range;

use serde::{Deserialize, Serialize};

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Flags for one `analyze` request.
///
/// The record is immutable once handed to [`crate::analyze`] and is copied
/// into each stage that needs it. Missing fields deserialize to `false`:
///
/// ```
/// # use bwt_suite::AnalyzeOptions;
/// let options: AnalyzeOptions = serde_json::from_str(r#"{"show_mums": true}"#).unwrap();
/// assert!(options.show_mums);
/// assert!(!options.show_thresholds);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzeOptions {
    /// Build the per-symbol threshold table.
    pub show_thresholds: bool,
    /// Treat the input as `$`-separated documents and find MUMs.
    pub show_mums: bool,
    /// Rendering hint only; carried so snapshots are keyed by the full request.
    pub show_guidelines: bool,
}

impl AnalyzeOptions {
    pub fn with_thresholds(mut self, enabled: bool) -> Self {
        self.show_thresholds = enabled;
        self
    }

    pub fn with_mums(mut self, enabled: bool) -> Self {
        self.show_mums = enabled;
        self
    }

    pub fn with_guidelines(mut self, enabled: bool) -> Self {
        self.show_guidelines = enabled;
        self
    }
}

// =============================================================================
// DERIVED ARRAYS
// =============================================================================

/// Which index an array is addressed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexSpace {
    /// Indexed by row of the sorted matrix (SA order).
    Lex,
    /// Indexed by offset into the text.
    Text,
}

/// Names every integer-valued array the suite derives.
///
/// Ordering follows declaration order, so maps keyed by `ArrayKind` iterate
/// deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ArrayKind {
    Sa,
    Isa,
    Lf,
    Fl,
    Phi,
    PhiInverse,
    Lcp,
    Lcs,
    Plcp,
    Plcs,
}

impl ArrayKind {
    /// Every kind, in declaration order.
    pub const ALL: [ArrayKind; 10] = [
        ArrayKind::Sa,
        ArrayKind::Isa,
        ArrayKind::Lf,
        ArrayKind::Fl,
        ArrayKind::Phi,
        ArrayKind::PhiInverse,
        ArrayKind::Lcp,
        ArrayKind::Lcs,
        ArrayKind::Plcp,
        ArrayKind::Plcs,
    ];

    /// Kinds whose ±1 stretches are highlighted.
    pub const COMPRESSIBLE: [ArrayKind; 6] = [
        ArrayKind::Lf,
        ArrayKind::Fl,
        ArrayKind::Phi,
        ArrayKind::PhiInverse,
        ArrayKind::Plcp,
        ArrayKind::Plcs,
    ];

    /// Short label as printed next to the array.
    pub fn label(self) -> &'static str {
        match self {
            ArrayKind::Sa => "SA",
            ArrayKind::Isa => "ISA",
            ArrayKind::Lf => "LF",
            ArrayKind::Fl => "FL",
            ArrayKind::Phi => "φ",
            ArrayKind::PhiInverse => "φ⁻¹",
            ArrayKind::Lcp => "LCP",
            ArrayKind::Lcs => "LCS",
            ArrayKind::Plcp => "PLCP",
            ArrayKind::Plcs => "PLCS",
        }
    }

    pub fn space(self) -> IndexSpace {
        match self {
            ArrayKind::Sa | ArrayKind::Lf | ArrayKind::Fl | ArrayKind::Lcp | ArrayKind::Lcs => {
                IndexSpace::Lex
            }
            ArrayKind::Isa
            | ArrayKind::Phi
            | ArrayKind::PhiInverse
            | ArrayKind::Plcp
            | ArrayKind::Plcs => IndexSpace::Text,
        }
    }

    pub fn is_compressible_eligible(self) -> bool {
        Self::COMPRESSIBLE.contains(&self)
    }
}

impl std::fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One tagged integer array.
///
/// The run analyzer and any renderer work over `values` and use `kind` for
/// labelling; nothing dispatches on strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedArray {
    kind: ArrayKind,
    values: Vec<usize>,
    placeholder: Option<usize>,
}

impl DerivedArray {
    pub fn new(kind: ArrayKind, values: Vec<usize>) -> Self {
        Self {
            kind,
            values,
            placeholder: None,
        }
    }

    /// Mark `position` as holding a conventional value rather than a measured one.
    pub fn with_placeholder(mut self, position: usize) -> Self {
        debug_assert!(position < self.values.len());
        self.placeholder = Some(position);
        self
    }

    #[inline]
    pub fn kind(&self) -> ArrayKind {
        self.kind
    }

    #[inline]
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Slot whose value is only a convention (the `LCP[0] = 0` family).
    #[inline]
    pub fn placeholder(&self) -> Option<usize> {
        self.placeholder
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }
}

impl std::ops::Index<usize> for DerivedArray {
    type Output = usize;

    fn index(&self, index: usize) -> &usize {
        &self.values[index]
    }
}

// =============================================================================
// COMPRESSIBLE RUNS
// =============================================================================

/// Direction of a compressible run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    /// Classify the step from `from` to `to`, if it is exactly ±1.
    #[inline]
    pub fn of_step(from: usize, to: usize) -> Option<Self> {
        if from.checked_add(1) == Some(to) {
            Some(Direction::Increasing)
        } else if from.checked_sub(1) == Some(to) {
            Some(Direction::Decreasing)
        } else {
            None
        }
    }

    /// Signed step between consecutive values.
    pub fn step(self) -> isize {
        match self {
            Direction::Increasing => 1,
            Direction::Decreasing => -1,
        }
    }
}

/// Maximal stretch `[start, end]` (inclusive) where values move by a constant ±1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompressibleRun {
    pub array: ArrayKind,
    pub start: usize,
    pub end: usize,
    pub direction: Direction,
}

impl CompressibleRun {
    /// Number of elements covered, always at least 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        (self.start..=self.end).contains(&index)
    }
}

// =============================================================================
// THRESHOLDS
// =============================================================================

/// Which way to jump from a row to reach the nearest row carrying a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JumpDirection {
    /// Toward smaller rows (`^`).
    Up,
    /// Toward larger rows (`v`).
    Down,
    /// Both sides keep the same prefix (`=`).
    Either,
}

impl JumpDirection {
    /// One-character marker for plain-text output.
    pub fn marker(self) -> char {
        match self {
            JumpDirection::Up => '^',
            JumpDirection::Down => 'v',
            JumpDirection::Either => '=',
        }
    }
}

/// One threshold cell for symbol `c` at row `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Threshold {
    /// `BWT[i] == c`; no jump needed.
    Match,
    /// Nearest `c` is reached by jumping in `direction`, keeping `lcp` symbols
    /// of the current match.
    Jump { lcp: usize, direction: JumpDirection },
    /// `c` does not occur in the BWT at all.
    Unreachable,
}

impl Threshold {
    /// False only for [`Threshold::Unreachable`].
    #[inline]
    pub fn is_finite(&self) -> bool {
        !matches!(self, Threshold::Unreachable)
    }

    /// LCP kept by the jump, if a jump is needed.
    #[inline]
    pub fn lcp(&self) -> Option<usize> {
        match self {
            Threshold::Jump { lcp, .. } => Some(*lcp),
            _ => None,
        }
    }
}

/// All n threshold cells for one alphabet symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdColumn {
    pub symbol: char,
    pub cells: Vec<Threshold>,
}

// =============================================================================
// MAXIMAL UNIQUE MATCHES
// =============================================================================

/// A substring occurring exactly once in every document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mum {
    /// Half-open window of SA rows, one row per document.
    pub rows: Range<usize>,
    /// `offsets[d]` = text offset where the match starts inside document `d`.
    pub offsets: Vec<usize>,
    /// Shared length, the minimum LCP across the window interior.
    pub length: usize,
}
