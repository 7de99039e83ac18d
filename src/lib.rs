// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burrows-Wheeler array suite with checked cross-array invariants.
//!
//! Give it a terminated string and it derives the whole family of arrays that
//! compressed text indexes are built from, plus the annotations used to teach
//! and debug them: compressible runs, per-symbol LCP thresholds, and maximal
//! unique matches across documents.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────────────┐
//! │ alphabet.rs │────▶│  index.rs    │────▶│        derive.rs         │
//! │ (Text,      │     │ (SA, ISA)    │     │ (BWT, LF, FL, φ, φ⁻¹,    │
//! │  ranks)     │     │              │     │  LCP, LCS, PLCP, PLCS)   │
//! └─────────────┘     └──────────────┘     └──────────────────────────┘
//!                                                       │
//!                     ┌─────────────────────────────────┼──────────────┐
//!                     ▼                                 ▼              ▼
//!              ┌─────────────┐                 ┌───────────────┐ ┌──────────┐
//!              │   runs.rs   │                 │ thresholds.rs │ │ mums.rs  │
//!              └─────────────┘                 └───────────────┘ └──────────┘
//!                     │                                 │              │
//!                     ▼                                 ▼              ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     suite.rs  (analyze → Analysis)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │     verify/  (debug contracts inside builders, full audit after)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Rust Module   | Produces                                   | Key Properties               |
//! |---------------|--------------------------------------------|------------------------------|
//! | `alphabet`    | `Text`, symbol ranks, document map         | `#` < `$` < everything else  |
//! | `index`       | SA, ISA                                    | Sorted, ISA inverts SA       |
//! | `derive`      | BWT and the eight derived integer arrays   | LF/FL inverse, LF one cycle  |
//! | `runs`        | Compressible runs per array                | Maximal, disjoint, ±1 steps  |
//! | `thresholds`  | One column per alphabet symbol             | Match iff BWT agrees         |
//! | `mums`        | Document array, MUMs                       | One row per document         |
//! | `suite`       | `Analysis`                                 | Deterministic, immutable     |
//! | `verify`      | Contracts, `verify_analysis`               | Every relation re-derived    |
//!
//! # Usage
//!
//! ```
//! use bwt_suite::{analyze, AnalyzeOptions, ArrayKind};
//!
//! let options = AnalyzeOptions::default().with_mums(true);
//! let analysis = analyze("how$now$brown$cow$#", options)?;
//!
//! assert_eq!(analysis.bwt_string(), "$wwnw$$#w$cnhrboooo");
//! assert!(!analysis.runs(ArrayKind::Lf).is_empty());
//!
//! let mums = analysis.mums().unwrap_or_default();
//! assert_eq!(mums.len(), 1);
//! assert_eq!(analysis.mum_text(&mums[0]), "ow");
//! # Ok::<(), bwt_suite::ValidationError>(())
//! ```

// Module declarations
pub mod alphabet;
pub mod derive;
mod error;
pub mod index;
pub mod mums;
pub mod runs;
mod suite;
pub mod testing;
pub mod thresholds;
mod types;
mod utils;
pub mod verify;

// Re-exports for public API
pub use alphabet::{symbol_rank, Text, DOC_TERMINATOR, OUTER_TERMINATOR};
pub use derive::{BwtRun, CoreArrays};
pub use error::{DocumentSetError, ValidationError};
pub use index::SuffixIndex;
pub use runs::compressible_runs;
pub use suite::{analyze, Analysis};
pub use thresholds::ThresholdTable;
pub use types::{
    AnalyzeOptions, ArrayKind, CompressibleRun, DerivedArray, Direction, IndexSpace,
    JumpDirection, Mum, Threshold, ThresholdColumn,
};
pub use verify::{verify_analysis, InvariantError, VerificationReport, VerifiedAnalysis};
