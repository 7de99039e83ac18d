// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts and a full invariant audit.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Runtime contracts** that panic in debug builds when a builder produces
//!    an array that breaks its defining relation. Zero-cost in release, but
//!    catch bugs the moment tests run.
//!
//! 2. **A full audit** (`verify_analysis`, `VerifiedAnalysis`) that re-derives
//!    every cross-array relation of a finished analysis and returns a typed
//!    `InvariantError` for the first one that fails, in any build.
//!
//! Use both. The contracts pinpoint the builder that went wrong. The audit
//! checks the assembled result end to end.

mod types;
pub mod contracts;

pub use types::*;
