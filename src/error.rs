// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input validation errors.
//!
//! Everything here is detected before a single array is built. There are no
//! partial results: `analyze` either hands back a complete [`crate::Analysis`]
//! or one of these.

use thiserror::Error;

/// Why an input string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than two symbols. A terminator alone has no BWT worth drawing.
    #[error("input has {len} symbol(s), at least 2 are required")]
    TooShort { len: usize },

    /// The last symbol is not `$` or `#`.
    #[error("input must end in a terminator ('$' or '#'), found {found:?}")]
    MissingTerminator { found: char },

    /// The `$`-separated documents and the closing `#` do not line up.
    #[error("malformed document set: {0}")]
    MalformedDocumentSet(#[from] DocumentSetError),
}

/// Structural problems with a multi-document string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentSetError {
    /// MUM detection needs at least two `$`-terminated documents.
    #[error("MUM detection needs at least 2 documents, found {found}")]
    TooFewDocuments { found: usize },

    /// `$` occurs more than once but the string does not end in `#`.
    #[error("'$' repeats, so the string must be closed by '#'")]
    OuterTerminatorMissing,

    /// `#` occurs somewhere other than the last position.
    #[error("'#' may only appear as the last symbol, found at offset {position}")]
    OuterTerminatorMisplaced { position: usize },

    /// Symbols sit between the last `$` and the closing `#`.
    #[error("the last document is not terminated by '$' before '#'")]
    UnterminatedDocument,
}

/// Result alias for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
