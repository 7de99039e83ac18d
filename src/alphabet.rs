// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminators, symbol ranks, and input validation.
//!
//! Suffix order is defined over *ranks*, never raw code points. The rank map is
//! injective and puts both terminators below everything else:
//!
//! ```text
//!   '#'  → 0          (closes a multi-document string)
//!   '$'  → 1          (closes one document)
//!   c    → c + 2      (every other Unicode scalar value)
//! ```
//!
//! So `"a$" < "a"` and `"#" < "$"` no matter which characters surround them,
//! even for symbols like `'!'` whose code point sits below `'$'`.
//!
//! # Accepted shapes
//!
//! | Input                    | Documents | Notes                                 |
//! |--------------------------|-----------|---------------------------------------|
//! | `GATTACA$`               | 1         | single document                       |
//! | `abc#`                   | 1         | `#` may close a single document too   |
//! | `how$now$brown$cow$#`    | 4         | every document ends in `$`, then `#`  |

use serde::Serialize;

use crate::error::{DocumentSetError, Result, ValidationError};
use crate::types::AnalyzeOptions;

/// Closes one document inside a (possibly multi-document) string.
pub const DOC_TERMINATOR: char = '$';

/// Closes a whole multi-document string.
pub const OUTER_TERMINATOR: char = '#';

/// Map a symbol onto its position in the total order.
#[inline]
pub fn symbol_rank(c: char) -> u32 {
    match c {
        OUTER_TERMINATOR => 0,
        DOC_TERMINATOR => 1,
        other => other as u32 + 2,
    }
}

/// Is this one of the two reserved terminators?
#[inline]
pub fn is_terminator(c: char) -> bool {
    c == DOC_TERMINATOR || c == OUTER_TERMINATOR
}

/// A validated input string.
///
/// Holds the symbols, their ranks, and the document each text offset belongs
/// to. Construct it with [`Text::parse`]; once built, every invariant the
/// builders rely on holds:
///
/// - `len() >= 2`
/// - the last symbol is a terminator and is the unique lowest-ranked symbol
/// - `#`, if present, is last; `$` repeats only when `#` closes the string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Text {
    symbols: Vec<char>,
    ranks: Vec<u32>,
    /// `doc_of[p]` = document containing offset p, `None` for a closing `#`
    /// that follows `$`-terminated documents.
    doc_of: Vec<Option<usize>>,
    num_docs: usize,
}

impl Text {
    /// Validate `input` against the shape `options` requires.
    pub fn parse(input: &str, options: &AnalyzeOptions) -> Result<Self> {
        let symbols: Vec<char> = input.chars().collect();
        let n = symbols.len();

        if n < 2 {
            return Err(ValidationError::TooShort { len: n });
        }

        let last = symbols[n - 1];
        if !is_terminator(last) {
            return Err(ValidationError::MissingTerminator { found: last });
        }

        if let Some(position) = symbols[..n - 1]
            .iter()
            .position(|&c| c == OUTER_TERMINATOR)
        {
            return Err(DocumentSetError::OuterTerminatorMisplaced { position }.into());
        }

        let inner_docs = symbols.iter().filter(|&&c| c == DOC_TERMINATOR).count();

        if last == DOC_TERMINATOR && inner_docs > 1 {
            return Err(DocumentSetError::OuterTerminatorMissing.into());
        }

        if last == OUTER_TERMINATOR && inner_docs > 0 && symbols[n - 2] != DOC_TERMINATOR {
            return Err(DocumentSetError::UnterminatedDocument.into());
        }

        let (doc_of, num_docs) = assign_documents(&symbols);

        if options.show_mums && num_docs < 2 {
            return Err(DocumentSetError::TooFewDocuments { found: num_docs }.into());
        }

        let ranks = symbols.iter().map(|&c| symbol_rank(c)).collect();

        Ok(Self {
            symbols,
            ranks,
            doc_of,
            num_docs,
        })
    }

    /// Number of symbols, terminators included.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false for a validated text; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    #[inline]
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    #[inline]
    pub fn ranks(&self) -> &[u32] {
        &self.ranks
    }

    #[inline]
    pub fn symbol(&self, offset: usize) -> char {
        self.symbols[offset]
    }

    /// Number of documents: `$`-terminated segments, or 1 when there is no `$`.
    #[inline]
    pub fn num_docs(&self) -> usize {
        self.num_docs
    }

    /// Document containing text offset `offset`.
    #[inline]
    pub fn document_of(&self, offset: usize) -> Option<usize> {
        self.doc_of[offset]
    }

    /// Distinct symbols, lowest rank first.
    pub fn alphabet(&self) -> Vec<char> {
        let mut alphabet = self.symbols.clone();
        alphabet.sort_by_key(|&c| symbol_rank(c));
        alphabet.dedup();
        alphabet
    }
}

impl std::fmt::Display for Text {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// Documents are the `$`-terminated segments. A string without `$` is one
/// document. A closing `#` after `$`-terminated documents belongs to none.
fn assign_documents(symbols: &[char]) -> (Vec<Option<usize>>, usize) {
    let inner_docs = symbols.iter().filter(|&&c| c == DOC_TERMINATOR).count();
    if inner_docs == 0 {
        return (vec![Some(0); symbols.len()], 1);
    }

    let mut doc = 0;
    let doc_of = symbols
        .iter()
        .map(|&c| {
            let current = (doc < inner_docs).then_some(doc);
            if c == DOC_TERMINATOR {
                doc += 1;
            }
            current
        })
        .collect();
    (doc_of, inner_docs)
}
