// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-symbol threshold columns.
//!
//! During backward search (or matching statistics) you sit on row `i` and need
//! to extend by symbol `c`, but `BWT[i] != c`. You must jump to a row whose
//! BWT symbol *is* `c`, and the match you keep is the LCP between the two
//! rows: the minimum LCP value crossed on the way. The column for `c` records,
//! for every row, which nearby `c`-row keeps more.
//!
//! ```text
//! row  BWT  LCP     walk up to nearest c        walk down to nearest c
//!  j    c    ·      ─┐
//!  ·    x    4       │ min(LCP[j+1..=i])
//!  i    y    2      ─┘                          ─┐
//!  ·    z    1                                   │ min(LCP[i+1..=k])
//!  k    c    3                                  ─┘
//! ```
//!
//! Cells: `Match` when `BWT[i] == c`; `Jump { lcp, direction }` toward the
//! side keeping the larger LCP (`Either` on a tie); `Unreachable` when `c`
//! never occurs. Columns are ordered by symbol rank.

use serde::Serialize;
use tracing::debug;

use crate::alphabet::symbol_rank;
use crate::types::{JumpDirection, Threshold, ThresholdColumn};

/// Threshold columns, one per alphabet symbol, lowest rank first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThresholdTable {
    columns: Vec<ThresholdColumn>,
}

impl ThresholdTable {
    #[inline]
    pub fn columns(&self) -> &[ThresholdColumn] {
        &self.columns
    }

    /// Column for `symbol`, if the symbol is part of the alphabet.
    pub fn column(&self, symbol: char) -> Option<&ThresholdColumn> {
        self.columns.iter().find(|column| column.symbol == symbol)
    }

    /// Single cell lookup.
    pub fn get(&self, symbol: char, row: usize) -> Option<Threshold> {
        self.column(symbol)
            .and_then(|column| column.cells.get(row).copied())
    }
}

/// Build threshold columns for every symbol in `alphabet`.
pub fn threshold_table(alphabet: &[char], bwt: &[char], lcp: &[usize]) -> ThresholdTable {
    let mut symbols = alphabet.to_vec();
    symbols.sort_by_key(|&c| symbol_rank(c));
    symbols.dedup();

    let columns: Vec<ThresholdColumn> = symbols
        .into_iter()
        .map(|symbol| ThresholdColumn {
            symbol,
            cells: threshold_column(symbol, bwt, lcp),
        })
        .collect();

    debug!(columns = columns.len(), rows = bwt.len(), "built threshold table");

    ThresholdTable { columns }
}

/// One column: the threshold for `symbol` at every row.
pub fn threshold_column(symbol: char, bwt: &[char], lcp: &[usize]) -> Vec<Threshold> {
    (0..bwt.len())
        .map(|row| threshold_at(symbol, row, bwt, lcp))
        .collect()
}

fn threshold_at(symbol: char, row: usize, bwt: &[char], lcp: &[usize]) -> Threshold {
    if bwt[row] == symbol {
        return Threshold::Match;
    }

    // LCP between rows a < b is the minimum of LCP[a+1..=b].
    let up = (0..row)
        .rev()
        .find(|&j| bwt[j] == symbol)
        .map(|j| min_lcp(&lcp[j + 1..=row]));
    let down = (row + 1..bwt.len())
        .find(|&k| bwt[k] == symbol)
        .map(|k| min_lcp(&lcp[row + 1..=k]));

    match (up, down) {
        (None, None) => Threshold::Unreachable,
        (Some(lcp), None) => Threshold::Jump {
            lcp,
            direction: JumpDirection::Up,
        },
        (None, Some(lcp)) => Threshold::Jump {
            lcp,
            direction: JumpDirection::Down,
        },
        (Some(up), Some(down)) => {
            let direction = match up.cmp(&down) {
                std::cmp::Ordering::Greater => JumpDirection::Up,
                std::cmp::Ordering::Less => JumpDirection::Down,
                std::cmp::Ordering::Equal => JumpDirection::Either,
            };
            Threshold::Jump {
                lcp: up.max(down),
                direction,
            }
        }
    }
}

#[inline]
fn min_lcp(window: &[usize]) -> usize {
    window.iter().copied().min().unwrap_or(0)
}
