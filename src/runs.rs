// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Compressible runs: maximal stretches that move by a constant ±1.
//!
//! These stretches are what run-length BWT indexes (move structures, the
//! r-index) exploit: inside a run, LF or φ is one stored value plus an offset.
//!
//! ```text
//! LF:   1  5  6  2  0  3  4
//!          └──┘        └──┘     two increasing runs, rows 1..=2 and 5..=6
//! PLCP: 3  2  1  1  0  0  0
//!       └─────┘  └──┘           decreasing runs, offsets 0..=2 and 3..=4
//! ```
//!
//! # Scan
//!
//! Left to right. A run opens on the first ±1 step, extends while the same
//! step repeats, and closes when it breaks or the array ends. The next scan
//! resumes after the run's last element, so runs never overlap and a run is
//! never re-split once grown. Single elements are not runs.
//!
//! The placeholder slot of a `DerivedArray` (LCP[0] and its permuted image)
//! splits the array: no run may include it.

use tracing::debug;

use crate::types::{CompressibleRun, DerivedArray, Direction};

/// Find the maximal compressible runs of one tagged array.
pub fn compressible_runs(array: &DerivedArray) -> Vec<CompressibleRun> {
    let values = array.values();
    let blocked = |index: usize| array.placeholder() == Some(index);
    let step_at = |index: usize| -> Option<Direction> {
        if blocked(index) || blocked(index + 1) {
            return None;
        }
        Direction::of_step(values[index], values[index + 1])
    };

    let mut runs = Vec::new();
    let mut start = 0;

    while start + 1 < values.len() {
        let Some(direction) = step_at(start) else {
            start += 1;
            continue;
        };

        let mut end = start + 1;
        while end + 1 < values.len() && step_at(end) == Some(direction) {
            end += 1;
        }

        runs.push(CompressibleRun {
            array: array.kind(),
            start,
            end,
            direction,
        });
        start = end + 1;
    }

    debug!(
        kind = %array.kind(),
        len = values.len(),
        runs = runs.len(),
        "found compressible runs"
    );

    runs
}

/// Does `run` satisfy every property a compressible run must have?
///
/// Checks length, constant step, placeholder exclusion, and that it cannot be
/// grown to the right. Growing left is ruled out separately by
/// [`runs_are_maximal`], which knows about the preceding run.
pub fn is_well_formed(run: &CompressibleRun, array: &DerivedArray) -> bool {
    let values = array.values();
    if run.start >= run.end || run.end >= values.len() || run.array != array.kind() {
        return false;
    }
    if array.placeholder().is_some_and(|p| run.contains(p)) {
        return false;
    }
    let constant = (run.start..run.end)
        .all(|i| Direction::of_step(values[i], values[i + 1]) == Some(run.direction));
    let closed_right = run.end + 1 == values.len()
        || array.placeholder() == Some(run.end + 1)
        || Direction::of_step(values[run.end], values[run.end + 1]) != Some(run.direction);
    constant && closed_right
}

/// Runs are sorted, disjoint, and none can be grown leftward into free space.
///
/// The element just before a run may continue its step only if that element
/// already ends the previous run.
pub fn runs_are_maximal(runs: &[CompressibleRun], array: &DerivedArray) -> bool {
    let values = array.values();
    let mut previous_end: Option<usize> = None;

    for run in runs {
        if previous_end.is_some_and(|end| end >= run.start) {
            return false;
        }
        if run.start > 0 {
            let before = run.start - 1;
            let extends = array.placeholder() != Some(before)
                && Direction::of_step(values[before], values[run.start]) == Some(run.direction);
            if extends && previous_end != Some(before) {
                return false;
            }
        }
        previous_end = Some(run.end);
    }

    true
}
