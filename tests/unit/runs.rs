//! Compressible runs as reported by the output model.

use super::common::analyze_ok;
use bwt_suite::{compressible_runs, AnalyzeOptions, ArrayKind, DerivedArray, Direction};

fn spans(analysis: &bwt_suite::Analysis, kind: ArrayKind) -> Vec<(usize, usize, Direction)> {
    analysis
        .runs(kind)
        .iter()
        .map(|run| (run.start, run.end, run.direction))
        .collect()
}

#[test]
fn abaaba_runs_per_array() {
    let analysis = analyze_ok("abaaba$", AnalyzeOptions::default());

    // LF 1 5 6 2 0 3 4
    assert_eq!(
        spans(&analysis, ArrayKind::Lf),
        vec![(1, 2, Direction::Increasing), (5, 6, Direction::Increasing)]
    );
    // PLCP 3 2 1 1 0 0 0, offset 6 is the placeholder
    assert_eq!(
        spans(&analysis, ArrayKind::Plcp),
        vec![(0, 2, Direction::Decreasing), (3, 4, Direction::Decreasing)]
    );
    // PLCS 0 1 2 0 0 0 0
    assert_eq!(
        spans(&analysis, ArrayKind::Plcs),
        vec![(0, 2, Direction::Increasing)]
    );
}

#[test]
fn permutation_arrays_always_have_run_sets() {
    let analysis = analyze_ok("a$", AnalyzeOptions::default());
    for kind in [
        ArrayKind::Lf,
        ArrayKind::Fl,
        ArrayKind::Phi,
        ArrayKind::PhiInverse,
    ] {
        assert!(analysis.all_runs().contains_key(&kind), "{kind}");
    }
    // a$: LF = [1, 0] is one decreasing step.
    assert_eq!(
        spans(&analysis, ArrayKind::Lf),
        vec![(0, 1, Direction::Decreasing)]
    );
}

#[test]
fn lex_lcp_is_not_highlighted() {
    let analysis = analyze_ok("abaaba$", AnalyzeOptions::default());
    assert!(!analysis.all_runs().contains_key(&ArrayKind::Lcp));
    assert!(analysis.runs(ArrayKind::Lcp).is_empty());
}

#[test]
fn runs_work_on_any_tagged_array() {
    let array = DerivedArray::new(ArrayKind::Phi, vec![9, 8, 7, 3, 4, 5, 6, 0]);
    let runs = compressible_runs(&array);
    assert_eq!(runs.len(), 2);
    assert_eq!((runs[0].start, runs[0].end), (0, 2));
    assert_eq!(runs[0].direction, Direction::Decreasing);
    assert_eq!((runs[1].start, runs[1].end), (3, 6));
    assert_eq!(runs[1].len(), 4);
    assert!(runs.iter().all(|run| run.array == ArrayKind::Phi));
}
