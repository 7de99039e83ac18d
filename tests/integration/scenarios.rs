//! Whole-pipeline scenarios: everything a renderer would ask for, in one call.

use super::common::{analyze_ok, assert_analysis_well_formed, full_options};
use bwt_suite::{
    analyze, AnalyzeOptions, ArrayKind, Direction, Threshold, VerifiedAnalysis,
};

#[test]
fn gattaca_with_thresholds() {
    let analysis = analyze_ok("GATTACA$", AnalyzeOptions::default().with_thresholds(true));
    assert_analysis_well_formed(&analysis);

    assert_eq!(analysis.sa(), &[7, 6, 4, 1, 5, 0, 3, 2]);
    assert_eq!(analysis.bwt_string(), "ACTGA$TA");
    assert_eq!(analysis.lcp(), &[0, 0, 1, 1, 0, 0, 0, 1]);

    let table = analysis.thresholds().expect("thresholds requested");
    let a = table.column('A').expect("A occurs");
    assert!(a.cells.iter().all(Threshold::is_finite));
    assert!(analysis.mums().is_none());
}

#[test]
fn how_now_brown_cow_with_everything() {
    let input = "how$now$brown$cow$#";
    let analysis = analyze_ok(input, full_options(input));
    assert_analysis_well_formed(&analysis);

    let mums = analysis.mums().expect("MUMs requested");
    assert_eq!(mums.len(), 1);
    assert_eq!(analysis.mum_text(&mums[0]), "ow");
    assert_eq!(mums[0].offsets, vec![1, 5, 10, 15]);

    assert!(analysis.thresholds().is_some());
    assert!(analysis.options().show_guidelines);
    assert_eq!(analysis.reconstruct_text(), input);
}

#[test]
fn three_genomes() {
    let input = "gattacat$gattacgt$attcgt$#";
    let analysis = analyze_ok(input, AnalyzeOptions::default().with_mums(true));
    let verified = VerifiedAnalysis::new(analysis).expect("invariants hold");

    let texts: Vec<String> = verified
        .analysis()
        .mums()
        .expect("MUMs requested")
        .iter()
        .map(|mum| verified.analysis().mum_text(mum))
        .collect();
    assert_eq!(texts, vec!["att", "c", "t$"]);
    assert!(verified.report().checks.contains(&"mums"));
}

#[test]
fn minimal_boundary_input() {
    let analysis = analyze_ok("a$", full_options("a$"));
    assert_analysis_well_formed(&analysis);
    assert_eq!(analysis.len(), 2);
    assert!(!analysis.sa().is_empty());
    assert_eq!(analysis.bwt_string(), "a$");
    assert_eq!(
        analysis.runs(ArrayKind::Phi).first().map(|run| run.direction),
        Some(Direction::Decreasing)
    );
}

#[test]
fn idempotent_models() {
    for input in ["abaaba$", "how$now$brown$cow$#", "a$", "mississippi$"] {
        let options = full_options(input);
        let first = analyze(input, options);
        let second = analyze(input, options);
        assert_eq!(first, second, "{input}");
    }
}

#[test]
fn analyses_move_across_threads() {
    let handles: Vec<_> = ["banana$", "abracadabra$", "ab$ba$#"]
        .into_iter()
        .map(|input| std::thread::spawn(move || analyze(input, full_options(input))))
        .collect();
    for handle in handles {
        let analysis = handle.join().expect("thread finished").expect("valid input");
        assert_analysis_well_formed(&analysis);
    }
}

#[test]
fn rejected_input_never_yields_partial_state() {
    let result = analyze("no terminator", AnalyzeOptions::default().with_thresholds(true));
    assert!(result.is_err());
}
