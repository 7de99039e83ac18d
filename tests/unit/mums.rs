//! MUM detection over the multi-document reference inputs.

use super::common::{analyze_ok, document_set, multi_document_fixtures};
use bwt_suite::{AnalyzeOptions, Mum};

fn mum_options() -> AnalyzeOptions {
    AnalyzeOptions::default().with_mums(true)
}

#[test]
fn reference_inputs_yield_exactly_the_expected_mums() {
    for (input, expected) in multi_document_fixtures() {
        let analysis = analyze_ok(input, mum_options());
        let mums = analysis.mums().expect("MUMs requested");
        let found: Vec<(String, std::ops::Range<usize>, Vec<usize>)> = mums
            .iter()
            .map(|mum| (analysis.mum_text(mum), mum.rows.clone(), mum.offsets.clone()))
            .collect();
        let expected: Vec<(String, std::ops::Range<usize>, Vec<usize>)> = expected
            .into_iter()
            .map(|(text, rows, offsets)| (text.to_string(), rows, offsets.to_vec()))
            .collect();
        assert_eq!(found, expected, "{input}");
    }
}

#[test]
fn how_now_brown_cow() {
    let analysis = analyze_ok("how$now$brown$cow$#", mum_options());
    let mums = analysis.mums().expect("MUMs requested");
    assert_eq!(
        mums,
        &[Mum {
            rows: 10..14,
            offsets: vec![1, 5, 10, 15],
            length: 2,
        }]
    );
    // The match is followed by different symbols in each document.
    let text = analysis.text().to_string();
    let following: Vec<char> = mums[0]
        .offsets
        .iter()
        .map(|&offset| text.chars().nth(offset + mums[0].length).unwrap_or('?'))
        .collect();
    assert_eq!(following, vec!['$', '$', 'n', '$']);
}

#[test]
fn length_is_min_lcp_over_window_interior() {
    let analysis = analyze_ok("gattacat$gattacgt$attcgt$#", mum_options());
    for mum in analysis.mums().expect("MUMs requested") {
        let interior = &analysis.lcp()[mum.rows.start + 1..mum.rows.end];
        assert_eq!(interior.iter().min().copied(), Some(mum.length));
    }
}

#[test]
fn each_document_contributes_once() {
    let analysis = analyze_ok(&document_set(&["abcab", "cabx", "zabc"]), mum_options());
    for mum in analysis.mums().expect("MUMs requested") {
        let mut docs: Vec<Option<usize>> = analysis.document_array()[mum.rows.clone()].to_vec();
        docs.sort();
        docs.dedup();
        assert_eq!(docs.len(), analysis.text().num_docs());
        assert!(docs.iter().all(Option::is_some));
    }
}

#[test]
fn repeated_substring_is_not_unique() {
    // "ab" occurs twice in the first document, so it cannot be a MUM.
    let analysis = analyze_ok(&document_set(&["abab", "ab"]), mum_options());
    let texts: Vec<String> = analysis
        .mums()
        .expect("MUMs requested")
        .iter()
        .map(|mum| analysis.mum_text(mum))
        .collect();
    assert!(!texts.iter().any(|text| text == "ab"), "{texts:?}");
}

#[test]
fn document_array_marks_the_outer_terminator() {
    let analysis = analyze_ok("ab$ab$#", mum_options());
    assert_eq!(analysis.document_array()[0], None);
    assert_eq!(
        analysis.document_array().iter().filter(|doc| doc.is_some()).count(),
        6
    );
}
