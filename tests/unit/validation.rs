//! Input validation: every rejection happens before any array is built.

use super::common::{analyze_ok, init_tracing};
use bwt_suite::{analyze, AnalyzeOptions, DocumentSetError, ValidationError};

fn reject(input: &str, options: AnalyzeOptions) -> ValidationError {
    init_tracing();
    match analyze(input, options) {
        Ok(_) => panic!("{input:?} should be rejected"),
        Err(err) => err,
    }
}

#[test]
fn too_short_inputs() {
    assert_eq!(
        reject("", AnalyzeOptions::default()),
        ValidationError::TooShort { len: 0 }
    );
    assert_eq!(
        reject("#", AnalyzeOptions::default()),
        ValidationError::TooShort { len: 1 }
    );
}

#[test]
fn length_counts_symbols_not_bytes() {
    // Two symbols, four bytes.
    let analysis = analyze_ok("é$", AnalyzeOptions::default());
    assert_eq!(analysis.len(), 2);
    assert_eq!(
        reject("é", AnalyzeOptions::default()),
        ValidationError::TooShort { len: 1 }
    );
}

#[test]
fn missing_terminator() {
    assert_eq!(
        reject("banana", AnalyzeOptions::default()),
        ValidationError::MissingTerminator { found: 'a' }
    );
}

#[test]
fn malformed_document_sets() {
    let cases = [
        ("a$b$", DocumentSetError::OuterTerminatorMissing),
        ("a#b$", DocumentSetError::OuterTerminatorMisplaced { position: 1 }),
        ("a$b#", DocumentSetError::UnterminatedDocument),
    ];
    for (input, expected) in cases {
        assert_eq!(
            reject(input, AnalyzeOptions::default()),
            ValidationError::MalformedDocumentSet(expected),
            "{input}"
        );
    }
}

#[test]
fn mum_mode_requires_two_documents() {
    let options = AnalyzeOptions::default().with_mums(true);
    assert_eq!(
        reject("GATTACA$", options),
        DocumentSetError::TooFewDocuments { found: 1 }.into()
    );
    assert_eq!(
        reject("abc#", options),
        DocumentSetError::TooFewDocuments { found: 1 }.into()
    );
}

#[test]
fn same_text_is_fine_without_mum_mode() {
    let analysis = analyze_ok("GATTACA$", AnalyzeOptions::default());
    assert_eq!(analysis.text().num_docs(), 1);
    assert!(analysis.mums().is_none());
}

#[test]
fn terminator_shape_is_checked_before_document_count() {
    // Misplaced '#' wins over "too few documents".
    assert_eq!(
        reject("ab#c$", AnalyzeOptions::default().with_mums(true)),
        DocumentSetError::OuterTerminatorMisplaced { position: 2 }.into()
    );
}

#[test]
fn error_messages_are_human_readable() {
    let err = reject("abc", AnalyzeOptions::default());
    assert_eq!(
        err.to_string(),
        "input must end in a terminator ('$' or '#'), found 'c'"
    );

    let err = reject("GATTACA$", AnalyzeOptions::default().with_mums(true));
    assert_eq!(
        err.to_string(),
        "malformed document set: MUM detection needs at least 2 documents, found 1"
    );
}

#[test]
fn options_load_from_partial_json() {
    let options: AnalyzeOptions =
        serde_json::from_str(r#"{"show_thresholds": true}"#).expect("valid options");
    assert_eq!(options, AnalyzeOptions::default().with_thresholds(true));

    let options: AnalyzeOptions = serde_json::from_str("{}").expect("valid options");
    assert_eq!(options, AnalyzeOptions::default());
}
