use super::common::*;
use crate::screening::document::{CandidateDocument, SourceKind};
use crate::screening::extract::ExtractorConfig;
use crate::screening::profile::RequirementProfile;
use crate::screening::service::{ScreeningError, ScreeningService};
use crate::screening::source::MemoryTextSource;
use crate::screening::vocabulary::Vocabulary;

#[test]
fn empty_vocabulary_aborts_before_processing() {
    let error = ScreeningService::new(&Vocabulary::default(), ExtractorConfig::default(), 60.0)
        .err()
        .expect("empty vocabulary rejected");
    assert!(matches!(error, ScreeningError::EmptyVocabulary));
}

#[test]
fn empty_requirement_aborts_before_processing() {
    let service = service(60.0);
    let error = service
        .screen(&[jane_doe_document()], &RequirementProfile::default())
        .err()
        .expect("empty requirement rejected");
    assert!(matches!(error, ScreeningError::EmptyRequirement));
}

#[test]
fn unusable_documents_are_counted_not_failed() {
    let service = service(60.0);
    let documents = vec![
        CandidateDocument::uploaded("garbled", "%%%%"),
        CandidateDocument::uploaded("strong", finance_resume_text()),
    ];

    let report = service
        .screen(&documents, &requirement())
        .expect("batch screens");

    assert_eq!(report.summary.total_candidates, 2);
    assert_eq!(report.summary.matched_count, 1);

    let garbled = &report.candidates[0];
    assert_eq!(garbled.document_id, "garbled");
    assert!(garbled.profile.name.is_none());
    assert_eq!(garbled.result.match_percentage, 0.0);
}

#[test]
fn candidate_order_follows_document_order() {
    let service = service(60.0);
    let documents = vec![
        CandidateDocument::uploaded("b", "text"),
        CandidateDocument::uploaded("a", "text"),
        CandidateDocument::from_drive("c", "text"),
    ];

    let report = service
        .screen(&documents, &requirement())
        .expect("batch screens");

    let ids: Vec<&str> = report
        .candidates
        .iter()
        .map(|candidate| candidate.document_id.as_str())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);
    assert_eq!(report.candidates[2].source, SourceKind::Drive);
}

#[test]
fn screen_source_loads_then_screens() {
    let service = service(60.0);
    let source = MemoryTextSource::new(vec![jane_doe_document()]);

    let mut requirement = requirement();
    requirement.domains.clear();

    let report = service
        .screen_source(&source, &requirement)
        .expect("batch screens");

    assert_eq!(report.summary.total_candidates, 1);
    // Python and SQL match, Excel is missing: 2 of 3 required labels.
    let candidate = &report.candidates[0];
    assert!((candidate.result.match_percentage - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn threshold_separates_matched_from_unmatched() {
    let service = service(90.0);
    let documents = vec![
        CandidateDocument::uploaded("full", finance_resume_text()),
        CandidateDocument::uploaded("partial", "Jordan Lee\nfinance background, knows Python"),
    ];

    let report = service
        .screen(&documents, &requirement())
        .expect("batch screens");

    assert_eq!(report.summary.total_candidates, 2);
    assert_eq!(report.summary.matched_count, 1);
    assert_eq!(report.threshold, 90.0);
}

#[test]
fn empty_batch_is_a_valid_run() {
    let service = service(60.0);
    let report = service.screen(&[], &requirement()).expect("batch screens");
    assert_eq!(report.summary.total_candidates, 0);
    assert_eq!(report.summary.average_match_percentage, 0.0);
}
