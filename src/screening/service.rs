use serde::{Deserialize, Serialize};
use tracing::info;

use super::aggregate::{aggregate, BatchSummary};
use super::document::{CandidateDocument, SourceKind};
use super::extract::{Extractor, ExtractorBuildError, ExtractorConfig};
use super::matcher::{match_profile, MatchResult};
use super::profile::{ExtractedProfile, RequirementProfile};
use super::source::{SourceError, TextSource};
use super::vocabulary::Vocabulary;

/// Facade composing the extractor, matcher, and aggregator for one batch.
///
/// Construction fails fast on batch-invalidating configuration (an empty
/// vocabulary); per-candidate problems never fail a batch — unusable text
/// degrades to an empty profile and a 0% match.
pub struct ScreeningService {
    extractor: Extractor,
    threshold: f64,
}

impl ScreeningService {
    pub fn new(
        vocabulary: &Vocabulary,
        config: ExtractorConfig,
        threshold: f64,
    ) -> Result<Self, ScreeningError> {
        if vocabulary.is_empty() {
            return Err(ScreeningError::EmptyVocabulary);
        }

        Ok(Self {
            extractor: Extractor::new(vocabulary, config)?,
            threshold,
        })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Run one screening batch. Every document is extracted and matched
    /// independently; aggregation happens once all candidates are done.
    pub fn screen(
        &self,
        documents: &[CandidateDocument],
        requirement: &RequirementProfile,
    ) -> Result<ScreeningReport, ScreeningError> {
        if requirement.is_empty() {
            return Err(ScreeningError::EmptyRequirement);
        }

        let candidates: Vec<CandidateReport> = documents
            .iter()
            .map(|document| {
                let profile = self.extractor.extract(&document.text);
                let result = match_profile(&profile, requirement);
                CandidateReport {
                    document_id: document.id.clone(),
                    source: document.source,
                    profile,
                    result,
                }
            })
            .collect();

        let summary = aggregate(candidates.iter().map(|c| &c.result), self.threshold);
        info!(
            total = summary.total_candidates,
            matched = summary.matched_count,
            "screening batch complete"
        );

        Ok(ScreeningReport {
            threshold: self.threshold,
            candidates,
            summary,
        })
    }

    /// Convenience wrapper loading the batch from a [`TextSource`] first.
    pub fn screen_source(
        &self,
        source: &dyn TextSource,
        requirement: &RequirementProfile,
    ) -> Result<ScreeningReport, ScreeningError> {
        let documents = source.documents()?;
        self.screen(&documents, requirement)
    }
}

/// One candidate's triple for the report sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateReport {
    pub document_id: String,
    pub source: SourceKind,
    pub profile: ExtractedProfile,
    pub result: MatchResult,
}

/// The full output of one batch: per-candidate triples plus the summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningReport {
    pub threshold: f64,
    pub candidates: Vec<CandidateReport>,
    pub summary: BatchSummary,
}

/// Batch-level failures. All of these invalidate the run before any
/// candidate is processed.
#[derive(Debug, thiserror::Error)]
pub enum ScreeningError {
    #[error("vocabulary defines no domain, tool, or skill entries")]
    EmptyVocabulary,
    #[error("requirement profile specifies no criteria")]
    EmptyRequirement,
    #[error(transparent)]
    Extractor(#[from] ExtractorBuildError),
    #[error(transparent)]
    Source(#[from] SourceError),
}
