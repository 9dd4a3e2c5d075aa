//! Candidate résumé screening: ingestion seams, field extraction,
//! requirement matching, and batch aggregation.
//!
//! The engine is a pure per-batch transform. Documents flow through
//! [`Extractor::extract`] and [`match_profile`] independently of each other;
//! [`aggregate`] reduces the finished batch; the report module hands the
//! results to whatever sink presents them. Nothing in here holds state
//! between batches.

pub mod aggregate;
pub mod document;
pub mod extract;
pub mod matcher;
pub mod profile;
pub mod report;
pub mod router;
pub mod service;
pub mod source;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use aggregate::{aggregate, BatchSummary};
pub use document::{CandidateDocument, SourceKind};
pub use extract::{Extractor, ExtractorBuildError, ExtractorConfig};
pub use matcher::{match_profile, MatchResult};
pub use profile::{ExtractedProfile, PhoneNumber, RequirementProfile};
pub use report::{CsvFileSink, CsvReportWriter, ReportSink, SinkError};
pub use router::{screening_router, ScreeningState};
pub use service::{CandidateReport, ScreeningError, ScreeningReport, ScreeningService};
pub use source::{DirectoryTextSource, MemoryTextSource, SourceError, TextSource};
pub use vocabulary::{Vocabulary, VocabularyCategory, VocabularyError};
