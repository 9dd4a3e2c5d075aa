use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::screening::aggregate::BatchSummary;
use crate::screening::service::{CandidateReport, ScreeningReport};

/// Flattened per-candidate row for spreadsheet-style consumption. Label
/// sets are joined with `;`, matching the columns recruiters export.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub document_id: String,
    pub source: &'static str,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub domains: String,
    pub matched_tools: String,
    pub missing_tools: String,
    pub matched_skills: String,
    pub missing_skills: String,
    pub experience_years: Option<f64>,
    pub experience_met: bool,
    pub domain_aligned: bool,
    pub match_percentage: f64,
}

impl CandidateReport {
    pub fn to_view(&self) -> CandidateView {
        CandidateView {
            document_id: self.document_id.clone(),
            source: self.source.label(),
            name: self.profile.name.clone(),
            email: self.profile.email.clone(),
            phone: self.profile.phone.as_ref().map(|p| p.display.clone()),
            domains: joined(&self.profile.domains),
            matched_tools: joined(&self.result.matched_tools),
            missing_tools: joined(&self.result.missing_tools),
            matched_skills: joined(&self.result.matched_skills),
            missing_skills: joined(&self.result.missing_skills),
            experience_years: self.profile.experience_years,
            experience_met: self.result.experience_met,
            domain_aligned: self.result.domain_aligned,
            match_percentage: self.result.match_percentage,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchSummaryView {
    pub total_candidates: usize,
    pub matched_count: usize,
    pub average_match_percentage: f64,
    pub headline: String,
}

impl BatchSummary {
    pub fn to_view(&self) -> BatchSummaryView {
        BatchSummaryView {
            total_candidates: self.total_candidates,
            matched_count: self.matched_count,
            average_match_percentage: self.average_match_percentage,
            headline: self.headline(),
        }
    }
}

/// The complete sink-facing payload for one batch.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReportView {
    pub generated_on: NaiveDate,
    pub threshold: f64,
    pub summary: BatchSummaryView,
    pub candidates: Vec<CandidateView>,
}

impl ScreeningReport {
    pub fn view(&self, generated_on: NaiveDate) -> ScreeningReportView {
        ScreeningReportView {
            generated_on,
            threshold: self.threshold,
            summary: self.summary.to_view(),
            candidates: self.candidates.iter().map(CandidateReport::to_view).collect(),
        }
    }
}

fn joined(labels: &BTreeSet<String>) -> String {
    labels
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(";")
}
