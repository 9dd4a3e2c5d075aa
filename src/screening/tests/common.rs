use std::collections::BTreeSet;
use std::sync::Mutex;

use axum::response::Response;
use serde_json::Value;

use crate::screening::document::CandidateDocument;
use crate::screening::extract::{Extractor, ExtractorConfig};
use crate::screening::profile::RequirementProfile;
use crate::screening::report::{ReportSink, ScreeningReportView, SinkError};
use crate::screening::service::ScreeningService;
use crate::screening::vocabulary::Vocabulary;

pub(super) fn vocabulary() -> Vocabulary {
    let mut vocabulary = Vocabulary::default();
    vocabulary.domains.insert(
        "Finance".to_string(),
        vec!["finance".to_string(), "fintech".to_string(), "banking".to_string()],
    );
    vocabulary.domains.insert(
        "Engineering".to_string(),
        vec!["engineering".to_string(), "software engineering".to_string()],
    );
    vocabulary.tools.insert(
        "Excel".to_string(),
        vec!["excel".to_string(), "ms excel".to_string()],
    );
    vocabulary
        .tools
        .insert("Git".to_string(), vec!["git".to_string()]);
    vocabulary
        .skills
        .insert("Python".to_string(), vec!["python".to_string()]);
    vocabulary
        .skills
        .insert("SQL".to_string(), vec!["sql".to_string()]);
    vocabulary
        .skills
        .insert("Go".to_string(), vec!["golang".to_string()]);
    vocabulary
}

pub(super) fn requirement() -> RequirementProfile {
    RequirementProfile {
        domains: labels(&["Finance"]),
        tools: labels(&["Excel"]),
        skills: labels(&["Python", "SQL"]),
        min_experience_years: None,
        relax_experience: false,
    }
}

pub(super) fn labels(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub(super) fn extractor() -> Extractor {
    Extractor::new(&vocabulary(), ExtractorConfig::default()).expect("extractor builds")
}

pub(super) fn service(threshold: f64) -> ScreeningService {
    ScreeningService::new(&vocabulary(), ExtractorConfig::default(), threshold)
        .expect("service builds")
}

pub(super) const JANE_DOE_TEXT: &str =
    "Jane Doe\njane.doe@example.com\n555-123-4567\nSkills: Python, SQL";

pub(super) fn jane_doe_document() -> CandidateDocument {
    CandidateDocument::uploaded("jane-doe", JANE_DOE_TEXT)
}

pub(super) fn finance_resume_text() -> String {
    [
        "Alex Rivera",
        "alex.rivera@example.com",
        "+1 (555) 987-6543",
        "Objective: senior analyst role in finance",
        "8 years of banking experience using MS Excel, Python, and SQL.",
    ]
    .join("\n")
}

#[derive(Default)]
pub(super) struct MemorySink {
    delivered: Mutex<Vec<ScreeningReportView>>,
}

impl MemorySink {
    pub(super) fn delivered(&self) -> Vec<ScreeningReportView> {
        self.delivered.lock().expect("sink mutex poisoned").clone()
    }
}

impl ReportSink for MemorySink {
    fn deliver(&self, report: &ScreeningReportView) -> Result<(), SinkError> {
        self.delivered
            .lock()
            .expect("sink mutex poisoned")
            .push(report.clone());
        Ok(())
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
