use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::document::CandidateDocument;
use super::extract::ExtractorConfig;
use super::profile::RequirementProfile;
use super::report::{BatchSummaryView, CandidateView};
use super::service::{ScreeningError, ScreeningService};
use super::vocabulary::Vocabulary;

/// Server-side defaults for the screening endpoint. A request may carry its
/// own vocabulary and threshold; these fill the gaps.
#[derive(Debug, Clone)]
pub struct ScreeningState {
    pub vocabulary: Option<Vocabulary>,
    pub threshold: f64,
}

impl Default for ScreeningState {
    fn default() -> Self {
        Self {
            vocabulary: None,
            threshold: 60.0,
        }
    }
}

/// Router builder exposing the HTTP screening endpoint.
pub fn screening_router(state: Arc<ScreeningState>) -> Router {
    Router::new()
        .route("/api/v1/screening/report", post(report_handler))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ScreeningRequest {
    pub(crate) documents: Vec<CandidateDocument>,
    pub(crate) requirement: RequirementProfile,
    #[serde(default)]
    pub(crate) vocabulary: Option<Vocabulary>,
    #[serde(default)]
    pub(crate) threshold: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) generated_on: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_candidates: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScreeningResponse {
    pub(crate) generated_on: NaiveDate,
    pub(crate) threshold: f64,
    pub(crate) summary: BatchSummaryView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) candidates: Option<Vec<CandidateView>>,
}

pub(crate) async fn report_handler(
    State(state): State<Arc<ScreeningState>>,
    axum::Json(request): axum::Json<ScreeningRequest>,
) -> Response {
    let Some(vocabulary) = request.vocabulary.as_ref().or(state.vocabulary.as_ref()) else {
        let payload = json!({
            "error": "no vocabulary supplied in the request or configured on the server",
        });
        return (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response();
    };

    let threshold = request.threshold.unwrap_or(state.threshold);
    let service = match ScreeningService::new(vocabulary, ExtractorConfig::default(), threshold) {
        Ok(service) => service,
        Err(error) => return screening_error_response(error),
    };

    match service.screen(&request.documents, &request.requirement) {
        Ok(report) => {
            let generated_on = request
                .generated_on
                .unwrap_or_else(|| Local::now().date_naive());
            let view = report.view(generated_on);
            let response = ScreeningResponse {
                generated_on,
                threshold,
                summary: view.summary,
                candidates: request.include_candidates.then_some(view.candidates),
            };
            (StatusCode::OK, axum::Json(response)).into_response()
        }
        Err(error) => screening_error_response(error),
    }
}

fn screening_error_response(error: ScreeningError) -> Response {
    let status = match error {
        ScreeningError::EmptyVocabulary | ScreeningError::EmptyRequirement => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(serde::de::Error::custom)
    })
    .transpose()
}
