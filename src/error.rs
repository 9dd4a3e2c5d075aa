use crate::config::ConfigError;
use crate::screening::report::SinkError;
use crate::screening::service::ScreeningError;
use crate::screening::vocabulary::VocabularyError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    Screening(ScreeningError),
    Vocabulary(VocabularyError),
    Report(SinkError),
    Parse(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::Screening(err) => write!(f, "screening error: {}", err),
            AppError::Vocabulary(err) => write!(f, "vocabulary error: {}", err),
            AppError::Report(err) => write!(f, "report delivery error: {}", err),
            AppError::Parse(err) => write!(f, "invalid JSON payload: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::Screening(err) => Some(err),
            AppError::Vocabulary(err) => Some(err),
            AppError::Report(err) => Some(err),
            AppError::Parse(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Screening(_) | AppError::Vocabulary(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Parse(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_)
            | AppError::Report(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<ScreeningError> for AppError {
    fn from(value: ScreeningError) -> Self {
        Self::Screening(value)
    }
}

impl From<VocabularyError> for AppError {
    fn from(value: VocabularyError) -> Self {
        Self::Vocabulary(value)
    }
}

impl From<SinkError> for AppError {
    fn from(value: SinkError) -> Self {
        Self::Report(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
