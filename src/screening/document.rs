use serde::{Deserialize, Serialize};

/// Where a candidate document entered the batch from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    #[default]
    Upload,
    Drive,
}

impl SourceKind {
    pub const fn label(self) -> &'static str {
        match self {
            SourceKind::Upload => "upload",
            SourceKind::Drive => "drive",
        }
    }
}

/// One résumé, already normalized to plain text by the loader adapter.
///
/// Immutable once loaded; the raw text is consumed by extraction and not
/// retained afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDocument {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub source: SourceKind,
}

impl CandidateDocument {
    pub fn uploaded(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source: SourceKind::Upload,
        }
    }

    pub fn from_drive(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source: SourceKind::Drive,
        }
    }
}
