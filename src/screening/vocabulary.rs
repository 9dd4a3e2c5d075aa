use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// The three controlled-vocabulary categories the extractor scans for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyCategory {
    Domain,
    Tool,
    Skill,
}

impl VocabularyCategory {
    pub const fn label(self) -> &'static str {
        match self {
            VocabularyCategory::Domain => "domain",
            VocabularyCategory::Tool => "tool",
            VocabularyCategory::Skill => "skill",
        }
    }
}

/// Controlled vocabulary injected once per run: canonical label → synonym
/// variants, per category. The canonical label itself always counts as a
/// variant, so an entry with an empty variant list is still matchable.
///
/// Kept as ordered maps so scans and serialized output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub domains: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub tools: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub skills: BTreeMap<String, Vec<String>>,
}

impl Vocabulary {
    /// True when no category defines any entry. An empty vocabulary
    /// invalidates a whole batch and is rejected before processing begins.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty() && self.tools.is_empty() && self.skills.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.domains.len() + self.tools.len() + self.skills.len()
    }

    /// Iterate every entry tagged with its category, in category order.
    pub(crate) fn entries(
        &self,
    ) -> impl Iterator<Item = (VocabularyCategory, &String, &Vec<String>)> {
        let domains = self
            .domains
            .iter()
            .map(|(label, variants)| (VocabularyCategory::Domain, label, variants));
        let tools = self
            .tools
            .iter()
            .map(|(label, variants)| (VocabularyCategory::Tool, label, variants));
        let skills = self
            .skills
            .iter()
            .map(|(label, variants)| (VocabularyCategory::Skill, label, variants));
        domains.chain(tools).chain(skills)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Self = serde_json::from_str(raw)?;
        if vocabulary.is_empty() {
            return Err(VocabularyError::Empty);
        }
        Ok(vocabulary)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VocabularyError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid vocabulary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vocabulary defines no domain, tool, or skill entries")]
    Empty,
}
