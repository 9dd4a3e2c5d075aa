use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Phone contact in both comparison and display form. Only `digits`
/// participates in comparisons; `display` preserves the source formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumber {
    pub digits: String,
    pub display: String,
}

/// Structured fields derived from one candidate document.
///
/// Every field is either a validated value or absent — ambiguous or
/// malformed candidates are dropped during extraction, never guessed. An
/// all-absent profile is the legitimate result for unusable text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<PhoneNumber>,
    pub domains: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    /// Largest `<n> years`-style mention in the text, when one parses.
    pub experience_years: Option<f64>,
}

/// Recruiter-supplied target criteria for one screening run. Labels are
/// canonical vocabulary labels. Immutable for the duration of a batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequirementProfile {
    #[serde(default)]
    pub domains: BTreeSet<String>,
    #[serde(default)]
    pub tools: BTreeSet<String>,
    #[serde(default)]
    pub skills: BTreeSet<String>,
    /// Optional floor on extracted experience years. Reported per candidate,
    /// never part of the match percentage.
    #[serde(default)]
    pub min_experience_years: Option<f64>,
    /// Lowers a positive experience floor by one year (a "5+ becomes 4+"
    /// concession for borderline candidates).
    #[serde(default)]
    pub relax_experience: bool,
}

impl RequirementProfile {
    /// A requirement with no criteria at all invalidates the batch.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
            && self.tools.is_empty()
            && self.skills.is_empty()
            && self.min_experience_years.is_none()
    }

    /// The effective experience floor after the relaxation toggle.
    pub fn experience_floor(&self) -> Option<f64> {
        self.min_experience_years.map(|years| {
            if self.relax_experience && years > 0.0 {
                years - 1.0
            } else {
                years
            }
        })
    }
}
