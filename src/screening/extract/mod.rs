//! Field extraction: unstructured résumé text in, [`ExtractedProfile`] out.
//!
//! Extraction is a total function — any input, including the empty string,
//! yields a profile; unusable text just yields one with every field absent.

mod contact;

use aho_corasick::AhoCorasick;

use super::profile::ExtractedProfile;
use super::vocabulary::{Vocabulary, VocabularyCategory};
use contact::ContactScanner;

/// Contact-extraction tunables. Defaults follow the documented heuristics:
/// the name is looked for in the first five lines, phone numbers normalize
/// to 7–15 digits, and lines carrying a section header are never a name.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub max_name_scan_lines: usize,
    pub min_phone_digits: usize,
    pub max_phone_digits: usize,
    pub section_keywords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_name_scan_lines: 5,
            min_phone_digits: 7,
            max_phone_digits: 15,
            section_keywords: [
                "resume",
                "curriculum vitae",
                "objective",
                "summary",
                "profile",
                "contact",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

/// Stateless extractor compiled once per run from the vocabulary and the
/// contact tunables, then applied to each document independently.
pub struct Extractor {
    contact: ContactScanner,
    vocabulary: VocabularyScanner,
}

impl Extractor {
    pub fn new(
        vocabulary: &Vocabulary,
        config: ExtractorConfig,
    ) -> Result<Self, ExtractorBuildError> {
        Ok(Self {
            contact: ContactScanner::new(config)?,
            vocabulary: VocabularyScanner::build(vocabulary)?,
        })
    }

    /// Derive structured fields from raw text. Never fails: fields that
    /// cannot be validated are absent, ambiguous candidates resolve to the
    /// first occurrence in document order.
    pub fn extract(&self, raw_text: &str) -> ExtractedProfile {
        let mut profile = ExtractedProfile {
            name: self.contact.find_name(raw_text),
            email: self.contact.find_email(raw_text),
            phone: self.contact.find_phone(raw_text),
            experience_years: self.contact.find_experience(raw_text),
            ..ExtractedProfile::default()
        };
        self.vocabulary.scan(raw_text, &mut profile);
        profile
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractorBuildError {
    #[error("failed to compile contact patterns: {0}")]
    ContactPattern(#[from] regex::Error),
    #[error("failed to compile vocabulary automaton: {0}")]
    VocabularyAutomaton(#[from] aho_corasick::BuildError),
}

/// Case-insensitive multi-label scanner over every variant of every
/// vocabulary entry. Pure set membership: a hit records the canonical
/// label, nothing is scored or ranked here.
struct VocabularyScanner {
    automaton: AhoCorasick,
    // Parallel to the automaton's pattern ids.
    entries: Vec<(VocabularyCategory, String)>,
}

impl VocabularyScanner {
    fn build(vocabulary: &Vocabulary) -> Result<Self, aho_corasick::BuildError> {
        let mut patterns = Vec::new();
        let mut entries = Vec::new();

        for (category, label, variants) in vocabulary.entries() {
            patterns.push(label.to_lowercase());
            entries.push((category, label.clone()));

            for variant in variants {
                let variant = variant.trim();
                if variant.is_empty() {
                    continue;
                }
                patterns.push(variant.to_lowercase());
                entries.push((category, label.clone()));
            }
        }

        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)?;

        Ok(Self { automaton, entries })
    }

    fn scan(&self, text: &str, profile: &mut ExtractedProfile) {
        for hit in self.automaton.find_overlapping_iter(text) {
            if !word_bounded(text, hit.start(), hit.end()) {
                continue;
            }

            let (category, label) = &self.entries[hit.pattern().as_usize()];
            let target = match category {
                VocabularyCategory::Domain => &mut profile.domains,
                VocabularyCategory::Tool => &mut profile.tools,
                VocabularyCategory::Skill => &mut profile.skills,
            };
            target.insert(label.clone());
        }
    }
}

/// A variant hit only counts when it is not embedded in a longer
/// alphanumeric token ("go" must not match inside "google").
fn word_bounded(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before && after
}
