use regex::Regex;

use super::ExtractorConfig;
use crate::screening::profile::PhoneNumber;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}";
const PHONE_PATTERN: &str = r"\+?\(?\d[\d \t()\-]*\d";
const EXPERIENCE_PATTERN: &str = r"(?i)(\d+(?:\.\d+)?)[ \t]*\+?[ \t]*(?:years?|yrs)\b";

/// Regex-based contact scanning. Every accessor follows the same policy:
/// first valid occurrence in document order wins, anything that fails
/// validation is absent.
pub(super) struct ContactScanner {
    email: Regex,
    phone: Regex,
    experience: Regex,
    config: ExtractorConfig,
}

impl ContactScanner {
    pub(super) fn new(config: ExtractorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
            experience: Regex::new(EXPERIENCE_PATTERN)?,
            config,
        })
    }

    /// First token shaped like `local@domain.tld`. The pattern guarantees a
    /// single `@` and a dotted domain, so a returned value always satisfies
    /// the format invariant.
    pub(super) fn find_email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|hit| hit.as_str().to_string())
    }

    /// First separator-tolerant digit run that normalizes to the configured
    /// digit count and is not embedded in a longer alphanumeric run (so ID
    /// numbers and similar do not qualify). The display form keeps the
    /// source formatting, `digits` is the comparison form.
    pub(super) fn find_phone(&self, text: &str) -> Option<PhoneNumber> {
        for hit in self.phone.find_iter(text) {
            if !isolated(text, hit.start(), hit.end()) {
                continue;
            }

            let digits: String = hit.as_str().chars().filter(char::is_ascii_digit).collect();
            let count = digits.len();
            if count < self.config.min_phone_digits || count > self.config.max_phone_digits {
                continue;
            }

            return Some(PhoneNumber {
                digits,
                display: hit.as_str().trim().to_string(),
            });
        }
        None
    }

    /// Best-effort name heuristic: the first line within the scan window
    /// that carries at least one letter but no digit, no `@`, and no
    /// section header keyword. Blank and rejected lines still consume the
    /// window. When no line qualifies the name is absent, never guessed.
    pub(super) fn find_name(&self, text: &str) -> Option<String> {
        for line in text.lines().take(self.config.max_name_scan_lines) {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.contains('@') {
                continue;
            }
            if !trimmed.chars().any(char::is_alphabetic) {
                continue;
            }
            if trimmed.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }

            let lowered = trimmed.to_lowercase();
            if self
                .config
                .section_keywords
                .iter()
                .any(|keyword| lowered.contains(keyword.as_str()))
            {
                continue;
            }

            return Some(trimmed.to_string());
        }
        None
    }

    /// Largest `<n> years`-style mention in the text.
    pub(super) fn find_experience(&self, text: &str) -> Option<f64> {
        let mut best: Option<f64> = None;
        for captures in self.experience.captures_iter(text) {
            let Ok(value) = captures[1].parse::<f64>() else {
                continue;
            };
            if !value.is_finite() {
                continue;
            }
            best = Some(best.map_or(value, |current| current.max(value)));
        }
        best
    }
}

/// Phone candidates must stand alone as a token: a digit or letter directly
/// before or after the run means it is part of something longer.
fn isolated(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
    let after = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
    before && after
}
