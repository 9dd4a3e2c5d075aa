use serde::{Deserialize, Serialize};

use super::matcher::MatchResult;

/// Single-pass reduction of a finished batch. An empty batch is a valid,
/// if degenerate, input: its average is 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_candidates: usize,
    /// Candidates whose match percentage reached the threshold.
    pub matched_count: usize,
    pub average_match_percentage: f64,
}

impl BatchSummary {
    pub fn headline(&self) -> String {
        format!(
            "{} candidates processed, {} at or above threshold",
            self.total_candidates, self.matched_count
        )
    }
}

/// Reduce match results into a [`BatchSummary`]. Pure and idempotent; the
/// running sum/count is equivalent to recomputing the mean from all inputs
/// at once, which is the required semantics — partial aggregates are never
/// emitted.
pub fn aggregate<'a, I>(results: I, threshold: f64) -> BatchSummary
where
    I: IntoIterator<Item = &'a MatchResult>,
{
    let mut total = 0usize;
    let mut matched = 0usize;
    let mut sum = 0.0f64;

    for result in results {
        total += 1;
        sum += result.match_percentage;
        if result.match_percentage >= threshold {
            matched += 1;
        }
    }

    let average_match_percentage = if total == 0 { 0.0 } else { sum / total as f64 };

    BatchSummary {
        total_candidates: total,
        matched_count: matched,
        average_match_percentage,
    }
}
