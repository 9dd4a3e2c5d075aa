use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::profile::{ExtractedProfile, RequirementProfile};

/// Requirement coverage for one candidate. Derived, never mutated:
/// recomputing from the same inputs yields the same result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_tools: BTreeSet<String>,
    pub missing_tools: BTreeSet<String>,
    pub matched_skills: BTreeSet<String>,
    pub missing_skills: BTreeSet<String>,
    /// False only when a required domain is specified and the candidate's
    /// domain set is disjoint from it.
    pub domain_aligned: bool,
    /// Whether the candidate meets the (possibly relaxed) experience floor.
    /// Informational: does not enter the percentage.
    pub experience_met: bool,
    pub match_percentage: f64,
}

/// Score one extracted profile against the requirement.
///
/// Tools and skills weigh equally: the percentage is the matched share of
/// all required tool and skill labels. No requirements at all is 0 by
/// convention, not an error. The domain gate is evaluated first — a
/// required domain that the candidate lacks forces the percentage to 0
/// regardless of tool/skill overlap, though the per-category sets are
/// still reported for the breakdown.
pub fn match_profile(profile: &ExtractedProfile, requirement: &RequirementProfile) -> MatchResult {
    let matched_tools: BTreeSet<String> = requirement
        .tools
        .intersection(&profile.tools)
        .cloned()
        .collect();
    let missing_tools: BTreeSet<String> = requirement
        .tools
        .difference(&matched_tools)
        .cloned()
        .collect();
    let matched_skills: BTreeSet<String> = requirement
        .skills
        .intersection(&profile.skills)
        .cloned()
        .collect();
    let missing_skills: BTreeSet<String> = requirement
        .skills
        .difference(&matched_skills)
        .cloned()
        .collect();

    let domain_aligned =
        requirement.domains.is_empty() || !requirement.domains.is_disjoint(&profile.domains);

    let required = requirement.tools.len() + requirement.skills.len();
    let matched = matched_tools.len() + matched_skills.len();
    let coverage = if required == 0 {
        0.0
    } else {
        matched as f64 * 100.0 / required as f64
    };
    let match_percentage = if domain_aligned { coverage } else { 0.0 };

    let experience_met = match requirement.experience_floor() {
        None => true,
        Some(floor) => profile
            .experience_years
            .map(|years| years >= floor)
            .unwrap_or(false),
    };

    MatchResult {
        matched_tools,
        missing_tools,
        matched_skills,
        missing_skills,
        domain_aligned,
        experience_met,
        match_percentage,
    }
}
