use super::common::*;
use crate::screening::matcher::match_profile;
use crate::screening::profile::{ExtractedProfile, RequirementProfile};

fn profile_with(domains: &[&str], tools: &[&str], skills: &[&str]) -> ExtractedProfile {
    ExtractedProfile {
        domains: labels(domains),
        tools: labels(tools),
        skills: labels(skills),
        ..ExtractedProfile::default()
    }
}

#[test]
fn full_overlap_scores_one_hundred() {
    let profile = profile_with(&["Finance"], &["Excel"], &["Python", "SQL"]);
    let result = match_profile(&profile, &requirement());

    assert!(result.domain_aligned);
    assert_eq!(result.match_percentage, 100.0);
    assert!(result.missing_tools.is_empty());
    assert!(result.missing_skills.is_empty());
}

#[test]
fn partial_overlap_scores_matched_share() {
    let mut requirement = requirement();
    requirement.tools = labels(&["Excel", "Git"]);

    let profile = profile_with(&["Finance"], &["Excel"], &["Python"]);
    let result = match_profile(&profile, &requirement);

    // 2 of 4 required labels present.
    assert_eq!(result.match_percentage, 50.0);
    assert_eq!(result.matched_tools, labels(&["Excel"]));
    assert_eq!(result.missing_tools, labels(&["Git"]));
    assert_eq!(result.matched_skills, labels(&["Python"]));
    assert_eq!(result.missing_skills, labels(&["SQL"]));
}

#[test]
fn domain_mismatch_disqualifies_despite_full_overlap() {
    let profile = profile_with(&["Engineering"], &["Excel"], &["Python", "SQL"]);
    let result = match_profile(&profile, &requirement());

    assert!(!result.domain_aligned);
    assert_eq!(result.match_percentage, 0.0);
    // The breakdown still reports the overlap for the report sink.
    assert_eq!(result.matched_tools, labels(&["Excel"]));
    assert_eq!(result.matched_skills, labels(&["Python", "SQL"]));
}

#[test]
fn no_required_domain_means_no_gate() {
    let mut requirement = requirement();
    requirement.domains.clear();

    let profile = profile_with(&[], &["Excel"], &["Python", "SQL"]);
    let result = match_profile(&profile, &requirement);

    assert!(result.domain_aligned);
    assert_eq!(result.match_percentage, 100.0);
}

#[test]
fn empty_tool_and_skill_requirements_score_zero_by_convention() {
    let requirement = RequirementProfile {
        domains: labels(&["Finance"]),
        ..RequirementProfile::default()
    };
    let profile = profile_with(&["Finance"], &["Excel"], &["Python"]);

    let result = match_profile(&profile, &requirement);
    assert_eq!(result.match_percentage, 0.0);
    assert!(result.domain_aligned);
}

#[test]
fn matching_is_deterministic() {
    let profile = profile_with(&["Finance"], &["Excel"], &["Python"]);
    let requirement = requirement();

    let first = match_profile(&profile, &requirement);
    let second = match_profile(&profile, &requirement);

    assert_eq!(first, second);
    assert_eq!(
        first.match_percentage.to_bits(),
        second.match_percentage.to_bits()
    );
}

#[test]
fn experience_floor_respects_relaxation() {
    let mut requirement = requirement();
    requirement.min_experience_years = Some(5.0);

    let mut profile = profile_with(&["Finance"], &["Excel"], &["Python", "SQL"]);
    profile.experience_years = Some(4.0);

    let strict = match_profile(&profile, &requirement);
    assert!(!strict.experience_met);

    requirement.relax_experience = true;
    let relaxed = match_profile(&profile, &requirement);
    assert!(relaxed.experience_met);

    // The floor never feeds the percentage.
    assert_eq!(strict.match_percentage, relaxed.match_percentage);
}

#[test]
fn configured_floor_fails_when_experience_is_absent() {
    let mut requirement = requirement();
    requirement.min_experience_years = Some(2.0);

    let profile = profile_with(&["Finance"], &[], &[]);
    let result = match_profile(&profile, &requirement);
    assert!(!result.experience_met);
}

#[test]
fn no_floor_always_meets_experience() {
    let profile = profile_with(&["Finance"], &[], &[]);
    let result = match_profile(&profile, &requirement());
    assert!(result.experience_met);
}
