use crate::models::candidate::Candidate;
use crate::screening::criteria::FilterCriteria;

/// Case-insensitive substring test: required "java" is covered by "JavaScript".
/// Asymmetric on purpose; "JavaScript" is not covered by "Java".
pub fn has_skill(candidate_skills: &[String], required: &str) -> bool {
    let required = required.to_lowercase();
    candidate_skills
        .iter()
        .any(|skill| skill.to_lowercase().contains(&required))
}

/// True when the candidate passes every active criterion.
///
/// The experience bounds are always enforced, even at their defaults.
pub fn matches(candidate: &Candidate, criteria: &FilterCriteria) -> bool {
    if let Some(position) = criteria.active_position() {
        if candidate.position != position {
            return false;
        }
    }

    // At least one required skill must be covered.
    if let Some(skills) = criteria.active_skills() {
        if !skills.iter().any(|s| has_skill(&candidate.skills, s)) {
            return false;
        }
    }

    if !criteria.experience.contains(candidate.experience) {
        return false;
    }

    if let Some(location) = criteria.active_location() {
        if candidate.location != location {
            return false;
        }
    }

    if let Some(education) = criteria.active_education() {
        if candidate.education != education {
            return false;
        }
    }

    true
}

/// Returns the candidates passing `criteria`, in input order.
pub fn filter_candidates(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    candidates
        .iter()
        .filter(|c| matches(c, criteria))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::testing::make_candidate;
    use proptest::prelude::*;

    fn pool() -> Vec<Candidate> {
        vec![
            make_candidate("candidate-0", "Tech Lead", &["Rust", "Kubernetes"], 8, "Lyon", "Bac+5 (Master)"),
            make_candidate("candidate-1", "Data Scientist", &["Python", "Pandas"], 3, "Paris", "Bac+8 (Doctorat)"),
            make_candidate("candidate-2", "Développeur Frontend", &["JavaScript", "React"], 5, "Paris", "Bac+3 (Licence)"),
            make_candidate("candidate-3", "Tech Lead", &["Go", "AWS"], 12, "Remote", "Bac+5 (Master)"),
        ]
    }

    fn ids(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_default_criteria_keeps_everyone_in_range() {
        let filtered = filter_candidates(&pool(), &FilterCriteria::default());
        assert_eq!(ids(&filtered), ["candidate-0", "candidate-1", "candidate-2", "candidate-3"]);
    }

    #[test]
    fn test_position_is_exact_and_case_sensitive() {
        let criteria = FilterCriteria::default().with_position("Tech Lead");
        assert_eq!(ids(&filter_candidates(&pool(), &criteria)), ["candidate-0", "candidate-3"]);

        let criteria = FilterCriteria::default().with_position("tech lead");
        assert!(filter_candidates(&pool(), &criteria).is_empty());
    }

    #[test]
    fn test_skill_substring_case_insensitive() {
        let criteria = FilterCriteria::default().with_skill("java");
        assert_eq!(ids(&filter_candidates(&pool(), &criteria)), ["candidate-2"]);
    }

    #[test]
    fn test_any_one_skill_is_enough() {
        let criteria = FilterCriteria::default().with_skill("Python").with_skill("Go");
        assert_eq!(ids(&filter_candidates(&pool(), &criteria)), ["candidate-1", "candidate-3"]);
    }

    #[test]
    fn test_skill_match_is_asymmetric() {
        let candidate = make_candidate("c", "CTO", &["Java"], 5, "Paris", "Bac");
        let criteria = FilterCriteria::default().with_skill("JavaScript");
        assert!(!matches(&candidate, &criteria));
    }

    #[test]
    fn test_experience_bounds_inclusive() {
        let criteria = FilterCriteria::default().with_experience(5, 8);
        assert_eq!(ids(&filter_candidates(&pool(), &criteria)), ["candidate-0", "candidate-2"]);
    }

    #[test]
    fn test_experience_enforced_at_defaults() {
        let veteran = make_candidate("c", "CTO", &["Rust"], 25, "Paris", "Bac");
        assert!(!matches(&veteran, &FilterCriteria::default()));
    }

    #[test]
    fn test_location_and_education_exact() {
        let criteria = FilterCriteria::default()
            .with_location("Paris")
            .with_education("Bac+3 (Licence)");
        assert_eq!(ids(&filter_candidates(&pool(), &criteria)), ["candidate-2"]);
    }

    #[test]
    fn test_impossible_combination_is_empty() {
        let criteria = FilterCriteria::default().with_location("Atlantis");
        assert!(filter_candidates(&pool(), &criteria).is_empty());
    }

    #[test]
    fn test_inverted_range_matches_nobody() {
        let criteria = FilterCriteria::default().with_experience(10, 2);
        assert!(filter_candidates(&pool(), &criteria).is_empty());
    }

    const SKILLS: &[&str] = &["Rust", "Go", "Python", "JavaScript", "Java", "React", "AWS"];
    const CITIES: &[&str] = &["Paris", "Lyon", "Remote"];

    fn arb_candidate() -> impl Strategy<Value = Candidate> {
        (
            proptest::sample::subsequence(SKILLS, 0..4),
            0u32..30,
            proptest::sample::select(CITIES),
        )
            .prop_map(|(skills, exp, city)| make_candidate("c", "Tech Lead", &skills, exp, city, "Bac"))
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            proptest::sample::subsequence(SKILLS, 0..3),
            0u32..10,
            10u32..25,
            proptest::option::of(proptest::sample::select(CITIES)),
        )
            .prop_map(|(skills, min, max, city)| {
                let mut criteria = FilterCriteria::default().with_experience(min, max);
                for skill in skills {
                    criteria = criteria.with_skill(skill);
                }
                if let Some(city) = city {
                    criteria = criteria.with_location(city);
                }
                criteria
            })
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(
            candidates in proptest::collection::vec(arb_candidate(), 0..20),
            criteria in arb_criteria(),
        ) {
            let once = filter_candidates(&candidates, &criteria);
            let twice = filter_candidates(&once, &criteria);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_extra_skill_never_grows_result_from_empty_skills(
            candidates in proptest::collection::vec(arb_candidate(), 0..20),
            criteria in arb_criteria(),
            skill in proptest::sample::select(SKILLS),
        ) {
            // Starting with no skill requirement, adding one can only shrink the set.
            let base = FilterCriteria { skills: None, ..criteria };
            let narrowed = base.clone().with_skill(skill);
            prop_assert!(
                filter_candidates(&candidates, &narrowed).len()
                    <= filter_candidates(&candidates, &base).len()
            );
        }

        #[test]
        fn prop_filter_preserves_order(
            candidates in proptest::collection::vec(arb_candidate(), 0..20),
            criteria in arb_criteria(),
        ) {
            let indexed: Vec<Candidate> = candidates
                .into_iter()
                .enumerate()
                .map(|(i, mut c)| { c.id = format!("candidate-{i}"); c })
                .collect();
            let filtered = filter_candidates(&indexed, &criteria);
            let positions: Vec<usize> = filtered
                .iter()
                .map(|c| indexed.iter().position(|o| o.id == c.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
