// Candidate screening: filter criteria, filtering, match scoring, ranking.
// Everything here is pure and synchronous; handlers snapshot the pool first.

pub mod criteria;
pub mod filter;
pub mod handlers;
pub mod ranking;
pub mod scoring;

#[cfg(test)]
pub(crate) mod testing {
    use chrono::{TimeZone, Utc};

    use crate::models::candidate::{Candidate, CandidateStatus};

    pub fn make_candidate(
        id: &str,
        position: &str,
        skills: &[&str],
        experience: u32,
        location: &str,
        education: &str,
    ) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: format!("Candidat {id}"),
            email: format!("{id}@example.com"),
            phone: None,
            position: position.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
            location: location.to_string(),
            education: education.to_string(),
            file_name: format!("{id}.pdf"),
            file_url: None,
            upload_date: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            status: CandidateStatus::Pending,
            score: None,
        }
    }
}
