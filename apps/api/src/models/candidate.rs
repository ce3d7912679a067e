use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recruiter triage state. New candidates start as `Pending`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    #[default]
    Pending,
    Selected,
    Rejected,
}

impl CandidateStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CandidateStatus::Pending => "pending",
            CandidateStatus::Selected => "selected",
            CandidateStatus::Rejected => "rejected",
        }
    }
}

/// One applicant record, created from an uploaded CV file name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub skills: Vec<String>,
    pub experience: u32, // years
    pub location: String,
    pub education: String,
    pub file_name: String,
    /// Set when the uploaded CV was archived to object storage.
    pub file_url: Option<String>,
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub status: CandidateStatus,
    /// Match score 0 – 100. Derived, recomputed whenever criteria change.
    pub score: Option<u8>,
}
