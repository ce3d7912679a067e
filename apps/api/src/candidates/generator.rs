//! Synthetic candidates — one per uploaded CV file name.
//!
//! There is no document analysis. Every attribute except the file name is drawn
//! at random from the built-in vocabulary, including the initial "AI" score.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::models::candidate::{Candidate, CandidateStatus};
use crate::vocabulary::{EDUCATIONS, LOCATIONS, POSITIONS, SKILLS};

const MIN_SKILLS: usize = 3;
const MAX_SKILLS: usize = 10;
const MAX_EXPERIENCE_YEARS: u32 = 15;
const MAX_UPLOAD_AGE_DAYS: i64 = 30;

/// An uploaded CV: its file name and, if archived, where it lives.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub file_name: String,
    pub file_url: Option<String>,
}

impl UploadedFile {
    pub fn unarchived(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            file_url: None,
        }
    }
}

/// `start_index` is the number of candidates already in the pool, so ids and
/// display names keep counting up across uploads.
pub fn generate_candidates<R: Rng + ?Sized>(
    files: &[UploadedFile],
    start_index: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Vec<Candidate> {
    files
        .iter()
        .enumerate()
        .map(|(i, file)| generate_one(file, start_index + i, now, rng))
        .collect()
}

fn generate_one<R: Rng + ?Sized>(
    file: &UploadedFile,
    index: usize,
    now: DateTime<Utc>,
    rng: &mut R,
) -> Candidate {
    let skill_count = rng.random_range(MIN_SKILLS..=MAX_SKILLS);
    let skills = rand::seq::index::sample(rng, SKILLS.len(), skill_count)
        .into_iter()
        .map(|i| SKILLS[i].to_string())
        .collect();

    Candidate {
        id: format!("candidate-{index}"),
        name: format!("Candidat {}", index + 1),
        email: format!("candidat{}@example.com", index + 1),
        phone: Some(french_mobile(rng.random_range(10_000_000..100_000_000))),
        position: pick(POSITIONS, rng),
        skills,
        experience: rng.random_range(1..=MAX_EXPERIENCE_YEARS),
        location: pick(LOCATIONS, rng),
        education: pick(EDUCATIONS, rng),
        file_name: file.file_name.clone(),
        file_url: file.file_url.clone(),
        upload_date: now - Duration::days(rng.random_range(0..MAX_UPLOAD_AGE_DAYS)),
        status: CandidateStatus::Pending,
        score: Some(rng.random_range(60..100)),
    }
}

fn pick<R: Rng + ?Sized>(values: &[&str], rng: &mut R) -> String {
    values[rng.random_range(0..values.len())].to_string()
}

/// Formats an 8-digit subscriber number as `+33 6 12 34 56 78`.
fn french_mobile(subscriber: u32) -> String {
    let digits = format!("{subscriber:08}");
    let pairs: Vec<&str> = digits
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect();
    format!("+33 6 {}", pairs.join(" "))
}
