use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::candidate::{Candidate, CandidateStatus};

const TOP_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub total: usize,
    pub selected: usize,
    pub rejected: usize,
    pub pending: usize,
    pub processed: usize,
    pub recent: usize,
    pub average_score: u32,
    pub top_positions: Vec<ValueCount>,
    pub top_locations: Vec<ValueCount>,
}

/// Pool-wide counters for the recruiter dashboard.
///
/// `recent` counts uploads at most `recent_window_days` old. Candidates without
/// a score count as 0 toward the average.
pub fn compute_stats(
    candidates: &[Candidate],
    now: DateTime<Utc>,
    recent_window_days: i64,
) -> DashboardStats {
    let count_status =
        |status: CandidateStatus| candidates.iter().filter(|c| c.status == status).count();
    let selected = count_status(CandidateStatus::Selected);
    let rejected = count_status(CandidateStatus::Rejected);

    let window = Duration::days(recent_window_days);
    let recent = candidates
        .iter()
        .filter(|c| now - c.upload_date <= window)
        .count();

    let average_score = if candidates.is_empty() {
        0
    } else {
        let sum: u32 = candidates.iter().map(|c| u32::from(c.score.unwrap_or(0))).sum();
        (sum as f64 / candidates.len() as f64).round() as u32
    };

    DashboardStats {
        total: candidates.len(),
        selected,
        rejected,
        pending: count_status(CandidateStatus::Pending),
        processed: selected + rejected,
        recent,
        average_score,
        top_positions: top_counts(candidates.iter().map(|c| c.position.as_str()), TOP_LIMIT),
        top_locations: top_counts(candidates.iter().map(|c| c.location.as_str()), TOP_LIMIT),
    }
}

/// Most frequent values, count descending. Ties keep first-appearance order.
fn top_counts<'a>(values: impl Iterator<Item = &'a str>, limit: usize) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();
    for value in values {
        match counts.iter_mut().find(|vc| vc.value == value) {
            Some(vc) => vc.count += 1,
            None => counts.push(ValueCount {
                value: value.to_string(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}
