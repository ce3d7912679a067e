use serde::Serialize;

use crate::models::candidate::Candidate;
use crate::screening::criteria::FilterCriteria;
use crate::screening::filter::filter_candidates;
use crate::screening::scoring::{calculate_match_score, score_breakdown, ScoreBreakdown};

/// One recompute cycle: filter, score each survivor, sort by score descending.
/// Ties keep their input order.
pub fn rank_candidates(candidates: &[Candidate], criteria: &FilterCriteria) -> Vec<Candidate> {
    let mut ranked: Vec<Candidate> = filter_candidates(candidates, criteria)
        .into_iter()
        .map(|mut c| {
            c.score = Some(calculate_match_score(&c, criteria));
            c
        })
        .collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub breakdown: ScoreBreakdown,
}

/// Same ordering as `rank_candidates`, with each candidate's per-category breakdown.
pub fn rank_with_breakdown(
    candidates: &[Candidate],
    criteria: &FilterCriteria,
) -> Vec<RankedCandidate> {
    rank_candidates(candidates, criteria)
        .into_iter()
        .map(|candidate| {
            let breakdown = score_breakdown(&candidate, criteria);
            RankedCandidate {
                candidate,
                breakdown,
            }
        })
        .collect()
}
