#![allow(dead_code)]

//! Match scoring — weighted agreement between one candidate and the active criteria.
//!
//! Only active categories contribute, and the result is renormalized over the
//! weights of those categories. With nothing active every candidate scores 100.

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;
use crate::screening::criteria::{ExperienceRange, FilterCriteria};
use crate::screening::filter::has_skill;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Position,
    Skills,
    Experience,
    Location,
    Education,
}

#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    pub position: u32,
    pub skills: u32,
    pub experience: u32,
    pub location: u32,
    pub education: u32,
}

impl CategoryWeights {
    pub const STANDARD: CategoryWeights = CategoryWeights {
        position: 20,
        skills: 40,
        experience: 20,
        location: 10,
        education: 10,
    };

    pub fn sum(&self) -> u32 {
        self.position + self.skills + self.experience + self.location + self.education
    }
}

/// Points earned in one active category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryScore {
    pub category: Category,
    pub earned: f64,
    pub possible: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ScoreBreakdown {
    pub categories: Vec<CategoryScore>,
}

impl ScoreBreakdown {
    /// 0 – 100, rounded half away from zero. 100 when no category is active.
    pub fn total(&self) -> u8 {
        let possible: u32 = self.categories.iter().map(|c| c.possible).sum();
        if possible == 0 {
            return 100;
        }
        let earned: f64 = self.categories.iter().map(|c| c.earned).sum();
        ((earned / possible as f64) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

pub fn calculate_match_score(candidate: &Candidate, criteria: &FilterCriteria) -> u8 {
    score_breakdown(candidate, criteria).total()
}

pub fn score_breakdown(candidate: &Candidate, criteria: &FilterCriteria) -> ScoreBreakdown {
    score_breakdown_with(candidate, criteria, &CategoryWeights::STANDARD)
}

pub fn score_breakdown_with(
    candidate: &Candidate,
    criteria: &FilterCriteria,
    weights: &CategoryWeights,
) -> ScoreBreakdown {
    let mut categories = Vec::new();

    if let Some(position) = criteria.active_position() {
        categories.push(all_or_nothing(
            Category::Position,
            candidate.position == position,
            weights.position,
        ));
    }

    // Partial credit: fraction of required skills covered.
    if let Some(skills) = criteria.active_skills() {
        let covered = skills
            .iter()
            .filter(|s| has_skill(&candidate.skills, s))
            .count();
        categories.push(CategoryScore {
            category: Category::Skills,
            earned: weights.skills as f64 * covered as f64 / skills.len() as f64,
            possible: weights.skills,
        });
    }

    if let Some(range) = criteria.active_experience() {
        categories.push(CategoryScore {
            category: Category::Experience,
            earned: experience_points(candidate.experience, range, weights.experience),
            possible: weights.experience,
        });
    }

    if let Some(location) = criteria.active_location() {
        categories.push(all_or_nothing(
            Category::Location,
            candidate.location == location,
            weights.location,
        ));
    }

    if let Some(education) = criteria.active_education() {
        categories.push(all_or_nothing(
            Category::Education,
            candidate.education == education,
            weights.education,
        ));
    }

    ScoreBreakdown { categories }
}

fn all_or_nothing(category: Category, hit: bool, weight: u32) -> CategoryScore {
    CategoryScore {
        category,
        earned: if hit { weight as f64 } else { 0.0 },
        possible: weight,
    }
}

/// Linear credit for years above `min`, saturating at `max`.
///
/// A zero-width range (`min == max`) is an exact-match test. An inverted range
/// earns nothing.
fn experience_points(years: u32, range: ExperienceRange, weight: u32) -> f64 {
    let span = i64::from(range.max) - i64::from(range.min);
    if span < 0 {
        return 0.0;
    }
    if span == 0 {
        return if years == range.min { weight as f64 } else { 0.0 };
    }
    let offset = (i64::from(years) - i64::from(range.min)).clamp(0, span);
    weight as f64 * offset as f64 / span as f64
}
