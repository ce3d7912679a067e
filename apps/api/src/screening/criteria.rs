#![allow(dead_code)]

//! Recruiter filter criteria.
//!
//! Every criterion carries an explicit "active" predicate. An inactive criterion
//! places no constraint on filtering and contributes nothing to the match score.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

pub const DEFAULT_MIN_EXPERIENCE: u32 = 0;
/// Slider ceiling. A `max` at this value means "no upper preference" to the
/// scorer, but the filter still enforces it as an inclusive bound.
pub const DEFAULT_MAX_EXPERIENCE: u32 = 20;

/// Inclusive experience bounds in years.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExperienceRange {
    pub min: u32,
    pub max: u32,
}

impl Default for ExperienceRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_EXPERIENCE,
            max: DEFAULT_MAX_EXPERIENCE,
        }
    }
}

impl ExperienceRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// True once either bound has moved off the full default range.
    pub fn is_active(&self) -> bool {
        self.min > DEFAULT_MIN_EXPERIENCE || self.max < DEFAULT_MAX_EXPERIENCE
    }

    pub fn contains(&self, years: u32) -> bool {
        self.min <= years && years <= self.max
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterCriteria {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub position: Option<String>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub experience: ExperienceRange,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub education: Option<String>,
}

impl FilterCriteria {
    pub fn active_position(&self) -> Option<&str> {
        non_empty(&self.position)
    }

    pub fn active_skills(&self) -> Option<&[String]> {
        self.skills.as_deref().filter(|s| !s.is_empty())
    }

    pub fn active_experience(&self) -> Option<ExperienceRange> {
        Some(self.experience).filter(ExperienceRange::is_active)
    }

    pub fn active_location(&self) -> Option<&str> {
        non_empty(&self.location)
    }

    pub fn active_education(&self) -> Option<&str> {
        non_empty(&self.education)
    }

    /// True when no criterion constrains or weights anything.
    pub fn is_vacuous(&self) -> bool {
        self.active_position().is_none()
            && self.active_skills().is_none()
            && self.active_experience().is_none()
            && self.active_location().is_none()
            && self.active_education().is_none()
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    /// Appends a required skill. Empty strings and exact duplicates are ignored.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        let skill = skill.into();
        if skill.is_empty() {
            return self;
        }
        let skills = self.skills.get_or_insert_with(Vec::new);
        if !skills.contains(&skill) {
            skills.push(skill);
        }
        self
    }

    pub fn without_skill(mut self, skill: &str) -> Self {
        if let Some(skills) = self.skills.as_mut() {
            skills.retain(|s| s != skill);
        }
        self
    }

    pub fn with_experience(mut self, min: u32, max: u32) -> Self {
        self.experience = ExperienceRange::new(min, max);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    /// Rejects an inverted experience range. Filtering and scoring tolerate one,
    /// but a request carrying it is a client mistake.
    pub fn validate(&self) -> Result<(), AppError> {
        let ExperienceRange { min, max } = self.experience;
        if min > max {
            return Err(AppError::Validation(format!(
                "experience.min ({min}) must not exceed experience.max ({max})"
            )));
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_vacuous() {
        let criteria = FilterCriteria::default();
        assert!(criteria.is_vacuous());
        assert_eq!(criteria.experience, ExperienceRange::new(0, 20));
    }

    #[test]
    fn test_empty_values_are_inactive() {
        let criteria = FilterCriteria {
            position: Some(String::new()),
            skills: Some(vec![]),
            location: Some(String::new()),
            education: Some(String::new()),
            ..Default::default()
        };
        assert!(criteria.is_vacuous());
    }

    #[test]
    fn test_experience_activation() {
        assert!(!ExperienceRange::new(0, 20).is_active());
        assert!(ExperienceRange::new(1, 20).is_active());
        assert!(ExperienceRange::new(0, 19).is_active());
        // Bounds beyond the slider ceiling don't count as a preference.
        assert!(!ExperienceRange::new(0, 30).is_active());
    }

    #[test]
    fn test_experience_contains_is_inclusive() {
        let range = ExperienceRange::new(3, 5);
        assert!(!range.contains(2));
        assert!(range.contains(3));
        assert!(range.contains(5));
        assert!(!range.contains(6));
    }

    #[test]
    fn test_with_skill_ignores_duplicates_and_empty() {
        let criteria = FilterCriteria::default()
            .with_skill("Rust")
            .with_skill("")
            .with_skill("Rust")
            .with_skill("Go");
        assert_eq!(criteria.active_skills().unwrap(), ["Rust", "Go"]);

        let criteria = criteria.without_skill("Rust").without_skill("Go");
        assert!(criteria.active_skills().is_none());
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        assert!(FilterCriteria::default().with_experience(5, 5).validate().is_ok());
        let err = FilterCriteria::default()
            .with_experience(8, 2)
            .validate()
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_deserialize_empty_strings_as_none() {
        let criteria: FilterCriteria = serde_json::from_value(json!({
            "position": "",
            "skills": ["React"],
            "experience": { "min": 2 },
            "location": "Paris"
        }))
        .unwrap();
        assert_eq!(criteria.position, None);
        assert_eq!(criteria.active_skills().unwrap(), ["React"]);
        assert_eq!(criteria.experience, ExperienceRange::new(2, 20));
        assert_eq!(criteria.active_location(), Some("Paris"));
        assert_eq!(criteria.education, None);
    }

    #[test]
    fn test_deserialize_empty_object_is_default() {
        let criteria: FilterCriteria = serde_json::from_value(json!({})).unwrap();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
