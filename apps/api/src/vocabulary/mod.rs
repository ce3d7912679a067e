//! Filter vocabulary — the option lists a recruiter picks criteria from.
//!
//! A list is the built-in values, then anything the recruiter added by hand
//! (kept in a `VocabularyStore`), then values seen on current candidates.

pub mod handlers;
pub mod store;

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::vocabulary::store::{VocabularyError, VocabularyStore};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyKind {
    Positions,
    Skills,
    Locations,
    Educations,
}

impl VocabularyKind {
    pub const ALL: [VocabularyKind; 4] = [
        VocabularyKind::Positions,
        VocabularyKind::Skills,
        VocabularyKind::Locations,
        VocabularyKind::Educations,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VocabularyKind::Positions => "positions",
            VocabularyKind::Skills => "skills",
            VocabularyKind::Locations => "locations",
            VocabularyKind::Educations => "educations",
        }
    }

    pub fn store_key(&self) -> String {
        format!("vocabulary:{}", self.as_str())
    }
}

impl FromStr for VocabularyKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VocabularyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "Unknown vocabulary '{s}'; expected positions, skills, locations or educations"
                ))
            })
    }
}

pub const POSITIONS: &[&str] = &[
    "Développeur Frontend",
    "Développeur Backend",
    "Développeur Full Stack",
    "Développeur Mobile",
    "Data Scientist",
    "Data Analyst",
    "UX/UI Designer",
    "Product Designer",
    "Chef de Projet",
    "Product Manager",
    "Architecte Solution",
    "Architecte Logiciel",
    "DevOps Engineer",
    "Ingénieur Cloud",
    "Consultant IT",
    "Business Analyst",
    "Testeur QA",
    "Scrum Master",
    "Tech Lead",
    "CTO",
];

pub const SKILLS: &[&str] = &[
    // Languages
    "JavaScript", "TypeScript", "Python", "Java", "C#", "PHP", "Ruby", "Go", "Rust", "C++",
    "Swift", "Kotlin",
    // Frontend
    "React", "Vue.js", "Angular", "Svelte", "HTML/CSS", "SASS", "LESS", "Tailwind CSS",
    "Bootstrap",
    // Backend
    "Node.js", "Express.js", "Django", "Flask", "Spring Boot", "ASP.NET", "Laravel",
    "Ruby on Rails",
    // Databases
    "MySQL", "PostgreSQL", "MongoDB", "Redis", "Oracle", "SQL Server", "Elasticsearch",
    "Cassandra",
    // Cloud & DevOps
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Jenkins", "GitLab CI", "Terraform",
    "Ansible",
    // Practices
    "Git", "Agile", "Scrum", "Kanban", "TDD", "BDD", "REST API", "GraphQL", "Microservices",
    // Data & ML
    "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Pandas", "NumPy", "R",
    "Tableau", "Power BI",
    // Mobile
    "React Native", "Flutter", "iOS", "Android", "Xamarin",
    // Design
    "Figma", "Adobe XD", "Sketch", "Photoshop", "Illustrator", "InVision", "Principle",
];

pub const LOCATIONS: &[&str] = &[
    // Cities
    "Paris", "Lyon", "Marseille", "Toulouse", "Nice", "Nantes", "Montpellier", "Strasbourg",
    "Bordeaux", "Lille", "Rennes", "Reims", "Saint-Étienne", "Toulon", "Le Havre", "Grenoble",
    "Dijon", "Angers", "Nîmes", "Villeurbanne",
    // Regions
    "Île-de-France", "Rhône-Alpes", "Provence-Alpes-Côte d'Azur", "Occitanie",
    "Nouvelle-Aquitaine", "Hauts-de-France", "Grand Est", "Pays de la Loire", "Bretagne",
    "Normandie",
    // Work arrangements
    "Remote", "Télétravail", "Hybride", "France entière", "International",
];

pub const EDUCATIONS: &[&str] = &[
    "Bac",
    "Bac+1",
    "Bac+2 (BTS/DUT)",
    "Bac+3 (Licence)",
    "Bac+4",
    "Bac+5 (Master)",
    "Bac+6",
    "Bac+8 (Doctorat)",
    "École d'ingénieur",
    "École de commerce",
    "Formation professionnelle",
    "Autodidacte",
    "Certification professionnelle",
];

pub fn predefined(kind: VocabularyKind) -> &'static [&'static str] {
    match kind {
        VocabularyKind::Positions => POSITIONS,
        VocabularyKind::Skills => SKILLS,
        VocabularyKind::Locations => LOCATIONS,
        VocabularyKind::Educations => EDUCATIONS,
    }
}

fn extract<'a>(kind: VocabularyKind, candidates: &'a [Candidate]) -> Vec<&'a str> {
    match kind {
        VocabularyKind::Positions => candidates.iter().map(|c| c.position.as_str()).collect(),
        VocabularyKind::Skills => candidates
            .iter()
            .flat_map(|c| c.skills.iter().map(String::as_str))
            .collect(),
        VocabularyKind::Locations => candidates.iter().map(|c| c.location.as_str()).collect(),
        VocabularyKind::Educations => candidates.iter().map(|c| c.education.as_str()).collect(),
    }
}

/// Merges built-in, stored and candidate-derived values. First occurrence wins;
/// empty strings are dropped.
pub fn merge<'a>(sources: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    sources
        .into_iter()
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}

pub async fn load(
    store: &dyn VocabularyStore,
    kind: VocabularyKind,
    candidates: &[Candidate],
) -> Result<Vec<String>, VocabularyError> {
    let stored = store.get_list(&kind.store_key()).await?;
    Ok(merge(
        predefined(kind)
            .iter()
            .copied()
            .chain(stored.iter().map(String::as_str))
            .chain(extract(kind, candidates)),
    ))
}

/// Adds a custom term to the stored list. Returns false when it was already known.
pub async fn remember(
    store: &dyn VocabularyStore,
    kind: VocabularyKind,
    term: &str,
) -> Result<bool, AppError> {
    let term = term.trim();
    if term.is_empty() {
        return Err(AppError::Validation("term must not be empty".to_string()));
    }
    if predefined(kind).contains(&term) {
        return Ok(false);
    }

    let key = kind.store_key();
    let mut stored = store.get_list(&key).await?;
    if stored.iter().any(|s| s == term) {
        return Ok(false);
    }
    stored.push(term.to_string());
    store.set_list(&key, &stored).await?;

    info!(vocabulary = kind.as_str(), term, "Custom vocabulary term saved");
    Ok(true)
}
