use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

const PORTFOLIO_FILE: &str = "portfolio.json";

/// Site content, parsed from the embedded data file on first access.
pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match Portfolio::load() {
    Ok(portfolio) => portfolio,
    Err(e) => {
        log::error!("couldn't load portfolio data: {e}");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "data"]
pub struct DataAssets;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub repo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub id: u32,
    pub category: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Data file not found: {0}")]
    NotFound(&'static str),
    #[error("Couldn't parse portfolio data")]
    ParseError(#[from] serde_json::Error),
    #[error("Duplicate {kind} id {id}")]
    DuplicateId { kind: &'static str, id: u32 },
}

impl Portfolio {
    pub fn load() -> Result<Self, DataError> {
        let file = DataAssets::get(PORTFOLIO_FILE).ok_or(DataError::NotFound(PORTFOLIO_FILE))?;
        Self::from_json(&file.data)
    }

    pub fn from_json(bytes: &[u8]) -> Result<Self, DataError> {
        let portfolio = serde_json::from_slice::<Portfolio>(bytes)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Ids key the rendered lists, so they must be unique per collection.
    fn validate(&self) -> Result<(), DataError> {
        unique_ids("project", self.projects.iter().map(|p| p.id))?;
        unique_ids("skill group", self.skills.iter().map(|s| s.id))
    }
}

fn unique_ids(kind: &'static str, ids: impl Iterator<Item = u32>) -> Result<(), DataError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(DataError::DuplicateId { kind, id });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_data_loads() {
        let portfolio = Portfolio::load().expect("embedded data should parse");
        assert!(!portfolio.projects.is_empty());
        assert!(!portfolio.skills.is_empty());
        assert!(!portfolio.profile.name.is_empty());
        assert_eq!(&*PORTFOLIO, &portfolio);
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{
            "profile": {"name": "A", "email": "a@b.c", "tagline": "t"},
            "projects": [{"id": 7, "title": "T", "description": "D"}],
            "skills": [{"id": 1, "category": "Tools"}]
        }"#;
        let portfolio = Portfolio::from_json(json.as_bytes()).unwrap();
        let project = &portfolio.projects[0];
        assert_eq!(project.id, 7);
        assert!(project.tags.is_empty());
        assert_eq!(project.link, None);
        assert_eq!(project.repo, None);
        assert!(portfolio.skills[0].items.is_empty());
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let json = r#"{
            "profile": {"name": "A", "email": "a@b.c", "tagline": "t"},
            "projects": [
                {"id": 1, "title": "One", "description": ""},
                {"id": 1, "title": "Two", "description": ""}
            ],
            "skills": []
        }"#;
        let err = Portfolio::from_json(json.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataError::DuplicateId {
                kind: "project",
                id: 1
            }
        ));
    }

    #[test]
    fn test_duplicate_skill_id_rejected() {
        let json = r#"{
            "profile": {"name": "A", "email": "a@b.c", "tagline": "t"},
            "projects": [],
            "skills": [
                {"id": 3, "category": "Tools", "items": []},
                {"id": 3, "category": "Languages", "items": []}
            ]
        }"#;
        let err = Portfolio::from_json(json.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate skill group id 3");
    }

    #[test]
    fn test_malformed_json() {
        let err = Portfolio::from_json(b"{ not json").unwrap_err();
        assert!(matches!(err, DataError::ParseError(_)));
    }
}
