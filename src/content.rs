use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::Deserialize;
use std::collections::HashSet;
use std::sync::LazyLock;
use thiserror::Error;

pub const CONTENT_FILE: &str = "portfolio.json";

const FALLBACK_YEAR: i32 = 2025;

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    load(CONTENT_FILE).expect("embedded portfolio content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
struct ContentAssets;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub passion: String,
    #[serde(rename = "headshot")]
    pub headshot_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    #[serde(rename = "icon")]
    pub icon_url: String,
}

impl SkillEntry {
    /// Character shown in the badge that replaces a broken icon.
    pub fn fallback_glyph(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectEntry {
    pub title: String,
    pub description: String,
    pub business_value: String,
    pub tech: Vec<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(rename = "screenshot", default)]
    pub screenshot_url: Option<String>,
}

impl ProjectEntry {
    /// `Top Cleaning Website` -> `top-cleaning-website.js`
    pub fn file_name(&self) -> String {
        let slug = self
            .title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{slug}.js")
    }

    /// `Top Cleaning Website` -> `TopCleaningWebsite`
    pub fn function_name(&self) -> String {
        self.title.split_whitespace().collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactLinks {
    pub email: String,
    pub github_url: String,
    pub github_handle: String,
    pub linkedin_url: String,
    pub linkedin_handle: String,
}

impl ContactLinks {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillEntry>,
    pub projects: Vec<ProjectEntry>,
    pub contact: ContactLinks,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("portfolio content not found: {0}")]
    NotFound(String),
    #[error("couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("skill listed twice: {0}")]
    DuplicateSkill(String),
    #[error("project {project} lists {tech} more than once")]
    DuplicateTech { project: String, tech: String },
}

impl Portfolio {
    fn validate(&self) -> Result<(), ContentError> {
        let mut names = HashSet::new();
        for skill in &self.skills {
            if !names.insert(skill.name.as_str()) {
                return Err(ContentError::DuplicateSkill(skill.name.clone()));
            }
        }
        for project in &self.projects {
            let mut seen = HashSet::new();
            if let Some(tech) = project.tech.iter().find(|t| !seen.insert(t.as_str())) {
                return Err(ContentError::DuplicateTech {
                    project: project.title.clone(),
                    tech: tech.clone(),
                });
            }
        }
        Ok(())
    }
}

pub fn parse(raw: &str) -> Result<Portfolio, ContentError> {
    let portfolio: Portfolio =
        serde_json::from_str(raw).map_err(|e| ContentError::Parse(e.to_string()))?;
    portfolio.validate()?;
    Ok(portfolio)
}

pub fn load(name: &str) -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(name).ok_or_else(|| ContentError::NotFound(name.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
    parse(raw)
}

/// The embedded site content, parsed on first use.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

pub fn copyright_year() -> i32 {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|t| t.year())
        .unwrap_or(FALLBACK_YEAR)
}
