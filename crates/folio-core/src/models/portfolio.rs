//! The grounding document: profile facts, project case studies and the tech
//! stack. Loaded once at startup and never written.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::wire::{ProjectEntry, TechGroup};

/// Grounding data shipped with the crate, used when no override path is set.
pub const BUNDLED_PORTFOLIO: &str = include_str!("../../data/portfolio.json");

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Portfolio {
    pub name: String,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub open_to_remote: bool,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tech_stack: Vec<TechItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Links {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

/// A case study told with the STAR method.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub tagline: String,
    pub situation: String,
    pub task: String,
    pub action: Vec<String>,
    pub result: ProjectResult,
    pub github: String,
    pub demo: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProjectResult {
    pub metric: String,
    pub label: String,
    pub suffix: String,
}

impl Project {
    pub fn slug(&self) -> String {
        slugify(&self.title)
    }
}

/// Lower-case the title and replace every whitespace run with a single `-`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    slug
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TechCategory {
    Frontend,
    Backend,
    Ai,
    Tools,
}

impl TechCategory {
    /// Display order.
    pub const ALL: [TechCategory; 4] = [
        TechCategory::Frontend,
        TechCategory::Backend,
        TechCategory::Ai,
        TechCategory::Tools,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TechCategory::Frontend => "FRONTEND",
            TechCategory::Backend => "BACKEND",
            TechCategory::Ai => "AI/ML",
            TechCategory::Tools => "DEVOPS",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TechItem {
    pub name: String,
    pub category: TechCategory,
    /// Proficiency weight, 1–10.
    pub weight: u8,
    pub description: String,
}

/// The validated grounding document.
///
/// Keeps the compact JSON text so every system instruction embeds exactly the
/// same serialization, plus a typed view for the read endpoints.
#[derive(Debug, Clone)]
pub struct GroundingDocument {
    json: String,
    portfolio: Portfolio,
}

impl GroundingDocument {
    pub fn from_json(text: &str) -> Result<Self, CoreError> {
        let raw: serde_json::Value = serde_json::from_str(text)?;
        if !raw.is_object() {
            return Err(CoreError::InvalidGrounding(
                "top level must be a JSON object".to_string(),
            ));
        }
        let portfolio: Portfolio = serde_json::from_value(raw.clone())?;
        validate(&portfolio)?;

        Ok(Self {
            json: serde_json::to_string(&raw)?,
            portfolio,
        })
    }

    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json(BUNDLED_PORTFOLIO)
    }

    pub fn name(&self) -> &str {
        &self.portfolio.name
    }

    /// Compact JSON serialization of the whole document.
    pub fn as_json(&self) -> &str {
        &self.json
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn projects(&self) -> Vec<ProjectEntry> {
        self.portfolio
            .projects
            .iter()
            .map(|p| ProjectEntry {
                slug: p.slug(),
                project: p.clone(),
            })
            .collect()
    }

    pub fn project(&self, slug: &str) -> Option<&Project> {
        self.portfolio.projects.iter().find(|p| p.slug() == slug)
    }

    /// Tech items grouped by category in display order. Empty categories are
    /// kept so the front end can render a stable legend.
    pub fn tech_groups(&self) -> Vec<TechGroup> {
        TechCategory::ALL
            .iter()
            .map(|&category| TechGroup {
                category,
                label: category.label().to_string(),
                items: self
                    .portfolio
                    .tech_stack
                    .iter()
                    .filter(|t| t.category == category)
                    .cloned()
                    .collect(),
            })
            .collect()
    }
}

fn validate(portfolio: &Portfolio) -> Result<(), CoreError> {
    if portfolio.name.trim().is_empty() {
        return Err(CoreError::InvalidGrounding("name is empty".to_string()));
    }

    if let Some(item) = portfolio
        .tech_stack
        .iter()
        .find(|t| !(1..=10).contains(&t.weight))
    {
        return Err(CoreError::InvalidGrounding(format!(
            "tech item {} has weight {} (expected 1-10)",
            item.name, item.weight
        )));
    }

    let mut seen = HashSet::new();
    for project in &portfolio.projects {
        let slug = project.slug();
        if !seen.insert(slug.clone()) {
            return Err(CoreError::InvalidGrounding(format!(
                "duplicate project slug: {slug}"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Astra Link"), "astra-link");
        assert_eq!(slugify("Edge  Cache\tProxy"), "edge-cache-proxy");
        assert_eq!(slugify(" Lead"), "-lead");
    }

    #[test]
    fn bundled_document_is_valid() {
        let doc = GroundingDocument::bundled().unwrap();
        assert!(!doc.name().is_empty());
        assert!(doc.project("astra-link").is_some());
    }

    #[test]
    fn compact_json_has_no_pretty_whitespace() {
        let doc = GroundingDocument::from_json("{\n  \"name\": \"Ada\"\n}").unwrap();
        assert_eq!(doc.as_json(), r#"{"name":"Ada"}"#);
    }
}
