//! Portfolio facet filtering.
//!
//! Three independent facets (discipline, service type, skill category) are
//! combined with AND. A facet set to [`ALL`] places no constraint.

use crate::domain::model::PortfolioProject;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 「不限」的選項值
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Facet {
    Discipline,
    ServiceType,
    SkillCategory,
}

impl Facet {
    pub const ALL_FACETS: [Facet; 3] = [Facet::Discipline, Facet::ServiceType, Facet::SkillCategory];

    pub fn value_of<'a>(&self, project: &'a PortfolioProject) -> Option<&'a str> {
        match self {
            Facet::Discipline => project.discipline.as_deref(),
            Facet::ServiceType => project.service_type.as_deref(),
            Facet::SkillCategory => project.skill_category.as_deref(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Discipline => "Discipline",
            Facet::ServiceType => "Service Type",
            Facet::SkillCategory => "Skill Category",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FacetChoice {
    #[default]
    All,
    Value(String),
}

impl FacetChoice {
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FacetChoice::All => true,
            FacetChoice::Value(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FacetChoice::All => ALL,
            FacetChoice::Value(v) => v,
        }
    }
}

impl From<&str> for FacetChoice {
    fn from(s: &str) -> Self {
        if s == ALL {
            FacetChoice::All
        } else {
            FacetChoice::Value(s.to_string())
        }
    }
}

impl From<Option<String>> for FacetChoice {
    fn from(s: Option<String>) -> Self {
        s.as_deref().map(FacetChoice::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSelection {
    pub discipline: FacetChoice,
    pub service_type: FacetChoice,
    pub skill_category: FacetChoice,
}

impl FacetSelection {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with(mut self, facet: Facet, choice: impl Into<FacetChoice>) -> Self {
        *self.choice_mut(facet) = choice.into();
        self
    }

    pub fn choice(&self, facet: Facet) -> &FacetChoice {
        match facet {
            Facet::Discipline => &self.discipline,
            Facet::ServiceType => &self.service_type,
            Facet::SkillCategory => &self.skill_category,
        }
    }

    fn choice_mut(&mut self, facet: Facet) -> &mut FacetChoice {
        match facet {
            Facet::Discipline => &mut self.discipline,
            Facet::ServiceType => &mut self.service_type,
            Facet::SkillCategory => &mut self.skill_category,
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        Facet::ALL_FACETS
            .iter()
            .all(|f| *self.choice(*f) == FacetChoice::All)
    }

    pub fn matches(&self, project: &PortfolioProject) -> bool {
        Facet::ALL_FACETS
            .iter()
            .all(|f| self.choice(*f).matches(f.value_of(project)))
    }
}

/// 依選擇過濾專案，保留原始順序
pub fn filter_projects(projects: &[PortfolioProject], selection: &FacetSelection) -> Vec<PortfolioProject> {
    projects
        .iter()
        .filter(|p| selection.matches(p))
        .cloned()
        .collect()
}

/// 某個 facet 的可選值：`"All"` 加上首次出現順序的不重複非空值
pub fn facet_options(projects: &[PortfolioProject], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut options = vec![ALL.to_string()];

    for value in projects.iter().filter_map(|p| facet.value_of(p)) {
        // 值剛好是 "All" 的記錄無法被單獨選出，不列為選項
        if value.is_empty() || value == ALL {
            continue;
        }
        if seen.insert(value) {
            options.push(value.to_string());
        }
    }
    options
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetOptions {
    pub disciplines: Vec<String>,
    pub service_types: Vec<String>,
    pub skill_categories: Vec<String>,
}

impl FacetOptions {
    pub fn derive(projects: &[PortfolioProject]) -> Self {
        Self {
            disciplines: facet_options(projects, Facet::Discipline),
            service_types: facet_options(projects, Facet::ServiceType),
            skill_categories: facet_options(projects, Facet::SkillCategory),
        }
    }

    pub fn for_facet(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Discipline => &self.disciplines,
            Facet::ServiceType => &self.service_types,
            Facet::SkillCategory => &self.skill_categories,
        }
    }
}
