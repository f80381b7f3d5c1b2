//! Page views — typed view models for the four pages.
//!
//! DESIGN
//! ======
//! Rendering is a pure function of the page and the session. Views read
//! the current-case slot and never mutate it. An unmet precondition turns
//! into a `warning` view rather than an error.

use serde::{Deserialize, Serialize};

use crate::services::agents::{self, RiskTolerance};
use crate::services::cases::PREDEFINED_NAMES;
use crate::services::classifier::MaterialAnalysis;
use crate::services::feedback::{MAX_RATING, MIN_RATING};
use crate::state::{SessionState, Unmet};

pub const APP_TITLE: &str = "DecisionTwin";
pub const TAGLINE: &str = "Simulate and optimize organizational decisions with AI.";
pub const PARAMETERS_NOTE: &str = "Future versions will allow parameter tuning here.";
pub const INSIGHTS_NOTE: &str = "Full version will include bias detection, KPIs, and more.";
pub const CASE_CREATED_ACK: &str = "Case created!";

// =============================================================================
// PAGES
// =============================================================================

/// Sidebar options, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    Structuring,
    Simulation,
    Analysis,
}

impl Page {
    pub const ALL: [Self; 4] = [Self::Home, Self::Structuring, Self::Simulation, Self::Analysis];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Structuring => "Problem Structuring",
            Self::Simulation => "Simulation",
            Self::Analysis => "Analysis",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageOption {
    pub slug: Page,
    pub label: &'static str,
}

#[must_use]
pub fn page_options() -> Vec<PageOption> {
    Page::ALL.iter().map(|&p| PageOption { slug: p, label: p.label() }).collect()
}

// =============================================================================
// VIEW MODELS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub previous_cases: Vec<&'static str>,
    pub form_fields: [&'static str; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentRow {
    pub name: String,
    pub role: &'static str,
    pub risk_tolerance: RiskTolerance,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialRow {
    pub material: String,
    pub line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuringView {
    pub title: String,
    pub description: String,
    pub agents: Vec<AgentRow>,
    pub materials: Vec<MaterialRow>,
    pub parameters_note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationView {
    pub title: &'static str,
    pub agents: Vec<String>,
    pub action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisView {
    pub title: &'static str,
    pub recommendation: String,
    pub insights: &'static str,
    pub rating_min: u8,
    pub rating_max: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageView {
    Home(HomeView),
    Structuring(StructuringView),
    Simulation(SimulationView),
    Analysis(AnalysisView),
    Warning { message: &'static str },
}

impl From<Unmet> for PageView {
    fn from(unmet: Unmet) -> Self {
        Self::Warning { message: unmet.message() }
    }
}

/// Success/warning acknowledgment for button and form actions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    Success { message: String },
    Warning { message: &'static str },
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success { message: message.into() }
    }
}

impl From<Unmet> for Notice {
    fn from(unmet: Unmet) -> Self {
        Self::Warning { message: unmet.message() }
    }
}

// =============================================================================
// RENDER
// =============================================================================

#[must_use]
pub fn render(page: Page, session: &SessionState) -> PageView {
    let rendered = match page {
        Page::Home => Ok(PageView::Home(home())),
        Page::Structuring => session.require_case().map(|case| {
            PageView::Structuring(StructuringView {
                title: case.name.clone(),
                description: case.description.clone(),
                agents: case.agents.iter().filter_map(|name| agent_row(name)).collect(),
                materials: case.materials.iter().map(material_row).collect(),
                parameters_note: PARAMETERS_NOTE,
            })
        }),
        Page::Simulation => session.require_case().map(|case| {
            PageView::Simulation(SimulationView {
                title: "Simulation",
                agents: case.agents.clone(),
                action: "Start Simulation",
            })
        }),
        Page::Analysis => session.require_simulated().map(|case| {
            PageView::Analysis(AnalysisView {
                title: "Analysis",
                recommendation: case.recommendation.clone().unwrap_or_default(),
                insights: INSIGHTS_NOTE,
                rating_min: MIN_RATING,
                rating_max: MAX_RATING,
            })
        }),
    };

    rendered.unwrap_or_else(PageView::from)
}

fn home() -> HomeView {
    HomeView {
        title: APP_TITLE,
        tagline: TAGLINE,
        previous_cases: PREDEFINED_NAMES.to_vec(),
        form_fields: ["Case Name", "Case Description", "Materials (comma-separated)"],
    }
}

fn agent_row(name: &str) -> Option<AgentRow> {
    let agent = agents::find(name)?;
    Some(AgentRow {
        name: agent.name.to_owned(),
        role: agent.role,
        risk_tolerance: agent.risk_tolerance,
        description: agent.description,
    })
}

fn material_row((material, analysis): (&String, &MaterialAnalysis)) -> MaterialRow {
    MaterialRow {
        material: material.clone(),
        line: format!("{material}: {} - {}", analysis.category, analysis.details),
    }
}

#[cfg(test)]
#[path = "views_test.rs"]
mod tests;
