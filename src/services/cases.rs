//! Case registry — predefined cases and user-created cases.
//!
//! DESIGN
//! ======
//! Predefined cases are immutable templates; every selection hands out a
//! fresh copy, so simulation results written into one selection are never
//! seen by the next. User-created cases attach the full agent roster and
//! classify each material through the injected [`MaterialClassifier`].
//!
//! Inputs are accepted unvalidated: an empty name, description, or
//! material list produces a degenerate but usable case.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::agents;
use super::classifier::{MaterialAnalysis, MaterialCategory, MaterialClassifier};
use crate::error::ErrorCode;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("unknown predefined case: {0}")]
    UnknownPredefined(String),
}

impl ErrorCode for CaseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownPredefined(_) => "E_UNKNOWN_CASE",
        }
    }

    fn status(&self) -> axum::http::StatusCode {
        match self {
            Self::UnknownPredefined(_) => axum::http::StatusCode::NOT_FOUND,
        }
    }
}

// =============================================================================
// MATERIALS
// =============================================================================

/// Material name → analysis. Keys keep first-insertion order; inserting an
/// existing key replaces its analysis in place.
pub type Materials = IndexMap<String, MaterialAnalysis>;

// =============================================================================
// CASE
// =============================================================================

/// A decision scenario. `discussion` and `recommendation` stay `None` until
/// a simulation runs, except for predefined cases which ship with both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Case {
    pub name: String,
    pub description: String,
    pub scenario: String,
    pub agents: Vec<String>,
    pub materials: Materials,
    pub discussion: Option<String>,
    pub recommendation: Option<String>,
}

/// "Create Case" form input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewCaseForm {
    pub name: String,
    pub description: String,
    /// Comma-separated material names.
    pub materials: String,
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
#[must_use]
pub fn parse_materials(raw: &str) -> Vec<&str> {
    raw.split(',').map(str::trim).filter(|m| !m.is_empty()).collect()
}

/// Build a new case from form input, classifying each material.
#[must_use]
pub fn create_case(form: &NewCaseForm, classifier: &dyn MaterialClassifier) -> Case {
    let mut materials = Materials::new();
    for material in parse_materials(&form.materials) {
        materials.insert(material.to_owned(), classifier.classify(material));
    }

    Case {
        name: form.name.clone(),
        description: form.description.clone(),
        scenario: form.description.clone(),
        agents: agents::all_names(),
        materials,
        discussion: None,
        recommendation: None,
    }
}

// =============================================================================
// PREDEFINED CASES
// =============================================================================

pub const NEW_PRODUCT_INVESTMENT: &str = "New Product Investment";
pub const MARKET_EXPANSION: &str = "Market Expansion";

/// Predefined case names, in display order.
pub const PREDEFINED_NAMES: [&str; 2] = [NEW_PRODUCT_INVESTMENT, MARKET_EXPANSION];

// Stored exactly as authored, markdown hard breaks included.
const NEW_PRODUCT_DISCUSSION: &str = "
**CEO**: Investing could make us market leaders, but it must fit our strategy.\x20\x20
**CFO**: Projections are solid, but upfront costs are a concern.\x20\x20
**CMO**: This could skyrocket our brand if marketed well.\x20\x20
**Analysis**: CFO’s caution balances CMO’s optimism.\x20\x20
**Recommendation**: Pilot the product first.
";

const MARKET_EXPANSION_DISCUSSION: &str = "
**CEO**: Expansion diversifies revenue but requires careful planning.\x20\x20
**CMO**: A strong campaign can establish our presence fast.\x20\x20
**COO**: Logistics must be flawless to succeed.\x20\x20
**Analysis**: COO’s focus on operations complements CMO’s vision.\x20\x20
**Recommendation**: Start with a feasibility study.
";

struct Template {
    name: &'static str,
    scenario: &'static str,
    agents: &'static [&'static str],
    materials: &'static [(&'static str, MaterialCategory, &'static str)],
    discussion: &'static str,
    recommendation: &'static str,
}

const TEMPLATES: [Template; 2] = [
    Template {
        name: NEW_PRODUCT_INVESTMENT,
        scenario: "Should we invest in a new product line?",
        agents: &["CEO", "CFO", "CMO"],
        materials: &[
            ("Market research report", MaterialCategory::Problems, "Indicates market demand."),
            ("Financial projections", MaterialCategory::Processes, "Shows ROI potential."),
        ],
        discussion: NEW_PRODUCT_DISCUSSION,
        recommendation: "Pilot the product first.",
    },
    Template {
        name: MARKET_EXPANSION,
        scenario: "Should we expand to a new market?",
        agents: &["CEO", "CMO", "COO"],
        materials: &[
            ("Competitor analysis", MaterialCategory::Problems, "Shows competitive landscape."),
            ("Logistics plan", MaterialCategory::Processes, "Outlines supply chain needs."),
        ],
        discussion: MARKET_EXPANSION_DISCUSSION,
        recommendation: "Start with a feasibility study.",
    },
];

impl Template {
    fn instantiate(&self) -> Case {
        let mut materials = Materials::new();
        for (material, category, details) in self.materials {
            let analysis = MaterialAnalysis { category: *category, details: (*details).to_owned() };
            materials.insert((*material).to_owned(), analysis);
        }

        Case {
            name: self.name.to_owned(),
            description: self.scenario.to_owned(),
            scenario: self.scenario.to_owned(),
            agents: self.agents.iter().map(|a| (*a).to_owned()).collect(),
            materials,
            discussion: Some(self.discussion.to_owned()),
            recommendation: Some(self.recommendation.to_owned()),
        }
    }
}

/// Fresh copy of a predefined case.
///
/// # Errors
///
/// Returns [`CaseError::UnknownPredefined`] if no case has that name.
pub fn predefined(name: &str) -> Result<Case, CaseError> {
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .map(Template::instantiate)
        .ok_or_else(|| CaseError::UnknownPredefined(name.to_owned()))
}

#[cfg(test)]
#[path = "cases_test.rs"]
mod tests;
