//! Material classifier — assigns a category to a piece of material text.
//!
//! DESIGN
//! ======
//! Classification sits behind [`MaterialClassifier`] so the random stub can
//! be swapped for a real text classifier without touching case creation or
//! views. The trait is synchronous: classification is domain logic and must
//! not block on I/O or timers.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Closed set of material categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialCategory {
    Agents,
    Processes,
    Problems,
}

impl MaterialCategory {
    pub const ALL: [Self; 3] = [Self::Agents, Self::Processes, Self::Problems];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Agents => "agents",
            Self::Processes => "processes",
            Self::Problems => "problems",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classification result for one material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialAnalysis {
    pub category: MaterialCategory,
    pub details: String,
}

impl MaterialAnalysis {
    /// Analysis with the stock details sentence for `category`.
    #[must_use]
    pub fn templated(category: MaterialCategory) -> Self {
        Self { category, details: format!("This material is related to {category}.") }
    }
}

/// Capability boundary for material classification.
pub trait MaterialClassifier: Send + Sync {
    fn classify(&self, material: &str) -> MaterialAnalysis;
}

/// Stub classifier: uniform random category, templated details.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomClassifier;

impl MaterialClassifier for RandomClassifier {
    fn classify(&self, _material: &str) -> MaterialAnalysis {
        let idx = rand::rng().random_range(0..MaterialCategory::ALL.len());
        MaterialAnalysis::templated(MaterialCategory::ALL[idx])
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
