//! Agent roster — the fixed stakeholder personas.
//!
//! DESIGN
//! ======
//! Agents are static records defined at compile time. They are never
//! created or destroyed at runtime; cases refer to them by name.

use serde::Serialize;

/// How much risk an agent is comfortable with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskTolerance {
    Low,
    Moderate,
    High,
}

impl RiskTolerance {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for RiskTolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stakeholder persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Agent {
    pub name: &'static str,
    pub role: &'static str,
    pub risk_tolerance: RiskTolerance,
    pub description: &'static str,
}

pub const ROSTER: [Agent; 4] = [
    Agent {
        name: "CEO",
        role: "Chief Executive Officer",
        risk_tolerance: RiskTolerance::Moderate,
        description: "Focuses on strategy and growth.",
    },
    Agent {
        name: "CFO",
        role: "Chief Financial Officer",
        risk_tolerance: RiskTolerance::Low,
        description: "Prioritizes financial stability.",
    },
    Agent {
        name: "CMO",
        role: "Chief Marketing Officer",
        risk_tolerance: RiskTolerance::High,
        description: "Drives bold marketing initiatives.",
    },
    Agent {
        name: "COO",
        role: "Chief Operations Officer",
        risk_tolerance: RiskTolerance::Moderate,
        description: "Ensures operational efficiency.",
    },
];

/// Look up a roster agent by name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Agent> {
    ROSTER.iter().find(|a| a.name == name)
}

/// All roster names, in roster order.
#[must_use]
pub fn all_names() -> Vec<String> {
    ROSTER.iter().map(|a| a.name.to_owned()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roster_has_four_unique_names() {
        let names = all_names();
        assert_eq!(names, vec!["CEO", "CFO", "CMO", "COO"]);
    }

    #[test]
    fn find_known_agent() {
        let cfo = find("CFO").unwrap();
        assert_eq!(cfo.role, "Chief Financial Officer");
        assert_eq!(cfo.risk_tolerance, RiskTolerance::Low);
    }

    #[test]
    fn find_is_case_sensitive() {
        assert!(find("ceo").is_none());
        assert!(find("CTO").is_none());
    }

    #[test]
    fn risk_tolerance_display() {
        assert_eq!(RiskTolerance::High.to_string(), "High");
        assert_eq!(serde_json::to_value(RiskTolerance::Moderate).unwrap(), "Moderate");
    }
}
