//! Discussion simulator — replays or synthesizes a case transcript.
//!
//! DESIGN
//! ======
//! A case that already carries a discussion (predefined cases) replays it
//! verbatim. Otherwise one templated line is written per agent, in the
//! case's agent order, followed by a fixed closing line. No randomness and
//! no pacing here; the route layer decides how fast lines reach a client.

use super::cases::Case;

pub const CLOSING_LINE: &str = "Final Recommendation: Proceed with caution.";

/// Recommendation stored when a case has none of its own.
pub const DEFAULT_RECOMMENDATION: &str = "Proceed with caution";

fn agent_line(agent: &str) -> String {
    format!("{agent}: Based on my profile, I think we should evaluate risks and opportunities.")
}

/// Templated transcript for an agent list.
#[must_use]
pub fn synthesize_discussion(agents: &[String]) -> String {
    let mut discussion = String::new();
    for agent in agents {
        discussion.push_str(&agent_line(agent));
        discussion.push('\n');
    }
    discussion.push_str(CLOSING_LINE);
    discussion
}

/// Run the simulator against `case`, storing the discussion and filling in
/// the default recommendation if the case has none. Returns the discussion.
pub fn run(case: &mut Case) -> &str {
    if case.discussion.is_none() {
        case.discussion = Some(synthesize_discussion(&case.agents));
    }
    if case.recommendation.is_none() {
        case.recommendation = Some(DEFAULT_RECOMMENDATION.to_owned());
    }
    case.discussion.as_deref().unwrap_or_default()
}

/// Displayable transcript lines: every line with non-whitespace content,
/// trailing whitespace (markdown hard breaks) removed.
#[must_use]
pub fn transcript_lines(discussion: &str) -> Vec<&str> {
    discussion.lines().map(str::trim_end).filter(|line| !line.trim().is_empty()).collect()
}

#[cfg(test)]
#[path = "simulation_test.rs"]
mod tests;
