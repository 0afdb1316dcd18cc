use robotstxt_engine::robots::{Decision, RuleKind};
use serde::Serialize;

/// The rule that decided a match query.
#[derive(Debug, Clone, Serialize)]
pub struct DecidingRule {
    pub kind: RuleKind,
    pub pattern: String,
    pub source_line: u32,
}

/// Result of one (document, agent, path) query, detached from the document text.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    pub origin: String,
    pub agent: String,
    pub path: String,
    pub allowed: bool,
    pub rule: Option<DecidingRule>,
}

impl MatchOutcome {
    pub fn new(origin: &str, agent: &str, path: &str, decision: &Decision<'_, '_>) -> Self {
        Self {
            origin: origin.to_owned(),
            agent: agent.to_owned(),
            path: path.to_owned(),
            allowed: decision.allowed,
            rule: decision.rule.map(|rule| DecidingRule {
                kind: rule.kind,
                pattern: rule.pattern.to_owned(),
                source_line: rule.line,
            }),
        }
    }
}
