use serde::Serialize;

use crate::robots::robots_config::ProjectionMode;
use crate::robots::robots_txt::{RobotsTxt, RuleKind};

/// One row of the `user_agents` enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgentRow<'a> {
    pub name: &'a str,
    pub source_line: u32,
}

/// One row of the `rules` enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRow<'a> {
    pub agent_name: &'a str,
    pub source_line: u32,
    pub kind: RuleKind,
    pub pattern: &'a str,
}

pub fn user_agents<'a>(robots: &RobotsTxt<'a>, mode: ProjectionMode) -> Vec<UserAgentRow<'a>> {
    robots
        .groups()
        .iter()
        .flat_map(|group| {
            let first_line = group.first_line();
            let agents = match mode {
                ProjectionMode::Directive => group.entries(),
                ProjectionMode::Group => group.agents(),
            };
            agents.iter().map(move |agent| UserAgentRow {
                name: agent.name,
                source_line: match mode {
                    ProjectionMode::Directive => agent.line,
                    ProjectionMode::Group => first_line,
                },
            })
        })
        .collect()
}

pub fn rules<'a>(robots: &RobotsTxt<'a>, mode: ProjectionMode) -> Vec<RuleRow<'a>> {
    let mut rows = Vec::new();
    for group in robots.groups() {
        let agents = match mode {
            ProjectionMode::Directive => std::slice::from_ref(group.last_entry()),
            ProjectionMode::Group => group.agents(),
        };
        for agent in agents {
            rows.extend(group.rules().iter().map(|rule| RuleRow {
                agent_name: agent.name,
                source_line: rule.line,
                kind: rule.kind,
                pattern: rule.pattern,
            }));
        }
    }
    rows
}
