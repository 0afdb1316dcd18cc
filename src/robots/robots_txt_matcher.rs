use crate::robots::decision::{self, Decision};
use crate::robots::match_target::path_of;
use crate::robots::robots_config::AgentMatching;
use crate::robots::robots_txt::{Group, RobotsTxt};

/// Answers match queries for one crawler against one document.
///
/// The applicable group is selected once, when the matcher is created.
#[derive(Debug, Clone)]
pub struct RobotsTxtMatcher<'g, 'a> {
    agent: String,
    group: Option<&'g Group<'a>>,
}

impl<'g, 'a> RobotsTxtMatcher<'g, 'a> {
    pub fn new(robots: &'g RobotsTxt<'a>, agent: &str, matching: AgentMatching) -> Self {
        let group = decision::select_group(robots, agent, matching);
        tracing::debug!(
            agent,
            group_line = group.map(Group::first_line),
            "selected robots.txt group"
        );
        Self {
            agent: agent.to_owned(),
            group,
        }
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn group(&self) -> Option<&'g Group<'a>> {
        self.group
    }

    /// Decides `target`, which may be a path or an absolute URL.
    pub fn decide(&self, target: &str) -> Decision<'g, 'a> {
        let path = path_of(target);
        let decision = decision::decide_in_group(self.group, &path);
        tracing::trace!(
            agent = self.agent.as_str(),
            path = %path,
            rule_line = decision.rule.map(|rule| rule.line),
            allowed = decision.allowed,
            "checked path"
        );
        decision
    }

    pub fn check_path(&self, target: &str) -> bool {
        self.decide(target).allowed
    }
}
