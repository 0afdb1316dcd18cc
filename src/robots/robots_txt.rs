use std::fmt;

use serde::Serialize;

use crate::robots::directive::directives;
use crate::robots::group_builder::GroupBuilder;
use crate::robots::line_scanner::LineScanner;
use crate::robots::robots_config::RobotsConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Allow,
    Disallow,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Allow => "allow",
            RuleKind::Disallow => "disallow",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An `Allow` or `Disallow` line of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<'a> {
    pub kind: RuleKind,
    pub pattern: &'a str,
    pub line: u32,
}

/// A `User-agent` entry of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Agent<'a> {
    pub name: &'a str,
    pub line: u32,
}

impl Agent<'_> {
    pub fn is_wildcard(&self) -> bool {
        self.name == "*"
    }
}

/// One or more `User-agent` lines followed by the rules that apply to them.
///
/// A group always has at least one agent. `agents` are distinct when compared
/// case-insensitively and keep the first spelling; `entries` keep every
/// `User-agent` line of the group, repeats included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    agents: Vec<Agent<'a>>,
    entries: Vec<Agent<'a>>,
    rules: Vec<Rule<'a>>,
}

impl<'a> Group<'a> {
    pub(crate) fn open(name: &'a str, line: u32) -> Self {
        let agent = Agent { name, line };
        Self {
            agents: vec![agent.clone()],
            entries: vec![agent],
            rules: Vec::new(),
        }
    }

    pub(crate) fn add_agent(&mut self, name: &'a str, line: u32) {
        let agent = Agent { name, line };
        if !self.agents.iter().any(|known| known.name.eq_ignore_ascii_case(name)) {
            self.agents.push(agent.clone());
        }
        self.entries.push(agent);
    }

    pub(crate) fn add_rule(&mut self, rule: Rule<'a>) {
        self.rules.push(rule);
    }

    pub fn agents(&self) -> &[Agent<'a>] {
        &self.agents
    }

    /// Every `User-agent` line of the group in document order.
    pub fn entries(&self) -> &[Agent<'a>] {
        &self.entries
    }

    pub fn rules(&self) -> &[Rule<'a>] {
        &self.rules
    }

    /// Line of the `User-agent` directive that opened the group.
    pub fn first_line(&self) -> u32 {
        self.entries[0].line
    }

    /// The `User-agent` line directly above the group's rules.
    pub fn last_entry(&self) -> &Agent<'a> {
        &self.entries[self.entries.len() - 1]
    }

    pub fn has_wildcard(&self) -> bool {
        self.agents.iter().any(Agent::is_wildcard)
    }
}

/// A parsed robots.txt document: its groups in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTxt<'a> {
    groups: Vec<Group<'a>>,
}

impl<'a> RobotsTxt<'a> {
    pub fn parse(text: &'a str) -> Self {
        Self::parse_with(text, &RobotsConfig::default())
    }

    pub fn parse_with(text: &'a str, config: &RobotsConfig) -> Self {
        let mut builder = GroupBuilder::new();
        for directive in directives(LineScanner::new(text), config) {
            builder.push(directive);
        }
        let robots = builder.finish();
        tracing::debug!(
            groups = robots.groups.len(),
            rules = robots.groups.iter().map(|group| group.rules.len()).sum::<usize>(),
            "parsed robots.txt"
        );
        robots
    }

    pub(crate) fn from_groups(groups: Vec<Group<'a>>) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
