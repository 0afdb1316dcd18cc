use crate::robots::pattern_matcher::match_path;
use crate::robots::robots_config::AgentMatching;
use crate::robots::robots_txt::{Group, RobotsTxt, Rule, RuleKind};

/// Outcome of a match query, with the group and rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'g, 'a> {
    pub allowed: bool,
    pub group: Option<&'g Group<'a>>,
    pub rule: Option<&'g Rule<'a>>,
}

/// Picks the group that applies to `agent_name`.
///
/// A group naming the agent wins over the `*` group; among several naming it,
/// the one with the longest matching entry wins, then the earliest.
pub fn select_group<'g, 'a>(
    robots: &'g RobotsTxt<'a>,
    agent_name: &str,
    matching: AgentMatching,
) -> Option<&'g Group<'a>> {
    let mut best: Option<(usize, &'g Group<'a>)> = None;
    for group in robots.groups() {
        let longest = group
            .agents()
            .iter()
            .filter(|agent| !agent.is_wildcard() && agent_matches(agent.name, agent_name, matching))
            .map(|agent| agent.name.len())
            .max();
        if let Some(length) = longest {
            if best.is_none_or(|(best_length, _)| length > best_length) {
                best = Some((length, group));
            }
        }
    }

    best.map(|(_, group)| group)
        .or_else(|| robots.groups().iter().find(|group| group.has_wildcard()))
}

fn agent_matches(entry: &str, agent_name: &str, matching: AgentMatching) -> bool {
    match matching {
        AgentMatching::Exact => entry.eq_ignore_ascii_case(agent_name),
        AgentMatching::ProductToken => {
            let entry = product_token(entry);
            !entry.is_empty() && entry.eq_ignore_ascii_case(product_token(agent_name))
        }
    }
}

/// Leading run of `[A-Za-z_-]`, e.g. `Googlebot` for `Googlebot/2.1`.
pub fn product_token(agent: &str) -> &str {
    let agent = agent.trim_start();
    let end = agent
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '-' || c == '_'))
        .unwrap_or(agent.len());
    &agent[..end]
}

/// Picks the rule of `group` that decides `path`.
///
/// Longest match wins; on equal length `Allow` beats `Disallow`, then the
/// later line wins.
pub fn resolve_rule<'g, 'a>(group: &'g Group<'a>, path: &str) -> Option<&'g Rule<'a>> {
    group
        .rules()
        .iter()
        .filter_map(|rule| match_path(rule.pattern, path).map(|length| (length, rule)))
        .max_by_key(|&(length, rule)| (length, rule.kind == RuleKind::Allow, rule.line))
        .map(|(_, rule)| rule)
}

pub fn decide<'g, 'a>(
    robots: &'g RobotsTxt<'a>,
    agent_name: &str,
    path: &str,
    matching: AgentMatching,
) -> Decision<'g, 'a> {
    let group = select_group(robots, agent_name, matching);
    let decision = decide_in_group(group, path);
    tracing::debug!(
        agent = agent_name,
        path,
        group_line = group.map(Group::first_line),
        rule_line = decision.rule.map(|rule| rule.line),
        allowed = decision.allowed,
        "robots.txt decision"
    );
    decision
}

pub(crate) fn decide_in_group<'g, 'a>(group: Option<&'g Group<'a>>, path: &str) -> Decision<'g, 'a> {
    let rule = group.and_then(|group| resolve_rule(group, path));
    Decision {
        allowed: rule.is_none_or(|rule| rule.kind == RuleKind::Allow),
        group,
        rule,
    }
}

/// Whether `agent_name` may fetch `path` under `robots`.
pub fn allowed(robots: &RobotsTxt<'_>, agent_name: &str, path: &str) -> bool {
    decide(robots, agent_name, path, AgentMatching::Exact).allowed
}
