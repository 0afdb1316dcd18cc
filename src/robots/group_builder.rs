use std::mem;

use crate::robots::directive::{Directive, LineDirective};
use crate::robots::robots_txt::{Group, RobotsTxt, Rule, RuleKind};

enum BuilderState<'a> {
    AwaitingFirstAgent,
    InGroup(Group<'a>),
}

/// Folds a directive stream into groups.
pub struct GroupBuilder<'a> {
    state: BuilderState<'a>,
    groups: Vec<Group<'a>>,
}

impl<'a> GroupBuilder<'a> {
    pub fn new() -> Self {
        Self {
            state: BuilderState::AwaitingFirstAgent,
            groups: Vec::new(),
        }
    }

    pub fn push(&mut self, directive: LineDirective<'a>) {
        let LineDirective { line, directive } = directive;
        let state = mem::replace(&mut self.state, BuilderState::AwaitingFirstAgent);

        self.state = match (state, directive) {
            (state, Directive::Ignored) => state,
            (BuilderState::AwaitingFirstAgent, Directive::UserAgent(name)) => {
                BuilderState::InGroup(Group::open(name, line))
            }
            (BuilderState::InGroup(mut group), Directive::UserAgent(name)) => {
                if group.rules().is_empty() {
                    group.add_agent(name, line);
                    BuilderState::InGroup(group)
                } else {
                    self.groups.push(group);
                    BuilderState::InGroup(Group::open(name, line))
                }
            }
            (BuilderState::InGroup(mut group), Directive::Allow(pattern)) => {
                group.add_rule(Rule {
                    kind: RuleKind::Allow,
                    pattern,
                    line,
                });
                BuilderState::InGroup(group)
            }
            (BuilderState::InGroup(mut group), Directive::Disallow(pattern)) => {
                group.add_rule(Rule {
                    kind: RuleKind::Disallow,
                    pattern,
                    line,
                });
                BuilderState::InGroup(group)
            }
            (BuilderState::AwaitingFirstAgent, Directive::Allow(_) | Directive::Disallow(_)) => {
                tracing::trace!(line, "discarding rule outside of any user-agent group");
                BuilderState::AwaitingFirstAgent
            }
        };
    }

    pub fn finish(mut self) -> RobotsTxt<'a> {
        if let BuilderState::InGroup(group) = self.state {
            self.groups.push(group);
        }
        RobotsTxt::from_groups(self.groups)
    }
}

impl Default for GroupBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
