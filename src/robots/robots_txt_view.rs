use crate::robots::projection::{self, RuleRow, UserAgentRow};
use crate::robots::robots_config::RobotsConfig;
use crate::robots::robots_txt::RobotsTxt;
use crate::robots::robots_txt_matcher::RobotsTxtMatcher;

/// A parsed document borrowing the text it was parsed from.
#[derive(Debug, Clone)]
pub struct RobotsTxtView<'a> {
    content: &'a str,
    robots: RobotsTxt<'a>,
    config: RobotsConfig,
}

impl<'a> RobotsTxtView<'a> {
    pub fn parse(content: &'a str) -> Self {
        Self::parse_with(content, RobotsConfig::default())
    }

    pub fn parse_with(content: &'a str, config: RobotsConfig) -> Self {
        Self {
            content,
            robots: RobotsTxt::parse_with(content, &config),
            config,
        }
    }

    pub fn content(&self) -> &'a str {
        self.content
    }

    pub fn robots(&self) -> &RobotsTxt<'a> {
        &self.robots
    }

    pub fn config(&self) -> &RobotsConfig {
        &self.config
    }

    pub fn matcher(&self, agent: &str) -> RobotsTxtMatcher<'_, 'a> {
        RobotsTxtMatcher::new(&self.robots, agent, self.config.agent_matching())
    }

    pub fn user_agents(&self) -> Vec<UserAgentRow<'a>> {
        projection::user_agents(&self.robots, self.config.projection())
    }

    pub fn rules(&self) -> Vec<RuleRow<'a>> {
        projection::rules(&self.robots, self.config.projection())
    }
}
