mod decision;
mod directive;
mod group_builder;
mod line_scanner;
mod match_target;
mod pattern_matcher;
mod projection;
mod robots_config;
mod robots_error;
mod robots_txt;
mod robots_txt_matcher;
mod robots_txt_source;
mod robots_txt_view;

pub use decision::{Decision, allowed, decide, product_token, resolve_rule, select_group};
pub use directive::{Directive, LineDirective, classify, directives};
pub use group_builder::GroupBuilder;
pub use line_scanner::{LineScanner, ScannedLine};
pub use match_target::path_of;
pub use pattern_matcher::{match_path, matches_path};
pub use projection::{RuleRow, UserAgentRow, rules, user_agents};
pub use robots_config::{AgentMatching, ProjectionMode, RobotsConfig};
pub use robots_error::RobotsError;
pub use robots_txt::{Agent, Group, RobotsTxt, Rule, RuleKind};
pub use robots_txt_matcher::RobotsTxtMatcher;
pub use robots_txt_source::{RobotsTxtSource, STDIN_ORIGIN};
pub use robots_txt_view::RobotsTxtView;
