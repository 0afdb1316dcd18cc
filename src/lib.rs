//! Robots Exclusion Protocol engine.
//!
//! Parses robots.txt text into user-agent groups and answers whether a crawler
//! may fetch a path. Every call re-parses its input; nothing is cached.
//!
//! ```
//! let robots_txt = "User-agent: *\nDisallow: /search\nAllow: /search/about\n";
//! assert!(!robotstxt_engine::matches(robots_txt, "mybot", "/search?q=rust"));
//! assert!(robotstxt_engine::matches(robots_txt, "mybot", "/search/about"));
//! ```

pub mod robots;

use crate::robots::{
    AgentMatching, ProjectionMode, RobotsTxt, RobotsTxtMatcher, RuleRow, UserAgentRow,
};

/// `v` followed by the package version.
pub fn version() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

/// Build metadata: the version and the git commit the crate was built from.
pub fn debug() -> String {
    format!(
        "Version: {}\nSource: {}\n",
        version(),
        env!("ROBOTSTXT_GIT_HASH")
    )
}

/// Whether `agent` may fetch `path` under `robots_txt`.
///
/// `path` may also be an `http` or `https` URL, in which case its path and query
/// are used exactly as written.
pub fn matches(robots_txt: &str, agent: &str, path: &str) -> bool {
    let robots = RobotsTxt::parse(robots_txt);
    RobotsTxtMatcher::new(&robots, agent, AgentMatching::Exact).check_path(path)
}

/// Every `User-agent` entry of `robots_txt` with its source line, in document order.
pub fn user_agents(robots_txt: &str) -> Vec<UserAgentRow<'_>> {
    robots::user_agents(&RobotsTxt::parse(robots_txt), ProjectionMode::default())
}

/// Every rule of `robots_txt` with the agent it applies to, in document order.
pub fn rules(robots_txt: &str) -> Vec<RuleRow<'_>> {
    robots::rules(&RobotsTxt::parse(robots_txt), ProjectionMode::default())
}
