/// How a crawler name is compared against the `User-agent` entries of a group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AgentMatching {
    /// Case-insensitive equality of the whole entry.
    #[default]
    Exact,
    /// Case-insensitive equality of the leading product token (`[A-Za-z_-]+`),
    /// so `Googlebot/2.1` matches `googlebot`.
    ProductToken,
}

/// How groups are flattened into `user_agents` and `rules` rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Every agent reports its own `User-agent` line; rules are attributed to
    /// the agent declared directly above them.
    #[default]
    Directive,
    /// Every agent reports the group's first line and owns every rule of the group.
    Group,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RobotsConfig {
    accept_typos: bool,
    agent_matching: AgentMatching,
    projection: ProjectionMode,
}

impl RobotsConfig {
    pub fn new(accept_typos: bool, agent_matching: AgentMatching, projection: ProjectionMode) -> Self {
        Self {
            accept_typos,
            agent_matching,
            projection,
        }
    }

    /// Accept common misspellings of directive keywords and whitespace in place of `:`.
    pub fn accept_typos(&self) -> bool {
        self.accept_typos
    }

    pub fn agent_matching(&self) -> AgentMatching {
        self.agent_matching
    }

    pub fn projection(&self) -> ProjectionMode {
        self.projection
    }
}
