//! End-to-end tests of the library surface: `matches`, `user_agents`, `rules`.

use proptest::prelude::*;
use robotstxt_engine::robots::{
    AgentMatching, ProjectionMode, RobotsConfig, RobotsTxt, RobotsTxtView, RuleKind,
};
use robotstxt_engine::{debug, matches, rules, user_agents, version};

const GOOGLE: &str = include_str!("fixtures/google_robots.txt");

fn rule_tuple(text: &str, index: usize) -> (String, u32, RuleKind, String) {
    let rows = rules(text);
    let row = &rows[index];
    (row.agent_name.to_owned(), row.source_line, row.kind, row.pattern.to_owned())
}

#[test]
fn version_and_debug() {
    assert!(version().starts_with('v'));
    let debug = debug();
    assert_eq!(debug.lines().count(), 2);
    assert!(debug.ends_with('\n'));
    assert!(debug.starts_with(&format!("Version: {}\n", version())));
}

#[test]
fn google_user_agents() {
    let rows: Vec<_> = user_agents(GOOGLE)
        .into_iter()
        .map(|row| (row.name, row.source_line))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("*", 1),
            ("AdsBot-Google", 26),
            ("Twitterbot", 31),
            ("facebookexternalhit", 38),
        ]
    );
}

#[test]
fn google_rules() {
    let rows = rules(GOOGLE);
    assert_eq!(rows.len(), 30);
    assert_eq!(
        rule_tuple(GOOGLE, 0),
        ("*".to_owned(), 2, RuleKind::Disallow, "/search".to_owned())
    );
    assert_eq!(
        rule_tuple(GOOGLE, 11),
        ("*".to_owned(), 13, RuleKind::Disallow, "/?hl=*&*&gws_rd=ssl".to_owned())
    );
    assert_eq!(
        rule_tuple(GOOGLE, 22),
        ("AdsBot-Google".to_owned(), 27, RuleKind::Disallow, "/maps/api/js/".to_owned())
    );
    assert_eq!(
        rule_tuple(GOOGLE, 29),
        ("facebookexternalhit".to_owned(), 39, RuleKind::Allow, "/imgres".to_owned())
    );
    let lines: Vec<_> = rows.iter().map(|row| row.source_line).collect();
    assert!(lines.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn google_matches() {
    assert!(matches(GOOGLE, "Twitterbot", "/search"));
    assert!(!matches(GOOGLE, "Twitterbot", "/groups"));
    assert!(!matches(GOOGLE, "UnlistedBot", "/search"));
    assert!(matches(GOOGLE, "UnlistedBot", "/search/about"));
    assert!(!matches(GOOGLE, "Twitterbot", "https://www.google.com/groups"));

    assert!(matches(GOOGLE, "bot", "/?hl=en&gws_rd=ssl"));
    assert!(!matches(GOOGLE, "bot", "/?hl=en&x"));
    assert!(matches(GOOGLE, "bot", "/?hl=en"));
    assert!(!matches(GOOGLE, "bot", "/?q=rust"));

    assert!(matches(GOOGLE, "bot", "/calendar"));
    assert!(!matches(GOOGLE, "bot", "/calendar/x"));
    assert!(matches(GOOGLE, "bot", "/calendar/about/x"));

    assert!(matches(GOOGLE, "bot", "/alerts/"));
    assert!(!matches(GOOGLE, "bot", "/alerts/x"));

    assert!(!matches(GOOGLE, "bot", "/books?id=1&q=rust"));
    assert!(matches(GOOGLE, "bot", "/books?q=related:abc"));
    assert!(!matches(GOOGLE, "bot", "/compare/cards/apply"));

    assert!(!matches(GOOGLE, "AdsBot-Google", "/maps/api/js/x"));
    assert!(matches(GOOGLE, "adsbot-google", "/maps/api/js?x"));
    assert!(matches(GOOGLE, "facebookexternalhit", "/search"));
}

#[test]
fn line_fidelity() {
    let text = "\nUser-agent: *\n\nUser-agent: grapeshot\nDisallow:\n\nAllow: /a\n";
    let rows: Vec<_> = rules(text)
        .into_iter()
        .map(|row| (row.agent_name, row.source_line, row.kind, row.pattern))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("grapeshot", 5, RuleKind::Disallow, ""),
            ("grapeshot", 7, RuleKind::Allow, "/a"),
        ]
    );
}

#[test]
fn empty_disallow_is_a_disallow_decision() {
    assert!(!matches("User-agent: *\nDisallow:\n", "any", "/x"));
    // without a user-agent line the rule is unattached
    assert!(matches("Disallow:\n", "any", "/x"));
}

#[test]
fn specific_group_override() {
    let doc = "User-agent: *\nDisallow: /search\n\nUser-agent: Twitterbot\nAllow: /search\nDisallow: /groups\n";
    assert!(matches(doc, "Twitterbot", "/search"));
    assert!(!matches(doc, "Twitterbot", "/groups"));
    assert!(!matches(doc, "UnlistedBot", "/search"));
}

#[test]
fn longest_match_tie_break() {
    let doc = "User-agent: *\nDisallow: /a\nAllow: /a/b\n";
    assert!(matches(doc, "bot", "/a/b/c"));
}

#[test]
fn url_targets_match_like_their_paths() {
    let doc = "User-agent: *\nDisallow: /café\nDisallow: /a b\nDisallow: /private\n";
    for path in ["/café", "/a b"] {
        assert!(!matches(doc, "bot", path));
        assert!(!matches(doc, "bot", &format!("https://x.com{path}")));
    }
    assert!(matches(doc, "bot", "https://x.com/x/../private"));
    assert!(!matches(doc, "bot", "http://x.com/private?q=1#frag"));
}

#[test]
fn scheme_like_paths_are_matched_literally() {
    assert!(!matches("User-agent: *\nDisallow: c\n", "bot", "c:/windows"));
    assert!(matches("User-agent: *\nDisallow: /windows\n", "bot", "c:/windows"));
}

#[test]
fn typo_tolerant_view() {
    let text = "Useragent: bot\nDissallow: /private\n";
    assert!(matches(text, "bot", "/private"));

    let config = RobotsConfig::new(true, AgentMatching::Exact, ProjectionMode::Directive);
    let view = RobotsTxtView::parse_with(text, config);
    assert!(!view.matcher("bot").check_path("/private"));
    assert_eq!(view.rules().len(), 1);
}

#[test]
fn group_projection_view() {
    let text = "User-agent: a\nUser-agent: b\nDisallow: /x\n";
    let config = RobotsConfig::new(false, AgentMatching::Exact, ProjectionMode::Group);
    let view = RobotsTxtView::parse_with(text, config);
    let agents: Vec<_> = view.user_agents().into_iter().map(|row| (row.name, row.source_line)).collect();
    assert_eq!(agents, vec![("a", 1), ("b", 1)]);
    let rule_agents: Vec<_> = view.rules().into_iter().map(|row| row.agent_name).collect();
    assert_eq!(rule_agents, vec!["a", "b"]);
}

fn document_strategy() -> impl Strategy<Value = String> {
    let line = prop_oneof![
        "(User-agent|user-agent|USER-AGENT): ?(\\*|[a-z]{1,6})",
        "(Allow|Disallow|disallow): ?(/[a-z*]{0,5}\\$?)?",
        "# [a-z ]{0,10}",
        "[a-z]{0,8}(: [a-z]{0,5})?",
        Just(String::new()),
    ];
    (
        prop::collection::vec(line, 0..20),
        prop_oneof![Just("\n"), Just("\r\n"), Just("\r")],
    )
        .prop_map(|(lines, terminator)| lines.join(terminator))
}

proptest! {
    #[test]
    fn parsing_is_deterministic(text in document_strategy()) {
        prop_assert_eq!(RobotsTxt::parse(&text), RobotsTxt::parse(&text));
        prop_assert_eq!(rules(&text), rules(&text));
        prop_assert_eq!(user_agents(&text), user_agents(&text));
    }

    #[test]
    fn matching_is_deterministic(text in document_strategy(), agent in "[a-z]{1,6}", path in "/[a-z/]{0,8}") {
        prop_assert_eq!(matches(&text, &agent, &path), matches(&text, &agent, &path));
    }

    #[test]
    fn rule_lines_point_at_rule_directives(text in document_strategy()) {
        let physical: Vec<&str> = text.split("\r\n").flat_map(|l| l.split(['\n', '\r'])).collect();
        for row in rules(&text) {
            let line = physical[row.source_line as usize - 1].trim_start().to_ascii_lowercase();
            prop_assert!(line.starts_with("allow") || line.starts_with("disallow"));
        }
        for row in user_agents(&text) {
            let line = physical[row.source_line as usize - 1].trim_start().to_ascii_lowercase();
            prop_assert!(line.starts_with("user-agent"));
        }
    }
}
