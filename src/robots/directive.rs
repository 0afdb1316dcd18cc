use crate::robots::line_scanner::ScannedLine;
use crate::robots::robots_config::RobotsConfig;

/// A classified robots.txt line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive<'a> {
    UserAgent(&'a str),
    Allow(&'a str),
    Disallow(&'a str),
    /// Blank, comment-only, malformed or unsupported (`Sitemap`, `Crawl-delay`, ...).
    Ignored,
}

/// A directive together with the physical line it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDirective<'a> {
    pub line: u32,
    pub directive: Directive<'a>,
}

const USER_AGENT_TYPOS: &[&str] = &["useragent", "user agent"];
const DISALLOW_TYPOS: &[&str] = &["dissallow", "dissalow", "disalow", "diasllow", "disallaw"];

pub fn classify<'a>(content: &'a str, config: &RobotsConfig) -> Directive<'a> {
    let content = match content.find('#') {
        Some(comment) => &content[..comment],
        None => content,
    }
    .trim();
    if content.is_empty() {
        return Directive::Ignored;
    }

    let Some((key, value)) = split_key_value(content, config) else {
        return Directive::Ignored;
    };
    let key = key.trim();
    let value = value.trim();

    if is_keyword(key, "user-agent", USER_AGENT_TYPOS, config) {
        Directive::UserAgent(value)
    } else if is_keyword(key, "allow", &[], config) {
        Directive::Allow(value)
    } else if is_keyword(key, "disallow", DISALLOW_TYPOS, config) {
        Directive::Disallow(value)
    } else {
        Directive::Ignored
    }
}

fn split_key_value<'a>(content: &'a str, config: &RobotsConfig) -> Option<(&'a str, &'a str)> {
    if let Some(pair) = content.split_once(':') {
        return Some(pair);
    }
    if !config.accept_typos() {
        return None;
    }
    // `Disallow /private` style lines
    content.split_once(char::is_whitespace)
}

fn is_keyword(key: &str, keyword: &str, typos: &[&str], config: &RobotsConfig) -> bool {
    key.eq_ignore_ascii_case(keyword)
        || (config.accept_typos() && typos.iter().any(|typo| key.eq_ignore_ascii_case(typo)))
}

/// Classifies every scanned line, keeping line numbers.
pub fn directives<'a, I>(lines: I, config: &RobotsConfig) -> impl Iterator<Item = LineDirective<'a>>
where
    I: IntoIterator<Item = ScannedLine<'a>>,
{
    let config = *config;
    lines.into_iter().map(move |line| LineDirective {
        line: line.number,
        directive: classify(line.content, &config),
    })
}
