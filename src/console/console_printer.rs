use std::io::{Write, stdout};

use clap::ValueEnum;
use crossterm::style::{Color, Stylize, style};
use robotstxt_engine::robots::{RuleKind, RuleRow, UserAgentRow};
use serde::Serialize;

use crate::match_outcome::MatchOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tab-separated lines
    Text,
    /// A JSON array
    Json,
}

/// Writes results to stdout. Diagnostics go through `tracing` to stderr.
#[derive(Debug, Clone)]
pub struct ConsolePrinter {
    format: OutputFormat,
    color: bool,
}

impl ConsolePrinter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn print_text(&self, text: &str) -> anyhow::Result<()> {
        let mut stdout = stdout().lock();
        match self.format {
            OutputFormat::Text => write!(stdout, "{}", text)?,
            OutputFormat::Json => writeln!(stdout, "{}", serde_json::to_string(text)?)?,
        }
        stdout.flush()?;
        Ok(())
    }

    pub fn print_user_agents(&self, rows: &[UserAgentRow<'_>]) -> anyhow::Result<()> {
        self.print_rows(rows, |row| format!("{}\t{}", row.source_line, row.name))
    }

    pub fn print_rules(&self, rows: &[RuleRow<'_>]) -> anyhow::Result<()> {
        self.print_rows(rows, |row| {
            format!(
                "{}\t{}\t{}\t{}",
                row.source_line,
                row.agent_name,
                self.paint_kind(row.kind),
                row.pattern
            )
        })
    }

    pub fn print_outcomes(&self, outcomes: &[MatchOutcome]) -> anyhow::Result<()> {
        self.print_rows(outcomes, |outcome| {
            let verdict = if outcome.allowed {
                self.paint("allowed", Color::Green)
            } else {
                self.paint("disallowed", Color::Red)
            };
            let reason = match &outcome.rule {
                Some(rule) => format!("line {}: {} {}", rule.source_line, rule.kind, rule.pattern),
                None => "no matching rule".to_owned(),
            };
            format!(
                "{}\t{}\t{}\t{}\t{}",
                outcome.origin, outcome.agent, outcome.path, verdict, reason
            )
        })
    }

    fn print_rows<T, F>(&self, rows: &[T], render: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: Fn(&T) -> String,
    {
        let mut stdout = stdout().lock();
        match self.format {
            OutputFormat::Text => {
                for row in rows {
                    writeln!(stdout, "{}", render(row))?;
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut stdout, rows)?;
                writeln!(stdout)?;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    fn paint_kind(&self, kind: RuleKind) -> String {
        match kind {
            RuleKind::Allow => self.paint(kind.as_str(), Color::Green),
            RuleKind::Disallow => self.paint(kind.as_str(), Color::Red),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            style(text).with(color).to_string()
        } else {
            text.to_owned()
        }
    }
}
