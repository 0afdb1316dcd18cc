use std::io::IsTerminal;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use futures::future::join_all;
use robotstxt_engine::robots::{
    AgentMatching, ProjectionMode, RobotsConfig, RobotsError, RobotsTxtSource, STDIN_ORIGIN,
};
use tokio::task::JoinHandle;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::console::{ConsolePrinter, OutputFormat};
use crate::match_outcome::MatchOutcome;

mod console;
mod match_outcome;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CommandLineArgs {
    #[command(subcommand)]
    command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Accept misspelled directives such as `Useragent` or `Dissallow`
    #[arg(long, global = true)]
    accept_typos: bool,

    /// How crawler names are compared with `User-agent` lines
    #[arg(long, value_enum, default_value_t = AgentMatchingArg::Exact, global = true)]
    agent_matching: AgentMatchingArg,

    /// How multi-agent groups are listed by `user-agents` and `rules`
    #[arg(long, value_enum, default_value_t = ProjectionArg::Directive, global = true)]
    projection: ProjectionArg,

    /// Log parsing and matching decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the version string
    Version,

    /// Print build information
    Debug,

    /// Check whether a crawler may fetch paths
    Matches {
        /// Crawler name to match against `User-agent` lines
        #[arg(long, env = "ROBOTSTXT_AGENT")]
        agent: String,

        /// Path or absolute URL to check
        #[arg(long = "path", value_name = "PATH", required = true)]
        paths: Vec<String>,

        /// robots.txt files, `-` for stdin
        #[arg(value_name = "FILE", default_value = STDIN_ORIGIN)]
        files: Vec<String>,
    },

    /// List the `User-agent` entries of a robots.txt file
    UserAgents {
        /// robots.txt file, `-` for stdin
        #[arg(value_name = "FILE", default_value = STDIN_ORIGIN)]
        file: String,
    },

    /// List the rules of a robots.txt file
    Rules {
        /// robots.txt file, `-` for stdin
        #[arg(value_name = "FILE", default_value = STDIN_ORIGIN)]
        file: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentMatchingArg {
    Exact,
    ProductToken,
}

impl From<AgentMatchingArg> for AgentMatching {
    fn from(value: AgentMatchingArg) -> Self {
        match value {
            AgentMatchingArg::Exact => AgentMatching::Exact,
            AgentMatchingArg::ProductToken => AgentMatching::ProductToken,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ProjectionArg {
    Directive,
    Group,
}

impl From<ProjectionArg> for ProjectionMode {
    fn from(value: ProjectionArg) -> Self {
        match value {
            ProjectionArg::Directive => ProjectionMode::Directive,
            ProjectionArg::Group => ProjectionMode::Group,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("robotstxt_engine=debug,robotstxt=debug")
        } else {
            EnvFilter::new("robotstxt_engine=info,robotstxt=info")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

async fn check_files(
    config: RobotsConfig,
    agent: String,
    paths: Vec<String>,
    files: Vec<String>,
) -> anyhow::Result<Vec<MatchOutcome>> {
    let agent = Arc::new(agent);
    let paths = Arc::new(paths);

    // stdin can only be read once; every `-` argument shares that document
    let stdin = if files.iter().any(|file| file == STDIN_ORIGIN) {
        Some(Arc::new(RobotsTxtSource::load_from_stdin().await?))
    } else {
        None
    };

    let mut handles: Vec<JoinHandle<Result<Vec<MatchOutcome>, RobotsError>>> = Vec::new();
    for file in files {
        let agent = Arc::clone(&agent);
        let paths = Arc::clone(&paths);
        let stdin = stdin.clone();
        let handle = tokio::task::spawn(async move {
            let source = match stdin {
                Some(source) if file == STDIN_ORIGIN => source,
                _ => Arc::new(RobotsTxtSource::load(&file).await?),
            };
            let view = source.view(config);
            let matcher = view.matcher(&agent);
            let outcomes = paths
                .iter()
                .map(|path| MatchOutcome::new(source.origin(), &agent, path, &matcher.decide(path)))
                .collect();
            Ok::<Vec<MatchOutcome>, RobotsError>(outcomes)
        });
        handles.push(handle);
    }

    let mut outcomes = Vec::new();
    for result in join_all(handles).await {
        outcomes.extend(result??);
    }
    tracing::debug!(outcomes = outcomes.len(), "checked robots.txt files");
    Ok(outcomes)
}

async fn main_impl(args: CommandLineArgs) -> anyhow::Result<()> {
    let config = RobotsConfig::new(
        args.accept_typos,
        args.agent_matching.into(),
        args.projection.into(),
    );
    let color = !args.no_color && std::io::stdout().is_terminal();
    let printer = ConsolePrinter::new(args.format, color);

    match args.command {
        Command::Version => printer.print_text(&format!("{}\n", robotstxt_engine::version())),
        Command::Debug => printer.print_text(&robotstxt_engine::debug()),
        Command::Matches {
            agent,
            paths,
            files,
        } => {
            let outcomes = check_files(config, agent, paths, files).await?;
            printer.print_outcomes(&outcomes)
        }
        Command::UserAgents { file } => {
            let source = RobotsTxtSource::load(&file).await?;
            printer.print_user_agents(&source.view(config).user_agents())
        }
        Command::Rules { file } => {
            let source = RobotsTxtSource::load(&file).await?;
            printer.print_rules(&source.view(config).rules())
        }
    }
}

#[tokio::main]
async fn main() {
    let args = CommandLineArgs::parse();
    init_logging(args.verbose);

    if let Err(e) = main_impl(args).await {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
