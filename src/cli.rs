use std::num::NonZeroUsize;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::analytics::{SolutionAnalysis, analyze_solutions};
use countdown::utils::{parse_numbers, parse_target};
use countdown::{CountdownSolver, Expression, Number, SolverConfig};
use log::info;

/// Verbosity of the diagnostic output on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Find every arithmetic expression over the given numbers that equals the target")]
#[command(version)]
pub struct CliArgs {
    /// Comma-separated source numbers, e.g. 1,3,7,10,25,50
    pub numbers: String,

    /// Target value between 1 and 999
    pub target: String,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Print at most this many solutions (at least 1)
    #[arg(long)]
    pub limit: Option<NonZeroUsize>,

    /// Search sequences in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Append statistics about the solutions
    #[arg(short, long)]
    pub stats: bool,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<Number>,
    pub target: Number,
    pub log_level: LogLevel,
    pub solver: SolverConfig,
    pub stats: bool,
}

impl CliArgs {
    /// Validate the raw arguments into a configuration
    pub fn into_config(self) -> Result<CliConfig> {
        let numbers = parse_numbers(&self.numbers).context("Invalid number list")?;
        let target = parse_target(&self.target).context("Invalid target")?;

        Ok(CliConfig {
            numbers,
            target,
            log_level: self.log_level,
            solver: SolverConfig {
                parallel: self.parallel,
                limit: self.limit.map(NonZeroUsize::get),
            },
            stats: self.stats,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.into())
        .try_init()
        .context("Failed to initialize logger")
}

/// Render the solution listing, or the empty-result message
pub fn render_solutions(solutions: &[Expression]) -> String {
    if solutions.is_empty() {
        return "no solutions".to_string();
    }

    let noun = if solutions.len() == 1 { "solution" } else { "solutions" };
    let mut out = format!("Found {} {}:", solutions.len(), noun);
    for expr in solutions {
        out.push_str(&format!("\n  {}", expr));
    }
    out
}

/// Render the aggregate analysis followed by per-solution statistics
pub fn render_stats(solutions: &[Expression]) -> String {
    let mut out = format!("\n{}\n", SolutionAnalysis::new(solutions));
    for (expr, stats) in solutions.iter().zip(analyze_solutions(solutions)) {
        out.push_str(&format!("\n{}\n{}\n", expr, stats));
    }
    out
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(config.log_level)?;

    let solver = CountdownSolver::new(config.solver);

    info!(
        "Finding solutions for target {} using numbers {:?}",
        config.target, config.numbers
    );

    let solutions = solver.find_all(&config.numbers, config.target);
    if solutions.is_empty() {
        info!("No matching expression found");
    }

    println!("{}", render_solutions(&solutions));
    if config.stats && !solutions.is_empty() {
        print!("{}", render_stats(&solutions));
    }
    Ok(())
}
