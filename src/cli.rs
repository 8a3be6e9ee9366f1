use crate::modifier::ModifierSet;
use crate::solver::constants::DEFAULT_MAX_LENGTH;
use crate::solver::{ModifierSolver, SolverConfig, SolverError};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Anvilcalc - Find modifier combinations that sum to a target value
#[derive(Parser, Debug)]
#[command(name = "anvilcalc")]
#[command(about = "Find combinations of anvil modifiers that sum to a target value")]
#[command(version)]
pub struct CliArgs {
    /// Target value to reach
    #[arg(allow_negative_numbers = true)]
    pub target: i64,

    /// Modifiers that must appear in the answer
    #[arg(allow_negative_numbers = true)]
    pub required: Vec<i64>,

    /// Longest combination to try before giving up
    #[arg(short, long, default_value_t = DEFAULT_MAX_LENGTH)]
    pub max_length: usize,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: i64,
    pub required: Vec<i64>,
    pub max_length: usize,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    // Validate required modifiers against the allowed set
    ModifierSet::default()
        .validate_required(&args.required)
        .context("Invalid required modifier")?;

    Ok(CliConfig {
        target: args.target,
        required: args.required,
        max_length: args.max_length,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = ModifierSolver::with_config(
        ModifierSet::default(),
        SolverConfig {
            max_length: config.max_length,
        },
    );

    info!(
        "Searching for modifiers summing to {} with {:?} required",
        config.target, config.required
    );

    match solver.solve(config.target, &config.required) {
        Ok(answer) => {
            println!("{:?}", answer);
            Ok(())
        }
        Err(SolverError::LengthLimitExceeded { max_length, .. }) => {
            warn!("No combination of {} or fewer modifiers found", max_length);
            println!("Unknown.");
            Ok(())
        }
        Err(err) => Err(err).context("Search failed"),
    }
}
