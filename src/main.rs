//! Command-line driver for the calcio team balancing and rating engine
//!
//! Reads JSON requests from a file or stdin, runs the engine, and prints
//! JSON results on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use calcio_engine::config::AppConfig;
use calcio_engine::metrics::MetricsCollector;
use calcio_engine::rating::{apply_changes, EloRatingCalculator, RatingCalculator};
use calcio_engine::requests::{BalanceRequest, RateRequest, RateResponse};
use calcio_engine::TeamBalancer;
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Calcio Engine - team balancing and Elo ratings for league sessions
#[derive(Parser)]
#[command(
    name = "calcio-engine",
    version,
    about = "Balance session teams and update player ratings after matches",
    long_about = "Calcio Engine splits a session's available players into two balanced teams \
                 and a bench, spreading goalkeepers, and updates player ratings after a match \
                 using a team Elo model with a per-goal bonus."
)]
struct Args {
    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without running a command")]
    dry_run: bool,

    /// Print metrics after the command
    #[arg(long, help = "Print Prometheus metrics for this run to stderr")]
    metrics: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Split available players into team A, team B and bench
    Balance {
        /// Balance request JSON, `-` for stdin
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        input: PathBuf,

        /// Team size override
        #[arg(long, value_name = "N")]
        team_size: Option<usize>,
    },
    /// Compute new ratings after a finished match
    Rate {
        /// Rate request JSON, `-` for stdin
        #[arg(short, long, value_name = "FILE", default_value = "-")]
        input: PathBuf,
    },
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    // Apply CLI overrides
    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    calcio_engine::config::validate_config(&config)?;
    Ok(config)
}

fn display_config(config: &AppConfig) {
    info!("Calcio Engine v{}", calcio_engine::VERSION);
    info!("   Service: {}", config.service.name);
    info!("   Log level: {}", config.service.log_level);
    info!("   Team size: {}", config.balance.team_size);
    info!("   Exact threshold: {}", config.balance.exact_threshold);
    info!(
        "   Goalkeeper penalty: {} missing / {} per imbalance",
        config.balance.goalkeeper_missing_penalty, config.balance.goalkeeper_imbalance_weight
    );
    info!(
        "   Rating: base {} / K {} / goal bonus {}",
        config.rating.base_rating, config.rating.k_factor, config.rating.goal_bonus
    );
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read request from stdin")?;
        Ok(buf)
    } else {
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn run_balance(
    config: &AppConfig,
    metrics: &MetricsCollector,
    input: &Path,
    team_size: Option<usize>,
) -> Result<()> {
    let request = BalanceRequest::from_bytes(&read_input(input)?)?;
    let team_size = team_size
        .or(request.team_size)
        .unwrap_or(config.balance.team_size);
    let pool = request.candidates(config.rating.base_rating);

    let balancer = TeamBalancer::new(&config.balance, config.rating.base_rating);
    let timer = metrics.start_timer();
    let split = balancer.balance(&pool, team_size);
    metrics.record_balance(&split, timer.stop());

    if split.kind.is_degenerate() {
        info!("Degenerate split: {}", split.kind);
    }
    info!(
        "Balanced {} players ({} strategy), gap {:.1}",
        pool.len(),
        split.kind,
        split.balance_score
    );

    println!("{}", serde_json::to_string_pretty(&split)?);
    Ok(())
}

fn run_rate(config: &AppConfig, metrics: &MetricsCollector, input: &Path) -> Result<()> {
    let request = RateRequest::from_bytes(&read_input(input)?)?;
    let calculator = EloRatingCalculator::new(config.rating.clone())?;
    debug!("Rating calculator config: {}", calculator.config());

    let timer = metrics.start_timer();
    let result =
        calculator.calculate_rating_changes(&request.ratings, &request.participants, request.score);
    metrics.record_rating_update(&result, timer.stop());

    info!(
        "Rated match {}-{} ({} rating changes)",
        request.score.team_a,
        request.score.team_b,
        result.rating_changes.len()
    );

    let ratings = apply_changes(&request.ratings, &result.rating_changes);
    let response = RateResponse { result, ratings };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration (CLI args can override environment/config file)
    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_config(&config);

    if args.dry_run {
        info!("Configuration validation successful");
        return Ok(());
    }

    let Some(command) = &args.command else {
        error!("No command given, expected `balance` or `rate`");
        std::process::exit(2);
    };

    let metrics = MetricsCollector::new()?;
    let outcome = match command {
        Command::Balance { input, team_size } => run_balance(&config, &metrics, input, *team_size),
        Command::Rate { input } => run_rate(&config, &metrics, input),
    };

    if args.metrics {
        eprintln!("{}", metrics.encode_text()?);
    }

    if let Err(e) = outcome {
        error!("Command failed: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
