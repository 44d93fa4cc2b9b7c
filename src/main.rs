//! Contact-Scout main entry point
//!
//! This is the command-line interface for the Contact-Scout discovery engine.

use anyhow::{bail, Context};
use chrono::Utc;
use clap::Parser;
use contact_scout::config::{load_config_with_hash, validate, Config};
use contact_scout::crawler::BatchRunner;
use contact_scout::output::{print_statistics, BatchStatistics};
use contact_scout::render::build_renderer;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Contact-Scout: finds emails and Nepali phone numbers on business websites
///
/// Every site is fetched, searched for contact zones, its sitemap and
/// contact pages followed, and rendered in a browser when the static
/// markup is not enough. Results are printed to stdout as JSON.
#[derive(Parser, Debug)]
#[command(name = "contact-scout")]
#[command(version = "1.0.0")]
#[command(about = "Per-site contact discovery engine", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Single website to scan
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    url: Option<String>,

    /// File with one website per line (blank lines and # comments ignored)
    #[arg(short, long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Maximum number of sites scanned at the same time
    #[arg(short, long)]
    workers: Option<usize>,

    /// Never start a browser
    #[arg(long)]
    no_render: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let mut config = load_configuration(cli.config.as_deref())?;
    if let Some(workers) = cli.workers {
        config.batch.max_workers = workers;
    }
    if cli.no_render {
        config.renderer.enabled = false;
    }
    validate(&config).context("Invalid command-line settings")?;

    let urls = match (&cli.url, &cli.file) {
        (Some(url), _) => vec![url.clone()],
        (None, Some(path)) => read_url_file(path)?,
        (None, None) => bail!("either --url or --file is required"),
    };
    if urls.is_empty() {
        bail!("no websites to scan");
    }

    let renderer = build_renderer(&config.renderer);
    let runner = BatchRunner::new(&config, renderer)?;

    // Ctrl-C stops new sites from starting; running sites finish
    let cancel = runner.cancel_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing in-flight sites");
            cancel.cancel();
        }
    });

    let started_at = Utc::now();
    let results = runner.run(urls).await;
    let finished_at = Utc::now();

    println!("{}", serde_json::to_string_pretty(&results)?);

    if !cli.quiet {
        let stats = BatchStatistics::from_results(&results, started_at, finished_at);
        print_statistics(&stats);
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the JSON results.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("contact_scout=info,warn"),
            1 => EnvFilter::new("contact_scout=debug,info"),
            2 => EnvFilter::new("contact_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file, or the defaults when none is given
fn load_configuration(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        tracing::info!("No configuration file given, using defaults");
        return Ok(Config::default());
    };

    tracing::info!("Loading configuration from: {}", path.display());
    let (config, hash) = load_config_with_hash(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);
    Ok(config)
}

/// Reads seed URLs, one per line
fn read_url_file(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read URL file {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}
