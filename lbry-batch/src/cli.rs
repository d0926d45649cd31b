///
/// Command-line front end for lbry-batch: argument parsing, settings
/// resolution and the user-visible run.
///
/// The publishing pipeline itself lives in [`lbry-batch-core`]; this module
/// only turns flags, environment and the optional YAML defaults file into a
/// [`PublishConfig`], wires up the HTTP clients, and reports the outcome.
///
/// ## Settings precedence
/// command line (or its environment variable) > `--config` YAML > built-in defaults
///
/// [`lbry-batch-core`]: ../../lbry-batch-core/
use crate::load_config::{load_config, PublishDefaults};
use crate::upload::{DaemonClient, SpeechClient};
use anyhow::{Context, Result};
use clap::Parser;
use lbry_batch_core::catalog::{build_catalog, list_directory};
use lbry_batch_core::config::{
    License, PublishConfig, DEFAULT_BID, DEFAULT_LANGUAGE, DEFAULT_PORT,
    DEFAULT_THUMBNAIL_ENDPOINT,
};
use lbry_batch_core::contract::TokioPacer;
use lbry_batch_core::languages::is_known_language;
use lbry_batch_core::publish::{PublishReport, Publisher};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Batch uploader for LBRY Desktop.
#[derive(Parser, Debug)]
#[clap(
    name = "lbry-batch",
    version,
    about = "Publish every media file of a directory to a local LBRY daemon"
)]
pub struct Cli {
    /// The directory that contains the files to be uploaded
    pub file_directory: PathBuf,

    /// The name of the publisher channel (with the @)
    pub channel_name: String,

    /// Publish the pre-transcoded `{name}_fixed.{ext}` file instead of the original
    #[clap(long)]
    pub optimize_file: bool,

    /// Port of the LBRY daemon API
    #[clap(long, env = "LBRY_BATCH_PORT")]
    pub port: Option<u32>,

    /// Amount to back each claim
    #[clap(long)]
    pub bid: Option<String>,

    /// Download fee in LBC (0 publishes for free)
    #[clap(long)]
    pub fee_amount: Option<String>,

    /// Content tags
    #[clap(long, num_args = 1..)]
    pub tags: Option<Vec<String>>,

    /// RFC 5646 language tags
    #[clap(long, num_args = 1.., value_parser = parse_language)]
    pub languages: Option<Vec<String>>,

    /// Publication license (e.g. "Public Domain", "Other")
    #[clap(long, value_parser = parse_license)]
    pub license: Option<License>,

    /// License URL, required with and only with --license Other
    #[clap(long)]
    pub license_url: Option<String>,

    /// Per-request HTTP timeout in seconds
    #[clap(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Pause between consecutive publishes in seconds
    #[clap(long, value_name = "SECS")]
    pub delay: Option<u64>,

    /// Image host endpoint for thumbnail uploads
    #[clap(long, env = "LBRY_BATCH_THUMBNAIL_ENDPOINT")]
    pub thumbnail_endpoint: Option<String>,

    /// YAML file with default settings
    #[clap(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the published claims as JSON to this file
    #[clap(long, value_name = "FILE")]
    pub report: Option<PathBuf>,
}

fn parse_language(raw: &str) -> std::result::Result<String, String> {
    if is_known_language(raw) {
        Ok(raw.to_string())
    } else {
        Err(format!("'{raw}' is not a recognised RFC 5646 language tag"))
    }
}

fn parse_license(raw: &str) -> std::result::Result<License, String> {
    raw.parse()
}

fn absolute(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Merges flags, the optional defaults file and built-in defaults, then
/// validates the result.
pub fn resolve_config(cli: &Cli) -> Result<PublishConfig> {
    let defaults = match &cli.config {
        Some(path) => load_config(path)?,
        None => PublishDefaults::default(),
    };

    let directory = absolute(&cli.file_directory);
    if !directory.is_dir() {
        tracing::error!(directory = %directory.display(), "File directory missing");
        anyhow::bail!("The directory {} does not exist.", directory.display());
    }
    let directory = directory
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", directory.display()))?;

    let port = cli.port.or(defaults.port).unwrap_or(u32::from(DEFAULT_PORT));
    let port = u16::try_from(port)
        .map_err(|_| anyhow::anyhow!("The port {port} is not between 0 and 65535."))?;

    let mut config = PublishConfig::new(directory, cli.channel_name.clone());
    config.port = port;
    config.bid = cli
        .bid
        .clone()
        .or(defaults.bid)
        .unwrap_or_else(|| DEFAULT_BID.to_string());
    config.fee_amount = cli.fee_amount.clone().or(defaults.fee_amount);
    config.tags = cli.tags.clone().or(defaults.tags).unwrap_or_default();
    config.languages = cli
        .languages
        .clone()
        .or(defaults.languages)
        .unwrap_or_else(|| vec![DEFAULT_LANGUAGE.to_string()]);
    config.license = cli.license.or(defaults.license);
    config.license_url = cli.license_url.clone().or(defaults.license_url);
    config.optimize_file = cli.optimize_file || defaults.optimize_file.unwrap_or(false);
    config.request_timeout = cli
        .timeout
        .or(defaults.timeout_secs)
        .map(Duration::from_secs);
    if let Some(delay) = cli.delay.or(defaults.delay_secs) {
        config.publish_delay = Duration::from_secs(delay);
    }
    config.thumbnail_endpoint = cli
        .thumbnail_endpoint
        .clone()
        .or(defaults.thumbnail_endpoint)
        .unwrap_or_else(|| DEFAULT_THUMBNAIL_ENDPOINT.to_string());

    config.validate()?;
    Ok(config)
}

fn write_report(path: &Path, report: &PublishReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    tracing::info!(report = %path.display(), claims = report.claims.len(), "Report written");
    Ok(())
}

fn print_report(report: &PublishReport) {
    for claim in &report.claims {
        match &claim.web_url {
            Some(web_url) => println!(
                "{}\t{}\t{}\t{}",
                claim.file_name, claim.claim_id, claim.claim_url, web_url
            ),
            None => println!("{}\t{}\t{}", claim.file_name, claim.claim_id, claim.claim_url),
        }
    }
}

/// Async CLI entrypoint, shared by `main` and the integration tests.
pub async fn run(cli: Cli) -> Result<()> {
    tracing::info!("trace_initialised");

    let config = resolve_config(&cli)?;
    config.trace_loaded();

    let listing = list_directory(&config.file_directory).with_context(|| {
        format!("Failed to list {}", config.file_directory.display())
    })?;
    let catalog = build_catalog(&listing);
    tracing::info!(files = listing.len(), items = catalog.len(), "Catalog built");

    // The daemon checks run even for an empty directory, so a wrong port always fails.
    let daemon = DaemonClient::new(&config)?;
    let thumbnails = SpeechClient::new(&config)?;
    let publisher = Publisher::connect(config, daemon, thumbnails, TokioPacer).await?;

    if catalog.is_empty() {
        println!(
            "No media files found in {}",
            publisher.config().file_directory.display()
        );
        return Ok(());
    }

    let base = publisher.base_params();
    match publisher.publish_all(&catalog, &base).await {
        Ok(report) => {
            print_report(&report);
            if let Some(path) = &cli.report {
                write_report(path, &report)?;
            }
            println!("Published {} of {} files.", report.claims.len(), catalog.len());
            Ok(())
        }
        Err(aborted) => {
            print_report(&aborted.completed);
            if let Some(path) = &cli.report {
                if let Err(e) = write_report(path, &aborted.completed) {
                    tracing::error!(
                        report = %path.display(),
                        error = %e,
                        "Failed to write report for aborted batch"
                    );
                }
            }
            Err(aborted.into())
        }
    }
}
