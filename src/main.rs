//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_enrich` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use ip_enrich::config::{
    DEFAULT_DNS_TIMEOUT_SECS, DEFAULT_INTEL_COMMAND, DEFAULT_QUERY_DELAY_SECS, QUERY_DELAY_ENV_VAR,
};
use ip_enrich::initialization::{init_logger_with, init_resolver};
use ip_enrich::{
    run_geo, run_intel, CommandIntelSource, DnsPtrResolver, GeoConfig, IntelConfig, LogFormat,
    LogLevel, MaxmindGeoDb, PipelineReport,
};

#[derive(Debug, Parser)]
#[command(
    name = "ip_enrich",
    about = "Enrich IP lists with GeoIP/ASN or passive-DNS/intel data, streaming JSONL output"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Enrich JSONL records with MaxMind geolocation and ASN data
    Geo(GeoArgs),
    /// Resolve PTR records and fetch intel for a plain list of IPs
    Intel(IntelArgs),
}

#[derive(Debug, Args)]
struct GeoArgs {
    /// Input file (JSONL, one object per line with an `ip` field)
    input_file: PathBuf,

    /// Output file for JSONL results
    output_file: PathBuf,

    /// Path to GeoLite2-City.mmdb
    #[arg(long)]
    maxmind_db_city: PathBuf,

    /// Path to GeoLite2-ASN.mmdb
    #[arg(long)]
    maxmind_db_asn: PathBuf,
}

#[derive(Debug, Args)]
struct IntelArgs {
    /// Input file containing IPs (one per line, `#` comments allowed)
    input_file: PathBuf,

    /// Output file for JSONL results
    output_file: PathBuf,

    /// Seconds to wait between intel queries (rate limiting)
    #[arg(long, env = QUERY_DELAY_ENV_VAR, default_value_t = DEFAULT_QUERY_DELAY_SECS)]
    query_delay: f64,

    /// Timeout in seconds for reverse-DNS lookups
    #[arg(long, default_value_t = DEFAULT_DNS_TIMEOUT_SECS)]
    dns_timeout: f64,

    /// Executable invoked for intel lookups
    #[arg(long, default_value = DEFAULT_INTEL_COMMAND)]
    intel_command: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), so the query
    // delay can be configured without exporting it manually
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    init_logger_with(cli.log_level.into(), cli.log_format)
        .context("Failed to initialize logger")?;

    let result = match cli.command {
        Command::Geo(args) => run_geo_command(args).await,
        Command::Intel(args) => run_intel_command(args).await,
    };

    match result {
        Ok(report) => {
            println!(
                "✅ Processed {} line{} ({} written, {} skipped) in {:.1}s",
                report.lines_read,
                if report.lines_read == 1 { "" } else { "s" },
                report.records_written,
                report.lines_skipped,
                report.elapsed_seconds
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_enrich error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run_geo_command(args: GeoArgs) -> Result<PipelineReport> {
    let db = MaxmindGeoDb::open(&args.maxmind_db_city, &args.maxmind_db_asn)?;
    let config = GeoConfig {
        input: args.input_file,
        output: args.output_file,
    };
    run_geo(&config, &db).await
}

async fn run_intel_command(args: IntelArgs) -> Result<PipelineReport> {
    let config = IntelConfig {
        input: args.input_file,
        output: args.output_file,
        query_delay_secs: args.query_delay,
        dns_timeout_secs: args.dns_timeout,
        intel_command: args.intel_command,
    };
    let resolver = init_resolver(Duration::from_secs_f64(config.dns_timeout_secs));
    let ptr_lookup = DnsPtrResolver::new(resolver);
    let intel_source = CommandIntelSource::new(config.intel_command.clone());
    run_intel(&config, &ptr_lookup, &intel_source).await
}
