//! CLI entry point for the fleet charts tool.
//!
//! Provides subcommands for summarizing a fleet snapshot and exporting the
//! dashboard chart data as JSON.

use anyhow::Result;
use clap::{Parser, Subcommand};
use fleet_charts::charts::{HealthTier, summarize_health};
use fleet_charts::dashboard::{FleetDashboard, distributions};
use fleet_charts::fetch::load_records;
use fleet_charts::output::{print_json, write_json};
use fleet_charts::records::TrainRecord;
use fleet_charts::theme::ChartTheme;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "fleet_charts")]
#[command(about = "Derive fleet fitness dashboard charts from train records", long_about = None)]
struct Cli {
    /// JSON file overriding the chart colors
    #[arg(long, global = true, value_name = "PATH")]
    theme: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log the fleet health summary and category counts
    Summary {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Also print the full dashboard JSON to stdout
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Write the dashboard chart data as JSON
    Export {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// JSON file to write
        #[arg(short, long, default_value = "charts.json")]
        output: String,

        /// Gzip compress the JSON output
        #[arg(long, default_value_t = false)]
        gzip: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/fleet_charts.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("fleet_charts.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let theme = match &cli.theme {
        Some(path) => ChartTheme::load(path)?,
        None => ChartTheme::default(),
    };
    let token = std::env::var("FLEET_API_TOKEN").ok();

    match cli.command {
        Commands::Summary { source, json } => {
            let records = load(&source, token.as_deref()).await?;
            log_summary(&records);

            if json {
                print_json(&FleetDashboard::from_records(&records, &theme))?;
            }
        }
        Commands::Export {
            source,
            output,
            gzip,
        } => {
            let records = load(&source, token.as_deref()).await?;
            let export =
                FleetDashboard::from_records(&records, &theme).export(&source, records.len());

            write_json(&output, &export, gzip)?;
        }
    }

    Ok(())
}

async fn load(source: &str, token: Option<&str>) -> Result<Vec<TrainRecord>> {
    let records = load_records(source, token).await?;
    if records.is_empty() {
        warn!(source, "No train records found");
    } else {
        info!(source, records = records.len(), "Train records loaded");
    }
    Ok(records)
}

/// Logs the health panel and both category distributions.
fn log_summary(records: &[TrainRecord]) {
    let summary = summarize_health(records);

    for tier in HealthTier::ALL {
        info!(
            tier = tier.label(),
            trains = summary.count(tier),
            "Fleet health tier"
        );
    }
    info!(
        average = %summary.average_display(),
        trains = records.len(),
        "Average fleet fitness"
    );

    let (depots, decisions) = distributions(records);
    for (depot, count) in depots.iter() {
        info!(depot, count, "Trains by depot");
    }
    for (decision, count) in decisions.iter() {
        info!(decision, count, "Induction decisions");
    }
}
