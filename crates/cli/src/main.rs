use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use swapwise_cli::{ReportOptions, build_report, load_catalog, load_orders};
use swapwise_observability::LogFormat;
use swapwise_substitution::{DEFAULT_APPROVED_TAG, EngineConfig};

/// Evaluate a catalog for compliant vendor swaps and print a JSON report.
#[derive(Parser)]
#[command(name = "swapwise-report", version)]
struct Cli {
    /// Inventory catalog (JSON array of items).
    catalog: PathBuf,

    /// Order history (JSON array of orders).
    orders: Option<PathBuf>,

    /// Compliance tag a substitute must carry.
    #[arg(long, default_value = DEFAULT_APPROVED_TAG)]
    approved_tag: String,

    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Number of items listed under top opportunities.
    #[arg(long, default_value_t = 5)]
    top: usize,

    /// `json` or `pretty`.
    #[arg(long, default_value = "json")]
    log_format: LogFormat,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    swapwise_observability::init_with(cli.log_format);

    let catalog = load_catalog(&cli.catalog)?;
    let orders = cli.orders.as_deref().map(load_orders).transpose()?;

    let options = ReportOptions {
        config: EngineConfig::default().with_approved_tag(cli.approved_tag),
        workers: cli.workers,
        top: cli.top,
    };
    let report = build_report(&catalog, orders.as_deref(), &options)?;

    tracing::info!(
        evaluated = report.evaluations.len(),
        invalid = report.invalid_records.len(),
        "report ready"
    );

    let json = serde_json::to_string_pretty(&report).context("serializing report")?;
    println!("{json}");
    Ok(())
}
