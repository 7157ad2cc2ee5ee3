// File: crates/dashboard/src/main.rs
// Summary: Stock dashboard CLI: load a price CSV, pick a date range, render the trend chart,
// print the overview and summary tables, and write the processed CSV.

mod config;
mod report;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use log::{debug, info};
use stock_series::session::DEFAULT_LABEL;
use stock_series::Session;

use crate::config::DashboardConfig;

#[derive(Parser, Debug)]
#[command(name = "stock-dashboard")]
#[command(about = "Stock price trend dashboard: MA50, volatility, date filter, summary, CSV export")]
struct Cli {
    /// Price CSV with at least Date, Open, High, Low, Close (.csv/.cvs are tried interchangeably)
    #[arg(value_name = "INPUT")]
    input: String,

    /// Display label for the chart title
    #[arg(long, default_value = DEFAULT_LABEL)]
    label: String,

    /// First date to include (defaults to the first date in the file)
    #[arg(long, value_parser = parse_cli_date)]
    start: Option<NaiveDate>,

    /// Last date to include (defaults to the last date in the file)
    #[arg(long, value_parser = parse_cli_date)]
    end: Option<NaiveDate>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory (overrides output.out_dir)
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Chart theme (overrides chart.theme)
    #[arg(long)]
    theme: Option<String>,

    /// Rows shown in the overview table
    #[arg(long, default_value_t = 5)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };
    if let Some(dir) = &cli.out_dir {
        config.output.out_dir = dir.clone();
    }
    if let Some(theme) = &cli.theme {
        config.chart.theme = theme.clone();
    }
    config.validate()?;
    debug!("config: {config:?}");

    let (path, used_alt) = resolve_path(&cli.input)?;
    println!("Using input file: {}", path.display());
    if used_alt {
        println!("  (extension swapped between .csv/.cvs)");
    }
    let bytes = std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;

    let mut session = Session::new(config.processor.clone());
    session.set_label(cli.label.as_str());
    let loaded = session
        .upload(&bytes)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        .len();
    println!("Loaded {loaded} rows");

    let (first, last) = session.default_range().unzip();
    if let (Some(start), Some(end)) = (cli.start.or(first), cli.end.or(last)) {
        session.select_range(start, end)?;
    }

    let view = session.view()?;
    match (view.first_date(), view.last_date()) {
        (Some(a), Some(b)) => println!("Showing {} rows from {a} to {b}", view.len()),
        _ => println!("No rows in the selected range"),
    }

    let out_dir = &config.output.out_dir;
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let chart = report::trend_chart(&session.trend()?);
    let chart_path = out_dir.join(format!("chart_{}_trend.png", report::slug(session.label())));
    chart.render_to_png(&config.render_options()?, &chart_path)?;
    println!("Wrote {}", chart_path.display());

    println!("\nStock data overview:");
    print!("{}", report::overview_table(&view, cli.rows));

    println!("\nSummary statistics:");
    print!("{}", session.summary()?);

    let export = session.export()?;
    let export_path = out_dir.join(&config.output.file_name);
    std::fs::write(&export_path, &export.bytes).with_context(|| format!("writing {}", export_path.display()))?;
    info!("exported {} bytes as {}", export.bytes.len(), export.mime);
    println!("\nWrote {}", export_path.display());

    Ok(())
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    stock_series::date::parse_date(s, None).ok_or_else(|| format!("'{s}' is not a recognised date"))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p).filter(|alt| alt.exists()) {
        return Ok((alt, true));
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    let swapped = match ext.as_str() {
        "cvs" => "csv",
        "csv" => "cvs",
        _ => return None,
    };
    Some(p.with_extension(swapped))
}
