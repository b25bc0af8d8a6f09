//! Wage Assumptions CLI
//!
//! Prints the average wage increase series for one alternative, optionally
//! with a flat override from a given year.
//! Year range comes from WAGE_FIRST_YEAR, WAGE_LAST_YEAR and WAGE_BASE_YEAR.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io;
use wage_assumptions::export::{write_series_csv, write_store_csv, SeriesReport};
use wage_assumptions::{AlternativeScheme, AnnualSeries, StoreConfig};

#[derive(Parser, Debug)]
#[command(name = "wage_assumptions", about = "Average wage increase assumptions")]
struct Args {
    /// Alternative number (1-4 Trustees Report, 5-7 flat/PEBS/other)
    #[arg(short, long, default_value_t = 2)]
    alternative: usize,

    /// Replace projected increases with this rate
    #[arg(long)]
    flat_rate: Option<f64>,

    /// First year the flat rate applies (defaults to the active base year)
    #[arg(long)]
    from_year: Option<i32>,

    /// Replacement title for the alternative
    #[arg(long)]
    title: Option<String>,

    /// Write the active series as CSV
    #[arg(long, conflicts_with = "json")]
    csv: bool,

    /// Write the active series as JSON
    #[arg(long)]
    json: bool,

    /// Write every stored alternative as CSV
    #[arg(long, conflicts_with_all = ["csv", "json"])]
    all: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = StoreConfig::from_env();
    let mut store = config.build_store().context("Failed to build wage growth store")?;
    let mut active = config.active_selection()?;

    if let Some(rate) = args.flat_rate {
        if store.scheme().is_not_trustees_report(args.alternative) {
            bail!(
                "--flat-rate needs a Trustees Report alternative (1-{}), got {}",
                store.num_alternatives(),
                args.alternative
            );
        }
        let from_year = args.from_year.unwrap_or(config.base_year);
        let custom = store
            .flat_override(args.alternative, rate, from_year)
            .with_context(|| format!("Flat rate from {} is outside the stored years", from_year))?;
        store.set_series(args.alternative, &custom, &mut active)?;
    }

    if let Some(title) = &args.title {
        store.set_title(args.alternative, title, &mut active)?;
    }

    store
        .select(args.alternative, &mut active)
        .with_context(|| format!("Failed to select alternative {}", args.alternative))?;

    if args.all {
        write_store_csv(&store, io::stdout()).map_err(|e| anyhow::anyhow!("{}", e))?;
        return Ok(());
    }

    if args.json {
        let report = SeriesReport::from_active(args.alternative, &active);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.csv {
        write_series_csv(&active.series, io::stdout()).map_err(|e| anyhow::anyhow!("{}", e))?;
        return Ok(());
    }

    print_summary(args.alternative, &active.title, &active.series);
    Ok(())
}

fn print_summary(alternative: usize, title: &str, series: &AnnualSeries) {
    println!("Alternative {}: {}", alternative, title);
    println!("{}", "-".repeat(40));
    println!("{:>6} {:>12}", "Year", "Increase %");

    for (year, value) in series.iter().filter(|(y, _)| *y >= series.base_year()) {
        println!("{:>6} {:>12.6}", year, value);
    }
}
