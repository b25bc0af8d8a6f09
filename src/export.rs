//! CSV and JSON output of stored and active series

use crate::assumptions::{ActiveSelection, WageGrowthStore};
use crate::series::AnnualSeries;
use serde::Serialize;
use std::error::Error;
use std::io::Write;

/// One year of the active series
#[derive(Debug, Clone, Serialize)]
pub struct SeriesRow {
    pub year: i32,
    pub increase_pct: f64,
}

/// JSON-friendly view of an active selection
#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub alternative: usize,
    pub title: String,
    pub first_year: i32,
    pub base_year: i32,
    pub last_year: i32,
    pub rows: Vec<SeriesRow>,
}

impl SeriesReport {
    /// Rows from the active base year onward
    pub fn from_active(alternative: usize, active: &ActiveSelection) -> Self {
        let series = &active.series;
        let rows = series
            .iter()
            .filter(|(year, _)| *year >= series.base_year())
            .map(|(year, increase_pct)| SeriesRow { year, increase_pct })
            .collect();

        Self {
            alternative,
            title: active.title.clone(),
            first_year: series.first_year(),
            base_year: series.base_year(),
            last_year: series.last_year(),
            rows,
        }
    }
}

/// Write one series as Year,Increase rows
pub fn write_series_csv<W: Write>(series: &AnnualSeries, writer: W) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["Year", "Increase"])?;
    for (year, value) in series.iter() {
        csv_writer.write_record([year.to_string(), format!("{:.6}", value)])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write every stored alternative side by side, one row per year
pub fn write_store_csv<W: Write>(store: &WageGrowthStore, writer: W) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Year".to_string()];
    for alt in 1..=store.num_alternatives() {
        header.push(store.title(alt)?.to_string());
    }
    csv_writer.write_record(&header)?;

    for year in store.first_year()..=store.last_year() {
        let mut record = vec![year.to_string()];
        for alt in 1..=store.num_alternatives() {
            let value = store.stored_series(alt)?.get(year)?;
            record.push(format!("{:.6}", value));
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}
