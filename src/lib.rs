//! Wage Assumptions - average wage increase series for benefit projections
//!
//! This library provides:
//! - Annual series indexed by calendar year
//! - Historical and Trustees Report average wage increases
//! - Per-alternative series spliced from history, short-range and ultimate rates
//! - Selection and override of the series read by the benefit engine

pub mod error;
pub mod series;
pub mod assumptions;
pub mod config;
pub mod export;

// Re-export commonly used types
pub use error::AssumptionError;
pub use series::AnnualSeries;
pub use assumptions::{ActiveSelection, AlternativeScheme, StandardAlternatives, WageGrowthStore};
pub use config::StoreConfig;
