//! Currently selected wage-growth series and title

use crate::error::Result;
use crate::series::AnnualSeries;
use serde::{Deserialize, Serialize};

/// Series and title read by the benefit engine between selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveSelection {
    pub series: AnnualSeries,
    pub title: String,
}

impl ActiveSelection {
    pub fn new(series: AnnualSeries) -> Self {
        Self {
            series,
            title: String::new(),
        }
    }

    /// Empty selection sized for the engine's year range
    pub fn for_engine(first_year: i32, base_year: i32, last_year: i32) -> Result<Self> {
        Ok(Self::new(AnnualSeries::with_base_year(first_year, base_year, last_year)?))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn get(&self, year: i32) -> Result<f64> {
        self.series.get(year)
    }
}
