//! Year range configuration supplied by the hosting engine

use crate::assumptions::{BASE_YEAR, FIRST_HISTORICAL_YEAR, SHORT_RANGE_YEARS};
use crate::assumptions::{ActiveSelection, WageGrowthStore};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::env;

/// Furthest projection year the engine asks for by default
pub const DEFAULT_LAST_YEAR: i32 = 2100;

/// Year range the engine needs from the store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// First year the engine reads; overrides start here
    #[serde(default = "default_first_year")]
    pub first_year: i32,

    /// Last projected year the engine reads
    #[serde(default = "default_last_year")]
    pub last_year: i32,

    /// First year copied into the active selection
    #[serde(default = "default_base_year")]
    pub base_year: i32,
}

fn default_first_year() -> i32 {
    FIRST_HISTORICAL_YEAR
}

fn default_last_year() -> i32 {
    DEFAULT_LAST_YEAR
}

fn default_base_year() -> i32 {
    BASE_YEAR - 1
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            first_year: default_first_year(),
            last_year: default_last_year(),
            base_year: default_base_year(),
        }
    }
}

impl StoreConfig {
    /// Read WAGE_FIRST_YEAR, WAGE_LAST_YEAR and WAGE_BASE_YEAR, falling back
    /// to defaults for anything missing or unparseable
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            first_year: env::var("WAGE_FIRST_YEAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.first_year),
            last_year: env::var("WAGE_LAST_YEAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.last_year),
            base_year: env::var("WAGE_BASE_YEAR")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.base_year),
        }
    }

    /// Last year that must be covered for the published short-range window
    pub fn min_projection_year() -> i32 {
        BASE_YEAR + SHORT_RANGE_YEARS as i32 - 2
    }

    /// Build a store sized for this configuration
    pub fn build_store(&self) -> Result<WageGrowthStore> {
        WageGrowthStore::new(self.first_year, self.last_year)
    }

    /// Build an empty active selection sized for this configuration
    pub fn active_selection(&self) -> Result<ActiveSelection> {
        ActiveSelection::for_engine(self.first_year, self.base_year, self.last_year)
    }
}
