//! Annual series of values indexed by calendar year

use crate::error::{AssumptionError, Result};
use serde::{Deserialize, Serialize};

/// Longest range a series may cover
pub const MAX_SPAN_YEARS: i64 = 10_000;

/// Values for every year in a fixed inclusive range
///
/// The range is set at construction; resizing means building a new series.
/// The base year marks where projected values start for views handed to
/// downstream consumers (defaults to the first year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualSeries {
    first_year: i32,
    base_year: i32,
    values: Vec<f64>,
}

impl AnnualSeries {
    /// Create a zero-filled series covering `first_year..=last_year`
    ///
    /// Spans longer than `MAX_SPAN_YEARS` are rejected.
    pub fn new(first_year: i32, last_year: i32) -> Result<Self> {
        let span = i64::from(last_year) - i64::from(first_year) + 1;
        if span < 1 || span > MAX_SPAN_YEARS {
            return Err(AssumptionError::InvalidRange { first_year, last_year });
        }
        Ok(Self {
            first_year,
            base_year: first_year,
            values: vec![0.0; span as usize],
        })
    }

    /// Create a zero-filled series with an explicit base year
    pub fn with_base_year(first_year: i32, base_year: i32, last_year: i32) -> Result<Self> {
        let mut series = Self::new(first_year, last_year)?;
        series.set_base_year(base_year);
        Ok(series)
    }

    /// Create a series from consecutive values starting at `first_year`
    pub fn from_values(first_year: i32, values: Vec<f64>) -> Result<Self> {
        let last_year = i64::from(first_year) + values.len() as i64 - 1;
        if values.is_empty() || values.len() as i64 > MAX_SPAN_YEARS || last_year > i64::from(i32::MAX) {
            return Err(AssumptionError::InvalidRange {
                first_year,
                last_year: last_year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            });
        }
        Ok(Self {
            first_year,
            base_year: first_year,
            values,
        })
    }

    pub fn first_year(&self) -> i32 {
        self.first_year
    }

    pub fn last_year(&self) -> i32 {
        self.first_year + (self.values.len() as i32 - 1)
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    pub fn set_base_year(&mut self, base_year: i32) {
        self.base_year = base_year;
    }

    /// Number of years covered
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, year: i32) -> bool {
        year >= self.first_year && year <= self.last_year()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over (year, value) pairs in year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .map(move |(i, &v)| (self.first_year + i as i32, v))
    }

    pub fn get(&self, year: i32) -> Result<f64> {
        let idx = self.index_of(year)?;
        Ok(self.values[idx])
    }

    pub fn set(&mut self, year: i32, value: f64) -> Result<()> {
        let idx = self.index_of(year)?;
        self.values[idx] = value;
        Ok(())
    }

    /// Copy `source` values for `start..=end` into this series
    ///
    /// The range is clamped to the years covered by both series. Fails only
    /// when nothing is left after clamping.
    pub fn assign(&mut self, source: &AnnualSeries, start: i32, end: i32) -> Result<()> {
        let lo = start.max(self.first_year).max(source.first_year);
        let hi = end.min(self.last_year()).min(source.last_year());
        if lo > hi {
            return Err(self.empty_range(start, end));
        }
        let dst = (lo - self.first_year) as usize;
        let src = (lo - source.first_year) as usize;
        let n = (hi - lo + 1) as usize;
        self.values[dst..dst + n].copy_from_slice(&source.values[src..src + n]);
        Ok(())
    }

    /// Set every year in `start..=end` to `value`, clamped to this series
    pub fn fill(&mut self, value: f64, start: i32, end: i32) -> Result<()> {
        let lo = start.max(self.first_year);
        let hi = end.min(self.last_year());
        if lo > hi {
            return Err(self.empty_range(start, end));
        }
        let dst = (lo - self.first_year) as usize;
        let n = (hi - lo + 1) as usize;
        self.values[dst..dst + n].fill(value);
        Ok(())
    }

    fn index_of(&self, year: i32) -> Result<usize> {
        if !self.contains(year) {
            return Err(AssumptionError::YearOutOfRange {
                year,
                first_year: self.first_year,
                last_year: self.last_year(),
            });
        }
        Ok((year - self.first_year) as usize)
    }

    fn empty_range(&self, start: i32, end: i32) -> AssumptionError {
        AssumptionError::EmptyRange {
            start,
            end,
            first_year: self.first_year,
            last_year: self.last_year(),
        }
    }
}
