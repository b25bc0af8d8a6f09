//! Error types for the assumption store

use thiserror::Error;

/// Errors raised by annual series and the assumption store
#[derive(Error, Debug)]
pub enum AssumptionError {
    /// A year falls outside a series' bounds
    #[error("year {year} outside series range {first_year}-{last_year}")]
    YearOutOfRange {
        year: i32,
        first_year: i32,
        last_year: i32,
    },

    /// An assignment range has no overlap with the series
    #[error("range {start}-{end} has no overlap with series range {first_year}-{last_year}")]
    EmptyRange {
        start: i32,
        end: i32,
        first_year: i32,
        last_year: i32,
    },

    /// A series was requested with first year after last year
    #[error("invalid series range {first_year}-{last_year}")]
    InvalidRange { first_year: i32, last_year: i32 },

    /// Alternative number outside the known numbering scheme
    #[error("alternative {alt} outside 1-{max}")]
    UnknownAlternative { alt: usize, max: usize },

    /// Alternative is valid but its values are held outside the store
    #[error("alternative {alt} has no stored series")]
    NotStored { alt: usize },

    /// Published data could not be applied
    #[error("{context}: {source}")]
    Configuration {
        context: String,
        #[source]
        source: Box<AssumptionError>,
    },
}

impl AssumptionError {
    /// Wrap an error with context identifying what was being configured
    pub fn configuration(context: impl Into<String>, source: AssumptionError) -> Self {
        AssumptionError::Configuration {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// True for the year/alternative bound violations
    pub fn is_range_error(&self) -> bool {
        !matches!(self, AssumptionError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, AssumptionError>;
