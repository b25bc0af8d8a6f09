//! Published average wage increase assumptions
//!
//! Historical increases and the Trustees Report projections are compiled in.
//! Each alternative has a short-range table starting the year before the base
//! year, followed by a single ultimate rate for every later year.

use crate::error::{AssumptionError, Result};

/// Base year of the 2023 Trustees Report
pub const BASE_YEAR: i32 = 2023;

/// First year with a published historical increase
pub const FIRST_HISTORICAL_YEAR: i32 = 1978;

/// Years of individually specified projected values
pub const SHORT_RANGE_YEARS: usize = 16;

/// Number of published alternatives
pub const NUM_ALTERNATIVES: usize = 4;

/// One published projection alternative
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedAlternative {
    pub title: String,
    /// Values for `base_year - 1` onward, one per short-range year
    pub short_range: Vec<f64>,
    /// Long-run rate applied after the short-range window
    pub ultimate: f64,
}

/// Complete set of published data the store is built from
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedAssumptions {
    pub base_year: i32,
    pub first_historical_year: i32,
    pub short_range_years: usize,
    /// Increases for `first_historical_year..=base_year - 2`
    pub historical: Vec<f64>,
    pub alternatives: Vec<PublishedAlternative>,
}

impl PublishedAssumptions {
    /// Assumptions from the 2023 Trustees Report
    pub fn trustees_report_2023() -> Self {
        let titles = [
            "2023 Trustees Report Alternative I",
            "2023 Trustees Report Alternative II",
            "2023 Trustees Report Alternative III",
            "No increase beyond 2021 average wage",
        ];
        let ultimate = [4.8, 3.6, 2.4, 0.0];

        let alternatives = titles
            .iter()
            .zip(Self::short_range_2023())
            .zip(ultimate)
            .map(|((title, short_range), ultimate)| PublishedAlternative {
                title: title.to_string(),
                short_range,
                ultimate,
            })
            .collect();

        Self {
            base_year: BASE_YEAR,
            first_historical_year: FIRST_HISTORICAL_YEAR,
            short_range_years: SHORT_RANGE_YEARS,
            historical: Self::historical_increases(),
            alternatives,
        }
    }

    /// Last year of the historical record
    pub fn last_historical_year(&self) -> i32 {
        self.base_year - 2
    }

    /// First year taken from the short-range tables
    pub fn first_short_range_year(&self) -> i32 {
        self.base_year - 1
    }

    /// Last year taken from the short-range tables
    pub fn last_short_range_year(&self) -> i32 {
        self.base_year + self.short_range_years as i32 - 2
    }

    pub fn num_alternatives(&self) -> usize {
        self.alternatives.len()
    }

    /// Check that the tables cover the years they claim to
    pub fn validate(&self) -> Result<()> {
        let hist_years = (self.last_historical_year() - self.first_historical_year + 1).max(0) as usize;
        if self.historical.len() != hist_years {
            return Err(AssumptionError::configuration(
                "historical record length",
                AssumptionError::InvalidRange {
                    first_year: self.first_historical_year,
                    last_year: self.first_historical_year + self.historical.len() as i32 - 1,
                },
            ));
        }
        for (i, alt) in self.alternatives.iter().enumerate() {
            if alt.short_range.len() != self.short_range_years {
                return Err(AssumptionError::configuration(
                    format!("short-range table for alternative {}", i + 1),
                    AssumptionError::InvalidRange {
                        first_year: self.first_short_range_year(),
                        last_year: self.first_short_range_year() + alt.short_range.len() as i32 - 1,
                    },
                ));
            }
        }
        Ok(())
    }

    /// Historical average wage increases, 1978-2021
    fn historical_increases() -> Vec<f64> {
        vec![
            // 1978-1980
            7.941048, 8.747891, 9.007392,
            // 1981-1990
            10.066281, 5.505224, 4.871540, 5.878443, 4.260533,
            2.968106, 6.377448, 4.925132, 3.959390, 4.619158,
            // 1991-2000
            3.726559, 5.152396, 0.860023, 2.683910, 4.008373,
            4.890539, 5.835092, 5.233866, 5.572834, 5.529993,
            // 2001-2010
            2.385645, 1.002888, 2.444538, 4.648767, 3.659027,
            4.596306, 4.538179, 2.300406, -1.508069, 2.363503,
            // 2011-2020
            3.133333, 3.122550, 1.278133, 3.549622, 3.479039,
            1.130011, 3.453260, 3.624486, 3.747550, 2.825527,
            // 2021
            8.891955,
        ]
    }

    /// Projected increases for 2022-2037 by alternative
    fn short_range_2023() -> Vec<Vec<f64>> {
        vec![
            vec![
                4.716759, 4.745898, 5.743597, 6.144177,
                5.641394, 5.360065, 5.300424, 5.269018,
                5.250727, 5.239157, 5.034754, 4.937419,
                4.920986, 4.918182, 4.917264, 4.915780,
            ],
            vec![
                4.775744, 4.221325, 3.749835, 4.057276,
                4.112041, 4.095834, 4.027539, 4.032133,
                3.999020, 3.981322, 3.776836, 3.680704,
                3.664819, 3.662106, 3.661813, 3.662627,
            ],
            vec![
                4.762652, 1.995744, 3.597890, 3.696917,
                3.478052, 3.445427, 2.948577, 2.756800,
                2.734542, 2.727163, 2.519273, 2.429264,
                2.416035, 2.413163, 2.413695, 2.417885,
            ],
            // No increase after 2021
            vec![0.0; SHORT_RANGE_YEARS],
        ]
    }
}

impl Default for PublishedAssumptions {
    fn default() -> Self {
        Self::trustees_report_2023()
    }
}
