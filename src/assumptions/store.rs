//! In-memory store of average wage increase alternatives
//!
//! Each Trustees Report alternative gets one continuous series running from
//! the first historical year to the furthest year the engine needs:
//! - Historical years (through base year - 2): shared historical record
//! - Short-range years (base year - 1 onward): the alternative's table
//! - Every later year: the alternative's ultimate rate, with no blending
//!
//! Overrides live only in memory for the life of the store.

use super::active::ActiveSelection;
use super::published::PublishedAssumptions;
use super::scheme::{AlternativeScheme, StandardAlternatives};
use crate::error::{AssumptionError, Result};
use crate::series::AnnualSeries;
use log::{debug, info};

/// Average wage increase assumptions by alternative
#[derive(Debug)]
pub struct WageGrowthStore {
    published: PublishedAssumptions,
    scheme: Box<dyn AlternativeScheme>,
    /// Year range required by the engine
    engine_first_year: i32,
    engine_last_year: i32,
    /// One series per published alternative (index = alt - 1)
    series: Vec<AnnualSeries>,
    titles: Vec<String>,
}

impl WageGrowthStore {
    /// Build a store from the 2023 Trustees Report with standard numbering
    pub fn new(min_first_year: i32, min_last_year: i32) -> Result<Self> {
        Self::with_published(
            PublishedAssumptions::trustees_report_2023(),
            Box::new(StandardAlternatives::default()),
            min_first_year,
            min_last_year,
        )
    }

    /// Build a store from any published data and numbering scheme
    ///
    /// The stored range is widened to cover both the published data and the
    /// engine's required range.
    pub fn with_published(
        published: PublishedAssumptions,
        scheme: Box<dyn AlternativeScheme>,
        min_first_year: i32,
        min_last_year: i32,
    ) -> Result<Self> {
        published.validate()?;
        check_scheme(scheme.as_ref(), published.num_alternatives())?;

        let first_year = published.first_historical_year.min(min_first_year);
        let last_year = published.last_short_range_year().max(min_last_year);
        let num_alts = published.num_alternatives();

        let series = (0..num_alts)
            .map(|_| AnnualSeries::new(first_year, last_year))
            .collect::<Result<Vec<_>>>()?;

        let mut store = Self {
            titles: vec![String::new(); num_alts],
            published,
            scheme,
            engine_first_year: min_first_year,
            engine_last_year: min_last_year,
            series,
        };

        store.restore_all()?;

        info!(
            "Wage growth store built for {} alternatives covering {}-{}",
            num_alts, first_year, last_year
        );

        Ok(store)
    }

    /// Reset an alternative's title, history and projected values to published values
    ///
    /// Years before the first historical year are left as they are.
    pub fn restore(&mut self, alt: usize) -> Result<()> {
        let idx = self.stored_index(alt)?;
        self.restore_index(idx)
            .map_err(|e| AssumptionError::configuration(format!("restoring alternative {}", alt), e))?;
        debug!("Restored alternative {} to published values", alt);
        Ok(())
    }

    /// Restore every published alternative
    pub fn restore_all(&mut self) -> Result<()> {
        for alt in 1..=self.series.len() {
            self.restore(alt)?;
        }
        Ok(())
    }

    fn restore_index(&mut self, idx: usize) -> Result<()> {
        let published = &self.published.alternatives[idx];
        let first_short = self.published.first_short_range_year();
        let last_short = self.published.last_short_range_year();
        let series = &mut self.series[idx];

        self.titles[idx] = published.title.clone();

        let first_hist = self.published.first_historical_year;
        for (i, &value) in self.published.historical.iter().enumerate() {
            series.set(first_hist + i as i32, value)?;
        }

        for year in first_short..=last_short {
            let offset = (year - first_short) as usize;
            let value = published.short_range.get(offset).copied().ok_or(AssumptionError::YearOutOfRange {
                year,
                first_year: first_short,
                last_year: first_short + published.short_range.len() as i32 - 1,
            })?;
            series.set(year, value)?;
        }

        // Hard step to the ultimate rate
        for year in (last_short + 1)..=series.last_year() {
            series.set(year, published.ultimate)?;
        }

        Ok(())
    }

    /// Changes are never persisted for compiled-in assumptions
    pub fn save(&self, alt: usize) -> Result<()> {
        self.check_alternative(alt)?;
        Ok(())
    }

    /// Copy the selected alternative into `active`
    ///
    /// Years from the later of the engine's first year and the active base
    /// year through the active last year are overwritten. Alternatives not
    /// held by the store give zero increases.
    pub fn get_series(&self, alt: usize, active: &mut ActiveSelection) -> Result<()> {
        self.check_alternative(alt)?;
        let out = &mut active.series;
        let start = self.engine_first_year.max(out.base_year());
        let end = out.last_year();

        if self.scheme.is_trustees_report(alt) {
            let idx = self.stored_index(alt)?;
            out.assign(&self.series[idx], start, end)?;
            debug!("Selected alternative {} for {}-{}", alt, start, end);
        } else {
            out.fill(0.0, start, end)?;
            debug!("Alternative {} not stored, using zero increases for {}-{}", alt, start, end);
        }
        Ok(())
    }

    /// Store custom values for an alternative, then refresh `active`
    ///
    /// Only years from the engine's first year onward are replaced, so the
    /// historical prefix before that year is left alone.
    pub fn set_series(&mut self, alt: usize, new_data: &AnnualSeries, active: &mut ActiveSelection) -> Result<()> {
        self.check_alternative(alt)?;
        if self.scheme.is_trustees_report(alt) {
            let idx = self.stored_index(alt)?;
            let stored = &mut self.series[idx];
            let last = stored.last_year();
            stored.assign(new_data, self.engine_first_year, last)?;
            debug!("Overrode alternative {} for {}-{}", alt, self.engine_first_year, last);
        }
        self.get_series(alt, active)
    }

    /// Copy of a stored alternative with `rate` from `from_year` onward
    ///
    /// Intended as input to `set_series`. Only stored alternatives can be
    /// overridden this way.
    pub fn flat_override(&self, alt: usize, rate: f64, from_year: i32) -> Result<AnnualSeries> {
        self.check_alternative(alt)?;
        if self.scheme.is_not_trustees_report(alt) {
            return Err(AssumptionError::NotStored { alt });
        }
        let mut custom = self.stored_series(alt)?.clone();
        let last = custom.last_year();
        custom.fill(rate, from_year, last)?;
        Ok(custom)
    }

    /// Put the alternative's title into `active`
    pub fn get_title(&self, alt: usize, active: &mut ActiveSelection) -> Result<()> {
        active.title = self.title(alt)?.to_string();
        Ok(())
    }

    /// Store a new title for the alternative and make it the active title
    ///
    /// Titles of alternatives not held by the store cannot be changed; the
    /// externally supplied title is used instead.
    pub fn set_title(&mut self, alt: usize, title: &str, active: &mut ActiveSelection) -> Result<()> {
        self.check_alternative(alt)?;
        if self.scheme.is_trustees_report(alt) {
            let idx = self.stored_index(alt)?;
            self.titles[idx] = title.to_string();
        }
        self.get_title(alt, active)
    }

    /// Load both the series and the title of an alternative into `active`
    pub fn select(&self, alt: usize, active: &mut ActiveSelection) -> Result<()> {
        self.get_series(alt, active)?;
        self.get_title(alt, active)
    }

    /// Current title of an alternative
    pub fn title(&self, alt: usize) -> Result<&str> {
        self.check_alternative(alt)?;
        if self.scheme.is_not_trustees_report(alt) {
            return self
                .scheme
                .other_title(alt)
                .ok_or(AssumptionError::UnknownAlternative {
                    alt,
                    max: self.scheme.max_alternative(),
                });
        }
        let idx = self.stored_index(alt)?;
        Ok(&self.titles[idx])
    }

    /// Stored series for a published alternative
    pub fn stored_series(&self, alt: usize) -> Result<&AnnualSeries> {
        let idx = self.stored_index(alt)?;
        Ok(&self.series[idx])
    }

    pub fn published(&self) -> &PublishedAssumptions {
        &self.published
    }

    pub fn scheme(&self) -> &dyn AlternativeScheme {
        self.scheme.as_ref()
    }

    /// Number of alternatives held by the store
    pub fn num_alternatives(&self) -> usize {
        self.series.len()
    }

    /// First year of the stored series
    pub fn first_year(&self) -> i32 {
        self.series.first().map_or(self.engine_first_year, AnnualSeries::first_year)
    }

    /// Last year of the stored series
    pub fn last_year(&self) -> i32 {
        self.series.first().map_or(self.engine_last_year, AnnualSeries::last_year)
    }

    pub fn engine_first_year(&self) -> i32 {
        self.engine_first_year
    }

    pub fn engine_last_year(&self) -> i32 {
        self.engine_last_year
    }

    fn check_alternative(&self, alt: usize) -> Result<()> {
        let max = self.scheme.max_alternative();
        if alt == 0 || alt > max {
            return Err(AssumptionError::UnknownAlternative { alt, max });
        }
        Ok(())
    }

    /// Index of a stored alternative
    fn stored_index(&self, alt: usize) -> Result<usize> {
        if alt == 0 || alt > self.series.len() {
            return Err(AssumptionError::UnknownAlternative {
                alt,
                max: self.series.len(),
            });
        }
        Ok(alt - 1)
    }
}

/// The scheme must call exactly the published alternatives Trustees Report ones
fn check_scheme(scheme: &dyn AlternativeScheme, num_alts: usize) -> Result<()> {
    let mismatch = (1..=num_alts)
        .find(|&alt| scheme.is_not_trustees_report(alt))
        .or_else(|| Some(num_alts + 1).filter(|&alt| scheme.is_trustees_report(alt)));

    match mismatch {
        Some(alt) => Err(AssumptionError::configuration(
            format!("numbering scheme disagrees with published data at alternative {}", alt),
            AssumptionError::UnknownAlternative { alt, max: num_alts },
        )),
        None if scheme.max_alternative() < num_alts => Err(AssumptionError::configuration(
            "numbering scheme",
            AssumptionError::UnknownAlternative {
                alt: num_alts,
                max: scheme.max_alternative(),
            },
        )),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::published::{BASE_YEAR, FIRST_HISTORICAL_YEAR, SHORT_RANGE_YEARS};

    const ENGINE_FIRST: i32 = 1951;
    const ENGINE_LAST: i32 = 2100;

    fn store() -> WageGrowthStore {
        WageGrowthStore::new(ENGINE_FIRST, ENGINE_LAST).unwrap()
    }

    fn active() -> ActiveSelection {
        ActiveSelection::for_engine(ENGINE_FIRST, BASE_YEAR - 1, ENGINE_LAST).unwrap()
    }

    #[test]
    fn test_store_range() {
        let store = store();
        assert_eq!(store.first_year(), ENGINE_FIRST);
        assert_eq!(store.last_year(), ENGINE_LAST);

        // Published data wider than the engine's request
        let narrow = WageGrowthStore::new(1990, 2030).unwrap();
        assert_eq!(narrow.first_year(), FIRST_HISTORICAL_YEAR);
        assert_eq!(narrow.last_year(), BASE_YEAR + SHORT_RANGE_YEARS as i32 - 2);
    }

    #[test]
    fn test_splice_points() {
        let store = store();
        let published = store.published().clone();

        for alt in 1..=store.num_alternatives() {
            let s = store.stored_series(alt).unwrap();
            let pub_alt = &published.alternatives[alt - 1];

            for (i, &h) in published.historical.iter().enumerate() {
                assert_eq!(s.get(FIRST_HISTORICAL_YEAR + i as i32).unwrap(), h);
            }
            for (i, &v) in pub_alt.short_range.iter().enumerate() {
                assert_eq!(s.get(BASE_YEAR - 1 + i as i32).unwrap(), v);
            }
            for year in (published.last_short_range_year() + 1)..=ENGINE_LAST {
                assert_eq!(s.get(year).unwrap(), pub_alt.ultimate);
            }
        }
    }

    #[test]
    fn test_alternative_one_boundary() {
        let store = store();
        let s = store.stored_series(1).unwrap();
        let w = SHORT_RANGE_YEARS as i32;

        assert_eq!(s.get(BASE_YEAR - 1).unwrap(), 4.716759);
        assert_eq!(s.get(BASE_YEAR + w - 2).unwrap(), 4.915780);
        assert_eq!(s.get(BASE_YEAR - 1 + w).unwrap(), 4.8);
    }

    #[test]
    fn test_years_before_historical_are_zero() {
        let store = store();
        let s = store.stored_series(2).unwrap();
        assert_eq!(s.get(ENGINE_FIRST).unwrap(), 0.0);
        assert_eq!(s.get(FIRST_HISTORICAL_YEAR - 1).unwrap(), 0.0);
    }

    #[test]
    fn test_restore_idempotent() {
        let mut store = store();
        let mut sel = active();
        let custom = AnnualSeries::from_values(ENGINE_FIRST, vec![9.9; (ENGINE_LAST - ENGINE_FIRST + 1) as usize]).unwrap();

        store.set_series(3, &custom, &mut sel).unwrap();
        store.set_title(3, "Custom", &mut sel).unwrap();

        store.restore(3).unwrap();
        let first = (store.stored_series(3).unwrap().clone(), store.title(3).unwrap().to_string());
        store.restore(3).unwrap();
        let second = (store.stored_series(3).unwrap().clone(), store.title(3).unwrap().to_string());

        assert_eq!(first, second);
        assert_eq!(first.1, "2023 Trustees Report Alternative III");
        assert_eq!(first.0.get(2000).unwrap(), 5.529993);
        // Years before the historical record keep the override
        assert_eq!(first.0.get(1960).unwrap(), 9.9);
        assert_eq!(first.0.get(BASE_YEAR).unwrap(), 1.995744);
    }

    #[test]
    fn test_restore_unknown_alternative() {
        let mut store = store();
        assert!(matches!(
            store.restore(5),
            Err(AssumptionError::UnknownAlternative { alt: 5, max: 4 })
        ));
        assert!(store.restore(0).is_err());
    }

    #[test]
    fn test_get_series_non_trustees_report_is_zero() {
        let store = store();
        let mut sel = active();
        sel.series.fill(7.0, ENGINE_FIRST, ENGINE_LAST).unwrap();

        store.get_series(StandardAlternatives::FLAT, &mut sel).unwrap();

        // Years before the active base year are untouched
        assert_eq!(sel.get(BASE_YEAR - 2).unwrap(), 7.0);
        for year in (BASE_YEAR - 1)..=ENGINE_LAST {
            assert_eq!(sel.get(year).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_get_series_respects_base_year() {
        let store = store();
        let mut sel = active();

        store.get_series(2, &mut sel).unwrap();

        assert_eq!(sel.get(BASE_YEAR - 2).unwrap(), 0.0);
        assert_eq!(sel.get(BASE_YEAR - 1).unwrap(), 4.775744);
        assert_eq!(sel.get(ENGINE_LAST).unwrap(), 3.6);
    }

    #[test]
    fn test_get_series_rejects_out_of_scheme() {
        let store = store();
        let mut sel = active();
        assert!(store.get_series(8, &mut sel).unwrap_err().is_range_error());
        assert!(store.get_series(0, &mut sel).is_err());
    }

    #[test]
    fn test_set_series_override() {
        let mut store = WageGrowthStore::new(1990, ENGINE_LAST).unwrap();
        let mut sel = ActiveSelection::for_engine(1990, 1990, ENGINE_LAST).unwrap();
        let custom = AnnualSeries::from_values(1980, vec![1.25; (ENGINE_LAST - 1980 + 1) as usize]).unwrap();

        store.set_series(1, &custom, &mut sel).unwrap();

        let stored = store.stored_series(1).unwrap();
        // Before the engine's first year the published history stays
        assert_eq!(stored.get(1989).unwrap(), 3.959390);
        for year in 1990..=ENGINE_LAST {
            assert_eq!(stored.get(year).unwrap(), 1.25);
            assert_eq!(sel.get(year).unwrap(), 1.25);
        }
    }

    #[test]
    fn test_set_series_non_trustees_report() {
        let mut store = store();
        let mut sel = active();
        let custom = AnnualSeries::from_values(ENGINE_FIRST, vec![2.0; (ENGINE_LAST - ENGINE_FIRST + 1) as usize]).unwrap();
        let before: Vec<AnnualSeries> = (1..=4).map(|alt| store.stored_series(alt).unwrap().clone()).collect();

        store.set_series(StandardAlternatives::PEBS, &custom, &mut sel).unwrap();

        assert_eq!(sel.get(2050).unwrap(), 0.0);
        for alt in 1..=4 {
            assert_eq!(store.stored_series(alt).unwrap(), &before[alt - 1]);
        }
    }

    #[test]
    fn test_titles() {
        let mut store = store();
        let mut sel = active();

        store.get_title(1, &mut sel).unwrap();
        assert_eq!(sel.title(), "2023 Trustees Report Alternative I");

        store.set_title(1, "X", &mut sel).unwrap();
        assert_eq!(sel.title(), "X");
        assert_eq!(store.title(1).unwrap(), "X");

        store.restore(1).unwrap();
        assert_eq!(store.title(1).unwrap(), "2023 Trustees Report Alternative I");

        // External names cannot be replaced
        store.set_title(StandardAlternatives::FLAT, "Y", &mut sel).unwrap();
        assert_eq!(sel.title(), "Flat average wage increases");
    }

    #[test]
    fn test_select() {
        let store = store();
        let mut sel = active();

        store.select(4, &mut sel).unwrap();
        assert_eq!(sel.title(), "No increase beyond 2021 average wage");
        assert!(sel.series.iter().filter(|(y, _)| *y >= BASE_YEAR - 1).all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_save_is_noop() {
        let store = store();
        let before = store.stored_series(1).unwrap().clone();
        store.save(1).unwrap();
        assert_eq!(store.stored_series(1).unwrap(), &before);
        assert!(store.save(9).is_err());
    }

    #[test]
    fn test_malformed_tables_fail_construction() {
        let mut published = PublishedAssumptions::trustees_report_2023();
        published.alternatives[0].short_range.truncate(10);

        let result = WageGrowthStore::with_published(
            published,
            Box::new(StandardAlternatives::default()),
            ENGINE_FIRST,
            ENGINE_LAST,
        );
        assert!(matches!(result, Err(AssumptionError::Configuration { .. })));
    }

    #[test]
    fn test_scheme_with_extra_trustees_report_alternative() {
        let scheme = StandardAlternatives::new(5, vec!["Flat".to_string()]);
        let result = WageGrowthStore::with_published(
            PublishedAssumptions::trustees_report_2023(),
            Box::new(scheme),
            ENGINE_FIRST,
            ENGINE_LAST,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, AssumptionError::Configuration { .. }));
        assert!(err.to_string().contains("alternative 5"));
    }

    #[test]
    fn test_scheme_missing_trustees_report_alternative() {
        let scheme = StandardAlternatives::new(3, vec!["Flat".to_string(), "Other".to_string()]);
        let result = WageGrowthStore::with_published(
            PublishedAssumptions::trustees_report_2023(),
            Box::new(scheme),
            ENGINE_FIRST,
            ENGINE_LAST,
        );

        let err = result.unwrap_err();
        assert!(matches!(err, AssumptionError::Configuration { .. }));
        assert!(err.to_string().contains("alternative 4"));
    }

    #[test]
    fn test_extreme_engine_range_is_error() {
        assert!(matches!(
            WageGrowthStore::new(i32::MIN, ENGINE_LAST),
            Err(AssumptionError::InvalidRange { .. })
        ));
        assert!(WageGrowthStore::new(ENGINE_FIRST, i32::MAX).is_err());
    }

    #[test]
    fn test_restore_failure_names_alternative() {
        let mut store = store();
        // Tables damaged after construction
        store.published.alternatives[1].short_range.truncate(3);

        let err = store.restore(2).unwrap_err();
        match &err {
            AssumptionError::Configuration { context, source } => {
                assert_eq!(context, "restoring alternative 2");
                assert!(source.is_range_error());
            }
            other => panic!("expected configuration error, got {:?}", other),
        }
        assert!(err.to_string().starts_with("restoring alternative 2: "));

        // Other alternatives still restore
        store.restore(1).unwrap();
    }

    #[test]
    fn test_flat_override() {
        let mut store = store();
        let mut sel = active();

        let custom = store.flat_override(1, 4.0, 2040).unwrap();
        store.set_series(1, &custom, &mut sel).unwrap();

        assert_eq!(sel.get(2039).unwrap(), 4.8);
        assert_eq!(sel.get(2040).unwrap(), 4.0);
        assert_eq!(sel.get(ENGINE_LAST).unwrap(), 4.0);

        assert!(matches!(
            store.flat_override(StandardAlternatives::FLAT, 4.0, 2040),
            Err(AssumptionError::NotStored { alt: 5 })
        ));
        assert!(matches!(
            store.flat_override(1, 4.0, ENGINE_LAST + 1),
            Err(AssumptionError::EmptyRange { .. })
        ));
    }
}
