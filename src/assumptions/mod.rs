//! Average wage increase assumptions: published data, alternative numbering,
//! the per-alternative store and the active selection

mod active;
mod published;
mod scheme;
mod store;

pub use active::ActiveSelection;
pub use published::{
    PublishedAlternative, PublishedAssumptions, BASE_YEAR, FIRST_HISTORICAL_YEAR, NUM_ALTERNATIVES,
    SHORT_RANGE_YEARS,
};
pub use scheme::{AlternativeScheme, StandardAlternatives};
pub use store::WageGrowthStore;
