//! Alternative numbering used by the hosting benefit engine
//!
//! Alternatives 1 through N are Trustees Report alternatives held by the
//! store. Numbers above N name flat or custom scenarios whose values are
//! handled elsewhere; the store only needs their titles.

use super::published::NUM_ALTERNATIVES;

/// Decides which alternative numbers the store owns
pub trait AlternativeScheme: std::fmt::Debug + Send + Sync {
    /// True if `alt` is a Trustees Report alternative held by the store
    fn is_trustees_report(&self, alt: usize) -> bool;

    fn is_not_trustees_report(&self, alt: usize) -> bool {
        !self.is_trustees_report(alt)
    }

    /// Highest valid alternative number
    fn max_alternative(&self) -> usize;

    /// Title for an alternative not held by the store
    fn other_title(&self, alt: usize) -> Option<&str>;
}

/// Standard numbering: Trustees Report alternatives, then flat, PEBS and other
#[derive(Debug, Clone)]
pub struct StandardAlternatives {
    num_trustees_report: usize,
    other_titles: Vec<String>,
}

impl StandardAlternatives {
    /// First alternative number after the Trustees Report alternatives
    pub const FLAT: usize = NUM_ALTERNATIVES + 1;
    pub const PEBS: usize = NUM_ALTERNATIVES + 2;
    pub const OTHER: usize = NUM_ALTERNATIVES + 3;

    pub fn new(num_trustees_report: usize, other_titles: Vec<String>) -> Self {
        Self {
            num_trustees_report,
            other_titles,
        }
    }

    /// Offset into the title table for a non-Trustees Report alternative
    fn other_index(&self, alt: usize) -> Option<usize> {
        alt.checked_sub(self.num_trustees_report + 1)
    }
}

impl Default for StandardAlternatives {
    fn default() -> Self {
        Self::new(
            NUM_ALTERNATIVES,
            vec![
                "Flat average wage increases".to_string(),
                "Average wage increases for PEBS".to_string(),
                "Other average wage increases".to_string(),
            ],
        )
    }
}

impl AlternativeScheme for StandardAlternatives {
    fn is_trustees_report(&self, alt: usize) -> bool {
        alt >= 1 && alt <= self.num_trustees_report
    }

    fn max_alternative(&self) -> usize {
        self.num_trustees_report + self.other_titles.len()
    }

    fn other_title(&self, alt: usize) -> Option<&str> {
        if self.is_trustees_report(alt) {
            return None;
        }
        self.other_index(alt)
            .and_then(|i| self.other_titles.get(i))
            .map(String::as_str)
    }
}
