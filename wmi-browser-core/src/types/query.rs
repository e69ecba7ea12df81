//! Selection state passed to the pipeline

use serde::{Deserialize, Serialize};

/// Country option meaning "no country restriction"
pub const ALL_COUNTRIES: &str = "All Countries";

/// User selection: country filter plus free-text search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterQuery {
    /// One of the derived country options, [`ALL_COUNTRIES`] by default
    pub selected_country: String,
    /// Regular expression text; empty disables the text check
    pub search_text: String,
}

impl FilterQuery {
    pub fn new(selected_country: impl Into<String>, search_text: impl Into<String>) -> Self {
        Self {
            selected_country: selected_country.into(),
            search_text: search_text.into(),
        }
    }

    /// Whether a country restriction is active
    pub fn restricts_country(&self) -> bool {
        self.selected_country != ALL_COUNTRIES
    }

    /// Whether a text search is active
    pub fn has_search(&self) -> bool {
        !self.search_text.is_empty()
    }
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self::new(ALL_COUNTRIES, "")
    }
}
