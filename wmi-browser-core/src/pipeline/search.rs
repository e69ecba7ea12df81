//! Compiled free-text search

use regex::{Regex, RegexBuilder};

use crate::error::{CoreError, CoreResult};
use crate::types::WmiRecord;

/// Case-insensitive regular expression compiled from the user's search text.
///
/// Compilation is fallible: malformed input yields
/// [`CoreError::InvalidPattern`] instead of aborting the caller.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
}

impl SearchPattern {
    pub fn new(text: &str) -> CoreResult<Self> {
        let regex = RegexBuilder::new(text)
            .case_insensitive(true)
            .build()
            .map_err(|e| {
                log::debug!("[wmi] rejected search pattern {text:?}: {e}");
                CoreError::InvalidPattern(e.to_string())
            })?;
        Ok(Self { regex })
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// True when any of the record's eight search fields matches
    pub fn matches_record(&self, record: &WmiRecord) -> bool {
        record
            .search_fields()
            .iter()
            .any(|field| self.is_match(field))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        let pattern = SearchPattern::new("honda").unwrap();
        assert!(pattern.is_match("HONDA MOTOR CO., LTD"));
        assert!(pattern.is_match("Honda"));
    }

    #[test]
    fn test_regex_semantics_not_literal() {
        let pattern = SearchPattern::new("^1h.$").unwrap();
        assert!(pattern.is_match("1HG"));
        assert!(!pattern.is_match("X1HG"));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            SearchPattern::new("(unclosed"),
            Err(CoreError::InvalidPattern(_))
        ));
        assert!(matches!(
            SearchPattern::new("[a-"),
            Err(CoreError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_empty_haystack() {
        assert!(!SearchPattern::new("x").unwrap().is_match(""));
        assert!(SearchPattern::new("x*").unwrap().is_match(""));
    }
}
