//! Compiled field patterns

use regex::Regex;

use crate::rules::RuleError;
use crate::Field;

/// A conjunction of regular expressions; a value matches when every clause
/// matches. Look-ahead style requirements ("at least one digit") are written
/// as separate clauses since `regex` has no look-around.
#[derive(Debug, Clone)]
pub struct Pattern {
    clauses: Vec<Regex>,
    /// Minimum length in UTF-16 code units, the unit browsers measure in
    min_units: Option<usize>,
}

impl Pattern {
    /// Compile a single-clause pattern
    pub fn new(field: Field, source: &str) -> Result<Self, RuleError> {
        Self::all_of(field, &[source])
    }

    /// Compile a pattern from several clauses that must all match
    pub fn all_of<S: AsRef<str>>(field: Field, sources: &[S]) -> Result<Self, RuleError> {
        let clauses = sources
            .iter()
            .map(|s| {
                Regex::new(s.as_ref()).map_err(|e| RuleError::InvalidPattern {
                    field,
                    pattern: s.as_ref().to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if clauses.is_empty() {
            return Err(RuleError::EmptyPattern(field));
        }

        Ok(Self {
            clauses,
            min_units: None,
        })
    }

    /// Also require at least `units` UTF-16 code units
    pub fn with_min_units(mut self, units: usize) -> Self {
        self.min_units = Some(units);
        self
    }

    pub fn min_units(&self) -> Option<usize> {
        self.min_units
    }

    pub fn is_match(&self, value: &str) -> bool {
        let long_enough = self
            .min_units
            .map_or(true, |n| value.encode_utf16().count() >= n);
        long_enough && self.clauses.iter().all(|r| r.is_match(value))
    }

    /// Source text of each clause
    pub fn sources(&self) -> Vec<&str> {
        self.clauses.iter().map(Regex::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_clause_must_match() {
        let pattern = Pattern::all_of(Field::Password, &["^.{3,}$", "[0-9]"]).unwrap();
        assert!(pattern.is_match("ab1"));
        assert!(!pattern.is_match("abc"));
        assert!(!pattern.is_match("1"));
    }

    #[test]
    fn test_min_units_counts_utf16() {
        let pattern = Pattern::new(Field::Password, "^.*$")
            .unwrap()
            .with_min_units(3);
        // One astral character is two UTF-16 units
        assert!(pattern.is_match("a\u{1F600}"));
        assert!(!pattern.is_match("ab"));
        assert!(!pattern.is_match("\u{e9}b"));
    }

    #[test]
    fn test_invalid_regex_names_field() {
        let err = Pattern::new(Field::Email, "([a-z]").unwrap_err();
        assert!(matches!(
            err,
            RuleError::InvalidPattern { field: Field::Email, .. }
        ));
    }

    #[test]
    fn test_no_clauses_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            Pattern::all_of(Field::Phone, &empty),
            Err(RuleError::EmptyPattern(Field::Phone))
        ));
    }
}
