use crate::domain::error::{AppError, Result};
use regex::Regex;

/// Detects whether a line contains a department value as a whole,
/// delimiter-bounded token.
///
/// A value only counts when it is surrounded by a comma or a double quote on
/// each side, matching the single-column quoted-list storage convention. A
/// value embedded inside a longer value (e.g. `供应链事业部` inside
/// `整机供应链事业部`) has no comma or quote immediately before it and is
/// never matched. Line start and line end are not boundaries.
pub struct Matcher {
    pattern: Regex,
}

impl Matcher {
    /// Compiles the bounded pattern for `value`. The value is escaped first
    /// so regex metacharacters in a department name match literally instead
    /// of corrupting the pattern.
    pub fn new(value: &str) -> Result<Self> {
        let pattern = Regex::new(&format!("[,\"]{}[,\"]", regex::escape(value)))
            .map_err(|e| AppError::Internal(format!("invalid match pattern: {}", e)))?;
        Ok(Self { pattern })
    }

    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_bounded_value_matches() {
        let matcher = Matcher::new("DeptA").unwrap();
        assert!(matcher.is_match("id1,DeptA,x"));
    }

    #[test]
    fn test_quote_bounded_value_matches() {
        let matcher = Matcher::new("DeptA").unwrap();
        assert!(matcher.is_match("\"DeptA\""));
        assert!(matcher.is_match("\"DeptA,"));
        assert!(matcher.is_match(",DeptA\""));
    }

    #[test]
    fn test_substring_of_longer_value_does_not_match() {
        let matcher = Matcher::new("DeptA").unwrap();
        assert!(!matcher.is_match("id1,XDeptA,x"));
        assert!(!matcher.is_match("id1,DeptAX,x"));
    }

    #[test]
    fn test_line_edges_are_not_boundaries() {
        let matcher = Matcher::new("DeptA").unwrap();
        assert!(!matcher.is_match("DeptA,x"));
        assert!(!matcher.is_match("x,DeptA"));
    }

    #[test]
    fn test_cjk_value_bounded_match() {
        let matcher = Matcher::new("供应链事业部").unwrap();
        assert!(matcher.is_match("id1,供应链事业部,x"));
        assert!(!matcher.is_match("id1,整机供应链事业部,x"));
    }

    #[test]
    fn test_metacharacters_in_value_match_literally() {
        let matcher = Matcher::new("R&D (Core.*)").unwrap();
        assert!(matcher.is_match("id1,R&D (Core.*),x"));
        assert!(!matcher.is_match("id1,R&D (CoreXX),x"));
    }
}
