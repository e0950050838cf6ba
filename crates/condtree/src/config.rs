//! Parse options, optionally loaded from environment variables.
//!
//! The only tunable today is the maximum parenthesis nesting depth, which
//! bounds recursion on adversarial input. It can be overridden with
//! `CONDTREE_MAX_DEPTH`.

use std::env;

use crate::error::ConfigError;

/// Default maximum nesting depth of parenthesised groups.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Environment variable overriding [`ParseOptions::max_depth`].
pub const MAX_DEPTH_ENV: &str = "CONDTREE_MAX_DEPTH";

/// Options controlling expression construction.
///
/// # Examples
///
/// ```
/// use condtree::{Expression, ParseOptions};
///
/// let options = ParseOptions::default().with_max_depth(2);
/// assert!(Expression::parse_with("(a and (b or c)) or d", &options).is_ok());
/// assert!(Expression::parse_with("(a and (b or (c))) or d", &options).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Deepest nesting level accepted; the root expression is level 0.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Load options from the process environment.
    ///
    /// Reads `CONDTREE_MAX_DEPTH` and falls back to defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if a variable holds an invalid
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load options through an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] if a value is not a positive
    /// integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_depth = match lookup(MAX_DEPTH_ENV) {
            Some(val) => val
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|depth| *depth > 0)
                .ok_or_else(|| {
                    ConfigError::InvalidConfig(format!(
                        "invalid max depth '{val}', expected a positive integer"
                    ))
                })?,
            None => DEFAULT_MAX_DEPTH,
        };

        Ok(Self { max_depth })
    }

    /// Create new options with the specified maximum depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;

    fn lookup_with(value: Option<&str>) -> impl Fn(&str) -> Option<String> {
        let value = value.map(str::to_owned);
        move |key| {
            assert_eq!(key, MAX_DEPTH_ENV);
            value.clone()
        }
    }

    #[test]
    fn default_values() {
        assert_eq!(ParseOptions::default().max_depth, 64);
    }

    #[test]
    fn missing_variable_uses_default() {
        let options = ParseOptions::from_lookup(lookup_with(None)).unwrap();
        assert_eq!(options, ParseOptions::default());
    }

    #[test]
    fn reads_max_depth() {
        let options = ParseOptions::from_lookup(lookup_with(Some(" 8 "))).unwrap();
        assert_eq!(options.max_depth, 8);
    }

    #[test]
    fn rejects_invalid_max_depth() {
        for bad in ["zero", "0", "-3", ""] {
            let err = ParseOptions::from_lookup(lookup_with(Some(bad))).unwrap_err();
            assert!(err.to_string().contains("expected a positive integer"));
        }
    }

    #[test]
    fn with_max_depth_builder() {
        assert_eq!(ParseOptions::default().with_max_depth(2).max_depth, 2);
    }
}
