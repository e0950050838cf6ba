//! Error types shared by the text scanning modules.

use std::fmt;
use thiserror::Error;

/// Additional context for scanning errors tied to a byte offset.
///
/// # Examples
/// ```
/// use condtree_patterns::TextErrorInfo;
/// let info = TextErrorInfo::new("unbalanced parenthesis", 3, Some("(a".into()));
/// assert_eq!(info.fragment.as_deref(), Some("(a"));
/// assert_eq!(info.position, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextErrorInfo {
    /// Short description of the failure.
    pub message: &'static str,
    /// Zero-based byte offset where the failure was detected.
    pub position: usize,
    /// Offending fragment of the input, when one can be isolated.
    pub fragment: Option<String>,
}

impl TextErrorInfo {
    /// Create a new error description for a scanning failure.
    ///
    /// # Examples
    /// ```
    /// use condtree_patterns::TextErrorInfo;
    /// let info = TextErrorInfo::new("unterminated string literal", 1, None);
    /// assert_eq!(info.message, "unterminated string literal");
    /// ```
    #[must_use]
    pub fn new(message: &'static str, position: usize, fragment: Option<String>) -> Self {
        Self {
            message,
            position,
            fragment,
        }
    }
}

impl fmt::Display for TextErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(
                f,
                "{} for `{}` at byte {} (zero-based)",
                self.message, fragment, self.position
            ),
            None => write!(f, "{} at byte {} (zero-based)", self.message, self.position),
        }
    }
}

/// Errors surfaced while scanning expression text.
///
/// # Examples
/// ```
/// use condtree_patterns::{PatternError, TextErrorInfo};
/// let info = TextErrorInfo::new("unbalanced parenthesis", 2, None);
/// let err = PatternError::Text(info.clone());
/// assert_eq!(err.to_string(), info.to_string());
/// ```
#[derive(Debug, Error)]
pub enum PatternError {
    /// The text could not be scanned (unbalanced groups, open literals).
    #[error("{0}")]
    Text(TextErrorInfo),
    /// A connective matcher could not be compiled.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub(crate) fn text_error(
    message: &'static str,
    position: usize,
    fragment: Option<String>,
) -> PatternError {
    PatternError::Text(TextErrorInfo::new(message, position, fragment))
}
