//! Parenthesis trimming and top-level group discovery.
//!
//! Quoted literals and call argument lists such as `len(items)` are skipped
//! while scanning, so only grouping parentheses are ever reported.

use crate::errors::PatternError;
use crate::scan::{is_call_paren, is_quote, matching_close, skip_quoted, slice_text, unopened};

/// Inclusive byte offsets of a parenthesised group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParenSpan {
    /// Offset of the opening `(`.
    pub start: usize,
    /// Offset of the matching `)`.
    pub end: usize,
}

/// Strip surrounding whitespace and redundant enclosing parenthesis pairs.
///
/// A pair is only removed when it wraps the whole text; `(a) and (b)` is left
/// untouched.
///
/// # Errors
/// Returns [`PatternError`] when the parentheses or quoted literals in `text`
/// cannot be balanced.
///
/// # Examples
/// ```
/// use condtree_patterns::trim_parenthesis_pairs;
/// assert_eq!(trim_parenthesis_pairs(" (( a and b )) ").ok(), Some("a and b"));
/// assert_eq!(trim_parenthesis_pairs("(a) or (b)").ok(), Some("(a) or (b)"));
/// ```
pub fn trim_parenthesis_pairs(text: &str) -> Result<&str, PatternError> {
    let mut current = text.trim();
    while current.starts_with('(') {
        let close = matching_close(current.as_bytes(), 0)?;
        if close + 1 != current.len() {
            break;
        }
        current = slice_text(current, 1, close)?.trim();
    }
    Ok(current)
}

/// Locate every top-level parenthesised group in `text`, left to right.
///
/// # Errors
/// Returns [`PatternError`] on an unmatched `(` or `)` and on unterminated
/// quoted literals.
///
/// # Examples
/// ```
/// use condtree_patterns::{ParenSpan, find_top_level_parenthesis};
/// let spans = find_top_level_parenthesis("(a or (b)) and c")
///     .unwrap_or_else(|err| panic!("text should scan: {err}"));
/// assert_eq!(spans, vec![ParenSpan { start: 0, end: 9 }]);
/// ```
pub fn find_top_level_parenthesis(text: &str) -> Result<Vec<ParenSpan>, PatternError> {
    let bytes = text.as_bytes();
    let mut spans = Vec::new();
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        match b {
            b if is_quote(b) => pos = skip_quoted(bytes, pos)?,
            b'(' => {
                let end = matching_close(bytes, pos)?;
                if !is_call_paren(bytes, pos) {
                    spans.push(ParenSpan { start: pos, end });
                }
                pos = end + 1;
            }
            b')' => return Err(unopened(bytes, pos)),
            _ => pos += 1,
        }
    }

    Ok(spans)
}
