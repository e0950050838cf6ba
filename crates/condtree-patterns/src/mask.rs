//! Reversible masking of text that must not be scanned for connectives.
//!
//! Quoted literals and call argument lists are swapped for opaque
//! placeholders so a value such as `"cats and dogs"` never splits a
//! condition. The [`MaskedText`] value carries everything needed to undo the
//! transform.

use crate::errors::{PatternError, text_error};
use crate::scan::{is_call_paren, is_quote, matching_close, skip_quoted, slice_text};

/// Delimiter surrounding the index of every placeholder.
pub const MASK_DELIMITER: char = '\u{1}';

/// Text with literals replaced by placeholders, plus the removed spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaskedText {
    text: String,
    spans: Vec<String>,
}

impl MaskedText {
    /// The masked text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of spans replaced by placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Whether nothing was masked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Restore every placeholder in `fragment`, a substring of the masked text.
    ///
    /// Placeholders with an unknown index are left as they are.
    ///
    /// # Examples
    /// ```
    /// use condtree_patterns::mask_literals;
    /// let masked = mask_literals(r#"name == "a and b""#)
    ///     .unwrap_or_else(|err| panic!("text should mask: {err}"));
    /// assert!(!masked.as_str().contains("and"));
    /// assert_eq!(masked.restore(masked.as_str()), r#"name == "a and b""#);
    /// ```
    #[must_use]
    pub fn restore(&self, fragment: &str) -> String {
        let mut restored = String::with_capacity(fragment.len());
        let mut inside = false;
        for piece in fragment.split(MASK_DELIMITER) {
            if inside {
                match piece.parse::<usize>().ok().and_then(|i| self.spans.get(i)) {
                    Some(span) => restored.push_str(span),
                    None => {
                        restored.push(MASK_DELIMITER);
                        restored.push_str(piece);
                        restored.push(MASK_DELIMITER);
                    }
                }
            } else {
                restored.push_str(piece);
            }
            inside = !inside;
        }
        restored
    }
}

/// Replace quoted literals and call argument lists with placeholders.
///
/// The function name of a call stays visible; only its parenthesised
/// arguments are masked.
///
/// # Errors
/// Returns [`PatternError`] when a literal or argument list is left open, or
/// when `text` already contains [`MASK_DELIMITER`].
pub fn mask_literals(text: &str) -> Result<MaskedText, PatternError> {
    if let Some(position) = text.find(MASK_DELIMITER) {
        return Err(text_error("reserved mask delimiter", position, None));
    }

    let bytes = text.as_bytes();
    let mut masked = String::with_capacity(text.len());
    let mut spans = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(&b) = bytes.get(pos) {
        let span_end = match b {
            b if is_quote(b) => Some(skip_quoted(bytes, pos)?),
            b'(' if is_call_paren(bytes, pos) => Some(matching_close(bytes, pos)? + 1),
            _ => None,
        };
        let Some(end) = span_end else {
            pos += 1;
            continue;
        };
        masked.push_str(slice_text(text, plain_start, pos)?);
        masked.push(MASK_DELIMITER);
        masked.push_str(&spans.len().to_string());
        masked.push(MASK_DELIMITER);
        spans.push(slice_text(text, pos, end)?.to_string());
        pos = end;
        plain_start = end;
    }
    masked.push_str(slice_text(text, plain_start, text.len())?);

    Ok(MaskedText {
        text: masked,
        spans,
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise masking fallibility")]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_text_untouched() {
        let masked = mask_literals("a and b").unwrap();
        assert_eq!(masked.as_str(), "a and b");
        assert!(masked.is_empty());
    }

    #[test]
    fn masks_quoted_literals() {
        let masked = mask_literals(r#"a == "x or y" and b == 'and'"#).unwrap();
        assert_eq!(masked.as_str(), "a == \u{1}0\u{1} and b == \u{1}1\u{1}");
        assert_eq!(masked.len(), 2);
    }

    #[test]
    fn masks_call_arguments_but_keeps_the_name() {
        let masked = mask_literals("contains(tags, 'a or b') and x").unwrap();
        assert_eq!(masked.as_str(), "contains\u{1}0\u{1} and x");
        assert_eq!(masked.restore("contains\u{1}0\u{1}"), "contains(tags, 'a or b')");
    }

    #[test]
    fn leaves_groups_after_connective_words_visible() {
        let masked = mask_literals("a and(b or c)").unwrap();
        assert_eq!(masked.as_str(), "a and(b or c)");
        assert!(masked.is_empty());
    }

    #[test]
    fn restores_only_the_requested_fragment() {
        let masked = mask_literals(r#"a == "1" or b == "2""#).unwrap();
        assert_eq!(masked.restore("b == \u{1}1\u{1}"), r#"b == "2""#);
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let masked = mask_literals("a").unwrap();
        assert_eq!(masked.restore("x \u{1}7\u{1}"), "x \u{1}7\u{1}");
    }

    #[test]
    fn rejects_reserved_delimiter() {
        let err = mask_literals("a \u{1} b").unwrap_err();
        assert!(err.to_string().contains("reserved mask delimiter"));
    }

    #[test]
    fn rejects_unterminated_literal() {
        let err = mask_literals("name == 'open").unwrap_err();
        assert!(err.to_string().contains("unterminated string literal"));
    }
}
