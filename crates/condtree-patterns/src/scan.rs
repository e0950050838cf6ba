//! Byte-level scanning primitives shared by the parenthesis and mask modules.

use crate::connective::all_tokens;
use crate::errors::{PatternError, text_error};

const UNBALANCED: &str = "unbalanced parenthesis";
const UNTERMINATED: &str = "unterminated string literal";
const OFF_BOUNDARY: &str = "offset outside a character boundary";

pub(crate) fn is_quote(b: u8) -> bool {
    matches!(b, b'"' | b'\'')
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// A `(` glued to an identifier opens a call argument list, not a group.
///
/// Connective words are not function names: `a and(b)` opens a group.
pub(crate) fn is_call_paren(bytes: &[u8], open: usize) -> bool {
    let Some(head) = bytes.get(..open) else {
        return false;
    };
    let start = head
        .iter()
        .rposition(|&b| !is_identifier_byte(b))
        .map_or(0, |i| i + 1);
    let Some(name) = head.get(start..) else {
        return false;
    };
    !name.is_empty() && !all_tokens().any(|token| name.eq_ignore_ascii_case(token.as_bytes()))
}

/// Borrow `text[start..end]`, failing when an offset splits a character.
///
/// # Errors
/// Returns [`PatternError::Text`] when either offset is out of range or not on
/// a UTF-8 character boundary.
///
/// # Examples
/// ```
/// use condtree_patterns::slice_text;
/// assert_eq!(slice_text("a and b", 2, 5).ok(), Some("and"));
/// assert!(slice_text("é", 0, 1).is_err());
/// ```
pub fn slice_text(text: &str, start: usize, end: usize) -> Result<&str, PatternError> {
    text.get(start..end)
        .ok_or_else(|| text_error(OFF_BOUNDARY, start, None))
}

/// Lossy copy of `bytes[start..end]` for error context.
fn fragment(bytes: &[u8], start: usize, end: usize) -> Option<String> {
    bytes
        .get(start..end.min(bytes.len()))
        .map(|b| String::from_utf8_lossy(b).into_owned())
}

/// Return the index just past the literal opened by the quote at `start`.
pub(crate) fn skip_quoted(bytes: &[u8], start: usize) -> Result<usize, PatternError> {
    let unterminated = || text_error(UNTERMINATED, start, fragment(bytes, start, bytes.len()));
    let Some(&quote) = bytes.get(start) else {
        return Err(unterminated());
    };
    let mut index = start + 1;
    while let Some(&b) = bytes.get(index) {
        match b {
            b'\\' => index += 2,
            _ if b == quote => return Ok(index + 1),
            _ => index += 1,
        }
    }
    Err(unterminated())
}

/// Return the index of the `)` closing the `(` at `open`.
pub(crate) fn matching_close(bytes: &[u8], open: usize) -> Result<usize, PatternError> {
    let mut index = open + 1;
    let mut depth = 0usize;
    while let Some(&b) = bytes.get(index) {
        match b {
            b if is_quote(b) => {
                index = skip_quoted(bytes, index)?;
            }
            b'(' => {
                depth = depth.saturating_add(1);
                index += 1;
            }
            b')' => {
                if depth == 0 {
                    return Ok(index);
                }
                depth -= 1;
                index += 1;
            }
            _ => index += 1,
        }
    }
    Err(text_error(UNBALANCED, open, fragment(bytes, open, bytes.len())))
}

/// Error for a `)` at `close` with no opening partner.
pub(crate) fn unopened(bytes: &[u8], close: usize) -> PatternError {
    text_error(UNBALANCED, close, fragment(bytes, 0, close + 1))
}
