//! Compiled regular expressions locating connective tokens in masked text.

use regex::Regex;

use crate::connective::{Connective, all_tokens};
use crate::errors::PatternError;
use crate::scan::slice_text;

/// Build the regex alternative for a single token.
///
/// Word tokens must stand alone so `band` or `order` never match; symbolic
/// tokens match verbatim.
fn token_pattern(token: &str) -> String {
    let escaped = regex::escape(token);
    if token.chars().all(|c| c.is_ascii_alphanumeric()) {
        format!(r"\b{escaped}\b")
    } else {
        escaped
    }
}

fn alternation<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    tokens
        .into_iter()
        .map(token_pattern)
        .collect::<Vec<_>>()
        .join("|")
}

/// Connective token matchers compiled from the token lists.
///
/// # Examples
/// ```
/// use condtree_patterns::{Connective, ConnectiveMatcher};
/// let matcher = ConnectiveMatcher::new()
///     .unwrap_or_else(|err| panic!("matchers should compile: {err}"));
/// let segments = matcher.split_segments("a AND b").ok();
/// assert_eq!(segments, Some(vec!["a ", "AND b"]));
/// assert_eq!(matcher.strip_leading("AND b").ok(), Some((Some(Connective::And), " b")));
/// ```
#[derive(Debug, Clone)]
pub struct ConnectiveMatcher {
    boundary: Regex,
    leading: [(Connective, Regex); 3],
}

impl ConnectiveMatcher {
    /// Compile the boundary and leading-token matchers.
    ///
    /// # Errors
    /// Returns [`PatternError::Regex`] if a generated pattern fails to compile.
    pub fn new() -> Result<Self, PatternError> {
        let boundary = Regex::new(&format!("(?i){}", alternation(all_tokens())))?;
        let [and, or, xor] = Connective::ALL;
        let leading = [
            (and, Self::leading_regex(and)?),
            (or, Self::leading_regex(or)?),
            (xor, Self::leading_regex(xor)?),
        ];
        Ok(Self { boundary, leading })
    }

    fn leading_regex(kind: Connective) -> Result<Regex, PatternError> {
        let source = format!("(?i)^(?:{})", alternation(kind.tokens().iter().copied()));
        Ok(Regex::new(&source)?)
    }

    /// Split `text` immediately before every connective token.
    ///
    /// Segments are returned in order and cover the whole input; the first
    /// segment is empty when the text starts with a connective.
    ///
    /// # Errors
    /// Returns [`PatternError::Text`] if a match offset does not fall on a
    /// character boundary of `text`.
    pub fn split_segments<'t>(&self, text: &'t str) -> Result<Vec<&'t str>, PatternError> {
        let mut segments = Vec::new();
        let mut last = 0;
        for found in self.boundary.find_iter(text) {
            segments.push(slice_text(text, last, found.start())?);
            last = found.start();
        }
        segments.push(slice_text(text, last, text.len())?);
        Ok(segments)
    }

    /// Remove a leading connective token from `segment`.
    ///
    /// `AND` is tested first, then `OR`, then `XOR`. The remainder is
    /// returned untrimmed.
    ///
    /// # Errors
    /// Returns [`PatternError::Text`] if the token end does not fall on a
    /// character boundary of `segment`.
    pub fn strip_leading<'t>(
        &self,
        segment: &'t str,
    ) -> Result<(Option<Connective>, &'t str), PatternError> {
        for (kind, regex) in &self.leading {
            if let Some(found) = regex.find(segment) {
                let rest = slice_text(segment, found.end(), segment.len())?;
                return Ok((Some(*kind), rest));
            }
        }
        Ok((None, segment))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests exercise matcher compilation")]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn matcher() -> ConnectiveMatcher {
        ConnectiveMatcher::new().unwrap()
    }

    #[rstest]
    fn splits_before_each_connective(matcher: ConnectiveMatcher) {
        assert_eq!(
            matcher.split_segments("a and b or c").unwrap(),
            vec!["a ", "and b ", "or c"]
        );
    }

    #[rstest]
    fn splits_symbolic_tokens_without_whitespace(matcher: ConnectiveMatcher) {
        assert_eq!(
            matcher.split_segments("a&&b||c").unwrap(),
            vec!["a", "&&b", "||c"]
        );
    }

    #[rstest]
    fn leading_connective_yields_empty_first_segment(matcher: ConnectiveMatcher) {
        assert_eq!(matcher.split_segments(" or c").unwrap(), vec![" ", "or c"]);
        assert_eq!(matcher.split_segments("xor c").unwrap(), vec!["", "xor c"]);
    }

    #[rstest]
    #[case("order == 1")]
    #[case("brand and_more")]
    #[case("colour != 'x'")]
    fn ignores_tokens_embedded_in_words(matcher: ConnectiveMatcher, #[case] text: &str) {
        assert_eq!(matcher.split_segments(text).unwrap(), vec![text]);
    }

    #[rstest]
    #[case("AND b", Some(Connective::And), " b")]
    #[case("&& b", Some(Connective::And), " b")]
    #[case("Or b", Some(Connective::Or), " b")]
    #[case("|| b", Some(Connective::Or), " b")]
    #[case("XOR b", Some(Connective::Xor), " b")]
    #[case("and(b)", Some(Connective::And), "(b)")]
    #[case("android", None, "android")]
    #[case("b", None, "b")]
    fn strips_leading_connective(
        matcher: ConnectiveMatcher,
        #[case] segment: &str,
        #[case] kind: Option<Connective>,
        #[case] rest: &str,
    ) {
        assert_eq!(matcher.strip_leading(segment).unwrap(), (kind, rest));
    }
}
