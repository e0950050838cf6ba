//! Connective kinds and the token spellings that introduce them.
//!
//! This module provides the canonical [`Connective`] enum shared by the
//! scanner and the expression parser, so every layer agrees on which words
//! join two conditions.

use std::fmt;

/// Token spellings recognised as an `AND` connective.
pub const TOKENS_AND: &[&str] = &["and", "&&"];

/// Token spellings recognised as an `OR` connective.
pub const TOKENS_OR: &[&str] = &["or", "||"];

/// Token spellings recognised as an `XOR` connective.
pub const TOKENS_XOR: &[&str] = &["xor"];

/// Kind of boolean connective joining two adjacent operands.
///
/// No precedence is defined between the kinds; a sequence mixing them is
/// reported as ambiguous rather than resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    /// Both operands must hold.
    And,
    /// At least one operand must hold.
    Or,
    /// Exactly one of the two operands must hold.
    Xor,
}

impl Connective {
    /// Every kind, in the priority order used when matching leading tokens.
    pub const ALL: [Self; 3] = [Self::And, Self::Or, Self::Xor];

    /// Return the canonical spelling of the connective.
    ///
    /// # Examples
    ///
    /// ```
    /// use condtree_patterns::Connective;
    ///
    /// assert_eq!(Connective::And.as_str(), "AND");
    /// assert_eq!(Connective::Xor.as_str(), "XOR");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        }
    }

    /// Return the token spellings that introduce this connective.
    #[must_use]
    pub const fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::And => TOKENS_AND,
            Self::Or => TOKENS_OR,
            Self::Xor => TOKENS_XOR,
        }
    }

    /// Combine two boolean values with this connective.
    ///
    /// # Examples
    ///
    /// ```
    /// use condtree_patterns::Connective;
    ///
    /// assert!(!Connective::And.apply(true, false));
    /// assert!(Connective::Or.apply(true, false));
    /// assert!(!Connective::Xor.apply(true, true));
    /// ```
    #[must_use]
    pub const fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            Self::And => lhs && rhs,
            Self::Or => lhs || rhs,
            Self::Xor => lhs ^ rhs,
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Iterate over the union of all connective tokens, `AND` first.
#[must_use]
pub fn all_tokens() -> impl Iterator<Item = &'static str> {
    Connective::ALL
        .into_iter()
        .flat_map(|kind| kind.tokens().iter().copied())
}

/// Report whether a sequence contains two or more distinct connective kinds.
///
/// # Examples
///
/// ```
/// use condtree_patterns::{Connective, has_mixed_connectives};
///
/// assert!(!has_mixed_connectives([Connective::And, Connective::And]));
/// assert!(has_mixed_connectives([Connective::And, Connective::Or]));
/// assert!(!has_mixed_connectives([Connective::Or]));
/// ```
#[must_use]
pub fn has_mixed_connectives<I>(kinds: I) -> bool
where
    I: IntoIterator<Item = Connective>,
{
    let mut kinds = kinds.into_iter();
    let Some(first) = kinds.next() else {
        return false;
    };
    kinds.any(|kind| kind != first)
}
