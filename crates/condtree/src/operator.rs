//! Connective operators joining adjacent operands.

use std::fmt;

use condtree_patterns::{Connective, has_mixed_connectives};

/// A connective joining two adjacent operands at one nesting level.
///
/// # Examples
///
/// ```
/// use condtree::{Connective, Operator};
///
/// let op = Operator::new(Connective::Or);
/// assert_eq!(op.kind(), Connective::Or);
/// assert_eq!(op.to_string(), "OR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operator {
    kind: Connective,
}

impl Operator {
    /// Create an operator of the given kind.
    #[must_use]
    pub const fn new(kind: Connective) -> Self {
        Self { kind }
    }

    /// The connective kind.
    #[must_use]
    pub const fn kind(&self) -> Connective {
        self.kind
    }

    /// Combine two operand values with this operator.
    #[must_use]
    pub const fn apply(&self, lhs: bool, rhs: bool) -> bool {
        self.kind.apply(lhs, rhs)
    }
}

impl From<Connective> for Operator {
    fn from(kind: Connective) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

/// Report whether `operators` holds two or more distinct kinds.
#[must_use]
pub fn has_mixed_operators(operators: &[Operator]) -> bool {
    has_mixed_connectives(operators.iter().map(Operator::kind))
}
