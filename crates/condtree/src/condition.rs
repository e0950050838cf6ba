//! Leaf conditions of an expression tree.

use std::fmt;

use condtree_patterns::mask_literals;

/// Comparator found between the two sides of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOperator {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl ComparisonOperator {
    /// Two-character comparators precede their one-character prefixes.
    const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Gte, Self::Lte, Self::Gt, Self::Lt];

    /// Return the comparator symbol.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Lt => "<",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition split into its left side, comparator and right side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    /// Text left of the comparator, trimmed.
    pub left: String,
    /// The comparator.
    pub operator: ComparisonOperator,
    /// Text right of the comparator, trimmed.
    pub right: String,
}

impl Comparison {
    /// Split `text` on its first comparator outside literals and call
    /// arguments. Returns `None` when either side would be empty.
    fn split(text: &str) -> Option<Self> {
        let masked = mask_literals(text).ok()?;
        let source = masked.as_str();
        let (position, operator) = source.char_indices().find_map(|(index, _)| {
            let rest = source.get(index..)?;
            ComparisonOperator::ALL
                .into_iter()
                .find(|op| rest.starts_with(op.as_str()))
                .map(|op| (index, op))
        })?;
        let left = source.get(..position)?.trim();
        let right = source.get(position + operator.as_str().len()..)?.trim();
        if left.is_empty() || right.is_empty() {
            return None;
        }
        Some(Self {
            left: masked.restore(left),
            operator,
            right: masked.restore(right),
        })
    }
}

/// An atomic boolean test such as `status == "open"`.
///
/// The text is kept verbatim; the comparison split is a best-effort view
/// for evaluators and is absent for bare flags such as `enabled`.
///
/// # Examples
///
/// ```
/// use condtree::{ComparisonOperator, Condition};
///
/// let condition = Condition::new("name != 'a == b'");
/// let comparison = condition.comparison().unwrap();
/// assert_eq!(comparison.left, "name");
/// assert_eq!(comparison.operator, ComparisonOperator::Ne);
/// assert_eq!(comparison.right, "'a == b'");
/// assert!(Condition::new("enabled").comparison().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    text: String,
    comparison: Option<Comparison>,
}

impl Condition {
    /// Create a condition from a trimmed, non-empty text fragment.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let comparison = Comparison::split(&text);
        Self { text, comparison }
    }

    /// The condition text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The comparison view, if a comparator was found.
    #[must_use]
    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
