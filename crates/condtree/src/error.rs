//! Error types for parsing, evaluating and configuring expressions.

use condtree_patterns::{Connective, PatternError};
use thiserror::Error;

/// Errors raised while constructing an [`Expression`](crate::Expression).
///
/// Mixed connectives are not an error; they are reported through
/// [`Expression::has_mixed_operators`](crate::Expression::has_mixed_operators).
///
/// # Examples
///
/// ```
/// use condtree::{Expression, ParseError};
///
/// let err = Expression::parse("a and").unwrap_err();
/// assert!(matches!(err, ParseError::DanglingConnective { .. }));
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text could not be scanned: unbalanced parentheses or an open
    /// quoted literal.
    #[error(transparent)]
    Pattern(#[from] PatternError),
    /// The text, or a parenthesised group within it, holds no condition.
    #[error("expression contains no condition")]
    Empty,
    /// Parenthesis nesting exceeds the configured limit.
    #[error("expression nesting exceeds the maximum depth of {max_depth}")]
    TooDeep {
        /// Configured maximum depth.
        max_depth: usize,
    },
    /// Two operands follow each other with no connective between them.
    #[error("missing connective before operand {operand}")]
    MissingConnective {
        /// Zero-based index of the operand lacking a connective.
        operand: usize,
    },
    /// A connective lacks an operand on one side.
    #[error("connective {connective} has no operand at position {operand}")]
    DanglingConnective {
        /// Kind of the dangling connective.
        connective: Connective,
        /// Zero-based index of the missing operand.
        operand: usize,
    },
}

/// Errors raised while evaluating an [`Expression`](crate::Expression).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EvalError {
    /// A level mixes connectives, so no evaluation plan exists.
    #[error("expression `{expression}` mixes connectives and has no evaluation plan")]
    MixedOperators {
        /// Rendered text of the ambiguous level.
        expression: String,
    },
    /// The condition evaluator reported a failure.
    #[error("failed to evaluate condition `{condition}`: {message}")]
    Condition {
        /// Text of the failing condition.
        condition: String,
        /// Evaluator-provided description.
        message: String,
    },
    /// A plan referred to an operand that does not exist.
    #[error("evaluation plan refers to missing operand {index}")]
    MissingOperand {
        /// Zero-based operand index.
        index: usize,
    },
}

/// Errors raised while loading [`ParseOptions`](crate::ParseOptions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
