//! Expression trees built from boolean condition text.
//!
//! An [`Expression`] is one nesting level: an ordered list of operands, each
//! a leaf [`Condition`] or a nested [`Expression`], joined by an ordered list
//! of [`Operator`]s. Parenthesised groups are parsed recursively, deepest
//! first, so every nested expression is complete before its parent is
//! assembled.

mod parser;
#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use condtree_patterns::Connective;

use crate::condition::Condition;
use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::operator::{Operator, has_mixed_operators};
use crate::plan::EvalPlan;

pub use parser::ExpressionParser;

/// An operand at one nesting level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// A leaf condition.
    Condition(Condition),
    /// A parenthesised sub-expression.
    Expression(Expression),
}

impl Operand {
    /// The leaf condition, if this operand is one.
    #[must_use]
    pub fn as_condition(&self) -> Option<&Condition> {
        match self {
            Self::Condition(condition) => Some(condition),
            Self::Expression(_) => None,
        }
    }

    /// The nested expression, if this operand is one.
    #[must_use]
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Self::Condition(_) => None,
            Self::Expression(expression) => Some(expression),
        }
    }

    /// Relative evaluation cost: one per leaf condition beneath.
    pub(crate) fn cost(&self) -> usize {
        match self {
            Self::Condition(_) => 1,
            Self::Expression(expression) => expression.operands.iter().map(Self::cost).sum(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Condition(condition) => fmt::Display::fmt(condition, f),
            Self::Expression(expression) => write!(f, "({expression})"),
        }
    }
}

/// Plans for both outcomes; they exist together or not at all.
#[derive(Debug, Clone, PartialEq, Eq)]
struct EvalPaths {
    true_paths: EvalPlan,
    false_paths: EvalPlan,
}

/// One nesting level of a parsed boolean expression.
///
/// Connectives have no relative precedence. When a level mixes kinds, for
/// example `a and b or c`, it is flagged through
/// [`has_mixed_operators`](Self::has_mixed_operators) and carries no
/// evaluation plan.
///
/// # Examples
///
/// ```
/// use condtree::{Connective, Expression};
///
/// let expr: Expression = "(a and b) or c".parse().unwrap();
/// assert_eq!(expr.operands().len(), 2);
/// assert_eq!(expr.connective(), Some(Connective::Or));
///
/// let nested = expr.operands()[0].as_expression().unwrap();
/// assert_eq!(nested.connective(), Some(Connective::And));
/// assert!(!expr.has_mixed_operators_deep());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    operands: Vec<Operand>,
    operators: Vec<Operator>,
    has_mixed_operators: bool,
    paths: Option<EvalPaths>,
}

impl Expression {
    /// Parse `text` with default [`ParseOptions`].
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] for unbalanced parentheses, open literals,
    /// empty groups, misplaced connectives, or nesting beyond the default
    /// depth limit.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parse `text` with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Expression::parse`].
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        ExpressionParser::new(*options)?.parse(text)
    }

    /// Assemble a level from validated operands and operators.
    fn assemble(operands: Vec<Operand>, operators: Vec<Operator>) -> Self {
        let mixed = has_mixed_operators(&operators);
        let paths = if mixed {
            log::debug!(
                "mixed connectives {}; evaluation plans disabled for this level",
                operators
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
            None
        } else {
            let connective = operators.first().map(Operator::kind);
            Some(EvalPaths {
                true_paths: EvalPlan::build(&operands, connective, true),
                false_paths: EvalPlan::build(&operands, connective, false),
            })
        };
        Self {
            operands,
            operators,
            has_mixed_operators: mixed,
            paths,
        }
    }

    /// Operands in source order.
    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// Operators in source order; always one fewer than the operands.
    #[must_use]
    pub fn operators(&self) -> &[Operator] {
        &self.operators
    }

    /// Whether this level's own operators mix two or more kinds.
    #[must_use]
    pub const fn has_mixed_operators(&self) -> bool {
        self.has_mixed_operators
    }

    /// The single connective kind of this level.
    ///
    /// `None` for a lone operand or when kinds are mixed.
    #[must_use]
    pub fn connective(&self) -> Option<Connective> {
        if self.has_mixed_operators {
            return None;
        }
        self.operators.first().map(Operator::kind)
    }

    /// The evaluation plan toward `outcome`, absent when this level mixes
    /// connectives.
    #[must_use]
    pub fn get_eval_paths(&self, outcome: bool) -> Option<&EvalPlan> {
        self.paths.as_ref().map(|paths| {
            if outcome {
                &paths.true_paths
            } else {
                &paths.false_paths
            }
        })
    }

    /// Whether this level or any nested expression mixes connectives.
    #[must_use]
    pub fn has_mixed_operators_deep(&self) -> bool {
        self.has_mixed_operators
            || self
                .operands
                .iter()
                .filter_map(Operand::as_expression)
                .any(Self::has_mixed_operators_deep)
    }

    /// Number of nested levels beneath this one; `0` without groups.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.operands
            .iter()
            .filter_map(Operand::as_expression)
            .map(|nested| nested.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut operands = self.operands.iter();
        if let Some(first) = operands.next() {
            fmt::Display::fmt(first, f)?;
        }
        for (operator, operand) in self.operators.iter().zip(operands) {
            write!(f, " {operator} {operand}")?;
        }
        Ok(())
    }
}
