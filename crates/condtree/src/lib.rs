//! Boolean condition expressions parsed into operand/operator trees.
//!
//! Text such as `(status == "open" and age > 3) or owner == "me"` is split
//! into leaf [`Condition`]s and nested [`Expression`]s joined by `AND`, `OR`
//! and `XOR` [`Operator`]s. Connectives have no relative precedence: a level
//! that mixes kinds is flagged rather than resolved, and only uniform levels
//! receive short-circuit [`EvalPlan`]s.
//!
//! Parsing recurses once per parenthesis nesting level; the depth is bounded
//! by [`ParseOptions::max_depth`].
//!
//! # Examples
//!
//! ```
//! use condtree::Expression;
//!
//! let uniform = Expression::parse("a and b and c").unwrap();
//! assert!(uniform.get_eval_paths(true).is_some());
//!
//! let mixed = Expression::parse("a and b or c").unwrap();
//! assert!(mixed.has_mixed_operators());
//! assert!(mixed.get_eval_paths(false).is_none());
//! ```

mod condition;
mod config;
#[cfg(feature = "diagnostics")]
mod diagnostics;
mod error;
mod eval;
mod expression;
mod operator;
mod plan;

pub use condition::{Comparison, ComparisonOperator, Condition};
pub use condtree_patterns::Connective;
pub use config::{DEFAULT_MAX_DEPTH, MAX_DEPTH_ENV, ParseOptions};
pub use error::{ConfigError, EvalError, ParseError};
pub use eval::ConditionEvaluator;
pub use expression::{Expression, ExpressionParser, Operand};
pub use operator::{Operator, has_mixed_operators};
pub use plan::{EvalPlan, Reach};
