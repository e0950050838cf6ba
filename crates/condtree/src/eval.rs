//! Evaluating expression trees against a condition evaluator.

use crate::condition::Condition;
use crate::error::EvalError;
use crate::expression::{Expression, Operand};

/// Resolves leaf conditions to boolean values.
///
/// Closures of the matching shape implement the trait directly.
///
/// # Examples
///
/// ```
/// use condtree::{Condition, ConditionEvaluator, EvalError};
///
/// let evaluator = |condition: &Condition| -> Result<bool, EvalError> {
///     Ok(condition.text() == "ready")
/// };
/// assert_eq!(evaluator.evaluate(&Condition::new("ready")), Ok(true));
/// ```
pub trait ConditionEvaluator {
    /// Evaluate a single condition.
    ///
    /// # Errors
    ///
    /// Implementations return [`EvalError::Condition`] when a condition
    /// cannot be decided.
    fn evaluate(&self, condition: &Condition) -> Result<bool, EvalError>;
}

impl<F> ConditionEvaluator for F
where
    F: Fn(&Condition) -> Result<bool, EvalError>,
{
    fn evaluate(&self, condition: &Condition) -> Result<bool, EvalError> {
        self(condition)
    }
}

impl Expression {
    /// Evaluate with the precomputed short-circuit plans.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::MixedOperators`] when this level or any nested
    /// level mixes connectives, and forwards evaluator errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use condtree::{Condition, EvalError, Expression};
    ///
    /// let expr = Expression::parse("a or (b and c)").unwrap();
    /// let truthy = |c: &Condition| -> Result<bool, EvalError> { Ok(c.text() != "a") };
    /// assert_eq!(expr.evaluate(&truthy), Ok(true));
    ///
    /// let mixed = Expression::parse("a and b or c").unwrap();
    /// assert!(mixed.evaluate(&truthy).is_err());
    /// ```
    pub fn evaluate<E>(&self, evaluator: &E) -> Result<bool, EvalError>
    where
        E: ConditionEvaluator + ?Sized,
    {
        if let Some(level) = self.first_mixed_level() {
            return Err(EvalError::MixedOperators {
                expression: level.to_string(),
            });
        }
        self.evaluate_planned(evaluator)
    }

    fn first_mixed_level(&self) -> Option<&Self> {
        if self.has_mixed_operators() {
            return Some(self);
        }
        self.operands()
            .iter()
            .filter_map(Operand::as_expression)
            .find_map(Self::first_mixed_level)
    }

    fn evaluate_planned<E>(&self, evaluator: &E) -> Result<bool, EvalError>
    where
        E: ConditionEvaluator + ?Sized,
    {
        let plan = self
            .get_eval_paths(true)
            .ok_or_else(|| EvalError::MixedOperators {
                expression: self.to_string(),
            })?;
        plan.run(|index| match self.operands().get(index) {
            Some(Operand::Condition(condition)) => evaluator.evaluate(condition),
            Some(Operand::Expression(nested)) => nested.evaluate_planned(evaluator),
            None => Err(EvalError::MissingOperand { index }),
        })
    }

    /// Evaluate every operand and fold the operators strictly left to right.
    ///
    /// This is the fallback for levels that mix connectives: `a and b or c`
    /// is read as `(a and b) or c`. No operand is skipped.
    ///
    /// # Errors
    ///
    /// Forwards evaluator errors.
    pub fn evaluate_left_to_right<E>(&self, evaluator: &E) -> Result<bool, EvalError>
    where
        E: ConditionEvaluator + ?Sized,
    {
        let eval_operand = |operand: &Operand| match operand {
            Operand::Condition(condition) => evaluator.evaluate(condition),
            Operand::Expression(nested) => nested.evaluate_left_to_right(evaluator),
        };

        let mut operands = self.operands().iter();
        let first = operands
            .next()
            .ok_or(EvalError::MissingOperand { index: 0 })?;
        let mut value = eval_operand(first)?;
        for (operator, operand) in self.operators().iter().zip(operands) {
            value = operator.apply(value, eval_operand(operand)?);
        }
        Ok(value)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "tests assert on returned errors")]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    fn parse(text: &str) -> Expression {
        Expression::parse(text).unwrap_or_else(|err| panic!("{text:?} should parse: {err}"))
    }

    fn truth<'a>(trues: &'a [&'a str]) -> impl Fn(&Condition) -> Result<bool, EvalError> + 'a {
        move |condition| Ok(trues.iter().any(|t| *t == condition.text()))
    }

    #[rstest]
    #[case("a and b", &["a", "b"], true)]
    #[case("a and b", &["a"], false)]
    #[case("a or b or c", &["c"], true)]
    #[case("a or b", &[], false)]
    #[case("a xor b xor c", &["a", "b", "c"], true)]
    #[case("a xor b", &["a", "b"], false)]
    #[case("(a or b) and (c xor d)", &["b", "d"], true)]
    #[case("(a or b) and (c xor d)", &["b", "c", "d"], false)]
    #[case("x", &["x"], true)]
    fn evaluates_with_plans(#[case] text: &str, #[case] trues: &[&str], #[case] expected: bool) {
        assert_eq!(parse(text).evaluate(&truth(trues)), Ok(expected));
    }

    #[test]
    fn short_circuits_on_decisive_operand() {
        let visited = RefCell::new(Vec::new());
        let evaluator = |condition: &Condition| -> Result<bool, EvalError> {
            visited.borrow_mut().push(condition.text().to_string());
            Ok(condition.text() == "a")
        };
        assert_eq!(parse("a or b or c").evaluate(&evaluator), Ok(true));
        assert_eq!(visited.into_inner(), vec!["a".to_string()]);
    }

    #[test]
    fn evaluates_cheap_leaves_before_groups() {
        let visited = RefCell::new(Vec::new());
        let evaluator = |condition: &Condition| -> Result<bool, EvalError> {
            visited.borrow_mut().push(condition.text().to_string());
            Ok(false)
        };
        assert_eq!(parse("(a or b) and c").evaluate(&evaluator), Ok(false));
        assert_eq!(visited.into_inner(), vec!["c".to_string()]);
    }

    #[test]
    fn refuses_mixed_levels_at_any_depth() {
        let err = parse("a and (b or c xor d)")
            .evaluate(&truth(&[]))
            .unwrap_err();
        assert_eq!(
            err,
            EvalError::MixedOperators {
                expression: "b OR c XOR d".into(),
            }
        );
    }

    #[rstest]
    #[case("a and b or c", &["c"], true)]
    #[case("a or b and c", &["a"], false)]
    #[case("a xor b and c", &["a", "c"], true)]
    #[case("(a or b) and c or d", &["d"], true)]
    fn folds_left_to_right(#[case] text: &str, #[case] trues: &[&str], #[case] expected: bool) {
        assert_eq!(parse(text).evaluate_left_to_right(&truth(trues)), Ok(expected));
    }

    #[test]
    fn forwards_evaluator_errors() {
        let failing = |condition: &Condition| -> Result<bool, EvalError> {
            Err(EvalError::Condition {
                condition: condition.text().to_string(),
                message: "unknown field".into(),
            })
        };
        let err = parse("missing == 1").evaluate(&failing).unwrap_err();
        assert_eq!(
            err.to_string(),
            "failed to evaluate condition `missing == 1`: unknown field"
        );
    }
}
