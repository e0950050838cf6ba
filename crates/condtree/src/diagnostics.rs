//! Diagnostics-only JSON export of expression trees.
//!
//! The serialised view mirrors the tree without exposing its internals, so
//! external tooling can inspect how a rule was split and which levels lack
//! an evaluation plan.

use serde::Serialize;

use crate::expression::{Expression, Operand};
use crate::plan::{EvalPlan, Reach};

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OperandView<'a> {
    Condition {
        text: &'a str,
    },
    Expression {
        #[serde(flatten)]
        expression: ExpressionView<'a>,
    },
}

#[derive(Serialize)]
struct PlanView<'a> {
    reach: String,
    order: &'a [usize],
}

#[derive(Serialize)]
struct ExpressionView<'a> {
    operands: Vec<OperandView<'a>>,
    operators: Vec<&'static str>,
    mixed_operators: bool,
    true_paths: Option<PlanView<'a>>,
    false_paths: Option<PlanView<'a>>,
}

fn reach_label(reach: Reach) -> String {
    match reach {
        Reach::Direct => "direct".to_string(),
        Reach::AnyOperand(value) => format!("any_operand({value})"),
        Reach::EveryOperand(value) => format!("every_operand({value})"),
        Reach::Parity(odd) => format!("parity({})", if odd { "odd" } else { "even" }),
    }
}

impl<'a> PlanView<'a> {
    fn new(plan: &'a EvalPlan) -> Self {
        Self {
            reach: reach_label(plan.reach()),
            order: plan.order(),
        }
    }
}

impl<'a> ExpressionView<'a> {
    fn new(expression: &'a Expression) -> Self {
        Self {
            operands: expression
                .operands()
                .iter()
                .map(|operand| match operand {
                    Operand::Condition(condition) => OperandView::Condition {
                        text: condition.text(),
                    },
                    Operand::Expression(nested) => OperandView::Expression {
                        expression: Self::new(nested),
                    },
                })
                .collect(),
            operators: expression
                .operators()
                .iter()
                .map(|operator| operator.kind().as_str())
                .collect(),
            mixed_operators: expression.has_mixed_operators(),
            true_paths: expression.get_eval_paths(true).map(PlanView::new),
            false_paths: expression.get_eval_paths(false).map(PlanView::new),
        }
    }
}

impl Expression {
    /// Render the tree as pretty-printed JSON for external tooling.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if serialisation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use condtree::Expression;
    ///
    /// let json = Expression::parse("a and b").unwrap().to_json().unwrap();
    /// assert!(json.contains("\"mixed_operators\": false"));
    /// ```
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ExpressionView::new(self))
    }
}
