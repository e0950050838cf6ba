//! Short-circuit evaluation plans for uniform-connective expressions.
//!
//! A plan fixes the order in which operands are evaluated and how a target
//! outcome is reached, so an evaluator can stop as soon as the result is
//! known. Plans are only built for levels whose operators share one kind.

use condtree_patterns::Connective;

use crate::expression::Operand;

/// How the operand results of one level reach the plan's outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reach {
    /// A single operand decides the outcome on its own.
    Direct,
    /// Reached as soon as any operand yields the value; otherwise missed.
    AnyOperand(bool),
    /// Reached only if every operand yields the value; missed at the first
    /// operand that does not.
    EveryOperand(bool),
    /// Every operand is evaluated; reached when the parity of true operands
    /// is odd (`true`) or even (`false`).
    Parity(bool),
}

impl Reach {
    fn for_connective(connective: Option<Connective>, outcome: bool) -> Self {
        match connective {
            None => Self::Direct,
            Some(Connective::And) if outcome => Self::EveryOperand(true),
            Some(Connective::And) => Self::AnyOperand(false),
            Some(Connective::Or) if outcome => Self::AnyOperand(true),
            Some(Connective::Or) => Self::EveryOperand(false),
            Some(Connective::Xor) => Self::Parity(outcome),
        }
    }
}

/// Precomputed evaluation order toward one outcome.
///
/// # Examples
///
/// ```
/// use condtree::{Expression, Reach};
///
/// let expr = Expression::parse("(a or b) and c").unwrap();
/// let plan = expr.get_eval_paths(false).unwrap();
/// assert_eq!(plan.reach(), Reach::AnyOperand(false));
/// // The leaf condition is cheaper than the nested group, so it runs first.
/// assert_eq!(plan.order(), &[1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvalPlan {
    outcome: bool,
    reach: Reach,
    order: Vec<usize>,
}

impl EvalPlan {
    /// Build the plan for `outcome` over `operands` joined by `connective`.
    ///
    /// `connective` is `None` for a level with a single operand.
    #[must_use]
    pub fn build(operands: &[Operand], connective: Option<Connective>, outcome: bool) -> Self {
        let mut order: Vec<usize> = (0..operands.len()).collect();
        order.sort_by_key(|&index| operands.get(index).map_or(0, Operand::cost));
        Self {
            outcome,
            reach: Reach::for_connective(connective, outcome),
            order,
        }
    }

    /// The outcome this plan resolves toward.
    #[must_use]
    pub const fn outcome(&self) -> bool {
        self.outcome
    }

    /// How the outcome is reached.
    #[must_use]
    pub const fn reach(&self) -> Reach {
        self.reach
    }

    /// Operand indices in evaluation order.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Drive evaluation, calling `evaluate` with operand indices in plan
    /// order and stopping once the answer is known.
    ///
    /// Returns whether the plan's outcome was reached.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `evaluate`.
    pub fn run<F, E>(&self, mut evaluate: F) -> Result<bool, E>
    where
        F: FnMut(usize) -> Result<bool, E>,
    {
        match self.reach {
            Reach::Direct => {
                let mut reached = false;
                for &index in &self.order {
                    reached = evaluate(index)? == self.outcome;
                }
                Ok(reached)
            }
            Reach::AnyOperand(value) => {
                for &index in &self.order {
                    if evaluate(index)? == value {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
            Reach::EveryOperand(value) => {
                for &index in &self.order {
                    if evaluate(index)? != value {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            Reach::Parity(odd) => {
                let mut parity = false;
                for &index in &self.order {
                    parity ^= evaluate(index)?;
                }
                Ok(parity == odd)
            }
        }
    }
}
