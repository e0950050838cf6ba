//! Recursive chunking and operator/operand extraction.

use condtree_patterns::{
    ConnectiveMatcher, ParenSpan, find_top_level_parenthesis, mask_literals, slice_text,
    trim_parenthesis_pairs,
};

use super::{Expression, Operand};
use crate::condition::Condition;
use crate::config::ParseOptions;
use crate::error::ParseError;
use crate::operator::Operator;

/// A slice of normalised text: plain text still to be split, or a group
/// already parsed into a nested expression.
enum Chunk<'t> {
    Text(&'t str),
    Nested(Expression),
}

/// Operands and operators of one level, validated as they arrive.
///
/// Operands and operators must alternate, starting and ending with an
/// operand.
#[derive(Default)]
struct LevelBuilder {
    operands: Vec<Operand>,
    operators: Vec<Operator>,
}

impl LevelBuilder {
    fn push_operand(&mut self, operand: Operand) -> Result<(), ParseError> {
        if self.operands.len() > self.operators.len() {
            return Err(ParseError::MissingConnective {
                operand: self.operands.len(),
            });
        }
        self.operands.push(operand);
        Ok(())
    }

    fn push_operator(&mut self, operator: Operator) -> Result<(), ParseError> {
        if self.operands.len() == self.operators.len() {
            return Err(ParseError::DanglingConnective {
                connective: operator.kind(),
                operand: self.operands.len(),
            });
        }
        self.operators.push(operator);
        Ok(())
    }

    fn finish(self) -> Result<Expression, ParseError> {
        if let Some(last) = self.operators.last() {
            if self.operands.len() == self.operators.len() {
                return Err(ParseError::DanglingConnective {
                    connective: last.kind(),
                    operand: self.operands.len(),
                });
            }
        }
        if self.operands.is_empty() {
            return Err(ParseError::Empty);
        }
        Ok(Expression::assemble(self.operands, self.operators))
    }
}

/// Reusable parser holding compiled connective matchers.
///
/// # Examples
///
/// ```
/// use condtree::{ExpressionParser, ParseOptions};
///
/// let parser = ExpressionParser::new(ParseOptions::default()).unwrap();
/// let first = parser.parse("a and b").unwrap();
/// let second = parser.parse("a xor (b or c)").unwrap();
/// assert_eq!(first.operators().len(), 1);
/// assert_eq!(second.depth(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionParser {
    options: ParseOptions,
    matcher: ConnectiveMatcher,
}

impl ExpressionParser {
    /// Compile the matchers used for every parse.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Pattern`] if the connective matchers fail to
    /// compile.
    pub fn new(options: ParseOptions) -> Result<Self, ParseError> {
        Ok(Self {
            options,
            matcher: ConnectiveMatcher::new()?,
        })
    }

    /// The options this parser enforces.
    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse `text` into an expression tree.
    ///
    /// # Errors
    ///
    /// See [`Expression::parse`].
    pub fn parse(&self, text: &str) -> Result<Expression, ParseError> {
        self.parse_level(text, 0)
    }

    fn parse_level(&self, text: &str, depth: usize) -> Result<Expression, ParseError> {
        if depth > self.options.max_depth {
            return Err(ParseError::TooDeep {
                max_depth: self.options.max_depth,
            });
        }
        let normalized = trim_parenthesis_pairs(text)?;
        let groups = find_top_level_parenthesis(normalized)?;

        let mut level = LevelBuilder::default();
        for chunk in self.chunks(normalized, &groups, depth)? {
            match chunk {
                Chunk::Nested(nested) => level.push_operand(Operand::Expression(nested))?,
                Chunk::Text(text) => self.extract(text, &mut level)?,
            }
        }
        level.finish()
    }

    /// Partition `text` into plain spans and recursively parsed groups.
    fn chunks<'t>(
        &self,
        text: &'t str,
        groups: &[ParenSpan],
        depth: usize,
    ) -> Result<Vec<Chunk<'t>>, ParseError> {
        if groups.is_empty() {
            return Ok(vec![Chunk::Text(text)]);
        }

        let mut chunks = Vec::with_capacity(groups.len().saturating_mul(2) + 1);
        let mut last = 0;
        for span in groups {
            chunks.push(Chunk::Text(slice_text(text, last, span.start)?));
            let group = slice_text(text, span.start, span.end + 1)?;
            log::trace!("parsing group {group:?} at depth {}", depth + 1);
            chunks.push(Chunk::Nested(self.parse_level(group, depth + 1)?));
            last = span.end + 1;
        }
        if last < text.len() {
            chunks.push(Chunk::Text(slice_text(text, last, text.len())?));
        }
        Ok(chunks)
    }

    /// Split a plain chunk into operators and leaf conditions.
    fn extract(&self, chunk: &str, level: &mut LevelBuilder) -> Result<(), ParseError> {
        let masked = mask_literals(chunk)?;
        for segment in self.matcher.split_segments(masked.as_str())? {
            let (connective, rest) = self.matcher.strip_leading(segment)?;
            if let Some(kind) = connective {
                level.push_operator(Operator::new(kind))?;
            }
            let rest = rest.trim();
            if !rest.is_empty() {
                let text = masked.restore(rest);
                log::trace!("condition {text:?}");
                level.push_operand(Operand::Condition(Condition::new(text)))?;
            }
        }
        Ok(())
    }
}
