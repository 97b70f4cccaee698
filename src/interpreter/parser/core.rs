use tracing::trace;

use crate::{
    ast::{Operand, Operation, Operator},
    error::ParseError,
    interpreter::{
        parser::literal::literal_value,
        tokenizer::{Token, TokenKind, tokenize_at},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest bracket nesting accepted by the parser.
///
/// Each level of brackets costs one recursive tokenize/parse call and one
/// recursive evaluation call, so the limit keeps hostile input from
/// exhausting the stack.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parse state for one precedence level.
///
/// Operands fill the left slot first, then the right. A pending negation is
/// applied to the next operand and cleared.
#[derive(Default)]
struct OperationBuilder {
    left:           Operand,
    right:          Operand,
    operator:       Option<Operator>,
    negate_pending: bool,
}

impl OperationBuilder {
    const fn toggle_negation(&mut self) {
        self.negate_pending = !self.negate_pending;
    }

    fn set_operator(&mut self, operator: Operator, spelling: &str) -> ParseResult<()> {
        if self.operator.is_some() {
            return Err(ParseError::TooManyOperators);
        }
        if self.negate_pending {
            return Err(ParseError::NegatedOperator { operator: spelling.to_string() });
        }
        self.operator = Some(operator);
        Ok(())
    }

    fn push_operand(&mut self, operand: Operand) -> ParseResult<()> {
        let operand = if std::mem::take(&mut self.negate_pending) {
            Operation::negate(operand).into()
        } else {
            operand
        };

        if !self.left.is_present() {
            self.left = operand;
        } else if !self.right.is_present() {
            self.right = operand;
        } else {
            return Err(ParseError::TooManyOperands);
        }
        Ok(())
    }

    fn finish(self) -> ParseResult<Operation> {
        if self.negate_pending {
            return Err(ParseError::IncompleteOperation);
        }

        let Some(operator) = self.operator else {
            if self.right.is_present() {
                return Err(ParseError::TooManyOperands);
            }
            return match self.left {
                Operand::Empty => Err(ParseError::MissingOperator),
                Operand::Literal(value) => Ok(Operation::bare(value)),
                Operand::Nested(operation) => Ok(*operation),
            };
        };

        if !self.left.is_present() || !self.right.is_present() {
            return Err(ParseError::IncompleteOperation);
        }
        Operation::binary(operator, self.left, self.right).ok_or(ParseError::IncompleteOperation)
    }
}

/// Builds an operation tree from a token stream.
///
/// Grammar (one level, brackets recurse):
/// ```text
///     expression := operand (operator operand)?
///     operand    := negate* (literal | "(" expression ")")
/// ```
///
/// Only one binary operator is allowed per level; `1 & 2 & 3` must be written
/// as `(1 & 2) & 3`. Tokens after [`TokenKind::End`] are ignored.
///
/// # Errors
/// - `TooManyOperators` / `TooManyOperands` when a level holds more than one
///   operation.
/// - `NegatedOperator` when a negation precedes a binary operator.
/// - `MissingOperator` when there is nothing to evaluate.
/// - `IncompleteOperation` when an operator or negation lacks an operand.
/// - Any tokenizer or literal error from a bracketed group.
///
/// ## Example
/// ```
/// use bitexpr::interpreter::{parser::core::parse, tokenizer::tokenize};
///
/// let operation = parse(&tokenize("~5 & 3").unwrap()).unwrap();
/// assert_eq!(operation.to_string(), "~5 & 3");
/// assert_eq!(operation.result().unwrap(), 2);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Operation> {
    parse_at_depth(tokens, 0)
}

fn parse_at_depth(tokens: &[Token], depth: usize) -> ParseResult<Operation> {
    let mut builder = OperationBuilder::default();

    for token in tokens {
        match token.kind {
            TokenKind::End => break,
            TokenKind::Negate => builder.toggle_negation(),
            TokenKind::And => builder.set_operator(Operator::And, &token.text)?,
            TokenKind::Or => builder.set_operator(Operator::Or, &token.text)?,
            TokenKind::Xor => builder.set_operator(Operator::Xor, &token.text)?,
            TokenKind::Binary | TokenKind::Decimal | TokenKind::Hexadecimal => {
                builder.push_operand(Operand::Literal(literal_value(token)?))?;
            },
            TokenKind::Enclosed => {
                let nested = parse_enclosed(token, depth + 1)?;
                builder.push_operand(nested.into())?;
            },
        }
    }

    builder.finish()
}

/// Tokenizes and parses the text captured between a pair of brackets.
///
/// The group is tokenized from its own position so errors inside it point
/// into the whole expression.
fn parse_enclosed(group: &Token, depth: usize) -> ParseResult<Operation> {
    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });
    }
    trace!(depth, text = group.text.as_str(), position = group.position, "parsing bracketed group");
    parse_at_depth(&tokenize_at(&group.text, group.position)?, depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::tokenizer::tokenize;

    fn parse_str(source: &str) -> ParseResult<Operation> {
        parse(&tokenize(source)?)
    }

    #[test]
    fn single_literal_is_bare() {
        assert_eq!(parse_str("42").unwrap(), Operation::bare(42));
    }

    #[test]
    fn negated_literal_is_unwrapped() {
        assert_eq!(parse_str("~5").unwrap(), Operation::negate(5));
    }

    #[test]
    fn double_negation_cancels() {
        assert_eq!(parse_str("~!5").unwrap(), Operation::bare(5));
    }

    #[test]
    fn group_alone_is_unwrapped() {
        let expected = Operation::binary(Operator::Or, 1, 2).unwrap();
        assert_eq!(parse_str("((1 | 2))").unwrap(), expected);
    }

    #[test]
    fn negated_group_wraps_subtree() {
        let inner = Operation::binary(Operator::And, 6, 3).unwrap();
        let expected = Operation::binary(Operator::Xor, Operation::negate(inner), 1).unwrap();
        assert_eq!(parse_str("~(6 & 3) ^ 1").unwrap(), expected);
    }

    #[test]
    fn structural_errors() {
        assert_eq!(parse_str("5&3|2").unwrap_err(), ParseError::TooManyOperators);
        assert_eq!(parse_str("1 & 2 & 3").unwrap_err(), ParseError::TooManyOperators);
        assert_eq!(parse_str("1 2 3").unwrap_err(), ParseError::TooManyOperands);
        assert_eq!(parse_str("1 2").unwrap_err(), ParseError::TooManyOperands);
        assert_eq!(parse_str("5&").unwrap_err(), ParseError::IncompleteOperation);
        assert_eq!(parse_str("&3").unwrap_err(), ParseError::IncompleteOperation);
        assert_eq!(parse_str("5 ~").unwrap_err(), ParseError::IncompleteOperation);
        assert_eq!(parse_str("").unwrap_err(), ParseError::MissingOperator);
        assert_eq!(parse_str("()").unwrap_err(), ParseError::MissingOperator);
        assert_eq!(parse_str("~&").unwrap_err(),
                   ParseError::NegatedOperator { operator: "&".to_string() });
        assert_eq!(parse_str("1 not and 2").unwrap_err(),
                   ParseError::NegatedOperator { operator: "and".to_string() });
    }

    #[test]
    fn errors_inside_groups_propagate() {
        assert_eq!(parse_str("1 & (2 | 3 | 4)").unwrap_err(), ParseError::TooManyOperators);
        assert_eq!(parse_str("(1 $ 2)").unwrap_err(),
                   ParseError::IllegalCharacter { character: '$',
                                                  position:  3, });
    }

    #[test]
    fn group_errors_point_into_the_whole_expression() {
        assert_eq!(parse_str("1 & (2 $ 3)").unwrap_err(),
                   ParseError::IllegalCharacter { character: '$',
                                                  position:  7, });
        assert_eq!(parse_str("~(1 | (2 & #))").unwrap_err(),
                   ParseError::IllegalCharacter { character: '#',
                                                  position:  11, });
        assert_eq!(parse_str("(é)").unwrap_err(),
                   ParseError::IllegalCharacter { character: 'é',
                                                  position:  1, });
    }

    #[test]
    fn nesting_is_limited() {
        let depth = MAX_NESTING_DEPTH + 1;
        let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(parse_str(&source).unwrap_err(),
                   ParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH });

        let source = format!("{}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH));
        assert_eq!(parse_str(&source).unwrap(), Operation::bare(1));
    }
}
