use crate::{
    ast::{Operand, Operation, Operator},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the malformed node.
pub type EvalResult<T> = Result<T, RuntimeError>;

impl Operand {
    /// Resolves this slot to a value: literals directly, sub-trees by
    /// evaluating them. Returns `None` for an empty slot.
    pub fn value(&self) -> EvalResult<Option<i64>> {
        match self {
            Self::Empty => Ok(None),
            Self::Literal(value) => Ok(Some(*value)),
            Self::Nested(operation) => operation.result().map(Some),
        }
    }
}

impl Operation {
    /// Computes the value of this operation.
    ///
    /// - `None` returns the left operand unchanged.
    /// - `Negate` returns the one's complement of the left operand.
    /// - `And`, `Or` and `Xor` combine both operands bitwise.
    ///
    /// # Errors
    /// - `IncompleteOperation` if the left operand, or the right operand of a
    ///   binary operator, is missing.
    /// - `InvalidOperator` if `None` or `Negate` is given a right operand.
    ///
    /// ## Example
    /// ```
    /// use bitexpr::ast::{Operand, Operation, Operator};
    ///
    /// let op = Operation::binary(Operator::Xor, 5, 1).unwrap();
    /// assert_eq!(op.result().unwrap(), 4);
    ///
    /// let broken = Operation { operator: Operator::Negate,
    ///                          left:     Operand::Literal(1),
    ///                          right:    Operand::Literal(2), };
    /// assert!(broken.result().is_err());
    /// ```
    pub fn result(&self) -> EvalResult<i64> {
        let operator = self.operator;
        let left = self.left
                       .value()?
                       .ok_or(RuntimeError::IncompleteOperation { operator })?;

        match operator {
            Operator::None | Operator::Negate => {
                if self.right.is_present() {
                    return Err(RuntimeError::InvalidOperator { operator,
                                                               details:
                                                                   "a unary operation cannot have a right operand".to_string() });
                }
                Ok(if operator == Operator::Negate { !left } else { left })
            },
            Operator::And | Operator::Or | Operator::Xor => {
                let right = self.right
                                .value()?
                                .ok_or(RuntimeError::IncompleteOperation { operator })?;
                Ok(apply_binary(operator, left, right))
            },
        }
    }
}

const fn apply_binary(operator: Operator, left: i64, right: i64) -> i64 {
    match operator {
        Operator::And => left & right,
        Operator::Or => left | right,
        Operator::Xor => left ^ right,
        Operator::None | Operator::Negate => left,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_operand_passes_through() {
        assert_eq!(Operation::bare(-9).result(), Ok(-9));
    }

    #[test]
    fn negation_is_ones_complement() {
        assert_eq!(Operation::negate(0).result(), Ok(-1));
        assert_eq!(Operation::negate(Operation::negate(5)).result(), Ok(5));
    }

    #[test]
    fn binary_operators() {
        assert_eq!(Operation::binary(Operator::And, 5, 3).unwrap().result(), Ok(1));
        assert_eq!(Operation::binary(Operator::Or, 5, 2).unwrap().result(), Ok(7));
        assert_eq!(Operation::binary(Operator::Xor, 5, 1).unwrap().result(), Ok(4));
    }

    #[test]
    fn nested_operands_are_evaluated() {
        let inner = Operation::binary(Operator::And, 5, 3).unwrap();
        let outer = Operation::binary(Operator::Or, inner, 8).unwrap();
        assert_eq!(outer.result(), Ok(9));
    }

    #[test]
    fn malformed_nodes_are_rejected() {
        let missing_right = Operation { operator: Operator::And,
                                        left:     Operand::Literal(1),
                                        right:    Operand::Empty, };
        assert_eq!(missing_right.result(),
                   Err(RuntimeError::IncompleteOperation { operator: Operator::And }));

        let missing_left = Operation { operator: Operator::None,
                                       left:     Operand::Empty,
                                       right:    Operand::Empty, };
        assert_eq!(missing_left.result(),
                   Err(RuntimeError::IncompleteOperation { operator: Operator::None }));

        let extra_right = Operation { operator: Operator::None,
                                      left:     Operand::Literal(1),
                                      right:    Operand::Literal(2), };
        assert!(matches!(extra_right.result(),
                         Err(RuntimeError::InvalidOperator { operator: Operator::None, .. })));
    }

    #[test]
    fn errors_in_subtrees_propagate() {
        let broken = Operation { operator: Operator::Xor,
                                 left:     Operand::Literal(1),
                                 right:    Operand::Empty, };
        let outer = Operation::negate(broken);
        assert_eq!(outer.result(),
                   Err(RuntimeError::IncompleteOperation { operator: Operator::Xor }));
    }
}
