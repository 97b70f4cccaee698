use std::fmt;

/// The operator held by an [`Operation`].
///
/// `None` marks a bare operand that is passed through unchanged, `Negate` is
/// the unary one's complement and the rest are the binary bitwise operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// No operator; the left operand is the whole value.
    None,
    /// Bitwise AND (`&`).
    And,
    /// Bitwise OR (`|`).
    Or,
    /// Bitwise XOR (`^`).
    Xor,
    /// Bitwise NOT (`~`).
    Negate,
}

impl Operator {
    /// Returns the symbol used when rendering this operator.
    ///
    /// ## Example
    /// ```
    /// use bitexpr::ast::Operator;
    ///
    /// assert_eq!(Operator::Xor.symbol(), "^");
    /// assert_eq!(Operator::None.symbol(), "");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::None => "",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Negate => "~",
        }
    }

    /// Whether this operator combines two operands.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self, Self::And | Self::Or | Self::Xor)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One side of an [`Operation`].
///
/// A slot is either empty, a literal value, or a sub-tree that is owned
/// exclusively by the enclosing operation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Operand {
    /// Nothing has been placed in this slot.
    #[default]
    Empty,
    /// A literal 64-bit signed integer.
    Literal(i64),
    /// A nested operation.
    Nested(Box<Operation>),
}

impl Operand {
    /// Returns `true` if the slot holds a literal or a sub-tree.
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !matches!(self, Self::Empty)
    }
}

impl From<i64> for Operand {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

impl From<Operation> for Operand {
    fn from(operation: Operation) -> Self {
        Self::Nested(Box::new(operation))
    }
}

/// A node of the expression tree: an operator applied to one or two operands.
///
/// Valid shapes are:
/// - `None` with a left operand and an empty right slot (bare value),
/// - `Negate` with a left operand and an empty right slot,
/// - `And`, `Or` or `Xor` with both slots filled.
///
/// The constructors only build these shapes. The fields stay public so a tree
/// can be assembled by hand; [`Operation::result`] rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    /// The operator to apply.
    pub operator: Operator,
    /// Left operand. Must always be present.
    pub left:     Operand,
    /// Right operand. Present only for binary operators.
    pub right:    Operand,
}

impl Operation {
    /// A bare operand that evaluates to itself.
    #[must_use]
    pub fn bare(value: impl Into<Operand>) -> Self {
        Self { operator: Operator::None,
               left:     value.into(),
               right:    Operand::Empty, }
    }

    /// The one's complement of `value`.
    #[must_use]
    pub fn negate(value: impl Into<Operand>) -> Self {
        Self { operator: Operator::Negate,
               left:     value.into(),
               right:    Operand::Empty, }
    }

    /// A binary operation.
    ///
    /// Returns `None` if `operator` is not one of `And`, `Or` or `Xor`.
    ///
    /// ## Example
    /// ```
    /// use bitexpr::ast::{Operation, Operator};
    ///
    /// let op = Operation::binary(Operator::And, 5, 3).unwrap();
    /// assert_eq!(op.to_string(), "5 & 3");
    /// assert!(Operation::binary(Operator::Negate, 5, 3).is_none());
    /// ```
    #[must_use]
    pub fn binary(operator: Operator,
                  left: impl Into<Operand>,
                  right: impl Into<Operand>)
                  -> Option<Self> {
        operator.is_binary().then(|| Self { operator,
                                            left: left.into(),
                                            right: right.into() })
    }
}

/// Writes one operand, wrapping sub-trees in parentheses unless they are
/// negations.
fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Operand) -> fmt::Result {
    match operand {
        Operand::Empty => Ok(()),
        Operand::Literal(value) => write!(f, "{value}"),
        Operand::Nested(operation) if operation.operator == Operator::Negate => {
            write!(f, "{operation}")
        },
        Operand::Nested(operation) => write!(f, "({operation})"),
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator {
            Operator::None => write_operand(f, &self.left),
            Operator::Negate => {
                f.write_str(self.operator.symbol())?;
                write_operand(f, &self.left)
            },
            Operator::And | Operator::Or | Operator::Xor => {
                write_operand(f, &self.left)?;
                write!(f, " {} ", self.operator)?;
                write_operand(f, &self.right)
            },
        }
    }
}
