use std::fmt;

use super::token::{BinaryOperator, UnaryOperator};

/// A well-formed expression tree. Every node owns its children; the parser
/// never emits a node with missing operands.
#[derive(Debug, PartialEq, Clone)]
pub(crate) enum Expression {
    Number(f64),
    Unary {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    Binary {
        lhs: Box<Expression>,
        op: BinaryOperator,
        rhs: Box<Expression>,
    },
}

impl Expression {
    /// Reduces the tree to a value. Pure and total: division by zero follows
    /// IEEE-754 and yields an infinity or NaN rather than an error.
    pub fn evaluate(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Unary { op, operand } => match op {
                UnaryOperator::Plus => operand.evaluate(),
                UnaryOperator::Minus => -operand.evaluate(),
            },
            Self::Binary { lhs, op, rhs } => {
                let (lhs, rhs) = (lhs.evaluate(), rhs.evaluate());
                match op {
                    BinaryOperator::Plus => lhs + rhs,
                    BinaryOperator::Minus => lhs - rhs,
                    BinaryOperator::Mul => lhs * rhs,
                    BinaryOperator::Div => lhs / rhs,
                    BinaryOperator::Pow => lhs.powf(rhs),
                }
            }
        }
    }
}

/// Fully parenthesized rendering, so precedence and associativity are visible
/// without re-parsing: `-(1 + 3)` prints as `-((1 + 3))`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Unary { op, operand } => write!(f, "{}({operand})", op.symbol()),
            Self::Binary { lhs, op, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
        }
    }
}
