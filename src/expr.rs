use std::fmt;

use crate::errors::*;
use crate::value::*;

/// Operators that act on a single value, the current one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    Percent,
    Square,
    Root,
    Reciprocal,
}

/// Operators that combine a left and a right operand
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl UnaryOp {
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Negate => "negate",
            UnaryOp::Percent => "percent",
            UnaryOp::Square => "sqr",
            UnaryOp::Root => "sqrt",
            UnaryOp::Reciprocal => "1/",
        }
    }
}

impl BinaryOp {
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Plus => "plus",
            BinaryOp::Minus => "minus",
            BinaryOp::Multiply => "multiply",
            BinaryOp::Divide => "divide",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Plus => '+',
            BinaryOp::Minus => '-',
            BinaryOp::Multiply => '×',
            BinaryOp::Divide => '÷',
        }
    }
}

/// Expression that is never a binary one: a literal or a chain of unary
/// operators around a literal. It is the only thing a unary operator can wrap
/// and the only thing a binary operator can take as an operand
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Number(Decimal),
    Unary(UnaryOp, Box<Operand>),
}

impl Operand {
    /// Wraps this operand with one more unary operator
    pub fn wrap(self, op: UnaryOp) -> Self {
        Operand::Unary(op, Box::new(self))
    }
}

/// Calculator expression
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expression {
    /// Nothing entered yet
    Idle,
    Number(Decimal),
    Unary(UnaryOp, Box<Operand>),
    /// `None` as the right operand means the operator is chosen but the
    /// second value is not given yet
    Binary(Operand, BinaryOp, Option<Operand>),
}

impl Default for Expression {
    fn default() -> Expression {
        Expression::Idle
    }
}

impl From<Operand> for Expression {
    fn from(o: Operand) -> Expression {
        match o {
            Operand::Number(v) => Expression::Number(v),
            Operand::Unary(op, nested) => Expression::Unary(op, nested),
        }
    }
}

impl Expression {
    /// Returns the expression as an operand if it is a number or a unary one
    pub fn as_operand(&self) -> Option<Operand> {
        match self {
            Expression::Number(v) => Some(Operand::Number(v.clone())),
            Expression::Unary(op, nested) => Some(Operand::Unary(*op, nested.clone())),
            Expression::Idle | Expression::Binary(..) => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Expression::Idle)
    }

    pub fn is_binary(&self) -> bool {
        matches!(self, Expression::Binary(..))
    }

    /// Binary expression with the operator chosen and the second operand missing
    pub fn is_pending_binary(&self) -> bool {
        matches!(self, Expression::Binary(_, _, None))
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Number(v) => write!(f, "{}", format_decimal(v)),
            Operand::Unary(UnaryOp::Percent, nested) => write!(f, "{}%", nested),
            Operand::Unary(UnaryOp::Square, nested) => write!(f, "sqr({})", nested),
            Operand::Unary(UnaryOp::Root, nested) => write!(f, "√({})", nested),
            Operand::Unary(UnaryOp::Reciprocal, nested) => write!(f, "1/({})", nested),
            Operand::Unary(UnaryOp::Negate, nested) => write!(f, "negate({})", nested),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Idle => Ok(()),
            Expression::Number(v) => write!(f, "{}", format_decimal(v)),
            Expression::Unary(op, nested) => write!(f, "{}", Operand::Unary(*op, nested.clone())),
            Expression::Binary(left, op, Some(right)) => write!(f, "{} {} {}", left, op.symbol(), right),
            Expression::Binary(left, op, None) => write!(f, "{} {}", left, op.symbol()),
        }
    }
}

/// Expression paired with the result it produced
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Equation {
    pub expression: Expression,
    pub result: CalcResult,
}

impl Equation {
    pub fn new(expression: Expression, result: CalcResult) -> Self {
        Equation { expression, result }
    }

    pub fn status(&self) -> Status {
        Status::from(&self.result)
    }

    pub fn value(&self) -> Option<&Decimal> {
        self.result.as_ref().ok()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.result {
            Ok(v) => write!(f, "{} = {}", self.expression, format_decimal(v)),
            Err(e) => write!(f, "{} = {}", self.expression, e),
        }
    }
}
