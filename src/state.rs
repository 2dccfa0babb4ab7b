use num_traits::Zero;

use crate::errors::*;
use crate::expr::*;
use crate::resolver::Resolver;
use crate::value::*;

/// Coarse classification of a calculator state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    EnteringNumber,
    PendingBinary,
    PendingUnary,
    Resolved,
    Errored,
}

/// Complete state of the calculator between two commands. A command never
/// changes a state, it builds a new one
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculatorState {
    pending_input: String,
    expression: Expression,
    last_equation: Option<Equation>,
    last_status: Status,
}

impl Default for CalculatorState {
    fn default() -> CalculatorState {
        CalculatorState {
            pending_input: String::new(),
            expression: Expression::Idle,
            last_equation: None,
            last_status: Status::Ok,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Default::default()
    }

    // pending_input must be validated by the caller
    pub(crate) fn from_parts(
        pending_input: String,
        expression: Expression,
        last_equation: Option<Equation>,
        last_status: Status,
    ) -> Self {
        CalculatorState {
            pending_input,
            expression,
            last_equation,
            last_status,
        }
    }

    /// Raw text typed since the last operator or resolve. Empty string means
    /// there is no fresh entry
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn last_equation(&self) -> Option<&Equation> {
        self.last_equation.as_ref()
    }

    pub fn last_status(&self) -> Status {
        self.last_status
    }

    pub fn has_entry(&self) -> bool {
        !self.pending_input.is_empty()
    }

    /// The fresh entry as a number
    pub fn entry(&self) -> Option<Decimal> {
        if self.pending_input.is_empty() {
            return None;
        }
        parse_entry(&self.pending_input).ok()
    }

    /// The last command failed and nothing new has been typed since
    pub fn is_errored(&self) -> bool {
        self.last_status.is_error() && self.pending_input.is_empty()
    }

    pub fn phase(&self) -> Phase {
        if self.is_errored() {
            return Phase::Errored;
        }
        if self.has_entry() {
            return Phase::EnteringNumber;
        }
        match &self.expression {
            Expression::Binary(..) => Phase::PendingBinary,
            Expression::Unary(..) => Phase::PendingUnary,
            Expression::Number(..) => Phase::EnteringNumber,
            Expression::Idle => {
                if self.last_equation.is_some() {
                    Phase::Resolved
                } else {
                    Phase::Idle
                }
            }
        }
    }

    /// Operand unary and memory commands act on: the fresh entry, otherwise
    /// the number or unary expression, otherwise the edited slot of a binary
    /// (the left one while the right is missing), otherwise the last result
    pub fn focus(&self) -> Operand {
        if let Some(v) = self.entry() {
            return Operand::Number(v);
        }
        match &self.expression {
            Expression::Number(v) => Operand::Number(v.clone()),
            Expression::Unary(op, nested) => Operand::Unary(*op, nested.clone()),
            Expression::Binary(_, _, Some(right)) => right.clone(),
            Expression::Binary(left, _, None) => left.clone(),
            Expression::Idle => match self.last_equation.as_ref().and_then(|eq| eq.value()) {
                Some(v) => Operand::Number(v.clone()),
                None => Operand::Number(Decimal::zero()),
            },
        }
    }

    /// Value of the operand in focus, the number a display shows
    pub fn current_value(&self, resolver: &Resolver) -> CalcResult {
        resolver.value_of_operand(&self.focus())
    }
}
