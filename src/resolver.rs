use log::trace;
use num_traits::Zero;

use crate::errors::*;
use crate::expr::*;
use crate::settings::Settings;
use crate::state::CalculatorState;
use crate::value::*;

/// Evaluation algebra of the calculator: computes values of expressions and
/// the equation produced by "="
#[derive(Clone, Debug, Default)]
pub struct Resolver {
    settings: Settings,
}

impl Resolver {
    pub fn new(settings: Settings) -> Self {
        Resolver { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn scale(&self) -> i64 {
        self.settings.division_scale
    }

    /// Computes the value of any expression. The first error wins, the left
    /// operand is evaluated before the right one
    pub fn value_of(&self, expr: &Expression) -> CalcResult {
        match expr {
            Expression::Idle => Ok(Decimal::zero()),
            Expression::Number(v) => Ok(v.clone()),
            Expression::Unary(op, nested) => {
                let x = self.value_of_operand(nested)?;
                self.apply_unary(*op, &x)
            }
            Expression::Binary(left, op, right) => {
                let l = self.value_of_operand(left)?;
                // "2 +" with no second value operates on itself: 2 + 2
                let r = match right {
                    Some(right) => self.value_of_operand(right)?,
                    None => l.clone(),
                };
                self.apply_binary(&l, *op, &r)
            }
        }
    }

    pub fn value_of_operand(&self, operand: &Operand) -> CalcResult {
        match operand {
            Operand::Number(v) => Ok(v.clone()),
            Operand::Unary(op, nested) => {
                let x = self.value_of_operand(nested)?;
                self.apply_unary(*op, &x)
            }
        }
    }

    pub fn apply_unary(&self, op: UnaryOp, x: &Decimal) -> CalcResult {
        match op {
            UnaryOp::Negate => Ok(-x),
            UnaryOp::Square => Ok(x * x),
            UnaryOp::Reciprocal => reciprocal(x, self.scale()),
            UnaryOp::Root => sqrt(x, self.scale()),
            UnaryOp::Percent => percent(x, self.scale()),
        }
    }

    pub fn apply_binary(&self, lhs: &Decimal, op: BinaryOp, rhs: &Decimal) -> CalcResult {
        match op {
            BinaryOp::Plus => Ok(lhs + rhs),
            BinaryOp::Minus => Ok(lhs - rhs),
            BinaryOp::Multiply => Ok(lhs * rhs),
            BinaryOp::Divide => divide(lhs, rhs, self.scale()),
        }
    }

    /// Percent pressed while a binary operator is pending. For `+` and `-`
    /// it is the percent of the left operand, for `×` and `÷` just `x / 100`
    pub fn percent_in_binary(&self, left: &Operand, op: BinaryOp, operand: &Operand) -> CalcResult {
        let l = self.value_of_operand(left)?;
        let x = self.value_of_operand(operand)?;
        match op {
            BinaryOp::Plus | BinaryOp::Minus => percent_of(&l, &x, self.scale()),
            BinaryOp::Multiply | BinaryOp::Divide => percent(&x, self.scale()),
        }
    }

    /// Builds the equation "=" produces in the given state
    pub fn resolve_equation(&self, state: &CalculatorState) -> Equation {
        let equation = match (state.expression(), state.entry()) {
            (Expression::Binary(left, op, right), entry) => {
                let right = match (entry, right) {
                    (Some(v), _) => Operand::Number(v),
                    (None, Some(right)) => right.clone(),
                    (None, None) => left.clone(),
                };
                self.equation(Expression::Binary(left.clone(), *op, Some(right)))
            }
            (_, Some(v)) => Equation::new(Expression::Number(v.clone()), Ok(v)),
            (Expression::Number(..), None) | (Expression::Unary(..), None) => {
                self.equation(state.expression().clone())
            }
            (Expression::Idle, None) => match state.last_equation() {
                // a failed equation whose error was cleared is not repeated
                Some(last) if last.result.is_ok() || state.last_status().is_error() => self.repeat(last),
                _ => Equation::new(Expression::Number(Decimal::zero()), Ok(Decimal::zero())),
            },
        };
        trace!("resolved: {}", equation);
        equation
    }

    fn equation(&self, expression: Expression) -> Equation {
        let result = self.value_of(&expression);
        Equation::new(expression, result)
    }

    // repeated "=": the last operator and right operand are applied to the
    // last result, anything else is re-affirmed as is
    fn repeat(&self, last: &Equation) -> Equation {
        match (&last.expression, &last.result) {
            (Expression::Binary(_, op, Some(right)), Ok(v)) => {
                self.equation(Expression::Binary(Operand::Number(v.clone()), *op, Some(right.clone())))
            }
            _ => last.clone(),
        }
    }
}
