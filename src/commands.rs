//! Command handlers. Every handler takes the current state and returns the
//! state that replaces it; arithmetic failures end up in the status of the new
//! state, `Err` is returned only for commands the state cannot accept

use log::warn;

use crate::errors::*;
use crate::expr::*;
use crate::resolver::Resolver;
use crate::state::CalculatorState;
use crate::value::*;

fn ensure_not_errored(state: &CalculatorState) -> EngineResult<()> {
    if state.is_errored() {
        warn!("command rejected in errored state: {}", state.last_status());
        return Err(EngineError::IllegalState(state.last_status()));
    }
    Ok(())
}

// appends typed text to the fresh entry; redundant leading zeros of the
// integer part are dropped and a bare point gets a zero in front
fn append_entry(pending: &str, text: &str) -> String {
    let entry = format!("{}{}", pending, text);
    let (sign, body) = match entry.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", entry.as_str()),
    };
    let int_len = body.find('.').unwrap_or_else(|| body.len());
    let digits = body[..int_len].trim_start_matches('0');
    let int_part = if digits.is_empty() && !body.is_empty() { "0" } else { digits };
    format!("{}{}{}", sign, int_part, &body[int_len..])
}

/// Digit entry. Text is appended to the fresh entry; a new entry replaces the
/// operand in focus: the right slot of a binary or a pending unary expression
pub fn number(state: &CalculatorState, text: &str) -> EngineResult<CalculatorState> {
    if text.is_empty() {
        return Ok(state.clone());
    }
    let pending = append_entry(state.pending_input(), text);
    if !is_valid_entry(&pending) {
        let typed = format!("{}{}", state.pending_input(), text);
        warn!("invalid number entry: {}", typed);
        return Err(EngineError::InvalidNumber(typed));
    }

    let expression = match state.expression() {
        Expression::Binary(left, op, _) => Expression::Binary(left.clone(), *op, None),
        Expression::Idle | Expression::Number(..) | Expression::Unary(..) => Expression::Idle,
    };
    Ok(CalculatorState::from_parts(
        pending,
        expression,
        state.last_equation().cloned(),
        Status::Ok,
    ))
}

/// Binary operator. Swaps the operator of a pending binary, completes a
/// binary that has both operands and chains the new operator to its result,
/// or starts a new binary with the current value as the left operand
pub fn binary(resolver: &Resolver, state: &CalculatorState, op: BinaryOp) -> EngineResult<CalculatorState> {
    ensure_not_errored(state)?;

    match state.expression() {
        Expression::Binary(left, current, None) if !state.has_entry() => {
            if *current == op {
                return Ok(state.clone());
            }
            Ok(CalculatorState::from_parts(
                String::new(),
                Expression::Binary(left.clone(), op, None),
                state.last_equation().cloned(),
                state.last_status(),
            ))
        }
        Expression::Binary(..) => {
            let equation = resolver.resolve_equation(state);
            match &equation.result {
                Ok(v) => {
                    let expression = Expression::Binary(Operand::Number(v.clone()), op, None);
                    Ok(CalculatorState::from_parts(String::new(), expression, Some(equation), Status::Ok))
                }
                // the failed equation is committed, the operator is dropped
                Err(e) => {
                    let status = Status::from(*e);
                    Ok(CalculatorState::from_parts(String::new(), Expression::Idle, Some(equation), status))
                }
            }
        }
        Expression::Idle | Expression::Number(..) | Expression::Unary(..) => {
            let expression = Expression::Binary(state.focus(), op, None);
            Ok(CalculatorState::from_parts(
                String::new(),
                expression,
                state.last_equation().cloned(),
                Status::Ok,
            ))
        }
    }
}

fn toggle_sign(pending: &str) -> String {
    match pending.strip_prefix('-') {
        Some(rest) => rest.to_string(),
        None => format!("-{}", pending),
    }
}

/// Unary operator applied to the current value
pub fn unary(resolver: &Resolver, state: &CalculatorState, op: UnaryOp) -> EngineResult<CalculatorState> {
    ensure_not_errored(state)?;

    if op == UnaryOp::Negate && state.has_entry() {
        return Ok(CalculatorState::from_parts(
            toggle_sign(state.pending_input()),
            state.expression().clone(),
            state.last_equation().cloned(),
            state.last_status(),
        ));
    }

    let focus = state.focus();
    if let (UnaryOp::Percent, Expression::Binary(left, bop, _)) = (op, state.expression()) {
        let (right, status) = match resolver.percent_in_binary(left, *bop, &focus) {
            Ok(v) => (Operand::Number(v), Status::Ok),
            Err(e) => (focus.wrap(op), Status::from(e)),
        };
        return Ok(CalculatorState::from_parts(
            String::new(),
            Expression::Binary(left.clone(), *bop, Some(right)),
            state.last_equation().cloned(),
            status,
        ));
    }

    let operand = focus.wrap(op);
    let status = Status::from(&resolver.value_of_operand(&operand));
    let expression = match state.expression() {
        Expression::Binary(left, bop, _) => Expression::Binary(left.clone(), *bop, Some(operand)),
        Expression::Idle | Expression::Number(..) | Expression::Unary(..) => Expression::from(operand),
    };
    Ok(CalculatorState::from_parts(
        String::new(),
        expression,
        state.last_equation().cloned(),
        status,
    ))
}

/// "=": commits the current expression to an equation and resets the entry
pub fn resolve(resolver: &Resolver, state: &CalculatorState) -> CalculatorState {
    let equation = resolver.resolve_equation(state);
    let status = equation.status();
    CalculatorState::from_parts(String::new(), Expression::Idle, Some(equation), status)
}

/// "C": back to a fresh calculator
pub fn clear(_state: &CalculatorState) -> CalculatorState {
    CalculatorState::new()
}

/// "CE": drops the fresh entry and the right operand of a binary, keeps the
/// last equation
pub fn clear_entry(state: &CalculatorState) -> CalculatorState {
    let expression = match state.expression() {
        Expression::Binary(left, op, _) => Expression::Binary(left.clone(), *op, None),
        Expression::Idle | Expression::Number(..) | Expression::Unary(..) => Expression::Idle,
    };
    CalculatorState::from_parts(String::new(), expression, state.last_equation().cloned(), Status::Ok)
}

/// Loads a number as if it was typed, replacing the fresh entry
pub fn enter_value(state: &CalculatorState, v: &Decimal) -> CalculatorState {
    let expression = match state.expression() {
        Expression::Binary(left, op, _) => Expression::Binary(left.clone(), *op, None),
        Expression::Idle | Expression::Number(..) | Expression::Unary(..) => Expression::Idle,
    };
    CalculatorState::from_parts(format_decimal(v), expression, state.last_equation().cloned(), Status::Ok)
}
