use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use lazy_static::lazy_static;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};

use crate::errors::*;

/// Exact base-10 signed number used for every operand and result
pub type Decimal = BigDecimal;

/// Fractional digits kept by division when nothing else is configured
pub const DEFAULT_SCALE: i64 = 16;

lazy_static! {
    pub(crate) static ref HUNDRED: Decimal = Decimal::from(100i64);
}

/// Checks that `s` is text a user can type on a keypad: an optional leading
/// minus, digits, and at most one decimal point
pub fn is_valid_entry(s: &str) -> bool {
    let body = s.strip_prefix('-').unwrap_or(s);
    let mut points = 0;
    for c in body.chars() {
        match c {
            '0'..='9' => {}
            '.' => points += 1,
            _ => return false,
        }
    }
    points <= 1
}

/// Converts raw pending-input text into a number. Incomplete entries like
/// `5.` or a lone `-` are accepted: the first is `5`, the second is zero
pub fn parse_entry(s: &str) -> Result<Decimal, EngineError> {
    if !is_valid_entry(s) {
        return Err(EngineError::InvalidNumber(s.to_string()));
    }
    let (negative, body) = match s.strip_prefix('-') {
        Some(b) => (true, b),
        None => (false, s),
    };
    let body = body.trim_end_matches('.');
    if body.is_empty() {
        return Ok(Decimal::zero());
    }
    // keypad entry may start with a point: ".5"
    let text = if body.starts_with('.') { format!("0{}", body) } else { body.to_string() };
    let v = Decimal::from_str(&text).map_err(|_| EngineError::InvalidNumber(s.to_string()))?;
    if negative {
        Ok(-v)
    } else {
        Ok(v)
    }
}

fn pow10(n: i64) -> BigInt {
    num_traits::pow(BigInt::from(10u32), n as usize)
}

// exact quotient rounded half-up (away from zero on a tie) to `scale` fractional digits
fn div_half_up(lhs: &Decimal, rhs: &Decimal, scale: i64) -> Decimal {
    let (ln, ls) = lhs.as_bigint_and_exponent();
    let (rn, rs) = rhs.as_bigint_and_exponent();
    // lhs / rhs = (ln / rn) * 10^(rs - ls)
    let shift = rs - ls + scale;
    let (num, den) = if shift >= 0 { (ln * pow10(shift), rn) } else { (ln, rn * pow10(-shift)) };

    let mut q = &num / &den;
    let r = &num % &den;
    if r.abs() * BigInt::from(2u32) >= den.abs() {
        let negative = (num.sign() == Sign::Minus) != (den.sign() == Sign::Minus);
        if negative {
            q -= 1;
        } else {
            q += 1;
        }
    }
    BigDecimal::new(q, scale).normalized()
}

/// Rounds half-up to `scale` fractional digits and strips trailing zeros
pub fn round(v: &Decimal, scale: i64) -> Decimal {
    v.with_scale_round(scale, RoundingMode::HalfUp).normalized()
}

/// Divides two numbers. Zero divisor gives `Undefined` for a zero dividend and
/// `DivideByZero` otherwise. The quotient keeps at most `scale` fractional digits
pub fn divide(lhs: &Decimal, rhs: &Decimal, scale: i64) -> CalcResult {
    if rhs.is_zero() {
        if lhs.is_zero() {
            return Err(CalcError::Undefined);
        }
        return Err(CalcError::DivideByZero);
    }
    Ok(div_half_up(lhs, rhs, scale))
}

/// Returns `1 / v`
pub fn reciprocal(v: &Decimal, scale: i64) -> CalcResult {
    if v.is_zero() {
        return Err(CalcError::DivideByZero);
    }
    Ok(div_half_up(&Decimal::from(1i64), v, scale))
}

/// Square root. Negative values are rejected, the irrational results are
/// rounded the same way division results are
pub fn sqrt(v: &Decimal, scale: i64) -> CalcResult {
    if *v < Decimal::zero() {
        return Err(CalcError::InvalidInput);
    }
    if v.is_zero() {
        return Ok(Decimal::zero());
    }
    match v.sqrt() {
        Some(r) => Ok(round(&r, scale)),
        None => Err(CalcError::InvalidInput),
    }
}

/// Plain percent: `v / 100`
pub fn percent(v: &Decimal, scale: i64) -> CalcResult {
    divide(v, &HUNDRED, scale)
}

/// Percent of another value: `base * v / 100`
pub fn percent_of(base: &Decimal, v: &Decimal, scale: i64) -> CalcResult {
    divide(&(base * v), &HUNDRED, scale)
}

/// Formats a number in positional notation without trailing zeros:
/// `1E+2` is printed as `100`, `0.50` as `0.5`
pub fn format_decimal(v: &Decimal) -> String {
    let (digits, scale) = v.normalized().as_bigint_and_exponent();
    let negative = digits.sign() == Sign::Minus;
    let mut s = digits.abs().to_string();
    if scale <= 0 {
        if s != "0" {
            s.push_str(&"0".repeat((-scale) as usize));
        }
    } else {
        let scale = scale as usize;
        if s.len() <= scale {
            s = format!("{}{}", "0".repeat(scale + 1 - s.len()), s);
        }
        s.insert(s.len() - scale, '.');
    }
    if negative {
        format!("-{}", s)
    } else {
        s
    }
}
