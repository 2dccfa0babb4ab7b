use std::fmt;

use thiserror::Error;

use crate::value::Decimal;

/// Arithmetic failure of an evaluation. It is data: it is stored in equations
/// and states, never raised
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CalcError {
    /// Non-zero value divided by zero
    DivideByZero,
    /// Zero divided by zero
    Undefined,
    /// Square root of a negative value
    InvalidInput,
}

/// Expression evaluation result: either value or arithmetic error
pub type CalcResult = Result<Decimal, CalcError>;

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CalcError::DivideByZero => write!(f, "Cannot divide by zero"),
            CalcError::Undefined => write!(f, "Result is undefined"),
            CalcError::InvalidInput => write!(f, "Invalid input"),
        }
    }
}

/// Outcome of the last resolve or unary command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    DivideByZero,
    Undefined,
    InvalidInput,
}

impl Default for Status {
    fn default() -> Status {
        Status::Ok
    }
}

impl Status {
    pub fn is_ok(self) -> bool {
        self == Status::Ok
    }

    pub fn is_error(self) -> bool {
        !self.is_ok()
    }

    /// Arithmetic error this status stands for, `None` for `Ok`
    pub fn error(self) -> Option<CalcError> {
        match self {
            Status::Ok => None,
            Status::DivideByZero => Some(CalcError::DivideByZero),
            Status::Undefined => Some(CalcError::Undefined),
            Status::InvalidInput => Some(CalcError::InvalidInput),
        }
    }
}

impl From<CalcError> for Status {
    fn from(e: CalcError) -> Status {
        match e {
            CalcError::DivideByZero => Status::DivideByZero,
            CalcError::Undefined => Status::Undefined,
            CalcError::InvalidInput => Status::InvalidInput,
        }
    }
}

impl From<&CalcResult> for Status {
    fn from(r: &CalcResult) -> Status {
        match r {
            Ok(..) => Status::Ok,
            Err(e) => Status::from(*e),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.error() {
            None => write!(f, "OK"),
            Some(e) => write!(f, "{}", e),
        }
    }
}

/// Command issued in a state where it cannot proceed. It is a mistake of the
/// caller, not an arithmetic outcome
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("illegal state: command is not accepted after '{0}'")]
    IllegalState(Status),
    #[error("'{0}' is not a valid number entry")]
    InvalidNumber(String),
    #[error("slot {0} is out of range")]
    OutOfRange(usize),
}

pub type EngineResult<T> = Result<T, EngineError>;
