//! # Desk calculator engine
//!
//! The library turns button presses of a classic desk calculator into exact
//! decimal results. It knows nothing about windows and buttons: a UI calls the
//! command methods of [`Calculator`] and renders what [`Calculator::display`]
//! and [`Calculator::history`] return.
//!
//! All numbers are arbitrary precision decimals, so `0.1 + 0.2` is exactly
//! `0.3`. The only place where precision is lost is division (and the
//! operations built on it: reciprocal, percent, square root): the result is
//! rounded half-up to 16 fractional digits and trailing zeros are stripped.
//! `1 ÷ 3` gives `0.3333333333333333`, `2 ÷ 3` gives `0.6666666666666667`.
//!
//! Commands:
//! * digits and decimal point - `number("12")`, `number(".")`, `number("5")`
//! * binary operators - plus, minus, multiply, divide
//! * unary operators - negate, percent, square, square root, reciprocal
//! * `=` - resolve
//! * `C` and `CE` - clear everything, clear the current entry
//! * memory - `MS`, `MR`, `M+`, `M-`, `MC`
//!
//! The usual calculator habits are kept:
//! * an operator without the second value operates on itself: `3 × =` is `9`
//! * repeated `=` repeats the last operation: `1 + 2 = =` is `5`
//! * percent is relative to the left operand for `+` and `-`: `20 + 5 %` is
//! `20 + 1`; for `×` and `÷` it is just a hundredth: `20 × 5 %` is `20 × 0.05`
//! * unary operators nest: `5 = negate negate` shows `negate(negate(5))`
//!
//! Arithmetic errors are not Rust errors. Division of a non-zero value by zero
//! gives `DivideByZero`, `0 ÷ 0` is `Undefined`, square root of a negative
//! value is `InvalidInput`. They are kept in the state as [`Status`] and in
//! equations as [`CalcResult`]. [`EngineError`] is returned only when a
//! command cannot be accepted in the current state, e.g. an operator pressed
//! right after an error.
//!
//! ```
//! use dcalc_lib::{BinaryOp, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.number("1").unwrap();
//! calc.binary(BinaryOp::Plus).unwrap();
//! calc.number("2").unwrap();
//! calc.resolve();
//! assert_eq!(calc.display(), "3");
//! calc.resolve();
//! assert_eq!(calc.display(), "5");
//! ```

pub mod calculator;
pub mod commands;
pub mod errors;
pub mod expr;
pub mod memory;
pub mod resolver;
pub mod settings;
pub mod state;
pub mod value;

pub use calculator::Calculator;
pub use errors::{CalcError, CalcResult, EngineError, EngineResult, Status};
pub use expr::{BinaryOp, Equation, Expression, Operand, UnaryOp};
pub use resolver::Resolver;
pub use settings::Settings;
pub use state::{CalculatorState, Phase};
pub use value::Decimal;
