// End-to-end flows driven through the public calculator API
use std::str::FromStr;

use dcalc_lib::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn num(s: &str) -> Operand {
    Operand::Number(dec(s))
}

#[test]
fn test_initial_state() {
    init_logger();
    let calc = Calculator::new();
    assert_eq!(calc.current_state(), &CalculatorState::new());
    assert_eq!(calc.current_state().phase(), Phase::Idle);
    assert_eq!(calc.display(), "0");
    assert!(calc.history().is_empty());
}

#[test]
fn test_comprehensive_flow() {
    init_logger();
    let mut calc = Calculator::new();

    // 10 + 5 = 15
    calc.number("1").unwrap();
    calc.number("0").unwrap();
    calc.binary(BinaryOp::Plus).unwrap();
    calc.number("5").unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "15");
    assert_eq!(calc.current_state().phase(), Phase::Resolved);

    // continue with the result: 15 × 2 = 30
    calc.binary(BinaryOp::Multiply).unwrap();
    calc.number("2").unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "30");

    // a new number starts a new calculation: 100 ÷ 8 = 12.5
    calc.number("100").unwrap();
    calc.binary(BinaryOp::Divide).unwrap();
    calc.number("8").unwrap();
    calc.resolve();
    assert_eq!(calc.current_value(), Ok(dec("12.5")));

    // clear and start fresh: 7 - 3 = 4
    calc.clear();
    assert_eq!(calc.current_state().phase(), Phase::Idle);
    calc.number("7").unwrap();
    calc.binary(BinaryOp::Minus).unwrap();
    calc.number("3").unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "4");

    let lines: Vec<String> = calc.history().iter().map(|eq| eq.to_string()).collect();
    assert_eq!(lines, vec!["7 - 3 = 4", "100 ÷ 8 = 12.5", "15 × 2 = 30", "10 + 5 = 15"]);
}

#[test]
fn test_exact_decimals() {
    init_logger();
    let mut calc = Calculator::new();
    calc.number("0.1").unwrap();
    calc.binary(BinaryOp::Plus).unwrap();
    calc.number("0.2").unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "0.3");

    calc.number("3").unwrap();
    calc.unary(UnaryOp::Reciprocal).unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "0.3333333333333333");

    calc.number("2").unwrap();
    calc.binary(BinaryOp::Divide).unwrap();
    calc.number("3").unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "0.6666666666666667");
}

#[test]
fn test_chained_equals() {
    init_logger();
    let mut calc = Calculator::new();
    calc.number("1").unwrap();
    calc.binary(BinaryOp::Plus).unwrap();
    calc.number("2").unwrap();
    let st = calc.resolve();
    assert_eq!(
        st.last_equation(),
        Some(&Equation::new(Expression::Binary(num("1"), BinaryOp::Plus, Some(num("2"))), Ok(dec("3"))))
    );
    let st = calc.resolve();
    assert_eq!(
        st.last_equation(),
        Some(&Equation::new(Expression::Binary(num("3"), BinaryOp::Plus, Some(num("2"))), Ok(dec("5"))))
    );
}

#[test]
fn test_percent() {
    init_logger();
    let mut calc = Calculator::new();
    calc.number("20").unwrap();
    calc.binary(BinaryOp::Plus).unwrap();
    calc.number("5").unwrap();
    let st = calc.unary(UnaryOp::Percent).unwrap();
    assert_eq!(st.expression(), &Expression::Binary(num("20"), BinaryOp::Plus, Some(num("1"))));

    calc.clear();
    calc.number("20").unwrap();
    calc.binary(BinaryOp::Multiply).unwrap();
    calc.number("5").unwrap();
    let st = calc.unary(UnaryOp::Percent).unwrap();
    assert_eq!(st.expression(), &Expression::Binary(num("20"), BinaryOp::Multiply, Some(num("0.05"))));
    calc.resolve();
    assert_eq!(calc.display(), "1");
}

#[test]
fn test_negate() {
    init_logger();
    let mut calc = Calculator::new();
    calc.number("123").unwrap();
    let st = calc.unary(UnaryOp::Negate).unwrap();
    assert_eq!(st.pending_input(), "-123");
    assert_eq!(calc.display(), "-123");

    calc.clear();
    calc.number("5").unwrap();
    calc.resolve();
    calc.unary(UnaryOp::Negate).unwrap();
    assert_eq!(calc.current_value(), Ok(dec("-5")));
    let st = calc.unary(UnaryOp::Negate).unwrap();
    assert_eq!(
        st.expression(),
        &Expression::from(num("5").wrap(UnaryOp::Negate).wrap(UnaryOp::Negate))
    );
    assert_eq!(calc.current_value(), Ok(dec("5")));
    calc.resolve();
    assert_eq!(calc.history()[0].to_string(), "negate(negate(5)) = 5");
}

#[test]
fn test_errors() {
    init_logger();
    let mut calc = Calculator::new();
    calc.number("0").unwrap();
    let st = calc.unary(UnaryOp::Reciprocal).unwrap();
    assert_eq!(st.last_status(), Status::DivideByZero);
    assert_eq!(calc.display(), "Cannot divide by zero");
    assert_eq!(
        calc.binary(BinaryOp::Plus).err(),
        Some(EngineError::IllegalState(Status::DivideByZero))
    );

    calc.clear();
    calc.number("123").unwrap();
    calc.unary(UnaryOp::Negate).unwrap();
    let st = calc.unary(UnaryOp::Root).unwrap();
    assert_eq!(st.last_status(), Status::InvalidInput);
    assert_eq!(calc.display(), "Invalid input");

    calc.clear();
    calc.number("0").unwrap();
    calc.binary(BinaryOp::Divide).unwrap();
    calc.number("0").unwrap();
    calc.resolve();
    assert_eq!(calc.current_state().last_status(), Status::Undefined);
    assert_eq!(calc.display(), "Result is undefined");

    // typing a number leaves the errored state
    calc.number("8").unwrap();
    calc.binary(BinaryOp::Minus).unwrap();
    calc.number("10").unwrap();
    calc.resolve();
    assert_eq!(calc.display(), "-2");
}

#[test]
fn test_memory_flow() {
    init_logger();
    let mut calc = Calculator::new();
    calc.number("4").unwrap();
    calc.binary(BinaryOp::Multiply).unwrap();
    calc.number("5").unwrap();
    calc.resolve();
    calc.memory_store().unwrap();
    calc.number("2").unwrap();
    calc.memory_add().unwrap();
    assert_eq!(calc.memory_recall(), Some(dec("22")));
    calc.memory_subtract().unwrap();
    calc.memory_subtract().unwrap();
    assert_eq!(calc.memory_recall(), Some(dec("18")));
    assert_eq!(calc.display(), "2");
    calc.memory_clear();
    assert_eq!(calc.memory_recall(), None);
}
