//! Tests for expression parsing and evaluation

use fnplot::expr::{normalize, parse, Constant, EvalError, Expr, Function, MAX_DEPTH};
use pretty_assertions::assert_eq;

fn num(n: f64) -> Box<Expr> {
    Box::new(Expr::Number(n))
}

fn var(name: &str) -> Box<Expr> {
    Box::new(Expr::Variable(name.to_string()))
}

fn eval(text: &str, x: f64) -> f64 {
    parse(text)
        .unwrap_or_else(|e| panic!("{:?} failed to parse: {}", text, e))
        .eval(x)
        .unwrap_or_else(|e| panic!("{:?} failed at {}: {}", text, x, e))
}

#[test]
fn test_caret_and_double_star_are_the_same_power() {
    assert_eq!(parse("3^3").unwrap(), parse("3**3").unwrap());
    assert_eq!(parse("3^3").unwrap(), Expr::Pow(num(3.0), num(3.0)));
    assert_eq!(parse("3^3").unwrap().eval(0.0), Ok(27.0));

    assert_eq!(parse("6^0").unwrap(), parse("6**0").unwrap());
    assert_eq!(parse("6^0").unwrap().eval(0.0), Ok(1.0));

    assert_eq!(parse("x^2").unwrap(), Expr::Pow(var("x"), num(2.0)));
    assert_eq!(parse("x ** 2").unwrap(), parse("x^2").unwrap());
}

#[test]
fn test_implicit_multiplication() {
    assert_eq!(parse("2x").unwrap(), Expr::Mul(num(2.0), var("x")));
    assert_eq!(parse("2 x").unwrap(), parse("2*x").unwrap());
    assert_eq!(parse("2x^2").unwrap(), parse("2*x^2").unwrap());
    assert_eq!(parse("x(x+1)").unwrap(), parse("x*(x+1)").unwrap());
    assert_eq!(parse("(x+1)(x-1)").unwrap(), parse("(x+1)*(x-1)").unwrap());
    assert_eq!(parse("xsin(x)").unwrap(), parse("x*sin(x)").unwrap());

    assert_eq!(eval("2x^2", 3.0), 18.0);
    assert_eq!(eval("(x+1)(x-1)", 3.0), 8.0);
    assert_eq!(eval("6/2(1+2)", 0.0), 9.0);
}

#[test]
fn test_a_sign_after_an_operand_is_binary() {
    assert_eq!(parse("x -1").unwrap(), Expr::Sub(var("x"), num(1.0)));
    assert_eq!(eval("x - -1", 2.0), 3.0);
}

#[test]
fn test_precedence_and_associativity() {
    assert_eq!(eval("-x^2", 3.0), -9.0);
    assert_eq!(eval("2^-1", 0.0), 0.5);
    assert_eq!(eval("2^3^2", 0.0), 512.0);
    assert_eq!(eval("10 - 4 - 3", 0.0), 3.0);
    assert_eq!(eval("12 / 3 / 2", 0.0), 2.0);
    assert_eq!(eval("1 + 2 * 3", 0.0), 7.0);
    assert_eq!(eval("+x", 4.0), 4.0);
}

#[test]
fn test_numeric_literals() {
    assert_eq!(eval(".5x", 2.0), 1.0);
    assert_eq!(eval("1.25", 0.0), 1.25);
    assert_eq!(eval("1E+3", 0.0), 1000.0);
    assert_eq!(eval("2E-1", 0.0), 0.2);

    // not an exponent: `2E + x`
    assert_eq!(
        parse("2E+x").unwrap(),
        Expr::Add(
            Box::new(Expr::Mul(num(2.0), Box::new(Expr::Constant(Constant::E)))),
            var("x")
        )
    );
}

#[test]
fn test_constants_and_functions() {
    assert_eq!(eval("pi", 0.0), std::f64::consts::PI);
    assert_eq!(eval("E", 0.0), std::f64::consts::E);
    assert_eq!(
        parse("Sqrt(x)").unwrap(),
        Expr::Call(Function::Sqrt, var("x"))
    );
    assert_eq!(eval("sqrt(x)", 16.0), 4.0);
    assert_eq!(eval("abs(x)", -2.5), 2.5);
    assert!((eval("ln(E)", 0.0) - 1.0).abs() < 1e-15);
    assert_eq!(eval("log(1)", 0.0), 0.0);
    assert_eq!(eval("sin(0) + cos(0)", 0.0), 1.0);
    assert_eq!(eval("sinh(0)", 0.0), 0.0);

    // the dialog upper-cases every `e` before parsing
    assert_eq!(normalize("exp(x) + 2e3"), "Exp(x) + 2E3");
    assert_eq!(eval(&normalize("exp(0)"), 0.0), 1.0);
}

#[test]
fn test_free_variables() {
    let vars: Vec<String> = parse("x + y*z").unwrap().free_variables().into_iter().collect();
    assert_eq!(vars, vec!["x", "y", "z"]);

    assert!(parse("pi*E + 2").unwrap().free_variables().is_empty());
    assert_eq!(parse("sin(x)x").unwrap().free_variables().len(), 1);
}

#[test]
fn test_parse_errors() {
    for text in ["", "x+", "(x+1", "x+1)", "2 * * 3", "x^", "sin()", "x$"] {
        assert!(parse(text).is_err(), "{:?} should not parse", text);
    }

    assert_eq!(parse("x+").unwrap_err().offset, 2);
}

#[test]
fn test_evaluation_errors() {
    assert_eq!(parse("1/x").unwrap().eval(0.0), Err(EvalError::DivisionByZero));
    assert_eq!(parse("x^-1").unwrap().eval(0.0), Err(EvalError::DivisionByZero));
    assert_eq!(
        parse("ln(x)").unwrap().eval(0.0),
        Err(EvalError::Domain("ln(x)".to_string()))
    );
    assert_eq!(
        parse("x^(1/3)").unwrap().eval(-8.0),
        Err(EvalError::Domain("x^(1/3)".to_string()))
    );
    assert_eq!(parse("10^x").unwrap().eval(400.0), Err(EvalError::Overflow));
    assert_eq!(
        parse("x + y").unwrap().eval(1.0),
        Err(EvalError::UnboundVariable("y".to_string()))
    );
}

#[test]
fn test_display_round_trips() {
    for (text, shown) in [
        ("x^2 + 1", "x^2 + 1"),
        ("2x", "2*x"),
        ("-(x+1)", "-(x + 1)"),
        ("(x^2)^3", "(x^2)^3"),
        ("x^2^3", "x^2^3"),
        ("(-x)^2", "(-x)^2"),
        ("x - (x - 1)", "x - (x - 1)"),
        ("x/(2x)", "x/(2*x)"),
        ("sqrt(x + 1)", "sqrt(x + 1)"),
        ("pi*E", "pi*E"),
    ] {
        let expr = parse(text).unwrap();
        assert_eq!(expr.to_string(), shown);
        assert_eq!(parse(&expr.to_string()).unwrap(), expr, "{:?}", text);
    }
}

#[test]
fn test_function_application_without_parentheses() {
    assert_eq!(parse("sin x").unwrap(), parse("sin(x)").unwrap());
    assert_eq!(parse("sinx").unwrap(), parse("sin(x)").unwrap());
    assert_eq!(parse("sin x^2").unwrap(), parse("sin(x^2)").unwrap());
    assert_eq!(parse("2 cos x").unwrap(), parse("2*cos(x)").unwrap());
    assert_eq!(parse("sqrt sqrt x").unwrap(), parse("sqrt(sqrt(x))").unwrap());
    assert_eq!(eval("abs x - 1", -3.0), 2.0);

    // the operand is a single power, with no sign and no implicit product
    assert_eq!(parse("sin 2x").unwrap(), parse("sin(2)*x").unwrap());
    assert_eq!(parse("sin(x)^2").unwrap(), parse("(sin(x))^2").unwrap());
}

#[test]
fn test_nesting_within_the_limit_parses() {
    let depth = MAX_DEPTH / 2;
    let nested = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&nested, 3.0), 3.0);

    let negated = format!("{}x", "-".repeat(depth));
    assert_eq!(eval(&negated, 3.0), 3.0);

    let calls = format!("{}x{}", "abs(".repeat(depth), ")".repeat(depth));
    assert_eq!(eval(&calls, -3.0), 3.0);

    let polynomial: Vec<String> = (0..20).map(|n| format!("{}x^{}", n + 1, n)).collect();
    assert_eq!(eval(&polynomial.join(" + "), 1.0), 210.0);
}

#[test]
fn test_excessive_nesting_is_a_parse_error() {
    let parens = |depth: usize| format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    assert!(parse(&parens(MAX_DEPTH)).is_ok());
    assert!(parse(&parens(MAX_DEPTH + 1)).is_err());

    for depth in [2 * MAX_DEPTH, 10_000] {
        assert!(parse(&parens(depth)).is_err(), "{} parentheses", depth);

        let unclosed = "sin(".repeat(depth);
        assert!(parse(&unclosed).is_err(), "{} unclosed calls", depth);

        assert!(parse(&format!("{}x", "-".repeat(depth))).is_err(), "{} signs", depth);
        assert!(parse(&format!("{}x", "sin ".repeat(depth))).is_err(), "{} calls", depth);
        assert!(parse(&vec!["x"; depth].join("^")).is_err(), "{} powers", depth);
        assert!(parse(&vec!["x"; depth].join(" + ")).is_err(), "{} terms", depth);
        assert!(parse(&"x".repeat(depth)).is_err(), "{} factors", depth);
    }
}
