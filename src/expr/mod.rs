//! Expression trees for functions of one variable.
//!
//! Text is turned into an [`Expr`] by [`parse`], which supports implicit
//! multiplication (`2x`, `3(x+1)`) and both `^` and `**` for powers. Trees
//! compare structurally, report their free variables and evaluate to `f64`
//! through [`Expr::eval`].

mod eval;
mod parse;

use std::collections::BTreeSet;
use std::fmt;

pub use eval::EvalError;
pub use parse::{parse, ParseError, MAX_DEPTH};

/// Named constants recognised by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// Euler's number, written `E`.
    E,
    /// Pi, written `pi`.
    Pi,
}

impl Constant {
    /// Numeric value of the constant.
    pub fn value(self) -> f64 {
        match self {
            Constant::E => std::f64::consts::E,
            Constant::Pi => std::f64::consts::PI,
        }
    }

    /// Name as written in an expression.
    pub fn name(self) -> &'static str {
        match self {
            Constant::E => "E",
            Constant::Pi => "pi",
        }
    }
}

/// Functions of one argument that may be called from an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Exponential.
    Exp,
    /// Natural logarithm, written `ln`.
    Ln,
    /// Natural logarithm, written `log`.
    Log,
    /// Square root.
    Sqrt,
    /// Absolute value.
    Abs,
}

impl Function {
    /// All functions, longest name first among those sharing a prefix.
    pub const ALL: [Function; 14] = [
        Function::Sinh,
        Function::Cosh,
        Function::Tanh,
        Function::Asin,
        Function::Acos,
        Function::Atan,
        Function::Sin,
        Function::Cos,
        Function::Tan,
        Function::Exp,
        Function::Sqrt,
        Function::Abs,
        Function::Log,
        Function::Ln,
    ];

    /// Name as written in an expression.
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Asin => "asin",
            Function::Acos => "acos",
            Function::Atan => "atan",
            Function::Sinh => "sinh",
            Function::Cosh => "cosh",
            Function::Tanh => "tanh",
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Log => "log",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }
}

/// A parsed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric literal.
    Number(f64),
    /// Named constant.
    Constant(Constant),
    /// Free variable.
    Variable(String),
    /// Unary minus.
    Neg(Box<Expr>),
    /// Addition.
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction.
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication, explicit or implicit.
    Mul(Box<Expr>, Box<Expr>),
    /// Division.
    Div(Box<Expr>, Box<Expr>),
    /// Exponentiation, written `^` or `**`.
    Pow(Box<Expr>, Box<Expr>),
    /// Function call.
    Call(Function, Box<Expr>),
}

impl Expr {
    /// Names of all variables referenced by the expression.
    pub fn free_variables(&self) -> BTreeSet<String> {
        let mut names = BTreeSet::new();
        self.collect_variables(&mut names);
        names
    }

    fn collect_variables(&self, names: &mut BTreeSet<String>) {
        match self {
            Expr::Number(_) | Expr::Constant(_) => {},
            Expr::Variable(name) => {
                names.insert(name.clone());
            },
            Expr::Neg(inner) | Expr::Call(_, inner) => inner.collect_variables(names),
            Expr::Add(l, r)
            | Expr::Sub(l, r)
            | Expr::Mul(l, r)
            | Expr::Div(l, r)
            | Expr::Pow(l, r) => {
                l.collect_variables(names);
                r.collect_variables(names);
            },
        }
    }

    /// Binding strength, used to decide where `Display` needs parentheses.
    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(_) => 3,
            Expr::Pow(..) => 4,
            Expr::Number(n) if *n < 0.0 => 3,
            Expr::Number(_) | Expr::Constant(_) | Expr::Variable(_) | Expr::Call(..) => 5,
        }
    }
}

/// Normalizes user text before parsing.
///
/// Every `e` becomes `E`, which the parser reads as either an exponent marker
/// (`2E3`) or Euler's number.
pub fn normalize(text: &str) -> String {
    text.replace('e', "E")
}

fn write_operand(
    f: &mut fmt::Formatter<'_>,
    operand: &Expr,
    min_precedence: u8,
) -> fmt::Result {
    if operand.precedence() < min_precedence {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{}", n),
            Expr::Constant(c) => f.write_str(c.name()),
            Expr::Variable(name) => f.write_str(name),
            Expr::Neg(inner) => {
                f.write_str("-")?;
                write_operand(f, inner, 3)
            },
            Expr::Add(l, r) => {
                write_operand(f, l, 1)?;
                f.write_str(" + ")?;
                write_operand(f, r, 2)
            },
            Expr::Sub(l, r) => {
                write_operand(f, l, 1)?;
                f.write_str(" - ")?;
                write_operand(f, r, 2)
            },
            Expr::Mul(l, r) => {
                write_operand(f, l, 2)?;
                f.write_str("*")?;
                write_operand(f, r, 3)
            },
            Expr::Div(l, r) => {
                write_operand(f, l, 2)?;
                f.write_str("/")?;
                write_operand(f, r, 3)
            },
            Expr::Pow(base, exponent) => {
                write_operand(f, base, 5)?;
                f.write_str("^")?;
                write_operand(f, exponent, 3)
            },
            Expr::Call(function, arg) => write!(f, "{}({})", function.name(), arg),
        }
    }
}
