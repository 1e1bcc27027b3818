//! Numeric evaluation.

use thiserror::Error;

use super::{Expr, Function};

/// Errors raised while evaluating an expression at a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A denominator, or the base of a negative power, was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A function or power was applied outside its real domain.
    #[error("{0} is undefined")]
    Domain(String),

    /// The result does not fit in an `f64`.
    #[error("result is too large")]
    Overflow,

    /// A variable other than `x` has no value.
    #[error("no value for variable '{0}'")]
    UnboundVariable(String),
}

impl Expr {
    /// Evaluates the expression with `x` bound to the given value.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Number(n) => *n,
            Expr::Constant(c) => c.value(),
            Expr::Variable(name) if name == "x" => x,
            Expr::Variable(name) => return Err(EvalError::UnboundVariable(name.clone())),
            Expr::Neg(inner) => -inner.eval(x)?,
            Expr::Add(l, r) => l.eval(x)? + r.eval(x)?,
            Expr::Sub(l, r) => l.eval(x)? - r.eval(x)?,
            Expr::Mul(l, r) => l.eval(x)? * r.eval(x)?,
            Expr::Div(l, r) => {
                let numerator = l.eval(x)?;
                let denominator = r.eval(x)?;
                if denominator == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                numerator / denominator
            },
            Expr::Pow(base, exponent) => {
                let base = base.eval(x)?;
                let exponent = exponent.eval(x)?;
                if base == 0.0 && exponent < 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                base.powf(exponent)
            },
            Expr::Call(function, arg) => {
                let arg = arg.eval(x)?;
                if matches!(function, Function::Ln | Function::Log) && arg <= 0.0 {
                    return Err(EvalError::Domain(self.to_string()));
                }
                function.apply(arg)
            },
        };

        if value.is_nan() {
            Err(EvalError::Domain(self.to_string()))
        } else if value.is_infinite() {
            Err(EvalError::Overflow)
        } else {
            Ok(value)
        }
    }
}

impl Function {
    /// Applies the function to a real argument. The result may be NaN or
    /// infinite; [`Expr::eval`] turns those into errors.
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Function::Sin => arg.sin(),
            Function::Cos => arg.cos(),
            Function::Tan => arg.tan(),
            Function::Asin => arg.asin(),
            Function::Acos => arg.acos(),
            Function::Atan => arg.atan(),
            Function::Sinh => arg.sinh(),
            Function::Cosh => arg.cosh(),
            Function::Tanh => arg.tanh(),
            Function::Exp => arg.exp(),
            Function::Ln | Function::Log => arg.ln(),
            Function::Sqrt => arg.sqrt(),
            Function::Abs => arg.abs(),
        }
    }
}
