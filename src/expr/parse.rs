//! Parser for function expressions.
//!
//! Precedence, lowest first: `+ -`, then `* /` and implicit multiplication,
//! then unary `- +`, then `^`/`**` (right associative). The exponent of a
//! power may itself carry a sign, so `2^-1` is valid and `-x^2` is `-(x^2)`.
//! A function name may be applied without parentheses to the operand that
//! follows it: `sin x` is `sin(x)` and `sin x^2` is `sin(x^2)`.

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{char, digit0, digit1, multispace0, one_of, satisfy},
    combinator::{all_consuming, cut, map, map_res, opt, recognize, value},
    error::ErrorKind,
    sequence::{delimited, pair, preceded},
    IResult, Parser,
};
use thiserror::Error;

use super::{Constant, Expr, Function};

/// Deepest nesting accepted.
///
/// Parentheses, signs, powers, calls and every chained operator count
/// towards it, so it also bounds the depth of the resulting tree.
pub const MAX_DEPTH: usize = 100;

/// Text that is not a valid expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid expression at offset {offset}")]
pub struct ParseError {
    /// Byte offset where parsing stopped.
    pub offset: usize,
}

/// Parses `text` into an expression tree.
///
/// No normalization is applied; see [`super::normalize`].
pub fn parse(text: &str) -> Result<Expr, ParseError> {
    match all_consuming(delimited(multispace0, |i| sum(i, 0), multispace0)).parse(text) {
        Ok((_, expr)) => Ok(expr),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(ParseError {
            offset: text.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(ParseError { offset: text.len() }),
    }
}

/// Parse whitespace around `inner`
fn ws<'a, P, O>(inner: P) -> impl Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>
where
    P: Parser<&'a str, Output = O, Error = nom::error::Error<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}

/// Fail without backtracking once nesting passes [`MAX_DEPTH`]
fn check_depth(input: &str, depth: usize) -> IResult<&str, ()> {
    if depth > MAX_DEPTH {
        return Err(nom::Err::Failure(nom::error::Error::new(
            input,
            ErrorKind::TooLarge,
        )));
    }
    Ok((input, ()))
}

/// Parse a numeric literal such as `12`, `1.5`, `.5` or `2E-3`
fn number(input: &str) -> IResult<&str, Expr> {
    map_res(
        recognize((
            alt((
                recognize((digit1, opt((char('.'), digit0)))),
                recognize((char('.'), digit1)),
            )),
            opt((char('E'), opt(one_of("+-")), digit1)),
        )),
        |s: &str| s.parse::<f64>().map(Expr::Number),
    )
    .parse(input)
}

/// Parse a function name, case-insensitively
fn function_name(input: &str) -> IResult<&str, Function> {
    for function in Function::ALL {
        let attempt: IResult<&str, &str> = tag_no_case(function.name()).parse(input);
        if let Ok((rest, _)) = attempt {
            return Ok((rest, function));
        }
    }
    Err(nom::Err::Error(nom::error::Error::new(input, ErrorKind::Tag)))
}

/// Parse a function call such as `sin(x)` or `sin x`
fn call(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, function) = function_name(input)?;
    // after `name(` no other reading can succeed, so don't backtrack
    let (input, arg) = alt((
        delimited(ws(char('(')), cut(|i| sum(i, depth)), cut(char(')'))),
        preceded(multispace0, |i| power(i, depth)),
    ))
    .parse(input)?;
    Ok((input, Expr::Call(function, Box::new(arg))))
}

fn constant(input: &str) -> IResult<&str, Expr> {
    alt((
        value(Expr::Constant(Constant::Pi), tag("pi")),
        value(Expr::Constant(Constant::E), char('E')),
    ))
    .parse(input)
}

/// Parse a variable; every variable is a single letter, so `xy` is `x*y`
fn variable(input: &str) -> IResult<&str, Expr> {
    map(satisfy(|c| c.is_ascii_alphabetic()), |c| {
        Expr::Variable(c.to_string())
    })
    .parse(input)
}

fn parenthesized(input: &str, depth: usize) -> IResult<&str, Expr> {
    delimited(char('('), ws(|i| sum(i, depth)), char(')')).parse(input)
}

fn atom(input: &str, depth: usize) -> IResult<&str, Expr> {
    check_depth(input, depth)?;
    alt((
        number,
        |i| call(i, depth + 1),
        constant,
        variable,
        |i| parenthesized(i, depth + 1),
    ))
    .parse(input)
}

/// Parse exponentiation (right-associative)
fn power(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (input, base) = atom(input, depth)?;

    let op: IResult<&str, &str> = preceded(multispace0, alt((tag("**"), tag("^")))).parse(input);
    match op {
        Ok((rest, _)) => {
            let (rest, exponent) = preceded(multispace0, |i| unary(i, depth + 1)).parse(rest)?;
            Ok((rest, Expr::Pow(Box::new(base), Box::new(exponent))))
        },
        Err(_) => Ok((input, base)),
    }
}

fn unary(input: &str, depth: usize) -> IResult<&str, Expr> {
    check_depth(input, depth)?;
    alt((
        map(
            preceded(pair(char('-'), multispace0), |i| unary(i, depth + 1)),
            |expr| Expr::Neg(Box::new(expr)),
        ),
        preceded(pair(char('+'), multispace0), |i| unary(i, depth + 1)),
        |i| power(i, depth),
    ))
    .parse(input)
}

/// Parse multiplication and division, including implicit multiplication
/// (left-associative)
fn product(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (mut input, mut left) = unary(input, depth)?;
    let mut depth = depth;

    loop {
        let op: IResult<&str, char> = preceded(multispace0, one_of("*/")).parse(input);
        if let Ok((rest, op)) = op {
            depth += 1;
            let (rest, right) = preceded(multispace0, |i| unary(i, depth)).parse(rest)?;
            left = match op {
                '*' => Expr::Mul(Box::new(left), Box::new(right)),
                _ => Expr::Div(Box::new(left), Box::new(right)),
            };
            input = rest;
            continue;
        }

        // An operand with no operator in front multiplies. It cannot carry a
        // sign, otherwise `x -1` would read as `x*(-1)`.
        let implicit: IResult<&str, Expr> =
            preceded(multispace0, |i| power(i, depth + 1)).parse(input);
        match implicit {
            Ok((rest, right)) => {
                depth += 1;
                left = Expr::Mul(Box::new(left), Box::new(right));
                input = rest;
            },
            Err(nom::Err::Error(_)) => break,
            Err(e) => return Err(e),
        }
    }

    Ok((input, left))
}

/// Parse addition and subtraction (left-associative)
fn sum(input: &str, depth: usize) -> IResult<&str, Expr> {
    let (mut input, mut left) = product(input, depth)?;
    let mut depth = depth;

    loop {
        let op: IResult<&str, char> = preceded(multispace0, one_of("+-")).parse(input);
        let Ok((rest, op)) = op else {
            break;
        };
        depth += 1;
        let (rest, right) = preceded(multispace0, |i| product(i, depth)).parse(rest)?;
        left = match op {
            '+' => Expr::Add(Box::new(left), Box::new(right)),
            _ => Expr::Sub(Box::new(left), Box::new(right)),
        };
        input = rest;
    }

    Ok((input, left))
}
