//! Error types for fnplot.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! [`ValidationError`] covers everything that can be wrong with a plot request;
//! its `Display` text is the message shown to the user.

use thiserror::Error;

use crate::expr::{EvalError, ParseError};
use crate::validator::Field;

/// Result type alias for fnplot operations.
pub type Result<T> = std::result::Result<T, FnplotError>;

/// Errors that can occur in fnplot outside of request validation.
#[derive(Debug, Error)]
pub enum FnplotError {
    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The plot request was rejected.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An action needed a plotted series and there is none.
    #[error("Nothing to copy: plot a function first")]
    NothingPlotted,
}

/// Reasons a plot request is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required input was left empty.
    #[error("{}", .0.empty_message())]
    EmptyField(Field),

    /// The function text is not a valid expression.
    #[error("Invalid expression for function!")]
    Parse(#[from] ParseError),

    /// The expression does not use exactly the variable `x`.
    #[error("Expression must contain exactly one variable and it must be x")]
    Variables {
        /// Variables the expression actually uses.
        found: Vec<String>,
    },

    /// A range bound is not an integer.
    #[error("{} must be a whole number", .field.label())]
    RangeParse {
        /// The offending field.
        field: Field,
        /// Text as entered.
        text: String,
    },

    /// The range is empty or reversed.
    #[error("Min value must be smaller than max value!")]
    RangeOrder {
        /// Lower bound as entered.
        min: i32,
        /// Upper bound as entered.
        max: i32,
    },

    /// The expression could not be evaluated at a sample point.
    #[error("Could not evaluate function at x = {x}: {source}")]
    Evaluation {
        /// Sample point that failed.
        x: f64,
        /// What went wrong.
        source: EvalError,
    },
}

impl ValidationError {
    /// The input field the user has to fix.
    pub fn field(&self) -> Field {
        match self {
            Self::EmptyField(field) | Self::RangeParse { field, .. } => *field,
            Self::Parse(_) | Self::Variables { .. } | Self::Evaluation { .. } => Field::Function,
            Self::RangeOrder { .. } => Field::MaxX,
        }
    }
}
