//! fnplot - plot a function of x in the terminal.
//!
//! fnplot is a small dialog: type an expression such as `2x^2 - 3`, a minimum
//! and a maximum x, press Enter, and the function is drawn over that range.
//!
//! # Features
//!
//! - Expressions with implicit multiplication (`2x`, `(x+1)(x-1)`), `^` or
//!   `**` for powers, `E` and `pi`, and common functions (`sin`, `sqrt`, ...)
//! - 100 evenly spaced samples, with gaps where the function is undefined
//! - Input masking on every field, re-checked on submit
//! - Clipboard integration
//! - Gruvbox color themes
//!
//! # Example
//!
//! ```
//! use fnplot::validator::{validate, PlotRequest};
//!
//! let series = validate(&PlotRequest::new("x^2 + 1", "1", "4")).unwrap();
//! assert_eq!(series.len(), 100);
//! assert_eq!(series.points()[0], (1.0, 2.0));
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod expr;
pub mod form;
pub mod series;
pub mod ui;
pub mod util;
pub mod validator;

pub use error::{FnplotError, Result, ValidationError};
pub use series::{PlotSeries, SAMPLE_RESOLUTION};
pub use validator::{validate, PlotRequest, PlotRequestValidator, UndefinedPolicy};
