//! Validation of raw plot input.
//!
//! [`PlotRequestValidator::validate`] turns the three strings typed into the
//! dialog into a sampled [`PlotSeries`], or explains what is wrong with them.
//! It owns no state beyond its [`UndefinedPolicy`], so the same request always
//! produces the same result.

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::expr;
use crate::series::PlotSeries;

/// Outcome of validating a plot request.
pub type ValidationResult = std::result::Result<PlotSeries, ValidationError>;

/// The three inputs of a plot request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The function expression.
    Function,
    /// Lower bound of the x range.
    MinX,
    /// Upper bound of the x range.
    MaxX,
}

impl Field {
    /// All fields in dialog order.
    pub const ALL: [Field; 3] = [Field::Function, Field::MinX, Field::MaxX];

    /// Label shown next to the field.
    pub fn label(self) -> &'static str {
        match self {
            Field::Function => "Function to Plot",
            Field::MinX => "Minimum value of x",
            Field::MaxX => "Maximum value of x",
        }
    }

    /// Message reported when the field is left empty.
    pub fn empty_message(self) -> &'static str {
        match self {
            Field::Function => "Function textbox can't be empty!",
            Field::MinX => "Must provide minimum value for x",
            Field::MaxX => "Must provide maximum value of x",
        }
    }
}

/// Raw user input for one plot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotRequest {
    /// Function expression, e.g. `2x^2 + 1`.
    pub function_text: String,
    /// Lower bound of x.
    pub min_x: String,
    /// Upper bound of x.
    pub max_x: String,
}

impl PlotRequest {
    /// Create a request from its three inputs.
    pub fn new(
        function_text: impl Into<String>,
        min_x: impl Into<String>,
        max_x: impl Into<String>,
    ) -> Self {
        Self {
            function_text: function_text.into(),
            min_x: min_x.into(),
            max_x: max_x.into(),
        }
    }

    /// Text of the given field.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Function => &self.function_text,
            Field::MinX => &self.min_x,
            Field::MaxX => &self.max_x,
        }
    }
}

/// Integer x range with `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRange {
    min: i32,
    max: i32,
}

impl SampleRange {
    /// Create a range, rejecting empty and reversed ones.
    pub fn new(min: i32, max: i32) -> std::result::Result<Self, ValidationError> {
        if max > min {
            Ok(Self { min, max })
        } else {
            Err(ValidationError::RangeOrder { min, max })
        }
    }

    /// Lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }
}

/// What to do when the function is undefined at a sample point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UndefinedPolicy {
    /// Record the point as NaN and leave a gap in the plot. The request still
    /// fails if no point at all is defined.
    #[default]
    Gap,
    /// Fail the whole request at the first undefined point.
    Abort,
}

impl UndefinedPolicy {
    /// Name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            UndefinedPolicy::Gap => "gap",
            UndefinedPolicy::Abort => "abort",
        }
    }
}

impl fmt::Display for UndefinedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UndefinedPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gap" => Ok(UndefinedPolicy::Gap),
            "abort" => Ok(UndefinedPolicy::Abort),
            other => Err(format!("unknown policy '{}' (expected gap or abort)", other)),
        }
    }
}

/// Turns raw plot requests into sampled series.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlotRequestValidator {
    policy: UndefinedPolicy,
}

impl PlotRequestValidator {
    /// Create a validator with the given undefined-point policy.
    pub fn new(policy: UndefinedPolicy) -> Self {
        Self { policy }
    }

    /// The undefined-point policy in effect.
    pub fn policy(&self) -> UndefinedPolicy {
        self.policy
    }

    /// Validate a request and sample its function.
    pub fn validate(&self, request: &PlotRequest) -> ValidationResult {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|&field| request.field(field).is_empty())
        {
            return Err(ValidationError::EmptyField(field));
        }

        let expression = expr::parse(&expr::normalize(&request.function_text))?;

        let variables = expression.free_variables();
        if variables.len() != 1 || !variables.contains("x") {
            return Err(ValidationError::Variables {
                found: variables.into_iter().collect(),
            });
        }

        let min = parse_bound(request, Field::MinX)?;
        let max = parse_bound(request, Field::MaxX)?;
        let range = SampleRange::new(min, max)?;

        tracing::debug!(%expression, min, max, policy = %self.policy, "Sampling function");

        PlotSeries::sample(expression, range, self.policy)
    }
}

/// Validate a request with the default policy.
pub fn validate(request: &PlotRequest) -> ValidationResult {
    PlotRequestValidator::default().validate(request)
}

fn parse_bound(request: &PlotRequest, field: Field) -> std::result::Result<i32, ValidationError> {
    let text = request.field(field);
    text.trim()
        .parse::<i32>()
        .map_err(|_| ValidationError::RangeParse {
            field,
            text: text.to_string(),
        })
}
