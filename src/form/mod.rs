//! The plot dialog's input form.
//!
//! Holds the three text fields and which part of the dialog has focus. The
//! form knows nothing about validation; [`Form::request`] hands the raw text
//! over as a [`PlotRequest`].

mod field;

pub use field::{InputMask, TextField};

use crate::validator::{Field, PlotRequest};

/// Part of the dialog receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// One of the text fields.
    Field(Field),
    /// The Plot button.
    PlotButton,
}

impl Focus {
    /// The next element in tab order.
    pub fn next(self) -> Self {
        match self {
            Focus::Field(Field::Function) => Focus::Field(Field::MinX),
            Focus::Field(Field::MinX) => Focus::Field(Field::MaxX),
            Focus::Field(Field::MaxX) => Focus::PlotButton,
            Focus::PlotButton => Focus::Field(Field::Function),
        }
    }

    /// The previous element in tab order.
    pub fn prev(self) -> Self {
        match self {
            Focus::Field(Field::Function) => Focus::PlotButton,
            Focus::Field(Field::MinX) => Focus::Field(Field::Function),
            Focus::Field(Field::MaxX) => Focus::Field(Field::MinX),
            Focus::PlotButton => Focus::Field(Field::MaxX),
        }
    }
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::Function)
    }
}

/// The three input fields.
#[derive(Debug, Clone)]
pub struct Form {
    function: TextField,
    min_x: TextField,
    max_x: TextField,
}

impl Form {
    /// Create an empty form.
    pub fn new() -> Self {
        Self {
            function: TextField::new(InputMask::Expression),
            min_x: TextField::new(InputMask::Integer),
            max_x: TextField::new(InputMask::Integer),
        }
    }

    /// Create a form pre-filled from a request. Text a field's mask refuses
    /// is left out and reported as a warning.
    pub fn from_request(request: &PlotRequest) -> Self {
        let mut form = Self::new();
        for field in Field::ALL {
            let text = request.field(field);
            if !form.field_mut(field).set_text(text) {
                tracing::warn!(field = field.label(), text, "Ignoring initial value");
            }
        }
        form
    }

    /// The given field.
    pub fn field(&self, field: Field) -> &TextField {
        match field {
            Field::Function => &self.function,
            Field::MinX => &self.min_x,
            Field::MaxX => &self.max_x,
        }
    }

    /// The given field, mutably.
    pub fn field_mut(&mut self, field: Field) -> &mut TextField {
        match field {
            Field::Function => &mut self.function,
            Field::MinX => &mut self.min_x,
            Field::MaxX => &mut self.max_x,
        }
    }

    /// Current contents as a plot request.
    pub fn request(&self) -> PlotRequest {
        PlotRequest::new(self.function.text(), self.min_x.text(), self.max_x.text())
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
