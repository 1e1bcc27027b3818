//! Application state and logic.

use std::fmt;
use std::str::FromStr;

use crate::clipboard;
use crate::config::LayoutConfig;
use crate::form::{Focus, Form, TextField};
use crate::series::PlotSeries;
use crate::util;
use crate::validator::PlotRequestValidator;

/// Status line text shown before the first action.
pub const INITIAL_STATUS: &str = "Messages and errors go here";

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Theme::GruvboxDark => "dark",
            Theme::GruvboxLight => "light",
        })
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Ok(Theme::GruvboxDark),
            "light" => Ok(Theme::GruvboxLight),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

/// How the status line is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// Neutral information.
    Info,
    /// The last action succeeded.
    Success,
    /// The last action failed.
    Error,
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Input fields.
    pub form: Form,
    /// Focused dialog element.
    pub focus: Focus,
    /// Status message.
    pub status: String,
    /// Status message kind.
    pub status_kind: StatusKind,
    /// Last successfully plotted series.
    pub series: Option<PlotSeries>,
    /// Current theme.
    pub theme: Theme,
    /// Layout constants.
    pub layout: LayoutConfig,
    validator: PlotRequestValidator,
}

impl App {
    /// Create a new application instance.
    pub fn new(form: Form, validator: PlotRequestValidator, theme: Theme) -> Self {
        Self {
            form,
            focus: Focus::default(),
            status: INITIAL_STATUS.to_string(),
            status_kind: StatusKind::Info,
            series: None,
            theme,
            layout: LayoutConfig::default(),
            validator,
        }
    }

    /// Validate the form and plot the result.
    ///
    /// On failure the previous plot stays on screen and focus moves to the
    /// field that needs fixing.
    pub fn plot(&mut self) -> bool {
        let request = self.form.request();
        match self.validator.validate(&request) {
            Ok(series) => {
                let undefined = series.undefined_count();
                tracing::info!(
                    expression = %series.expression(),
                    min = series.range().min(),
                    max = series.range().max(),
                    undefined,
                    policy = %self.validator.policy(),
                    "Plotted function"
                );
                let message = if undefined == 0 {
                    "Showing plot!".to_string()
                } else {
                    format!("Showing plot! ({} undefined points skipped)", undefined)
                };
                self.set_success(message);
                self.series = Some(series);
                true
            },
            Err(e) => {
                tracing::warn!(function = %request.function_text, "Plot rejected: {}", e);
                self.focus = Focus::Field(e.field());
                self.set_error(e.to_string());
                false
            },
        }
    }

    /// The focused text field, if focus is on one.
    pub fn focused_field(&self) -> Option<&TextField> {
        match self.focus {
            Focus::Field(field) => Some(self.form.field(field)),
            Focus::PlotButton => None,
        }
    }

    fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            Focus::Field(field) => Some(self.form.field_mut(field)),
            Focus::PlotButton => None,
        }
    }

    /// Move focus forward.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Move focus backward.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Type a character into the focused field.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            if !field.insert(c) {
                tracing::debug!(%c, "Character rejected by input mask");
            }
        }
    }

    /// Delete before the cursor.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.backspace();
        }
    }

    /// Delete under the cursor.
    pub fn delete(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.delete();
        }
    }

    /// Move the cursor left.
    pub fn cursor_left(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_left();
        }
    }

    /// Move the cursor right.
    pub fn cursor_right(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_right();
        }
    }

    /// Move the cursor to the start of the field.
    pub fn cursor_home(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_home();
        }
    }

    /// Move the cursor to the end of the field.
    pub fn cursor_end(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.move_end();
        }
    }

    /// Insert text into the focused field through its mask.
    pub fn paste(&mut self, text: &str) {
        let Some(field) = self.focused_field_mut() else {
            self.set_error("Select a text field to paste into".to_string());
            return;
        };
        let total = text.chars().count();
        let kept = field.insert_str(text);
        if kept == total {
            self.set_info(format!("Pasted {} characters", kept));
        } else {
            self.set_info(format!(
                "Pasted {} of {} characters (others not allowed here)",
                kept, total
            ));
        }
    }

    /// Paste from the system clipboard.
    pub fn paste_from_clipboard(&mut self) {
        match clipboard::paste_from_clipboard() {
            Ok(text) => self.paste(&text),
            Err(e) => self.set_error(format!("Paste failed: {}", e)),
        }
    }

    /// Copy the plotted series to the system clipboard as CSV.
    pub fn copy_series(&mut self) {
        match util::copy_series(self.series.as_ref()) {
            Ok(()) => self.set_success("Series copied!".to_string()),
            Err(e) => self.set_error(format!("Copy failed: {}", e)),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_info(format!("Theme: {}", self.theme.name()));
    }

    fn set_info(&mut self, message: String) {
        self.status = message;
        self.status_kind = StatusKind::Info;
    }

    fn set_success(&mut self, message: String) {
        self.status = message;
        self.status_kind = StatusKind::Success;
    }

    fn set_error(&mut self, message: String) {
        self.status = message;
        self.status_kind = StatusKind::Error;
    }
}
