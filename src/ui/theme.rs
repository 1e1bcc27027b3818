//! Color themes for the UI.

use crate::app::{StatusKind, Theme};
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Field label color.
    pub label: Color,
    /// Border color.
    pub border: Color,
    /// Input field background color.
    pub field_bg: Color,
    /// Focused element foreground color.
    pub focus_fg: Color,
    /// Focused element background color.
    pub focus_bg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Success message color.
    pub success: Color,
    /// Error message color.
    pub error: Color,
    /// Plotted line color.
    pub plot: Color,
    /// Axis and title color.
    pub axis: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                label: Color::Rgb(250, 189, 47),
                border: Color::Rgb(102, 92, 84),
                field_bg: Color::Rgb(60, 56, 54),
                focus_fg: Color::Rgb(40, 40, 40),
                focus_bg: Color::Rgb(251, 184, 108),
                status_bg: Color::Rgb(50, 48, 47),
                success: Color::Rgb(184, 187, 38),
                error: Color::Rgb(251, 73, 52),
                plot: Color::Rgb(131, 165, 152),
                axis: Color::Rgb(168, 153, 132),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                label: Color::Rgb(181, 118, 20),
                border: Color::Rgb(213, 196, 161),
                field_bg: Color::Rgb(235, 219, 178),
                focus_fg: Color::Rgb(251, 245, 234),
                focus_bg: Color::Rgb(175, 58, 3),
                status_bg: Color::Rgb(242, 229, 188),
                success: Color::Rgb(121, 116, 14),
                error: Color::Rgb(157, 0, 6),
                plot: Color::Rgb(7, 102, 120),
                axis: Color::Rgb(124, 111, 100),
            },
        }
    }

    /// Foreground color for a status message.
    pub fn status(&self, kind: StatusKind) -> Color {
        match kind {
            StatusKind::Info => self.text,
            StatusKind::Success => self.success,
            StatusKind::Error => self.error,
        }
    }
}
