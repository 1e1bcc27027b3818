//! User interface rendering.
//!
//! Layout, top to bottom: plot canvas, input form, Plot button, status line
//! and key map bar.

mod chart;
mod dialog;
mod formatters;
mod keymap_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

pub use formatters::{axis_labels, format_axis_label};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    f.render_widget(Block::default().style(Style::default().bg(colors.bg)), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(app.layout.dialog.min_canvas_height),
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    chart::draw_chart(
        f,
        chunks[0],
        app.series.as_ref(),
        &app.layout.plot,
        &colors,
    );
    dialog::draw_form(f, app, chunks[1], &colors);
    dialog::draw_button(f, app, chunks[2], &colors);
    dialog::draw_status(f, app, chunks[3], &colors);
    keymap_bar::draw_keymap(f, chunks[4], app.focus, &colors);
}
