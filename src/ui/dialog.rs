//! Input form, Plot button and status line.

use super::ThemeColors;
use crate::app::App;
use crate::form::Focus;
use crate::validator::Field;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the three labelled input fields.
pub(super) fn draw_form(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 3])
        .split(inner);

    for (field, row) in Field::ALL.into_iter().zip(rows.iter()) {
        draw_field(f, app, field, *row, colors);
    }
}

fn draw_field(f: &mut Frame<'_>, app: &App, field: Field, area: Rect, colors: &ThemeColors) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app.layout.dialog.label_width),
            Constraint::Min(1),
        ])
        .split(area);

    let focused = app.focus == Focus::Field(field);
    let label_style = if focused {
        Style::default().fg(colors.label).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.label)
    };
    f.render_widget(Paragraph::new(field.label()).style(label_style), columns[0]);

    let input = app.form.field(field);
    let value_area = columns[1];

    // Scroll horizontally so the cursor stays visible
    let cursor_column = u16::try_from(input.cursor_column()).unwrap_or(u16::MAX);
    let offset = cursor_column.saturating_add(1).saturating_sub(value_area.width);

    let paragraph = Paragraph::new(input.text())
        .scroll((0, offset))
        .style(Style::default().fg(colors.text).bg(colors.field_bg));
    f.render_widget(paragraph, value_area);

    if focused {
        f.set_cursor_position((
            value_area.x.saturating_add(cursor_column.saturating_sub(offset)),
            value_area.y,
        ));
    }
}

/// Draw the Plot button.
pub(super) fn draw_button(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let style = if app.focus == Focus::PlotButton {
        Style::default()
            .fg(colors.focus_fg)
            .bg(colors.focus_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors.text).bg(colors.field_bg)
    };

    let width = 10.min(area.width);
    let button = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let paragraph = Paragraph::new("[ Plot ]")
        .alignment(Alignment::Center)
        .style(style);
    f.render_widget(paragraph, button);
}

/// Draw the status line, colored by outcome.
pub(super) fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(format!(" {}", app.status)).style(
        Style::default()
            .fg(colors.status(app.status_kind))
            .bg(colors.status_bg),
    );

    f.render_widget(paragraph, area);
}
