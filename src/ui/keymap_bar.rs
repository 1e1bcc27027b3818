//! Keymap help bar UI component.

use crate::form::Focus;
use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, focus: Focus, colors: &ThemeColors) {
    let keymap_text = match focus {
        Focus::PlotButton => "Enter/Space:plot | Tab/↓:next | S-Tab/↑:prev | Ctrl-Y:copy series | Ctrl-T:theme | Esc:quit",
        Focus::Field(_) => "Enter:plot | Tab/↓:next | S-Tab/↑:prev | Ctrl-V:paste | Ctrl-Y:copy series | Ctrl-T:theme | Esc:quit",
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.axis).bg(colors.bg));

    f.render_widget(paragraph, area);
}
