//! Plot canvas.

use super::formatters::axis_labels;
use super::ThemeColors;
use crate::config::PlotLayoutConfig;
use crate::series::PlotSeries;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

/// Draw the plotted series, or a hint when nothing has been plotted.
pub(super) fn draw_chart(
    f: &mut Frame<'_>,
    area: Rect,
    series: Option<&PlotSeries>,
    config: &PlotLayoutConfig,
    colors: &ThemeColors,
) {
    let Some(series) = series else {
        draw_empty(f, area, colors);
        return;
    };

    let range = series.range();
    let (x_min, x_max) = (range.min() as f64, range.max() as f64);
    let (y_min, y_max) = padded_bounds(series.y_bounds(), config.y_axis_padding_factor);

    // One line per run of defined samples so undefined points show as gaps
    let segments = series.segments();
    let datasets: Vec<Dataset<'_>> = segments
        .iter()
        .map(|&segment| {
            let graph_type = if segment.len() > 1 {
                GraphType::Line
            } else {
                GraphType::Scatter
            };
            Dataset::default()
                .marker(Marker::Braille)
                .graph_type(graph_type)
                .style(Style::default().fg(colors.plot))
                .data(segment)
        })
        .collect();

    let x_axis = Axis::default()
        .title("x")
        .style(Style::default().fg(colors.axis))
        .bounds([x_min, x_max])
        .labels(axis_labels(x_min, x_max, config.axis_label_count));

    let y_axis = Axis::default()
        .title("y")
        .style(Style::default().fg(colors.axis))
        .bounds([y_min, y_max])
        .labels(axis_labels(y_min, y_max, config.axis_label_count));

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" f(x) = {} ", series.expression()))
                .title_style(Style::default().fg(colors.label))
                .style(Style::default().bg(colors.bg)),
        )
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn draw_empty(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new("Enter a function of x and a range, then press Enter to plot")
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(colors.axis).bg(colors.bg))
        .block(
            Block::default()
                .title(" Plot ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border)),
        );

    f.render_widget(paragraph, area);
}

/// Y-axis bounds with a margin. Flat series get a unit margin instead.
fn padded_bounds(bounds: Option<(f64, f64)>, padding_factor: f64) -> (f64, f64) {
    match bounds {
        Some((lo, hi)) if hi - lo > f64::EPSILON * hi.abs().max(1.0) => {
            let pad = (hi - lo) * padding_factor;
            (lo - pad, hi + pad)
        },
        Some((lo, hi)) => (lo - 1.0, hi + 1.0),
        None => (-1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_widens_both_ends() {
        assert_eq!(padded_bounds(Some((0.0, 10.0)), 0.1), (-1.0, 11.0));
    }

    #[test]
    fn flat_series_get_unit_margin() {
        assert_eq!(padded_bounds(Some((3.0, 3.0)), 0.1), (2.0, 4.0));
        assert_eq!(padded_bounds(None, 0.1), (-1.0, 1.0));
    }
}
