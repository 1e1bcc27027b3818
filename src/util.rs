//! Utility functions for fnplot.

use std::io::Write;

use crate::clipboard;
use crate::error::{FnplotError, Result};
use crate::series::PlotSeries;
use crate::validator::{PlotRequest, PlotRequestValidator};

/// Format a series as CSV with an `x,y` header. Undefined samples are `NaN`.
pub fn format_series_csv(series: &PlotSeries) -> String {
    let mut text = String::from("x,y\n");
    for (x, y) in series.points() {
        text.push_str(&format!("{},{}\n", x, y));
    }
    text
}

/// Copy the plotted series to clipboard.
pub fn copy_series(series: Option<&PlotSeries>) -> Result<()> {
    let series = series.ok_or(FnplotError::NothingPlotted)?;

    let mut text = format!("# f(x) = {}\n", series.expression());
    text.push_str(&format_series_csv(series));

    clipboard::copy_to_clipboard(&text)
}

/// Validate a request and write the sampled series as CSV.
pub fn write_series<W: Write>(
    out: &mut W,
    request: &PlotRequest,
    validator: &PlotRequestValidator,
) -> Result<()> {
    let series = validator.validate(request)?;
    out.write_all(format_series_csv(&series).as_bytes())?;
    out.flush()?;
    Ok(())
}
