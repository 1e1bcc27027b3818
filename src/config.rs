//! Layout configuration constants for the plot dialog.

/// Configuration for the plot canvas.
#[derive(Debug, Clone)]
pub struct PlotLayoutConfig {
    /// Padding factor for Y-axis (0.1 = 10% margin).
    pub y_axis_padding_factor: f64,
    /// Number of labels on each axis.
    pub axis_label_count: usize,
}

impl Default for PlotLayoutConfig {
    fn default() -> Self {
        Self {
            y_axis_padding_factor: 0.1,
            axis_label_count: 5,
        }
    }
}

/// Configuration for the input form.
#[derive(Debug, Clone)]
pub struct DialogLayoutConfig {
    /// Width of the field label column in characters.
    pub label_width: u16,
    /// Minimum height of the plot canvas.
    pub min_canvas_height: u16,
}

impl Default for DialogLayoutConfig {
    fn default() -> Self {
        Self {
            label_width: 22,
            min_canvas_height: 8,
        }
    }
}

/// Combined layout configuration.
#[derive(Debug, Clone, Default)]
pub struct LayoutConfig {
    /// Configuration for the plot canvas.
    pub plot: PlotLayoutConfig,
    /// Configuration for the input form.
    pub dialog: DialogLayoutConfig,
}
