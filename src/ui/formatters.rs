//! Shared formatting utilities for UI components.

/// Format axis label with smart precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// `count` evenly spaced labels from `min` to `max`.
pub fn axis_labels(min: f64, max: f64, count: usize) -> Vec<String> {
    match count {
        0 => Vec::new(),
        1 => vec![format_axis_label((min + max) / 2.0)],
        _ => (0..count)
            .map(|i| min + (max - min) * i as f64 / (count - 1) as f64)
            .map(format_axis_label)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pick_precision_by_magnitude() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(250.0), "250");
        assert_eq!(format_axis_label(2.5), "2.5");
        assert_eq!(format_axis_label(0.25), "0.25");
        assert_eq!(format_axis_label(123456.0), "1.2e5");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn labels_span_the_axis() {
        assert_eq!(axis_labels(-2.0, 2.0, 5), vec!["-2.0", "-1.0", "0", "1.0", "2.0"]);
        assert_eq!(axis_labels(0.0, 4.0, 1), vec!["2.0"]);
        assert!(axis_labels(0.0, 4.0, 0).is_empty());
    }
}
