//! Text shown above the chart for the selected data index.

use crate::config::{DisplayMode, LineChartStyle};
use crate::data::ChartData;

/// Main and secondary label lines for one index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelText {
    pub main: Option<String>,
    pub secondary: Option<String>,
}

impl LabelText {
    /// Resolve both lines for `index`. Out-of-range indices give empty lines.
    pub fn for_index(data: &ChartData, style: &LineChartStyle, index: usize) -> Self {
        Self {
            main: main_label(data, style, index),
            secondary: secondary_label(data, style, index),
        }
    }
}

/// `prefix + value + suffix` in [`DisplayMode::Default`], the point label in
/// [`DisplayMode::NoValues`].
pub fn main_label(data: &ChartData, style: &LineChartStyle, index: usize) -> Option<String> {
    let point = data.get(index)?;
    match style.display_mode {
        DisplayMode::Default => Some(format!(
            "{}{}{}",
            style.prefix.as_deref().unwrap_or(""),
            format_value(point.value, style.precision),
            style.suffix.as_deref().unwrap_or("")
        )),
        DisplayMode::NoValues => point.label.clone(),
    }
}

/// The point label in [`DisplayMode::Default`], nothing otherwise.
pub fn secondary_label(data: &ChartData, style: &LineChartStyle, index: usize) -> Option<String> {
    match style.display_mode {
        DisplayMode::Default => data.get(index)?.label.clone(),
        DisplayMode::NoValues => None,
    }
}

/// Fixed-point formatting with `precision` fraction digits.
///
/// ```
/// # use linechart::labels::format_value;
/// assert_eq!(format_value(3.14159, 2), "3.14");
/// assert_eq!(format_value(2.0, 0), "2");
/// ```
pub fn format_value(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    // avoid "-0.00"
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}
