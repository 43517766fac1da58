//! Configuration types for the line chart widget.

use eframe::egui::{self, Color32};
use serde::{Deserialize, Serialize};

use crate::data::ChartData;

// ─────────────────────────────────────────────────────────────────────────────
// Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal placement of the value/label block above the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelsAlignment {
    #[default]
    Left,
    Center,
    Right,
}

impl LabelsAlignment {
    pub fn to_egui(self) -> egui::Align {
        match self {
            LabelsAlignment::Left => egui::Align::Min,
            LabelsAlignment::Center => egui::Align::Center,
            LabelsAlignment::Right => egui::Align::Max,
        }
    }
}

/// What the main label line shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Formatted value in the main line, point label in the secondary line.
    #[default]
    Default,
    /// Point label in the main line, no secondary line.
    NoValues,
}

// ─────────────────────────────────────────────────────────────────────────────
// Style
// ─────────────────────────────────────────────────────────────────────────────

/// Visual options of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartStyle {
    /// Main label color. `None` follows the egui text color.
    pub label_color: Option<Color32>,
    /// Secondary label color. `None` follows the weak egui text color.
    pub secondary_label_color: Option<Color32>,
    pub labels_alignment: LabelsAlignment,
    /// Fraction digits of the formatted value.
    pub precision: usize,
    /// Text shown before the value.
    pub prefix: Option<String>,
    /// Text shown after the value.
    pub suffix: Option<String>,

    pub indicator_color: Color32,
    /// Indicator diameter in points.
    pub indicator_size: f32,

    /// Gradient start (left end of the line).
    pub line_color: Color32,
    /// Gradient end (right end of the line). `None` means a solid `line_color`.
    pub line_second_color: Option<Color32>,
    pub line_width: f32,

    /// Vertex dot diameter; `None` draws no dots.
    pub dots_width: Option<f32>,

    pub display_mode: DisplayMode,
}

impl LineChartStyle {
    /// Color at the right end of the line.
    pub fn line_end_color(&self) -> Color32 {
        self.line_second_color.unwrap_or(self.line_color)
    }
}

impl Default for LineChartStyle {
    fn default() -> Self {
        Self {
            label_color: None,
            secondary_label_color: None,
            labels_alignment: LabelsAlignment::Left,
            precision: 2,
            prefix: None,
            suffix: None,
            indicator_color: Color32::from_rgb(0, 122, 255),
            indicator_size: 20.0,
            line_color: Color32::from_rgb(0, 122, 255),
            line_second_color: None,
            line_width: 3.0,
            dots_width: None,
            display_mode: DisplayMode::Default,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction
// ─────────────────────────────────────────────────────────────────────────────

/// Interaction switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionFlags {
    /// Press-and-drag moves the indicator and shows the labels. Default: `true`.
    pub drag_gesture: bool,
    /// Request haptic pulses on limit/segment edges. Default: `false`.
    pub haptic_feedback: bool,
}

impl Default for InteractionFlags {
    fn default() -> Self {
        Self {
            drag_gesture: true,
            haptic_feedback: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// LineChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Everything a [`LineChartView`](crate::LineChartView) needs.
///
/// | Field         | Purpose |
/// |---------------|---------|
/// | `data`        | Ordered data points |
/// | `style`       | Colors, widths, label formatting |
/// | `interaction` | Drag gesture and haptic switches |
/// | `title`       | Native window title when run standalone |
#[derive(Debug, Clone, PartialEq)]
pub struct LineChartConfig {
    pub data: ChartData,
    pub style: LineChartStyle,
    pub interaction: InteractionFlags,
    pub title: String,
}

impl LineChartConfig {
    pub fn new(data: impl Into<ChartData>) -> Self {
        Self {
            data: data.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: LineChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_interaction(mut self, interaction: InteractionFlags) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            data: ChartData::default(),
            style: LineChartStyle::default(),
            interaction: InteractionFlags::default(),
            title: "Line chart".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_color_falls_back_to_line_color() {
        let mut style = LineChartStyle::default();
        assert_eq!(style.line_end_color(), style.line_color);
        style.line_second_color = Some(Color32::RED);
        assert_eq!(style.line_end_color(), Color32::RED);
    }

    #[test]
    fn defaults_enable_drag_only() {
        let cfg = LineChartConfig::new(vec![1.0, 2.0]);
        assert!(cfg.interaction.drag_gesture);
        assert!(!cfg.interaction.haptic_feedback);
        assert_eq!(cfg.data.len(), 2);
        assert_eq!(cfg.style.precision, 2);
    }
}
