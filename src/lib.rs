//! linechart crate root: re-exports and module wiring.
//!
//! An interactive line chart widget for egui/eframe. Values are min-max
//! normalized, laid out as a polyline inside the available rectangle and can be
//! inspected by pressing and dragging across the chart, which moves an
//! indicator to the nearest data point and shows its value and label.
//!
//! - `data`: data points, datasets and normalization
//! - `path`: chart-space polyline layout
//! - `indicator`: drag hit-testing and edge-triggered haptic pulses
//! - `labels`: value/label text for the selected point
//! - `haptics`: haptic feedback hooks
//! - `config`: style and interaction configuration
//! - `settings`: style/interaction settings files (JSON/YAML)
//! - `view`: the egui widget
//! - `app`: standalone eframe window

pub mod app;
pub mod config;
pub mod data;
pub mod haptics;
pub mod indicator;
pub mod labels;
pub mod path;
pub mod settings;
pub mod view;

// Public re-exports for a compact external API
pub use app::{run_line_chart, run_line_chart_view, LineChartApp};
pub use config::{DisplayMode, InteractionFlags, LabelsAlignment, LineChartConfig, LineChartStyle};
pub use data::{ChartData, ChartDataPoint};
pub use haptics::{channel_haptics, HapticFeedback, HapticPulse, LogHaptics, NoHaptics};
pub use indicator::{IndicatorTracker, LocateOutcome, Located, Selection};
pub use labels::LabelText;
pub use path::{ChartPoint, LinePath, Marker};
pub use settings::{load_settings_from_path, ChartSettings, SettingsError};
pub use view::LineChartView;
