//! Example: irregular timestamps, labels and haptic pulses
//!
//! What it demonstrates
//! - Time-proportional x spacing (every point carries a timestamp).
//! - Labels in the secondary line, prefix/suffix and precision for the value.
//! - A two-color gradient line with vertex dots.
//! - Haptic pulses forwarded to the log (run with `RUST_LOG=info`).
//!
//! How to run
//! ```bash
//! RUST_LOG=info cargo run --example timestamps
//! ```

use chrono::{Duration, Utc};
use eframe::egui::Color32;
use linechart::{
    run_line_chart_view, ChartData, ChartDataPoint, InteractionFlags, LabelsAlignment,
    LineChartConfig, LineChartStyle, LineChartView, LogHaptics,
};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let start = Utc::now() - Duration::days(30);
    // (day offset, price)
    let samples = [(0, 101.2), (1, 99.8), (2, 102.4), (6, 108.9), (7, 107.1), (15, 95.3), (29, 112.6)];
    let data: ChartData = samples
        .iter()
        .map(|&(day, price)| {
            let t = start + Duration::days(day);
            ChartDataPoint::new(price)
                .with_timestamp(t)
                .with_label(t.format("%b %d").to_string())
        })
        .collect();

    let style = LineChartStyle {
        labels_alignment: LabelsAlignment::Center,
        precision: 1,
        prefix: Some("$".to_string()),
        line_color: Color32::from_rgb(52, 199, 89),
        line_second_color: Some(Color32::from_rgb(0, 122, 255)),
        dots_width: Some(8.0),
        ..Default::default()
    };
    let cfg = LineChartConfig::new(data)
        .with_title("Price history")
        .with_style(style)
        .with_interaction(InteractionFlags {
            drag_gesture: true,
            haptic_feedback: true,
        });

    run_line_chart_view(LineChartView::new(cfg).with_haptics(LogHaptics), None)
}
