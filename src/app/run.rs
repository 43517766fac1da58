//! Entry points for running a line chart as a native window.

use eframe::egui;

use crate::config::LineChartConfig;
use crate::view::LineChartView;

use super::line_chart_app::LineChartApp;

/// Open a native window showing the chart described by `cfg`.
///
/// Blocks until the window is closed.
pub fn run_line_chart(cfg: LineChartConfig) -> eframe::Result<()> {
    run_line_chart_view(LineChartView::new(cfg), None)
}

/// Like [`run_line_chart`] but with a prepared view (e.g. with haptics
/// installed) and optional eframe window options.
pub fn run_line_chart_view(
    view: LineChartView,
    native_options: Option<eframe::NativeOptions>,
) -> eframe::Result<()> {
    let title = view.config().title.clone();
    let mut opts = native_options.unwrap_or_default();

    // Default window size unless the caller set one.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(420.0, 360.0));
    }

    log::debug!("opening line chart window {title:?}");
    let app = LineChartApp::new(view);
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
