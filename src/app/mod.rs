//! Standalone window for a single line chart.
//!
//! | Sub-module         | Responsibility |
//! | ------------------ | -------------- |
//! | [`line_chart_app`] | [`LineChartApp`] (eframe) wrapper around a [`LineChartView`](crate::LineChartView) |
//! | [`run`]            | Top-level [`run_line_chart()`] entry points |

mod line_chart_app;
mod run;

pub use line_chart_app::LineChartApp;
pub use run::{run_line_chart, run_line_chart_view};
