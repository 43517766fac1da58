//! Example: the smallest possible chart
//!
//! What it demonstrates
//! - Building a `LineChartConfig` from bare values.
//! - Press and drag on the line to move the indicator and show the value.
//!
//! How to run
//! ```bash
//! cargo run --example basic
//! ```

use linechart::{run_line_chart, LineChartConfig};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let values = vec![12.0, 15.5, 14.0, 18.25, 21.0, 19.5, 23.75, 22.0];
    let cfg = LineChartConfig::new(values).with_title("Basic line chart");
    run_line_chart(cfg)
}
