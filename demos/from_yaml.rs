//! Example: chart styled by a YAML settings file
//!
//! What it demonstrates
//! - Building the data in code and reading style/interaction with `load_settings_from_path`.
//!
//! How to run
//! ```bash
//! cargo run --example from_yaml -- demos/chart.yaml
//! ```

use std::path::PathBuf;

use linechart::{load_settings_from_path, run_line_chart, ChartData, ChartDataPoint};

fn weekly_steps() -> ChartData {
    let days = [
        ("Monday", 4200.0),
        ("Tuesday", 8100.0),
        ("Wednesday", 6650.0),
        ("Thursday", 10230.0),
        ("Friday", 3900.0),
        ("Saturday", 12040.0),
        ("Sunday", 9000.0),
    ];
    ChartData::new(
        days.into_iter()
            .map(|(day, steps)| ChartDataPoint::new(steps).with_label(day))
            .collect(),
    )
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/chart.yaml")));
    let cfg = load_settings_from_path(&path)?.into_config(weekly_steps());
    run_line_chart(cfg)?;
    Ok(())
}
