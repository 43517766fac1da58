pub mod chart_data;
pub mod point;

pub use chart_data::{normalize, ChartData};
pub use point::ChartDataPoint;
