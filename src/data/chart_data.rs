//! The ordered dataset of a chart and the pure views derived from it.

use chrono::{DateTime, Utc};

use super::point::ChartDataPoint;

/// Ordered sequence of [`ChartDataPoint`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    points: Vec<ChartDataPoint>,
}

impl ChartData {
    pub fn new(points: Vec<ChartDataPoint>) -> Self {
        Self { points }
    }

    /// Build a dataset from bare values.
    pub fn from_values(values: impl IntoIterator<Item = f64>) -> Self {
        values.into_iter().map(ChartDataPoint::new).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ChartDataPoint] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&ChartDataPoint> {
        self.points.get(index)
    }

    pub fn push(&mut self, point: ChartDataPoint) {
        self.points.push(point);
    }

    /// Raw values in dataset order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Per-point labels in dataset order (`None` where a point has no label).
    pub fn labels(&self) -> Vec<Option<&str>> {
        self.points.iter().map(|p| p.label.as_deref()).collect()
    }

    /// Timestamps of all points, or `None` unless every point carries one.
    pub fn timestamps(&self) -> Option<Vec<DateTime<Utc>>> {
        let stamps: Vec<DateTime<Utc>> = self.points.iter().filter_map(|p| p.timestamp).collect();
        if stamps.len() == self.points.len() {
            Some(stamps)
        } else {
            log::trace!(
                "partial timestamp coverage ({}/{}), using uniform spacing",
                stamps.len(),
                self.points.len()
            );
            None
        }
    }

    /// Values rescaled into `[0, 1]`, see [`normalize`].
    pub fn normalized(&self) -> Vec<f64> {
        normalize(&self.values())
    }
}

impl FromIterator<ChartDataPoint> for ChartData {
    fn from_iter<I: IntoIterator<Item = ChartDataPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<ChartDataPoint>> for ChartData {
    fn from(points: Vec<ChartDataPoint>) -> Self {
        Self::new(points)
    }
}

impl From<Vec<f64>> for ChartData {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

/// Min-max normalization of `values` into `[0, 1]`.
///
/// When every value is equal (max == min) each one maps to `0.5`.
///
/// ```
/// # use linechart::data::normalize;
/// assert_eq!(normalize(&[1.0, 2.0, 3.0]), vec![0.0, 0.5, 1.0]);
/// assert_eq!(normalize(&[4.0, 4.0]), vec![0.5, 0.5]);
/// ```
pub fn normalize(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    values
        .iter()
        .map(|v| if span != 0.0 { (v - min) / span } else { 0.5 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn normalize_empty_is_empty() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn normalize_stays_in_unit_range() {
        let out = normalize(&[-3.5, 10.0, 0.25, 7.0, -1.0]);
        assert!(out.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 1.0);
    }

    #[test]
    fn normalize_single_value_is_half() {
        assert_eq!(normalize(&[42.0]), vec![0.5]);
    }

    #[test]
    fn timestamps_require_full_coverage() {
        let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut data = ChartData::new(vec![
            ChartDataPoint::new(1.0).with_timestamp(t0),
            ChartDataPoint::new(2.0),
        ]);
        assert!(data.timestamps().is_none());

        data = ChartData::new(vec![
            ChartDataPoint::new(1.0).with_timestamp(t0),
            ChartDataPoint::new(2.0).with_timestamp(t0 + chrono::Duration::seconds(5)),
        ]);
        assert_eq!(data.timestamps().map(|t| t.len()), Some(2));
    }

    #[test]
    fn labels_follow_points() {
        let data = ChartData::new(vec![
            ChartDataPoint::new(1.0).with_label("Mon"),
            ChartDataPoint::new(2.0),
        ]);
        assert_eq!(data.labels(), vec![Some("Mon"), None]);
    }
}
