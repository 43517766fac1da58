//! Path builder: normalized values to chart-space polyline vertices.
//!
//! Chart space has its origin at the bottom-left corner of the target
//! rectangle, x growing to the right and y growing upwards. The widget maps it
//! to screen space when painting.

use chrono::{DateTime, Utc};

/// A vertex of the chart polyline in chart space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &ChartPoint) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Decorative dot drawn on a vertex.
///
/// Equivalent to stacking filled discs of diameter `1..=diameter` on the vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub center: ChartPoint,
    pub diameter: f64,
}

/// Polyline plus optional markers for one layout size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinePath {
    points: Vec<ChartPoint>,
    markers: Vec<Marker>,
}

impl LinePath {
    /// Lay out `normalized` values (each in `[0, 1]`) inside a `width` x `height` area.
    ///
    /// X spacing is proportional to elapsed time when `timestamps` has exactly one
    /// entry per value and spans a non-zero duration, uniform otherwise. A single
    /// value is placed at `(width / 2, 0)`.
    pub fn build(
        normalized: &[f64],
        timestamps: Option<&[DateTime<Utc>]>,
        width: f64,
        height: f64,
    ) -> Self {
        let points = match normalized.len() {
            0 => Vec::new(),
            1 => vec![ChartPoint::new(width / 2.0, 0.0)],
            n => {
                let xs = timestamps
                    .and_then(|ts| timestamp_positions(ts, n, width))
                    .unwrap_or_else(|| uniform_positions(n, width));
                xs.into_iter()
                    .zip(normalized)
                    .map(|(x, v)| ChartPoint::new(x, v * height))
                    .collect()
            }
        };
        Self {
            points,
            markers: Vec::new(),
        }
    }

    /// Attach a marker of `dot_size` to every vertex. Sizes `<= 0` leave the path without markers.
    pub fn with_markers(mut self, dot_size: f64) -> Self {
        self.markers = if dot_size > 0.0 {
            self.points
                .iter()
                .map(|&center| Marker {
                    center,
                    diameter: dot_size.floor().max(1.0),
                })
                .collect()
        } else {
            Vec::new()
        };
        self
    }

    pub fn points(&self) -> &[ChartPoint] {
        &self.points
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Straight segments joining consecutive vertices.
    pub fn segments(&self) -> impl Iterator<Item = (ChartPoint, ChartPoint)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_points(self) -> Vec<ChartPoint> {
        self.points
    }
}

/// `x[i] = i * width / (n - 1)`; needs `n >= 2`.
fn uniform_positions(n: usize, width: f64) -> Vec<f64> {
    let dx = width / (n - 1) as f64;
    (0..n)
        .map(|i| if i == n - 1 { width } else { i as f64 * dx })
        .collect()
}

/// `x[i] = (t[i] - t[0]) / (t[n-1] - t[0]) * width`, or `None` when the
/// timestamps cannot drive the spacing.
fn timestamp_positions(timestamps: &[DateTime<Utc>], n: usize, width: f64) -> Option<Vec<f64>> {
    if timestamps.len() != n {
        log::trace!(
            "{} timestamps for {} values, falling back to uniform spacing",
            timestamps.len(),
            n
        );
        return None;
    }
    let first = *timestamps.first()?;
    let span = seconds_between(first, *timestamps.last()?);
    if span == 0.0 || !span.is_finite() {
        log::trace!("timestamps span no time, falling back to uniform spacing");
        return None;
    }
    Some(
        timestamps
            .iter()
            .map(|t| seconds_between(first, *t) * width / span)
            .collect(),
    )
}

fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to.signed_duration_since(from);
    match delta.num_nanoseconds() {
        Some(ns) => ns as f64 / 1e9,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_input_gives_empty_path() {
        let path = LinePath::build(&[], None, 100.0, 50.0);
        assert!(path.is_empty());
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn single_value_is_centered() {
        let path = LinePath::build(&[0.5], None, 120.0, 50.0);
        assert_eq!(path.points(), &[ChartPoint::new(60.0, 0.0)]);
        assert_eq!(path.segments().count(), 0);
    }

    #[test]
    fn uniform_spacing_ends_on_width() {
        let path = LinePath::build(&[0.0, 0.3, 0.7, 1.0], None, 90.0, 10.0);
        let xs: Vec<f64> = path.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 30.0, 60.0, 90.0]);
        assert_eq!(path.segments().count(), 3);
    }

    #[test]
    fn zero_span_timestamps_fall_back_to_uniform() {
        let t = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let path = LinePath::build(&[0.0, 1.0, 0.5], Some(&[t, t, t][..]), 100.0, 10.0);
        let xs: Vec<f64> = path.points().iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 50.0, 100.0]);
    }

    #[test]
    fn markers_only_for_positive_size() {
        let path = LinePath::build(&[0.0, 1.0], None, 10.0, 10.0);
        assert!(path.clone().with_markers(-1.0).markers().is_empty());
        let dotted = path.with_markers(6.0);
        assert_eq!(dotted.markers().len(), 2);
        assert_eq!(dotted.markers()[1].center, ChartPoint::new(10.0, 10.0));
        assert_eq!(dotted.markers()[0].diameter, 6.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let a = ChartPoint::new(0.0, 0.0);
        let b = ChartPoint::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }
}
