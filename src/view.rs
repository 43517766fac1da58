//! egui widget: labels, line, markers and the draggable indicator.
//!
//! Layout and pointer handling per frame:
//! 1. allocate the chart rectangle,
//! 2. rebuild the [`LinePath`] if the data or the rectangle size changed and
//!    publish its vertices to the [`IndicatorTracker`],
//! 3. paint the line, then feed the pointer to the tracker while the primary
//!    button is held on the chart,
//! 4. paint the indicator on top.

use eframe::egui::{self, Color32, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};

use crate::config::LineChartConfig;
use crate::haptics::{HapticFeedback, NoHaptics};
use crate::indicator::{IndicatorTracker, Located, Selection};
use crate::labels::LabelText;
use crate::path::{ChartPoint, LinePath};

/// Space between the label block and the line.
const LABELS_SPACING: f32 = 10.0;
/// Smallest chart area we lay out.
const MIN_CHART_SIZE: Vec2 = Vec2::new(16.0, 16.0);
/// Used for a dimension the parent leaves unbounded (scroll areas, auto-sized windows).
const DEFAULT_CHART_SIZE: Vec2 = Vec2::new(300.0, 200.0);

/// Map a chart-space point (origin bottom-left, y up) into `rect`.
pub fn chart_to_screen(rect: Rect, p: ChartPoint) -> Pos2 {
    egui::pos2(rect.left() + p.x as f32, rect.bottom() - p.y as f32)
}

/// Chart rectangle size for the space `available` in the parent ui.
fn chart_size(available: Vec2) -> Vec2 {
    let finite_or = |v: f32, default: f32| if v.is_finite() { v } else { default };
    egui::vec2(
        finite_or(available.x, DEFAULT_CHART_SIZE.x),
        finite_or(available.y, DEFAULT_CHART_SIZE.y),
    )
    .max(MIN_CHART_SIZE)
}

/// Chart-space x of a screen x inside `rect`.
pub fn screen_to_chart_x(rect: Rect, x: f32) -> f64 {
    (x - rect.left()) as f64
}

struct CachedLayout {
    size: Vec2,
    path: LinePath,
}

/// Interactive line chart.
///
/// ```
/// # use linechart::{LineChartConfig, LineChartView};
/// fn chart_panel(ui: &mut eframe::egui::Ui, view: &mut LineChartView) {
///     ui.add(view);
/// }
/// let view = LineChartView::new(LineChartConfig::new(vec![1.0, 3.0, 2.0]));
/// assert!(view.selection().is_none());
/// ```
pub struct LineChartView {
    config: LineChartConfig,
    normalized: Vec<f64>,
    timestamps: Option<Vec<chrono::DateTime<chrono::Utc>>>,
    cached: Option<CachedLayout>,
    tracker: IndicatorTracker,
    haptics: Box<dyn HapticFeedback>,
}

impl LineChartView {
    pub fn new(config: LineChartConfig) -> Self {
        let mut view = Self {
            normalized: Vec::new(),
            timestamps: None,
            cached: None,
            tracker: IndicatorTracker::new(),
            haptics: Box::new(NoHaptics),
            config,
        };
        view.refresh_data();
        view
    }

    /// Install the haptic collaborator. Pulses only reach it when
    /// `interaction.haptic_feedback` is on.
    pub fn with_haptics(mut self, haptics: impl HapticFeedback + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    pub fn config(&self) -> &LineChartConfig {
        &self.config
    }

    /// Swap the whole configuration; the next frame lays the chart out again.
    pub fn set_config(&mut self, config: LineChartConfig) {
        self.config = config;
        self.refresh_data();
    }

    pub fn set_data(&mut self, data: impl Into<crate::data::ChartData>) {
        self.config.data = data.into();
        self.refresh_data();
    }

    /// Currently selected data index and indicator position (chart space).
    pub fn selection(&self) -> Option<Selection> {
        self.tracker.selection()
    }

    pub fn is_indicator_visible(&self) -> bool {
        self.tracker.is_visible()
    }

    /// Vertices of the last layout pass (chart space).
    pub fn points(&self) -> &[ChartPoint] {
        self.tracker.points()
    }

    fn refresh_data(&mut self) {
        self.normalized = self.config.data.normalized();
        self.timestamps = self.config.data.timestamps();
        self.cached = None;
        if self.config.data.is_empty() {
            // `show` skips layout for an empty dataset
            self.tracker.publish(Vec::new());
        }
    }

    /// Rebuild the path when the size changed and hand the vertices to the tracker.
    fn layout(&mut self, size: Vec2) {
        if self.cached.as_ref().is_some_and(|c| c.size == size) {
            return;
        }
        let path = LinePath::build(
            &self.normalized,
            self.timestamps.as_deref(),
            size.x as f64,
            size.y as f64,
        )
        .with_markers(self.config.style.dots_width.unwrap_or(0.0) as f64);
        log::debug!(
            "line chart layout {:.0}x{:.0} with {} vertices",
            size.x,
            size.y,
            path.len()
        );
        self.tracker.publish(path.points().to_vec());
        self.cached = Some(CachedLayout { size, path });
    }

    /// Render the chart into `ui`.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        if self.config.data.is_empty() {
            log::trace!("empty dataset, nothing to draw");
            return ui.allocate_response(Vec2::ZERO, Sense::hover());
        }
        ui.vertical(|ui| {
            if self.config.interaction.drag_gesture {
                self.show_labels(ui);
                ui.add_space(LABELS_SPACING);
            }
            self.show_line(ui)
        })
        .inner
    }

    fn show_labels(&self, ui: &mut Ui) {
        let style = &self.config.style;
        let index = self.tracker.selection().map_or(0, |s| s.index);
        let text = LabelText::for_index(&self.config.data, style, index);
        let visible = self.tracker.is_visible();
        let main_color = style.label_color.unwrap_or_else(|| ui.visuals().text_color());
        let secondary_color = style
            .secondary_label_color
            .unwrap_or_else(|| ui.visuals().weak_text_color());

        let layout = egui::Layout::top_down(style.labels_alignment.to_egui());
        ui.with_layout(layout, |ui| {
            if let Some(main) = text.main {
                let rich = egui::RichText::new(main).heading().strong().color(main_color);
                ui.add_visible(visible, egui::Label::new(rich));
            }
            if let Some(secondary) = text.secondary {
                let rich = egui::RichText::new(secondary).small().color(secondary_color);
                ui.add_visible(visible, egui::Label::new(rich));
            }
        });
    }

    fn show_line(&mut self, ui: &mut Ui) -> Response {
        let size = chart_size(ui.available_size_before_wrap());
        let (rect, response) = ui.allocate_exact_size(size, self.line_sense());

        self.layout(rect.size());
        let painter = ui.painter_at(rect.expand(self.config.style.indicator_size));
        if let Some(cached) = &self.cached {
            paint_line(&painter, rect, &cached.path, &self.config);
        }

        if self.config.interaction.drag_gesture {
            self.handle_pointer(ui, rect, &response);
        }

        if self.tracker.is_visible() {
            if let Some(sel) = self.tracker.selection() {
                paint_indicator(&painter, chart_to_screen(rect, sel.position), &self.config);
            }
        }
        response
    }

    fn line_sense(&self) -> Sense {
        if self.config.interaction.drag_gesture {
            Sense::click_and_drag()
        } else {
            Sense::hover()
        }
    }

    fn handle_pointer(&mut self, ui: &Ui, rect: Rect, response: &Response) {
        if response.is_pointer_button_down_on() {
            if let Some(pos) = response.interact_pointer_pos() {
                let before = self.tracker.selection();
                let located = self.tracker.locate(screen_to_chart_x(rect, pos.x));
                self.forward_pulse(&located);
                if self.tracker.selection() != before {
                    ui.ctx().request_repaint();
                }
            }
        } else if self.tracker.is_visible() {
            self.tracker.end_drag();
            ui.ctx().request_repaint();
        }
    }

    fn forward_pulse(&mut self, located: &Located) {
        if !self.config.interaction.haptic_feedback {
            return;
        }
        if let Some(pulse) = located.pulse {
            log::trace!("forwarding haptic pulse: {pulse}");
            self.haptics.pulse(pulse);
        }
    }
}

impl egui::Widget for &mut LineChartView {
    fn ui(self, ui: &mut Ui) -> Response {
        self.show(ui)
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t).round() as u8;
    Color32::from_rgba_premultiplied(
        mix(a.r(), b.r()),
        mix(a.g(), b.g()),
        mix(a.b(), b.b()),
        mix(a.a(), b.a()),
    )
}

fn paint_line(painter: &egui::Painter, rect: Rect, path: &LinePath, config: &LineChartConfig) {
    let style = &config.style;
    let (start, end) = (style.line_color, style.line_end_color());
    let width = rect.width().max(f32::EPSILON);
    let color_at = |x: f64| lerp_color(start, end, x as f32 / width);

    for (a, b) in path.segments() {
        let color = color_at((a.x + b.x) / 2.0);
        painter.line_segment(
            [chart_to_screen(rect, a), chart_to_screen(rect, b)],
            Stroke::new(style.line_width, color),
        );
    }
    // round joins
    let points = path.points();
    if points.len() > 2 {
        for p in &points[1..points.len() - 1] {
            painter.circle_filled(chart_to_screen(rect, *p), style.line_width / 2.0, color_at(p.x));
        }
    }
    for marker in path.markers() {
        painter.circle_filled(
            chart_to_screen(rect, marker.center),
            marker.diameter as f32 / 2.0,
            color_at(marker.center.x),
        );
    }
}

fn paint_indicator(painter: &egui::Painter, center: Pos2, config: &LineChartConfig) {
    let radius = config.style.indicator_size / 2.0;
    // soft shadow
    for i in (1..=5).rev() {
        let alpha = 18 * (6 - i) as u8;
        painter.circle_filled(
            center,
            radius + 2.0 * i as f32,
            Color32::from_black_alpha(alpha),
        );
    }
    painter.circle_filled(center, radius, config.style.indicator_color);
    painter.circle_stroke(center, radius, Stroke::new(3.0, Color32::WHITE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::InteractionFlags;
    use crate::haptics::{channel_haptics, HapticPulse};
    use crate::indicator::LocateOutcome;

    fn limit_hit() -> Located {
        Located {
            outcome: LocateOutcome::AtLimit,
            pulse: Some(HapticPulse::LimitReached),
        }
    }

    fn view_with(interaction: InteractionFlags) -> LineChartView {
        LineChartView::new(LineChartConfig::new(vec![1.0, 2.0, 3.0]).with_interaction(interaction))
    }

    #[test]
    fn chart_space_is_y_up() {
        let rect = Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(100.0, 50.0));
        assert_eq!(chart_to_screen(rect, ChartPoint::new(0.0, 0.0)), egui::pos2(10.0, 70.0));
        assert_eq!(chart_to_screen(rect, ChartPoint::new(100.0, 50.0)), egui::pos2(110.0, 20.0));
        assert_eq!(screen_to_chart_x(rect, 35.0), 25.0);
    }

    #[test]
    fn gradient_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(lerp_color(a, b, 0.0), a);
        assert_eq!(lerp_color(a, b, 1.0), b);
        assert_eq!(lerp_color(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn set_data_invalidates_layout() {
        let mut view = LineChartView::new(LineChartConfig::new(vec![1.0, 2.0, 3.0]));
        view.layout(egui::vec2(100.0, 50.0));
        assert_eq!(view.points().len(), 3);
        view.set_data(vec![4.0, 5.0]);
        view.layout(egui::vec2(100.0, 50.0));
        assert_eq!(view.points().len(), 2);
        assert_eq!(view.points()[1], ChartPoint::new(100.0, 50.0));
    }

    #[test]
    fn layout_publishes_once_per_size() {
        let mut view = LineChartView::new(LineChartConfig::new(vec![1.0, 2.0]));
        view.layout(egui::vec2(40.0, 10.0));
        view.tracker.locate(30.0);
        let sel = view.selection();
        view.layout(egui::vec2(40.0, 10.0));
        assert_eq!(view.selection(), sel);
        assert!(view.is_indicator_visible());
    }

    #[test]
    fn emptied_data_clears_indicator() {
        let mut view = LineChartView::new(LineChartConfig::new(vec![1.0, 2.0, 3.0]));
        view.layout(egui::vec2(100.0, 50.0));
        view.tracker.locate(90.0);
        assert!(view.is_indicator_visible());

        view.set_data(Vec::<f64>::new());
        assert!(view.points().is_empty());
        assert!(view.selection().is_none());
        assert!(!view.is_indicator_visible());
    }

    #[test]
    fn pulses_stay_local_without_haptic_flag() {
        let (haptics, rx) = channel_haptics();
        let mut view = view_with(InteractionFlags {
            drag_gesture: true,
            haptic_feedback: false,
        })
        .with_haptics(haptics);
        view.forward_pulse(&limit_hit());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn haptic_flag_forwards_each_pulse_once() {
        let (haptics, rx) = channel_haptics();
        let mut view = view_with(InteractionFlags {
            drag_gesture: true,
            haptic_feedback: true,
        })
        .with_haptics(haptics);
        view.forward_pulse(&limit_hit());
        view.forward_pulse(&Located {
            outcome: LocateOutcome::AtLimit,
            pulse: None,
        });
        assert_eq!(rx.try_recv().ok(), Some(HapticPulse::LimitReached));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drag_flag_picks_sense() {
        let dragging = view_with(InteractionFlags::default());
        assert_eq!(dragging.line_sense(), Sense::click_and_drag());
        let static_view = view_with(InteractionFlags {
            drag_gesture: false,
            haptic_feedback: false,
        });
        assert_eq!(static_view.line_sense(), Sense::hover());
    }

    #[test]
    fn unbounded_space_gets_default_size() {
        assert_eq!(
            chart_size(egui::vec2(f32::INFINITY, f32::INFINITY)),
            DEFAULT_CHART_SIZE
        );
        assert_eq!(
            chart_size(egui::vec2(250.0, f32::INFINITY)),
            egui::vec2(250.0, DEFAULT_CHART_SIZE.y)
        );
        assert_eq!(chart_size(egui::vec2(4.0, 80.0)), egui::vec2(16.0, 80.0));
    }
}
