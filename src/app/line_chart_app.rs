//! eframe application hosting one [`LineChartView`].

use eframe::egui;

use crate::view::LineChartView;

/// Minimal eframe app: optional headline, then the chart filling the central panel.
pub struct LineChartApp {
    view: LineChartView,
    headline: Option<String>,
}

impl LineChartApp {
    pub fn new(view: LineChartView) -> Self {
        Self {
            view,
            headline: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn view(&self) -> &LineChartView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut LineChartView {
        &mut self.view
    }
}

impl eframe::App for LineChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(headline) = &self.headline {
                ui.heading(headline);
                ui.separator();
            }
            ui.add(&mut self.view);
        });
    }
}
