//! Chart settings files: style and interaction as JSON or YAML.
//!
//! Only the look and behavior of a chart are read from disk; the data always
//! comes from the host. Nothing is ever written back.
//!
//! egui colors do not derive serde traits, so the style goes through a
//! deserializable mirror type with colors stored as `[r, g, b, a]`.

use std::path::Path;

use eframe::egui::Color32;
use serde::Deserialize;

use crate::config::{DisplayMode, InteractionFlags, LabelsAlignment, LineChartConfig, LineChartStyle};
use crate::data::ChartData;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON settings: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML settings: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported settings extension {0:?} (expected json, yaml or yml)")]
    UnsupportedExtension(String),
}

// ---------- Mirror types ----------

fn rgba(c: Color32) -> [u8; 4] {
    [c.r(), c.g(), c.b(), c.a()]
}

fn color(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

/// File form of [`LineChartStyle`]. Missing fields take the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LineChartStyleSerde {
    pub label_color_rgba: Option<[u8; 4]>,
    pub secondary_label_color_rgba: Option<[u8; 4]>,
    pub labels_alignment: LabelsAlignment,
    pub precision: usize,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub indicator_color_rgba: [u8; 4],
    pub indicator_size: f32,
    pub line_color_rgba: [u8; 4],
    pub line_second_color_rgba: Option<[u8; 4]>,
    pub line_width: f32,
    pub dots_width: Option<f32>,
    pub display_mode: DisplayMode,
}

impl From<&LineChartStyle> for LineChartStyleSerde {
    fn from(s: &LineChartStyle) -> Self {
        Self {
            label_color_rgba: s.label_color.map(rgba),
            secondary_label_color_rgba: s.secondary_label_color.map(rgba),
            labels_alignment: s.labels_alignment,
            precision: s.precision,
            prefix: s.prefix.clone(),
            suffix: s.suffix.clone(),
            indicator_color_rgba: rgba(s.indicator_color),
            indicator_size: s.indicator_size,
            line_color_rgba: rgba(s.line_color),
            line_second_color_rgba: s.line_second_color.map(rgba),
            line_width: s.line_width,
            dots_width: s.dots_width,
            display_mode: s.display_mode,
        }
    }
}

impl Default for LineChartStyleSerde {
    fn default() -> Self {
        Self::from(&LineChartStyle::default())
    }
}

impl LineChartStyleSerde {
    pub fn into_style(self) -> LineChartStyle {
        LineChartStyle {
            label_color: self.label_color_rgba.map(color),
            secondary_label_color: self.secondary_label_color_rgba.map(color),
            labels_alignment: self.labels_alignment,
            precision: self.precision,
            prefix: self.prefix,
            suffix: self.suffix,
            indicator_color: color(self.indicator_color_rgba),
            indicator_size: self.indicator_size,
            line_color: color(self.line_color_rgba),
            line_second_color: self.line_second_color_rgba.map(color),
            line_width: self.line_width,
            dots_width: self.dots_width,
            display_mode: self.display_mode,
        }
    }
}

/// Everything of a [`LineChartConfig`] except its data.
///
/// A `data` key in the file is an error rather than silently ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartSettings {
    pub title: Option<String>,
    pub style: LineChartStyleSerde,
    pub interaction: InteractionFlags,
}

impl ChartSettings {
    /// Build a chart configuration for `data` with these settings.
    pub fn into_config(self, data: impl Into<ChartData>) -> LineChartConfig {
        let mut cfg = LineChartConfig::new(data);
        self.apply_to(&mut cfg);
        cfg
    }

    /// Overwrite style, interaction and (if set) title of `cfg`; its data stays.
    pub fn apply_to(self, cfg: &mut LineChartConfig) {
        cfg.style = self.style.into_style();
        cfg.interaction = self.interaction;
        if let Some(title) = self.title {
            cfg.title = title;
        }
    }
}

// ---------- JSON / YAML ----------

pub fn settings_from_json(json: &str) -> Result<ChartSettings, SettingsError> {
    Ok(serde_json::from_str(json)?)
}

pub fn settings_from_yaml(yaml: &str) -> Result<ChartSettings, SettingsError> {
    Ok(serde_yaml::from_str(yaml)?)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Yaml,
}

fn format_for(path: &Path) -> Result<Format, SettingsError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => Ok(Format::Json),
        "yaml" | "yml" => Ok(Format::Yaml),
        _ => Err(SettingsError::UnsupportedExtension(ext)),
    }
}

/// Read chart settings; the format follows the file extension.
pub fn load_settings_from_path(path: &Path) -> Result<ChartSettings, SettingsError> {
    let format = format_for(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let settings = match format {
        Format::Json => settings_from_json(&text)?,
        Format::Yaml => settings_from_yaml(&text)?,
    };
    log::debug!("loaded chart settings from {}", path.display());
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = format_for(Path::new("chart.toml")).unwrap_err();
        assert!(matches!(err, SettingsError::UnsupportedExtension(ref e) if e == "toml"));
    }

    #[test]
    fn yml_is_yaml() {
        assert_eq!(format_for(Path::new("a/b.YML")).unwrap(), Format::Yaml);
    }

    #[test]
    fn style_mirror_keeps_colors() {
        let style = LineChartStyle {
            line_second_color: Some(Color32::from_rgb(255, 0, 128)),
            label_color: Some(Color32::WHITE),
            ..Default::default()
        };
        let back = LineChartStyleSerde::from(&style).into_style();
        assert_eq!(back, style);
    }

    #[test]
    fn apply_keeps_data_and_title() {
        let mut cfg = LineChartConfig::new(vec![1.0, 2.0]).with_title("kept");
        let settings = ChartSettings {
            title: None,
            style: LineChartStyleSerde {
                precision: 0,
                ..Default::default()
            },
            interaction: InteractionFlags {
                drag_gesture: false,
                haptic_feedback: true,
            },
        };
        settings.apply_to(&mut cfg);
        assert_eq!(cfg.data.len(), 2);
        assert_eq!(cfg.title, "kept");
        assert_eq!(cfg.style.precision, 0);
        assert!(!cfg.interaction.drag_gesture);
    }
}
