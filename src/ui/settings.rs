use serde::{Deserialize, Serialize};
use egui::Color32;
use std::collections::HashMap;

use midtown_hub::model::input::TableBound;
use midtown_hub::model::message::Severity;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HubSettings {
    pub window_title: String,
    pub ui_scale: f32,

    /// Longest text accepted by the single-line entries (names, key, multiplier).
    pub entry_max_len: usize,
    pub default_bound: u8,

    // Severity → color mapping
    pub severity_colors: HashMap<String, [u8; 4]>,
}

impl Default for HubSettings {
    fn default() -> Self {
        let mut severity_colors = HashMap::new();

        severity_colors.insert("Error".into(), [204, 0, 0, 255]);
        severity_colors.insert("Informational".into(), [78, 154, 6, 255]);

        Self {
            window_title: "MidTown IT Training Solutions App".into(),
            ui_scale: 1.0,
            entry_max_len: 12,
            default_bound: TableBound::DEFAULT,
            severity_colors,
        }
    }
}

impl HubSettings {
    pub fn color(&self, severity: Severity) -> Color32 {
        self.severity_colors
            .get(severity_key(severity))
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::WHITE)
    }

    /// Scale clamped to something egui can still lay out.
    pub fn scale(&self) -> f32 {
        if self.ui_scale.is_finite() {
            self.ui_scale.clamp(0.5, 3.0)
        } else {
            1.0
        }
    }
}

fn severity_key(severity: Severity) -> &'static str {
    match severity {
        Severity::Error => "Error",
        Severity::Informational => "Informational",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let settings: HubSettings = serde_json::from_str(r#"{ "ui_scale": 1.5 }"#).unwrap();
        assert_eq!(settings.ui_scale, 1.5);
        assert_eq!(settings.entry_max_len, 12);
        assert_eq!(settings.default_bound, 12);
        assert_eq!(settings.color(Severity::Error), Color32::from_rgb(204, 0, 0));
    }

    #[test]
    fn missing_color_falls_back_to_white() {
        let mut settings = HubSettings::default();
        settings.severity_colors.clear();
        assert_eq!(settings.color(Severity::Informational), Color32::WHITE);
    }

    #[test]
    fn silly_scales_are_clamped() {
        let mut settings = HubSettings::default();
        settings.ui_scale = 40.0;
        assert_eq!(settings.scale(), 3.0);
        settings.ui_scale = f32::NAN;
        assert_eq!(settings.scale(), 1.0);
    }
}
