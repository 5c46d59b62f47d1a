use bevy::prelude::*;
use bevy_egui::{EguiContext, EguiContextSettings};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::surface;

/// Application settings read from disk at startup. Only presentation
/// settings live here; the diagram model itself is never persisted.
#[derive(Resource, Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    /// UI scale factor (1.0 = default)
    #[serde(default = "default_ui_scale")]
    pub ui_scale: f32,
    /// Initial window width in pixels
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Fixed height of the drawing surface in pixels
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Radians of orbit per pixel of mouse drag
    #[serde(default = "default_orbit_sensitivity")]
    pub orbit_sensitivity: f32,
    /// Fraction of the camera distance covered per scroll unit
    #[serde(default = "default_zoom_speed")]
    pub zoom_speed: f32,
}

fn default_ui_scale() -> f32 {
    1.0
}

fn default_window_width() -> u32 {
    surface::DEFAULT_WIDTH as u32
}

fn default_window_height() -> u32 {
    surface::DEFAULT_HEIGHT as u32
}

fn default_orbit_sensitivity() -> f32 {
    0.005
}

fn default_zoom_speed() -> f32 {
    0.1
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ui_scale: default_ui_scale(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            orbit_sensitivity: default_orbit_sensitivity(),
            zoom_speed: default_zoom_speed(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    fn file_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("diagram_preview");
            p.push("settings.ron");
            p
        })
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content),
            Err(_) => Self::default(),
        }
    }

    /// Parse settings, falling back to defaults on malformed input
    pub fn parse(content: &str) -> Self {
        ron::from_str(content).unwrap_or_else(|e| {
            warn!("Ignoring malformed settings: {}", e);
            Self::default()
        })
    }
}

pub struct SettingsPlugin;

impl Plugin for SettingsPlugin {
    fn build(&self, app: &mut App) {
        // The binary may have loaded settings already to size the window
        if !app.world().contains_resource::<Settings>() {
            app.insert_resource(Settings::load());
        }
        app.add_systems(Update, apply_ui_scale);
    }
}

/// Apply UI scale to egui
fn apply_ui_scale(
    settings: Res<Settings>,
    mut query: Query<&mut EguiContextSettings, With<EguiContext>>,
) {
    for mut ctx_settings in &mut query {
        if ctx_settings.scale_factor != settings.ui_scale {
            ctx_settings.scale_factor = settings.ui_scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::parse("(ui_scale: 1.5)");
        assert_eq!(settings.ui_scale, 1.5);
        assert_eq!(settings.window_height, 400);
        assert_eq!(settings.zoom_speed, Settings::default().zoom_speed);
    }

    #[test]
    fn ui_scale_may_be_omitted() {
        let settings = Settings::parse("(window_width: 1200)");
        assert_eq!(settings.window_width, 1200);
        assert_eq!(settings.ui_scale, 1.0);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        assert_eq!(Settings::parse("not ron at all"), Settings::default());
    }

    #[test]
    fn defaults_round_trip() {
        let text = ron::ser::to_string_pretty(&Settings::default(), Default::default()).unwrap();
        assert_eq!(Settings::parse(&text), Settings::default());
    }
}
