//! Standalone preview window.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use diagram_preview::{DiagramPreviewPlugin, Settings};

fn main() {
    let settings = Settings::load();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Diagram Preview".to_string(),
                resolution: WindowResolution::new(settings.window_width, settings.window_height),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(settings)
        .add_plugins(DiagramPreviewPlugin)
        .run();
}
