use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use crate::diagram::DiagramServicePlugin;
use crate::panel::{init_control_panel, ControlPanelPlugin};
use crate::render::{setup_render_surface, RenderSurfacePlugin};
use crate::ui::UiPlugin;

/// Frame ordering: user actions are applied before the scene catches up.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagramSet {
    Panel,
    Render,
}

/// Bundles the service, control panel, render surface and UI
pub struct DiagramPreviewPlugin;

impl Plugin for DiagramPreviewPlugin {
    fn build(&self, app: &mut App) {
        app
            // Third-party plugins
            .add_plugins(EguiPlugin::default())
            // Shared model and notifications
            .add_plugins(DiagramServicePlugin)
            // Components
            .add_plugins(ControlPanelPlugin)
            .add_plugins(RenderSurfacePlugin)
            // UI
            .add_plugins(UiPlugin)
            .configure_sets(Update, (DiagramSet::Panel, DiagramSet::Render).chain())
            // Control panel first, then the render surface
            .add_systems(Startup, (init_control_panel, setup_render_surface).chain());
    }
}
