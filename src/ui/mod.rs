mod control_panel;
mod settings;
pub mod theme;

pub use control_panel::*;
pub use settings::*;
pub use theme::ThemePlugin;

use bevy::prelude::*;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SettingsPlugin)
            .add_plugins(ThemePlugin)
            .add_plugins(ControlPanelUiPlugin);
    }
}
