//! Control panel logic: turns user selections into model mutations and
//! `model:change` notifications.
//!
//! The egui side bar (see `ui::control_panel`) never touches the model
//! directly. It writes [`ControlPanelAction`] messages which are applied here,
//! one publish per selection.

use bevy::prelude::*;

use crate::diagram::{
    CatalogEntry, ColorOption, DiagramModel, DiagramService, ShapeOption, TextureOption,
};
use crate::error::DiagramError;
use crate::plugin::DiagramSet;

/// Which model field a selection list edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Shape,
    Color,
    Texture,
}

impl Selector {
    /// Display order of the selection lists.
    pub const ALL: [Selector; 3] = [Selector::Shape, Selector::Texture, Selector::Color];

    pub fn label(&self) -> &'static str {
        match self {
            Selector::Shape => "Shape",
            Selector::Color => "Color",
            Selector::Texture => "Texture",
        }
    }

    /// `(key, name)` pairs from the matching catalog.
    pub fn options(&self) -> Vec<(&'static str, &'static str)> {
        match self {
            Selector::Shape => ShapeOption::options(),
            Selector::Color => ColorOption::options(),
            Selector::Texture => TextureOption::options(),
        }
    }

    /// Key currently selected in `model`.
    pub fn current(&self, model: &DiagramModel) -> (&'static str, &'static str) {
        match self {
            Selector::Shape => (model.shape.key, model.shape.name),
            Selector::Color => (model.color.key, model.color.name),
            Selector::Texture => (model.texture.key, model.texture.name),
        }
    }

    /// Assign the entry for `key`, or the default when the key is unknown.
    fn assign(&self, model: &mut DiagramModel, key: &str) {
        match self {
            Selector::Shape => model.shape = ShapeOption::select_or_default(key),
            Selector::Color => model.color = ColorOption::select_or_default(key),
            Selector::Texture => model.texture = TextureOption::select_or_default(key),
        }
    }
}

/// User input understood by the control panel
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum ControlPanelAction {
    Select { selector: Selector, key: String },
    /// Show the current selection for confirmation
    Confirm,
    /// Close the confirmation dialog
    Dismiss,
}

/// One selection list, built from a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionList {
    pub selector: Selector,
    pub options: Vec<(&'static str, &'static str)>,
}

#[derive(Resource, Debug, Default)]
pub struct ControlPanel {
    option_lists: Vec<OptionList>,
    bound: bool,
    confirmation: Option<String>,
}

impl ControlPanel {
    /// Build the selection lists and start accepting actions.
    pub fn init(&mut self, service: &mut DiagramService) {
        self.option_lists = Selector::ALL
            .iter()
            .map(|selector| OptionList {
                selector: *selector,
                options: selector.options(),
            })
            .collect();
        // Make sure the model exists before the first frame is drawn.
        service.get();
        self.bind();
    }

    pub fn option_lists(&self) -> &[OptionList] {
        &self.option_lists
    }

    pub fn bind(&mut self) {
        self.bound = true;
    }

    /// Stop reacting to actions. Pending confirmation text is dropped.
    pub fn unbind(&mut self) {
        self.bound = false;
        self.confirmation = None;
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }

    pub fn handle(
        &mut self,
        service: &mut DiagramService,
        action: &ControlPanelAction,
    ) -> Result<(), DiagramError> {
        if !self.bound {
            debug!("Control panel unbound, ignoring {:?}", action);
            return Ok(());
        }
        match action {
            ControlPanelAction::Select { selector, key } => self.select(service, *selector, key),
            ControlPanelAction::Confirm => self.confirm(service),
            ControlPanelAction::Dismiss => {
                self.confirmation = None;
                Ok(())
            }
        }
    }

    /// Apply a selection and notify subscribers once.
    pub fn select(
        &self,
        service: &mut DiagramService,
        selector: Selector,
        key: &str,
    ) -> Result<(), DiagramError> {
        selector.assign(service.get(), key);
        service.publish_change()?;
        Ok(())
    }

    /// Render the current model for confirmation. Does not modify it.
    pub fn confirm(&mut self, service: &mut DiagramService) -> Result<(), DiagramError> {
        let text = service.get().to_pretty_string()?;
        info!("Selection submitted for confirmation");
        self.confirmation = Some(text);
        Ok(())
    }
}

pub struct ControlPanelPlugin;

impl Plugin for ControlPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<ControlPanelAction>()
            .init_resource::<ControlPanel>()
            .add_systems(
                Update,
                handle_control_panel_actions.in_set(DiagramSet::Panel),
            );
    }
}

pub(crate) fn init_control_panel(
    mut panel: ResMut<ControlPanel>,
    mut service: ResMut<DiagramService>,
) {
    panel.init(&mut service);
}

fn handle_control_panel_actions(
    mut actions: MessageReader<ControlPanelAction>,
    mut panel: ResMut<ControlPanel>,
    mut service: ResMut<DiagramService>,
) -> Result {
    for action in actions.read() {
        panel.handle(&mut service, action)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{DiagramServicePlugin, COLORS, SHAPES, TEXTURES};
    use crate::render::{Geometry, RenderSurface};

    fn select(selector: Selector, key: &str) -> ControlPanelAction {
        ControlPanelAction::Select {
            selector,
            key: key.to_string(),
        }
    }

    /// Service with an initialized surface whose first cycle was consumed.
    fn wired() -> (DiagramService, ControlPanel, RenderSurface) {
        let mut service = DiagramService::default();
        let mut panel = ControlPanel::default();
        panel.init(&mut service);
        let surface = RenderSurface::default();
        surface.initialize(&mut service).unwrap();
        surface.take_pending();
        (service, panel, surface)
    }

    #[test]
    fn init_builds_lists_in_catalog_order() {
        let mut service = DiagramService::default();
        let mut panel = ControlPanel::default();
        assert!(!panel.is_bound());
        panel.init(&mut service);

        assert!(panel.is_bound());
        let lists = panel.option_lists();
        assert_eq!(lists.len(), 3);
        assert_eq!(lists[0].selector, Selector::Shape);
        assert_eq!(lists[0].options, vec![("CUBE", "Cube"), ("SPHERE", "Sphere")]);
        assert_eq!(lists[1].selector, Selector::Texture);
        assert_eq!(lists[1].options.len(), 3);
        assert_eq!(lists[2].selector, Selector::Color);
        assert_eq!(lists[2].options, vec![("BLUE", "Blue"), ("GREEN", "Green")]);
    }

    #[test]
    fn selecting_green_regenerates_once() {
        let (mut service, mut panel, surface) = wired();
        let before = surface.regenerations();

        panel
            .handle(&mut service, &select(Selector::Color, "GREEN"))
            .unwrap();

        assert!(std::ptr::eq(service.get().color, &COLORS[1]));
        assert_eq!(surface.regenerations(), before + 1);
        let cycle = surface.take_pending().unwrap();
        assert_eq!(cycle.color, COLORS[1].color().unwrap());
        assert!(surface.take_pending().is_none());
    }

    #[test]
    fn selecting_sphere_uses_sphere_geometry_and_framing() {
        let (mut service, mut panel, surface) = wired();

        panel
            .handle(&mut service, &select(Selector::Shape, "SPHERE"))
            .unwrap();

        assert!(std::ptr::eq(service.get().shape, &SHAPES[1]));
        let cycle = surface.take_pending().unwrap();
        assert_eq!(cycle.geometry, Geometry::sphere());
        assert_eq!(cycle.camera_distance(), 30.0);
        assert_ne!(cycle.camera_distance(), 500.0);
    }

    #[test]
    fn unknown_keys_select_defaults() {
        let (mut service, mut panel, surface) = wired();
        panel
            .handle(&mut service, &select(Selector::Shape, "SPHERE"))
            .unwrap();
        panel
            .handle(&mut service, &select(Selector::Color, "GREEN"))
            .unwrap();
        panel
            .handle(&mut service, &select(Selector::Texture, "CLOUD"))
            .unwrap();

        for selector in Selector::ALL {
            panel
                .handle(&mut service, &select(selector, "NOT_A_KEY"))
                .unwrap();
        }

        let model = *service.get();
        assert_eq!(model, DiagramService::create_model());
        assert!(std::ptr::eq(model.texture, &TEXTURES[0]));
        // One regeneration per selection, including the corrected ones.
        assert_eq!(surface.regenerations(), 1 + 3 + 3);
    }

    #[test]
    fn confirm_does_not_touch_the_model() {
        let (mut service, mut panel, surface) = wired();
        let before = *service.get();

        panel
            .handle(&mut service, &ControlPanelAction::Confirm)
            .unwrap();

        let text = panel.confirmation().unwrap();
        assert!(text.contains("Cube"));
        assert!(text.contains("Angle Grid"));
        assert_eq!(*service.get(), before);
        assert_eq!(surface.regenerations(), 1);

        panel
            .handle(&mut service, &ControlPanelAction::Dismiss)
            .unwrap();
        assert!(panel.confirmation().is_none());
    }

    #[test]
    fn unbound_panel_ignores_actions() {
        let (mut service, mut panel, surface) = wired();
        panel.unbind();

        panel
            .handle(&mut service, &select(Selector::Color, "GREEN"))
            .unwrap();

        assert_eq!(service.get().color.key, "BLUE");
        assert_eq!(surface.regenerations(), 1);
    }

    #[test]
    fn actions_flow_through_messages() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins((DiagramServicePlugin, ControlPanelPlugin))
            .add_systems(Startup, init_control_panel);
        app.update();

        app.world_mut()
            .write_message(select(Selector::Texture, "GRID"));
        app.update();

        let mut service = app.world_mut().resource_mut::<DiagramService>();
        assert_eq!(service.get().texture.key, "GRID");
    }
}
