//! Diagram model, catalogs and the notification service shared by the control
//! panel and the render surface.

pub mod bus;
pub mod catalog;
pub mod model;
pub mod service;

pub use bus::{NotificationBus, SubscriptionId};
pub use catalog::{CatalogEntry, ColorOption, ShapeOption, TextureOption, COLORS, SHAPES, TEXTURES};
pub use model::DiagramModel;
pub use service::{DiagramService, ModelChanged, MODEL_CHANGE};

use bevy::prelude::*;

pub struct DiagramServicePlugin;

impl Plugin for DiagramServicePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DiagramService>();
    }
}
