//! # Diagram Preview
//!
//! A small bevy widget for picking a shape, color and texture from a control
//! panel and watching a live 3D preview update.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bevy::prelude::*;
//! use diagram_preview::DiagramPreviewPlugin;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(DiagramPreviewPlugin)
//!         .run();
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`DiagramService`] owns the model and a publish/subscribe bus keyed by
//!   event name. Changes go out as [`MODEL_CHANGE`].
//! - The control panel turns [`ControlPanelAction`] messages into model
//!   mutations, one notification per selection.
//! - The [`RenderSurface`] subscribes to model changes and rebuilds the mesh.
//!
//! Unknown color and texture keys fall back to the catalog default. An
//! unknown shape reaching the render surface is an error.

pub mod constants;
pub mod diagram;
pub mod error;
pub mod panel;
pub mod plugin;
pub mod render;
pub mod ui;

pub use plugin::{DiagramPreviewPlugin, DiagramSet};

pub use diagram::{
    CatalogEntry, ColorOption, DiagramModel, DiagramService, ModelChanged, NotificationBus,
    ShapeOption, SubscriptionId, TextureOption, MODEL_CHANGE,
};
pub use error::DiagramError;
pub use panel::{ControlPanel, ControlPanelAction, Selector};
pub use render::{Geometry, RenderCycle, RenderSurface};
pub use ui::Settings;
