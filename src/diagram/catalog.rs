//! Fixed catalogs of selectable colors, shapes and textures.
//!
//! Every catalog is a process-wide static so model fields can hold
//! `&'static` references into it. The first entry of each catalog is the
//! designated default.

use bevy::prelude::*;
use serde::Serialize;

use crate::error::DiagramError;

/// Shared behaviour of the three catalog kinds.
pub trait CatalogEntry: Sized + Sync + 'static {
    /// Human readable name of the kind, used in logs.
    const KIND: &'static str;

    /// All entries, in display order.
    fn catalog() -> &'static [Self];

    /// The entry used when nothing (or something unknown) is selected.
    fn default_entry() -> &'static Self;

    /// Stable lookup key, e.g. `"CUBE"`.
    fn key(&self) -> &'static str;

    /// Display name, e.g. `"Cube"`.
    fn name(&self) -> &'static str;

    fn lookup(key: &str) -> Option<&'static Self> {
        Self::catalog().iter().find(|entry| entry.key() == key)
    }

    /// Look up `key`, falling back to the default entry when it is unknown.
    fn select_or_default(key: &str) -> &'static Self {
        Self::lookup(key).unwrap_or_else(|| {
            debug!(
                "Unknown {} key {:?}, using default {}",
                Self::KIND,
                key,
                Self::default_entry().key()
            );
            Self::default_entry()
        })
    }

    /// `(key, name)` pairs for building a selection list.
    fn options() -> Vec<(&'static str, &'static str)> {
        Self::catalog()
            .iter()
            .map(|entry| (entry.key(), entry.name()))
            .collect()
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ColorOption {
    pub key: &'static str,
    pub name: &'static str,
    /// Hex color, `#RRGGBB`.
    pub value: &'static str,
}

impl ColorOption {
    /// Parse the hex payload into a render color.
    pub fn color(&self) -> Result<Color, DiagramError> {
        Srgba::hex(self.value)
            .map(Color::from)
            .map_err(|_| DiagramError::InvalidColor {
                key: self.key.to_string(),
                value: self.value.to_string(),
            })
    }
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ShapeOption {
    pub key: &'static str,
    pub name: &'static str,
    /// Shape identifier dispatched on by the render surface.
    pub value: &'static str,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct TextureOption {
    pub key: &'static str,
    pub name: &'static str,
    /// Asset path relative to the asset root.
    pub url: &'static str,
}

pub static COLORS: [ColorOption; 2] = [
    ColorOption {
        key: "BLUE",
        name: "Blue",
        value: "#538FC6",
    },
    ColorOption {
        key: "GREEN",
        name: "Green",
        value: "#6ec653",
    },
];

pub static SHAPES: [ShapeOption; 2] = [
    ShapeOption {
        key: "CUBE",
        name: "Cube",
        value: "cube",
    },
    ShapeOption {
        key: "SPHERE",
        name: "Sphere",
        value: "sphere",
    },
];

pub static TEXTURES: [TextureOption; 3] = [
    TextureOption {
        key: "ANGLE_GRID",
        name: "Angle Grid",
        url: "textures/angle-grid.png",
    },
    TextureOption {
        key: "CLOUD",
        name: "Cloud",
        url: "textures/cloud.png",
    },
    TextureOption {
        key: "GRID",
        name: "Grid",
        url: "textures/grid.png",
    },
];

impl CatalogEntry for ColorOption {
    const KIND: &'static str = "color";

    fn catalog() -> &'static [Self] {
        &COLORS
    }

    fn default_entry() -> &'static Self {
        &COLORS[0]
    }

    fn key(&self) -> &'static str {
        self.key
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl CatalogEntry for ShapeOption {
    const KIND: &'static str = "shape";

    fn catalog() -> &'static [Self] {
        &SHAPES
    }

    fn default_entry() -> &'static Self {
        &SHAPES[0]
    }

    fn key(&self) -> &'static str {
        self.key
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl CatalogEntry for TextureOption {
    const KIND: &'static str = "texture";

    fn catalog() -> &'static [Self] {
        &TEXTURES
    }

    fn default_entry() -> &'static Self {
        &TEXTURES[0]
    }

    fn key(&self) -> &'static str {
        self.key
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
