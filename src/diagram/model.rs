use serde::Serialize;

use super::catalog::{CatalogEntry, ColorOption, ShapeOption, TextureOption};
use crate::error::DiagramError;

/// The user's current selection. Every field points into its catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiagramModel {
    pub shape: &'static ShapeOption,
    pub color: &'static ColorOption,
    pub texture: &'static TextureOption,
}

impl Default for DiagramModel {
    fn default() -> Self {
        Self {
            shape: ShapeOption::default_entry(),
            color: ColorOption::default_entry(),
            texture: TextureOption::default_entry(),
        }
    }
}

impl DiagramModel {
    /// Pretty RON rendering shown in the confirmation dialog.
    pub fn to_pretty_string(&self) -> Result<String, DiagramError> {
        Ok(ron::ser::to_string_pretty(
            self,
            ron::ser::PrettyConfig::default(),
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pretty_string_names_every_selection() {
        let text = DiagramModel::default().to_pretty_string().unwrap();
        assert!(text.contains("Cube"));
        assert!(text.contains("Blue"));
        assert!(text.contains("#538FC6"));
        assert!(text.contains("textures/angle-grid.png"));
    }
}
