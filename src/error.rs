use thiserror::Error;

/// Errors raised by the diagram service, its subscribers and the render surface.
#[derive(Error, Debug)]
pub enum DiagramError {
    /// The model holds a shape the render surface has no geometry for.
    /// Indicates the shape catalog and the geometry dispatch have drifted apart.
    #[error("Shape not supported: {key} ({value})")]
    UnsupportedShape { key: String, value: String },
    #[error("Invalid color value for {key}: {value}")]
    InvalidColor { key: String, value: String },
    #[error("Failed to serialize diagram model: {0}")]
    Serialize(#[from] ron::Error),
}
