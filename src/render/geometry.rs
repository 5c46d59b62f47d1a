//! Shape dispatch: one geometry constructor per supported shape value.

use bevy::prelude::*;

use crate::constants::{camera, geometry};
use crate::diagram::ShapeOption;
use crate::error::DiagramError;

/// Geometry description for a render cycle. Turned into a [`Mesh`] when the
/// cycle is applied to the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Cube {
        size: f32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

impl Geometry {
    /// Pick the constructor for `shape`. Unknown shape values are a
    /// configuration error, never a silent fallback.
    pub fn for_shape(shape: &ShapeOption) -> Result<Self, DiagramError> {
        match shape.value {
            "cube" => Ok(Self::cube()),
            "sphere" => Ok(Self::sphere()),
            _ => Err(DiagramError::UnsupportedShape {
                key: shape.key.to_string(),
                value: shape.value.to_string(),
            }),
        }
    }

    pub fn cube() -> Self {
        Self::Cube {
            size: geometry::CUBE_SIZE,
        }
    }

    pub fn sphere() -> Self {
        Self::Sphere {
            radius: geometry::SPHERE_RADIUS,
            width_segments: geometry::SPHERE_WIDTH_SEGMENTS,
            height_segments: geometry::SPHERE_HEIGHT_SEGMENTS,
        }
    }

    /// Camera distance on +Z that frames this geometry.
    pub fn camera_distance(&self) -> f32 {
        match self {
            Self::Cube { .. } => camera::CUBE_DISTANCE,
            Self::Sphere { .. } => camera::SPHERE_DISTANCE,
        }
    }

    pub fn mesh(&self) -> Mesh {
        match *self {
            Self::Cube { size } => Cuboid::new(size, size, size).into(),
            Self::Sphere {
                radius,
                width_segments,
                height_segments,
            } => Sphere::new(radius)
                .mesh()
                .uv(width_segments, height_segments),
        }
    }
}
