//! Centralized constants for the preview
//!
//! Geometry sizes, camera framing and default surface dimensions live here so
//! the render surface and the settings defaults agree.

/// Geometry dimensions per supported shape
pub mod geometry {
    /// Edge length of the cube
    pub const CUBE_SIZE: f32 = 100.0;
    /// Radius of the sphere
    pub const SPHERE_RADIUS: f32 = 5.0;
    /// Horizontal segments (sectors) of the sphere
    pub const SPHERE_WIDTH_SEGMENTS: u32 = 32;
    /// Vertical segments (stacks) of the sphere
    pub const SPHERE_HEIGHT_SEGMENTS: u32 = 32;
}

/// Camera framing
pub mod camera {
    /// Vertical field of view in degrees
    pub const FOV_DEGREES: f32 = 45.0;
    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 1000.0;
    /// Distance from the origin that frames the cube
    pub const CUBE_DISTANCE: f32 = 500.0;
    /// Distance from the origin that frames the sphere
    pub const SPHERE_DISTANCE: f32 = 30.0;
    /// Closest the orbit camera may zoom in
    pub const MIN_DISTANCE: f32 = 1.0;
    /// Keeps the orbit camera inside the far plane
    pub const MAX_DISTANCE: f32 = 900.0;
    /// Pixel scroll deltas (trackpads) per line of wheel scroll
    pub const PIXELS_PER_SCROLL_LINE: f32 = 100.0;
    /// Bounds on the distance multiplier applied by one zoom step
    pub const MIN_ZOOM_FACTOR: f32 = 0.5;
    pub const MAX_ZOOM_FACTOR: f32 = 1.5;
}

/// Render surface defaults
pub mod surface {
    pub const DEFAULT_WIDTH: f32 = 960.0;
    /// Fixed height of the drawing surface
    pub const DEFAULT_HEIGHT: f32 = 400.0;
    /// Width of the control panel side bar
    pub const PANEL_WIDTH: f32 = 220.0;
}
