//! The 3D render surface: one camera, one mesh mirroring the diagram model.

mod camera;
mod geometry;
mod scene;
mod surface;

pub use camera::{OrbitCamera, PreviewCamera};
pub use geometry::Geometry;
pub use scene::{DiagramMesh, DiagramScene, MeshLease};
pub use surface::{RenderCycle, RenderSurface, SurfaceState};

pub(crate) use scene::setup_render_surface;

use bevy::prelude::*;

use crate::plugin::DiagramSet;

pub struct RenderSurfacePlugin;

impl Plugin for RenderSurfacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RenderSurface>()
            .init_resource::<DiagramScene>()
            .add_systems(Startup, camera::spawn_preview_camera)
            .add_systems(
                Update,
                (
                    scene::apply_render_cycles,
                    scene::poll_texture_load,
                    camera::orbit_controls.run_if(scene::animation_running),
                    camera::sync_orbit_transform,
                )
                    .chain()
                    .in_set(DiagramSet::Render),
            )
            .add_systems(Last, scene::teardown_on_exit);
    }
}
