//! Applies queued render cycles to the bevy scene.
//!
//! A cycle builds the new geometry, frames the camera and starts the texture
//! load. The live mesh stays on screen until the replacement's texture is
//! available; only then is its lease released and the new entity spawned. A
//! failed load keeps showing the previous mesh.

use bevy::asset::LoadState;
use bevy::prelude::*;

use super::camera::{OrbitCamera, PreviewCamera};
use super::surface::{RenderCycle, RenderSurface};
use crate::diagram::DiagramService;

/// Marker for the displayed diagram mesh
#[derive(Component)]
pub struct DiagramMesh {
    pub generation: u64,
}

/// Owned entity, geometry and material of the displayed mesh. Must be
/// released before it is replaced.
#[derive(Debug)]
pub struct MeshLease {
    entity: Entity,
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

impl MeshLease {
    fn release(
        self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) {
        commands.entity(self.entity).try_despawn();
        meshes.remove(&self.mesh);
        materials.remove(&self.material);
    }
}

/// A cycle waiting for its texture.
#[derive(Debug)]
struct TextureLoad {
    cycle: RenderCycle,
    texture: Handle<Image>,
    mesh: Handle<Mesh>,
}

#[derive(Resource, Debug, Default)]
pub struct DiagramScene {
    active: Option<MeshLease>,
    loading: Option<TextureLoad>,
}

impl DiagramScene {
    pub fn has_mesh(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    /// Drop an in-flight load and the geometry built for it.
    fn cancel_load(&mut self, meshes: &mut Assets<Mesh>) {
        if let Some(load) = self.loading.take() {
            meshes.remove(&load.mesh);
        }
    }

    fn release_all(
        &mut self,
        commands: &mut Commands,
        meshes: &mut Assets<Mesh>,
        materials: &mut Assets<StandardMaterial>,
    ) {
        if let Some(lease) = self.active.take() {
            lease.release(commands, meshes, materials);
        }
        self.cancel_load(meshes);
    }
}

/// Subscribe the surface and queue the first cycle
pub(crate) fn setup_render_surface(
    surface: Res<RenderSurface>,
    mut service: ResMut<DiagramService>,
) -> Result {
    surface.initialize(&mut service)?;
    if surface.start_animation() {
        info!("Animation loop started");
    }
    Ok(())
}

pub(crate) fn animation_running(surface: Res<RenderSurface>) -> bool {
    surface.is_animating()
}

/// Start building the newest queued cycle
pub(crate) fn apply_render_cycles(
    surface: Res<RenderSurface>,
    mut scene: ResMut<DiagramScene>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut cameras: Query<&mut OrbitCamera, With<PreviewCamera>>,
) {
    let Some(cycle) = surface.take_pending() else {
        return;
    };

    scene.cancel_load(&mut meshes);

    let mesh = meshes.add(cycle.geometry.mesh());
    for mut orbit in &mut cameras {
        orbit.reset(cycle.camera_distance());
    }

    info!(
        "Render cycle {}: loading texture {}",
        cycle.generation, cycle.texture_path
    );
    let texture = asset_server.load::<Image>(cycle.texture_path);
    scene.loading = Some(TextureLoad {
        cycle,
        texture,
        mesh,
    });
}

/// Spawn the mesh once its texture has loaded
pub(crate) fn poll_texture_load(
    mut commands: Commands,
    surface: Res<RenderSurface>,
    mut scene: ResMut<DiagramScene>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some((texture_id, path)) = scene
        .loading
        .as_ref()
        .map(|load| (load.texture.id(), load.cycle.texture_path))
    else {
        return;
    };

    match asset_server.get_load_state(texture_id) {
        Some(LoadState::Loaded) => {}
        Some(LoadState::Failed(err)) => {
            error!("Error loading texture {}: {}", path, err);
            scene.cancel_load(&mut meshes);
            return;
        }
        _ => return,
    }

    let Some(load) = scene.loading.take() else {
        return;
    };

    if !surface.is_current(load.cycle.generation) {
        debug!(
            "Discarding texture {} for stale cycle {}",
            path, load.cycle.generation
        );
        meshes.remove(&load.mesh);
        return;
    }

    if let Some(lease) = scene.active.take() {
        lease.release(&mut commands, &mut meshes, &mut materials);
    }

    let material = materials.add(StandardMaterial {
        base_color: load.cycle.color,
        base_color_texture: Some(load.texture),
        unlit: true,
        ..default()
    });
    let entity = commands
        .spawn((
            DiagramMesh {
                generation: load.cycle.generation,
            },
            Mesh3d(load.mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::IDENTITY,
        ))
        .id();

    info!("Render cycle {}: texture {} loaded", load.cycle.generation, path);
    scene.active = Some(MeshLease {
        entity,
        mesh: load.mesh,
        material,
    });
}

/// Release the mesh and drop the subscription when the app exits
pub(crate) fn teardown_on_exit(
    mut exit: MessageReader<AppExit>,
    mut commands: Commands,
    surface: Res<RenderSurface>,
    mut service: ResMut<DiagramService>,
    mut scene: ResMut<DiagramScene>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if exit.read().next().is_none() {
        return;
    }

    scene.release_all(&mut commands, &mut meshes, &mut materials);
    if surface.teardown(&mut service) {
        info!("Render surface unsubscribed");
    }
}
