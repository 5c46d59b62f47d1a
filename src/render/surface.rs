//! Render surface state shared between its bus subscription and the bevy
//! systems that apply render cycles to the scene.
//!
//! The bus callback only validates and plans: it turns the changed model into
//! a [`RenderCycle`] and queues it. The scene systems pick the cycle up on the
//! next frame. Every cycle carries a generation number so a texture load that
//! finishes after a newer change can be recognised as stale.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use bevy::prelude::*;

use super::geometry::Geometry;
use crate::diagram::{DiagramModel, DiagramService, SubscriptionId, MODEL_CHANGE};
use crate::error::DiagramError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceState {
    #[default]
    Uninitialized,
    Ready,
}

/// Everything needed to rebuild the displayed mesh for one model change.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCycle {
    pub generation: u64,
    pub geometry: Geometry,
    pub color: Color,
    pub texture_path: &'static str,
}

impl RenderCycle {
    /// Plan a cycle for `model`. Fails on shapes without geometry.
    pub fn plan(model: &DiagramModel, generation: u64) -> Result<Self, DiagramError> {
        Ok(Self {
            generation,
            geometry: Geometry::for_shape(model.shape)?,
            color: model.color.color()?,
            texture_path: model.texture.url,
        })
    }

    pub fn camera_distance(&self) -> f32 {
        self.geometry.camera_distance()
    }
}

#[derive(Debug, Default)]
struct SurfaceInner {
    state: SurfaceState,
    generation: u64,
    regenerations: u64,
    pending: Option<RenderCycle>,
    animating: bool,
    subscription: Option<SubscriptionId>,
}

/// Cheap to clone; clones share the same state.
#[derive(Resource, Clone, Debug, Default)]
pub struct RenderSurface {
    inner: Arc<Mutex<SurfaceInner>>,
}

impl RenderSurface {
    fn lock(&self) -> MutexGuard<'_, SurfaceInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Subscribe to model changes and queue the first cycle.
    ///
    /// Calling this on a surface that is already `Ready` returns the existing
    /// subscription.
    pub fn initialize(&self, service: &mut DiagramService) -> Result<SubscriptionId, DiagramError> {
        if let Some(id) = self.lock().subscription {
            return Ok(id);
        }

        let model = *service.get();
        self.regenerate(&model)?;

        let handle = self.clone();
        let id = service.subscribe(MODEL_CHANGE, move |change| handle.regenerate(&change.model));

        let mut inner = self.lock();
        inner.subscription = Some(id);
        inner.state = SurfaceState::Ready;
        info!("Render surface ready ({} shape)", model.shape.name);
        Ok(id)
    }

    /// Plan and queue a new cycle for `model`, superseding any queued one.
    pub fn regenerate(&self, model: &DiagramModel) -> Result<(), DiagramError> {
        let mut inner = self.lock();
        let cycle = RenderCycle::plan(model, inner.generation + 1)?;
        inner.generation = cycle.generation;
        inner.regenerations += 1;
        debug!(
            "Queued render cycle {} ({} / {} / {})",
            cycle.generation, model.shape.name, model.color.name, model.texture.name
        );
        inner.pending = Some(cycle);
        Ok(())
    }

    pub fn take_pending(&self) -> Option<RenderCycle> {
        self.lock().pending.take()
    }

    /// Whether `generation` is still the newest cycle.
    pub fn is_current(&self, generation: u64) -> bool {
        self.lock().generation == generation
    }

    /// Start the animation loop. Returns `false` if it was already running.
    pub fn start_animation(&self) -> bool {
        let mut inner = self.lock();
        if inner.animating {
            return false;
        }
        inner.animating = true;
        true
    }

    pub fn is_animating(&self) -> bool {
        self.lock().animating
    }

    pub fn state(&self) -> SurfaceState {
        self.lock().state
    }

    /// Number of cycles planned since creation.
    pub fn regenerations(&self) -> u64 {
        self.lock().regenerations
    }

    /// Drop the subscription and any queued cycle.
    pub fn teardown(&self, service: &mut DiagramService) -> bool {
        let mut inner = self.lock();
        inner.pending = None;
        inner.state = SurfaceState::Uninitialized;
        match inner.subscription.take() {
            Some(id) => service.unsubscribe(MODEL_CHANGE, id),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::{CatalogEntry, ShapeOption, TextureOption};

    static PYRAMID: ShapeOption = ShapeOption {
        key: "PYRAMID",
        name: "Pyramid",
        value: "pyramid",
    };

    #[test]
    fn initialize_queues_the_default_cube() {
        let mut service = DiagramService::default();
        let surface = RenderSurface::default();
        assert_eq!(surface.state(), SurfaceState::Uninitialized);

        surface.initialize(&mut service).unwrap();
        assert_eq!(surface.state(), SurfaceState::Ready);
        assert_eq!(service.subscriber_count(MODEL_CHANGE), 1);

        let cycle = surface.take_pending().unwrap();
        assert_eq!(cycle.generation, 1);
        assert_eq!(cycle.geometry, Geometry::cube());
        assert_eq!(cycle.camera_distance(), 500.0);
        assert_eq!(cycle.texture_path, "textures/angle-grid.png");
        assert!(surface.take_pending().is_none());
    }

    #[test]
    fn initialize_twice_keeps_one_subscription() {
        let mut service = DiagramService::default();
        let surface = RenderSurface::default();
        let first = surface.initialize(&mut service).unwrap();
        let second = surface.initialize(&mut service).unwrap();
        assert_eq!(first, second);
        assert_eq!(service.subscriber_count(MODEL_CHANGE), 1);
        assert_eq!(surface.regenerations(), 1);
    }

    #[test]
    fn model_change_supersedes_the_queued_cycle() {
        let mut service = DiagramService::default();
        let surface = RenderSurface::default();
        surface.initialize(&mut service).unwrap();

        service.get().texture = TextureOption::lookup("GRID").unwrap();
        service.publish_change().unwrap();

        let cycle = surface.take_pending().unwrap();
        assert_eq!(cycle.generation, 2);
        assert_eq!(cycle.texture_path, "textures/grid.png");
        assert!(!surface.is_current(1), "first load is stale now");
        assert!(surface.is_current(2));
    }

    #[test]
    fn unsupported_shape_is_fatal_for_the_cycle() {
        let mut service = DiagramService::default();
        let surface = RenderSurface::default();
        surface.initialize(&mut service).unwrap();
        surface.take_pending();

        // Bypass the control panel fallback.
        service.get().shape = &PYRAMID;
        let err = service.publish_change().unwrap_err();

        assert!(matches!(err, DiagramError::UnsupportedShape { ref key, .. } if key == "PYRAMID"));
        assert!(surface.take_pending().is_none());
        assert!(surface.is_current(1));
    }

    #[test]
    fn initialize_with_unsupported_shape_does_not_subscribe() {
        let mut service = DiagramService::default();
        service.get().shape = &PYRAMID;
        let surface = RenderSurface::default();

        assert!(surface.initialize(&mut service).is_err());
        assert_eq!(surface.state(), SurfaceState::Uninitialized);
        assert_eq!(service.subscriber_count(MODEL_CHANGE), 0);
    }

    #[test]
    fn animation_starts_once() {
        let surface = RenderSurface::default();
        assert!(!surface.is_animating());
        assert!(surface.start_animation());
        assert!(!surface.start_animation());
        assert!(surface.is_animating());
    }

    #[test]
    fn teardown_unsubscribes() {
        let mut service = DiagramService::default();
        let surface = RenderSurface::default();
        surface.initialize(&mut service).unwrap();

        assert!(surface.teardown(&mut service));
        assert_eq!(service.subscriber_count(MODEL_CHANGE), 0);
        assert_eq!(surface.state(), SurfaceState::Uninitialized);
        assert!(!surface.teardown(&mut service));

        service.get().shape = ShapeOption::lookup("SPHERE").unwrap();
        assert_eq!(service.publish_change().unwrap(), 0);
        assert!(surface.take_pending().is_none());
    }
}
