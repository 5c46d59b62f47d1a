use bevy::prelude::*;

use super::bus::{NotificationBus, SubscriptionId};
use super::model::DiagramModel;
use crate::error::DiagramError;

/// Event published whenever the model changes.
pub const MODEL_CHANGE: &str = "model:change";

/// Payload of every [`MODEL_CHANGE`] publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelChanged {
    pub model: DiagramModel,
}

/// Owns the canonical model and the notification bus.
#[derive(Resource, Debug, Default)]
pub struct DiagramService {
    cache: Option<DiagramModel>,
    bus: NotificationBus<ModelChanged>,
}

impl DiagramService {
    /// New model populated with the catalog defaults. Does not touch any cache.
    pub fn create_model() -> DiagramModel {
        DiagramModel::default()
    }

    /// The cached model, created on first use.
    pub fn get(&mut self) -> &mut DiagramModel {
        self.cache.get_or_insert_with(Self::create_model)
    }

    /// Copy of the cached model, or the defaults if nothing was created yet.
    pub fn current(&self) -> DiagramModel {
        self.cache.unwrap_or_else(Self::create_model)
    }

    /// Replace the cached model and notify subscribers.
    pub fn update_cache(&mut self, model: DiagramModel) -> Result<usize, DiagramError> {
        self.cache = Some(model);
        self.publish_change()
    }

    /// Publish [`MODEL_CHANGE`] carrying the current model.
    pub fn publish_change(&mut self) -> Result<usize, DiagramError> {
        let model = *self.get();
        self.bus.publish(MODEL_CHANGE, &ModelChanged { model })
    }

    pub fn subscribe<F>(&mut self, topic: &str, callback: F) -> SubscriptionId
    where
        F: Fn(&ModelChanged) -> Result<(), DiagramError> + Send + Sync + 'static,
    {
        self.bus.subscribe(topic, callback)
    }

    pub fn unsubscribe(&mut self, topic: &str, id: SubscriptionId) -> bool {
        self.bus.unsubscribe(topic, id)
    }

    pub fn publish(&self, topic: &str, payload: &ModelChanged) -> Result<usize, DiagramError> {
        self.bus.publish(topic, payload)
    }

    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.bus.subscriber_count(topic)
    }
}
