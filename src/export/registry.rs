//! Node registry: entity id → display label.
//!
//! Filled while nodes are enumerated, then frozen. Edge and cluster
//! emission only ever see the frozen [`Registry`], so an id that was not
//! registered during the node pass can never be drawn.

use hashbrown::HashMap;

use crate::model::{Entity, EntityId};

/// Registry under construction.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    labels: HashMap<EntityId, String>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity and return its label.
    pub fn register(&mut self, entity: &Entity) -> &str {
        self.labels.entry(entity.id).or_insert_with(|| entity.label())
    }

    pub fn freeze(self) -> Registry {
        Registry { labels: self.labels }
    }
}

/// Read-only registry.
#[derive(Debug, Default)]
pub struct Registry {
    labels: HashMap<EntityId, String>,
}

impl Registry {
    pub fn label(&self, id: EntityId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }
}
