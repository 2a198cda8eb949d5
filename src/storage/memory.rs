//! In-memory model backend.
//!
//! This is the reference implementation of `ModelBackend`.
//! It uses simple HashMaps protected by RwLock, so one loaded model can be
//! shared between threads that each export to their own writer.
//!
//! Entities and relationships keep their insertion order; for a STEP file
//! that is file order.

use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;

use crate::decompose::{decompose, RelKind};
use crate::model::*;
use crate::Result;
use super::ModelBackend;

// ============================================================================
// MemoryModel
// ============================================================================

/// In-memory building model.
#[derive(Clone, Default)]
pub struct MemoryModel {
    inner: Arc<MemoryInner>,
}

#[derive(Default)]
struct MemoryInner {
    entities: RwLock<HashMap<EntityId, Entity>>,
    /// ids in first-insertion order
    entity_order: RwLock<Vec<EntityId>>,
    relationships: RwLock<Vec<Relationship>>,
    /// parent id → direct children, in relationship order
    children: RwLock<HashMap<EntityId, Vec<EntityId>>>,
    schema: RwLock<Option<String>>,
}

impl MemoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entity.
    pub fn add_entity(&self, entity: Entity) -> EntityId {
        let id = entity.id;
        let previous = self.inner.entities.write().insert(id, entity);
        if previous.is_none() {
            self.inner.entity_order.write().push(id);
        }
        id
    }

    /// Shorthand for `add_entity(Entity::new(id, type_name))`.
    pub fn insert_entity(&self, id: u64, type_name: &str) -> EntityId {
        self.add_entity(Entity::new(id, type_name))
    }

    /// Append a relationship record, indexing it if it decomposes its
    /// relating entity.
    pub fn add_relationship(&self, rel: Relationship) {
        if matches!(
            RelKind::of(&rel),
            Some(RelKind::Aggregates | RelKind::ContainedInSpatialStructure)
        ) {
            if let Some(shape) = decompose(&rel) {
                let mut children = self.inner.children.write();
                let list = children.entry(shape.relating).or_default();
                for child in shape.related {
                    if !list.contains(&child) {
                        list.push(child);
                    }
                }
            }
        }
        self.inner.relationships.write().push(rel);
    }

    /// Schema identifier declared by the source file, e.g. `IFC4`.
    pub fn schema(&self) -> Option<String> {
        self.inner.schema.read().clone()
    }

    pub fn set_schema(&self, schema: impl Into<String>) {
        *self.inner.schema.write() = Some(schema.into());
    }
}

// ============================================================================
// ModelBackend impl
// ============================================================================

impl ModelBackend for MemoryModel {
    fn entities_of_type(&self, type_name: &str) -> Result<Vec<Entity>> {
        let entities = self.inner.entities.read();
        let order = self.inner.entity_order.read();
        Ok(order
            .iter()
            .filter_map(|id| entities.get(id))
            .filter(|e| e.is_a(type_name))
            .cloned()
            .collect())
    }

    fn entity(&self, id: EntityId) -> Result<Option<Entity>> {
        Ok(self.inner.entities.read().get(&id).cloned())
    }

    fn relationships(&self) -> Result<Vec<Relationship>> {
        Ok(self.inner.relationships.read().clone())
    }

    fn decomposition(&self, id: EntityId) -> Result<Vec<Entity>> {
        let children = self.inner.children.read();
        let entities = self.inner.entities.read();
        Ok(children
            .get(&id)
            .map(|ids| ids.iter().filter_map(|c| entities.get(c).cloned()).collect())
            .unwrap_or_default())
    }

    fn entity_count(&self) -> Result<usize> {
        Ok(self.inner.entities.read().len())
    }

    fn relationship_count(&self) -> Result<usize> {
        Ok(self.inner.relationships.read().len())
    }
}
