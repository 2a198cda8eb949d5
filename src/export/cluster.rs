//! Cluster emission: nested `subgraph` blocks mirroring spatial
//! decomposition (site → building → storey → space → element).
//!
//! The hierarchy is never materialised: each level asks the backend for its
//! direct children while writing. Clusters are pruned with the caller's
//! interest set only; pruning never feeds next-interest.

use std::io::Write;

use hashbrown::HashSet;
use tracing::trace;

use crate::interest::InterestSet;
use crate::model::{Entity, EntityId};
use crate::storage::ModelBackend;
use crate::Result;
use super::dot;
use super::registry::Registry;

pub(super) struct ClusterEmitter<'a, B: ModelBackend + ?Sized> {
    pub backend: &'a B,
    pub registry: &'a Registry,
    pub interest: &'a InterestSet,
    pub virtual_type: &'a str,
    /// Entities on the current recursion path.
    path: HashSet<EntityId>,
    pub clusters_written: usize,
}

impl<'a, B: ModelBackend + ?Sized> ClusterEmitter<'a, B> {
    pub fn new(
        backend: &'a B,
        registry: &'a Registry,
        interest: &'a InterestSet,
        virtual_type: &'a str,
    ) -> Self {
        Self {
            backend,
            registry,
            interest,
            virtual_type,
            path: HashSet::new(),
            clusters_written: 0,
        }
    }

    fn visible(&self, entity: &Entity) -> bool {
        !entity.is_a(self.virtual_type) && self.interest.admits(entity.id)
    }

    /// Write the cluster rooted at `entity`, recursing into its children.
    pub fn emit(&mut self, writer: &mut dyn Write, entity: &Entity) -> Result<()> {
        if !self.visible(entity) {
            return Ok(());
        }
        let registry = self.registry;
        let Some(label) = registry.label(entity.id) else {
            trace!(id = %entity.id, "cluster root not registered");
            return Ok(());
        };
        if !self.path.insert(entity.id) {
            trace!(id = %entity.id, "decomposition cycle");
            return Ok(());
        }

        let children = self.backend.decomposition(entity.id)?;
        if !children.is_empty() {
            dot::open_cluster(writer, entity.id)?;
            dot::write_member(writer, label)?;
            for child in &children {
                if !self.visible(child) {
                    continue;
                }
                if let Some(child_label) = registry.label(child.id) {
                    dot::write_member(writer, child_label)?;
                }
                self.emit(writer, child)?;
            }
            dot::close_cluster(writer)?;
            self.clusters_written += 1;
        }

        self.path.remove(&entity.id);
        Ok(())
    }
}
