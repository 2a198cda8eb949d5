//! # Model Backend Trait
//!
//! This is THE contract between the dot exporter and whatever holds the
//! parsed building model. The exporter needs exactly three things from it:
//! typed entity enumeration, the relationship records, and the direct
//! decomposition children of an entity.
//!
//! ## Implementations
//!
//! | Backend | Module | Description |
//! |---------|--------|-------------|
//! | `MemoryModel` | `memory` | In-memory model, filled by hand or from a STEP file |

pub mod memory;

use std::path::PathBuf;

use crate::model::*;
use crate::Result;

pub use memory::MemoryModel;

// ============================================================================
// Backend Configuration
// ============================================================================

/// Where a model comes from.
#[derive(Debug, Clone)]
pub enum BackendConfig {
    /// Empty in-memory model, populated through the `MemoryModel` API.
    Memory,

    /// ISO 10303-21 (`.ifc`) file loaded into memory.
    Step { path: PathBuf },
}

/// Open a backend for the given configuration.
pub fn open(config: &BackendConfig) -> Result<MemoryModel> {
    match config {
        BackendConfig::Memory => Ok(MemoryModel::new()),
        BackendConfig::Step { path } => crate::step::load_file(path).map(|(model, _)| model),
    }
}

// ============================================================================
// ModelBackend Trait
// ============================================================================

/// Read-only access to a parsed building model.
///
/// Enumeration order must be stable for a given model: the exporter writes
/// statements in the order the backend yields them.
pub trait ModelBackend: Send + Sync {
    /// All entities whose type is `type_name` or one of its subtypes.
    fn entities_of_type(&self, type_name: &str) -> Result<Vec<Entity>>;

    /// Look up one entity. Returns None if not found.
    fn entity(&self, id: EntityId) -> Result<Option<Entity>>;

    /// Every relationship record of the model.
    fn relationships(&self) -> Result<Vec<Relationship>>;

    /// Direct decomposition children of an entity (parts of an aggregate,
    /// elements contained in a spatial structure). Empty for leaves and
    /// unknown ids.
    fn decomposition(&self, id: EntityId) -> Result<Vec<Entity>>;

    fn entity_count(&self) -> Result<usize>;

    fn relationship_count(&self) -> Result<usize>;
}
