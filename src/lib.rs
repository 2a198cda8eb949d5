//! # ifc-dot: IFC building models as GraphViz graphs
//!
//! Renders the objects of an IFC model and the relationships between them
//! as a `strict graph` for GraphViz, optionally focused on a small set of
//! entities of interest.
//!
//! ## Design Principles
//!
//! 1. **Trait-first**: `ModelBackend` is the contract between exporter and model
//! 2. **Clean DTOs**: `Entity`, `Relationship`, `Value` cross all boundaries
//! 3. **Parser owns nothing**: STEP text → `StepFile` is a pure function
//! 4. **Skip, don't fail**: unknown kinds and dangling references never abort an export
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ifc_dot::{IfcModel, InterestSet};
//!
//! # fn example() -> ifc_dot::Result<()> {
//! let model = IfcModel::open_step("house.ifc")?;
//!
//! // Only entity #1234; the returned set also holds its direct neighbours.
//! let mut out = Vec::new();
//! let next = model.write_dot(&mut out, &InterestSet::from([1234]))?;
//!
//! // Drawing again with `next` shows #1234 with everything connected to it.
//! model.write_dot(&mut std::io::stdout(), &next)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Output
//!
//! | Statement | Example |
//! |-----------|---------|
//! | node | `"#12=IfcWall" [color="#9999ff",style=filled];` |
//! | edge | `"#12=IfcWall"--"#40=IfcOpeningElement" [weight=9,style=solid];` |
//! | cluster | `subgraph id_5 { cluster=true; "#5=IfcSite"; ... }` |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod classify;
pub mod decompose;
pub mod interest;
pub mod config;
pub mod storage;
pub mod step;
pub mod export;

// ============================================================================
// Re-exports: Model (the DTOs)
// ============================================================================

pub use model::{Entity, EntityId, Relationship, Schema, Value, AttributeMap};

// ============================================================================
// Re-exports: Core
// ============================================================================

pub use classify::{classify, Category};
pub use decompose::{decompose, EdgeShape, LineStyle, RelKind, Weight};
pub use interest::{filter_edge, InterestSet, Verdict};
pub use config::{DotConfig, GraphAttributes, Palette};
pub use export::{expand_interest, write_dot, write_dot_with, DotOutput, ExportStats, Expansion};

// ============================================================================
// Re-exports: Storage
// ============================================================================

pub use storage::{BackendConfig, MemoryModel, ModelBackend};
pub use step::LoadStats;

// ============================================================================
// Top-level model handle
// ============================================================================

/// The primary entry point. An `IfcModel` wraps a model backend and
/// exports it as dot.
pub struct IfcModel<B: ModelBackend> {
    backend: B,
}

impl<B: ModelBackend> IfcModel<B> {
    /// Create a handle over the given backend.
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    /// Write a dot graph with the default configuration. Returns the
    /// next-interest set (a superset of `interest`).
    pub fn write_dot(
        &self,
        writer: &mut dyn std::io::Write,
        interest: &InterestSet,
    ) -> Result<InterestSet> {
        export::write_dot(&self.backend, writer, interest)
    }

    /// Write a dot graph with an explicit configuration.
    pub fn write_dot_with(
        &self,
        writer: &mut dyn std::io::Write,
        interest: &InterestSet,
        config: &DotConfig,
    ) -> Result<DotOutput> {
        export::write_dot_with(&self.backend, writer, interest, config)
    }

    /// Grow `seed` until it stops changing (or `max_rounds` exports ran).
    pub fn expand(
        &self,
        seed: &InterestSet,
        config: &DotConfig,
        max_rounds: Option<usize>,
    ) -> Result<Expansion> {
        export::expand_interest(&self.backend, seed, config, max_rounds)
    }

    /// Access the underlying backend (for advanced use).
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl IfcModel<MemoryModel> {
    /// Empty in-memory model, filled through [`IfcModel::backend`].
    pub fn open_memory() -> Self {
        Self::with_backend(MemoryModel::new())
    }

    /// Load an ISO 10303-21 (`.ifc`) file.
    pub fn open_step(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Ok(Self::open_step_with_stats(path)?.0)
    }

    /// Load an ISO 10303-21 (`.ifc`) file and report what the loader kept.
    pub fn open_step_with_stats(path: impl AsRef<std::path::Path>) -> Result<(Self, LoadStats)> {
        let (model, stats) = step::load_file(path)?;
        Ok((Self::with_backend(model), stats))
    }

    /// Open whatever `config` points at.
    pub fn open(config: &BackendConfig) -> Result<Self> {
        Ok(Self::with_backend(storage::open(config)?))
    }
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("STEP syntax error at position {position}: {message}")]
    SyntaxError { position: usize, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
