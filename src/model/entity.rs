//! Entity (node) of the building model.

use serde::{Deserialize, Serialize};

use super::Schema;

/// STEP instance name, the `#n` of `#n=IFCWALL(...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntityId {
    fn from(v: u64) -> Self { EntityId(v) }
}

/// An object entity of the model: an id plus its IFC type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub id: EntityId,
    /// Canonical IFC type name, e.g. `IfcWall`.
    pub type_name: String,
    /// Schema release `type_name` is resolved against.
    pub schema: Schema,
}

impl Entity {
    pub fn new(id: impl Into<EntityId>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            schema: Schema::default(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// True if this entity's type is `ancestor` or one of its subtypes.
    pub fn is_a(&self, ancestor: &str) -> bool {
        self.schema.is_a(&self.type_name, ancestor)
    }

    /// Display label used for graph statements: `#<id>=<type>`.
    pub fn label(&self) -> String {
        format!("#{}={}", self.id, self.type_name)
    }
}
