//! Relationship record linking entities of the building model.

use smallvec::SmallVec;

use super::{AttributeMap, EntityId, Schema, Value};

/// A relationship entity (`IfcRel*`) with its named attributes.
///
/// Endpoints are not stored as src/dst: which attribute is the "relating"
/// side and which is the "related" side depends on the relationship kind,
/// so they are read by name through [`Relationship::reference`] and
/// [`Relationship::references`].
#[derive(Debug, Clone, PartialEq)]
pub struct Relationship {
    pub id: EntityId,
    /// Canonical IFC type name, e.g. `IfcRelAggregates`.
    pub type_name: String,
    pub attributes: AttributeMap,
    pub schema: Schema,
}

impl Relationship {
    pub fn new(id: impl Into<EntityId>, type_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            type_name: type_name.into(),
            attributes: AttributeMap::new(),
            schema: Schema::default(),
        }
    }

    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn is_a(&self, ancestor: &str) -> bool {
        self.schema.is_a(&self.type_name, ancestor)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Resolve a single-reference attribute. `None` if unset or not a reference.
    pub fn reference(&self, key: &str) -> Option<EntityId> {
        self.get(key).and_then(Value::as_ref_id)
    }

    /// Resolve an attribute holding one reference or a list of references.
    pub fn references(&self, key: &str) -> SmallVec<[EntityId; 4]> {
        self.get(key).map(Value::ref_ids).unwrap_or_default()
    }
}
