//! Fill a [`MemoryModel`] from a parsed exchange file.
//!
//! Only two families of instances are kept:
//! - object definitions (`IfcObject`, `IfcContext`, ...) become entities;
//! - relationships become records whose positional parameters are named
//!   after the schema layout.
//!
//! Type names resolve against the release named by `FILE_SCHEMA`; a file
//! without a recognised identifier is read as IFC4.
//!
//! Geometry, property sets, units and anything the taxonomy does not know
//! are skipped. So are complex instances, which IFC does not use for
//! object definitions.

use tracing::{debug, info, warn};

use crate::model::{Entity, Relationship, Schema};
use crate::storage::MemoryModel;
use super::ast::{InstanceBody, StepFile};

/// Counts reported after a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub entities: usize,
    pub relationships: usize,
    pub skipped: usize,
}

/// Build a model from a parsed file.
pub fn load(file: &StepFile) -> (MemoryModel, LoadStats) {
    let model = MemoryModel::new();
    let mut stats = LoadStats::default();

    let identifier = file.schemas().into_iter().next();
    let schema = match identifier.as_deref().map(|id| (id, Schema::from_identifier(id))) {
        Some((_, Some(schema))) => schema,
        Some((id, None)) => {
            warn!(schema = id, "unrecognised schema, reading as IFC4");
            Schema::default()
        }
        None => Schema::default(),
    };
    if let Some(identifier) = identifier {
        model.set_schema(identifier);
    }

    for instance in &file.instances {
        let record = match &instance.body {
            InstanceBody::Simple(record) => record,
            InstanceBody::Complex(parts) => {
                debug!(id = %instance.id, parts = parts.len(), "skipping complex instance");
                stats.skipped += 1;
                continue;
            }
        };

        let Some(type_name) = schema.canonical_name(&record.keyword) else {
            stats.skipped += 1;
            continue;
        };

        if schema.is_a(type_name, "IfcRelationship") {
            let mut rel = Relationship::new(instance.id, type_name).with_schema(schema);
            if let Some(names) = schema.attribute_names(type_name) {
                for (name, value) in names.iter().zip(&record.params) {
                    if !value.is_null() {
                        rel.attributes.insert((*name).to_string(), value.clone());
                    }
                }
            }
            model.add_relationship(rel);
            stats.relationships += 1;
        } else if schema.is_a(type_name, "IfcObjectDefinition") {
            model.add_entity(Entity::new(instance.id, type_name).with_schema(schema));
            stats.entities += 1;
        } else {
            stats.skipped += 1;
        }
    }

    info!(
        schema = model.schema().as_deref().unwrap_or("unknown"),
        entities = stats.entities,
        relationships = stats.relationships,
        skipped = stats.skipped,
        "loaded model"
    );

    (model, stats)
}
