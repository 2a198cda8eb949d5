//! # Building Model
//!
//! Plain DTOs for the entities and relationship records of an IFC model,
//! plus the static schema taxonomy they are classified against.
//!
//! Design rule: no I/O, no state, no graph output here.

pub mod entity;
pub mod relationship;
pub mod value;
pub mod attribute_map;
pub mod schema;

pub use entity::{Entity, EntityId};
pub use relationship::Relationship;
pub use value::Value;
pub use attribute_map::AttributeMap;
pub use schema::Schema;
