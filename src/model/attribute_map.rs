//! AttributeMap: named attribute values of a relationship record.

use std::collections::HashMap;
use super::Value;

/// A map of attribute names (as in the IFC schema) to values.
pub type AttributeMap = HashMap<String, Value>;
