//! Attribute value type matching the STEP (ISO 10303-21) parameter grammar.

use smallvec::SmallVec;

use super::EntityId;

/// A single attribute value of an entity instance.
///
/// Covers every parameter form a STEP data section can carry:
/// - Unset / derived: `$`, `*`
/// - Scalars: integer, real, string, enumeration (`.NOTDEFINED.`), binary
/// - Graph: instance reference (`#42`)
/// - Containers: list (`(#1,#2)`), typed value (`IFCLABEL('x')`)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Derived,
    Int(i64),
    Float(f64),
    String(String),
    Enum(String),
    Binary(String),
    Ref(EntityId),
    List(Vec<Value>),
    Typed { type_name: String, value: Box<Value> },
}

// ============================================================================
// Accessors
// ============================================================================

impl Value {
    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// Extract a single instance reference.
    pub fn as_ref_id(&self) -> Option<EntityId> {
        match self {
            Value::Ref(id) => Some(*id),
            Value::Typed { value, .. } => value.as_ref_id(),
            _ => None,
        }
    }

    /// Extract every instance reference held directly by this value.
    ///
    /// A single reference yields one id, a list yields its reference members
    /// in order (nulls and non-references are dropped), anything else is empty.
    pub fn ref_ids(&self) -> SmallVec<[EntityId; 4]> {
        match self {
            Value::Ref(id) => smallvec::smallvec![*id],
            Value::List(items) => items.iter().filter_map(Value::as_ref_id).collect(),
            Value::Typed { value, .. } => value.ref_ids(),
            _ => SmallVec::new(),
        }
    }

    /// Attempt to extract as &str
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Typed { value, .. } => value.as_str(),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<i64> for Value { fn from(v: i64) -> Self { Value::Int(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::Float(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<EntityId> for Value { fn from(v: EntityId) -> Self { Value::Ref(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::List(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(EntityId(7)), Value::Ref(EntityId(7)));
        assert_eq!(Value::from(None::<i64>), Value::Null);
    }

    #[test]
    fn test_ref_ids_from_list_skips_nulls() {
        let v = Value::List(vec![
            Value::Ref(EntityId(1)),
            Value::Null,
            Value::Ref(EntityId(3)),
        ]);
        assert_eq!(v.ref_ids().as_slice(), &[EntityId(1), EntityId(3)]);
        assert_eq!(Value::Ref(EntityId(9)).ref_ids().as_slice(), &[EntityId(9)]);
        assert!(Value::Null.ref_ids().is_empty());
    }
}
