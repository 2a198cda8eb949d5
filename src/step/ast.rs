//! Parsed form of a STEP exchange file.

use crate::model::{EntityId, Value};

/// A whole exchange file: header records plus data-section instances.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepFile {
    pub header: Vec<Record>,
    pub instances: Vec<Instance>,
}

/// `KEYWORD(param, ...)`: a header entry, or one part of a complex instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub keyword: String,
    pub params: Vec<Value>,
}

/// `#id = ...;` in a DATA section.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub id: EntityId,
    pub body: InstanceBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InstanceBody {
    /// `#1=IFCWALL(...);`
    Simple(Record),
    /// `#1=(IFCA(...)IFCB(...));`: external mapping of a multi-leaf type.
    Complex(Vec<Record>),
}

impl StepFile {
    /// Schema identifiers from `FILE_SCHEMA(('IFC4'))`.
    pub fn schemas(&self) -> Vec<String> {
        self.header
            .iter()
            .filter(|r| r.keyword.eq_ignore_ascii_case("FILE_SCHEMA"))
            .flat_map(|r| r.params.iter())
            .flat_map(|p| match p {
                Value::List(items) => items.iter().filter_map(Value::as_str).map(String::from).collect(),
                other => other.as_str().map(String::from).into_iter().collect::<Vec<_>>(),
            })
            .collect()
    }
}
