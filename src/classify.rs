//! Entity classification: picks the visual category of a node.
//!
//! The IFC categories overlap (an `IfcDoor` is also an `IfcElement`), so
//! the rules are an ordered list evaluated until the first match. Reordering
//! [`RULES`] changes the output.

use crate::model::Entity;

/// Visual category of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Group,
    SpatialElement,
    ElementAssembly,
    OpeningElement,
    DoorOrWindow,
    Element,
    StructuralItem,
    Unclassified,
}

/// Priority chain: the first rule any of whose types the entity `is_a` wins.
pub const RULES: &[(&[&str], Category)] = &[
    (&["IfcGroup"], Category::Group),
    // IFC2X3 has no IfcSpatialElement; its spatial types stop one level lower.
    (&["IfcSpatialElement", "IfcSpatialStructureElement"], Category::SpatialElement),
    (&["IfcElementAssembly"], Category::ElementAssembly),
    (&["IfcOpeningElement"], Category::OpeningElement),
    (&["IfcDoor", "IfcWindow"], Category::DoorOrWindow),
    (&["IfcElement"], Category::Element),
    (&["IfcStructuralItem"], Category::StructuralItem),
];

/// Classify an entity. Total: anything unmatched is `Unclassified`.
pub fn classify(entity: &Entity) -> Category {
    RULES
        .iter()
        .find(|(types, _)| types.iter().any(|ty| entity.is_a(ty)))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Unclassified)
}
