//! Relationship decomposition: turns a relationship record into the shape
//! of the edges it contributes.
//!
//! ```text
//! IfcRelAggregates { RelatingObject: #1, RelatedObjects: (#2,#3) }
//!   → EdgeShape { relating: #1, related: [#2, #3], weight: High, style: Solid }
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::model::{EntityId, Relationship};

/// Edge weight hint for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weight {
    Normal,
    High,
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weight::Normal => write!(f, "1"),
            Weight::High => write!(f, "9"),
        }
    }
}

/// Edge line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStyle {
    Solid,
    Dashed,
    Dotted,
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineStyle::Solid => write!(f, "solid"),
            LineStyle::Dashed => write!(f, "dashed"),
            LineStyle::Dotted => write!(f, "dotted"),
        }
    }
}

/// Relationship kinds that contribute edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelKind {
    Aggregates,
    Nests,
    AssignsToGroup,
    ConnectsElements,
    ConnectsStructuralMember,
    ContainedInSpatialStructure,
    FillsElement,
    VoidsElement,
    SpaceBoundary,
}

/// How a kind is read: which attribute holds each end, and how it is drawn.
struct KindSpec {
    kind: RelKind,
    type_name: &'static str,
    relating: &'static str,
    related: &'static str,
    weight: Weight,
    style: LineStyle,
}

const KINDS: &[KindSpec] = &[
    KindSpec {
        kind: RelKind::Aggregates,
        type_name: "IfcRelAggregates",
        relating: "RelatingObject",
        related: "RelatedObjects",
        weight: Weight::High,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::Nests,
        type_name: "IfcRelNests",
        relating: "RelatingObject",
        related: "RelatedObjects",
        weight: Weight::High,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::AssignsToGroup,
        type_name: "IfcRelAssignsToGroup",
        relating: "RelatingGroup",
        related: "RelatedObjects",
        weight: Weight::Normal,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::ConnectsElements,
        type_name: "IfcRelConnectsElements",
        relating: "RelatingElement",
        related: "RelatedElement",
        weight: Weight::High,
        style: LineStyle::Dashed,
    },
    KindSpec {
        kind: RelKind::ConnectsStructuralMember,
        type_name: "IfcRelConnectsStructuralMember",
        relating: "RelatingStructuralMember",
        related: "RelatedStructuralConnection",
        weight: Weight::Normal,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::ContainedInSpatialStructure,
        type_name: "IfcRelContainedInSpatialStructure",
        relating: "RelatingStructure",
        related: "RelatedElements",
        weight: Weight::Normal,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::FillsElement,
        type_name: "IfcRelFillsElement",
        relating: "RelatingOpeningElement",
        related: "RelatedBuildingElement",
        weight: Weight::High,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::VoidsElement,
        type_name: "IfcRelVoidsElement",
        relating: "RelatingBuildingElement",
        related: "RelatedOpeningElement",
        weight: Weight::High,
        style: LineStyle::Solid,
    },
    KindSpec {
        kind: RelKind::SpaceBoundary,
        type_name: "IfcRelSpaceBoundary",
        relating: "RelatingSpace",
        related: "RelatedBuildingElement",
        weight: Weight::High,
        style: LineStyle::Dotted,
    },
];

/// Directional shape of a relationship: one relating end, many related ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeShape {
    pub kind: RelKind,
    pub relating: EntityId,
    pub related: SmallVec<[EntityId; 4]>,
    pub weight: Weight,
    pub style: LineStyle,
}

impl RelKind {
    /// Kind of a relationship record, matching subtypes as their parent.
    pub fn of(rel: &Relationship) -> Option<RelKind> {
        kind_entry(rel).map(|entry| entry.kind)
    }
}

fn kind_entry(rel: &Relationship) -> Option<&'static KindSpec> {
    KINDS.iter().find(|entry| rel.is_a(entry.type_name))
}

/// Decompose a relationship into its edge shape.
///
/// `None` if the kind contributes no edges, or if the relating end is unset.
pub fn decompose(rel: &Relationship) -> Option<EdgeShape> {
    let entry = kind_entry(rel)?;
    let relating = rel.reference(entry.relating)?;
    Some(EdgeShape {
        kind: entry.kind,
        relating,
        related: rel.references(entry.related),
        weight: entry.weight,
        style: entry.style,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregates() {
        let rel = Relationship::new(10, "IfcRelAggregates")
            .with_attribute("RelatingObject", EntityId(1))
            .with_attribute("RelatedObjects", vec![EntityId(2), EntityId(3)]);
        let shape = decompose(&rel).unwrap();
        assert_eq!(shape.kind, RelKind::Aggregates);
        assert_eq!(shape.relating, EntityId(1));
        assert_eq!(shape.related.as_slice(), &[EntityId(2), EntityId(3)]);
        assert_eq!(shape.weight, Weight::High);
        assert_eq!(shape.style, LineStyle::Solid);
    }

    #[test]
    fn test_contained_in_spatial_structure_reads_swapped_order() {
        let rel = Relationship::new(10, "IfcRelContainedInSpatialStructure")
            .with_attribute("RelatedElements", vec![EntityId(5)])
            .with_attribute("RelatingStructure", EntityId(4));
        let shape = decompose(&rel).unwrap();
        assert_eq!(shape.relating, EntityId(4));
        assert_eq!(shape.related.as_slice(), &[EntityId(5)]);
        assert_eq!(shape.weight, Weight::Normal);
    }

    #[test]
    fn test_singleton_kinds_and_styles() {
        let connects = Relationship::new(10, "IfcRelConnectsPathElements")
            .with_attribute("RelatingElement", EntityId(1))
            .with_attribute("RelatedElement", EntityId(2));
        let shape = decompose(&connects).unwrap();
        assert_eq!(shape.kind, RelKind::ConnectsElements);
        assert_eq!(shape.style, LineStyle::Dashed);
        assert_eq!(shape.related.as_slice(), &[EntityId(2)]);

        let boundary = Relationship::new(11, "IfcRelSpaceBoundary2ndLevel")
            .with_attribute("RelatingSpace", EntityId(3))
            .with_attribute("RelatedBuildingElement", EntityId(4));
        let shape = decompose(&boundary).unwrap();
        assert_eq!(shape.kind, RelKind::SpaceBoundary);
        assert_eq!(shape.style, LineStyle::Dotted);
        assert_eq!(shape.weight, Weight::High);

        let member = Relationship::new(12, "IfcRelConnectsWithEccentricity")
            .with_attribute("RelatingStructuralMember", EntityId(5))
            .with_attribute("RelatedStructuralConnection", EntityId(6));
        let shape = decompose(&member).unwrap();
        assert_eq!(shape.kind, RelKind::ConnectsStructuralMember);
        assert_eq!(shape.weight, Weight::Normal);
    }

    #[test]
    fn test_group_assignment() {
        let rel = Relationship::new(10, "IfcRelAssignsToGroup")
            .with_attribute("RelatedObjects", vec![EntityId(2)])
            .with_attribute("RelatingGroup", EntityId(1));
        let shape = decompose(&rel).unwrap();
        assert_eq!(shape.kind, RelKind::AssignsToGroup);
        assert_eq!(shape.relating, EntityId(1));
        assert_eq!(shape.weight, Weight::Normal);
    }

    #[test]
    fn test_unrecognized_kind() {
        let rel = Relationship::new(10, "IfcRelDefinesByProperties")
            .with_attribute("RelatingPropertyDefinition", EntityId(1));
        assert_eq!(decompose(&rel), None);
        assert_eq!(RelKind::of(&rel), None);
    }

    #[test]
    fn test_null_relating_is_not_applicable() {
        let rel = Relationship::new(10, "IfcRelFillsElement")
            .with_attribute("RelatedBuildingElement", EntityId(2));
        assert_eq!(decompose(&rel), None);
        assert_eq!(RelKind::of(&rel), Some(RelKind::FillsElement));
    }

    #[test]
    fn test_display() {
        assert_eq!(Weight::High.to_string(), "9");
        assert_eq!(Weight::Normal.to_string(), "1");
        assert_eq!(LineStyle::Dotted.to_string(), "dotted");
    }
}
