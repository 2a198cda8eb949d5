//! Export configuration.
//!
//! Every field has a default, so an empty TOML document (or
//! [`DotConfig::default`]) reproduces the stock output:
//!
//! ```toml
//! object_type = "IfcObject"
//! virtual_type = "IfcVirtualElement"
//! cluster_root_type = "IfcSite"
//!
//! [graph]
//! overlap = false
//! splines = true
//! rankdir = "LR"
//!
//! [palette]
//! door_or_window = "#99ccff"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::classify::Category;
use crate::{Error, Result};

/// Settings for one dot export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DotConfig {
    /// Entities of this type (and subtypes) become nodes.
    pub object_type: String,
    /// Entities of this type are never drawn.
    pub virtual_type: String,
    /// Entities of this type start a cluster tree.
    pub cluster_root_type: String,
    pub graph: GraphAttributes,
    pub palette: Palette,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            object_type: "IfcObject".into(),
            virtual_type: "IfcVirtualElement".into(),
            cluster_root_type: "IfcSite".into(),
            graph: GraphAttributes::default(),
            palette: Palette::default(),
        }
    }
}

/// Global layout hints written in the graph preamble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphAttributes {
    pub overlap: bool,
    pub splines: bool,
    pub rankdir: String,
}

impl Default for GraphAttributes {
    fn default() -> Self {
        Self {
            overlap: false,
            splines: true,
            rankdir: "LR".into(),
        }
    }
}

/// Fill colour per [`Category`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Palette {
    pub group: String,
    pub spatial_element: String,
    pub element_assembly: String,
    pub opening_element: String,
    pub door_or_window: String,
    pub element: String,
    pub structural_item: String,
    pub unclassified: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            group: "#ff99ff".into(),
            spatial_element: "#ff99cc".into(),
            element_assembly: "#ccff99".into(),
            opening_element: "#cc99ff".into(),
            door_or_window: "#99ccff".into(),
            element: "#9999ff".into(),
            structural_item: "#99ff99".into(),
            unclassified: "#ff9999".into(),
        }
    }
}

impl Palette {
    pub fn color(&self, category: Category) -> &str {
        match category {
            Category::Group => &self.group,
            Category::SpatialElement => &self.spatial_element,
            Category::ElementAssembly => &self.element_assembly,
            Category::OpeningElement => &self.opening_element,
            Category::DoorOrWindow => &self.door_or_window,
            Category::Element => &self.element,
            Category::StructuralItem => &self.structural_item,
            Category::Unclassified => &self.unclassified,
        }
    }
}

impl DotConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce an unreadable graph.
    pub fn validate(&self) -> Result<()> {
        if self.object_type.trim().is_empty() {
            return Err(Error::Config("object_type must not be empty".into()));
        }
        if self.cluster_root_type.trim().is_empty() {
            return Err(Error::Config("cluster_root_type must not be empty".into()));
        }
        if !matches!(self.graph.rankdir.as_str(), "TB" | "LR" | "BT" | "RL") {
            return Err(Error::Config(format!(
                "rankdir must be one of TB, LR, BT, RL, got '{}'",
                self.graph.rankdir
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(DotConfig::from_toml_str("").unwrap(), DotConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = DotConfig::from_toml_str(
            r##"
            cluster_root_type = "IfcBuilding"

            [graph]
            rankdir = "TB"

            [palette]
            element = "#000000"
            "##,
        )
        .unwrap();
        assert_eq!(config.cluster_root_type, "IfcBuilding");
        assert_eq!(config.graph.rankdir, "TB");
        assert!(config.graph.splines);
        assert_eq!(config.palette.color(Category::Element), "#000000");
        assert_eq!(config.palette.color(Category::Group), "#ff99ff");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = DotConfig::from_toml_str("colour = 'red'").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_validate_rankdir() {
        let mut config = DotConfig::default();
        assert!(config.validate().is_ok());
        config.graph.rankdir = "sideways".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.toml");
        std::fs::write(&path, "virtual_type = 'IfcAnnotation'\n").unwrap();
        let config = DotConfig::load(&path).unwrap();
        assert_eq!(config.virtual_type, "IfcAnnotation");
    }
}
