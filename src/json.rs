//! JSON section definitions
//!
//! Sections can be defined in JSON, tagged by `"type"`:
//!
//! ```json
//! {
//!     "type": "GeneralSection",
//!     "label": "Plate",
//!     "y": [0.0, 100.0, 100.0, 0.0],
//!     "z": [0.0, 0.0, 10.0, 10.0],
//!     "r": [0.0, 0.0, 0.0, 0.0]
//! }
//! ```
//!
//! All construction runs through the validating constructors, so a malformed
//! definition fails the same way a malformed direct construction does.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::error::SectionResult;
use crate::properties::SectionProperties;
use crate::section::{GeneralSection, ThinWalledSection};

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum SectionDefinition {
    GeneralSection {
        label: Option<String>,
        y: Vec<f64>,
        z: Vec<f64>,
        r: Vec<f64>,
    },
    ThinWalledSection {
        label: Option<String>,
        y: Vec<f64>,
        z: Vec<f64>,
        t: Vec<f64>,
    },
}

/// A section of either representation, as loaded from a definition
#[derive(Debug, Clone)]
pub enum SectionKind {
    /// Closed boundary section
    General(GeneralSection),
    /// Thin-walled centerline section
    ThinWalled(ThinWalledSection),
}

impl SectionKind {
    /// The derived property bundle, whichever representation this is
    pub fn properties(&self) -> SectionResult<SectionProperties> {
        match self {
            SectionKind::General(section) => section.properties(),
            SectionKind::ThinWalled(section) => section.properties(),
        }
    }

    /// Section label, if any
    pub fn label(&self) -> Option<&str> {
        match self {
            SectionKind::General(section) => section.label(),
            SectionKind::ThinWalled(section) => section.label(),
        }
    }
}

impl SectionDefinition {
    fn build(self) -> SectionResult<SectionKind> {
        match self {
            SectionDefinition::GeneralSection { label, y, z, r } => {
                let mut section = GeneralSection::new(y, z, r)?;
                if let Some(label) = label {
                    section = section.with_label(label);
                }
                Ok(SectionKind::General(section))
            }
            SectionDefinition::ThinWalledSection { label, y, z, t } => {
                let mut section = ThinWalledSection::new(y, z, t)?;
                if let Some(label) = label {
                    section = section.with_label(label);
                }
                Ok(SectionKind::ThinWalled(section))
            }
        }
    }
}

/// Build a section from a JSON definition string
pub fn section_from_json(json: &str) -> SectionResult<SectionKind> {
    let definition: SectionDefinition = serde_json::from_str(json)?;
    definition.build()
}

/// Build a section from a JSON definition file
pub fn section_from_file(path: impl AsRef<Path>) -> SectionResult<SectionKind> {
    let reader = BufReader::new(File::open(path)?);
    let definition: SectionDefinition = serde_json::from_reader(reader)?;
    definition.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn general_section_from_json() {
        let json = r#"{
            "type": "GeneralSection",
            "label": "Plate",
            "y": [0.0, 100.0, 100.0, 0.0],
            "z": [0.0, 0.0, 10.0, 10.0],
            "r": [0.0, 0.0, 0.0, 0.0]
        }"#;
        let section = section_from_json(json).unwrap();
        assert_eq!(section.label(), Some("Plate"));
        let props = section.properties().unwrap();
        assert_relative_eq!(props.a, 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn thin_walled_section_from_json() {
        let json = r#"{
            "type": "ThinWalledSection",
            "label": null,
            "y": [0.0, 0.0, 1.0],
            "z": [0.0, 1.0, 1.0],
            "t": [0.1, 0.1]
        }"#;
        let section = section_from_json(json).unwrap();
        let props = section.properties().unwrap();
        assert_relative_eq!(props.a, 0.2, epsilon = 1e-12);
    }

    #[test]
    fn unknown_type_is_rejected() {
        let json = r#"{"type": "MeshSection", "y": [], "z": []}"#;
        assert!(section_from_json(json).is_err());
    }

    #[test]
    fn invalid_geometry_fails_like_direct_construction() {
        let json = r#"{
            "type": "GeneralSection",
            "label": null,
            "y": [0.0, 1.0],
            "z": [0.0, 1.0],
            "r": [0.0, 0.0]
        }"#;
        assert!(section_from_json(json).is_err());
    }
}
