//! System catalog — the YAML-backed description of known components.
//!
//! The catalog is read once at startup from a registry file shaped like:
//!
//! ```yaml
//! components:
//!   gate:
//!     name: Gate
//!     role: technology interoperability layer
//!     version: "0.1"
//! ```
//!
//! A missing or malformed file degrades to an empty catalog with a
//! warning; it is never an error.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Human-readable description of a system component.
///
/// Extra fields in the registry file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentDescription {
    /// Display name.
    pub name: String,

    /// What the component does in the system.
    #[serde(default)]
    pub role: String,

    /// Component version string.
    #[serde(default)]
    pub version: String,
}

/// On-disk registry file shape.
#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    components: HashMap<String, ComponentDescription>,
}

/// The loaded system catalog.
#[derive(Debug, Default)]
pub struct SystemCatalog {
    components: HashMap<String, ComponentDescription>,
}

impl SystemCatalog {
    /// An empty catalog.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the catalog from a YAML registry file.
    ///
    /// A file that is missing or fails to parse yields an empty catalog
    /// and a warning; callers always get a usable catalog.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!(
                    "registry not found at {}: {e}; starting with an empty catalog",
                    path.display()
                );
                return Self::empty();
            }
        };
        match Self::from_yaml(&content) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::warn!(
                    "failed to parse registry {}: {e}; starting with an empty catalog",
                    path.display()
                );
                Self::empty()
            }
        }
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Ok(Self {
            components: file.components,
        })
    }

    /// Details for a component, by its exact registry key.
    pub fn component_details(&self, name: &str) -> Option<&ComponentDescription> {
        self.components.get(name)
    }

    /// All component descriptions, sorted by display name.
    pub fn components(&self) -> Vec<&ComponentDescription> {
        let mut all: Vec<&ComponentDescription> = self.components.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Number of described components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the catalog describes no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Render the librarian's narrative over the known components.
    pub fn narrative(&self, context: Option<&str>) -> String {
        let mut story =
            String::from("In the library of technologies, where gates connect different realms...");
        if let Some(context) = context {
            story.push_str(&format!("\nToday's tale revolves around: {context}"));
        }
        for description in self.components() {
            story.push_str(&format!(
                "\n  {} serves as {} (v{})",
                description.name, description.role, description.version
            ));
        }
        story
    }
}
