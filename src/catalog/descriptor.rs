//! Physical storage descriptor of a table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Low-level storage properties of one physical table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalDescriptor {
    /// Table-level properties.
    #[serde(default)]
    pub values: BTreeMap<String, String>,
    /// Column-family properties, keyed by family name.
    #[serde(default)]
    pub families: BTreeMap<String, BTreeMap<String, String>>,
}

impl PhysicalDescriptor {
    /// Properties of a single column family.
    pub fn family(&self, name: &str) -> Option<&BTreeMap<String, String>> {
        self.families.get(name)
    }
}
