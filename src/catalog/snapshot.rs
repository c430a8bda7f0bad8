//! JSON catalog snapshot.
//!
//! A snapshot is a dump of catalog rows: one record per table, view or
//! index, plus the storage descriptors of the physical tables.
//!
//! ```json
//! {
//!   "objects": [
//!     {
//!       "schema": "S", "name": "T", "table_type": "TABLE",
//!       "columns": [ { "name": "ID", "data_type": "INTEGER", "nullable": false } ],
//!       "primary_key": ["ID"]
//!     }
//!   ],
//!   "descriptors": [
//!     { "name": "S.T", "values": {}, "families": { "0": { "COMPRESSION": "GZ" } } }
//!   ]
//! }
//! ```
//!
//! [`SnapshotCatalog`] answers [`Catalog`] lookups from such a snapshot. A
//! file-backed catalog re-opens and re-parses the file for every lookup and
//! releases it before returning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::descriptor::PhysicalDescriptor;
use crate::catalog::object::{
    Column, IndexType, ObjectDetail, ObjectKind, QualifiedName, SchemaObject,
};
use crate::catalog::Catalog;
use crate::util::config::ConnectionSettings;
use crate::PddlError;

/// Top-level snapshot document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
    #[serde(default)]
    pub descriptors: Vec<DescriptorRecord>,
}

/// One catalog row describing a table, view or index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObjectRecord {
    #[serde(default)]
    pub schema: Option<String>,
    pub name: String,
    /// `TABLE`, `VIEW`, `INDEX`, `SYSTEM`, `PROJECTED` or `SUBQUERY`.
    pub table_type: String,
    /// Backing storage table; defaults to the qualified name.
    #[serde(default)]
    pub physical_name: Option<String>,
    #[serde(default)]
    pub pk_name: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Names of the primary-key columns, in key order.
    #[serde(default)]
    pub primary_key: Vec<String>,
    #[serde(default)]
    pub properties: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub default_values: BTreeMap<String, String>,
    #[serde(default)]
    pub default_family: Option<String>,
    /// Base table of a view or index.
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default)]
    pub view_statement: Option<String>,
    #[serde(default)]
    pub index_type: IndexType,
}

/// Storage descriptor of one physical table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DescriptorRecord {
    pub name: String,
    #[serde(flatten)]
    pub descriptor: PhysicalDescriptor,
}

impl ObjectRecord {
    pub fn qualified_name(&self) -> QualifiedName {
        QualifiedName::new(self.schema.as_deref(), &self.name)
    }

    /// Kind of this record, or `None` for table types with no DDL form.
    pub fn kind(&self) -> Option<ObjectKind> {
        match self.table_type.to_ascii_uppercase().as_str() {
            "TABLE" => Some(ObjectKind::Table),
            "VIEW" => Some(ObjectKind::View),
            "INDEX" => Some(ObjectKind::Index),
            _ => None,
        }
    }

    /// Convert the raw row into a [`SchemaObject`].
    pub fn to_schema_object(&self) -> Result<SchemaObject, PddlError> {
        let name = self.qualified_name();
        let kind = self.kind().ok_or_else(|| {
            PddlError::UnsupportedKind(format!("{} ({})", self.table_type, name))
        })?;

        let detail = match kind {
            ObjectKind::Table => ObjectDetail::Table,
            ObjectKind::View => ObjectDetail::View {
                parent: self.require_parent(&name)?,
                view_statement: self.view_statement.clone(),
            },
            ObjectKind::Index => ObjectDetail::Index {
                parent: self.require_parent(&name)?,
                index_type: self.index_type,
            },
        };

        let pk_columns = self
            .primary_key
            .iter()
            .map(|pk| {
                self.columns
                    .iter()
                    .find(|c| &c.name == pk)
                    .cloned()
                    .ok_or_else(|| {
                        PddlError::Parse(format!(
                            "Primary key column {} of {} is not a column",
                            pk, name
                        ))
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SchemaObject {
            physical_name: self.physical_name.clone().unwrap_or_else(|| name.to_string()),
            name,
            pk_name: self.pk_name.clone(),
            pk_columns,
            columns: self.columns.clone(),
            properties: self.properties.clone(),
            default_values: self.default_values.clone(),
            default_family: self.default_family.clone(),
            detail,
        })
    }

    fn require_parent(&self, name: &QualifiedName) -> Result<String, PddlError> {
        self.parent
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| PddlError::Parse(format!("{} {} has no parent table", self.table_type, name)))
    }

    /// Base table of this record, when it is a view or index.
    fn base_table_name(&self) -> Option<QualifiedName> {
        match self.kind() {
            Some(ObjectKind::View) | Some(ObjectKind::Index) => self
                .parent
                .as_deref()
                .map(|p| QualifiedName::new(self.schema.as_deref(), p)),
            _ => None,
        }
    }
}

impl Snapshot {
    pub fn from_json(json: &str) -> Result<Self, PddlError> {
        serde_json::from_str(json)
            .map_err(|e| PddlError::Parse(format!("Failed to parse catalog snapshot: {}", e)))
    }

    pub fn find_object(&self, name: &QualifiedName) -> Option<&ObjectRecord> {
        self.objects.iter().find(|o| &o.qualified_name() == name)
    }

    pub fn find_descriptor(&self, physical_name: &str) -> Option<&PhysicalDescriptor> {
        self.descriptors
            .iter()
            .find(|d| d.name == physical_name)
            .map(|d| &d.descriptor)
    }
}

enum SnapshotSource {
    File(PathBuf),
    Loaded(Snapshot),
}

/// [`Catalog`] backed by a JSON snapshot.
pub struct SnapshotCatalog {
    source: SnapshotSource,
    settings: ConnectionSettings,
}

impl SnapshotCatalog {
    /// Catalog over a snapshot file. Nothing is read until the first lookup.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        SnapshotCatalog {
            source: SnapshotSource::File(path.as_ref().to_path_buf()),
            settings: ConnectionSettings::default(),
        }
    }

    /// Catalog over an already-loaded snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        SnapshotCatalog {
            source: SnapshotSource::Loaded(snapshot),
            settings: ConnectionSettings::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, PddlError> {
        Ok(SnapshotCatalog::from_snapshot(Snapshot::from_json(json)?))
    }

    pub fn with_settings(mut self, settings: ConnectionSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Run one lookup against a freshly opened snapshot.
    fn connect<T>(
        &self,
        lookup: impl FnOnce(&Snapshot) -> Result<T, PddlError>,
    ) -> Result<T, PddlError> {
        match self.source {
            SnapshotSource::File(ref path) => {
                debug!(
                    path = %path.display(),
                    properties = ?self.settings.client_properties(),
                    "opening catalog snapshot"
                );
                let json = std::fs::read_to_string(path).map_err(|e| {
                    PddlError::Io(format!("Cannot read catalog {}: {}", path.display(), e))
                })?;
                let snapshot = Snapshot::from_json(&json)?;
                lookup(&snapshot)
            }
            SnapshotSource::Loaded(ref snapshot) => lookup(snapshot),
        }
    }
}

impl Catalog for SnapshotCatalog {
    fn resolve_object(&self, name: &QualifiedName) -> Result<SchemaObject, PddlError> {
        debug!(object = %name, "resolving object");
        self.connect(|snapshot| {
            snapshot
                .find_object(name)
                .ok_or_else(|| PddlError::NotFound(format!("Table {} not found in catalog", name)))?
                .to_schema_object()
        })
    }

    fn resolve_physical_descriptor(
        &self,
        physical_name: &str,
    ) -> Result<PhysicalDescriptor, PddlError> {
        debug!(physical_name, "resolving storage descriptor");
        self.connect(|snapshot| {
            snapshot.find_descriptor(physical_name).cloned().ok_or_else(|| {
                PddlError::NotFound(format!("Storage table {} not found", physical_name))
            })
        })
    }

    fn list_children(&self, name: &QualifiedName) -> Result<Vec<SchemaObject>, PddlError> {
        debug!(object = %name, "listing dependent objects");
        self.connect(|snapshot| {
            snapshot
                .objects
                .iter()
                .filter(|o| o.base_table_name().as_ref() == Some(name))
                .map(ObjectRecord::to_schema_object)
                .collect()
        })
    }
}
