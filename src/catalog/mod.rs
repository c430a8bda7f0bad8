//! Catalog access.
//!
//! The [`Catalog`] trait is the boundary to whatever service knows the
//! current metadata of tables, views and indexes. DDL reconstruction only
//! ever reads through it, one blocking lookup at a time.
//!
//! [`snapshot::SnapshotCatalog`] implements it over a JSON catalog snapshot.

pub mod constants;
pub mod descriptor;
pub mod object;
pub mod snapshot;

pub use descriptor::PhysicalDescriptor;
pub use object::{
    Column, IndexType, ObjectDetail, ObjectKind, QualifiedName, SchemaObject, SortOrder,
};

use crate::PddlError;

/// Read-only access to catalog metadata.
pub trait Catalog {
    /// Fetch the metadata of one object. Fails with [`PddlError::NotFound`]
    /// when the catalog has no such object.
    fn resolve_object(&self, name: &QualifiedName) -> Result<SchemaObject, PddlError>;

    /// Fetch the storage descriptor of a physical table.
    fn resolve_physical_descriptor(
        &self,
        physical_name: &str,
    ) -> Result<PhysicalDescriptor, PddlError>;

    /// List the indexes and views built directly on a table, in catalog order.
    fn list_children(&self, name: &QualifiedName) -> Result<Vec<SchemaObject>, PddlError>;
}
