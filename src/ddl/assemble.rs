//! DDL statement assembly.
//!
//! One entry point, [`extract_ddl`], dispatches on the object kind:
//!
//! - Table: `CREATE TABLE <name>(<columns>)<properties>`
//! - Index: `CREATE [LOCAL ]INDEX <name> ON <base>(<indexed>)[ INCLUDE (<covered>)]`
//! - View: `CREATE VIEW <name>(<added columns>) AS SELECT * FROM <base>[ WHERE ...]`
//!
//! Views and indexes look their base table up through the [`Catalog`]; a
//! failed lookup aborts the extraction.

use tracing::debug;

use crate::catalog::{Catalog, IndexType, ObjectDetail, QualifiedName, SchemaObject};
use crate::ddl::columns::{table_column_clause, view_column_delta};
use crate::ddl::index::resolve_index_columns;
use crate::ddl::properties::table_properties_clause;
use crate::PddlError;

const WHERE_TOKEN: &str = "WHERE";

/// Reconstruct the `CREATE` statement of a catalog object.
///
/// # Examples
///
/// ```
/// use pddl::catalog::snapshot::SnapshotCatalog;
/// use pddl::catalog::{Catalog, QualifiedName};
/// use pddl::ddl::assemble::extract_ddl;
///
/// let catalog = SnapshotCatalog::from_json(r#"{
///   "objects": [{
///     "name": "T", "table_type": "TABLE",
///     "columns": [
///       { "name": "ID", "data_type": "INTEGER", "nullable": false },
///       { "name": "NAME", "data_type": "VARCHAR", "max_length": 50, "family": "0" }
///     ],
///     "primary_key": ["ID"]
///   }],
///   "descriptors": [{ "name": "T", "families": { "0": { "COMPRESSION": "GZ" } } }]
/// }"#).unwrap();
///
/// let table = catalog.resolve_object(&QualifiedName::new(None, "T")).unwrap();
/// assert_eq!(
///     extract_ddl(&catalog, &table).unwrap(),
///     "CREATE TABLE T(ID INTEGER NOT NULL PRIMARY KEY, NAME VARCHAR(50))COMPRESSION=GZ"
/// );
/// ```
pub fn extract_ddl(catalog: &dyn Catalog, object: &SchemaObject) -> Result<String, PddlError> {
    debug!(object = %object.name, kind = %object.kind(), "extracting DDL");
    match object.detail {
        ObjectDetail::Table => create_table_ddl(catalog, object),
        ObjectDetail::Index { index_type, .. } => create_index_ddl(catalog, object, index_type),
        ObjectDetail::View {
            ref view_statement, ..
        } => create_view_ddl(catalog, object, view_statement.as_deref()),
    }
}

fn create_table_ddl(catalog: &dyn Catalog, table: &SchemaObject) -> Result<String, PddlError> {
    let descriptor = catalog.resolve_physical_descriptor(&table.physical_name)?;
    let columns = table_column_clause(table);
    let properties = table_properties_clause(table, &descriptor);
    Ok(format!("CREATE TABLE {}{}{}", table.name, columns, properties))
}

fn create_index_ddl(
    catalog: &dyn Catalog,
    index: &SchemaObject,
    index_type: IndexType,
) -> Result<String, PddlError> {
    let (base_name, data_table) = resolve_base_table(catalog, index)?;
    let columns = resolve_index_columns(index, &data_table);

    let local = match index_type {
        IndexType::Local => "LOCAL ",
        IndexType::Global => "",
    };
    let mut ddl = format!(
        "CREATE {}INDEX {} ON {}({})",
        local, index.name.name, base_name, columns.indexed
    );
    if !columns.covered.is_empty() {
        ddl.push_str(" INCLUDE (");
        ddl.push_str(&columns.covered);
        ddl.push(')');
    }
    Ok(ddl)
}

fn create_view_ddl(
    catalog: &dyn Catalog,
    view: &SchemaObject,
    view_statement: Option<&str>,
) -> Result<String, PddlError> {
    let (base_name, base_table) = resolve_base_table(catalog, view)?;
    let columns = view_column_delta(view, &base_table);
    let where_clause = view_statement
        .and_then(where_clause)
        .map(|w| format!(" {}", w))
        .unwrap_or_default();
    Ok(format!(
        "CREATE VIEW {}{} AS SELECT * FROM {}{}",
        view.name, columns, base_name, where_clause
    ))
}

/// The view predicate, from the `WHERE` token to the end of the statement.
///
/// Only a standalone `WHERE` counts; one embedded in an identifier such as
/// `NOWHERE` is skipped.
///
/// ```
/// use pddl::ddl::assemble::where_clause;
///
/// assert_eq!(where_clause("SELECT * FROM T WHERE ID > 0"), Some("WHERE ID > 0"));
/// assert_eq!(where_clause("SELECT * FROM T"), None);
/// ```
pub fn where_clause(view_statement: &str) -> Option<&str> {
    view_statement
        .match_indices(WHERE_TOKEN)
        .map(|(pos, _)| pos)
        .find(|&pos| {
            let before = view_statement[..pos].chars().next_back();
            let after = view_statement[pos + WHERE_TOKEN.len()..].chars().next();
            !before.is_some_and(is_identifier_char) && !after.is_some_and(is_identifier_char)
        })
        .map(|pos| &view_statement[pos..])
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn resolve_base_table(
    catalog: &dyn Catalog,
    object: &SchemaObject,
) -> Result<(QualifiedName, SchemaObject), PddlError> {
    let base_name = object.base_table_name().ok_or_else(|| {
        PddlError::Argument(format!("{} {} has no base table", object.kind(), object.name))
    })?;
    let base = catalog.resolve_object(&base_name)?;
    Ok((base_name, base))
}
