//! WebAssembly bindings for DDL extraction.
//!
//! Each exported function takes a catalog snapshot as a JSON string plus
//! the object to extract, and returns a string. These are thin wrappers
//! over the same library code used by `pddl extract`.

use wasm_bindgen::prelude::*;

use crate::catalog::snapshot::SnapshotCatalog;
use crate::catalog::{Catalog, QualifiedName, SchemaObject};
use crate::ddl::assemble;
use crate::ddl::tree;

fn to_js_err(e: crate::PddlError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn resolve(
    snapshot: &str,
    schema: Option<String>,
    table: &str,
) -> Result<(SnapshotCatalog, SchemaObject), JsValue> {
    let catalog = SnapshotCatalog::from_json(snapshot).map_err(to_js_err)?;
    let name = QualifiedName::from_identifiers(schema.as_deref(), table);
    let object = catalog.resolve_object(&name).map_err(to_js_err)?;
    Ok((catalog, object))
}

/// Returns the reconstructed `CREATE` statement of one object.
///
/// `snapshot` is a catalog snapshot document; `schema` and `table` are
/// normalized like SQL identifiers. Returns an error string when the
/// snapshot is malformed or the object or its base table is missing.
#[wasm_bindgen]
pub fn extract_ddl(snapshot: &str, schema: Option<String>, table: &str) -> Result<String, JsValue> {
    let (catalog, object) = resolve(snapshot, schema, table)?;
    assemble::extract_ddl(&catalog, &object).map_err(to_js_err)
}

/// Returns the schema tree of one object as 2-space indented JSON.
#[wasm_bindgen]
pub fn extract_schema_tree(
    snapshot: &str,
    schema: Option<String>,
    table: &str,
) -> Result<String, JsValue> {
    let (catalog, object) = resolve(snapshot, schema, table)?;
    tree::schema_tree(&catalog, object).map_err(to_js_err)
}
