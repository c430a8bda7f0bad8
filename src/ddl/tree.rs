//! Schema tree of a table and its dependent objects.
//!
//! A tree is built fresh for one extraction: the root node is visited, which
//! renders its DDL and, for tables, pulls the child indexes and views from
//! the catalog and visits each of them. Views and indexes are leaves.
//!
//! The serialized form is the document written to `--tree-file`:
//!
//! ```json
//! {
//!   "kind": "TABLE",
//!   "name": "S.T",
//!   "ddl": "CREATE TABLE S.T(...)",
//!   "children": [
//!     { "kind": "INDEX", "name": "S.IDX", "ddl": "CREATE INDEX IDX ON S.T(NAME)", "children": [] }
//!   ]
//! }
//! ```

use serde::Serialize;

use crate::catalog::{Catalog, ObjectDetail, ObjectKind, SchemaObject};
use crate::ddl::assemble::extract_ddl;
use crate::PddlError;

/// One object in a schema tree.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaTreeNode {
    pub kind: ObjectKind,
    pub name: String,
    pub ddl: String,
    pub children: Vec<SchemaTreeNode>,
    #[serde(skip)]
    object: SchemaObject,
}

impl SchemaTreeNode {
    pub fn new(object: SchemaObject) -> Self {
        SchemaTreeNode {
            kind: object.kind(),
            name: object.name.to_string(),
            ddl: String::new(),
            children: Vec::new(),
            object,
        }
    }

    pub fn object(&self) -> &SchemaObject {
        &self.object
    }

    /// Render this node and, for a table, its child indexes and views.
    pub fn visit(&mut self, catalog: &dyn Catalog) -> Result<(), PddlError> {
        self.ddl = extract_ddl(catalog, &self.object)?;
        match self.object.detail {
            ObjectDetail::Table => {
                for child in catalog.list_children(&self.object.name)? {
                    let mut node = SchemaTreeNode::new(child);
                    node.visit(catalog)?;
                    self.children.push(node);
                }
            }
            ObjectDetail::Index { .. } | ObjectDetail::View { .. } => {}
        }
        Ok(())
    }

    /// Serialize as JSON with 2-space indentation.
    pub fn to_json(&self) -> Result<String, PddlError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PddlError::Parse(format!("Schema tree JSON error: {}", e)))
    }
}

/// Build and serialize the schema tree rooted at `object`.
pub fn schema_tree(catalog: &dyn Catalog, object: SchemaObject) -> Result<String, PddlError> {
    let mut root = SchemaTreeNode::new(object);
    root.visit(catalog)?;
    root.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::snapshot::SnapshotCatalog;
    use crate::catalog::QualifiedName;

    const SNAPSHOT: &str = r#"{
      "objects": [
        {
          "schema": "S", "name": "T", "table_type": "TABLE",
          "columns": [
            { "name": "ID", "data_type": "INTEGER", "nullable": false },
            { "name": "NAME", "data_type": "VARCHAR", "family": "0" }
          ],
          "primary_key": ["ID"]
        },
        {
          "schema": "S", "name": "IDX", "table_type": "INDEX", "parent": "T",
          "columns": [
            { "name": "0:NAME", "data_type": "VARCHAR" },
            { "name": ":ID", "data_type": "INTEGER", "nullable": false }
          ],
          "primary_key": ["0:NAME", ":ID"]
        },
        {
          "schema": "S", "name": "V", "table_type": "VIEW", "parent": "T",
          "view_statement": "SELECT * FROM S.T WHERE ID > 10",
          "columns": [
            { "name": "ID", "data_type": "INTEGER", "nullable": false },
            { "name": "NAME", "data_type": "VARCHAR", "family": "0" }
          ],
          "primary_key": ["ID"]
        }
      ],
      "descriptors": [ { "name": "S.T", "families": { "0": {} } } ]
    }"#;

    fn catalog() -> SnapshotCatalog {
        SnapshotCatalog::from_json(SNAPSHOT).unwrap()
    }

    #[test]
    fn test_table_tree() {
        let catalog = catalog();
        let table = catalog
            .resolve_object(&QualifiedName::new(Some("S"), "T"))
            .unwrap();
        let mut root = SchemaTreeNode::new(table);
        root.visit(&catalog).unwrap();

        assert_eq!(root.kind, ObjectKind::Table);
        assert_eq!(root.ddl, "CREATE TABLE S.T(ID INTEGER NOT NULL PRIMARY KEY, NAME VARCHAR)");
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].kind, ObjectKind::Index);
        assert_eq!(root.children[0].ddl, "CREATE INDEX IDX ON S.T(NAME)");
        assert_eq!(root.children[1].kind, ObjectKind::View);
        assert_eq!(
            root.children[1].ddl,
            "CREATE VIEW S.V() AS SELECT * FROM S.T WHERE ID > 10"
        );
        assert!(root.children.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn test_leaf_tree() {
        let catalog = catalog();
        let index = catalog
            .resolve_object(&QualifiedName::new(Some("S"), "IDX"))
            .unwrap();
        let json = schema_tree(&catalog, index).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["kind"], "INDEX");
        assert_eq!(value["name"], "S.IDX");
        assert_eq!(value["children"], serde_json::json!([]));
    }

    #[test]
    fn test_json_shape_and_indent() {
        let catalog = catalog();
        let table = catalog
            .resolve_object(&QualifiedName::new(Some("S"), "T"))
            .unwrap();
        let json = schema_tree(&catalog, table).unwrap();
        assert!(json.starts_with("{\n  \"kind\": \"TABLE\",\n  \"name\": \"S.T\","));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["children"][1]["name"], "S.V");
        assert!(value.get("object").is_none());
    }
}
