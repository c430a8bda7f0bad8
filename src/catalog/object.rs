//! Catalog object model.
//!
//! A [`SchemaObject`] is an immutable snapshot of one table, view or index as
//! returned by the catalog. Kind-specific data lives in [`ObjectDetail`], so
//! every piece of rendering logic branches with a single `match`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::constants::DEFAULT_COLUMN_FAMILY;

/// Schema-qualified object name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    /// Schema name; `None` for the default schema.
    pub schema: Option<String>,
    /// Object name.
    pub name: String,
}

impl QualifiedName {
    /// Build a name from already-normalized parts. An empty schema is
    /// treated as no schema.
    ///
    /// # Examples
    ///
    /// ```
    /// use pddl::catalog::QualifiedName;
    ///
    /// assert_eq!(QualifiedName::new(Some("S"), "T").to_string(), "S.T");
    /// assert_eq!(QualifiedName::new(None, "T").to_string(), "T");
    /// assert_eq!(QualifiedName::new(Some(""), "T").to_string(), "T");
    /// ```
    pub fn new(schema: Option<&str>, name: &str) -> Self {
        QualifiedName {
            schema: schema.filter(|s| !s.is_empty()).map(str::to_string),
            name: name.to_string(),
        }
    }

    /// Build a name from user-typed identifiers, normalizing each one.
    ///
    /// ```
    /// use pddl::catalog::QualifiedName;
    ///
    /// let name = QualifiedName::from_identifiers(Some("sales"), "\"Orders\"");
    /// assert_eq!(name.to_string(), "SALES.Orders");
    /// ```
    pub fn from_identifiers(schema: Option<&str>, name: &str) -> Self {
        let schema = schema.map(normalize_identifier);
        QualifiedName::new(schema.as_deref(), &normalize_identifier(name))
    }

    /// A sibling object in the same schema (used to locate base tables).
    pub fn sibling(&self, name: &str) -> Self {
        QualifiedName::new(self.schema.as_deref(), name)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.schema {
            Some(ref schema) => write!(f, "{}.{}", schema, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Normalize a SQL identifier: upper-case unless wrapped in double quotes,
/// in which case the quotes are stripped and case is kept.
pub fn normalize_identifier(ident: &str) -> String {
    let ident = ident.trim();
    if ident.len() >= 2 && ident.starts_with('"') && ident.ends_with('"') {
        ident[1..ident.len() - 1].to_string()
    } else {
        ident.to_uppercase()
    }
}

/// Row-key sort order of a primary-key column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn is_default(self) -> bool {
        self == SortOrder::default()
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "ASC"),
            SortOrder::Desc => write!(f, "DESC"),
        }
    }
}

/// Physical layout of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IndexType {
    #[default]
    Global,
    Local,
}

/// Column metadata as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name. For index columns this is the physical `family:qualifier` form.
    pub name: String,
    /// SQL type name (e.g. `VARCHAR`, `DECIMAL`).
    pub data_type: String,
    /// Maximum length or precision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    /// Scale; only rendered together with `max_length`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub row_timestamp: bool,
    /// Owning column family; `None` for row-key columns.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

fn default_nullable() -> bool {
    true
}

impl Column {
    /// Identity used for set operations: the same named column in the same family.
    pub fn key(&self) -> (Option<&str>, &str) {
        (self.family.as_deref(), self.name.as_str())
    }

    pub fn same_column(&self, other: &Column) -> bool {
        self.key() == other.key()
    }
}

/// Object kind, as rendered in schema trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ObjectKind {
    Table,
    View,
    Index,
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Table => write!(f, "TABLE"),
            ObjectKind::View => write!(f, "VIEW"),
            ObjectKind::Index => write!(f, "INDEX"),
        }
    }
}

/// Kind-specific part of a [`SchemaObject`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectDetail {
    Table,
    View {
        /// Base table name, resolved in the view's own schema.
        parent: String,
        /// Stored `SELECT ... WHERE ...` statement, if the view has a predicate.
        view_statement: Option<String>,
    },
    Index {
        /// Indexed table name, resolved in the index's own schema.
        parent: String,
        index_type: IndexType,
    },
}

/// Immutable catalog snapshot of one table, view or index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaObject {
    pub name: QualifiedName,
    /// Name of the backing storage table.
    pub physical_name: String,
    /// Primary-key constraint name.
    pub pk_name: Option<String>,
    /// Primary-key columns in key order.
    pub pk_columns: Vec<Column>,
    /// All columns in ordinal order, primary-key columns included.
    pub columns: Vec<Column>,
    /// Declared table properties; `None` values are unset.
    pub properties: BTreeMap<String, Option<String>>,
    /// Kind-specific property defaults.
    pub default_values: BTreeMap<String, String>,
    /// Declared default column family.
    pub default_family: Option<String>,
    pub detail: ObjectDetail,
}

impl SchemaObject {
    pub fn kind(&self) -> ObjectKind {
        match self.detail {
            ObjectDetail::Table => ObjectKind::Table,
            ObjectDetail::View { .. } => ObjectKind::View,
            ObjectDetail::Index { .. } => ObjectKind::Index,
        }
    }

    /// Qualified name of the base table, for views and indexes.
    pub fn base_table_name(&self) -> Option<QualifiedName> {
        match self.detail {
            ObjectDetail::Table => None,
            ObjectDetail::View { ref parent, .. } | ObjectDetail::Index { ref parent, .. } => {
                Some(self.name.sibling(parent))
            }
        }
    }

    /// Family holding the object's empty key-value column; `"0"` unless declared.
    pub fn empty_column_family(&self) -> &str {
        self.default_family
            .as_deref()
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_COLUMN_FAMILY)
    }

    pub fn is_pk_column(&self, column: &Column) -> bool {
        self.pk_columns.iter().any(|pk| pk.same_column(column))
    }
}
