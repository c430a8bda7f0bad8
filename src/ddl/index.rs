//! Index column resolution.
//!
//! Index columns are stored under physical names of the form
//! `family:qualifier`, with an empty family for columns that come from the
//! data table's row key. This module maps them back to the names a user
//! would write in `CREATE INDEX ... ON t(...) INCLUDE (...)`.

use std::collections::HashMap;

use crate::catalog::constants::{FAMILY_SEPARATOR, VIEW_INDEX_ID_COLUMN_NAME};
use crate::catalog::{SchemaObject, SortOrder};

/// Rendered column lists of an index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexColumns {
    /// Explicitly indexed columns, with sort suffixes.
    pub indexed: String,
    /// Covered (`INCLUDE`) columns; empty when there are none.
    pub covered: String,
}

/// Map a physical index column name to its logical name.
///
/// The family is dropped when it is empty or the default family, otherwise
/// the name becomes `family.qualifier`.
///
/// # Examples
///
/// ```
/// use pddl::ddl::index::logical_column_name;
///
/// assert_eq!(logical_column_name(":ID", "0"), "ID");
/// assert_eq!(logical_column_name("0:NAME", "0"), "NAME");
/// assert_eq!(logical_column_name("CF:NAME", "0"), "CF.NAME");
/// ```
pub fn logical_column_name(physical: &str, default_family: &str) -> String {
    match physical.split_once(FAMILY_SEPARATOR) {
        Some((family, qualifier))
            if family.is_empty() || family.eq_ignore_ascii_case(default_family) =>
        {
            qualifier.to_string()
        }
        Some(_) => physical.replace(FAMILY_SEPARATOR, "."),
        None => physical.to_string(),
    }
}

/// Render the columns an index was explicitly declared on.
///
/// Index PK columns that also make up the data table's PK are implied by
/// the index and are left out; the synthetic view-index id is skipped.
pub fn indexed_columns(index: &SchemaObject, data_table: &SchemaObject, default_family: &str) -> String {
    let mut index_pk: Vec<String> = Vec::new();
    let mut sort_orders: HashMap<String, SortOrder> = HashMap::new();
    for column in &index.pk_columns {
        let name = logical_column_name(&column.name, default_family);
        if name.eq_ignore_ascii_case(VIEW_INDEX_ID_COLUMN_NAME) {
            continue;
        }
        sort_orders.insert(name.clone(), column.sort_order);
        if !index_pk.contains(&name) {
            index_pk.push(name);
        }
    }

    let data_pk: Vec<&str> = data_table.pk_columns.iter().map(|c| c.name.as_str()).collect();

    let only_index = index_pk.iter().filter(|n| !data_pk.contains(&n.as_str()));
    let only_data = data_pk
        .iter()
        .filter(|n| !index_pk.iter().any(|i| i == *n))
        .map(|n| n.to_string());

    only_index
        .cloned()
        .chain(only_data)
        .map(|name| match sort_orders.get(&name) {
            Some(order) if !order.is_default() => format!("{} {}", name, order),
            _ => name,
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render the covered columns of an index: every non-key column that
/// belongs to a column family.
pub fn covered_columns(index: &SchemaObject, default_family: &str) -> String {
    index
        .columns
        .iter()
        .filter(|c| c.family.is_some() && !index.is_pk_column(c))
        .map(|c| logical_column_name(&c.name, default_family))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Resolve both column lists of an index against its data table.
pub fn resolve_index_columns(index: &SchemaObject, data_table: &SchemaObject) -> IndexColumns {
    let default_family = index.empty_column_family();
    IndexColumns {
        indexed: indexed_columns(index, data_table, default_family),
        covered: covered_columns(index, default_family),
    }
}
