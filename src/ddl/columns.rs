//! Column definitions and primary-key clauses.
//!
//! A single-column key is declared inline (`ID INTEGER NOT NULL PRIMARY KEY`);
//! a composite key becomes a trailing `CONSTRAINT <name> PRIMARY KEY (...)`.
//! Views only list the columns they add on top of their base table, found
//! with a symmetric difference of the two column lists.

use crate::catalog::constants::FALLBACK_PK_NAME;
use crate::catalog::{Column, SchemaObject};

/// Render `NAME TYPE[(LENGTH[,SCALE])][ NOT NULL]`.
///
/// # Examples
///
/// ```
/// use pddl::catalog::{Column, SortOrder};
/// use pddl::ddl::columns::render_column;
///
/// let col = Column {
///     name: "PRICE".to_string(),
///     data_type: "DECIMAL".to_string(),
///     max_length: Some(10),
///     scale: Some(2),
///     nullable: false,
///     sort_order: SortOrder::Asc,
///     row_timestamp: false,
///     family: Some("0".to_string()),
/// };
/// assert_eq!(render_column(&col), "PRICE DECIMAL(10,2) NOT NULL");
/// ```
pub fn render_column(col: &Column) -> String {
    let mut buf = format!("{} {}", col.name, col.data_type);
    if let Some(max_length) = col.max_length {
        buf.push('(');
        buf.push_str(&max_length.to_string());
        if let Some(scale) = col.scale {
            buf.push(',');
            buf.push_str(&scale.to_string());
        }
        buf.push(')');
    }
    if !col.nullable {
        buf.push_str(" NOT NULL");
    }
    buf
}

/// Primary-key attribute suffix: ` DESC` for a non-default sort order,
/// then ` ROW_TIMESTAMP`.
pub fn render_pk_attributes(col: &Column) -> String {
    let mut buf = String::new();
    if !col.sort_order.is_default() {
        buf.push(' ');
        buf.push_str(&col.sort_order.to_string());
    }
    if col.row_timestamp {
        buf.push_str(" ROW_TIMESTAMP");
    }
    buf
}

/// Render the parenthesized column list with its primary key.
pub fn render_column_clause(
    columns: &[&Column],
    pk_columns: &[&Column],
    pk_name: Option<&str>,
) -> String {
    let single_pk = match pk_columns {
        [pk] => Some(*pk),
        _ => None,
    };

    let defs: Vec<String> = columns
        .iter()
        .map(|col| {
            let mut def = render_column(col);
            if single_pk.is_some_and(|pk| pk.same_column(col)) {
                def.push_str(" PRIMARY KEY");
                def.push_str(&render_pk_attributes(col));
            }
            def
        })
        .collect();

    let mut clause = String::from("(");
    clause.push_str(&defs.join(", "));
    if pk_columns.len() > 1 {
        let pk_defs: Vec<String> = pk_columns
            .iter()
            .map(|pk| format!("{}{}", pk.name, render_pk_attributes(pk)))
            .collect();
        clause.push_str(&format!(
            " CONSTRAINT {} PRIMARY KEY ({})",
            pk_name.unwrap_or(FALLBACK_PK_NAME),
            pk_defs.join(", ")
        ));
    }
    clause.push(')');
    clause
}

/// Columns present in exactly one of the two lists: those only in
/// `derived` (in its order), then those only in `base` (in its order).
pub fn symmetric_difference<'a>(derived: &'a [Column], base: &'a [Column]) -> Vec<&'a Column> {
    let only_derived = derived
        .iter()
        .filter(|c| !base.iter().any(|b| b.same_column(c)));
    let only_base = base
        .iter()
        .filter(|c| !derived.iter().any(|d| d.same_column(c)));
    only_derived.chain(only_base).collect()
}

/// Full column clause of a table.
pub fn table_column_clause(table: &SchemaObject) -> String {
    let columns: Vec<&Column> = table.columns.iter().collect();
    let pk_columns: Vec<&Column> = table.pk_columns.iter().collect();
    render_column_clause(&columns, &pk_columns, table.pk_name.as_deref())
}

/// Column clause of a view: only what differs from its base table.
///
/// The result is exact when the base table's columns are a subset of the
/// view's; a column missing from the view would be listed as well.
pub fn view_column_delta(view: &SchemaObject, base: &SchemaObject) -> String {
    let columns = symmetric_difference(&view.columns, &base.columns);
    let pk_columns = symmetric_difference(&view.pk_columns, &base.pk_columns);
    render_column_clause(&columns, &pk_columns, view.pk_name.as_deref())
}
