//! DDL reconstruction.
//!
//! Turns catalog metadata back into `CREATE TABLE|INDEX|VIEW` statements
//! and schema trees. Components, leaf first:
//!
//! - [`properties`] builds the default baseline and the non-default
//!   `key=value` clause of a table.
//! - [`columns`] renders column definitions and primary keys, and the
//!   column delta of a view against its base table.
//! - [`index`] demangles physical index column names into indexed and
//!   covered column lists.
//! - [`assemble`] composes the statement for each object kind.
//! - [`tree`] builds the JSON tree of a table with its indexes and views.

pub mod assemble;
pub mod columns;
pub mod index;
pub mod properties;
pub mod tree;
