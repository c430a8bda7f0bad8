//! Phoenix schema extraction toolkit.
//!
//! The `phoenix-ddl-utils` crate (library name `pddl`) reconstructs the
//! `CREATE TABLE`, `CREATE INDEX` and `CREATE VIEW` statements of Phoenix
//! objects from their already-materialized catalog metadata, and builds a
//! JSON schema tree of a table with its dependent indexes and views.
//!
//! # CLI Reference
//!
//! ```text
//! cargo install phoenix-ddl-utils
//! ```
//!
//! | Command | Purpose |
//! |---------|---------|
//! | [`pddl extract`](cli::app::Commands::Extract) | Print the DDL of one object, or write its schema tree to a file |
//! | [`pddl completions`](cli::app::Commands::Completions) | Generate shell completion scripts |
//!
//! All subcommands accept `--color <auto|always|never>`, `--output <file>`,
//! `--verbose` and `--quiet`.
//!
//! # Library API
//!
//! ```toml
//! [dependencies]
//! pddl = { package = "phoenix-ddl-utils", version = "0.3" }
//! ```
//!
//! ## Quick example
//!
//! ```no_run
//! use pddl::catalog::snapshot::SnapshotCatalog;
//! use pddl::catalog::{Catalog, QualifiedName};
//! use pddl::ddl::assemble::extract_ddl;
//!
//! let catalog = SnapshotCatalog::open("catalog.json");
//! let table = catalog.resolve_object(&QualifiedName::new(Some("SALES"), "ORDERS")).unwrap();
//! println!("{}", extract_ddl(&catalog, &table).unwrap());
//! ```
//!
//! ## Module overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | Catalog object model, the [`Catalog`](catalog::Catalog) trait, JSON snapshot catalog |
//! | [`ddl::properties`] | Default-property baseline and non-default property clause |
//! | [`ddl::columns`] | Column definitions, primary-key clauses, view column deltas |
//! | [`ddl::index`] | Index column demangling, indexed and covered column clauses |
//! | [`ddl::assemble`] | `CREATE TABLE` / `CREATE [LOCAL ]INDEX` / `CREATE VIEW` assembly |
//! | [`ddl::tree`] | Schema tree of a table with its indexes and views |
//! | [`util::config`] | Catalog connection timeout and retry settings |
//!
//! ## Feature flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli` | on | Builds the `pddl` binary (`clap`, `colored`, `tracing-subscriber`). |

pub mod catalog;
#[cfg(feature = "cli")]
pub mod cli;
pub mod ddl;
pub mod util;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

use thiserror::Error;

/// Errors returned by `pddl` operations.
#[derive(Error, Debug)]
pub enum PddlError {
    /// An I/O error occurred (snapshot read, config read, output write).
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed input data (snapshot JSON, inconsistent object records).
    #[error("Parse error: {0}")]
    Parse(String),

    /// An invalid argument was supplied (empty name, bad config value, etc.).
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// A target or base object is not present in the catalog.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The catalog returned an object kind that has no DDL form.
    #[error("Unsupported object kind: {0}")]
    UnsupportedKind(String),
}
