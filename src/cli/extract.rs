//! CLI implementation for the `pddl extract` subcommand.
//!
//! Resolves one object from the catalog snapshot and either prints its
//! reconstructed DDL or writes the schema tree rooted at it to a JSON file.
//! A failed tree-file write is reported but does not fail the command.

use std::io::Write;
use std::path::Path;

use colored::Colorize;
use tracing::{info, warn};

use crate::catalog::snapshot::SnapshotCatalog;
use crate::catalog::{Catalog, QualifiedName};
use crate::cli::wprintln;
use crate::ddl::assemble::extract_ddl;
use crate::ddl::tree::schema_tree;
use crate::util::config::ConnectionSettings;
use crate::util::fs::write_artifact;
use crate::PddlError;

/// Options for the `pddl extract` subcommand.
pub struct ExtractOptions {
    /// Table, view or index name, as typed by the user.
    pub table: String,
    /// Schema name, as typed by the user.
    pub schema: Option<String>,
    /// Write the schema tree here instead of printing DDL.
    pub tree_file: Option<String>,
    /// Path to the catalog snapshot.
    pub catalog: String,
    /// Connection settings file.
    pub config: Option<String>,
}

/// Result of writing the schema tree artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeFileStatus {
    Written,
    Failed { reason: String },
}

/// What an extraction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    Ddl(String),
    Tree { json: String, status: TreeFileStatus },
}

/// Extract the DDL or schema tree of one object.
pub fn execute(opts: &ExtractOptions, writer: &mut dyn Write) -> Result<ExtractOutcome, PddlError> {
    if opts.table.trim().is_empty() {
        return Err(PddlError::Argument("Table name should be passed with --table".to_string()));
    }
    info!(
        table = %opts.table,
        schema = ?opts.schema,
        tree_file = ?opts.tree_file,
        catalog = %opts.catalog,
        "schema extraction initiated"
    );

    let settings = ConnectionSettings::load(opts.config.as_deref().map(Path::new))?;
    let catalog = SnapshotCatalog::open(&opts.catalog).with_settings(settings);
    let name = QualifiedName::from_identifiers(opts.schema.as_deref(), &opts.table);
    let object = catalog.resolve_object(&name)?;

    match opts.tree_file {
        None => {
            let ddl = extract_ddl(&catalog, &object)?;
            wprintln!(writer, "{}", ddl)?;
            Ok(ExtractOutcome::Ddl(ddl))
        }
        Some(ref path) => {
            let json = schema_tree(&catalog, object)?;
            let status = write_tree_file(Path::new(path), &json);
            match status {
                TreeFileStatus::Written => {
                    wprintln!(writer, "{:<50} {}", path, "OK".green())?;
                }
                TreeFileStatus::Failed { ref reason } => {
                    wprintln!(writer, "{:<50} {}   {}", path, "FAILED".red(), reason)?;
                }
            }
            Ok(ExtractOutcome::Tree { json, status })
        }
    }
}

/// Write the tree document; failures are logged and returned, never raised.
pub fn write_tree_file(path: &Path, json: &str) -> TreeFileStatus {
    match write_artifact(path, json) {
        Ok(()) => TreeFileStatus::Written,
        Err(e) => {
            warn!(
                path = %path.display(),
                error = %e,
                "error writing schema tree to file"
            );
            TreeFileStatus::Failed {
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    const SNAPSHOT: &str = r#"{
      "objects": [
        {
          "schema": "S", "name": "T", "table_type": "TABLE",
          "columns": [ { "name": "ID", "data_type": "INTEGER", "nullable": false } ],
          "primary_key": ["ID"]
        }
      ],
      "descriptors": [ { "name": "S.T", "families": { "0": { "VERSIONS": "3" } } } ]
    }"#;

    fn snapshot_file() -> NamedTempFile {
        let mut tmp = NamedTempFile::new().unwrap();
        tmp.write_all(SNAPSHOT.as_bytes()).unwrap();
        tmp.flush().unwrap();
        tmp
    }

    fn options(catalog: &NamedTempFile, tree_file: Option<String>) -> ExtractOptions {
        ExtractOptions {
            table: "t".to_string(),
            schema: Some("s".to_string()),
            tree_file,
            catalog: catalog.path().display().to_string(),
            config: None,
        }
    }

    #[test]
    fn test_execute_prints_ddl() {
        let catalog = snapshot_file();
        let mut out = Vec::new();
        let outcome = execute(&options(&catalog, None), &mut out).unwrap();
        let expected = "CREATE TABLE S.T(ID INTEGER NOT NULL PRIMARY KEY)VERSIONS=3";
        assert_eq!(outcome, ExtractOutcome::Ddl(expected.to_string()));
        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", expected));
    }

    #[test]
    fn test_execute_writes_tree() {
        let catalog = snapshot_file();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tree.json");
        let mut out = Vec::new();
        let outcome = execute(
            &options(&catalog, Some(path.display().to_string())),
            &mut out,
        )
        .unwrap();
        match outcome {
            ExtractOutcome::Tree { json, status } => {
                assert_eq!(status, TreeFileStatus::Written);
                assert_eq!(std::fs::read_to_string(&path).unwrap(), json);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_tree_write_failure_is_not_fatal() {
        let catalog = snapshot_file();
        let mut out = Vec::new();
        let outcome = execute(
            &options(&catalog, Some("/nonexistent/dir/tree.json".to_string())),
            &mut out,
        )
        .unwrap();
        assert!(matches!(
            outcome,
            ExtractOutcome::Tree {
                status: TreeFileStatus::Failed { .. },
                ..
            }
        ));
        assert!(String::from_utf8(out).unwrap().contains("FAILED"));
    }

    #[test]
    fn test_empty_table_name() {
        let catalog = snapshot_file();
        let mut opts = options(&catalog, None);
        opts.table = "  ".to_string();
        let mut out = Vec::new();
        assert!(matches!(
            execute(&opts, &mut out),
            Err(PddlError::Argument(_))
        ));
    }

    #[test]
    fn test_unknown_table() {
        let catalog = snapshot_file();
        let mut opts = options(&catalog, None);
        opts.table = "missing".to_string();
        let mut out = Vec::new();
        assert!(matches!(
            execute(&opts, &mut out),
            Err(PddlError::NotFound(_))
        ));
    }
}
