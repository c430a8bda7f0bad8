#![cfg(feature = "cli")]
//! Integration tests for `pddl extract`.

use std::io::Write;

use pddl::cli::extract::{execute, ExtractOptions, ExtractOutcome, TreeFileStatus};
use pddl::PddlError;
use tempfile::{NamedTempFile, TempDir};

const SNAPSHOT: &str = r#"{
  "objects": [
    {
      "name": "T", "table_type": "TABLE",
      "columns": [
        { "name": "ID", "data_type": "INTEGER", "nullable": false },
        { "name": "NAME", "data_type": "VARCHAR", "max_length": 50, "family": "0" }
      ],
      "primary_key": ["ID"]
    },
    {
      "name": "IDX", "table_type": "INDEX", "parent": "T",
      "columns": [
        { "name": "0:NAME", "data_type": "VARCHAR" },
        { "name": ":ID", "data_type": "INTEGER", "nullable": false }
      ],
      "primary_key": ["0:NAME", ":ID"]
    },
    {
      "name": "V", "table_type": "VIEW", "parent": "T",
      "view_statement": "SELECT * FROM T WHERE ID > 0",
      "columns": [
        { "name": "ID", "data_type": "INTEGER", "nullable": false },
        { "name": "NAME", "data_type": "VARCHAR", "max_length": 50, "family": "0" },
        { "name": "EXTRA", "data_type": "INTEGER", "family": "0" }
      ],
      "primary_key": ["ID"]
    },
    {
      "name": "Lower", "table_type": "TABLE",
      "columns": [ { "name": "K", "data_type": "BIGINT", "nullable": false } ],
      "primary_key": ["K"]
    }
  ],
  "descriptors": [
    { "name": "T", "families": { "0": { "COMPRESSION": "GZ" } } },
    { "name": "Lower", "families": { "0": {} } }
  ]
}"#;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("create temp file");
    tmp.write_all(contents.as_bytes()).expect("write temp file");
    tmp.flush().expect("flush temp file");
    tmp
}

fn options(catalog: &NamedTempFile, table: &str) -> ExtractOptions {
    ExtractOptions {
        table: table.to_string(),
        schema: None,
        tree_file: None,
        catalog: catalog.path().display().to_string(),
        config: None,
    }
}

fn run(opts: &ExtractOptions) -> (Result<ExtractOutcome, PddlError>, String) {
    let mut out = Vec::new();
    let result = execute(opts, &mut out);
    (result, String::from_utf8(out).expect("valid UTF-8"))
}

#[test]
fn test_extract_table() {
    let catalog = write_temp(SNAPSHOT);
    let (result, output) = run(&options(&catalog, "t"));
    let expected = "CREATE TABLE T(ID INTEGER NOT NULL PRIMARY KEY, NAME VARCHAR(50))COMPRESSION=GZ";
    assert_eq!(result.unwrap(), ExtractOutcome::Ddl(expected.to_string()));
    assert_eq!(output, format!("{}\n", expected));
}

#[test]
fn test_extract_index() {
    let catalog = write_temp(SNAPSHOT);
    let (result, output) = run(&options(&catalog, "IDX"));
    result.unwrap();
    assert_eq!(output, "CREATE INDEX IDX ON T(NAME)\n");
}

#[test]
fn test_extract_view() {
    let catalog = write_temp(SNAPSHOT);
    let (result, output) = run(&options(&catalog, "v"));
    result.unwrap();
    assert_eq!(
        output,
        "CREATE VIEW V(EXTRA INTEGER) AS SELECT * FROM T WHERE ID > 0\n"
    );
}

#[test]
fn test_quoted_identifier_keeps_case() {
    let catalog = write_temp(SNAPSHOT);
    let (result, output) = run(&options(&catalog, "\"Lower\""));
    result.unwrap();
    assert_eq!(output, "CREATE TABLE Lower(K BIGINT NOT NULL PRIMARY KEY)\n");

    let (result, _) = run(&options(&catalog, "lower"));
    assert!(matches!(result, Err(PddlError::NotFound(_))));
}

#[test]
fn test_extract_tree_file() {
    let catalog = write_temp(SNAPSHOT);
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("t.json");

    let mut opts = options(&catalog, "T");
    opts.tree_file = Some(path.display().to_string());
    let (result, output) = run(&opts);

    let json = match result.unwrap() {
        ExtractOutcome::Tree { json, status } => {
            assert_eq!(status, TreeFileStatus::Written);
            json
        }
        other => panic!("unexpected outcome {:?}", other),
    };
    assert!(output.contains("OK"));
    assert!(!output.contains("CREATE TABLE"));

    let written = std::fs::read_to_string(&path).expect("tree file exists");
    assert_eq!(written, json);

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["kind"], "TABLE");
    assert_eq!(value["children"][0]["ddl"], "CREATE INDEX IDX ON T(NAME)");
    assert_eq!(value["children"][1]["kind"], "VIEW");
}

#[test]
fn test_extract_tree_unwritable_path() {
    let catalog = write_temp(SNAPSHOT);
    let dir = TempDir::new().expect("create temp dir");
    // A directory cannot be overwritten as a file.
    let mut opts = options(&catalog, "T");
    opts.tree_file = Some(dir.path().display().to_string());
    let (result, output) = run(&opts);

    match result.unwrap() {
        ExtractOutcome::Tree { json, status } => {
            assert!(matches!(status, TreeFileStatus::Failed { .. }));
            assert!(json.contains("\"kind\": \"TABLE\""));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(output.contains("FAILED"));
}

#[test]
fn test_extract_with_config_file() {
    let catalog = write_temp(SNAPSHOT);
    let config = write_temp(
        "# rebuild settings\n\
         phoenix.index.rebuild.query.timeout = 60000\n\
         phoenix.index.rebuild.rpc.retries.counter: 2\n",
    );
    let mut opts = options(&catalog, "T");
    opts.config = Some(config.path().display().to_string());
    let (result, _) = run(&opts);
    assert!(matches!(result.unwrap(), ExtractOutcome::Ddl(_)));
}

#[test]
fn test_extract_with_invalid_config() {
    let catalog = write_temp(SNAPSHOT);
    let config = write_temp("phoenix.index.rebuild.query.timeout=soon\n");
    let mut opts = options(&catalog, "T");
    opts.config = Some(config.path().display().to_string());
    let (result, output) = run(&opts);
    assert!(matches!(result, Err(PddlError::Argument(_))));
    assert!(output.is_empty());
}

#[test]
fn test_extract_missing_catalog() {
    let opts = ExtractOptions {
        table: "T".to_string(),
        schema: None,
        tree_file: None,
        catalog: "/nonexistent/catalog.json".to_string(),
        config: None,
    };
    let (result, _) = run(&opts);
    assert!(matches!(result, Err(PddlError::Io(_))));
}

#[test]
fn test_extract_view_with_missing_base() {
    let catalog = write_temp(
        r#"{ "objects": [ { "name": "V", "table_type": "VIEW", "parent": "GONE" } ] }"#,
    );
    let (result, output) = run(&options(&catalog, "V"));
    assert!(matches!(result, Err(PddlError::NotFound(_))));
    assert!(output.is_empty());
}
