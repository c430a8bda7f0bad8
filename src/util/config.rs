//! Catalog connection settings.
//!
//! Extraction borrows the index-rebuild timeouts of the cluster
//! configuration and applies them to the catalog connection, so a slow
//! catalog does not abort a long extraction. Settings are read from a
//! Java-properties style file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::PddlError;

pub const INDEX_REBUILD_QUERY_TIMEOUT_ATTRIB: &str = "phoenix.index.rebuild.query.timeout";
pub const INDEX_REBUILD_RPC_TIMEOUT_ATTRIB: &str = "phoenix.index.rebuild.rpc.timeout";
pub const INDEX_REBUILD_CLIENT_SCANNER_TIMEOUT_ATTRIB: &str =
    "phoenix.index.rebuild.client.scanner.timeout";
pub const INDEX_REBUILD_RPC_RETRIES_COUNTER: &str = "phoenix.index.rebuild.rpc.retries.counter";

pub const THREAD_TIMEOUT_MS_ATTRIB: &str = "phoenix.query.timeoutMs";
pub const HBASE_RPC_TIMEOUT_KEY: &str = "hbase.rpc.timeout";
pub const HBASE_CLIENT_SCANNER_TIMEOUT_PERIOD: &str = "hbase.client.scanner.timeout.period";
pub const HBASE_CLIENT_RETRIES_NUMBER: &str = "hbase.client.retries.number";

// 30000 minutes
pub const DEFAULT_INDEX_REBUILD_TIMEOUT_MS: u64 = 30_000 * 60_000;
pub const DEFAULT_INDEX_REBUILD_RPC_RETRIES: u32 = 5;

/// Timeout and retry settings applied to every catalog connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionSettings {
    pub query_timeout_ms: u64,
    pub rpc_timeout_ms: u64,
    pub scanner_timeout_ms: u64,
    pub rpc_retries: u32,
}

impl Default for ConnectionSettings {
    fn default() -> Self {
        ConnectionSettings {
            query_timeout_ms: DEFAULT_INDEX_REBUILD_TIMEOUT_MS,
            rpc_timeout_ms: DEFAULT_INDEX_REBUILD_TIMEOUT_MS,
            scanner_timeout_ms: DEFAULT_INDEX_REBUILD_TIMEOUT_MS,
            rpc_retries: DEFAULT_INDEX_REBUILD_RPC_RETRIES,
        }
    }
}

impl ConnectionSettings {
    /// Derive settings from parsed properties; missing keys keep their defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use pddl::util::config::ConnectionSettings;
    ///
    /// let mut props = BTreeMap::new();
    /// props.insert("phoenix.index.rebuild.rpc.retries.counter".to_string(), "9".to_string());
    /// let settings = ConnectionSettings::from_properties(&props).unwrap();
    /// assert_eq!(settings.rpc_retries, 9);
    /// ```
    pub fn from_properties(props: &BTreeMap<String, String>) -> Result<Self, PddlError> {
        let defaults = ConnectionSettings::default();
        Ok(ConnectionSettings {
            query_timeout_ms: parse_or(
                props,
                INDEX_REBUILD_QUERY_TIMEOUT_ATTRIB,
                defaults.query_timeout_ms,
            )?,
            rpc_timeout_ms: parse_or(
                props,
                INDEX_REBUILD_RPC_TIMEOUT_ATTRIB,
                defaults.rpc_timeout_ms,
            )?,
            scanner_timeout_ms: parse_or(
                props,
                INDEX_REBUILD_CLIENT_SCANNER_TIMEOUT_ATTRIB,
                defaults.scanner_timeout_ms,
            )?,
            rpc_retries: parse_or(props, INDEX_REBUILD_RPC_RETRIES_COUNTER, defaults.rpc_retries)?,
        })
    }

    /// Load settings from an explicit file, the first default file found,
    /// or built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, PddlError> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => find_defaults_file(),
        };
        match path {
            Some(p) => {
                let props = parse_properties_file(&p)?;
                ConnectionSettings::from_properties(&props)
            }
            None => Ok(ConnectionSettings::default()),
        }
    }

    /// Client properties as handed to the catalog connection.
    pub fn client_properties(&self) -> BTreeMap<&'static str, String> {
        let mut props = BTreeMap::new();
        props.insert(THREAD_TIMEOUT_MS_ATTRIB, self.query_timeout_ms.to_string());
        props.insert(HBASE_RPC_TIMEOUT_KEY, self.rpc_timeout_ms.to_string());
        props.insert(
            HBASE_CLIENT_SCANNER_TIMEOUT_PERIOD,
            self.scanner_timeout_ms.to_string(),
        );
        props.insert(HBASE_CLIENT_RETRIES_NUMBER, self.rpc_retries.to_string());
        props
    }
}

fn parse_or<T: std::str::FromStr>(
    props: &BTreeMap<String, String>,
    key: &str,
    default: T,
) -> Result<T, PddlError> {
    match props.get(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| PddlError::Argument(format!("Invalid value for {}: {}", key, value))),
        None => Ok(default),
    }
}

/// Parse `key=value` lines. `#` and `!` start comment lines; `:` is accepted
/// as a separator too.
pub fn parse_properties(content: &str) -> BTreeMap<String, String> {
    let mut props = BTreeMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }
        let split = line.find(['=', ':']);
        if let Some(pos) = split {
            let key = line[..pos].trim();
            let value = line[pos + 1..].trim();
            if !key.is_empty() {
                props.insert(key.to_string(), value.to_string());
            }
        }
    }
    props
}

pub fn parse_properties_file(path: &Path) -> Result<BTreeMap<String, String>, PddlError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PddlError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
    Ok(parse_properties(&content))
}

/// Find the default settings file.
pub fn find_defaults_file() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        let path = Path::new(&home).join(".pddl.properties");
        if path.exists() {
            return Some(path);
        }
    }
    let etc = Path::new("/etc/pddl/pddl.properties");
    if etc.exists() {
        return Some(etc.to_path_buf());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_properties() {
        let props = parse_properties(
            "# comment\n! also comment\n\nhbase.rpc.timeout = 100\nname: value\nbroken line\n",
        );
        assert_eq!(props.len(), 2);
        assert_eq!(props["hbase.rpc.timeout"], "100");
        assert_eq!(props["name"], "value");
    }

    #[test]
    fn test_defaults() {
        let settings = ConnectionSettings::from_properties(&BTreeMap::new()).unwrap();
        assert_eq!(settings, ConnectionSettings::default());
        assert_eq!(settings.query_timeout_ms, 1_800_000_000);
        assert_eq!(settings.rpc_retries, 5);
    }

    #[test]
    fn test_client_properties_mapping() {
        let mut props = BTreeMap::new();
        props.insert(INDEX_REBUILD_QUERY_TIMEOUT_ATTRIB.to_string(), "10".to_string());
        props.insert(INDEX_REBUILD_RPC_TIMEOUT_ATTRIB.to_string(), "20".to_string());
        props.insert(
            INDEX_REBUILD_CLIENT_SCANNER_TIMEOUT_ATTRIB.to_string(),
            "30".to_string(),
        );
        props.insert(INDEX_REBUILD_RPC_RETRIES_COUNTER.to_string(), "2".to_string());

        let client = ConnectionSettings::from_properties(&props)
            .unwrap()
            .client_properties();
        assert_eq!(client[THREAD_TIMEOUT_MS_ATTRIB], "10");
        assert_eq!(client[HBASE_RPC_TIMEOUT_KEY], "20");
        assert_eq!(client[HBASE_CLIENT_SCANNER_TIMEOUT_PERIOD], "30");
        assert_eq!(client[HBASE_CLIENT_RETRIES_NUMBER], "2");
    }

    #[test]
    fn test_invalid_value() {
        let mut props = BTreeMap::new();
        props.insert(INDEX_REBUILD_RPC_TIMEOUT_ATTRIB.to_string(), "soon".to_string());
        let err = ConnectionSettings::from_properties(&props).unwrap_err();
        assert!(matches!(err, PddlError::Argument(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "{}=7", INDEX_REBUILD_RPC_RETRIES_COUNTER).unwrap();
        tmp.flush().unwrap();

        let settings = ConnectionSettings::load(Some(tmp.path())).unwrap();
        assert_eq!(settings.rpc_retries, 7);
        assert_eq!(settings.rpc_timeout_ms, DEFAULT_INDEX_REBUILD_TIMEOUT_MS);
    }

    #[test]
    fn test_load_missing_file() {
        let result = ConnectionSettings::load(Some(Path::new("/nonexistent/pddl.properties")));
        assert!(matches!(result, Err(PddlError::Io(_))));
    }
}
