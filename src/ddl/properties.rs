//! Table property diffing.
//!
//! A `CREATE TABLE` statement only repeats the properties whose effective
//! value differs from what the storage engine would pick on its own. The
//! baseline comes from the engine's column-family defaults with a few
//! normalizations, widened by every table-level descriptor key; effective
//! values come from the storage descriptor and the catalog object.
//!
//! Property names are case-insensitive: every key is upper-cased as it
//! enters either map, so lookups and the rendered clause use one spelling.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::constants::{
    BLOOMFILTER, COMPRESSION, COPROCESSOR_MARKER, DATA_BLOCK_ENCODING,
    DEFAULT_DATA_BLOCK_ENCODING, IS_META, NONE_VALUE, STORAGE_DEFAULTS, UNKNOWN_DEFAULT,
};
use crate::catalog::{PhysicalDescriptor, SchemaObject};

/// Storage-engine column-family defaults as an owned map.
pub fn storage_defaults() -> BTreeMap<String, String> {
    STORAGE_DEFAULTS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Build the default-value baseline.
///
/// Bloom filter and compression are pinned to `NONE` and block encoding to
/// `FAST_DIFF`, then the object-kind defaults are laid on top.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use pddl::ddl::properties::{build_baseline, storage_defaults};
///
/// let baseline = build_baseline(&storage_defaults(), &BTreeMap::new());
/// assert_eq!(baseline["BLOOMFILTER"], "NONE");
/// assert_eq!(baseline["DATA_BLOCK_ENCODING"], "FAST_DIFF");
/// assert_eq!(baseline["VERSIONS"], "1");
/// ```
pub fn build_baseline(
    engine_defaults: &BTreeMap<String, String>,
    object_defaults: &BTreeMap<String, String>,
) -> BTreeMap<String, String> {
    let mut baseline = BTreeMap::new();
    for (key, value) in engine_defaults {
        let key = property_key(key);
        let value = if key == BLOOMFILTER || key == COMPRESSION {
            NONE_VALUE.to_string()
        } else if key == DATA_BLOCK_ENCODING {
            DEFAULT_DATA_BLOCK_ENCODING.to_string()
        } else {
            value.clone()
        };
        baseline.insert(key, value);
    }
    for (key, value) in object_defaults {
        baseline.insert(property_key(key), value.clone());
    }
    baseline
}

/// Canonical spelling of a property name.
pub fn property_key(key: &str) -> String {
    key.to_ascii_uppercase()
}

/// Baseline and effective property values of one object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMaps {
    pub defaults: BTreeMap<String, String>,
    pub defined: BTreeMap<String, String>,
}

/// Whether a table-level descriptor key is an internal marker.
pub fn is_system_marker(key: &str) -> bool {
    let lower = key.to_ascii_lowercase();
    lower.contains(&COPROCESSOR_MARKER.to_ascii_lowercase())
        || lower.contains(&IS_META.to_ascii_lowercase())
}

/// Merge the baseline with the effective values from the storage
/// descriptor and the object's declared properties.
///
/// `baseline` is expected to come from [`build_baseline`], with keys
/// already in canonical form.
pub fn collect_properties(
    baseline: BTreeMap<String, String>,
    table_values: &BTreeMap<String, String>,
    family_values: &BTreeMap<String, String>,
    declared: &BTreeMap<String, Option<String>>,
) -> PropertyMaps {
    let mut defaults = baseline;
    let mut defined = BTreeMap::new();

    for (key, value) in table_values {
        if is_system_marker(key) {
            continue;
        }
        let key = property_key(key);
        if !defaults.contains_key(&key) {
            debug!(property = %key, "no baseline for descriptor property");
            defaults.insert(key.clone(), UNKNOWN_DEFAULT.to_string());
        }
        defined.insert(key, value.clone());
    }

    for (key, value) in family_values {
        defined.insert(property_key(key), value.clone());
    }

    for (key, value) in declared {
        if let Some(value) = value {
            defined.insert(property_key(key), value.clone());
        }
    }

    PropertyMaps { defaults, defined }
}

/// Render `key=value` for every defined property that has a baseline and
/// deviates from it, comma-joined in key order.
///
/// ```
/// use std::collections::BTreeMap;
/// use pddl::ddl::properties::{render_properties, PropertyMaps};
///
/// let mut maps = PropertyMaps::default();
/// maps.defaults.insert("COMPRESSION".to_string(), "NONE".to_string());
/// maps.defined.insert("COMPRESSION".to_string(), "GZ".to_string());
/// maps.defined.insert("UNKNOWN".to_string(), "X".to_string());
/// assert_eq!(render_properties(&maps), "COMPRESSION=GZ");
/// ```
pub fn render_properties(maps: &PropertyMaps) -> String {
    maps.defined
        .iter()
        .filter(|(key, value)| {
            maps.defaults
                .get(*key)
                .is_some_and(|default| default != *value)
        })
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join(",")
}

/// Non-default property clause of a table.
pub fn table_properties_clause(table: &SchemaObject, descriptor: &PhysicalDescriptor) -> String {
    let baseline = build_baseline(&storage_defaults(), &table.default_values);
    let family = table.empty_column_family();
    let empty = BTreeMap::new();
    let family_values = descriptor.family(family).unwrap_or_else(|| {
        warn!(
            table = %table.name,
            family,
            "storage descriptor has no entry for the default column family"
        );
        &empty
    });
    let maps = collect_properties(baseline, &descriptor.values, family_values, &table.properties);
    render_properties(&maps)
}
