/// Storage-engine and catalog constants used during DDL reconstruction.
///
/// Column-family property names and their factory defaults follow the HBase
/// column descriptor; the remaining values are Phoenix catalog conventions.
// Column-family property names
pub const BLOOMFILTER: &str = "BLOOMFILTER";
pub const REPLICATION_SCOPE: &str = "REPLICATION_SCOPE";
pub const VERSIONS: &str = "VERSIONS";
pub const MIN_VERSIONS: &str = "MIN_VERSIONS";
pub const COMPRESSION: &str = "COMPRESSION";
pub const TTL: &str = "TTL";
pub const BLOCKSIZE: &str = "BLOCKSIZE";
pub const IN_MEMORY: &str = "IN_MEMORY";
pub const BLOCKCACHE: &str = "BLOCKCACHE";
pub const KEEP_DELETED_CELLS: &str = "KEEP_DELETED_CELLS";
pub const DATA_BLOCK_ENCODING: &str = "DATA_BLOCK_ENCODING";
pub const CACHE_DATA_ON_WRITE: &str = "CACHE_DATA_ON_WRITE";
pub const CACHE_DATA_IN_L1: &str = "CACHE_DATA_IN_L1";
pub const CACHE_INDEX_ON_WRITE: &str = "CACHE_INDEX_ON_WRITE";
pub const CACHE_BLOOMS_ON_WRITE: &str = "CACHE_BLOOMS_ON_WRITE";
pub const EVICT_BLOCKS_ON_CLOSE: &str = "EVICT_BLOCKS_ON_CLOSE";
pub const PREFETCH_BLOCKS_ON_OPEN: &str = "PREFETCH_BLOCKS_ON_OPEN";

// Table-level descriptor markers that never surface in DDL
pub const COPROCESSOR_MARKER: &str = "coprocessor";
pub const IS_META: &str = "IS_META";

/// HBase column-family factory defaults, as `(property, value)` pairs.
pub const STORAGE_DEFAULTS: &[(&str, &str)] = &[
    (BLOOMFILTER, "ROW"),
    (REPLICATION_SCOPE, "0"),
    (VERSIONS, "1"),
    (MIN_VERSIONS, "0"),
    (COMPRESSION, "NONE"),
    (TTL, "2147483647"), // HConstants.FOREVER
    (BLOCKSIZE, "65536"),
    (IN_MEMORY, "false"),
    (BLOCKCACHE, "true"),
    (KEEP_DELETED_CELLS, "FALSE"),
    (DATA_BLOCK_ENCODING, "NONE"),
    (CACHE_DATA_ON_WRITE, "false"),
    (CACHE_DATA_IN_L1, "false"),
    (CACHE_INDEX_ON_WRITE, "false"),
    (CACHE_BLOOMS_ON_WRITE, "false"),
    (EVICT_BLOCKS_ON_CLOSE, "false"),
    (PREFETCH_BLOCKS_ON_OPEN, "false"),
];

/// Value forced onto the bloom-filter and compression baseline entries.
pub const NONE_VALUE: &str = "NONE";

/// Block encoding Phoenix applies to the tables it creates.
pub const DEFAULT_DATA_BLOCK_ENCODING: &str = "FAST_DIFF";

/// Baseline value for table-level descriptor keys with no SQL-visible default.
pub const UNKNOWN_DEFAULT: &str = "false";

/// Family used when an object declares no default column family.
pub const DEFAULT_COLUMN_FAMILY: &str = "0";

/// Synthetic leading PK column of view indexes.
pub const VIEW_INDEX_ID_COLUMN_NAME: &str = "_INDEX_ID";

/// Separator between family and qualifier in physical index column names.
pub const FAMILY_SEPARATOR: char = ':';

/// Constraint name used for a composite key with no recorded PK name.
pub const FALLBACK_PK_NAME: &str = "PK";
