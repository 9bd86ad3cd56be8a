//! File persistence and embedded resource configuration

/// Directory name (under the user cache dir, or the working directory as a
/// fallback) that holds asset generations
pub const DEFAULT_CACHE_DIR_NAME: &str = "lensguide_cache";

/// Metadata file written into a generation directory at commit time
pub const GENERATION_META_FILENAME: &str = "generation.json";

/// Suffix of the temporary directory a generation is staged into before the
/// atomic rename that commits it
pub const STAGING_SUFFIX: &str = ".staging";

/// Catalog document compiled into the binary. Last-resort fallback when no
/// generation is installed and the network is unavailable; also the only
/// catalog the wasm demo build ships.
pub const EMBEDDED_CATALOG: &str = include_str!("../../assets/modules.json");
