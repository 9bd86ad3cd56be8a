//! Configuration module for the lens-guide application.

pub mod assets;

mod debug; // Can be private now because we have a public re-export. Forces files to use crate::config::DEBUG_FLAGS not crate::config::debug::DEBUG_FLAGS
pub use debug::DEBUG_FLAGS;

pub mod persistence;
pub mod widgets;

// Re-export commonly used items
pub use assets::{ASSETS, AssetConfig};
pub use persistence::{
    DEFAULT_CACHE_DIR_NAME, EMBEDDED_CATALOG, GENERATION_META_FILENAME, STAGING_SUFFIX,
};
pub use widgets::WIDGETS;
