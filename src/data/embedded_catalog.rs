use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::config::EMBEDDED_CATALOG;
use crate::data::CreateCatalogData;
use crate::domain::catalog::{LensModule, parse_catalog};

/// Parse the catalog compiled into the binary. Synchronous on purpose: the
/// wasm demo build resolves its catalog promise with this before the first
/// frame.
pub fn load_embedded() -> Result<Vec<LensModule>> {
    parse_catalog(EMBEDDED_CATALOG).context("Embedded catalog is invalid")
}

/// Last provider in every chain: the showroom content the binary shipped
/// with. Cannot observe catalog updates, but cannot fail to load either.
pub struct EmbeddedCatalog;

#[async_trait]
impl CreateCatalogData for EmbeddedCatalog {
    fn signature(&self) -> &'static str {
        "Embedded Catalog"
    }

    async fn create_catalog_data(&self) -> Result<Vec<LensModule>> {
        load_embedded()
    }
}
