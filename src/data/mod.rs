// Catalog loading: provider chain tried in order until one yields modules
#[cfg(not(target_arch = "wasm32"))]
pub mod asset_catalog;
pub mod embedded_catalog;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::domain::catalog::LensModule;

// Re-export commonly used types
#[cfg(not(target_arch = "wasm32"))]
pub use asset_catalog::AssetCatalog;
pub use embedded_catalog::{EmbeddedCatalog, load_embedded};

#[async_trait]
pub trait CreateCatalogData: Send + Sync {
    // Either produce the catalog OR return an anyhow::error
    async fn create_catalog_data(&self) -> Result<Vec<LensModule>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

/// Try each provider in order; the first success wins.
pub async fn get_catalog_async(
    implementations: &[Box<dyn CreateCatalogData>],
) -> Result<(Vec<LensModule>, &'static str)> {
    for imp in implementations {
        match imp.create_catalog_data().await {
            Ok(modules) => {
                let signature = imp.signature();
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_catalog_loading {
                    log::info!(
                        "Catalog loaded via {signature} ({} modules)",
                        modules.len()
                    );
                }
                return Ok((modules, signature));
            }
            Err(e) => {
                log::info!("Catalog provider failed: {e:#}");
                // Continue to the next implementation
            }
        }
    }
    Err(anyhow!("All catalog providers failed"))
}
