use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::cache::AssetClient;
use crate::config::ASSETS;
use crate::data::CreateCatalogData;
use crate::domain::catalog::{LensModule, parse_catalog};

/// Catalog served through the asset client: the installed generation when
/// one exists, the network otherwise. First choice on native builds.
pub struct AssetCatalog {
    client: AssetClient,
}

impl AssetCatalog {
    pub fn new(client: AssetClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CreateCatalogData for AssetCatalog {
    fn signature(&self) -> &'static str {
        "Cached Assets"
    }

    async fn create_catalog_data(&self) -> Result<Vec<LensModule>> {
        let bytes = self.client.get(ASSETS.catalog_path).await?;
        let text = String::from_utf8(bytes).context("Catalog document is not UTF-8")?;
        parse_catalog(&text)
    }
}
