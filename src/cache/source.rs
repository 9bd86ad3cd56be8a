use anyhow::Result;
use async_trait::async_trait;

/// Where asset bytes come from.
///
/// The generation installer and the fetch-through client only ever talk to
/// this trait, so tests can swap the network out entirely.
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// A unique identifier for this implementation (so logs show which one served us).
    fn signature(&self) -> &'static str;

    /// Fetch one asset by its manifest path. All-or-nothing installs rely on
    /// this returning an error rather than partial bytes.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>>;

    /// Cheap reachability check against the asset host.
    async fn probe(&self) -> Result<()>;
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::HttpAssetSource;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::time::Duration;

    use anyhow::{Context, Result};
    use async_trait::async_trait;

    use super::AssetSource;
    use crate::config::ASSETS;

    /// Fetches assets over HTTP from the configured asset host.
    pub struct HttpAssetSource {
        client: reqwest::Client,
        base_url: String,
    }

    impl HttpAssetSource {
        pub fn new(base_url: impl Into<String>) -> Result<Self> {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(ASSETS.endpoints.request_timeout_secs))
                .build()
                .context("Failed to build HTTP client for asset fetching")?;
            Ok(Self {
                client,
                base_url: base_url.into(),
            })
        }
    }

    #[async_trait]
    impl AssetSource for HttpAssetSource {
        fn signature(&self) -> &'static str {
            "http assets"
        }

        async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            let url = ASSETS.asset_url(&self.base_url, path);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .context(format!("Request failed: {url}"))?
                .error_for_status()
                .context(format!("Asset host rejected: {url}"))?;
            let bytes = response
                .bytes()
                .await
                .context(format!("Failed to read body: {url}"))?;
            Ok(bytes.to_vec())
        }

        async fn probe(&self) -> Result<()> {
            // HEAD on the catalog: small, always present, and proves the host
            // is actually serving assets rather than just resolving.
            let url = ASSETS.asset_url(&self.base_url, ASSETS.catalog_path);
            self.client
                .head(&url)
                .send()
                .await
                .context("Probe request failed")?
                .error_for_status()
                .context("Probe rejected by asset host")?;
            Ok(())
        }
    }
}
