// Asset generations on disk plus the fetch-through client over them
#[cfg(not(target_arch = "wasm32"))]
pub mod service;
pub mod source;
#[cfg(not(target_arch = "wasm32"))]
pub mod store;

// Re-export commonly used types
#[cfg(not(target_arch = "wasm32"))]
pub use service::{AssetClient, AssetServiceOptions, spawn_asset_services};
pub use source::AssetSource;
#[cfg(not(target_arch = "wasm32"))]
pub use source::HttpAssetSource;
#[cfg(not(target_arch = "wasm32"))]
pub use store::{GenerationMeta, GenerationStore};

/// Network reachability as last observed by real traffic. Nothing here is a
/// promise about the next request; it only drives the status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    Online,
    #[default]
    Offline,
}

impl ConnectionStatus {
    pub fn is_online(self) -> bool {
        matches!(self, ConnectionStatus::Online)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use anyhow::{Result, anyhow, bail};
    use async_trait::async_trait;

    use super::AssetSource;

    #[derive(Default)]
    struct MockInner {
        assets: Mutex<HashMap<String, Vec<u8>>>,
        fail_paths: Mutex<HashSet<String>>,
        offline: AtomicBool,
        fetches: AtomicUsize,
    }

    /// In-memory asset host for store and service tests. Clones share
    /// state, so a test can keep a handle while the client owns another.
    #[derive(Clone, Default)]
    pub(crate) struct MockSource {
        inner: Arc<MockInner>,
    }

    impl MockSource {
        pub fn insert(&self, path: &str, bytes: Vec<u8>) {
            self.inner
                .assets
                .lock()
                .unwrap()
                .insert(path.to_string(), bytes);
        }

        pub fn fail_on(&self, path: &str) {
            self.inner
                .fail_paths
                .lock()
                .unwrap()
                .insert(path.to_string());
        }

        pub fn set_offline(&self, offline: bool) {
            self.inner.offline.store(offline, Ordering::SeqCst);
        }

        pub fn fetch_count(&self) -> usize {
            self.inner.fetches.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl AssetSource for MockSource {
        fn signature(&self) -> &'static str {
            "mock assets"
        }

        async fn fetch(&self, path: &str) -> Result<Vec<u8>> {
            self.inner.fetches.fetch_add(1, Ordering::SeqCst);
            if self.inner.offline.load(Ordering::SeqCst) {
                bail!("mock source is offline");
            }
            if self.inner.fail_paths.lock().unwrap().contains(path) {
                bail!("mock fetch failure: {path}");
            }
            self.inner
                .assets
                .lock()
                .unwrap()
                .get(path)
                .cloned()
                .ok_or_else(|| anyhow!("mock source has no asset: {path}"))
        }

        async fn probe(&self) -> Result<()> {
            if self.inner.offline.load(Ordering::SeqCst) {
                bail!("mock source is offline");
            }
            Ok(())
        }
    }
}
