use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result, bail};

use crate::cache::ConnectionStatus;
use crate::cache::source::AssetSource;
use crate::cache::store::GenerationStore;
#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::config::ASSETS;

/// Fetch-through handle the rest of the app talks to: cached bytes when a
/// generation is installed, live network otherwise. Clones share state.
#[derive(Clone)]
pub struct AssetClient {
    store: Arc<GenerationStore>,
    source: Arc<dyn AssetSource>,
    generation: &'static str,
    offline: bool,
    status: Arc<Mutex<ConnectionStatus>>,
}

impl AssetClient {
    pub fn new(store: Arc<GenerationStore>, source: Arc<dyn AssetSource>, offline: bool) -> Self {
        Self {
            store,
            source,
            generation: ASSETS.generation,
            offline,
            status: Arc::new(Mutex::new(ConnectionStatus::Offline)),
        }
    }

    /// Serve one asset. The cached copy wins outright; only a miss goes to
    /// the network, and a network result is never written back into the
    /// generation (contents change only when the generation does). An
    /// offline client treats a miss as an error instead of fetching.
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        if let Some(bytes) = self.store.lookup(self.generation, path).await {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_cache_events {
                log::info!("[cache] hit: {path}");
            }
            return Ok(bytes);
        }
        if self.offline {
            bail!("Asset not installed and offline mode is on: {path}");
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_cache_events {
            log::info!("[cache] miss, fetching: {path}");
        }
        match self.source.fetch(path).await {
            Ok(bytes) => {
                self.set_status(ConnectionStatus::Online);
                Ok(bytes)
            }
            Err(e) => {
                self.set_status(ConnectionStatus::Offline);
                Err(e).context(format!("Asset unavailable offline: {path}"))
            }
        }
    }

    /// Last observed connectivity, from real fetch outcomes and the probe.
    pub fn status(&self) -> ConnectionStatus {
        *self.status.lock().unwrap()
    }

    fn set_status(&self, next: ConnectionStatus) {
        let mut status = self.status.lock().unwrap();
        if *status != next {
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_connectivity {
                log::info!("[connectivity] {:?} -> {next:?}", *status);
            }
            *status = next;
        }
    }
}

/// Startup knobs taken from the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct AssetServiceOptions {
    /// Never touch the network: no install task, no probe. The client also
    /// treats cache misses as errors instead of fetching.
    pub offline: bool,
    /// Drop the committed generation and reinstall from the source.
    pub refresh: bool,
}

/// Start the background half of the asset cache: the one-shot
/// install+activate pass and the periodic connectivity probe. Returns the
/// client handle the UI keeps.
pub fn spawn_asset_services(
    rt: &tokio::runtime::Handle,
    store: GenerationStore,
    source: Arc<dyn AssetSource>,
    options: AssetServiceOptions,
) -> AssetClient {
    let client = AssetClient::new(Arc::new(store), source, options.offline);

    if options.offline {
        log::info!("Offline mode: using installed assets only");
        return client;
    }

    // Installer: one attempt per launch. Failure is not fatal; the app keeps
    // serving from the network or the embedded catalog, and the next launch
    // tries again.
    let install_client = client.clone();
    let refresh = options.refresh;
    rt.spawn(async move {
        match run_install(&install_client, refresh).await {
            // A fresh install just proved the network works. A warm pass
            // skipped the source, so it says nothing about connectivity.
            Ok(true) => install_client.set_status(ConnectionStatus::Online),
            Ok(false) => {}
            Err(e) => {
                log::warn!("Asset install failed (continuing without offline copy): {e:#}");
            }
        }
    });

    // Probe: keeps the status pill honest while the app idles. The first
    // tick fires immediately, so startup gets an answer fast.
    let probe_client = client.clone();
    rt.spawn(async move {
        let mut ticker =
            tokio::time::interval(Duration::from_secs(ASSETS.endpoints.probe_interval_secs));
        loop {
            ticker.tick().await;
            let status = match probe_client.source.probe().await {
                Ok(()) => ConnectionStatus::Online,
                Err(_e) => {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_connectivity {
                        log::info!("[connectivity] probe failed: {_e:#}");
                    }
                    ConnectionStatus::Offline
                }
            };
            probe_client.set_status(status);
        }
    });

    client
}

async fn run_install(client: &AssetClient, refresh: bool) -> Result<bool> {
    let store = &client.store;
    if refresh {
        store.remove(ASSETS.generation).await?;
    }
    let fresh = store
        .install(client.source.as_ref(), ASSETS.generation, ASSETS.manifest)
        .await?;
    let pruned = store.activate(ASSETS.generation).await?;
    if pruned > 0 {
        log::info!("Pruned {pruned} stale cache generation(s)");
    }
    Ok(fresh)
}
