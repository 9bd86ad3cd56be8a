//! Installs the current asset generation into a local cache directory so a
//! kiosk can be provisioned before it ever goes on the shop floor.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tokio::runtime::Runtime;

use lens_guide::config::{ASSETS, DEFAULT_CACHE_DIR_NAME};
use lens_guide::{GenerationStore, HttpAssetSource};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct WarmCacheArgs {
    /// Base URL to fetch the generation from
    #[arg(long, default_value_t = ASSETS.endpoints.base_url.to_string())]
    asset_base: String,

    /// Cache directory to install into
    #[arg(long, default_value = DEFAULT_CACHE_DIR_NAME)]
    cache_dir: PathBuf,

    /// Reinstall even if this generation is already committed
    #[arg(long, default_value_t = false)]
    refresh: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = WarmCacheArgs::parse();
    let rt = Runtime::new().context("Failed to create Tokio runtime")?;
    rt.block_on(warm_cache(&args))
}

async fn warm_cache(args: &WarmCacheArgs) -> Result<()> {
    let source = HttpAssetSource::new(args.asset_base.clone())?;
    let store = GenerationStore::new(args.cache_dir.clone());

    if args.refresh {
        store.remove(ASSETS.generation).await?;
    }

    let fresh = store
        .install(&source, ASSETS.generation, ASSETS.manifest)
        .await
        .with_context(|| format!("Failed to install generation '{}'", ASSETS.generation))?;

    let pruned = store.activate(ASSETS.generation).await?;
    if pruned > 0 {
        println!("Pruned {} stale generation(s).", pruned);
    }

    let meta = store.read_meta(ASSETS.generation).await?;
    println!(
        "✅ Generation '{}' {} at {:?} with {} assets.",
        meta.name,
        if fresh { "installed" } else { "already installed" },
        store.generation_dir(ASSETS.generation),
        meta.assets.len()
    );
    Ok(())
}
