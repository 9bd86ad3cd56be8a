#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod cache;
pub mod config;
pub mod data;
pub mod domain;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use cache::ConnectionStatus;
pub use domain::{Demo, DemoKind, LensModule};
pub use ui::LensGuideApp;
pub use utils::app_time;

#[cfg(not(target_arch = "wasm32"))]
pub use cache::{AssetClient, GenerationStore, HttpAssetSource};

use crate::config::{ASSETS, DEFAULT_CACHE_DIR_NAME};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL the catalog and demo images are fetched from
    #[arg(long, default_value_t = ASSETS.endpoints.base_url.to_string())]
    pub asset_base: String,

    /// Directory the offline asset generations are installed into
    #[arg(long, default_value = DEFAULT_CACHE_DIR_NAME)]
    pub cache_dir: PathBuf,

    /// Discard the installed asset generation and fetch it again
    #[arg(long, default_value_t = false)]
    pub refresh_assets: bool,

    /// Never touch the network; run from the installed cache only
    #[arg(long, default_value_t = false)]
    pub offline: bool,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
#[cfg(not(target_arch = "wasm32"))]
pub fn run_app(
    cc: &eframe::CreationContext,
    asset_client: Option<AssetClient>,
    runtime: tokio::runtime::Handle,
) -> Box<dyn eframe::App> {
    let app = ui::LensGuideApp::new(cc, asset_client, runtime);
    Box::new(app)
}

/// The wasm build ships with the embedded catalog only, so it needs
/// neither an asset client nor a runtime handle.
#[cfg(target_arch = "wasm32")]
pub fn run_app(cc: &eframe::CreationContext) -> Box<dyn eframe::App> {
    let app = ui::LensGuideApp::new(cc);
    Box::new(app)
}
