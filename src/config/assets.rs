//! config/assets.rs Asset cache and network configuration.
//!
//! One generation is one complete, named set of files. The installer
//! treats `manifest` as all-or-nothing: either every entry lands on disk
//! or the generation is not committed. Bump `generation` whenever the
//! manifest or any shipped asset changes, otherwise stale copies keep
//! being served from disk.

/// Network locations and timings for asset fetching
pub struct AssetEndpoints {
    /// Base URL each manifest path is joined onto
    pub base_url: &'static str,
    /// Seconds between connectivity probes while the app runs
    pub probe_interval_secs: u64,
    /// Per-request timeout in seconds for asset and probe fetches
    pub request_timeout_secs: u64,
}

/// The Master Asset Configuration
pub struct AssetConfig {
    /// Cache generation name. Doubles as the on-disk directory name.
    pub generation: &'static str,
    /// Manifest path of the catalog document
    pub catalog_path: &'static str,
    /// Every file one generation must contain
    pub manifest: &'static [&'static str],
    /// Endpoints
    pub endpoints: AssetEndpoints,
}

pub const ASSETS: AssetConfig = AssetConfig {
    generation: "lensguide-assets-v1",
    catalog_path: "modules.json",
    manifest: &[
        "modules.json",
        "assets/icon-192.png",
        "assets/icon-512.png",
        "assets/polar_before.jpg",
        "assets/polar_after.jpg",
        "assets/ar_before.jpg",
        "assets/ar_after.jpg",
    ],

    endpoints: AssetEndpoints {
        base_url: "https://lensguide.silvinity.com",
        probe_interval_secs: 15,
        request_timeout_secs: 10,
    },
};

impl AssetConfig {
    /// Full URL for one manifest path.
    pub fn asset_url(&self, base_url: &str, path: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), path)
    }
}
