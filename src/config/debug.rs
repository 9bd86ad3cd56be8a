//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` by
//! default so normal runs stay quiet. The UI layer additionally gates its
//! users behind `cfg(debug_assertions)`.

pub struct DebugFlags {
    /// Emit UI interaction logs (navigation, demo opens, mode toggles).
    pub print_ui_interactions: bool,
    /// Emit per-request cache hit/miss decisions from the asset client.
    pub print_cache_events: bool,
    /// Emit install/activate lifecycle details from the generation store.
    pub print_install_progress: bool,
    /// Emit connectivity probe results and status flips.
    pub print_connectivity: bool,
    /// Emit catalog provider selection and parse details.
    pub print_catalog_loading: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_cache_events: false,
    print_install_progress: true,
    print_connectivity: false,
    print_catalog_loading: false,
    print_shutdown: false,
};
