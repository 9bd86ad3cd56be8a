use eframe::{Frame, egui};
use poll_promise::Promise;
use std::fmt;
use std::time::Duration;

use crate::cache::ConnectionStatus;
use crate::data::{CreateCatalogData, EmbeddedCatalog};
use crate::domain::{LensModule, find_module};
use crate::ui::ui_widgets::DemoWidget;
use crate::ui::utils::setup_custom_visuals;
use crate::utils::app_time::Stopwatch;

#[cfg(not(target_arch = "wasm32"))]
use crate::cache::AssetClient;
#[cfg(not(target_arch = "wasm32"))]
use crate::data::{AssetCatalog, get_catalog_async};
#[cfg(target_arch = "wasm32")]
use crate::data::load_embedded;
#[cfg(not(target_arch = "wasm32"))]
use crate::ui::ui_widgets::DemoAssets;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Error types for application operations
#[derive(Debug, Clone)]
pub enum AppError {
    /// Every catalog provider failed, so there is nothing to show
    CatalogUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::CatalogUnavailable(msg) => write!(f, "Catalog unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Where the visitor is in the catalog / module / demo hierarchy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Catalog,
    ModuleDetail {
        module_id: String,
    },
    DemoDetail {
        module_id: String,
        demo_index: usize,
    },
}

type CatalogPromise = Promise<Result<(Vec<LensModule>, &'static str), AppError>>;

/// The showroom application. Everything the screens need lives here; none
/// of it is persisted, so a restart always lands on a clean catalog.
pub struct LensGuideApp {
    pub(super) customer_mode: bool,
    pub(super) search_query: String,
    pub(super) screen: Screen,

    pub(super) catalog: Vec<LensModule>,
    catalog_signature: Option<&'static str>,
    catalog_error: Option<AppError>,
    catalog_promise: Option<CatalogPromise>,
    catalog_timer: Option<Stopwatch>,

    /// The widget for the demo currently on screen. Rebuilt on every
    /// navigation so demo state never leaks between visits.
    pub(super) active_demo: Option<DemoWidget>,

    #[cfg(not(target_arch = "wasm32"))]
    asset_client: Option<AssetClient>,
    #[cfg(not(target_arch = "wasm32"))]
    runtime: tokio::runtime::Handle,
}

impl LensGuideApp {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        asset_client: Option<AssetClient>,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            customer_mode: false,
            search_query: String::new(),
            screen: Screen::default(),
            catalog: Vec::new(),
            catalog_signature: None,
            catalog_error: None,
            catalog_promise: None,
            catalog_timer: None,
            active_demo: None,
            asset_client,
            runtime,
        };
        app.spawn_catalog_load();
        app
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut app = Self {
            customer_mode: false,
            search_query: String::new(),
            screen: Screen::default(),
            catalog: Vec::new(),
            catalog_signature: None,
            catalog_error: None,
            catalog_promise: None,
            catalog_timer: None,
            active_demo: None,
        };
        app.spawn_catalog_load();
        app
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn spawn_catalog_load(&mut self) {
        let mut providers: Vec<Box<dyn CreateCatalogData>> = Vec::new();
        if let Some(client) = &self.asset_client {
            providers.push(Box::new(AssetCatalog::new(client.clone())));
        }
        providers.push(Box::new(EmbeddedCatalog));

        let rt = self.runtime.clone();
        self.catalog_timer = Some(Stopwatch::start());
        self.catalog_promise = Some(Promise::spawn_thread("catalog_load", move || {
            rt.block_on(get_catalog_async(&providers))
                .map_err(|e| AppError::CatalogUnavailable(format!("{e:#}")))
        }));
    }

    #[cfg(target_arch = "wasm32")]
    fn spawn_catalog_load(&mut self) {
        let result = load_embedded()
            .map(|modules| (modules, EmbeddedCatalog.signature()))
            .map_err(|e| AppError::CatalogUnavailable(format!("{e:#}")));
        self.catalog_timer = Some(Stopwatch::start());
        self.catalog_promise = Some(Promise::from_ready(result));
    }

    fn poll_catalog_promise(&mut self) {
        let Some(promise) = &self.catalog_promise else {
            return;
        };
        let Some(result) = promise.ready() else {
            return;
        };

        match result {
            Ok((modules, signature)) => {
                if let Some(timer) = &self.catalog_timer {
                    log::info!(
                        "Catalog ready via {signature} after {} ms",
                        timer.elapsed_ms()
                    );
                }
                self.catalog = modules.clone();
                self.catalog_signature = Some(*signature);
                self.catalog_error = None;
            }
            Err(e) => {
                log::warn!("Catalog load failed: {e}");
                self.catalog_error = Some(e.clone());
            }
        }
        self.catalog_promise = None;
        self.catalog_timer = None;
    }

    pub(super) fn catalog_loading(&self) -> bool {
        self.catalog_promise.is_some()
    }

    pub(super) fn catalog_error(&self) -> Option<&AppError> {
        self.catalog_error.as_ref()
    }

    pub(super) fn catalog_signature(&self) -> Option<&'static str> {
        self.catalog_signature
    }

    pub(super) fn module_count(&self) -> usize {
        self.catalog.len()
    }

    pub(super) fn connection_status(&self) -> ConnectionStatus {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.asset_client
                .as_ref()
                .map(|client| client.status())
                .unwrap_or_default()
        }
        #[cfg(target_arch = "wasm32")]
        {
            ConnectionStatus::default()
        }
    }

    pub(super) fn go_home(&mut self) {
        self.screen = Screen::Catalog;
        self.active_demo = None;
    }

    /// One step up the hierarchy. Escape and the back buttons both land here.
    pub(super) fn back(&mut self) {
        match &self.screen {
            Screen::Catalog => {}
            Screen::ModuleDetail { .. } => self.go_home(),
            Screen::DemoDetail { module_id, .. } => {
                let module_id = module_id.clone();
                self.screen = Screen::ModuleDetail { module_id };
                self.active_demo = None;
            }
        }
    }

    pub(super) fn open_module(&mut self, module_id: &str) {
        if find_module(&self.catalog, module_id).is_none() {
            return; // stale click, e.g. right after a catalog refresh
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Opening module '{module_id}'");
        }

        self.screen = Screen::ModuleDetail {
            module_id: module_id.to_string(),
        };
        self.active_demo = None;
    }

    pub(super) fn open_demo(&mut self, module_id: &str, demo_index: usize) {
        let Some(demo) = find_module(&self.catalog, module_id)
            .and_then(|module| module.demos.get(demo_index))
        else {
            return;
        };

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_ui_interactions {
            log::info!("Opening demo {demo_index} of module '{module_id}'");
        }

        #[cfg(not(target_arch = "wasm32"))]
        let widget = {
            let assets = DemoAssets {
                client: self.asset_client.as_ref(),
                runtime: &self.runtime,
            };
            DemoWidget::for_demo(demo, &assets)
        };
        #[cfg(target_arch = "wasm32")]
        let widget = DemoWidget::for_demo(demo);

        self.active_demo = Some(widget);
        self.screen = Screen::DemoDetail {
            module_id: module_id.to_string(),
            demo_index,
        };
    }
}

impl eframe::App for LensGuideApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Drop any in-flight promise state before the runtime goes away
        if let Some(promise) = self.catalog_promise.take() {
            drop(promise);
        }
        self.active_demo = None;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_shutdown {
            log::info!("Application shutdown complete.");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.poll_catalog_promise();
        self.handle_global_shortcuts(ctx);

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        // Keep the connectivity pill fresh while the kiosk sits idle
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}
