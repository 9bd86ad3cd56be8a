// User interface components
pub mod app;
pub mod config;
pub mod styles;
pub mod ui_catalog;
pub mod ui_render;
pub mod ui_text;
pub mod ui_widgets;
pub mod utils;

// Re-export main app
pub use app::LensGuideApp;
pub use config::UI_CONFIG;
