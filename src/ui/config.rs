use eframe::egui::Color32;

pub use crate::ui::ui_text::{UI_TEXT, UiText};

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub accent: Color32,
    pub pill_good: Color32,
    pub pill_warn: Color32,
    pub pill_neutral: Color32,
    pub pane_before: Color32,
    pub pane_after: Color32,
    pub divider: Color32,
    pub stage_sky: Color32,
    pub stage_sun: Color32,
    pub stage_ground: Color32,
    pub tint_overlay: Color32,
    pub bar_track: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Catalog cards never shrink below this width
    pub card_min_width: f32,
    /// Height of the split-compare and photochromic stages
    pub demo_stage_height: f32,
    /// Demo screens cap their content at this width so kiosk
    /// displays don't stretch the panes into letterboxes
    pub max_content_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(148, 163, 184),
        heading: Color32::from_rgb(125, 211, 252),
        subsection_heading: Color32::from_rgb(186, 230, 253),
        central_panel: Color32::from_rgb(15, 23, 42),
        side_panel: Color32::from_rgb(8, 13, 28),
        card: Color32::from_rgb(30, 41, 59),
        accent: Color32::from_rgb(56, 189, 248),
        pill_good: Color32::from_rgb(74, 222, 128),
        pill_warn: Color32::from_rgb(251, 191, 36),
        pill_neutral: Color32::from_rgb(71, 85, 105),
        pane_before: Color32::from_rgb(100, 116, 139),
        pane_after: Color32::from_rgb(56, 189, 248),
        divider: Color32::WHITE,
        stage_sky: Color32::from_rgb(125, 190, 240),
        stage_sun: Color32::from_rgb(253, 224, 71),
        stage_ground: Color32::from_rgb(87, 83, 78),
        tint_overlay: Color32::from_rgb(15, 23, 42),
        bar_track: Color32::from_rgb(30, 41, 59),
    },
    card_min_width: 150.0,
    demo_stage_height: 240.0,
    max_content_width: 680.0,
};
