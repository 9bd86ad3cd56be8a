//! config/widgets.rs Demo widget defaults.
//!
//! Initial values and input ranges for the interactive demos. These match
//! the showroom content the catalog ships with, so a freshly opened demo
//! always starts from the same state.

/// Split before/after comparison defaults
pub struct SplitCompareConfig {
    /// Divider position when a demo opens (percent of pane width)
    pub initial_percent: f32,
}

/// Photochromic tint slider defaults
pub struct PhotochromicConfig {
    /// UV intensity when a demo opens (0..=100)
    pub initial_level: u8,
}

/// Thickness estimator defaults
pub struct ThicknessConfig {
    /// Prescription power shown when a demo opens (dioptres)
    pub default_power: f64,
    /// Step applied by the +/- buttons (dioptres)
    pub power_step: f64,
}

/// The Master Widget Configuration
pub struct WidgetConfig {
    pub split: SplitCompareConfig,
    pub tint: PhotochromicConfig,
    pub thickness: ThicknessConfig,
}

pub const WIDGETS: WidgetConfig = WidgetConfig {
    split: SplitCompareConfig {
        initial_percent: 50.0,
    },

    tint: PhotochromicConfig { initial_level: 20 },

    thickness: ThicknessConfig {
        default_power: -3.00,
        power_step: 0.25,
    },
};
