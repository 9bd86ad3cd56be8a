/// Every user-facing string in one place so wording stays consistent
/// between screens (and so the showroom team can review copy in one file).
pub struct UiText {
    pub app_title: &'static str,
    pub catalog_heading: &'static str,
    pub search_hint: &'static str,
    pub customer_mode: &'static str,

    // Connectivity pill. Offline is the state the kiosk is designed for,
    // so it reads as the reassuring one.
    pub status_online: &'static str,
    pub status_offline: &'static str,

    pub button_home: &'static str,
    pub button_all_modules: &'static str,
    pub button_back: &'static str,

    // Static badges on every module card.
    pub badge_offline: &'static str,
    pub badge_fast: &'static str,

    pub loading_heading: &'static str,
    pub catalog_error_heading: &'static str,
    pub empty_results: &'static str,
    pub empty_module: &'static str,

    pub unsupported_demo: &'static str,
    pub unsupported_demo_hint: &'static str,

    pub label_before: &'static str,
    pub label_after: &'static str,
    pub label_indoor: &'static str,
    pub label_outdoor: &'static str,

    pub photochromic_stage: &'static str,
    pub coating_stack: &'static str,

    pub label_sphere: &'static str,
    pub label_material: &'static str,
    pub thickness_bar: &'static str,
    pub thickness_note: &'static str,

    pub image_loading: &'static str,
    pub image_unavailable: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_title: "Silvinity LensGuide",
    catalog_heading: "Lens Technology",
    search_hint: "Search demos",
    customer_mode: "Customer mode",

    status_online: "Online (cached)",
    status_offline: "Offline",

    button_home: "🏠 Home",
    button_all_modules: "← All modules",
    button_back: "← Back",

    badge_offline: "Offline",
    badge_fast: "Fast",

    loading_heading: "Loading demo catalog...",
    catalog_error_heading: "Catalog unavailable",
    empty_results: "No modules match your search.",
    empty_module: "No demos in this module yet.",

    unsupported_demo: "Demo coming soon",
    unsupported_demo_hint: "This demo isn't part of the current build.",

    label_before: "Before",
    label_after: "After",
    label_indoor: "Indoor",
    label_outdoor: "Outdoor",

    photochromic_stage: "Photochromic Lens",
    coating_stack: "Coating Stack",

    label_sphere: "Sphere (D)",
    label_material: "Material",
    thickness_bar: "Relative edge thickness",
    thickness_note: "Visual estimate only. Higher index usually means thinner lenses.",

    image_loading: "Fetching comparison images...",
    image_unavailable: "Comparison images unavailable offline.",
};
