//! Interactive demo widgets.
//!
//! Each widget owns its own state and is rebuilt from scratch every time a
//! demo screen is opened, so a returning visitor always sees the demo's
//! starting configuration rather than the previous visitor's fiddling.

use eframe::egui::{
    self, Align2, Color32, ComboBox, CornerRadius, FontId, Frame, Image, Margin, Pos2, Rect, Sense,
    Slider, Stroke, TextEdit, Ui, Vec2,
};
use poll_promise::Promise;
use strum::IntoEnumIterator;

use crate::config::WIDGETS;
use crate::domain::optics::{bar_percent, parse_power, thickness_score, tint_opacity};
use crate::domain::{
    CoatingStack, Demo, DemoKind, DragEvent, MaterialIndex, SplitDrag, customer_text,
};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;

#[cfg(not(target_arch = "wasm32"))]
use crate::cache::AssetClient;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

/// Handles a widget needs to kick off background asset work when it is
/// created. The wasm build has no asset cache, so it has no equivalent.
#[cfg(not(target_arch = "wasm32"))]
pub struct DemoAssets<'a> {
    pub client: Option<&'a AssetClient>,
    pub runtime: &'a tokio::runtime::Handle,
}

/// A simple iOS-style toggle switch.
pub fn toggle(value: &mut bool) -> impl egui::Widget + '_ {
    move |ui: &mut Ui| {
        let size = Vec2::new(44.0, 24.0);
        let (rect, mut response) = ui.allocate_exact_size(size, Sense::click());

        if response.clicked() {
            *value = !*value;
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let how_on = ui.ctx().animate_bool_responsive(response.id, *value);
            let bg = if *value {
                UI_CONFIG.colors.accent
            } else {
                UI_CONFIG.colors.pill_neutral
            };
            ui.painter().rect_filled(rect, CornerRadius::same(12), bg);

            let knob_x = egui::lerp((rect.left() + 12.0)..=(rect.right() - 12.0), how_on);
            ui.painter().circle_filled(
                Pos2::new(knob_x, rect.center().y),
                10.0,
                Color32::WHITE,
            );
        }

        response
    }
}

/// The active demo on screen. One variant per demo type the catalog can
/// describe, plus a placeholder for types this build doesn't render.
pub enum DemoWidget {
    SplitCompare(SplitCompareState),
    CoatingToggles(CoatingState),
    Photochromic(PhotochromicState),
    Thickness(ThicknessState),
    Unsupported,
}

impl DemoWidget {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn for_demo(demo: &Demo, assets: &DemoAssets<'_>) -> Self {
        match &demo.kind {
            DemoKind::SplitCompare { before, after } => {
                Self::SplitCompare(SplitCompareState::new(before, after, assets))
            }
            DemoKind::CoatingToggles => Self::CoatingToggles(CoatingState::default()),
            DemoKind::Photochromic => Self::Photochromic(PhotochromicState::default()),
            DemoKind::ThicknessCalculator => Self::Thickness(ThicknessState::default()),
            DemoKind::Unsupported => Self::Unsupported,
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn for_demo(demo: &Demo) -> Self {
        match &demo.kind {
            DemoKind::SplitCompare { before, after } => {
                Self::SplitCompare(SplitCompareState::new(before, after))
            }
            DemoKind::CoatingToggles => Self::CoatingToggles(CoatingState::default()),
            DemoKind::Photochromic => Self::Photochromic(PhotochromicState::default()),
            DemoKind::ThicknessCalculator => Self::Thickness(ThicknessState::default()),
            DemoKind::Unsupported => Self::Unsupported,
        }
    }

    pub fn render(&mut self, ui: &mut Ui, customer_mode: bool) {
        match self {
            Self::SplitCompare(state) => state.render(ui),
            Self::CoatingToggles(state) => state.render(ui, customer_mode),
            Self::Photochromic(state) => state.render(ui),
            Self::Thickness(state) => state.render(ui),
            Self::Unsupported => {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.heading(UI_TEXT.unsupported_demo);
                    ui.label_subdued(UI_TEXT.unsupported_demo_hint);
                });
            }
        }
    }
}

struct SplitImages {
    before: Vec<u8>,
    after: Vec<u8>,
}

enum ImageLoad {
    /// No asset cache to fetch from. The painted panes still demo the divider.
    Unavailable,
    Pending(Promise<Result<SplitImages, String>>),
    Ready,
    Failed,
}

/// Draggable before/after comparison. The divider follows the pointer only
/// while a drag that started inside the pane is in progress.
pub struct SplitCompareState {
    percent: f32,
    drag: SplitDrag,
    before_path: String,
    after_path: String,
    images: ImageLoad,
}

impl SplitCompareState {
    #[cfg(not(target_arch = "wasm32"))]
    fn new(before: &str, after: &str, assets: &DemoAssets<'_>) -> Self {
        let images = match assets.client {
            Some(client) => {
                let client = client.clone();
                let rt = assets.runtime.clone();
                let before_path = before.to_string();
                let after_path = after.to_string();
                ImageLoad::Pending(Promise::spawn_thread("split_images", move || {
                    rt.block_on(async {
                        let before = client
                            .get(&before_path)
                            .await
                            .map_err(|e| format!("{e:#}"))?;
                        let after = client
                            .get(&after_path)
                            .await
                            .map_err(|e| format!("{e:#}"))?;
                        Ok(SplitImages { before, after })
                    })
                }))
            }
            None => ImageLoad::Unavailable,
        };

        Self {
            percent: WIDGETS.split.initial_percent,
            drag: SplitDrag::default(),
            before_path: before.to_string(),
            after_path: after.to_string(),
            images,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn new(before: &str, after: &str) -> Self {
        Self {
            percent: WIDGETS.split.initial_percent,
            drag: SplitDrag::default(),
            before_path: before.to_string(),
            after_path: after.to_string(),
            images: ImageLoad::Unavailable,
        }
    }

    fn poll_images(&mut self, ctx: &egui::Context) {
        if let ImageLoad::Pending(promise) = &self.images {
            let Some(result) = promise.ready() else {
                return;
            };
            let next = match result {
                Ok(images) => {
                    ctx.include_bytes(
                        format!("bytes://{}", self.before_path),
                        images.before.clone(),
                    );
                    ctx.include_bytes(
                        format!("bytes://{}", self.after_path),
                        images.after.clone(),
                    );
                    ImageLoad::Ready
                }
                Err(e) => {
                    log::warn!("Comparison images failed to load: {e}");
                    ImageLoad::Failed
                }
            };
            self.images = next;
        }
    }

    fn render(&mut self, ui: &mut Ui) {
        self.poll_images(ui.ctx());

        let width = ui.available_width().min(UI_CONFIG.max_content_width);
        let size = Vec2::new(width, UI_CONFIG.demo_stage_height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started() {
                if let Some(pct) = self.drag.handle(
                    DragEvent::Press { x: pos.x },
                    rect.left(),
                    rect.width(),
                ) {
                    self.percent = pct;
                }
            } else if response.dragged() {
                if let Some(pct) =
                    self.drag
                        .handle(DragEvent::Move { x: pos.x }, rect.left(), rect.width())
                {
                    self.percent = pct;
                }
            } else if response.clicked() {
                // A tap with no movement jumps the divider to the tap point.
                if let Some(pct) = self.drag.handle(
                    DragEvent::Press { x: pos.x },
                    rect.left(),
                    rect.width(),
                ) {
                    self.percent = pct;
                }
                self.drag.handle(DragEvent::Release, rect.left(), rect.width());
            }
        }
        if response.drag_stopped() {
            self.drag.handle(DragEvent::Release, rect.left(), rect.width());
            #[cfg(debug_assertions)]
            if DEBUG_FLAGS.print_ui_interactions {
                log::info!("Split divider released at {:.1}%", self.percent);
            }
        }

        let split_x = rect.left() + rect.width() * self.percent / 100.0;
        let after_rect = Rect::from_min_max(rect.min, Pos2::new(split_x, rect.max.y));

        if matches!(self.images, ImageLoad::Ready) {
            Image::from_uri(format!("bytes://{}", self.before_path)).paint_at(ui, rect);
            ui.scope(|ui| {
                ui.set_clip_rect(after_rect.intersect(ui.clip_rect()));
                Image::from_uri(format!("bytes://{}", self.after_path)).paint_at(ui, rect);
            });
        } else {
            // Flat stand-in panes so the divider still demos without images
            let base = ui.painter_at(rect);
            base.rect_filled(rect, CornerRadius::same(8), UI_CONFIG.colors.pane_before);
            base.text(
                Pos2::new(rect.right() - 12.0, rect.center().y),
                Align2::RIGHT_CENTER,
                UI_TEXT.label_before,
                FontId::proportional(14.0),
                Color32::WHITE,
            );
            let overlay = ui.painter_at(after_rect);
            overlay.rect_filled(rect, CornerRadius::same(8), UI_CONFIG.colors.pane_after);
            overlay.text(
                Pos2::new(rect.left() + 12.0, rect.center().y),
                Align2::LEFT_CENTER,
                UI_TEXT.label_after,
                FontId::proportional(14.0),
                UI_CONFIG.colors.central_panel,
            );
        }

        let painter = ui.painter_at(rect);
        painter.vline(
            split_x,
            rect.y_range(),
            Stroke::new(2.0, UI_CONFIG.colors.divider),
        );
        painter.circle_filled(
            Pos2::new(split_x, rect.center().y),
            14.0,
            UI_CONFIG.colors.divider,
        );
        painter.text(
            Pos2::new(split_x, rect.center().y),
            Align2::CENTER_CENTER,
            "⇆",
            FontId::proportional(14.0),
            UI_CONFIG.colors.central_panel,
        );

        match self.images {
            ImageLoad::Pending(_) => ui.label_subdued(UI_TEXT.image_loading),
            ImageLoad::Failed => ui.label_subdued(UI_TEXT.image_unavailable),
            _ => {}
        }

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.pill(UI_TEXT.label_before, UI_CONFIG.colors.pill_neutral);
            ui.add(Slider::new(&mut self.percent, 0.0..=100.0).show_value(false));
            ui.pill(UI_TEXT.label_after, UI_CONFIG.colors.accent);
        });
    }
}

/// Coating layer toggles with a live preview of the resulting stack.
#[derive(Default)]
pub struct CoatingState {
    stack: CoatingStack,
}

impl CoatingState {
    fn render(&mut self, ui: &mut Ui, customer_mode: bool) {
        let width = ui.available_width().min(UI_CONFIG.max_content_width);

        Frame::new()
            .fill(UI_CONFIG.colors.card)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(12))
            .show(ui, |ui| {
                ui.set_width(width);
                ui.label_subheader(UI_TEXT.coating_stack);
                ui.label_subdued(self.stack.summary(customer_mode));
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for label in self.stack.enabled_labels() {
                        ui.pill(customer_text(label, customer_mode), UI_CONFIG.colors.accent);
                    }
                });
            });

        ui.add_space(10.0);
        for (label, enabled) in self.stack.layers_mut() {
            ui.horizontal(|ui| {
                ui.add(toggle(enabled));
                ui.label(customer_text(label, customer_mode).as_ref());
            });
            ui.add_space(4.0);
        }
    }
}

/// Photochromic tint preview driven by a UV intensity slider.
pub struct PhotochromicState {
    uv_level: u8,
}

impl Default for PhotochromicState {
    fn default() -> Self {
        Self {
            uv_level: WIDGETS.tint.initial_level,
        }
    }
}

impl PhotochromicState {
    fn render(&mut self, ui: &mut Ui) {
        let width = ui.available_width().min(UI_CONFIG.max_content_width);
        let size = Vec2::new(width, UI_CONFIG.demo_stage_height);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, CornerRadius::same(8), UI_CONFIG.colors.stage_sky);

        let ground = Rect::from_min_max(
            Pos2::new(rect.left(), rect.bottom() - rect.height() * 0.3),
            rect.max,
        );
        painter.rect_filled(ground, CornerRadius::ZERO, UI_CONFIG.colors.stage_ground);
        painter.circle_filled(
            Pos2::new(rect.right() - 48.0, rect.top() + 44.0),
            22.0,
            UI_CONFIG.colors.stage_sun,
        );

        // The lens darkens with UV
        let alpha = (tint_opacity(self.uv_level) * 255.0) as u8;
        let tint = UI_CONFIG.colors.tint_overlay;
        painter.rect_filled(
            rect,
            CornerRadius::same(8),
            Color32::from_rgba_unmultiplied(tint.r(), tint.g(), tint.b(), alpha),
        );

        painter.text(
            Pos2::new(rect.left() + 12.0, rect.top() + 10.0),
            Align2::LEFT_TOP,
            UI_TEXT.photochromic_stage,
            FontId::proportional(14.0),
            Color32::WHITE,
        );
        painter.text(
            Pos2::new(rect.right() - 12.0, rect.top() + 10.0),
            Align2::RIGHT_TOP,
            format!("UV {}%", self.uv_level),
            FontId::monospace(14.0),
            Color32::WHITE,
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.pill(UI_TEXT.label_indoor, UI_CONFIG.colors.pill_neutral);
            ui.add(Slider::new(&mut self.uv_level, 0..=100).show_value(false));
            ui.pill(UI_TEXT.label_outdoor, UI_CONFIG.colors.pill_warn);
        });
    }
}

/// Edge thickness estimator: prescription power plus material index in, a
/// relative thickness bar out.
pub struct ThicknessState {
    power_text: String,
    material: MaterialIndex,
}

impl Default for ThicknessState {
    fn default() -> Self {
        Self {
            power_text: format!("{:.2}", WIDGETS.thickness.default_power),
            material: MaterialIndex::default(),
        }
    }
}

impl ThicknessState {
    fn step_power(&mut self, delta: f64) {
        let next = parse_power(&self.power_text) + delta;
        self.power_text = format!("{next:.2}");
    }

    fn render(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(UI_TEXT.label_sphere);
            if ui.button("-").clicked() {
                self.step_power(-WIDGETS.thickness.power_step);
            }
            ui.add(TextEdit::singleline(&mut self.power_text).desired_width(64.0));
            if ui.button("+").clicked() {
                self.step_power(WIDGETS.thickness.power_step);
            }

            ui.add_space(12.0);
            ui.label(UI_TEXT.label_material);
            ComboBox::from_id_salt("thickness_material")
                .selected_text(self.material.to_string())
                .show_ui(ui, |ui| {
                    for material in MaterialIndex::iter() {
                        ui.selectable_value(&mut self.material, material, material.to_string());
                    }
                });
        });

        let power = parse_power(&self.power_text);
        let score = thickness_score(power, self.material.value());
        let percent = bar_percent(score);

        ui.add_space(10.0);
        ui.label_subdued(UI_TEXT.thickness_bar);
        let width = ui.available_width().min(UI_CONFIG.max_content_width);
        let (rect, _) = ui.allocate_exact_size(Vec2::new(width, 18.0), Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, CornerRadius::same(9), UI_CONFIG.colors.bar_track);
        let fill = Rect::from_min_size(
            rect.min,
            Vec2::new(rect.width() * percent as f32 / 100.0, rect.height()),
        );
        painter.rect_filled(fill, CornerRadius::same(9), UI_CONFIG.colors.accent);

        ui.add_space(4.0);
        ui.label_subdued(UI_TEXT.thickness_note);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thickness_demo() -> Demo {
        Demo {
            title: "Thin lens estimator".to_string(),
            caption: String::new(),
            kind: DemoKind::ThicknessCalculator,
        }
    }

    fn split_demo() -> Demo {
        Demo {
            title: "Glare".to_string(),
            caption: String::new(),
            kind: DemoKind::SplitCompare {
                before: "assets/polar_before.jpg".to_string(),
                after: "assets/polar_after.jpg".to_string(),
            },
        }
    }

    #[test]
    fn thickness_opens_with_configured_defaults() {
        let state = ThicknessState::default();
        assert_eq!(state.power_text, "-3.00");
        assert_eq!(state.material, MaterialIndex::Index160);
    }

    #[test]
    fn stepping_power_keeps_two_decimals() {
        let mut state = ThicknessState::default();
        state.step_power(WIDGETS.thickness.power_step);
        assert_eq!(state.power_text, "-2.75");
        state.step_power(-WIDGETS.thickness.power_step);
        assert_eq!(state.power_text, "-3.00");
    }

    #[test]
    fn stepping_from_garbage_text_starts_at_zero() {
        let mut state = ThicknessState {
            power_text: "not a number".to_string(),
            material: MaterialIndex::default(),
        };
        state.step_power(WIDGETS.thickness.power_step);
        assert_eq!(state.power_text, "0.25");
    }

    #[test]
    fn photochromic_opens_at_configured_level() {
        let state = PhotochromicState::default();
        assert_eq!(state.uv_level, WIDGETS.tint.initial_level);
    }

    #[test]
    fn coating_demo_opens_with_stock_stack() {
        let state = CoatingState::default();
        assert_eq!(state.stack.enabled_count(), 4);
    }

    #[test]
    fn widgets_map_to_their_demo_kinds() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let assets = DemoAssets {
            client: None,
            runtime: rt.handle(),
        };

        let widget = DemoWidget::for_demo(&thickness_demo(), &assets);
        assert!(matches!(widget, DemoWidget::Thickness(_)));

        let widget = DemoWidget::for_demo(&split_demo(), &assets);
        let DemoWidget::SplitCompare(state) = widget else {
            panic!("expected a split-compare widget");
        };
        assert_eq!(state.percent, WIDGETS.split.initial_percent);
        // No asset client, so nothing to fetch
        assert!(matches!(state.images, ImageLoad::Unavailable));

        let unknown = Demo {
            title: "UV camera".to_string(),
            caption: String::new(),
            kind: DemoKind::Unsupported,
        };
        assert!(matches!(
            DemoWidget::for_demo(&unknown, &assets),
            DemoWidget::Unsupported
        ));
    }

    #[test]
    fn slider_and_drag_drive_the_same_divider() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let assets = DemoAssets {
            client: None,
            runtime: rt.handle(),
        };
        let DemoWidget::SplitCompare(mut state) = DemoWidget::for_demo(&split_demo(), &assets)
        else {
            panic!("expected a split-compare widget");
        };

        // A drag moves the divider through the gesture machine.
        if let Some(pct) = state.drag.handle(DragEvent::Press { x: 150.0 }, 0.0, 200.0) {
            state.percent = pct;
        }
        assert_eq!(state.percent, 75.0);

        // The slider edits the same field directly.
        state.percent = 30.0;

        // The next drag picks up from wherever the slider left it and
        // still pins to the pane edge.
        if let Some(pct) = state.drag.handle(DragEvent::Move { x: 500.0 }, 0.0, 200.0) {
            state.percent = pct;
        }
        assert_eq!(state.percent, 100.0);
    }
}
