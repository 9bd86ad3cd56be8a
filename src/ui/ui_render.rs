use eframe::egui::{
    Align, CentralPanel, Context, Frame, Key, Layout, Margin, RichText, TopBottomPanel, Ui,
};
use std::time::Duration;

use crate::cache::ConnectionStatus;
use crate::domain::find_module;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_catalog::{
    CatalogEvent, CatalogPanel, DemoEvent, DemoPanel, ModuleEvent, ModulePanel, Panel,
};
use crate::ui::ui_widgets::toggle;

use super::app::{LensGuideApp, Screen};

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

impl LensGuideApp {
    pub(super) fn render_top_panel(&mut self, ctx: &Context) {
        let top_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(10, 6));
        TopBottomPanel::top("top_panel")
            .frame(top_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(UI_TEXT.app_title)
                            .color(UI_CONFIG.colors.heading)
                            .strong(),
                    );

                    // Home only shows once the visitor has left the catalog
                    if self.screen != Screen::Catalog {
                        ui.separator();
                        if ui.button(UI_TEXT.button_home).clicked() {
                            self.go_home();
                        }
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.render_connection_pill(ui);
                        ui.separator();

                        let response = ui.add(toggle(&mut self.customer_mode));
                        ui.label_subdued(UI_TEXT.customer_mode);
                        if response.changed() {
                            #[cfg(debug_assertions)]
                            if DEBUG_FLAGS.print_ui_interactions {
                                log::info!(
                                    "Customer mode {}",
                                    if self.customer_mode { "on" } else { "off" }
                                );
                            }
                        }
                    });
                });
            });
    }

    // Offline is the state the kiosk is built for, so it gets the green pill;
    // online means we are still leaning on the network.
    fn render_connection_pill(&self, ui: &mut Ui) {
        let (text, fill) = match self.connection_status() {
            ConnectionStatus::Online => (UI_TEXT.status_online, UI_CONFIG.colors.pill_warn),
            ConnectionStatus::Offline => (UI_TEXT.status_offline, UI_CONFIG.colors.pill_good),
        };
        ui.pill(text, fill);
    }

    pub(super) fn render_status_panel(&mut self, ctx: &Context) {
        let status_frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::symmetric(8, 4));
        TopBottomPanel::bottom("status_panel")
            .frame(status_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some(signature) = self.catalog_signature() {
                        ui.metric("📚 Catalog", signature, UI_CONFIG.colors.accent);
                        ui.separator();
                        ui.label_subdued(format!("{} modules", self.module_count()));
                        ui.separator();
                    }

                    let (label, color) = match self.connection_status() {
                        ConnectionStatus::Online => {
                            (UI_TEXT.status_online, UI_CONFIG.colors.pill_warn)
                        }
                        ConnectionStatus::Offline => {
                            (UI_TEXT.status_offline, UI_CONFIG.colors.pill_good)
                        }
                    };
                    ui.metric("📡", label, color);
                });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let central_panel_frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::symmetric(16, 12));
        CentralPanel::default()
            .frame(central_panel_frame)
            .show(ctx, |ui| {
                if self.catalog_loading() {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui| {
                        ui.spinner();
                        ui.add_space(8.0);
                        ui.heading(UI_TEXT.loading_heading);
                    });
                    ctx.request_repaint_after(Duration::from_millis(100));
                    return;
                }

                if let Some(error) = self.catalog_error() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.heading(UI_TEXT.catalog_error_heading);
                        ui.label_error(error.to_string());
                    });
                    return;
                }

                match self.screen.clone() {
                    Screen::Catalog => self.render_catalog(ui),
                    Screen::ModuleDetail { module_id } => self.render_module(ui, &module_id),
                    Screen::DemoDetail {
                        module_id,
                        demo_index,
                    } => self.render_demo(ui, &module_id, demo_index),
                }
            });
    }

    fn render_catalog(&mut self, ui: &mut Ui) {
        let mut panel = CatalogPanel {
            modules: &self.catalog,
            query: &mut self.search_query,
            customer_mode: self.customer_mode,
        };
        let events = panel.render(ui);

        for event in events {
            match event {
                CatalogEvent::OpenModule(module_id) => self.open_module(&module_id),
            }
        }
    }

    fn render_module(&mut self, ui: &mut Ui, module_id: &str) {
        let module = match find_module(&self.catalog, module_id) {
            Some(module) => module,
            None => {
                // Stale screen, e.g. the catalog refreshed underneath us
                self.go_home();
                return;
            }
        };

        let mut panel = ModulePanel {
            module,
            customer_mode: self.customer_mode,
        };
        let events = panel.render(ui);

        for event in events {
            match event {
                ModuleEvent::OpenDemo(demo_index) => self.open_demo(module_id, demo_index),
                ModuleEvent::Back => self.go_home(),
            }
        }
    }

    fn render_demo(&mut self, ui: &mut Ui, module_id: &str, demo_index: usize) {
        let demo = match find_module(&self.catalog, module_id)
            .and_then(|module| module.demos.get(demo_index))
        {
            Some(demo) => demo,
            None => {
                self.go_home();
                return;
            }
        };
        let Some(widget) = self.active_demo.as_mut() else {
            // A demo screen always carries a widget; recover if it doesn't
            self.go_home();
            return;
        };

        let mut panel = DemoPanel {
            demo,
            widget,
            customer_mode: self.customer_mode,
        };
        let events = panel.render(ui);

        for event in events {
            match event {
                DemoEvent::Back => self.back(),
            }
        }
    }

    pub(super) fn handle_global_shortcuts(&mut self, ctx: &Context) {
        if ctx.input(|i| i.key_pressed(Key::Escape)) {
            self.back();
        }
    }
}
