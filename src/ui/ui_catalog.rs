//! Catalog browsing panels: the searchable module grid, a module's demo
//! list, and the demo screen chrome around the active widget.
//!
//! Panels borrow the app's state for one frame and report what the visitor
//! clicked as events; the app applies navigation afterwards.

use eframe::egui::{
    Align, CornerRadius, CursorIcon, Frame, Layout, Margin, RichText, ScrollArea, Sense, TextEdit,
    Ui,
};

use crate::domain::{Demo, LensModule, customer_text, filter_modules};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_widgets::DemoWidget;
use crate::ui::utils::{section_heading, spaced_separator};

/// The panel abstraction: render a frame's worth of UI, report what happened.
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

pub enum CatalogEvent {
    OpenModule(String),
}

/// Home screen: search box plus a wrapping grid of module cards.
pub struct CatalogPanel<'a> {
    pub modules: &'a [LensModule],
    pub query: &'a mut String,
    pub customer_mode: bool,
}

impl CatalogPanel<'_> {
    fn render_module_card(&self, ui: &mut Ui, module: &LensModule) -> Option<CatalogEvent> {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.card)
            .corner_radius(CornerRadius::same(10))
            .inner_margin(Margin::same(12));

        let response = frame
            .show(ui, |ui| {
                ui.set_width(UI_CONFIG.card_min_width);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(module.display_emoji()).size(28.0));
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.pill(module.demo_count_label(), UI_CONFIG.colors.pill_neutral);
                        });
                    });
                    ui.label(RichText::new(&module.title).strong());
                    if !module.subtitle.is_empty() {
                        ui.label_subdued(customer_text(&module.subtitle, self.customer_mode));
                    }
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        ui.pill(UI_TEXT.badge_offline, UI_CONFIG.colors.pill_good);
                        ui.pill(UI_TEXT.badge_fast, UI_CONFIG.colors.pill_neutral);
                    });
                });
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        response
            .clicked()
            .then(|| CatalogEvent::OpenModule(module.id.clone()))
    }
}

impl Panel for CatalogPanel<'_> {
    type Event = CatalogEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        section_heading(ui, UI_TEXT.catalog_heading);
        ui.add(
            TextEdit::singleline(self.query)
                .hint_text(UI_TEXT.search_hint)
                .desired_width(240.0),
        );
        ui.add_space(10.0);

        let visible = filter_modules(self.modules, self.query);
        if visible.is_empty() {
            ui.label_subdued(UI_TEXT.empty_results);
            return events;
        }

        ScrollArea::vertical().id_salt("catalog_grid").show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                for module in visible {
                    if let Some(event) = self.render_module_card(ui, module) {
                        events.push(event);
                    }
                }
            });
        });

        events
    }
}

pub enum ModuleEvent {
    OpenDemo(usize),
    Back,
}

/// Module screen: header plus one clickable row per demo.
pub struct ModulePanel<'a> {
    pub module: &'a LensModule,
    pub customer_mode: bool,
}

impl ModulePanel<'_> {
    fn render_demo_row(&self, ui: &mut Ui, index: usize, demo: &Demo) -> Option<ModuleEvent> {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.card)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::symmetric(12, 8));

        let response = frame
            .show(ui, |ui| {
                ui.set_width(ui.available_width().min(UI_CONFIG.max_content_width));
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&demo.title).strong());
                        if !demo.caption.is_empty() {
                            ui.label_subdued(customer_text(&demo.caption, self.customer_mode));
                        }
                    });
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label_subdued("▸");
                    });
                });
            })
            .response
            .interact(Sense::click())
            .on_hover_cursor(CursorIcon::PointingHand);

        ui.add_space(6.0);
        response.clicked().then(|| ModuleEvent::OpenDemo(index))
    }
}

impl Panel for ModulePanel<'_> {
    type Event = ModuleEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if ui.button(UI_TEXT.button_all_modules).clicked() {
            events.push(ModuleEvent::Back);
        }
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if !self.module.emoji.is_empty() {
                ui.label(RichText::new(&self.module.emoji).size(32.0));
            }
            ui.vertical(|ui| {
                ui.label_header(&self.module.title);
                if !self.module.subtitle.is_empty() {
                    ui.label_subheader(customer_text(&self.module.subtitle, self.customer_mode));
                }
            });
        });

        if !self.module.description.is_empty() {
            ui.add_space(6.0);
            ui.label(
                customer_text(&self.module.description, self.customer_mode).as_ref(),
            );
        }

        spaced_separator(ui);
        if self.module.demos.is_empty() {
            ui.label_subdued(UI_TEXT.empty_module);
            return events;
        }

        ScrollArea::vertical().id_salt("demo_list").show(ui, |ui| {
            for (index, demo) in self.module.demos.iter().enumerate() {
                if let Some(event) = self.render_demo_row(ui, index, demo) {
                    events.push(event);
                }
            }
        });

        events
    }
}

pub enum DemoEvent {
    Back,
}

/// Demo screen: back button, title, caption, then the live widget.
pub struct DemoPanel<'a> {
    pub demo: &'a Demo,
    pub widget: &'a mut DemoWidget,
    pub customer_mode: bool,
}

impl Panel for DemoPanel<'_> {
    type Event = DemoEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        if ui.button(UI_TEXT.button_back).clicked() {
            events.push(DemoEvent::Back);
        }
        ui.add_space(10.0);

        ui.label_header(&self.demo.title);
        if !self.demo.caption.is_empty() {
            ui.label_subdued(customer_text(&self.demo.caption, self.customer_mode));
        }

        ui.add_space(10.0);
        self.widget.render(ui, self.customer_mode);

        events
    }
}
