use eframe::egui::{CentralPanel, Context, Grid, RichText, ScrollArea, Ui, Vec2};

use crate::app::App;
use crate::catalog::{FEATURES, PLATFORM_FEATURES};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, platform_icon_glyph, section_heading};

impl App {
    pub(crate) fn tick_home_state(&mut self, ctx: &Context) {
        let mut explore = false;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    explore = render_hero(ui);
                    ui.add_space(24.0);
                    render_featured(ui);
                    ui.add_space(24.0);
                    render_platform_features(ui);
                });
            });

        if explore {
            self.navigate_from_chrome("/market-place");
        }
    }
}

fn render_hero(ui: &mut Ui) -> bool {
    let mut explore = false;
    ui.add_space(12.0);
    for line in UI_TEXT.hero_title.lines() {
        ui.heading(
            RichText::new(line)
                .size(30.0)
                .strong()
                .color(UI_CONFIG.colors.brand),
        );
    }
    ui.add_space(8.0);
    ui.label(RichText::new(UI_TEXT.hero_body).color(UI_CONFIG.colors.label));
    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.set_max_width(180.0);
        if ui.cta_button(UI_TEXT.btn_explore, UI_CONFIG.colors.brand) {
            explore = true;
        }
    });
    explore
}

fn render_featured(ui: &mut Ui) {
    ui.label(section_heading(UI_TEXT.section_featured));
    ui.add_space(8.0);
    Grid::new("featured_grid")
        .num_columns(FEATURES.len())
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            for feature in FEATURES {
                ui.vertical(|ui| {
                    ui.set_width(160.0);
                    ui.listing_artwork(feature.image, Vec2::new(160.0, 90.0));
                    ui.label(RichText::new(feature.title).strong());
                    ui.label_subdued(feature.desc);
                });
            }
            ui.end_row();
        });
}

fn render_platform_features(ui: &mut Ui) {
    ui.label(section_heading(UI_TEXT.section_platform));
    ui.add_space(8.0);
    Grid::new("platform_grid")
        .num_columns(PLATFORM_FEATURES.len())
        .spacing([16.0, 8.0])
        .show(ui, |ui| {
            for feature in PLATFORM_FEATURES {
                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.set_width(170.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(platform_icon_glyph(feature.icon)).size(22.0));
                        ui.label(RichText::new(feature.title).strong());
                        ui.label_subdued(feature.desc);
                    });
                });
            }
            ui.end_row();
        });
}
