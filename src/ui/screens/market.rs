use eframe::egui::{CentralPanel, Context, RichText, ScrollArea, Ui, Vec2};

use crate::app::App;
use crate::catalog::Listing;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, section_heading};

const CARD_WIDTH: f32 = 200.0;

impl App {
    pub(crate) fn tick_market_state(&mut self, ctx: &Context) {
        // Clicks are collected during the paint pass and acted on after it,
        // so the guarded activation runs once, outside any UI closure.
        let mut buy_clicked: Option<u32> = None;
        let listings = self.catalog.list();

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.label(section_heading(UI_TEXT.nav_marketplace));
                if let Some(intent) = self.pending_intent {
                    ui.label(
                        RichText::new(format!(
                            "{} (listing #{})",
                            UI_TEXT.trade_connect_hint, intent.listing_id
                        ))
                        .color(UI_CONFIG.colors.accent),
                    );
                }
                ui.add_space(8.0);

                ScrollArea::vertical().show(ui, |ui| {
                    let columns =
                        (ui.available_width() / (CARD_WIDTH + 16.0)).floor().max(1.0) as usize;
                    for row in listings.chunks(columns) {
                        ui.horizontal_top(|ui| {
                            for listing in row {
                                if render_listing_card(ui, listing) {
                                    buy_clicked = Some(listing.id);
                                }
                            }
                        });
                        ui.add_space(12.0);
                    }
                });
            });

        if let Some(listing_id) = buy_clicked {
            self.handle_buy(listing_id);
        }
    }
}

/// One lot card; returns true if "Buy now" was clicked this frame.
fn render_listing_card(ui: &mut Ui, listing: &Listing) -> bool {
    let mut clicked = false;
    UI_CONFIG.card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical(|ui| {
            ui.listing_artwork(listing.image, Vec2::new(CARD_WIDTH, 100.0));
            ui.label(RichText::new(listing.location).strong());
            ui.metric(UI_TEXT.label_seller, listing.seller, UI_CONFIG.colors.label);
            ui.metric(
                UI_TEXT.label_quantity,
                &format!("{} {}", listing.quantity, UI_TEXT.label_barrels),
                UI_CONFIG.colors.label,
            );
            ui.add_space(6.0);
            if ui.cta_button(UI_TEXT.btn_buy_now, UI_CONFIG.colors.buy) {
                clicked = true;
            }
        });
    });
    clicked
}
