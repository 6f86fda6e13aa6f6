use eframe::egui::{CentralPanel, Context, RichText, Vec2};

use crate::app::{App, AppState, TradeState};
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt, section_heading};

#[cfg(debug_assertions)]
use crate::config::DF;

impl App {
    /// TRADE VIEW. The sizer's selection lands synchronously, so the sized
    /// quantity readout updates in the same frame as the click.
    pub(crate) fn tick_trading_state(&mut self, ctx: &Context, state: &mut TradeState) -> AppState {
        // The route sync only mounts this screen for catalog-backed ids.
        let Some(listing) = self.catalog.get(state.listing_id) else {
            log::warn!("trade view mounted for unknown listing {}", state.listing_id);
            return AppState::NotFound(Default::default());
        };

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.label(section_heading(listing.location));
                ui.add_space(8.0);

                ui.horizontal_top(|ui| {
                    ui.listing_artwork(listing.image, Vec2::new(260.0, 150.0));
                    ui.add_space(12.0);
                    ui.vertical(|ui| {
                        ui.metric(UI_TEXT.label_seller, listing.seller, UI_CONFIG.colors.label);
                        ui.metric(
                            UI_TEXT.label_quantity,
                            &format!("{} {}", listing.quantity, UI_TEXT.label_barrels),
                            UI_CONFIG.colors.label,
                        );
                    });
                });

                ui.add_space(16.0);
                ui.label(RichText::new(UI_TEXT.trade_size_heading).strong());

                let mut chosen = None;
                state.sizer.show(ui, |percent| chosen = Some(percent));
                if let Some(percent) = chosen {
                    state.sized_barrels = listing
                        .quantity_barrels()
                        .ok()
                        .map(|barrels| barrels * f64::from(percent) / 100.0);

                    #[cfg(debug_assertions)]
                    if DF.log_selection {
                        log::info!(
                            "sizer: listing {} at {}% -> {:?} barrels",
                            listing.id,
                            percent,
                            state.sized_barrels
                        );
                    }
                }

                ui.add_space(8.0);
                match (state.sizer.selected_percent(), state.sized_barrels) {
                    (Some(percent), Some(barrels)) => {
                        ui.label(
                            RichText::new(format!(
                                "{}: {barrels:.0} {} ({percent}% of {})",
                                UI_TEXT.trade_sized_prefix, UI_TEXT.label_barrels, listing.quantity
                            ))
                            .color(UI_CONFIG.colors.accent),
                        );
                    }
                    _ => {
                        ui.label_subdued(UI_TEXT.trade_unsized_hint);
                    }
                }

                if !self.wallet.state().is_connected() {
                    // The session dropped mid-view; the downstream trade flow
                    // would be blocked, say so where the user is looking.
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(UI_TEXT.trade_connect_hint).color(UI_CONFIG.colors.error),
                    );
                }
            });

        AppState::Trading(state.clone())
    }
}
