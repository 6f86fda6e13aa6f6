use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::MarketState};

impl PhaseView for MarketState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_market_state(ctx);
        AppState::Marketplace(MarketState)
    }
}
