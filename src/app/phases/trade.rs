use eframe::egui::Context;

use crate::app::{App, phases::phase_view::PhaseView, state::{AppState, TradeState}};

impl PhaseView for TradeState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_trading_state(ctx, self)
    }
}
