use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::NotFoundState};

impl PhaseView for NotFoundState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_not_found_state(ctx);
        AppState::NotFound(NotFoundState)
    }
}
