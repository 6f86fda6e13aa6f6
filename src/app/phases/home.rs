// app/phases/home.rs

use eframe::egui::Context;

use crate::app::{App, phases::PhaseView, state::AppState, state::HomeState};

impl PhaseView for HomeState {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> AppState {
        app.tick_home_state(ctx);
        AppState::Home(HomeState)
    }
}
