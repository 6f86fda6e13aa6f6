// src/app/state.rs

use serde::{Deserialize, Serialize};

use crate::ui::OrderSizer;
use crate::ui::nav::Route;

/// One variant per mounted screen. Screen-local widget state lives inside
/// the variant, so leaving a screen drops it - remounting the trade view
/// always starts with a fresh, unselected sizer.
pub(crate) enum AppState {
    Home(HomeState),
    Marketplace(MarketState),
    Trading(TradeState),
    NotFound(NotFoundState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home(HomeState)
    }
}

#[derive(Default, Clone)]
pub(crate) struct HomeState;

#[derive(Default, Clone)]
pub(crate) struct MarketState;

#[derive(Default, Clone)]
pub(crate) struct NotFoundState;

#[derive(Clone)]
pub(crate) struct TradeState {
    pub(crate) listing_id: u32,
    pub(crate) sizer: OrderSizer,
    /// Computed from the latest selection; recomputed on every select.
    pub(crate) sized_barrels: Option<f64>,
}

impl TradeState {
    pub(crate) fn new(listing_id: u32) -> Self {
        Self {
            listing_id,
            sizer: OrderSizer::default(),
            sized_barrels: None,
        }
    }
}

/// What we remember about the screen between sessions. Trade views are
/// wallet-gated, so they restore to the marketplace instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) enum PersistedRoute {
    #[default]
    Home,
    Marketplace,
}

impl PersistedRoute {
    pub(crate) fn route(self) -> Route {
        match self {
            PersistedRoute::Home => Route::Home,
            PersistedRoute::Marketplace => Route::Marketplace,
        }
    }

    pub(crate) fn from_route(route: Route) -> Self {
        match route {
            Route::Home | Route::NotFound => PersistedRoute::Home,
            Route::Marketplace | Route::Trade(_) => PersistedRoute::Marketplace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trade_routes_restore_to_the_marketplace() {
        assert_eq!(
            PersistedRoute::from_route(Route::Trade(7)),
            PersistedRoute::Marketplace
        );
        assert_eq!(PersistedRoute::from_route(Route::NotFound), PersistedRoute::Home);
    }
}
