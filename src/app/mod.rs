mod phases;
mod root;
mod state;

pub(crate) use phases::PhaseView;
pub(crate) use state::{AppState, HomeState, MarketState, NotFoundState, PersistedRoute, TradeState};

pub use root::App;
