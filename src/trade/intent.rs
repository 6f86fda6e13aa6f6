use crate::ui::nav::{NavController, trade_path};
use crate::wallet::WalletConnectionState;

#[cfg(debug_assertions)]
use crate::config::DF;

/// Transient handoff payload: which listing the user wants to trade. Valid
/// only across the single navigation event that carries it - never stored
/// beyond the prompt-to-connect round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeIntent {
    pub listing_id: u32,
}

/// What `activate` did with the intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Wallet connected: exactly one navigation was dispatched.
    Navigated,
    /// Wallet not connected. No navigation happened; the caller hands the
    /// user to the connect flow and re-activates once the session reports
    /// `Connected`.
    ConnectRequired,
}

/// Per-listing buy/trade trigger: a guarded state transition plus a routing
/// side effect. No network or chain calls happen here.
#[derive(Debug, Clone, Copy)]
pub struct ListingAction {
    listing_id: u32,
}

impl ListingAction {
    /// `listing_id` always originates from an enumerated catalog entry;
    /// membership is the caller's contract, not re-checked here.
    pub fn new(listing_id: u32) -> Self {
        Self { listing_id }
    }

    pub fn intent(&self) -> TradeIntent {
        TradeIntent {
            listing_id: self.listing_id,
        }
    }

    /// Read the wallet state and, only if connected, dispatch a single
    /// `/trade/{id}` navigation. Not connected means no dispatch at all -
    /// prompting the user to connect belongs to the wallet collaborator.
    pub fn activate(
        &self,
        wallet: &WalletConnectionState,
        nav: &mut NavController,
    ) -> ActivationOutcome {
        if wallet.is_connected() {
            nav.navigate(&trade_path(self.listing_id));
            ActivationOutcome::Navigated
        } else {
            #[cfg(debug_assertions)]
            if DF.log_intents {
                log::info!(
                    "intent: listing {} held back, wallet is {:?}",
                    self.listing_id,
                    wallet
                );
            }
            ActivationOutcome::ConnectRequired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ListingCatalog;
    use crate::ui::nav::Route;

    fn connected() -> WalletConnectionState {
        WalletConnectionState::Connected {
            address: "0x7d39C75Fb2Fc8e1Cb5a9B1f6F6B3e8d41a02c4E9".to_string(),
            chain_id: 1,
        }
    }

    #[test]
    fn connected_activation_navigates_exactly_once() {
        let mut nav = NavController::new();
        let outcome = ListingAction::new(7).activate(&connected(), &mut nav);
        assert_eq!(outcome, ActivationOutcome::Navigated);
        assert_eq!(nav.current(), Route::Trade(7));
        assert_eq!(nav.dispatch_count(), 1);
    }

    #[test]
    fn anything_short_of_connected_dispatches_nothing() {
        let states = [
            WalletConnectionState::Disconnected,
            WalletConnectionState::Connecting,
            WalletConnectionState::Error("user rejected".to_string()),
        ];
        for state in states {
            let mut nav = NavController::new();
            let outcome = ListingAction::new(7).activate(&state, &mut nav);
            assert_eq!(outcome, ActivationOutcome::ConnectRequired, "{state:?}");
            assert_eq!(nav.dispatch_count(), 0, "{state:?}");
            assert_eq!(nav.current(), Route::Home, "{state:?}");
        }
    }

    #[test]
    fn brent_crude_lot_lands_on_its_trade_view() {
        // Catalog scenario: listing 7 is the Brent Crude 3000-barrel lot.
        let catalog = ListingCatalog::new();
        let listing = catalog.get(7).expect("listing 7 exists");
        assert_eq!(listing.location, "Brent Crude");

        let mut nav = NavController::new();
        ListingAction::new(listing.id).activate(&connected(), &mut nav);
        assert_eq!(nav.current(), Route::Trade(7));
    }

    #[test]
    fn repeated_activation_is_one_dispatch_each() {
        let mut nav = NavController::new();
        let action = ListingAction::new(3);
        action.activate(&connected(), &mut nav);
        action.activate(&connected(), &mut nav);
        // Each call is its own atomic dispatch - never zero, never two.
        assert_eq!(nav.dispatch_count(), 2);
        assert_eq!(nav.current(), Route::Trade(3));
    }
}
