use {
    eframe::{
        Frame, Storage,
        egui::{Context, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::mpsc::{self, Receiver},
        time::Duration,
    },
};

use crate::{
    Cli,
    app::{AppState, PersistedRoute, PhaseView},
    catalog::ListingCatalog,
    config::{WALLET, chain_by_name},
    trade::{ActivationOutcome, ListingAction, TradeIntent},
    ui::{
        UI_CONFIG,
        nav::{NavController, Route},
    },
    wallet::{
        ConnectOutcome, MockWalletProvider, SubscriptionId, WalletConnectionState, WalletProvider,
        WalletSession,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    persisted_route: PersistedRoute, // persists across sessions.
    #[serde(skip)]
    pub(crate) catalog: ListingCatalog,
    #[serde(skip)]
    pub(crate) wallet: WalletSession,
    #[serde(skip)]
    wallet_rx: Receiver<WalletConnectionState>,
    #[serde(skip)]
    wallet_sub: SubscriptionId,
    #[serde(skip)]
    pub(crate) nav: NavController,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    mounted_route: Route,
    #[serde(skip)]
    pub(crate) pending_intent: Option<TradeIntent>,
}

impl Default for App {
    fn default() -> Self {
        let (wallet, wallet_rx, wallet_sub) =
            wire_wallet(Box::new(MockWalletProvider::default()));
        Self {
            persisted_route: PersistedRoute::Home,
            catalog: ListingCatalog::new(),
            wallet,
            wallet_rx,
            wallet_sub,
            nav: NavController::new(),
            state: AppState::default(),
            mounted_route: Route::Home,
            pending_intent: None,
        }
    }
}

/// Build a session around a provider and bridge its transitions into a
/// channel the UI loop can drain. The subscription is the app's one
/// long-lived listener; it is released again in `on_exit`.
fn wire_wallet(
    provider: Box<dyn WalletProvider>,
) -> (WalletSession, Receiver<WalletConnectionState>, SubscriptionId) {
    let mut session = WalletSession::new(provider);
    let (tx, rx) = mpsc::channel();
    let sub = session.subscribe(move |state| {
        let _ = tx.send(state.clone());
    });
    (session, rx, sub)
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // The CLI decides how the simulated wallet user behaves this run.
        let outcome = if args.reject_wallet {
            ConnectOutcome::Reject
        } else {
            ConnectOutcome::Approve
        };
        let chain_id = match chain_by_name(&args.chain) {
            Some(chain) => chain.id,
            None => {
                log::warn!(
                    "Unknown chain '{}'; falling back to chain id {}",
                    args.chain,
                    WALLET.default_chain_id
                );
                WALLET.default_chain_id
            }
        };
        let (wallet, wallet_rx, wallet_sub) =
            wire_wallet(Box::new(MockWalletProvider::new(outcome, chain_id)));
        app.wallet = wallet;
        app.wallet_rx = wallet_rx;
        app.wallet_sub = wallet_sub;

        app.nav = NavController::starting_at(app.persisted_route.route());
        app.mounted_route = app.nav.current();
        app.state = app.screen_for_route(app.mounted_route);
        app
    }

    /// Navigation triggered from chrome (navbar links, 404 button). Walks
    /// away from any prompt-to-connect handoff that was still pending.
    pub(crate) fn navigate_from_chrome(&mut self, path: &str) {
        self.pending_intent = None;
        self.nav.navigate(path);
    }

    /// "Buy now" on a listing card. Connected wallets go straight to the
    /// trade view; otherwise we park the intent and hand the user to the
    /// connect flow.
    pub(crate) fn handle_buy(&mut self, listing_id: u32) {
        let action = ListingAction::new(listing_id);
        match action.activate(self.wallet.state(), &mut self.nav) {
            ActivationOutcome::Navigated => {
                self.pending_intent = None;
            }
            ActivationOutcome::ConnectRequired => {
                #[cfg(debug_assertions)]
                if DF.log_intents {
                    log::info!("intent: parking listing {} until the wallet connects", listing_id);
                }
                self.pending_intent = Some(action.intent());
                self.wallet.request_connect();
            }
        }
    }

    /// Consume transitions the session forwarded since last frame. When a
    /// `Connected` arrives with an intent parked, the handoff loops back
    /// through the same guarded activation - which re-reads the *current*
    /// state, so a newer event can still hold it back (latest state wins).
    fn drain_wallet_transitions(&mut self) {
        while let Ok(transition) = self.wallet_rx.try_recv() {
            if !transition.is_connected() {
                continue;
            }
            if let Some(intent) = self.pending_intent.take() {
                let outcome =
                    ListingAction::new(intent.listing_id).activate(self.wallet.state(), &mut self.nav);
                if outcome == ActivationOutcome::ConnectRequired {
                    self.pending_intent = Some(intent);
                }
            }
        }
    }

    fn screen_for_route(&self, route: Route) -> AppState {
        match route {
            Route::Home => AppState::Home(Default::default()),
            Route::Marketplace => AppState::Marketplace(Default::default()),
            Route::Trade(id) => match self.catalog.get(id) {
                Some(listing) => AppState::Trading(crate::app::TradeState::new(listing.id)),
                // An id that never came from the catalog is an upstream
                // contract violation; the router's 404 takes it.
                None => AppState::NotFound(Default::default()),
            },
            Route::NotFound => AppState::NotFound(Default::default()),
        }
    }

    /// Remount the screen when the route changed. Dropping the old variant
    /// drops its widget state - a disposed trade screen can never report a
    /// selection again.
    fn sync_screen_with_route(&mut self) {
        let route = self.nav.current();
        if route == self.mounted_route {
            return;
        }
        self.state = self.screen_for_route(route);
        self.mounted_route = route;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.wallet.pump_events();
        self.drain_wallet_transitions();
        self.sync_screen_with_route();

        self.render_navbar(ctx);
        self.render_footer(ctx);

        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Home(mut s) => s.tick(self, ctx),
            AppState::Marketplace(mut s) => s.tick(self, ctx),
            AppState::Trading(mut s) => s.tick(self, ctx),
            AppState::NotFound(mut s) => s.tick(self, ctx),
        };

        // A negotiation is pending off-frame; keep polling for its outcome.
        if matches!(self.wallet.state(), WalletConnectionState::Connecting) {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.persisted_route = PersistedRoute::from_route(self.nav.current());
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Scoped acquisition: release the app's listener so nothing can call
        // back into a torn-down UI.
        self.wallet.unsubscribe(self.wallet_sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{ScriptedProvider, WalletEvent};

    fn approved() -> WalletEvent {
        WalletEvent::Approved {
            address: "0x7d39C75Fb2Fc8e1Cb5a9B1f6F6B3e8d41a02c4E9".to_string(),
            chain_id: 1,
        }
    }

    fn app_with_script(batches: Vec<Vec<WalletEvent>>) -> App {
        let mut app = App::default();
        let (wallet, wallet_rx, wallet_sub) =
            wire_wallet(Box::new(ScriptedProvider::new(batches)));
        app.wallet = wallet;
        app.wallet_rx = wallet_rx;
        app.wallet_sub = wallet_sub;
        app
    }

    #[test]
    fn buy_while_disconnected_parks_the_intent_and_prompts() {
        let mut app = app_with_script(vec![]);
        app.handle_buy(7);
        assert_eq!(app.pending_intent, Some(TradeIntent { listing_id: 7 }));
        assert_eq!(app.nav.dispatch_count(), 0);
        assert_eq!(app.nav.current(), Route::Home);
    }

    #[test]
    fn parked_intent_completes_once_the_wallet_connects() {
        let mut app =
            app_with_script(vec![vec![WalletEvent::Negotiating], vec![approved()]]);
        app.handle_buy(7);

        // Still negotiating: nothing moves.
        app.wallet.pump_events();
        app.drain_wallet_transitions();
        assert!(app.pending_intent.is_some());
        assert_eq!(app.nav.dispatch_count(), 0);

        // Connected: the handoff loops back and navigates exactly once.
        app.wallet.pump_events();
        app.drain_wallet_transitions();
        assert_eq!(app.nav.current(), Route::Trade(7));
        assert_eq!(app.nav.dispatch_count(), 1);
        assert!(app.pending_intent.is_none());
    }

    #[test]
    fn buy_while_connected_navigates_immediately() {
        let mut app = app_with_script(vec![vec![WalletEvent::Negotiating, approved()]]);
        app.wallet.pump_events();
        app.drain_wallet_transitions();

        app.handle_buy(12);
        assert_eq!(app.nav.current(), Route::Trade(12));
        assert_eq!(app.nav.dispatch_count(), 1);
        assert!(app.pending_intent.is_none());
    }

    #[test]
    fn chrome_navigation_abandons_a_parked_intent() {
        let mut app = app_with_script(vec![vec![approved()]]);
        app.handle_buy(7);
        assert!(app.pending_intent.is_some());

        app.navigate_from_chrome("/market-place");
        assert!(app.pending_intent.is_none());

        // The later connect no longer teleports the user anywhere.
        app.wallet.pump_events();
        app.drain_wallet_transitions();
        assert_eq!(app.nav.current(), Route::Marketplace);
    }

    #[test]
    fn unknown_trade_ids_mount_the_not_found_screen() {
        let mut app = app_with_script(vec![]);
        app.nav.navigate("/trade/9999");
        app.sync_screen_with_route();
        assert!(matches!(app.state, AppState::NotFound(_)));

        app.nav.navigate("/trade/7");
        app.sync_screen_with_route();
        assert!(matches!(app.state, AppState::Trading(_)));
    }

    #[test]
    fn remounting_the_trade_screen_resets_the_sizer() {
        let mut app = app_with_script(vec![]);
        app.nav.navigate("/trade/7");
        app.sync_screen_with_route();
        if let AppState::Trading(state) = &mut app.state {
            state.sizer.select(50, |_| {});
        } else {
            panic!("expected trade screen");
        }

        // Leave and come back: the selection is gone.
        app.nav.navigate("/market-place");
        app.sync_screen_with_route();
        app.nav.navigate("/trade/7");
        app.sync_screen_with_route();
        match &app.state {
            AppState::Trading(state) => assert_eq!(state.sizer.selected_percent(), None),
            _ => panic!("expected trade screen after remount"),
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}
