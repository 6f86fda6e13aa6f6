use crate::config::chain_name;
use crate::wallet::provider::{WalletEvent, WalletProvider};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Connection status of the user's wallet for this browser/app session.
/// Owned exclusively by the provider integration; everything else in the
/// crate only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected {
        address: String,
        chain_id: u64,
    },
    Error(String),
}

impl WalletConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected { .. })
    }

    /// Short status line for the navbar wallet control. Errors are shown
    /// as-is; we never reword what the provider reported.
    pub fn status_label(&self) -> String {
        match self {
            Self::Disconnected => "Connect Wallet".to_string(),
            Self::Connecting => "Connecting...".to_string(),
            Self::Connected { address, chain_id } => {
                format!("{} | {}", truncate_address(address), chain_name(*chain_id))
            }
            Self::Error(reason) => format!("Connection failed: {reason}"),
        }
    }
}

/// `0x7d39...c4E9` display form for a full hex address.
pub fn truncate_address(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

/// Handle returned by `subscribe`; pass it back to `unsubscribe` to release
/// the listener. Holding it grants nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

type Callback = Box<dyn FnMut(&WalletConnectionState)>;

/// The single owned holder of wallet state, with a publish/subscribe
/// surface. Components keep a `SubscriptionId`, never a copy of the state,
/// so there is nothing to go stale.
pub struct WalletSession {
    state: WalletConnectionState,
    provider: Box<dyn WalletProvider>,
    subscribers: Vec<(SubscriptionId, Callback)>,
    next_id: u64,
}

impl WalletSession {
    pub fn new(provider: Box<dyn WalletProvider>) -> Self {
        Self {
            state: WalletConnectionState::Disconnected,
            provider,
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    /// Cheap and idempotent - called at UI re-render rate.
    pub fn state(&self) -> &WalletConnectionState {
        &self.state
    }

    /// Register a listener for every state transition. Release the returned
    /// handle with `unsubscribe` when the owner goes away.
    pub fn subscribe(
        &mut self,
        callback: impl FnMut(&WalletConnectionState) + 'static,
    ) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// After this returns, the callback never runs again - even if the
    /// underlying state keeps changing.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscribers.retain(|(sid, _)| *sid != id);
    }

    /// Kick off provider negotiation. Non-blocking: the eventual state is
    /// observed through `pump_events`, never a wait here. Always permitted,
    /// including after an `Error` - retry is user-initiated, never automatic.
    pub fn request_connect(&mut self) {
        #[cfg(debug_assertions)]
        if DF.log_wallet {
            log::info!("wallet: connect requested (current state {:?})", self.state);
        }
        self.provider.request_connect();
    }

    pub fn request_disconnect(&mut self) {
        self.provider.request_disconnect();
    }

    /// Drain provider events and apply them in arrival order. Call once per
    /// frame. Subscribers are notified after each transition, before the
    /// next event is applied, so listeners observe the provider's ordering;
    /// once drained the session holds the latest state.
    pub fn pump_events(&mut self) {
        for event in self.provider.poll() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: WalletEvent) {
        let next = match event {
            WalletEvent::Negotiating => WalletConnectionState::Connecting,
            WalletEvent::Approved { address, chain_id } => {
                WalletConnectionState::Connected { address, chain_id }
            }
            WalletEvent::Rejected(reason) => WalletConnectionState::Error(reason),
            WalletEvent::Disconnected => WalletConnectionState::Disconnected,
        };

        // A repeated identical state is not a transition; nothing to tell
        // anyone.
        if next == self.state {
            return;
        }

        #[cfg(debug_assertions)]
        if DF.log_wallet {
            log::info!("wallet: {:?} -> {:?}", self.state, next);
        }

        self.state = next;
        for (_, callback) in &mut self.subscribers {
            callback(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::wallet::provider::ScriptedProvider;

    fn approved(chain_id: u64) -> WalletEvent {
        WalletEvent::Approved {
            address: "0xAbCdEf0123456789aBcDeF0123456789abcdef01".to_string(),
            chain_id,
        }
    }

    fn recording_session(
        batches: Vec<Vec<WalletEvent>>,
    ) -> (WalletSession, SubscriptionId, Rc<RefCell<Vec<WalletConnectionState>>>) {
        let mut session = WalletSession::new(Box::new(ScriptedProvider::new(batches)));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let id = session.subscribe(move |state| sink.borrow_mut().push(state.clone()));
        (session, id, seen)
    }

    #[test]
    fn transitions_are_delivered_in_event_order() {
        let (mut session, _id, seen) =
            recording_session(vec![vec![WalletEvent::Negotiating, approved(1)]]);
        session.pump_events();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], WalletConnectionState::Connecting);
        assert!(seen[1].is_connected());
        // Latest state wins once the batch is drained.
        assert!(session.state().is_connected());
    }

    #[test]
    fn unsubscribed_listener_is_never_invoked_again() {
        let (mut session, id, seen) = recording_session(vec![
            vec![WalletEvent::Negotiating],
            vec![approved(1), WalletEvent::Disconnected],
        ]);
        session.pump_events();
        assert_eq!(seen.borrow().len(), 1);

        session.unsubscribe(id);
        session.pump_events();
        // Two more transitions happened; the released listener saw neither.
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(*session.state(), WalletConnectionState::Disconnected);
    }

    #[test]
    fn rejection_surfaces_verbatim_and_retry_stays_permitted() {
        let provider = ScriptedProvider::new(vec![vec![
            WalletEvent::Negotiating,
            WalletEvent::Rejected("user rejected".to_string()),
        ]]);
        let connects = Rc::clone(&provider.connect_calls);
        let mut session = WalletSession::new(Box::new(provider));

        session.request_connect();
        session.pump_events();
        assert_eq!(
            *session.state(),
            WalletConnectionState::Error("user rejected".to_string())
        );
        assert_eq!(
            session.state().status_label(),
            "Connection failed: user rejected"
        );

        // No lockout: a later connect request still reaches the provider.
        session.request_connect();
        assert_eq!(connects.get(), 2);
    }

    #[test]
    fn duplicate_states_are_not_rebroadcast() {
        let (mut session, _id, seen) = recording_session(vec![
            vec![WalletEvent::Negotiating],
            vec![WalletEvent::Negotiating],
        ]);
        session.pump_events();
        session.pump_events();
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn multiple_subscribers_each_see_every_transition() {
        let mut session = WalletSession::new(Box::new(ScriptedProvider::new(vec![vec![
            WalletEvent::Negotiating,
            approved(137),
        ]])));
        let a = Rc::new(RefCell::new(0usize));
        let b = Rc::new(RefCell::new(0usize));
        let (ca, cb) = (Rc::clone(&a), Rc::clone(&b));
        session.subscribe(move |_| *ca.borrow_mut() += 1);
        session.subscribe(move |_| *cb.borrow_mut() += 1);
        session.pump_events();
        assert_eq!(*a.borrow(), 2);
        assert_eq!(*b.borrow(), 2);
    }

    #[test]
    fn address_truncation_keeps_both_ends() {
        assert_eq!(
            truncate_address("0x7d39C75Fb2Fc8e1Cb5a9B1f6F6B3e8d41a02c4E9"),
            "0x7d39...c4E9"
        );
        assert_eq!(truncate_address("0xshort"), "0xshort");
    }
}
