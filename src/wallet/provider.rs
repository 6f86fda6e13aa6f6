use crate::config::WALLET;

#[cfg(not(target_arch = "wasm32"))]
use {poll_promise::Promise, std::thread, std::time::Duration};

#[cfg(target_arch = "wasm32")]
use crate::utils::AppInstant;

/// State transitions emitted by a wallet provider, in occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletEvent {
    /// Negotiation started (approval dialog is up).
    Negotiating,
    /// The user approved the connection.
    Approved { address: String, chain_id: u64 },
    /// The user (or the provider) refused the connection.
    Rejected(String),
    /// The active connection was dropped.
    Disconnected,
}

/// Opaque wallet-provider capability. The session never blocks on it;
/// completion of any request arrives through `poll`, one frame later at the
/// earliest.
pub trait WalletProvider {
    /// Begin async connection negotiation. Must not block. Calling while a
    /// negotiation is already pending is a no-op.
    fn request_connect(&mut self);

    /// Drop the active connection, if any.
    fn request_disconnect(&mut self);

    /// Events that occurred since the last call, in the order they occurred.
    fn poll(&mut self) -> Vec<WalletEvent>;
}

/// How the simulated user answers the approval dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectOutcome {
    #[default]
    Approve,
    Reject,
}

/// Stand-in for a real browser-extension / WalletConnect integration.
///
/// Negotiation latency runs on a background thread via `poll_promise` on
/// native; on WASM we have no threads, so the outcome is released once the
/// configured latency has elapsed on the UI clock.
pub struct MockWalletProvider {
    outcome: ConnectOutcome,
    chain_id: u64,
    queued: Vec<WalletEvent>,
    connected: bool,
    #[cfg(not(target_arch = "wasm32"))]
    pending: Option<Promise<WalletEvent>>,
    #[cfg(target_arch = "wasm32")]
    pending_since: Option<AppInstant>,
}

impl MockWalletProvider {
    pub fn new(outcome: ConnectOutcome, chain_id: u64) -> Self {
        Self {
            outcome,
            chain_id,
            queued: Vec::new(),
            connected: false,
            #[cfg(not(target_arch = "wasm32"))]
            pending: None,
            #[cfg(target_arch = "wasm32")]
            pending_since: None,
        }
    }

    fn busy(&self) -> bool {
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.pending.is_some()
        }
        #[cfg(target_arch = "wasm32")]
        {
            self.pending_since.is_some()
        }
    }

    fn latency_ms(&self) -> u64 {
        match self.outcome {
            ConnectOutcome::Approve => WALLET.approve_latency_ms,
            ConnectOutcome::Reject => WALLET.reject_latency_ms,
        }
    }

    fn outcome_event(&self) -> WalletEvent {
        match self.outcome {
            ConnectOutcome::Approve => WalletEvent::Approved {
                address: WALLET.demo_address.to_string(),
                chain_id: self.chain_id,
            },
            ConnectOutcome::Reject => WalletEvent::Rejected(WALLET.rejection_reason.to_string()),
        }
    }

    fn finish_negotiation(&mut self, event: WalletEvent, out: &mut Vec<WalletEvent>) {
        self.connected = matches!(event, WalletEvent::Approved { .. });
        out.push(event);
    }
}

impl Default for MockWalletProvider {
    fn default() -> Self {
        Self::new(ConnectOutcome::Approve, WALLET.default_chain_id)
    }
}

impl WalletProvider for MockWalletProvider {
    fn request_connect(&mut self) {
        if self.busy() {
            return;
        }
        self.queued.push(WalletEvent::Negotiating);

        #[cfg(not(target_arch = "wasm32"))]
        {
            let latency = Duration::from_millis(self.latency_ms());
            let event = self.outcome_event();
            self.pending = Some(Promise::spawn_thread("wallet-negotiation", move || {
                thread::sleep(latency);
                event
            }));
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.pending_since = Some(AppInstant::now());
        }
    }

    fn request_disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            self.queued.push(WalletEvent::Disconnected);
        }
    }

    fn poll(&mut self) -> Vec<WalletEvent> {
        let mut events = std::mem::take(&mut self.queued);

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(promise) = self.pending.take() {
            match promise.try_take() {
                Ok(event) => self.finish_negotiation(event, &mut events),
                Err(still_pending) => self.pending = Some(still_pending),
            }
        }

        #[cfg(target_arch = "wasm32")]
        if let Some(started) = self.pending_since {
            if started.elapsed_ms() >= self.latency_ms() as u128 {
                self.pending_since = None;
                let event = self.outcome_event();
                self.finish_negotiation(event, &mut events);
            }
        }

        events
    }
}

/// Test double with a pre-scripted event stream: each `poll` releases the
/// next batch. Lets tests drive exact orderings without timing. The call
/// counters are shared so a test can keep observing after boxing.
#[cfg(test)]
pub(crate) struct ScriptedProvider {
    pub script: std::collections::VecDeque<Vec<WalletEvent>>,
    pub connect_calls: std::rc::Rc<std::cell::Cell<usize>>,
    pub disconnect_calls: std::rc::Rc<std::cell::Cell<usize>>,
}

#[cfg(test)]
impl ScriptedProvider {
    pub fn new(batches: Vec<Vec<WalletEvent>>) -> Self {
        Self {
            script: batches.into(),
            connect_calls: Default::default(),
            disconnect_calls: Default::default(),
        }
    }
}

#[cfg(test)]
impl WalletProvider for ScriptedProvider {
    fn request_connect(&mut self) {
        self.connect_calls.set(self.connect_calls.get() + 1);
    }

    fn request_disconnect(&mut self) {
        self.disconnect_calls.set(self.disconnect_calls.get() + 1);
    }

    fn poll(&mut self) -> Vec<WalletEvent> {
        self.script.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_is_non_blocking_and_emits_negotiating_first() {
        let mut provider = MockWalletProvider::new(ConnectOutcome::Approve, 1);
        provider.request_connect();
        // First poll sees only the synchronous part; the outcome is still
        // sleeping on the worker thread.
        let events = provider.poll();
        assert_eq!(events, vec![WalletEvent::Negotiating]);
    }

    #[test]
    fn duplicate_connect_requests_are_ignored_while_pending() {
        let mut provider = MockWalletProvider::new(ConnectOutcome::Approve, 1);
        provider.request_connect();
        provider.request_connect();
        let events = provider.poll();
        assert_eq!(events, vec![WalletEvent::Negotiating]);
    }

    #[test]
    fn disconnect_without_connection_is_silent() {
        let mut provider = MockWalletProvider::default();
        provider.request_disconnect();
        assert!(provider.poll().is_empty());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn approval_eventually_lands_with_the_configured_chain() {
        let mut provider = MockWalletProvider::new(ConnectOutcome::Approve, 11155111);
        provider.request_connect();
        let mut seen = Vec::new();
        let deadline = crate::utils::AppInstant::now();
        while seen.len() < 2 && deadline.elapsed_ms() < 10_000 {
            seen.extend(provider.poll());
            thread::sleep(Duration::from_millis(10));
        }
        assert_eq!(seen.first(), Some(&WalletEvent::Negotiating));
        match seen.get(1) {
            Some(WalletEvent::Approved { address, chain_id }) => {
                assert!(address.starts_with("0x"));
                assert_eq!(*chain_id, 11155111);
            }
            other => panic!("expected approval, got {other:?}"),
        }
    }
}
