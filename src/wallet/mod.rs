mod provider;
mod session;

pub use provider::{ConnectOutcome, MockWalletProvider, WalletEvent, WalletProvider};
pub use session::{SubscriptionId, WalletConnectionState, WalletSession, truncate_address};

#[cfg(test)]
pub(crate) use provider::ScriptedProvider;
