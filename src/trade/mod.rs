mod intent;

pub use intent::{ActivationOutcome, ListingAction, TradeIntent};
