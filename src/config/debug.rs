//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log wallet session transitions (connect requests, provider events).
    pub log_wallet: bool,

    /// Log every router dispatch with the raw path and resolved route.
    pub log_navigation: bool,

    /// Log order-sizer selections and the computed sized quantity.
    pub log_selection: bool,

    /// Log pending trade intents (buy clicked while disconnected).
    pub log_intents: bool,
}

pub const DF: LogFlags = LogFlags {
    log_wallet: true,
    log_navigation: true,

    log_selection: false,
    log_intents: false,
};
