/// Tuning for the mock wallet provider (the stand-in for a real
/// browser-extension / WalletConnect integration).
pub struct MockWalletConfig {
    /// Address reported once the simulated user approves the connection.
    pub demo_address: &'static str,
    /// Chain reported when the CLI doesn't override it.
    pub default_chain_id: u64,
    /// Simulated time the user spends in the approval dialog.
    pub approve_latency_ms: u64,
    /// Rejections tend to be quicker - there's a dedicated "cancel" button.
    pub reject_latency_ms: u64,
    /// Reason string a rejection surfaces as, mirroring EIP-1193 wording.
    pub rejection_reason: &'static str,
}

pub const WALLET: MockWalletConfig = MockWalletConfig {
    demo_address: "0x7d39C75Fb2Fc8e1Cb5a9B1f6F6B3e8d41a02c4E9",
    default_chain_id: 1,
    approve_latency_ms: 1200,
    reject_latency_ms: 900,
    rejection_reason: "user rejected",
};
