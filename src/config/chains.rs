/// One network the wallet provider can report as active.
pub struct ChainConfig {
    pub id: u64,
    pub name: &'static str,
    pub currency: &'static str,
}

/// Networks we accept from the provider. The last entry is the local devnet
/// used during contract development (hardhat/anvil default chain id).
pub const CHAINS: &[ChainConfig] = &[
    ChainConfig { id: 1, name: "Ethereum", currency: "ETH" },
    ChainConfig { id: 137, name: "Polygon", currency: "POL" },
    ChainConfig { id: 10, name: "OP Mainnet", currency: "ETH" },
    ChainConfig { id: 42161, name: "Arbitrum One", currency: "ETH" },
    ChainConfig { id: 8453, name: "Base", currency: "ETH" },
    ChainConfig { id: 11155111, name: "Sepolia", currency: "ETH" },
    ChainConfig { id: 31337, name: "Localhost", currency: "ETH" },
];

pub fn chain_by_id(id: u64) -> Option<&'static ChainConfig> {
    CHAINS.iter().find(|c| c.id == id)
}

pub fn chain_by_name(name: &str) -> Option<&'static ChainConfig> {
    CHAINS.iter().find(|c| c.name.eq_ignore_ascii_case(name.trim()))
}

/// Display name for a chain id, tolerant of ids we don't know.
pub fn chain_name(id: u64) -> &'static str {
    chain_by_id(id).map(|c| c.name).unwrap_or("Unknown chain")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_ids_are_unique() {
        for (i, a) in CHAINS.iter().enumerate() {
            for b in &CHAINS[i + 1..] {
                assert_ne!(a.id, b.id, "duplicate chain id {}", a.id);
            }
        }
    }

    #[test]
    fn lookup_by_name_is_case_insensitive() {
        assert_eq!(chain_by_name("sepolia").map(|c| c.id), Some(11155111));
        assert_eq!(chain_by_name("SEPOLIA").map(|c| c.id), Some(11155111));
        assert!(chain_by_name("dogechain").is_none());
    }

    #[test]
    fn unknown_id_gets_a_readable_name() {
        assert_eq!(chain_name(31337), "Localhost");
        assert_eq!(chain_name(999_999), "Unknown chain");
    }
}
