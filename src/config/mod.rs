//! Configuration module for the tardfi client.

// Can all be private now because we have a public re-export.
mod chains;
mod debug;
mod wallet;

// Re-export commonly used items
pub use chains::{CHAINS, ChainConfig, chain_by_id, chain_by_name, chain_name};
pub use debug::DF;
pub use wallet::WALLET;
