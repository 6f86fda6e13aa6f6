#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod catalog;
pub mod config;
pub mod trade;
pub mod ui;
pub mod utils;
pub mod wallet;

// Re-export commonly used types outside of crate
pub use app::App;
pub use catalog::{Listing, ListingCatalog};
pub use ui::nav::{NavController, Route};
pub use wallet::{WalletConnectionState, WalletSession};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Make the simulated wallet user reject the connection request
    #[arg(long, default_value_t = false)]
    pub reject_wallet: bool,

    /// Chain the wallet reports once connected (by name, e.g. "sepolia")
    #[arg(long, default_value = "Ethereum")]
    pub chain: String,
}

#[cfg(target_arch = "wasm32")]
impl Default for Cli {
    fn default() -> Self {
        Self {
            reject_wallet: false,
            chain: "Ethereum".to_string(),
        }
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
