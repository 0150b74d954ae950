//! Operational tooling for the Resolver swap-routing contract: deploy it,
//! verify it on a block explorer, quote its best-path lookup and submit
//! swaps, all over a JSON-RPC connection. Each command is a one-shot
//! procedure; all routing and swap math lives inside the contract.
pub mod commands;
pub mod config;
pub mod entity;
pub mod evm;

// Re-export commonly used items
pub use config::Settings;
pub use entity::*;
pub use evm::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
