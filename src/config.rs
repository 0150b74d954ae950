use anyhow::{bail, Context, Result};
use std::env;

pub const DEFAULT_ADDRESS_BOOK: &str = "addresses.json";
pub const DEFAULT_ARTIFACT_PATH: &str = "artifacts/contracts/Resolver.sol/Resolver.json";

/// Runtime configuration, read from the process environment once at startup
/// and passed explicitly into the workflow.
#[derive(Debug, Clone)]
pub struct Settings {
    /// JSON-RPC endpoint for all chain reads and transaction submissions.
    pub rpc_url: String,
    /// Signing credential; never persisted by this workflow.
    pub private_key: String,
    /// Path to the logical-name -> deployed-address mapping.
    pub address_book: String,
    /// Path to the Resolver build artifact (creation bytecode source).
    pub artifact_path: String,
    /// Block-explorer API endpoint; verification is skipped when unset.
    pub explorer_api_url: Option<String>,
    /// Block-explorer API key; verification is skipped when unset.
    pub explorer_api_key: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let rpc_url =
            env::var("RPC_URL").context("RPC_URL must be set in environment variables")?;
        let private_key =
            env::var("PRIVATE_KEY").context("PRIVATE_KEY must be set in environment variables")?;

        let settings = Self {
            rpc_url,
            private_key,
            address_book: env::var("ADDRESS_BOOK")
                .unwrap_or_else(|_| DEFAULT_ADDRESS_BOOK.to_string()),
            artifact_path: env::var("RESOLVER_ARTIFACT")
                .unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string()),
            explorer_api_url: env::var("EXPLORER_API_URL").ok(),
            explorer_api_key: env::var("EXPLORER_API_KEY").ok(),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Rejects blank required fields before any network activity happens.
    pub fn validate(&self) -> Result<()> {
        if self.rpc_url.trim().is_empty() {
            bail!("RPC_URL must not be empty");
        }
        if self.private_key.trim().is_empty() {
            bail!("PRIVATE_KEY must not be empty");
        }
        Ok(())
    }
}
