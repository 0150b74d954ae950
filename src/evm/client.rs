use alloy::network::EthereumWallet;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use log::info;

use crate::config::Settings;
use crate::entity::ResolverError;

/// Parse the configured private key into a local signer. Fails before any
/// network activity if the key material is invalid.
pub fn parse_signer(private_key: &str) -> Result<PrivateKeySigner, ResolverError> {
    private_key
        .trim()
        .parse::<PrivateKeySigner>()
        .map_err(|e| ResolverError::Key(e.to_string()))
}

/// Derive a chain-connected signing identity: key -> signer, endpoint ->
/// wallet-filled provider, plus a single reachability probe. No retry; one
/// failed attempt propagates immediately.
pub async fn fetch_signer(
    settings: &Settings,
) -> Result<(PrivateKeySigner, DynProvider), ResolverError> {
    let signer = parse_signer(&settings.private_key)?;
    let wallet = EthereumWallet::from(signer.clone());

    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect(&settings.rpc_url)
        .await
        .map_err(|e| ResolverError::Connection(e.to_string()))?
        .erased();

    // HTTP transports dial lazily; probe once so a dead or malformed
    // endpoint fails here instead of inside the first contract call.
    let chain_id = provider
        .get_chain_id()
        .await
        .map_err(|e| ResolverError::Connection(e.to_string()))?;

    info!("connected to {} (chain id {chain_id})", signer.address());
    Ok((signer, provider))
}
