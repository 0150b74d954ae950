use anyhow::Result;
use log::info;

use crate::config::Settings;
use crate::evm::{client, ChainDeployer, ContractArtifact, ContractDeployer, ExplorerClient};

/// Deploys the Resolver contract and prints its address. With `verify` set
/// and an explorer configured, a verification request follows; its outcome
/// is logged but never fails the deploy.
pub async fn run(settings: &Settings, verify: bool) -> Result<()> {
    let artifact = ContractArtifact::load(&settings.artifact_path)?;
    let (_signer, provider) = client::fetch_signer(settings).await?;

    let address = ChainDeployer::new(provider)
        .deploy(artifact.bytecode)
        .await?;
    println!("Resolver deployed at {address}");

    if verify {
        match (&settings.explorer_api_url, &settings.explorer_api_key) {
            (Some(url), Some(key)) => {
                // The Resolver deploys with no constructor arguments.
                ExplorerClient::new(url.clone(), key.clone())
                    .verify_contract(address, "", crate::evm::explorer::RESOLVER_SOURCE)
                    .await;
            }
            _ => info!("explorer not configured, skipping verification"),
        }
    }

    Ok(())
}
