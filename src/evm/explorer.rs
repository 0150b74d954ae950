use alloy::primitives::Address;
use log::{debug, error, info};
use reqwest::Client;
use serde::Deserialize;

use crate::entity::ResolverError;

/// Fully-qualified source identifier submitted with verification requests.
pub const RESOLVER_SOURCE: &str = "contracts/Resolver.sol:Resolver";

/// Etherscan-style `{status, message, result}` envelope.
#[derive(Debug, Deserialize)]
struct VerifyResponse {
    status: String,
    message: String,
    result: String,
}

/// Client for the block-explorer verification service.
pub struct ExplorerClient {
    http: Client,
    api_url: String,
    api_key: String,
}

impl ExplorerClient {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            api_url,
            api_key,
        }
    }

    /// Submits a verification request for a deployed contract. The outcome
    /// is logged only and never propagated to the deploy flow.
    pub async fn verify_contract(&self, address: Address, constructor_args: &str, source: &str) {
        match self.submit(address, constructor_args, source).await {
            Ok(resp) if resp.status == "1" => {
                info!("verification submitted for {address}: {}", resp.result)
            }
            Ok(resp) => error!(
                "verification rejected for {address}: {} ({})",
                resp.message, resp.result
            ),
            Err(e) => error!("verification request failed for {address}: {e}"),
        }
    }

    async fn submit(
        &self,
        address: Address,
        constructor_args: &str,
        source: &str,
    ) -> Result<VerifyResponse, ResolverError> {
        let contract_address = address.to_string();
        // "constructorArguements" is the parameter name the explorer API
        // actually expects, typo included.
        let params = [
            ("apikey", self.api_key.as_str()),
            ("module", "contract"),
            ("action", "verifysourcecode"),
            ("contractaddress", contract_address.as_str()),
            ("contractname", source),
            ("constructorArguements", constructor_args),
        ];

        debug!("submitting verification for {address} as {source}");

        let response = self
            .http
            .post(&self.api_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ResolverError::Verification(e.to_string()))?;

        response
            .json::<VerifyResponse>()
            .await
            .map_err(|e| ResolverError::Verification(e.to_string()))
    }
}
