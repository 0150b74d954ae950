use alloy::primitives::{Address, U256};
use anyhow::{ensure, Result};

use crate::config::Settings;
use crate::entity::{deadline_in, SwapRequest};
use crate::evm::{client, resolver, AddressBook, ResolverContract};

/// Submits a swap along a previously quoted path and prints the pending
/// transaction hash. Confirmation is not awaited; the transaction is left
/// pending when the process exits.
#[allow(clippy::too_many_arguments)]
pub async fn run(
    settings: &Settings,
    router: Address,
    amount_in: U256,
    amount_out_min: U256,
    path: Vec<Address>,
    to: Option<Address>,
    deadline: Option<u64>,
    valid_for: u64,
) -> Result<()> {
    ensure!(!path.is_empty(), "swap path must not be empty");

    let book = AddressBook::load(&settings.address_book)?;
    let (signer, provider) = client::fetch_signer(settings).await?;
    let handle = resolver::bind(book.resolver()?, provider);

    let request = SwapRequest {
        router,
        amount_in,
        amount_out_min,
        path,
        recipient: to.unwrap_or_else(|| signer.address()),
        deadline: U256::from(deadline.unwrap_or_else(|| deadline_in(valid_for))),
    };

    let tx_hash = handle.swap_exact_in(&request).await?;
    println!("swap submitted: {tx_hash}");

    Ok(())
}
