use alloy::primitives::{
    utils::{parse_units, ParseUnits},
    Address, U256,
};
use anyhow::{Context, Result};

use crate::config::Settings;
use crate::evm::{client, resolver, AddressBook, ResolverContract};

/// Scale a human-readable amount by the token's declared decimal precision.
fn scale_amount(amount: &str, decimals: u8) -> Result<U256> {
    let parsed: ParseUnits = parse_units(amount, decimals)
        .with_context(|| format!("invalid amount '{amount}' at {decimals} decimals"))?;
    Ok(parsed.into())
}

/// Quotes the best path for swapping `amount` of `from_token` into
/// `to_token` and prints the shaped result.
pub async fn run(
    settings: &Settings,
    from_token: Address,
    to_token: Address,
    amount: &str,
    decimals: u8,
) -> Result<()> {
    let amount_in = scale_amount(amount, decimals)?;

    let book = AddressBook::load(&settings.address_book)?;
    let (_signer, provider) = client::fetch_signer(settings).await?;
    let handle = resolver::bind(book.resolver()?, provider);

    let quote = handle
        .find_best_path_exact_in(from_token, to_token, amount_in)
        .await?;
    println!("{quote}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_by_token_decimals() {
        // 10 units of a 6-decimal token, as the original USDC quote
        assert_eq!(scale_amount("10", 6).unwrap(), U256::from(10_000_000u64));
    }

    #[test]
    fn handles_fractional_amounts() {
        assert_eq!(scale_amount("0.5", 6).unwrap(), U256::from(500_000u64));
    }

    #[test]
    fn scales_eighteen_decimal_amounts() {
        assert_eq!(
            scale_amount("1", 18).unwrap(),
            U256::from(1_000_000_000_000_000_000u64)
        );
    }

    #[test]
    fn rejects_garbage_amounts() {
        assert!(scale_amount("ten", 6).is_err());
    }
}
