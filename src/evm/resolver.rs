use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use async_trait::async_trait;
use log::info;

use crate::entity::{PathQuote, ResolverError, SwapRequest};

sol! {
    #[sol(rpc)]
    contract Resolver {
        /// Selects the router and token path yielding the best output for an
        /// exact input amount. Path-selection and tie-break policy live
        /// entirely inside the contract.
        function findBestPathExactIn(address fromToken, address toToken, uint256 amountIn)
            external
            view
            returns (address router, address[] memory path, uint256 amountOut);

        /// Swaps an exact input amount along `path` through `router`,
        /// subject to `amountOutMin` and the on-chain `deadline`.
        function swapExactIn(
            address router,
            uint256 amountIn,
            uint256 amountOutMin,
            address[] calldata path,
            address to,
            uint256 deadline
        ) external returns (uint256 amountOut);
    }
}

/// Callable surface of a deployed Resolver instance.
#[async_trait]
pub trait ResolverContract: Send + Sync {
    /// Read-only best-path lookup; any revert surfaces as an opaque
    /// `ResolverError::Contract`.
    async fn find_best_path_exact_in(
        &self,
        from_token: Address,
        to_token: Address,
        amount_in: U256,
    ) -> Result<PathQuote, ResolverError>;

    /// Submits the swap and returns the pending transaction hash without
    /// awaiting confirmation.
    async fn swap_exact_in(&self, request: &SwapRequest) -> Result<TxHash, ResolverError>;
}

/// Contract-creation seam, separate from the bound-contract surface since
/// deployment happens before any address exists to bind.
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    /// Submits a contract-creation transaction with no constructor
    /// arguments, waits for on-chain confirmation and returns the deployed
    /// address. Fatal on any failure; no retry.
    async fn deploy(&self, bytecode: Bytes) -> Result<Address, ResolverError>;
}

/// A Resolver binding backed by a live provider.
pub struct ResolverHandle {
    instance: Resolver::ResolverInstance<DynProvider>,
}

/// Bind a deployed Resolver. No check that the address hosts matching code
/// happens here; mismatches surface when a method is called.
pub fn bind(address: Address, provider: DynProvider) -> ResolverHandle {
    info!("loaded contract {address}");
    ResolverHandle {
        instance: Resolver::new(address, provider),
    }
}

#[async_trait]
impl ResolverContract for ResolverHandle {
    async fn find_best_path_exact_in(
        &self,
        from_token: Address,
        to_token: Address,
        amount_in: U256,
    ) -> Result<PathQuote, ResolverError> {
        let out = self
            .instance
            .findBestPathExactIn(from_token, to_token, amount_in)
            .call()
            .await
            .map_err(|e| ResolverError::Contract(e.to_string()))?;

        // Shape the raw return into a named record right at the boundary.
        Ok(PathQuote {
            router: out.router,
            path: out.path,
            amount_out: out.amountOut,
        })
    }

    async fn swap_exact_in(&self, request: &SwapRequest) -> Result<TxHash, ResolverError> {
        let pending = self
            .instance
            .swapExactIn(
                request.router,
                request.amount_in,
                request.amount_out_min,
                request.path.clone(),
                request.recipient,
                request.deadline,
            )
            .send()
            .await
            .map_err(|e| ResolverError::Contract(e.to_string()))?;

        Ok(*pending.tx_hash())
    }
}

/// Deployer backed by a live provider.
pub struct ChainDeployer {
    provider: DynProvider,
}

impl ChainDeployer {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ContractDeployer for ChainDeployer {
    async fn deploy(&self, bytecode: Bytes) -> Result<Address, ResolverError> {
        let tx = TransactionRequest::default().with_deploy_code(bytecode);

        let receipt = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ResolverError::Contract(e.to_string()))?
            .get_receipt()
            .await
            .map_err(|e| ResolverError::Contract(e.to_string()))?;

        receipt.contract_address.ok_or_else(|| {
            ResolverError::Contract("deployment receipt has no contract address".into())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::sol_types::SolCall;
    use chrono::Utc;

    #[test]
    fn binding_matches_resolver_abi() {
        assert_eq!(
            Resolver::findBestPathExactInCall::SIGNATURE,
            "findBestPathExactIn(address,address,uint256)"
        );
        assert_eq!(
            Resolver::swapExactInCall::SIGNATURE,
            "swapExactIn(address,uint256,uint256,address[],address,uint256)"
        );
    }

    // Mock of the contract seam: quotes a direct two-hop path and rejects
    // swaps whose deadline has already passed, the way the chain would.
    struct MockResolver {
        router: Address,
    }

    #[async_trait]
    impl ResolverContract for MockResolver {
        async fn find_best_path_exact_in(
            &self,
            from_token: Address,
            to_token: Address,
            amount_in: U256,
        ) -> Result<PathQuote, ResolverError> {
            Ok(PathQuote {
                router: self.router,
                path: vec![from_token, to_token],
                amount_out: amount_in - U256::from(1u64),
            })
        }

        async fn swap_exact_in(&self, request: &SwapRequest) -> Result<TxHash, ResolverError> {
            let now = U256::from(Utc::now().timestamp() as u64);
            if request.deadline < now {
                return Err(ResolverError::Contract("execution reverted: EXPIRED".into()));
            }
            Ok(TxHash::ZERO)
        }
    }

    fn mock() -> MockResolver {
        MockResolver {
            router: address!("1111111111111111111111111111111111111111"),
        }
    }

    #[tokio::test]
    async fn quote_yields_named_record_starting_at_from_token() {
        let usdc = address!("2791bca1f2de4661ed88a30c99a7a9449aa84174");
        let usdt = address!("53e0bca35ec356bd5dddfebbd1fc0fd03fabad39");

        let quote = mock()
            .find_best_path_exact_in(usdc, usdt, U256::from(10_000_000u64))
            .await
            .unwrap();

        assert!(!quote.path.is_empty());
        assert_eq!(quote.path[0], usdc);
        assert_ne!(quote.router, Address::ZERO);
        assert!(quote.amount_out > U256::ZERO);
    }

    #[tokio::test]
    async fn expired_deadline_propagates_as_contract_error() {
        let request = SwapRequest {
            router: address!("1111111111111111111111111111111111111111"),
            amount_in: U256::from(10_000_000u64),
            amount_out_min: U256::from(9_900_000u64),
            path: vec![
                address!("2791bca1f2de4661ed88a30c99a7a9449aa84174"),
                address!("53e0bca35ec356bd5dddfebbd1fc0fd03fabad39"),
            ],
            recipient: address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            deadline: U256::from(1u64),
        };

        let err = mock().swap_exact_in(&request).await.unwrap_err();
        assert!(matches!(err, ResolverError::Contract(_)));
    }

    // Deployer seam mock: hands out addresses from a creation counter, the
    // way a chain derives fresh contract addresses from the sender nonce.
    struct MockDeployer {
        nonce: std::sync::atomic::AtomicU64,
    }

    impl MockDeployer {
        fn new() -> Self {
            Self {
                nonce: std::sync::atomic::AtomicU64::new(0),
            }
        }
    }

    #[async_trait]
    impl ContractDeployer for MockDeployer {
        async fn deploy(&self, _bytecode: Bytes) -> Result<Address, ResolverError> {
            let n = self
                .nonce
                .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
                + 1;
            let mut raw = [0u8; 20];
            raw[12..].copy_from_slice(&n.to_be_bytes());
            Ok(Address::from(raw))
        }
    }

    #[tokio::test]
    async fn deploy_returns_a_well_formed_address() {
        let address = MockDeployer::new()
            .deploy(Bytes::from_static(&[0x60, 0x80]))
            .await
            .unwrap();

        assert_ne!(address, Address::ZERO);
        // 0x prefix plus 40 hex characters
        assert_eq!(address.to_string().len(), 42);
    }

    #[tokio::test]
    async fn sequential_deploys_yield_distinct_addresses() {
        let deployer = MockDeployer::new();
        let bytecode = Bytes::from_static(&[0x60, 0x80]);

        let first = deployer.deploy(bytecode.clone()).await.unwrap();
        let second = deployer.deploy(bytecode).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn future_deadline_is_accepted() {
        let request = SwapRequest {
            router: address!("1111111111111111111111111111111111111111"),
            amount_in: U256::from(10_000_000u64),
            amount_out_min: U256::from(9_900_000u64),
            path: vec![
                address!("2791bca1f2de4661ed88a30c99a7a9449aa84174"),
                address!("53e0bca35ec356bd5dddfebbd1fc0fd03fabad39"),
            ],
            recipient: address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            deadline: U256::from(crate::entity::deadline_in(1200)),
        };

        assert!(mock().swap_exact_in(&request).await.is_ok());
    }
}
