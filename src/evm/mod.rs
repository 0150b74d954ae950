// Re-export everything from submodules
pub mod addresses;
pub mod artifact;
pub mod client;
pub mod explorer;
pub mod resolver;

// Re-export commonly used items
pub use addresses::AddressBook;
pub use artifact::ContractArtifact;
pub use client::fetch_signer;
pub use explorer::ExplorerClient;
pub use resolver::{bind, ChainDeployer, ContractDeployer, ResolverContract, ResolverHandle};
