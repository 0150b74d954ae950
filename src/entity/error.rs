#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    #[error("RPC connection error: {0}")]
    Connection(String),

    #[error("Invalid private key: {0}")]
    Key(String),

    #[error("Address book error: {0}")]
    AddressBook(String),

    #[error("Build artifact error: {0}")]
    Artifact(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("Verification error: {0}")]
    Verification(String),
}
