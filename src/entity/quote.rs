use alloy::primitives::{Address, U256};
use std::fmt;

/// Result of the resolver's best-path lookup. The contract returns an
/// unlabeled tuple; it is shaped into this record at the call boundary so
/// nothing downstream handles positional values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathQuote {
    pub router: Address,
    pub path: Vec<Address>,
    pub amount_out: U256,
}

impl fmt::Display for PathQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self
            .path
            .iter()
            .map(|a| a.to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        writeln!(f, "router:    {}", self.router)?;
        writeln!(f, "path:      {path}")?;
        write!(f, "amountOut: {}", self.amount_out)
    }
}
