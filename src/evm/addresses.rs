use alloy::primitives::Address;
use std::collections::HashMap;
use std::fs;

use crate::entity::ResolverError;

pub const RESOLVER_KEY: &str = "resolver";

/// Mapping of logical contract names to deployed addresses, loaded from a
/// JSON file maintained outside this workflow.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: HashMap<String, Address>,
}

impl AddressBook {
    pub fn from_json(json: &str) -> Result<Self, ResolverError> {
        let entries: HashMap<String, Address> =
            serde_json::from_str(json).map_err(|e| ResolverError::AddressBook(e.to_string()))?;
        Ok(Self { entries })
    }

    pub fn load(path: &str) -> Result<Self, ResolverError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ResolverError::AddressBook(format!("failed to read {path}: {e}")))?;
        Self::from_json(&json)
    }

    pub fn get(&self, name: &str) -> Result<Address, ResolverError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| ResolverError::AddressBook(format!("no address recorded for '{name}'")))
    }

    pub fn resolver(&self) -> Result<Address, ResolverError> {
        self.get(RESOLVER_KEY)
    }
}
