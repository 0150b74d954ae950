use alloy::primitives::Bytes;
use serde::Deserialize;
use std::fs;

use crate::entity::ResolverError;

// Hardhat emits `"bytecode": "0x…"`; Foundry wraps the hex in an object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBytecode {
    Plain(String),
    Wrapped { object: String },
}

#[derive(Debug, Deserialize)]
struct RawArtifact {
    bytecode: Option<RawBytecode>,
}

/// Creation bytecode extracted from a contract build artifact. The callable
/// interface is compiled in; the bytecode is the one thing that has to come
/// from the build output.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
    pub bytecode: Bytes,
}

impl ContractArtifact {
    pub fn from_json(json: &str) -> Result<Self, ResolverError> {
        let raw: RawArtifact =
            serde_json::from_str(json).map_err(|e| ResolverError::Artifact(e.to_string()))?;

        let hex = match raw.bytecode {
            Some(RawBytecode::Plain(s)) => s,
            Some(RawBytecode::Wrapped { object }) => object,
            None => return Err(ResolverError::Artifact("artifact has no bytecode".into())),
        };

        let bytecode = hex
            .parse::<Bytes>()
            .map_err(|e| ResolverError::Artifact(format!("invalid bytecode hex: {e}")))?;

        if bytecode.is_empty() {
            return Err(ResolverError::Artifact("artifact bytecode is empty".into()));
        }

        Ok(Self { bytecode })
    }

    pub fn load(path: &str) -> Result<Self, ResolverError> {
        let json = fs::read_to_string(path)
            .map_err(|e| ResolverError::Artifact(format!("failed to read {path}: {e}")))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hardhat_artifact() {
        let artifact = ContractArtifact::from_json(
            r#"{"contractName":"Resolver","abi":[],"bytecode":"0x608060405234"}"#,
        )
        .unwrap();
        assert_eq!(artifact.bytecode.len(), 6);
    }

    #[test]
    fn parses_wrapped_bytecode() {
        let artifact = ContractArtifact::from_json(
            r#"{"bytecode":{"object":"0x6080","sourceMap":""}}"#,
        )
        .unwrap();
        assert_eq!(artifact.bytecode.len(), 2);
    }

    #[test]
    fn missing_bytecode_is_an_error() {
        let err = ContractArtifact::from_json(r#"{"abi":[]}"#).unwrap_err();
        assert!(matches!(err, ResolverError::Artifact(_)));
    }

    #[test]
    fn empty_bytecode_is_an_error() {
        let err = ContractArtifact::from_json(r#"{"bytecode":"0x"}"#).unwrap_err();
        assert!(matches!(err, ResolverError::Artifact(_)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ContractArtifact::from_json("not json").is_err());
    }
}
