//! Contract build artifacts
//!
//! An [`Artifact`] is the JSON document a truffle-style build writes per
//! contract: the ABI plus one deployment record per network the contract was
//! migrated to. Only the fields the loader relies on are modelled; everything
//! else in the document (`bytecode`, `ast`, `events`, `links`, ...) is ignored.

use std::collections::BTreeMap;

use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::abi::ParsedFunctions;
use crate::error::{Error, Result};
use crate::types::NetworkId;

/// Typed view of a contract build artifact
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    pub abi: JsonAbi,
    pub networks: BTreeMap<NetworkId, Deployment>,
}

/// Where a contract lives on one network.
///
/// Fields are kept as written. The address is only parsed for the network
/// being bound, so a stale entry elsewhere does not spoil the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

impl Deployment {
    pub fn parse_address(&self) -> Result<Address> {
        self.address.parse().map_err(|e| {
            Error::BindingConstruction(format!("invalid address '{}': {}", self.address, e))
        })
    }
}

impl Artifact {
    /// Parse and validate an artifact document fetched for contract `name`.
    ///
    /// Fails with [`Error::MalformedArtifact`] when the body is not JSON, or
    /// when `abi` or `networks` is missing or mistyped. Deployment addresses are
    /// not checked here.
    pub fn from_slice(name: &str, body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| Error::malformed(name, e))
    }

    pub fn from_json(name: &str, body: &str) -> Result<Self> {
        Self::from_slice(name, body.as_bytes())
    }

    /// Deployment record for `network`
    pub fn deployment(&self, network: &NetworkId) -> Option<&Deployment> {
        self.networks.get(network)
    }

    /// Deployed address on `network`.
    ///
    /// Fails with [`Error::MissingNetwork`] when there is no entry, and with
    /// [`Error::BindingConstruction`] when the entry's address does not parse.
    pub fn address_on(&self, contract: &str, network: &NetworkId) -> Result<Address> {
        self.deployment(network)
            .ok_or_else(|| Error::MissingNetwork {
                contract: contract.to_string(),
                network: network.clone(),
            })?
            .parse_address()
    }

    /// Networks this contract has deployments on, in key order
    pub fn network_ids(&self) -> impl Iterator<Item = &NetworkId> {
        self.networks.keys()
    }

    pub fn functions(&self) -> ParsedFunctions {
        ParsedFunctions::from_abi(&self.abi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKETPLACE_ARTIFACT: &str = r#"{
        "contractName": "CourseMarketplace",
        "abi": [
            {
                "type": "function",
                "name": "getCourseCount",
                "inputs": [],
                "outputs": [{"name": "", "type": "uint256"}],
                "stateMutability": "view"
            }
        ],
        "bytecode": "0x6080604052",
        "networks": {
            "5777": {
                "events": {},
                "links": {},
                "address": "0x5FbDB2315678afecb367f032d93F642f64180aa3",
                "transactionHash": "0x9a2e7b0c1d5f4e3a2b1c0d9e8f7a6b5c4d3e2f1a0b9c8d7e6f5a4b3c2d1e0f9a"
            },
            "1337": {
                "address": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"
            }
        },
        "schemaVersion": "3.4.4"
    }"#;

    #[test]
    fn test_parse_truffle_artifact() {
        let artifact = Artifact::from_json("CourseMarketplace", MARKETPLACE_ARTIFACT).unwrap();

        assert_eq!(artifact.contract_name.as_deref(), Some("CourseMarketplace"));
        assert_eq!(artifact.abi.functions().count(), 1);
        assert_eq!(artifact.networks.len(), 2);

        let ganache = artifact.deployment(&NetworkId::from("5777")).unwrap();
        assert_eq!(ganache.address, "0x5FbDB2315678afecb367f032d93F642f64180aa3");
        assert_eq!(
            artifact
                .address_on("CourseMarketplace", &NetworkId::from("5777"))
                .unwrap(),
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
                .parse::<Address>()
                .unwrap()
        );
        assert!(ganache.transaction_hash.is_some());

        let hardhat = artifact.deployment(&NetworkId::from("1337")).unwrap();
        assert!(hardhat.transaction_hash.is_none());
    }

    #[test]
    fn test_network_ids_sorted() {
        let artifact = Artifact::from_json("CourseMarketplace", MARKETPLACE_ARTIFACT).unwrap();
        let ids: Vec<_> = artifact.network_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["1337", "5777"]);
    }

    #[test]
    fn test_address_on_missing_network() {
        let artifact = Artifact::from_json("CourseMarketplace", MARKETPLACE_ARTIFACT).unwrap();
        let err = artifact
            .address_on("CourseMarketplace", &NetworkId::from("1"))
            .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingNetwork { ref contract, ref network }
                if contract == "CourseMarketplace" && network.as_str() == "1"
        ));
    }

    #[test]
    fn test_empty_networks_is_valid() {
        let artifact = Artifact::from_json("Faucet", r#"{"abi": [], "networks": {}}"#).unwrap();
        assert!(artifact.networks.is_empty());
        assert!(artifact.functions().is_empty());
    }

    #[test]
    fn test_rejects_non_json() {
        let err = Artifact::from_json("CourseMarketplace", "<html>404</html>").unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedArtifact { ref name, .. } if name == "CourseMarketplace"
        ));
    }

    #[test]
    fn test_rejects_missing_abi() {
        let err = Artifact::from_json("X", r#"{"networks": {}}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { .. }));
        assert!(err.to_string().contains("abi"));
    }

    #[test]
    fn test_rejects_missing_networks() {
        let err = Artifact::from_json("X", r#"{"abi": []}"#).unwrap_err();
        assert!(err.to_string().contains("networks"));
    }

    #[test]
    fn test_rejects_abi_that_is_not_a_list() {
        let err = Artifact::from_json("X", r#"{"abi": {"name": "oops"}, "networks": {}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { .. }));
    }

    #[test]
    fn test_bad_address_fails_only_when_bound() {
        let artifact = Artifact::from_json(
            "X",
            r#"{"abi": [], "networks": {
                "3": {"address": ""},
                "5777": {"address": "0xABC"},
                "1337": {"address": "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512"}
            }}"#,
        )
        .unwrap();

        assert!(artifact.address_on("X", &NetworkId::from("1337")).is_ok());
        assert!(matches!(
            artifact.address_on("X", &NetworkId::from("5777")),
            Err(Error::BindingConstruction(ref reason)) if reason.contains("0xABC")
        ));
        assert!(matches!(
            artifact.address_on("X", &NetworkId::from("3")),
            Err(Error::BindingConstruction(_))
        ));
    }

    #[test]
    fn test_rejects_network_entry_without_address() {
        let err = Artifact::from_json("X", r#"{"abi": [], "networks": {"5777": {}}}"#)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedArtifact { .. }));
    }
}
