//! Loader configuration

use crate::error::{Error, Result};
use crate::types::NetworkId;

/// Environment variable holding the network id deployments are resolved on
pub const NETWORK_ID_ENV: &str = "NETWORK_ID";

/// Settings a [`ContractLoader`](crate::ContractLoader) resolves artifacts with.
///
/// The network id is fixed when the config is built. Tests and callers that
/// need another network build another config instead of touching the process
/// environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    network_id: NetworkId,
}

impl LoaderConfig {
    pub fn new(network_id: impl Into<NetworkId>) -> Result<Self> {
        let network_id = network_id.into();
        if network_id.as_str().trim().is_empty() {
            return Err(Error::InvalidConfig("network id must not be empty".into()));
        }
        Ok(Self { network_id })
    }

    /// Read the network id from `NETWORK_ID`
    pub fn from_env() -> Result<Self> {
        Self::from_env_var(NETWORK_ID_ENV)
    }

    /// Read the network id from an arbitrary environment variable
    pub fn from_env_var(key: &str) -> Result<Self> {
        let value = std::env::var(key)
            .map_err(|_| Error::InvalidConfig(format!("Environment variable '{}' not set", key)))?;
        Self::new(value)
    }

    pub fn network_id(&self) -> &NetworkId {
        &self.network_id
    }
}
