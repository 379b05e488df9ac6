//! Contract loading
//!
//! [`ContractLoader`] ties the pieces together: fetch an artifact by contract
//! name, pick the deployment for the configured network, and hand the ABI and
//! address to the caller's [`ContractFactory`].

use crate::artifact::Artifact;
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::factory::ContractFactory;
use crate::source::ArtifactSource;

/// Loads contract bindings from published build artifacts.
///
/// Holds no state besides its source and config, so one loader can be shared
/// across tasks. Artifacts are fetched again on every call.
#[derive(Debug, Clone)]
pub struct ContractLoader<S> {
    source: S,
    config: LoaderConfig,
}

impl<S: ArtifactSource> ContractLoader<S> {
    pub fn new(source: S, config: LoaderConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Retrieve and validate the artifact for `name` without binding it
    pub async fn fetch_artifact(&self, name: &str) -> Result<Artifact> {
        self.source.fetch(name).await
    }

    /// Load `name` and surface every failure as an error
    pub async fn try_load<F: ContractFactory>(&self, name: &str, client: &F) -> Result<F::Binding> {
        let artifact = self.fetch_artifact(name).await?;
        let address = artifact.address_on(name, self.config.network_id())?;
        client.construct(&artifact.abi, address)
    }

    /// Load `name`, yielding `None` when it cannot be bound on this network.
    ///
    /// A missing deployment for the configured network and a factory that
    /// rejects the ABI/address pair are logged once at `warn` and become
    /// `Ok(None)`. Retrieval and artifact validation failures are returned as
    /// errors.
    pub async fn load<F: ContractFactory>(
        &self,
        name: &str,
        client: &F,
    ) -> Result<Option<F::Binding>> {
        match self.try_load(name, client).await {
            Ok(binding) => Ok(Some(binding)),
            Err(err) if err.is_recoverable() => {
                tracing::warn!(
                    contract = name,
                    network = %self.config.network_id(),
                    error = %err,
                    "Contract {} cannot be loaded",
                    name
                );
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
