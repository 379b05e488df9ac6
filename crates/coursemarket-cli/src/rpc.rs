use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use color_eyre::eyre::{eyre, Result};

/// Build an HTTP provider for `rpc_url`. No request is made until first use.
pub fn connect(rpc_url: &str) -> Result<DynProvider> {
    let url: Url = rpc_url
        .parse()
        .map_err(|e| eyre!("Invalid RPC URL '{}': {}", rpc_url, e))?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Fetch the chain ID from the connected node
pub async fn get_chain_id(provider: &DynProvider) -> Result<u64> {
    let chain_id = provider.get_chain_id().await?;
    Ok(chain_id)
}
