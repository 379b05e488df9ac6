use std::path::Path;

use color_eyre::eyre::{eyre, Result, WrapErr};
use coursemarket_core::{LoaderConfig, NetworkId, NETWORK_ID_ENV};
use serde::Deserialize;

const PROJECT_CONFIG: &str = "coursemarket.toml";

pub const DEFAULT_ARTIFACTS: &str = "http://127.0.0.1:3000";
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:7545";

/// Project configuration file structure (coursemarket.toml)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectConfig {
    /// Artifact store: an http(s) origin or a local directory
    #[serde(default)]
    pub artifacts: Option<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub rpc_url: Option<String>,
}

impl ProjectConfig {
    /// Load coursemarket.toml from the current directory, or defaults if absent
    pub fn load() -> Result<Self> {
        let path = Path::new(PROJECT_CONFIG);
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| eyre!("Could not read {}: {}", path.display(), e))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Artifact store, with `${VAR}` references resolved
    pub fn artifacts(&self, flag: Option<&str>) -> Result<String> {
        resolve_setting(flag, self.artifacts.as_deref(), DEFAULT_ARTIFACTS)
    }

    pub fn rpc_url(&self, flag: Option<&str>) -> Result<String> {
        resolve_setting(flag, self.rpc_url.as_deref(), DEFAULT_RPC_URL)
    }

    /// Loader settings. The flag wins over the file, which wins over `NETWORK_ID`.
    pub fn loader_config(&self, flag: Option<&str>) -> Result<LoaderConfig> {
        match flag.or(self.network_id.as_deref()) {
            Some(value) => Ok(LoaderConfig::new(NetworkId::from(resolve_env_var(value)?))?),
            None => LoaderConfig::from_env().wrap_err_with(|| {
                format!(
                    "No network id configured. Pass --network-id, set network_id in {}, or export {}",
                    PROJECT_CONFIG, NETWORK_ID_ENV
                )
            }),
        }
    }
}

fn resolve_setting(flag: Option<&str>, file: Option<&str>, default: &str) -> Result<String> {
    resolve_env_var(flag.or(file).unwrap_or(default))
}

/// Resolve environment variable references in a string
/// Supports ${VAR_NAME} syntax
fn resolve_env_var(value: &str) -> Result<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).map_err(|_| eyre!("Environment variable '{}' not set", var_name))
    } else {
        Ok(value.to_string())
    }
}
