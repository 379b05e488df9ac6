use thiserror::Error;

use crate::types::NetworkId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Artifact request for '{name}' failed with status {status}")]
    ArtifactStatus { name: String, status: u16 },

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed artifact '{name}': {reason}")]
    MalformedArtifact { name: String, reason: String },

    #[error("Contract '{contract}' has no deployment on network {network}")]
    MissingNetwork { contract: String, network: NetworkId },

    #[error("Binding construction failed: {0}")]
    BindingConstruction(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn malformed(name: impl Into<String>, reason: impl ToString) -> Self {
        Self::MalformedArtifact {
            name: name.into(),
            reason: reason.to_string(),
        }
    }

    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Error::Transport(_) => "TRANSPORT_ERROR",
            Error::ArtifactStatus { .. } => "ARTIFACT_STATUS",
            Error::ArtifactNotFound(_) => "ARTIFACT_NOT_FOUND",
            Error::Io(_) => "IO_ERROR",
            Error::MalformedArtifact { .. } => "MALFORMED_ARTIFACT",
            Error::MissingNetwork { .. } => "MISSING_NETWORK",
            Error::BindingConstruction(_) => "BINDING_CONSTRUCTION",
            Error::InvalidConfig(_) => "INVALID_CONFIG",
        }
    }

    /// Failures between a fetched artifact and its binding.
    ///
    /// [`ContractLoader::load`](crate::ContractLoader::load) logs these and
    /// yields `None`; every other variant reaches the caller.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::MissingNetwork { .. } | Error::BindingConstruction(_)
        )
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_variants() {
        let missing = Error::MissingNetwork {
            contract: "CourseMarketplace".to_string(),
            network: NetworkId::from("1"),
        };
        assert!(missing.is_recoverable());
        assert!(Error::BindingConstruction("boom".to_string()).is_recoverable());

        assert!(!Error::ArtifactNotFound("X".to_string()).is_recoverable());
        assert!(!Error::malformed("X", "not json").is_recoverable());
        assert!(!Error::ArtifactStatus {
            name: "X".to_string(),
            status: 404
        }
        .is_recoverable());
    }

    #[test]
    fn test_missing_network_message() {
        let err = Error::MissingNetwork {
            contract: "CourseMarketplace".to_string(),
            network: NetworkId::from("1"),
        };
        assert_eq!(
            err.to_string(),
            "Contract 'CourseMarketplace' has no deployment on network 1"
        );
        assert_eq!(err.code(), "MISSING_NETWORK");
    }
}
