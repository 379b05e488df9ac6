//! Contract artifact loading for the course marketplace.
//!
//! The marketplace's ownership and purchase state lives on chain. Front ends
//! reach it through bindings built from the contracts' published build
//! artifacts; [`ContractLoader`] is how they get one.

pub mod abi;
pub mod artifact;
pub mod config;
pub mod error;
pub mod factory;
pub mod loader;
pub mod source;
pub mod types;

pub use abi::{event_names, FunctionInfo, ParamInfo, ParsedFunctions};
pub use artifact::{Artifact, Deployment};
pub use config::{LoaderConfig, NETWORK_ID_ENV};
pub use error::{Error, Result};
pub use factory::{AlloyContractFactory, ContractFactory};
pub use loader::ContractLoader;
pub use source::{ArtifactSource, DirArtifactSource, HttpArtifactSource};
pub use types::*;
