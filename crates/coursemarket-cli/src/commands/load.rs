//! Load a contract binding through the artifact store

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;
use coursemarket_core::{AlloyContractFactory, ContractLoader, FunctionInfo, ParsedFunctions};

use crate::config::ProjectConfig;
use crate::rpc;
use crate::source::ArtifactLocation;

/// Load a contract binding for the configured network
#[derive(Args)]
pub struct LoadCommand {
    /// Contract name, as published at /contracts/<NAME>.json
    pub name: String,

    /// Artifact store URL or directory
    #[arg(long)]
    pub artifacts: Option<String>,

    /// Network id to resolve the deployment on (defaults to $NETWORK_ID)
    #[arg(long)]
    pub network_id: Option<String>,

    /// RPC endpoint the binding talks to
    #[arg(long)]
    pub rpc_url: Option<String>,

    /// Query the node's chain id after loading
    #[arg(long)]
    pub check_chain: bool,
}

impl LoadCommand {
    pub async fn run(self) -> Result<()> {
        let config = ProjectConfig::load()?;
        let location = ArtifactLocation::parse(&config.artifacts(self.artifacts.as_deref())?)?;
        let loader_config = config.loader_config(self.network_id.as_deref())?;
        let rpc_url = config.rpc_url(self.rpc_url.as_deref())?;

        println!(
            "{} Loading {} from {}...",
            style("→").blue(),
            style(&self.name).bold(),
            location.describe()
        );

        let network_id = loader_config.network_id().clone();
        let factory = AlloyContractFactory::new(rpc::connect(&rpc_url)?);
        let loader = ContractLoader::new(location, loader_config);

        let Some(contract) = loader.load(&self.name, &factory).await? else {
            return Err(eyre!(
                "Contract '{}' cannot be loaded on network {}",
                self.name,
                network_id
            ));
        };

        println!(
            "{} {} at {} (network {})",
            style("✓").green(),
            style(&self.name).bold(),
            style(contract.address()).cyan(),
            network_id
        );

        if self.check_chain {
            let chain_id = rpc::get_chain_id(factory.provider()).await?;
            println!("  Chain ID: {}", chain_id);
        }

        print_functions(&ParsedFunctions::from_abi(contract.abi()));
        Ok(())
    }
}

pub(crate) fn print_functions(functions: &ParsedFunctions) {
    if functions.is_empty() {
        println!();
        println!("No functions in ABI.");
        return;
    }

    print_group("Read", &functions.read);
    print_group("Write", &functions.write);
}

fn print_group(title: &str, functions: &[FunctionInfo]) {
    if functions.is_empty() {
        return;
    }

    println!();
    println!("{}:", style(title).bold());
    for f in functions {
        let marker = if f.is_payable() {
            format!(" {}", style("payable").yellow())
        } else {
            String::new()
        };
        println!("  {}{}", f.signature, marker);
    }
}
