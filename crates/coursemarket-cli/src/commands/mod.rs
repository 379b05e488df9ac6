//! CLI commands for coursemarket

use clap::Subcommand;
use color_eyre::eyre::Result;

pub mod inspect;
pub mod load;
pub mod serve;

/// All available CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Load a contract binding for the configured network
    Load(load::LoadCommand),

    /// Show the deployments and interface recorded in an artifact
    Inspect(inspect::InspectCommand),

    /// Serve an artifact directory at /contracts/<name>.json
    Serve(serve::ServeCommand),
}

impl Command {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Command::Load(cmd) => cmd.run().await,
            Command::Inspect(cmd) => cmd.run().await,
            Command::Serve(cmd) => cmd.run().await,
        }
    }
}
