//! Serve an artifact directory as the artifact store

use std::path::PathBuf;

use clap::Args;
use color_eyre::eyre::{eyre, Result};
use console::style;

use crate::server::ServerConfig;

/// Serve an artifact directory at /contracts/<name>.json
#[derive(Args)]
pub struct ServeCommand {
    /// Directory holding <name>.json artifacts
    #[arg(long, default_value = "build/contracts")]
    pub dir: PathBuf,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short, default_value = "3000")]
    pub port: u16,
}

impl ServeCommand {
    pub async fn run(self) -> Result<()> {
        if !self.dir.is_dir() {
            return Err(eyre!(
                "Artifact directory {} not found. Build the contracts first.",
                style(self.dir.display()).yellow()
            ));
        }

        let config = ServerConfig {
            host: self.host.clone(),
            port: self.port,
            dir: self.dir.clone(),
        };

        println!("{} Starting artifact store...", style("→").blue());
        println!();
        println!(
            "  {} Artifacts: {}",
            style("◆").cyan(),
            style(format!("http://{}:{}/contracts", self.host, self.port))
                .underlined()
                .cyan()
        );
        println!("  {} Serving:   {}", style("◆").cyan(), self.dir.display());
        println!();
        println!("  Press {} to stop the server", style("Ctrl+C").yellow());
        println!();

        crate::server::run_server(config)
            .await
            .map_err(|e| eyre!("Server error: {}", e))?;

        Ok(())
    }
}
