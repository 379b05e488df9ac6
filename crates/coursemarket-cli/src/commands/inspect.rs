//! Show what an artifact records

use clap::Args;
use color_eyre::eyre::Result;
use console::style;
use coursemarket_core::{event_names, Artifact, ArtifactSource, ParsedFunctions};
use serde::Serialize;

use crate::commands::load::print_functions;
use crate::config::ProjectConfig;
use crate::source::ArtifactLocation;

/// Show the deployments and interface recorded in an artifact
#[derive(Args)]
pub struct InspectCommand {
    /// Contract name, as published at /contracts/<NAME>.json
    pub name: String,

    /// Artifact store URL or directory
    #[arg(long)]
    pub artifacts: Option<String>,

    /// Print a JSON summary instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct DeploymentRow {
    network_id: String,
    address: String,
}

#[derive(Serialize)]
struct Summary {
    name: String,
    deployments: Vec<DeploymentRow>,
    functions: ParsedFunctions,
    events: Vec<String>,
}

impl Summary {
    fn new(name: &str, artifact: &Artifact) -> Self {
        Self {
            name: artifact
                .contract_name
                .clone()
                .unwrap_or_else(|| name.to_string()),
            deployments: artifact
                .networks
                .iter()
                .map(|(id, d)| DeploymentRow {
                    network_id: id.to_string(),
                    address: d.address.to_string(),
                })
                .collect(),
            functions: artifact.functions(),
            events: event_names(&artifact.abi),
        }
    }
}

impl InspectCommand {
    pub async fn run(self) -> Result<()> {
        let config = ProjectConfig::load()?;
        let location = ArtifactLocation::parse(&config.artifacts(self.artifacts.as_deref())?)?;

        let artifact = location.fetch(&self.name).await?;
        let summary = Summary::new(&self.name, &artifact);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        println!("{}", style(&summary.name).bold());
        println!();

        if summary.deployments.is_empty() {
            println!("Not deployed on any network.");
        } else {
            println!("{:<12} {:<44}", "Network", "Address");
            println!("{}", "-".repeat(56));
            for d in &summary.deployments {
                println!("{:<12} {:<44}", d.network_id, d.address);
            }
        }

        print_functions(&summary.functions);

        if !summary.events.is_empty() {
            println!();
            println!("{}:", style("Events").bold());
            for event in &summary.events {
                println!("  {}", event);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let artifact = Artifact::from_json(
            "CourseMarketplace",
            r#"{
                "abi": [
                    {
                        "type": "event",
                        "name": "CoursePurchased",
                        "inputs": [],
                        "anonymous": false
                    }
                ],
                "networks": {
                    "5777": {"address": "0x5FbDB2315678afecb367f032d93F642f64180aa3"}
                }
            }"#,
        )
        .unwrap();

        let summary = Summary::new("CourseMarketplace", &artifact);

        assert_eq!(summary.name, "CourseMarketplace");
        assert_eq!(summary.deployments.len(), 1);
        assert_eq!(summary.deployments[0].network_id, "5777");
        assert_eq!(
            summary.deployments[0].address,
            "0x5FbDB2315678afecb367f032d93F642f64180aa3"
        );
        assert!(summary.functions.is_empty());
        assert_eq!(summary.events, vec!["CoursePurchased".to_string()]);
    }
}
