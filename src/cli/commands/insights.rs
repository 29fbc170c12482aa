use anyhow::Result;
use async_trait::async_trait;

use crate::cli::args::{InsightsArgs, OutputFormat};
use crate::cli::commands::Command;
use crate::graph::insights;

use super::utils::load_map;

pub struct InsightsCommand {
    args: InsightsArgs,
}

impl InsightsCommand {
    pub fn new(args: InsightsArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for InsightsCommand {
    async fn execute(&self) -> Result<()> {
        let graph = load_map(self.args.map.as_deref()).await?;
        let insights = insights::analyze(&graph, &self.args.root);

        match self.args.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&insights)?),
            OutputFormat::Plain => {
                if insights.systems.is_empty() {
                    println!("No systems found: no two files are connected by imports.");
                } else {
                    println!("Systems ({}):", insights.systems.len());
                    for system in &insights.systems {
                        println!(
                            "  {}. {} ({} files)",
                            system.id,
                            system.name,
                            system.files.len()
                        );
                        for file in &system.files {
                            println!("     {}", file);
                        }
                    }
                }

                if insights.unused_files.is_empty() {
                    println!("No unused files.");
                } else {
                    println!("Unused files ({}):", insights.unused_files.len());
                    for file in &insights.unused_files {
                        println!("  {}", file);
                    }
                }
            }
        }

        Ok(())
    }
}
