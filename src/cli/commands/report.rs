use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;

use crate::cli::args::ReportArgs;
use crate::cli::commands::Command;
use crate::export::render_report;
use crate::graph::insights;

use super::utils::load_map;

pub struct ReportCommand {
    args: ReportArgs,
}

impl ReportCommand {
    pub fn new(args: ReportArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ReportCommand {
    async fn execute(&self) -> Result<()> {
        let graph = load_map(self.args.map.as_deref()).await?;
        let unused = insights::identify_unused_files(&graph, &self.args.root);
        let page = render_report(&graph, &unused);

        fs::write(&self.args.output, page)
            .await
            .with_context(|| format!("Failed to write report to {}", self.args.output.display()))?;
        eprintln!(
            "Dependency report written to {}",
            self.args.output.display()
        );

        Ok(())
    }
}
