use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;

use crate::analyzer::GraphBuilder;
use crate::cli::args::MapArgs;
use crate::cli::commands::Command;
use crate::config::MapperConfig;

use super::utils::finish_run;

pub struct MapCommand {
    args: MapArgs,
}

impl MapCommand {
    pub fn new(args: MapArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for MapCommand {
    async fn execute(&self) -> Result<()> {
        let config = MapperConfig::load_or_default(&self.args.root)?;

        let entry = self
            .args
            .entry
            .clone()
            .unwrap_or_else(|| config.entry.clone());
        let output = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| config.output.clone());

        let mut search_roots = config.search_roots.clone();
        search_roots.extend(self.args.search_roots.iter().cloned());

        let started = Instant::now();
        let mut builder = GraphBuilder::with_search_roots(&self.args.root, search_roots)?;
        let result = builder.build_from(&entry)?;

        let output = if self.args.stdout {
            None
        } else {
            Some(output.as_path())
        };
        finish_run(
            &result,
            output,
            self.args.diagnostics_output.as_deref(),
            self.args.strict,
            self.args.quiet,
            started.elapsed(),
        )
        .await
    }
}
