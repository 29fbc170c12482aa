use std::time::Instant;

use anyhow::Result;
use async_trait::async_trait;

use crate::analyzer::GraphBuilder;
use crate::cli::args::ScanArgs;
use crate::cli::commands::Command;
use crate::config::MapperConfig;
use crate::project::ProjectScanner;

use super::utils::finish_run;

pub struct ScanCommand {
    args: ScanArgs,
}

impl ScanCommand {
    pub fn new(args: ScanArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for ScanCommand {
    async fn execute(&self) -> Result<()> {
        let config = MapperConfig::load_or_default(&self.args.root)?;

        let output = self
            .args
            .output
            .clone()
            .unwrap_or_else(|| config.output.clone());
        let ignored = if self.args.ignore.is_empty() {
            config.ignored_dirs.clone()
        } else {
            self.args.ignore.clone()
        };

        let mut search_roots = config.search_roots.clone();
        search_roots.extend(self.args.search_roots.iter().cloned());

        let started = Instant::now();
        let mut builder = GraphBuilder::with_search_roots(&self.args.root, search_roots)?;
        let scanner = ProjectScanner::with_ignored(ignored);
        let result = builder.build_project(&scanner)?;

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
