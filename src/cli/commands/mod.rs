use anyhow::Result;
use async_trait::async_trait;

pub mod config;
pub mod insights;
pub mod map;
pub mod query;
pub mod report;
pub mod scan;

/// Trait for CLI command implementations
#[async_trait]
pub trait Command {
    /// Execute the command with the given arguments
    async fn execute(&self) -> Result<()>;
}

/// Common utilities for command implementations
pub mod utils {
    use std::path::Path;
    use std::time::Duration;

    use anyhow::{bail, Context, Result};
    use colored::Colorize;
    use tokio::fs;

    use crate::analyzer::MapResult;
    use crate::core::constants::defaults;
    use crate::export::{self, RunSummary};
    use crate::graph::DependencyGraph;

    pub async fn read_stdin() -> Result<String> {
        use std::io::{self, Read};
        let mut buffer = String::new();
        let mut stdin = io::stdin();
        stdin.read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    /// Load a saved map: an explicit --map path wins, then piped stdin,
    /// then ./dependency_map.json from a previous run.
    pub async fn load_map(explicit: Option<&Path>) -> Result<DependencyGraph> {
        if let Some(path) = explicit {
            let content = fs::read_to_string(path)
                .await
                .with_context(|| format!("Failed to read map from {}", path.display()))?;
            return export::parse_map(&content);
        }

        if !atty::is(atty::Stream::Stdin) {
            let content = read_stdin().await?;
            return export::parse_map(&content);
        }

        let default_path = Path::new(defaults::MAP_OUTPUT);
        if default_path.is_file() {
            let content = fs::read_to_string(default_path)
                .await
                .with_context(|| format!("Failed to read map from {}", default_path.display()))?;
            return export::parse_map(&content);
        }

        bail!("No dependency map given: pass --map, pipe one in, or run 'map' first")
    }

    /// Shared tail of the map and scan commands: write or print the map,
    /// optionally persist diagnostics, echo diagnostics and the run summary
    /// to stderr, and enforce --strict.
    pub async fn finish_run(
        result: &MapResult,
        output: Option<&Path>,
        diagnostics_output: Option<&Path>,
        strict: bool,
        quiet: bool,
        elapsed: Duration,
    ) -> Result<()> {
        let rendered = export::render_map(&result.graph)?;
        match output {
            Some(path) => {
                fs::write(path, &rendered)
                    .await
                    .with_context(|| format!("Failed to write map to {}", path.display()))?;
                eprintln!("Dependency map written to {}", path.display());
            }
            None => print!("{rendered}"),
        }

        if let Some(path) = diagnostics_output {
            let rendered = export::render_diagnostics(&result.diagnostics)?;
            fs::write(path, &rendered)
                .await
                .with_context(|| format!("Failed to write diagnostics to {}", path.display()))?;
            eprintln!("Diagnostics written to {}", path.display());
        }

        for diagnostic in &result.diagnostics {
            eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
        }

        if !quiet {
            eprint!("{}", RunSummary::from_result(result, elapsed).render());
        }

        if strict && !result.diagnostics.is_empty() {
            bail!(
                "{} diagnostics recorded and --strict is set",
                result.diagnostics.len()
            );
        }

        Ok(())
    }

    /// Normalize user input into a map key: forward slashes, no leading
    /// ./ and no .py suffix.
    pub fn normalize_key(input: &str) -> String {
        let mut key = input.replace('\\', "/");
        if let Some(stripped) = key.strip_prefix("./") {
            key = stripped.to_string();
        }
        if let Some(stripped) = key.strip_suffix(".py") {
            key = stripped.to_string();
        }
        key
    }

}
