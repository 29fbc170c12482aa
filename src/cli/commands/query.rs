use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::cli::args::{OutputFormat, QueryArgs};
use crate::cli::commands::Command;

use super::utils::{load_map, normalize_key};

pub struct QueryCommand {
    args: QueryArgs,
}

impl QueryCommand {
    pub fn new(args: QueryArgs) -> Self {
        Self { args }
    }
}

#[async_trait]
impl Command for QueryCommand {
    async fn execute(&self) -> Result<()> {
        let graph = load_map(self.args.map.as_deref()).await?;
        let key = normalize_key(&self.args.file);

        if !graph.contains(&key) {
            bail!("'{}' is not in the dependency map", key);
        }

        let listing: Vec<String> = if self.args.dependents {
            graph.dependents_of(&key)
        } else {
            graph.dependencies_of(&key).unwrap_or_default().to_vec()
        };

        match self.args.format {
            OutputFormat::Plain => {
                for file in &listing {
                    println!("{}", file);
                }
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
        }

        Ok(())
    }
}
