pub mod args;
pub mod commands;

use anyhow::Result;
use clap::Parser;

use crate::cli::args::{
    Cli, Commands, InsightsArgs, MapArgs, QueryArgs, ReportArgs, ScanArgs,
};
use crate::cli::commands::config::ConfigCommand;
use crate::cli::commands::insights::InsightsCommand;
use crate::cli::commands::map::MapCommand;
use crate::cli::commands::query::QueryCommand;
use crate::cli::commands::report::ReportCommand;
use crate::cli::commands::scan::ScanCommand;
use crate::cli::commands::Command;

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(format!("pydepmap={}", log_level))
        .init();

    match cli.command {
        Commands::Map {
            root,
            entry,
            search_roots,
            output,
            diagnostics_output,
            stdout,
            strict,
            quiet,
        } => {
            MapCommand::new(MapArgs {
                root,
                entry,
                search_roots,
                output,
                diagnostics_output,
                stdout,
                strict,
                quiet,
            })
            .execute()
            .await
        }

        Commands::Scan {
            root,
            search_roots,
            ignore,
            output,
            diagnostics_output,
            stdout,
            strict,
            quiet,
        } => {
            ScanCommand::new(ScanArgs {
                root,
                search_roots,
                ignore,
                output,
                diagnostics_output,
                stdout,
                strict,
                quiet,
            })
            .execute()
            .await
        }

        Commands::Query {
            file,
            map,
            dependents,
            format,
        } => {
            QueryCommand::new(QueryArgs {
                file,
                map,
                dependents,
                format,
            })
            .execute()
            .await
        }

        Commands::Report { map, output, root } => {
            ReportCommand::new(ReportArgs { map, output, root })
                .execute()
                .await
        }

        Commands::Insights { map, root, format } => {
            InsightsCommand::new(InsightsArgs { map, root, format })
                .execute()
                .await
        }

        Commands::Config { action } => ConfigCommand::new(action).execute().await,
    }
}
