use anyhow::Result;
use pydepmap::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run_cli().await
}
