//! reposeek - Entry Point
//!
//! Loads configuration, installs logging, wires the providers and runs one
//! subcommand. The response envelope is printed to stdout as JSON; logs go
//! to stderr. A failed operation exits with status 1.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use reposeek::cli::{Cli, execute};
use reposeek::infrastructure::{AppContext, ConfigLoader, init_logging};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("loading configuration")?;
    init_logging(&config.logging).context("initializing logging")?;

    let context = AppContext::from_config(&config).context("building providers")?;
    let response = execute(&context, cli.command).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&response).context("serializing response")?
    );

    Ok(if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
