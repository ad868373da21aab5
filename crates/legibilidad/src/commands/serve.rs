//! Serve command: MCP server on stdio.

use anyhow::Context;
use clap::Args;
use legibilidad_core::config::Config;
use rmcp::ServiceExt;
use rmcp::transport::stdio;
use tracing::{info, instrument};

use crate::server::ReadabilityServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(_args: ServeArgs, config: &Config) -> anyhow::Result<()> {
    let server = ReadabilityServer::from_config(config);
    info!(
        formulas = ?config.formula_ids(),
        max_input_bytes = ?config.input_limit(),
        "starting MCP server on stdio"
    );

    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server")?;
    let reason = service.waiting().await.context("MCP server task failed")?;

    info!(?reason, "MCP server stopped");
    Ok(())
}
