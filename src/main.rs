//! FitPulse
//!
//! An MCP server for nutrition targets and fitness reference data.

use std::sync::Arc;

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use fitpulse::build_info;
use fitpulse::config::{ServerConfig, DEFAULT_LOG_DIRECTIVE};
use fitpulse::mcp::FitPulseService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging goes to stderr so stdout stays reserved for MCP stdio
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = ServerConfig::from_env();
    let catalog = config.load_catalog()?;
    let catalog_source = match &config.catalog_path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };

    build_info::print_startup_banner(&catalog_source, &catalog);

    let service = FitPulseService::new(Arc::new(catalog), catalog_source);

    tracing::info!("Starting MCP server on stdio...");
    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
