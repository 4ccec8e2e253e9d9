//! MCP Server Entry Point
//!
//! This is the main entry point for the weather MCP server. It initializes
//! logging, loads configuration, registers the tools, and starts the HTTP
//! transport. Duplicate tool registration aborts startup before the
//! listener binds.

use anyhow::Result;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use weather_mcp_server::core::{Config, HttpTransport, McpServer};
use weather_mcp_server::domains::tools::ToolRegistry;
use weather_mcp_server::domains::tools::definitions::{CurrentWeatherTool, WeatherForecastTool};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging
    init_logging(&config.logging.level);

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Register the tools; duplicates are fatal here, before serving traffic
    let mut registry = ToolRegistry::new();
    registry.register(CurrentWeatherTool::definition())?;
    registry.register(WeatherForecastTool::definition())?;

    let transport = HttpTransport::new(config.transport.clone());
    let server = McpServer::new(config, registry)?;

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Configures tracing with the specified log level and format.
fn init_logging(level: &str) {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .init();
}
