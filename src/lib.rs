//! Weather MCP Server Library
//!
//! A stateless Model Context Protocol (MCP) server exposing placeholder
//! weather tools over a single HTTP JSON-RPC endpoint.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the JSON-RPC envelope types,
//!   the dispatcher, and the HTTP transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Schema-typed tools callable by clients, with their
//!     registry and validator
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::core::{Config, McpServer};
//! use weather_mcp_server::domains::tools::ToolRegistry;
//! use weather_mcp_server::domains::tools::definitions::CurrentWeatherTool;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut registry = ToolRegistry::new();
//!     registry.register(CurrentWeatherTool::definition())?;
//!     let server = McpServer::new(Config::from_env(), registry)?;
//!     // Hand the server to the HTTP transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
