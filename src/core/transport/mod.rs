//! Transport layer for the MCP server.
//!
//! A single transport is supported: HTTP with JSON-RPC over POST
//! requests. The transport handles the connection lifecycle and HTTP
//! status mapping, and delegates message processing to the server's
//! dispatcher.

mod config;
mod error;

pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
