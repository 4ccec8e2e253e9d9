//! MCP server implementation - the request dispatcher.
//!
//! The server owns the tool registry and turns each parsed RPC request
//! into exactly one RPC response. The transport layer never inspects
//! requests beyond parsing; everything protocol-level happens here.
//!
//! Tools are defined in `domains/tools/definitions/` with one file per
//! tool and registered in `main.rs`. Adding a new tool does not require
//! modifying this file.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::config::Config;
use super::rpc::{JsonRpcRequest, JsonRpcResponse};
use crate::domains::tools::ToolRegistry;

/// The main MCP server handler.
///
/// Cheap to clone; all state is behind `Arc` and read-only after startup,
/// so one instance serves every connection without locks.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registered tools, immutable after startup.
    registry: Arc<ToolRegistry>,
}

impl McpServer {
    /// Reserved method for tool introspection.
    pub const LIST_METHOD: &'static str = "tools/list";

    /// Create a new MCP server over a fully built registry.
    ///
    /// Fails when a registered tool shadows the reserved introspection
    /// method; like duplicate registration, that is a startup-fatal
    /// programmer error.
    pub fn new(config: Config, registry: ToolRegistry) -> super::Result<Self> {
        if registry.lookup(Self::LIST_METHOD).is_some() {
            return Err(super::Error::config(format!(
                "tool name collides with reserved method: {}",
                Self::LIST_METHOD
            )));
        }

        Ok(Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// List all registered tools with their input schemas.
    pub fn list_tools(&self) -> serde_json::Value {
        let tools: Vec<_> = self
            .registry
            .definitions()
            .into_iter()
            .map(|d| {
                serde_json::json!({
                    "name": d.name,
                    "description": d.description,
                    "inputSchema": d.schema.to_json_schema(),
                })
            })
            .collect();

        serde_json::json!({ "tools": tools })
    }

    /// Dispatch a parsed RPC request to the named tool.
    ///
    /// Always returns a response envelope; tool faults are logged here and
    /// reported to the client only as an internal-error code, never with
    /// the underlying detail.
    pub async fn dispatch(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let JsonRpcRequest {
            id, method, params, ..
        } = request;

        if method == Self::LIST_METHOD {
            return JsonRpcResponse::success(id, self.list_tools());
        }

        let Some(definition) = self.registry.lookup(&method) else {
            warn!("Unknown method: {}", method);
            return JsonRpcResponse::method_not_found(id);
        };

        let params = match definition.schema.validate(params.as_ref()) {
            Ok(params) => params,
            Err(violations) => {
                warn!("Invalid params for {}: {}", method, violations);
                return JsonRpcResponse::invalid_params(id, violations.to_string());
            }
        };

        info!("Calling tool: {}", method);
        match definition.handler.invoke(params).await {
            Ok(result) => match serde_json::to_value(&result) {
                Ok(value) => JsonRpcResponse::success(id, value),
                Err(e) => {
                    error!("Failed to serialize result of {}: {}", method, e);
                    JsonRpcResponse::internal_error(id)
                }
            },
            Err(fault) => {
                error!("Tool {} faulted: {}", method, fault);
                JsonRpcResponse::internal_error(id)
            }
        }
    }
}
