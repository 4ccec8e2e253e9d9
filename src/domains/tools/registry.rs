//! Tool Registry - central registration and lookup for all tools.
//!
//! Tools are registered once at startup and the registry is immutable
//! afterwards, so it can be shared behind an `Arc` and read concurrently
//! without locks. Handlers are stored as first-class values behind the
//! [`ToolHandler`] trait, so they can be swapped or mocked without touching
//! the registry itself.

use std::collections::HashMap;
use std::sync::Arc;

use super::ToolError;
use super::result::ToolResult;
use super::schema::{Schema, ValidatedParams};
use crate::core::{Error, Result};

/// Capability interface implemented by every tool.
///
/// `invoke` only ever receives params that satisfied the tool's schema.
/// It may perform asynchronous work; the dispatcher awaits it without
/// blocking other in-flight requests.
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync {
    /// Execute the tool with validated params.
    async fn invoke(&self, params: ValidatedParams) -> std::result::Result<ToolResult, ToolError>;
}

/// A registered tool: name, description, parameter schema, and handler.
#[derive(Clone)]
pub struct ToolDefinition {
    /// Unique name, the RPC method clients call.
    pub name: &'static str,

    /// Description shown to clients through tool listing.
    pub description: &'static str,

    /// Declared parameter shape.
    pub schema: Schema,

    /// The handler invoked with validated params.
    pub handler: Arc<dyn ToolHandler>,
}

/// Tool registry - maps tool names to their definitions.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<&'static str, ToolDefinition>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool definition.
    ///
    /// Duplicate names are a programmer error; registration fails and the
    /// caller (startup code) is expected to abort before serving traffic.
    pub fn register(&mut self, definition: ToolDefinition) -> Result<()> {
        if self.tools.contains_key(definition.name) {
            return Err(Error::config(format!(
                "duplicate tool registration: {}",
                definition.name
            )));
        }
        self.tools.insert(definition.name, definition);
        Ok(())
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Option<&ToolDefinition> {
        self.tools.get(name)
    }

    /// All registered definitions, in name order.
    ///
    /// Sorted so tool listings are stable across runs.
    pub fn definitions(&self) -> Vec<&ToolDefinition> {
        let mut definitions: Vec<_> = self.tools.values().collect();
        definitions.sort_by_key(|d| d.name);
        definitions
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
