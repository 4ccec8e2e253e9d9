//! Tools domain module.
//!
//! Tools are executable functions that clients call by name through the
//! RPC endpoint. Each tool carries a declarative parameter schema; the
//! dispatcher validates params against it before the handler ever runs.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Central tool registry and the `ToolHandler` trait
//! - `schema.rs` - Parameter schema value type and validator
//! - `result.rs` - Tool result content blocks
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define `NAME`, `DESCRIPTION`, `schema()` and a `ToolHandler` impl
//! 3. Export in `definitions/mod.rs`
//! 4. Register the definition in `main.rs`

pub mod definitions;
mod error;
pub mod registry;
pub mod result;
pub mod schema;

pub use error::ToolError;
pub use registry::{ToolDefinition, ToolHandler, ToolRegistry};
pub use result::{ContentBlock, ToolResult};
pub use schema::{FieldKind, Schema, ValidatedParams, ValidationError};
