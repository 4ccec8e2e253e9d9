//! Tool call results.
//!
//! A tool yields an ordered sequence of content blocks. Text is the only
//! block kind the weather tools produce today; the enum is tagged so other
//! independently renderable kinds can be added without touching the
//! dispatch pipeline.

use serde::{Deserialize, Serialize};

/// The result of a successful tool invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Ordered content blocks making up the result.
    pub content: Vec<ContentBlock>,
}

impl ToolResult {
    /// Create a result holding a single text block.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }
}

/// A single renderable block of tool output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text content.
    Text { text: String },
}
