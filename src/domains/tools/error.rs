//! Tool-specific error types.

use thiserror::Error;

/// Errors a tool handler can report.
///
/// Handlers never see invalid params (the dispatcher validates first), so
/// every variant here is an execution-time fault. The dispatcher maps all
/// of them to an internal-error envelope and keeps the detail out of the
/// client response.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool ran but could not produce a result.
    #[error("Execution failed: {0}")]
    ExecutionFailed(String),

    /// An invariant was broken inside the tool.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "execution failed" error.
    pub fn execution_failed(msg: impl Into<String>) -> Self {
        Self::ExecutionFailed(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
