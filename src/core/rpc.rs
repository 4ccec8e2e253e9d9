//! JSON-RPC envelope types.
//!
//! The request and response wrappers carried over the HTTP transport.
//! Responses always serialize an `id` (null when the request's id was
//! unknown) and carry exactly one of `result`/`error`; the constructors
//! below are the only way the rest of the crate builds responses, which
//! keeps that invariant in one place.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC request structure.
///
/// `id` is a string, a number, or null; `jsonrpc` is tolerated absent for
/// clients that send the bare `{id, method, params}` envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
    #[serde(default)]
    pub id: Value,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Check the envelope beyond what deserialization enforces.
    ///
    /// Returns a message describing the problem, or `None` when the
    /// request is well-formed.
    pub fn check(&self) -> Option<&'static str> {
        if let Some(version) = &self.jsonrpc
            && version != "2.0"
        {
            return Some("jsonrpc field must be \"2.0\"");
        }
        if self.method.is_empty() {
            return Some("method field cannot be empty");
        }
        None
    }
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Value, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Wrong HTTP verb on the RPC endpoint.
    pub fn method_not_allowed() -> Self {
        Self::error(Value::Null, -32000, "Method not allowed.")
    }

    /// Unparseable request body.
    pub fn parse_error() -> Self {
        Self::error(Value::Null, -32700, "Parse error")
    }

    /// Valid JSON that is not a request envelope.
    pub fn invalid_request(id: Value) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Method names no registered tool.
    pub fn method_not_found(id: Value) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Params failed schema validation.
    pub fn invalid_params(id: Value, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }

    /// Tool handler faulted.
    pub fn internal_error(id: Value) -> Self {
        Self::error(id, -32603, "Internal error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_bare_envelope() {
        let json = r#"{"id":1,"method":"get-current-weather-by-city","params":{"city":"London"}}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, json!(1));
        assert_eq!(request.method, "get-current-weather-by-city");
        assert!(request.check().is_none());
    }

    #[test]
    fn test_request_accepts_string_id_and_version() {
        let json = r#"{"jsonrpc":"2.0","id":"abc-123","method":"test"}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, json!("abc-123"));
        assert!(request.params.is_none());
        assert!(request.check().is_none());
    }

    #[test]
    fn test_request_missing_id_defaults_to_null() {
        let json = r#"{"method":"test"}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.id, Value::Null);
    }

    #[test]
    fn test_request_rejects_wrong_version() {
        let json = r#"{"jsonrpc":"1.0","id":1,"method":"test"}"#;
        let request: JsonRpcRequest = serde_json::from_str(json).unwrap();
        assert!(request.check().is_some());
    }

    #[test]
    fn test_request_missing_method_fails_to_parse() {
        let json = r#"{"id":1,"params":{}}"#;
        assert!(serde_json::from_str::<JsonRpcRequest>(json).is_err());
    }

    #[test]
    fn test_success_response_shape() {
        let response = JsonRpcResponse::success(json!(1), json!({"ok": true}));
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serialized,
            json!({"jsonrpc": "2.0", "id": 1, "result": {"ok": true}})
        );
    }

    #[test]
    fn test_error_response_keeps_null_id() {
        let response = JsonRpcResponse::method_not_allowed();
        let serialized = serde_json::to_value(&response).unwrap();
        assert_eq!(
            serialized,
            json!({
                "jsonrpc": "2.0",
                "id": null,
                "error": {"code": -32000, "message": "Method not allowed."}
            })
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(JsonRpcResponse::parse_error().error.unwrap().code, -32700);
        assert_eq!(
            JsonRpcResponse::invalid_request(Value::Null).error.unwrap().code,
            -32600
        );
        assert_eq!(
            JsonRpcResponse::method_not_found(json!(2)).error.unwrap().code,
            -32601
        );
        assert_eq!(
            JsonRpcResponse::invalid_params(json!(3), "bad").error.unwrap().code,
            -32602
        );
        assert_eq!(
            JsonRpcResponse::internal_error(json!(4)).error.unwrap().code,
            -32603
        );
    }

    #[test]
    fn test_result_and_error_are_exclusive() {
        let success = JsonRpcResponse::success(json!(1), json!(null));
        assert!(success.result.is_some() && success.error.is_none());

        let error = JsonRpcResponse::internal_error(json!(1));
        assert!(error.result.is_none() && error.error.is_some());
    }
}
