//! HTTP transport implementation.
//!
//! Binds the dispatcher to a single JSON-RPC-over-POST endpoint. The
//! per-request pipeline is: method check, body parse, dispatch, respond.
//! Dispatch-level outcomes (success or protocol error) are written with
//! HTTP 200; only transport-level failures use non-200 status codes:
//! 405 for a wrong HTTP verb, 400 for a body that could not be parsed
//! into a request envelope.

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, instrument, warn};

use super::{HttpConfig, TransportError, TransportResult};
use crate::core::McpServer;
use crate::core::rpc::{JsonRpcRequest, JsonRpcResponse};

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the router serving this transport.
    ///
    /// The server instance is moved into the router state here, once; no
    /// request handler reaches for ambient globals.
    pub fn router(config: &HttpConfig, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(
                &config.rpc_path,
                post(handle_rpc).fallback(handle_method_not_allowed),
            )
            .route("/health", get(health_check))
            .route("/", get(root_handler))
            .with_state(server);

        if config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = Self::router(&self.config, server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors {
                "enabled"
            } else {
                "disabled"
            }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Root handler - provides API info.
async fn root_handler(State(server): State<McpServer>) -> impl IntoResponse {
    Json(serde_json::json!({
        "name": server.name(),
        "version": server.version(),
        "transport": "HTTP",
        "protocol": "JSON-RPC 2.0",
        "documentation": "Send POST requests to the RPC endpoint with JSON-RPC messages"
    }))
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Non-POST verbs on the RPC endpoint.
///
/// GET, DELETE, and every other method get the same treatment: 405 with
/// a null-id error envelope, no handler invoked.
async fn handle_method_not_allowed() -> (StatusCode, Json<JsonRpcResponse>) {
    warn!("Rejected non-POST request to RPC endpoint");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(JsonRpcResponse::method_not_allowed()),
    )
}

/// Handle JSON-RPC requests.
///
/// The body is decoded here rather than through the `Json` extractor so
/// malformed input yields a JSON-RPC error envelope instead of a
/// framework error page.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    body: Bytes,
) -> (StatusCode, Json<JsonRpcResponse>) {
    let value: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Unparseable request body: {}", e);
            return (StatusCode::BAD_REQUEST, Json(JsonRpcResponse::parse_error()));
        }
    };

    // Recover the id for the error envelope when the shape is wrong but
    // the id itself is salvageable.
    let request: JsonRpcRequest = match serde_json::from_value(value.clone()) {
        Ok(request) => request,
        Err(e) => {
            warn!("Request is not an RPC envelope: {}", e);
            let id = value.get("id").cloned().unwrap_or(Value::Null);
            return (
                StatusCode::BAD_REQUEST,
                Json(JsonRpcResponse::invalid_request(id)),
            );
        }
    };

    if let Some(problem) = request.check() {
        warn!("Invalid request envelope: {}", problem);
        return (
            StatusCode::BAD_REQUEST,
            Json(JsonRpcResponse::error(request.id, -32600, problem)),
        );
    }

    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    let response = server.dispatch(request).await;
    (StatusCode::OK, Json(response))
}
