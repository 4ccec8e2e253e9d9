//! Weather forecast tool.
//!
//! Returns a placeholder two-day forecast for the requested city.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domains::tools::ToolError;
use crate::domains::tools::registry::{ToolDefinition, ToolHandler};
use crate::domains::tools::result::ToolResult;
use crate::domains::tools::schema::{FieldKind, Schema, ValidatedParams};

/// Weather forecast tool implementation.
#[derive(Debug, Clone)]
pub struct WeatherForecastTool;

impl WeatherForecastTool {
    /// Tool name, the RPC method clients call.
    pub const NAME: &'static str = "get-weather-forecast-by-city";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get weather forecast information by city";

    /// Declared parameter schema.
    pub fn schema() -> Schema {
        Schema::new().field("city", FieldKind::String, "Name of the city")
    }

    /// The complete registry entry for this tool.
    pub fn definition() -> ToolDefinition {
        ToolDefinition {
            name: Self::NAME,
            description: Self::DESCRIPTION,
            schema: Self::schema(),
            handler: Arc::new(Self),
        }
    }

    /// Build the forecast payload for a city.
    fn report(city: &str) -> ToolResult {
        let payload = json!({
            "cityName": city,
            "forecast": [
                {
                    "conditions": "Sun",
                    "temperature": 12,
                    "windChillFactor": 11,
                    "windDirection": "Easterly",
                    "windSpeed": 8,
                },
                {
                    "conditions": "Cloud",
                    "temperature": 19,
                    "windChillFactor": 16,
                    "windDirection": "Southerly",
                    "windSpeed": 13,
                },
            ],
        });
        ToolResult::text(payload.to_string())
    }
}

#[async_trait::async_trait]
impl ToolHandler for WeatherForecastTool {
    async fn invoke(&self, params: ValidatedParams) -> Result<ToolResult, ToolError> {
        let city = params
            .get("city")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::internal("validated params missing 'city'"))?;

        info!("Reporting weather forecast for {}", city);
        Ok(Self::report(city))
    }
}
