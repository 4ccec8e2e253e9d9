//! Current weather tool.
//!
//! Returns placeholder conditions for the requested city. The payload is a
//! stand-in for a real weather provider; any deterministic or I/O-bound
//! computation could sit behind the same handler contract.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domains::tools::ToolError;
use crate::domains::tools::registry::{ToolDefinition, ToolHandler};
use crate::domains::tools::result::ToolResult;
use crate::domains::tools::schema::{FieldKind, Schema, ValidatedParams};

/// Current weather tool implementation.
#[derive(Debug, Clone)]
pub struct CurrentWeatherTool;

impl CurrentWeatherTool {
    /// Tool name, the RPC method clients call.
    pub const NAME: &'static str = "get-current-weather-by-city";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current weather information by city";

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

    /// Build the conditions payload for a city.
    fn report(city: &str) -> ToolResult {
        let payload = json!({
            "cityName": city,
            "currentConditions": "Sun",
            "temperature": 9,
            "windSpeed": 17,
            "windDirection": "South easterly",
            "windChillFactor": 7,
        });
        ToolResult::text(payload.to_string())
    }
}

#[async_trait::async_trait]
impl ToolHandler for CurrentWeatherTool {
    async fn invoke(&self, params: ValidatedParams) -> Result<ToolResult, ToolError> {
        let city = params
            .get("city")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ToolError::internal("validated params missing 'city'"))?;

        info!("Reporting current weather for {}", city);
        Ok(Self::report(city))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::result::ContentBlock;

    #[tokio::test]
    async fn test_report_contains_city_and_conditions() {
        let params = CurrentWeatherTool::schema()
            .validate(Some(&json!({ "city": "London" })))
            .unwrap();
        let result = CurrentWeatherTool.invoke(params).await.unwrap();

        let ContentBlock::Text { text } = &result.content[0];
        let payload: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["cityName"], "London");
        assert_eq!(payload["currentConditions"], "Sun");
        assert_eq!(payload["temperature"], 9);
        assert_eq!(payload["windSpeed"], 17);
        assert_eq!(payload["windDirection"], "South easterly");
        assert_eq!(payload["windChillFactor"], 7);
    }

    #[test]
    fn test_schema_requires_city() {
        let err = CurrentWeatherTool::schema()
            .validate(Some(&json!({})))
            .unwrap_err();
        assert!(err.to_string().contains("city"));
    }
}
