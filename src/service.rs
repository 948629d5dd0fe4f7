use anyhow::Result;
use chrono::Local;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::client::KmaClient;
use crate::config::Config;
use crate::error::ForecastError;
use crate::forecaster::Forecaster;
use crate::models::GridRequest;

/// Main weather service that handles MCP requests
#[derive(Clone)]
pub struct Weather {
    forecaster: Forecaster<KmaClient>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service instance
    pub fn new(config: Config) -> Result<Self> {
        let client = KmaClient::new(config.timeout)?;

        Ok(Self {
            forecaster: Forecaster::new(client, config),
            tool_router: Self::tool_router(),
        })
    }
}

/// Turns an operation outcome into tool output. Failures come back as text
/// flagged as a tool error, never as a protocol error.
fn into_tool_result(tool: &str, outcome: Result<String, ForecastError>) -> CallToolResult {
    match outcome {
        Ok(report) => CallToolResult::success(vec![Content::text(report)]),
        Err(e) => {
            tracing::warn!("{} failed: {}", tool, e);
            CallToolResult::error(vec![Content::text(e.to_string())])
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-kma-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the Korea Meteorological Administration \
                short-term forecast API. Locations are given as KMA grid coordinates (nx, ny)."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets the short-term forecast for a KMA grid point
    #[tool(description = "Get the short-term forecast for the next 8 hourly slots at a KMA grid point. Provide the KMA grid coordinates (e.g., nx: 60, ny: 127 for Jung-gu, Seoul).")]
    async fn get_forecast(
        &self,
        Parameters(request): Parameters<GridRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting forecast for grid: {}, {}", request.nx, request.ny);

        let outcome = self
            .forecaster
            .forecast_series(request.nx, request.ny, Local::now().naive_local())
            .await;

        Ok(into_tool_result("get_forecast", outcome))
    }

    /// Gets the current weather for a KMA grid point
    #[tool(description = "Get the current weather at a KMA grid point, taken from the earliest slot of the latest forecast. Provide the KMA grid coordinates (e.g., nx: 60, ny: 127 for Jung-gu, Seoul).")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<GridRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting current weather for grid: {}, {}", request.nx, request.ny);

        let outcome = self
            .forecaster
            .current_weather(request.nx, request.ny, Local::now().naive_local())
            .await;

        Ok(into_tool_result("get_current_weather", outcome))
    }
}
