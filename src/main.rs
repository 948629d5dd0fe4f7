use anyhow::Result;
use mcp_kma_weather_server::config::Config;
use mcp_kma_weather_server::constants::API_KEY_VAR;
use mcp_kma_weather_server::Weather;
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_kma_weather_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MCP weather server");

    let config = Config::from_env();
    if config.api_key.is_some() {
        tracing::info!("API key configured");
    } else {
        tracing::warn!("{} is not set, tool calls will fail until it is", API_KEY_VAR);
    }

    let weather = Weather::new(config)?;
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
