use thiserror::Error;

/// Everything that can go wrong between a tool call and its report.
///
/// The `Display` text of each variant is what the caller gets back, so the
/// messages are kept distinct per failure kind.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// No service key configured
    #[error("API key is not configured. Set the WEATHER_API_KEY environment variable.")]
    MissingCredential,

    /// Network failure, timeout or non-2xx status. Holds the error without
    /// its URL, since the query string carries the service key.
    #[error("Weather API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Body is not JSON or lacks the expected structure
    #[error("Weather API returned an invalid response: {0}")]
    MalformedResponse(String),

    /// `resultCode` other than "00"
    #[error("API error: {message} (code: {code})")]
    Upstream { code: String, message: String },

    /// No forecast records for the requested grid point
    #[error("no data available")]
    EmptyDataset,
}

impl From<reqwest::Error> for ForecastError {
    fn from(e: reqwest::Error) -> Self {
        ForecastError::Transport(e.without_url())
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(e: serde_json::Error) -> Self {
        ForecastError::MalformedResponse(e.to_string())
    }
}
