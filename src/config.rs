use std::env;
use std::time::Duration;

use crate::constants::{
    API_KEY_VAR, FORECAST_URL_VAR, KMA_FORECAST_URL, REQUEST_TIMEOUT_SECS, TIMEOUT_VAR,
};

/// Runtime settings read from the environment at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// Data portal service key; checked per call, not at startup
    pub api_key: Option<String>,
    pub forecast_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            forecast_url: KMA_FORECAST_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads `WEATHER_API_KEY`, `KMA_FORECAST_URL` and `KMA_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let timeout = match non_empty(TIMEOUT_VAR) {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        TIMEOUT_VAR,
                        raw,
                        REQUEST_TIMEOUT_SECS
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            api_key: non_empty(API_KEY_VAR),
            forecast_url: non_empty(FORECAST_URL_VAR).unwrap_or(defaults.forecast_url),
            timeout,
        }
    }
}
