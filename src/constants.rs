/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-kma-weather-server/0.1.0";

/// KMA short-term (village) forecast endpoint on the public data portal
pub const KMA_FORECAST_URL: &str =
    "http://apis.data.go.kr/1360000/VilageFcstInfoService_2.0/getVilageFcst";

/// Environment variable holding the data portal service key
pub const API_KEY_VAR: &str = "WEATHER_API_KEY";

/// Environment variable overriding the forecast endpoint
pub const FORECAST_URL_VAR: &str = "KMA_FORECAST_URL";

/// Environment variable overriding the request timeout, in seconds
pub const TIMEOUT_VAR: &str = "KMA_TIMEOUT_SECS";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Rows requested per call; large enough to cover every slot of one issue
pub const NUM_OF_ROWS: u32 = 1000;

/// `resultCode` the API reports on success
pub const SUCCESS_CODE: &str = "00";

/// Number of forecast slots shown by the forecast tool
pub const FORECAST_SLOTS: usize = 8;

// Category codes used in reports
pub const TEMPERATURE: &str = "TMP";
pub const SKY: &str = "SKY";
pub const PRECIPITATION_TYPE: &str = "PTY";
pub const PRECIPITATION_PROBABILITY: &str = "POP";
pub const HUMIDITY: &str = "REH";
pub const WIND_SPEED: &str = "WSD";
