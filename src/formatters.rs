use crate::aggregate::{AttributeBundle, ForecastTable};
use crate::constants::{
    HUMIDITY, PRECIPITATION_PROBABILITY, PRECIPITATION_TYPE, SKY, TEMPERATURE, WIND_SPEED,
};
use crate::error::ForecastError;
use crate::issue_time::IssueTime;

/// Label for codes the lexicon does not know and for missing attributes
pub const UNKNOWN: &str = "unknown";

/// Line placed between two forecast blocks
pub const SEPARATOR: &str = "\n---\n";

/// Converts a KMA sky condition (SKY) code to a label
pub fn sky_label(code: Option<&str>) -> &'static str {
    match code {
        Some("1") => "Clear",
        Some("3") => "Mostly cloudy",
        Some("4") => "Overcast",
        _ => UNKNOWN,
    }
}

/// Converts a KMA precipitation type (PTY) code to a label
pub fn precipitation_label(code: Option<&str>) -> &'static str {
    match code {
        Some("0") => "None",
        Some("1") => "Rain",
        Some("2") => "Rain/Snow",
        Some("3") => "Snow",
        Some("4") => "Showers",
        _ => UNKNOWN,
    }
}

/// Raw value with its unit; a missing value is replaced by the placeholder
fn with_unit(bundle: &AttributeBundle, category: &str, unit: &str) -> String {
    format!("{}{}", bundle.get(category).unwrap_or(UNKNOWN), unit)
}

fn format_attributes(bundle: &AttributeBundle) -> String {
    format!(
        "Temperature: {}\nSky: {}\nPrecipitation: {}\nPrecipitation probability: {}\nHumidity: {}\nWind speed: {}\n",
        with_unit(bundle, TEMPERATURE, "\u{00b0}C"),
        sky_label(bundle.get(SKY)),
        precipitation_label(bundle.get(PRECIPITATION_TYPE)),
        with_unit(bundle, PRECIPITATION_PROBABILITY, "%"),
        with_unit(bundle, HUMIDITY, "%"),
        with_unit(bundle, WIND_SPEED, "m/s"),
    )
}

/// Renders the first `limit` slots of `table`, earliest first, one block per
/// slot. An empty table gives no blocks.
pub fn render_forecast_series(table: &ForecastTable, limit: usize) -> Vec<String> {
    table
        .iter()
        .take(limit)
        .map(|(key, bundle)| format!("\n{}:\n{}", key.label(), format_attributes(bundle)))
        .collect()
}

/// Joins forecast blocks into one report
pub fn join_blocks(blocks: &[String]) -> String {
    blocks.join(SEPARATOR)
}

/// Renders the earliest slot of `table` as the current weather, headed by
/// the issue the data came from
pub fn render_current_snapshot(
    table: &ForecastTable,
    issue: &IssueTime,
) -> Result<String, ForecastError> {
    let (_, bundle) = table.first().ok_or(ForecastError::EmptyDataset)?;

    Ok(format!(
        "Current weather (issued {} {})\n{}",
        issue.base_date(),
        issue.base_time(),
        format_attributes(bundle)
    ))
}
